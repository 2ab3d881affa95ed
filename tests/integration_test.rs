use std::fs;

use dcaspt2gen::drivers::spinor_classification::{
    SpinorClassificationDriver, SpinorClassificationParams,
};
use dcaspt2gen::drivers::Dcaspt2GenDriver;
use dcaspt2gen::interfaces::input::Input;
use dcaspt2gen::io::settings::Settings;
use dcaspt2gen::io::AppDirInfo;

#[test]
fn test_n2_job_generates_both_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let dirs = AppDirInfo::in_dir(dir.path().join("appdir")).unwrap();
    let settings = Settings::default();
    let caspt2_path = dir.path().join("caspt2.inp");

    let input = Input::from_yaml_file("tests/jobs/n2.yml").unwrap();
    input
        .handle(&dirs, &settings, Some(caspt2_path.as_path()))
        .unwrap();

    let caspt2 = fs::read_to_string(&caspt2_path).unwrap();
    assert_eq!(
        caspt2,
        "ncore\n0\n\
         ninact\n2\n\
         nact\n6\n\
         nsec\n2\n\
         nbas\n10\n\
         nroot\n1\n\
         selectroot\n1\n\
         totsym\n2\n\
         diracver\n21\n\
         ras1\n3 4\n1\n\
         ras2\n5 6\n\
         ras3\n7 8\n2\n"
    );

    let ivo = fs::read_to_string(&dirs.ivo_input_file).unwrap();
    assert_eq!(
        ivo,
        "ninact\n0\n\
         nact\n8\n\
         nsec\n2\n\
         nelec\n8\n\
         noccg\n2\n\
         noccu\n2\n\
         nvcutg\n0\n\
         nvcutu\n1\n\
         totsym\n2\n\
         diracver\n21\n\
         end\n"
    );
}

#[test]
fn test_n2_job_moltra_recommendation() {
    let input = Input::from_yaml_file("tests/jobs/n2.yml").unwrap();
    let table = input.table();
    let params = SpinorClassificationParams::default();
    let mut driver = SpinorClassificationDriver::builder()
        .parameters(&params)
        .table(&table)
        .header(Some(&input.header))
        .build()
        .unwrap();
    driver.run().unwrap();
    let classification = driver.result().unwrap();

    // The used-index map is keyed by the per-symmetry molecular-orbital index of each row, not by
    // the global spinor indices, and the `not used` E1u row contributes neither to the ranges nor
    // to the basis count.
    assert_eq!(classification.counts.n_active(), 6);
    assert_eq!(classification.counts.n_basis(), 10);
    assert_eq!(
        classification.moltra_recommendation(),
        "E1g 1 3 5\nE1u 2 4"
    );
}

#[test]
fn test_n2_job_rederivation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let dirs = AppDirInfo::in_dir(dir.path().join("appdir")).unwrap();
    let settings = Settings::default();
    let caspt2_path = dir.path().join("caspt2.inp");

    let input = Input::from_yaml_file("tests/jobs/n2.yml").unwrap();
    input
        .handle(&dirs, &settings, Some(caspt2_path.as_path()))
        .unwrap();
    let caspt2_first = fs::read_to_string(&caspt2_path).unwrap();
    let ivo_first = fs::read_to_string(&dirs.ivo_input_file).unwrap();

    input
        .handle(&dirs, &settings, Some(caspt2_path.as_path()))
        .unwrap();
    assert_eq!(fs::read_to_string(&caspt2_path).unwrap(), caspt2_first);
    assert_eq!(fs::read_to_string(&dirs.ivo_input_file).unwrap(), ivo_first);
}
