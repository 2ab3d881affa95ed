use std::fs;

use crate::auxiliary::spinor::{SpinorCategory, SymmetryGroupKind};
use crate::interfaces::input::Input;
use crate::io::settings::Settings;
use crate::io::AppDirInfo;

const JOB_YAML: &str = r#"
header:
  group_kind: Single
  n_electrons: 4
spinors:
  - symmetry: E1
    index: 1
    category: inactive
  - symmetry: E1
    index: 2
    category: ras1
  - symmetry: E1
    index: 3
    category: active
  - symmetry: E1
    index: 4
    category: secondary
  - symmetry: E1
    index: 5
    category: not_used
user_parameters:
  totsym: 1
  selectroot: 1
  ras1_max_hole: 1
"#;

#[test]
fn test_interfaces_input_yaml_deserialisation() {
    let input: Input = serde_yaml::from_str(JOB_YAML).unwrap();
    assert_eq!(input.header.group_kind, SymmetryGroupKind::Single);
    assert_eq!(input.header.n_electrons, 4);
    assert_eq!(input.spinors.len(), 5);
    assert_eq!(input.spinors[1].category, SpinorCategory::Ras1);
    assert_eq!(input.spinors[4].category, SpinorCategory::NotUsed);
    let params = input.user_parameters.unwrap();
    assert_eq!(params.ras1_max_hole, 1);
    assert!(!params.dirac_version_21_or_later);
    assert!(input.output.is_none());
}

#[test]
fn test_interfaces_input_handle_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let dirs = AppDirInfo::in_dir(dir.path().join("appdir")).unwrap();
    let settings = Settings::default();
    let caspt2_path = dir.path().join("caspt2.inp");

    let input: Input = serde_yaml::from_str(JOB_YAML).unwrap();
    input
        .handle(&dirs, &settings, Some(caspt2_path.as_path()))
        .unwrap();

    let caspt2 = fs::read_to_string(&caspt2_path).unwrap();
    assert!(caspt2.contains("ninact\n2\n"));
    assert!(caspt2.contains("nact\n4\n"));
    assert!(caspt2.contains("nsec\n2\n"));
    assert!(caspt2.contains("ras1\n3 4\n1\n"));
    assert!(caspt2.contains("ras2\n5 6\n"));

    let ivo = fs::read_to_string(&dirs.ivo_input_file).unwrap();
    assert!(ivo.starts_with("ninact\n0\n"));
    assert!(ivo.ends_with("end\n"));
}

#[test]
fn test_interfaces_input_handle_clamps_overridden_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let dirs = AppDirInfo::in_dir(dir.path().join("appdir")).unwrap();
    let settings = Settings::default();
    let caspt2_path = dir.path().join("caspt2.inp");

    let mut input: Input = serde_yaml::from_str(JOB_YAML).unwrap();
    // An out-of-bound override is clamped to the current RAS1 capacity instead of aborting.
    input.user_parameters.as_mut().unwrap().ras1_max_hole = 99;
    input
        .handle(&dirs, &settings, Some(caspt2_path.as_path()))
        .unwrap();
    let caspt2 = fs::read_to_string(&caspt2_path).unwrap();
    assert!(caspt2.contains("ras1\n3 4\n2\n"));
}

#[test]
fn test_interfaces_input_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.yml");
    fs::write(&path, JOB_YAML).unwrap();
    let input = Input::from_yaml_file(&path).unwrap();
    assert_eq!(input.spinors.len(), 5);
    assert!(Input::from_yaml_file(dir.path().join("missing.yml")).is_err());
}
