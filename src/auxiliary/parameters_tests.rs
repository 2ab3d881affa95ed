use crate::auxiliary::parameters::UserParameters;

#[test]
fn test_auxiliary_parameters_defaults() {
    let params = UserParameters::default();
    assert_eq!(params.totsym, 1);
    assert_eq!(params.selectroot, 1);
    assert_eq!(params.ras1_max_hole, 0);
    assert_eq!(params.ras3_max_electron, 0);
    assert!(!params.dirac_version_21_or_later);
    assert_eq!(params.dirac_version_str(), "19");
}

#[test]
fn test_auxiliary_parameters_clamped() {
    let params = UserParameters::builder()
        .ras1_max_hole(6)
        .ras3_max_electron(4)
        .dirac_version_21_or_later(true)
        .build()
        .unwrap();
    let clamped = params.clamped(2, 8);
    assert_eq!(clamped.ras1_max_hole, 2);
    assert_eq!(clamped.ras3_max_electron, 4);
    assert_eq!(clamped.totsym, params.totsym);
    assert_eq!(clamped.dirac_version_str(), "21");
}

#[test]
fn test_auxiliary_parameters_sparse_yaml() {
    let params: UserParameters = serde_yaml::from_str("totsym: 3\n").unwrap();
    assert_eq!(params.totsym, 3);
    assert_eq!(params.selectroot, 1);
    assert!(!params.dirac_version_21_or_later);
}
