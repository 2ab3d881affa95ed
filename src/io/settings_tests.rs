use std::fs;

use crate::io::settings::{MalformedSettingsError, Settings};

#[test]
fn test_io_settings_create_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load_or_create(&path).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(path.exists());

    // The created file must hold exactly the fixed key set.
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let object = raw.as_object().unwrap();
    for key in [
        "totsym",
        "selectroot",
        "ras1_max_hole",
        "ras3_max_electron",
        "dirac_ver_21_or_later",
        "color_theme",
    ] {
        assert!(object.contains_key(key), "missing key `{key}`");
    }
    assert_eq!(object.len(), 6);
}

#[test]
fn test_io_settings_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        totsym: 2,
        selectroot: 3,
        ras1_max_hole: 2,
        ras3_max_electron: 4,
        dirac_ver_21_or_later: true,
        color_theme: "dark".to_string(),
    };
    settings.save(&path).unwrap();
    assert_eq!(Settings::load_or_create(&path).unwrap(), settings);

    let params = settings.user_parameters();
    assert_eq!(params.totsym, 2);
    assert_eq!(params.selectroot, 3);
    assert_eq!(params.ras1_max_hole, 2);
    assert_eq!(params.ras3_max_electron, 4);
    assert!(params.dirac_version_21_or_later);
}

#[test]
fn test_io_settings_malformed_is_fatal_and_actionable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{\"totsym\": 1,").unwrap();
    let err = Settings::load_or_create(&path).unwrap_err();
    let malformed = err.downcast_ref::<MalformedSettingsError>().unwrap();
    assert_eq!(malformed.path, path);
    assert!(err.to_string().contains("delete the file"));
    assert!(err.to_string().contains(path.to_str().unwrap()));

    // No automatic repair: the broken file is left untouched.
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"totsym\": 1,");
}
