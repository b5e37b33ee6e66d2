use std::fs;
use std::path::Path;

use tempfile::tempdir;

use renscript_gui::UserPreferences;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let prefs = UserPreferences::load_from(&dir.path().join("absent.json")).expect("load");
    assert_eq!(prefs, UserPreferences::default());
    assert_eq!(prefs.ui_scale, 1.0);
}

#[test]
fn saves_and_loads_preferences() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested/prefs.json");
    let prefs = UserPreferences {
        ui_scale: 1.4,
        last_dir: Some(dir.path().to_path_buf()),
    };

    prefs.save_to(&path).expect("save prefs");
    let loaded = UserPreferences::load_from(&path).expect("load prefs");

    assert_eq!(prefs, loaded);
    let stored = fs::read_to_string(&path).expect("read prefs");
    assert!(stored.contains("\"ui_scale\""));
    assert!(stored.contains("\"last_dir\""));
}

#[test]
fn corrupt_preferences_are_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");
    fs::write(&path, "not json").expect("write");

    assert!(UserPreferences::load_from(&path).is_err());
}

#[test]
fn remember_dir_stores_the_parent() {
    let mut prefs = UserPreferences::default();
    prefs.remember_dir(Path::new("/tmp/projects/demo.json"));
    assert_eq!(prefs.last_dir.as_deref(), Some(Path::new("/tmp/projects")));
}
