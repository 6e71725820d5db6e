use buildcfg_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("package.json"));

    io::write_atomic(&path, b"{}\n").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "{}\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("package.json");
    fs::write(&file_path, "{\"name\":\"old\"}").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"{\"name\":\"new\"}").unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "{\"name\":\"new\"}");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("tsup.config.ts"));

    io::write_text(&path, "export default {}\n").unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["tsup.config.ts".to_string()]);
}

#[test]
fn test_write_atomic_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("nested/dir/build.config.ts"));

    io::write_text(&path, "export default {}\n").unwrap();

    assert!(path.is_file());
}

#[test]
fn test_read_text_missing_file_errors_with_path() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.json"));

    let err = io::read_text(&path).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_remove_if_exists() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join(".rad-build-temp.tsup.config.js"));

    assert!(!io::remove_if_exists(&path).unwrap());

    fs::write(path.to_native(), "export default {}").unwrap();
    assert!(io::remove_if_exists(&path).unwrap());
    assert!(!path.exists());
}
