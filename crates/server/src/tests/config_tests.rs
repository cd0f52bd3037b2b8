use super::{load_settings_from, resolve_products_file, Settings};

use std::fs;

#[test]
fn missing_config_file_keeps_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert_eq!(
        load_settings_from(&dir.path().join("server.toml")),
        Settings::default()
    );
}

#[test]
fn config_file_overrides_bind_and_products_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        "bind_addr = \"0.0.0.0:8080\"\nproducts_file = \"fixtures/catalog.json\"\n",
    )
    .expect("write");

    let settings = load_settings_from(&path);
    assert_eq!(settings.server_bind, "0.0.0.0:8080");
    assert_eq!(settings.products_file, "fixtures/catalog.json");
}

#[test]
fn resolves_existing_products_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.json");
    fs::write(&path, "[]").expect("write");

    let resolved = resolve_products_file(path.to_string_lossy().as_ref()).expect("resolve");
    assert!(resolved.ends_with("products.json"));
}

#[test]
fn rejects_missing_products_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.json");

    let err = resolve_products_file(missing.to_string_lossy().as_ref()).expect_err("must fail");
    assert!(err.to_string().contains("not readable"), "{err}");
}

#[test]
fn rejects_directory_as_products_file() {
    let dir = tempfile::tempdir().expect("tempdir");

    let err = resolve_products_file(dir.path().to_string_lossy().as_ref()).expect_err("must fail");
    assert!(err.to_string().contains("not a regular file"), "{err}");
}
