use std::fs;

use resource_id_codegen::{run_codegen, CodeGenConfig};

use crate::utils::{read, service_dir, GALLERY_ID, SERVER_ID};

#[test]
fn config_generates_every_target() {
    let root = tempfile::tempdir().unwrap();
    service_dir(root.path(), "services/analysisservices");
    service_dir(root.path(), "services/compute");

    let config_path = root.path().join("codegen.yml");
    fs::write(
        &config_path,
        format!(
            r#"
format: false
imports:
  azure: example.com/provider/helpers/azure
  resourceid: null
targets:
  - path: services/analysisservices
    name: Server
    id: {SERVER_ID}
  - path: services/compute
    name: SharedImageGallery
    id: {GALLERY_ID}
"#
        ),
    )
    .unwrap();

    let config = CodeGenConfig::load(&config_path).unwrap();
    assert_eq!(config.targets.len(), 2);
    run_codegen(&config, root.path().to_str().unwrap()).unwrap();

    let server = read(root.path().join("services/analysisservices/parse/server.go"));
    assert!(server.contains("\t\"example.com/provider/helpers/azure\"\n"));
    let server_test = read(root.path().join("services/analysisservices/parse/server_test.go"));
    assert!(!server_test.contains("resourceid"));
    assert!(root
        .path()
        .join("services/compute/parse/shared_image_gallery.go")
        .exists());
}

#[test]
fn first_failing_target_stops_the_run() {
    let root = tempfile::tempdir().unwrap();
    service_dir(root.path(), "services/compute");

    let config = CodeGenConfig::from_yaml(&format!(
        r#"
format: false
targets:
  - path: services/compute
    name: Broken
    id: /subscriptions
  - path: services/compute
    name: SharedImageGallery
    id: {GALLERY_ID}
"#
    ))
    .unwrap();

    let err = run_codegen(&config, root.path().to_str().unwrap()).unwrap_err();
    assert_eq!(err.context.as_deref(), Some("generating Broken"));
    assert!(!root
        .path()
        .join("services/compute/parse/shared_image_gallery.go")
        .exists());
}

#[test]
fn invalid_yaml_names_the_file() {
    let root = tempfile::tempdir().unwrap();
    let config_path = root.path().join("broken.yml");
    fs::write(&config_path, "targets: [").unwrap();

    let err = CodeGenConfig::load(&config_path).unwrap_err();
    assert!(err.file.unwrap().ends_with("broken.yml"));
}
