use std::path::Path;

#[test]
fn test_frontend_dist_resolves_inside_the_repository() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(root.join("tauri.conf.json")).unwrap();
    let conf: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let dist = conf["build"]["frontendDist"].as_str().unwrap();
    let resolved = root.join(dist).canonicalize().unwrap();
    assert!(resolved.starts_with(root.canonicalize().unwrap()));
    assert!(resolved.join("index.html").is_file());
}
