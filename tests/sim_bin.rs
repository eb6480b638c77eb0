use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "1", "20"])
        .env("NOUGHTS_LOG", "off")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    let wins = v["wins"]["x"].as_u64().unwrap() + v["wins"]["o"].as_u64().unwrap();
    assert_eq!(wins + v["draws"].as_u64().unwrap(), 20);
    assert!(v["lives"]["x"].as_u64().unwrap() <= 5);
}
