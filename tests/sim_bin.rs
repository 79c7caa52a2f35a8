use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "7", "random", "--width", "6", "--height", "8"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["board"]["ships"], 3);
    assert!(v["winner"].is_string());
    assert_eq!(v["high_scores"]["entries"].as_array().map(Vec::len), Some(2));
}

#[test]
fn sim_binary_reports_bad_layout() {
    let path = std::env::temp_dir().join(format!("battleship-bad-{}.txt", std::process::id()));
    std::fs::write(&path, "3\nDESTROYER;1*1;1*2\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("layout")
        .arg(&path)
        .output()
        .expect("failed to run sim binary");
    std::fs::remove_file(&path).unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("between 5 and 10"), "stderr: {}", stderr);
}
