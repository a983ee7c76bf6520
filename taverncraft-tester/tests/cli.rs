use std::process::Command;

#[test]
fn cli_lists_strategies() {
    let exe = env!("CARGO_BIN_EXE_taverncraft-tester");
    let output = Command::new(exe)
        .arg("--list-strategies")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Available strategies"));
    assert!(stdout.contains("perfect"));
    assert!(stdout.contains("chaotic"));
}

#[test]
fn cli_json_report_is_valid_json() {
    let exe = env!("CARGO_BIN_EXE_taverncraft-tester");
    let output = Command::new(exe)
        .args([
            "--seeds",
            "7,BAR-MEAD42",
            "--strategies",
            "all",
            "--days",
            "1",
            "--report",
            "json",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stdout parses as JSON");
    let runs = parsed.as_array().expect("array of summaries");
    assert_eq!(runs.len(), 6, "2 seeds x 3 strategies");
    for run in runs {
        assert!(run.get("share_code").is_some());
        assert_eq!(run["days"], 1);
    }
}

#[test]
fn cli_rejects_bad_seed() {
    let exe = env!("CARGO_BIN_EXE_taverncraft-tester");
    let output = Command::new(exe)
        .args(["--seeds", "not-a-seed"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not-a-seed"));
}
