use std::process::Command;

fn run(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_battleship-session"))
        .args(args)
        .env("BATTLESHIP_LOG", "off")
        .output()
        .expect("failed to run battleship-session binary");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("non utf8 output")
}

#[test]
fn test_seeded_run_prints_full_session() {
    let stdout = run(&["--seed", "7", "--player-id", "alice", "--compact"]);
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["id"], "session-7-1");
    assert_eq!(v["player_id"], "alice");
    assert_eq!(v["status"], "Started");
    assert_eq!(v["player_board"]["ships"].as_array().unwrap().len(), 5);
    assert_eq!(v["ai_board"]["ships"].as_array().unwrap().len(), 5);
    assert!(v["player_inventory"]["ships"].as_array().unwrap().is_empty());
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let a = run(&["--seed", "12345", "--compact"]);
    let b = run(&["--seed", "12345", "--compact"]);
    assert_eq!(a, b);
}
