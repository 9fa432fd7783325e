//! End-to-end workflows across subcommands: simulate sessions to a record
//! file, then aggregate that same file with the stats command.

use serial_test::serial;

#[test]
#[serial]
fn test_sim_then_stats_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.jsonl");
    let path = path.to_str().unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = hilo_cli::run(
        vec![
            "hilo", "sim", "--sessions", "3", "--seed", "42", "--output", path,
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "sim failed: {}", String::from_utf8_lossy(&err));
    assert!(String::from_utf8(out).unwrap().contains("Sessions: 3"));

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = hilo_cli::run(
        vec!["hilo", "stats", "--input", path],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "stats failed: {}", String::from_utf8_lossy(&err));

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Matches: "));
    assert!(output.contains("Total cost: "));
    assert!(output.contains("Net: "));
}

#[test]
#[serial]
fn test_sim_output_lands_in_configured_log_dir() {
    let dir = tempfile::tempdir().unwrap();
    unsafe {
        std::env::set_var("HILO_LOG_DIR", dir.path().to_str().unwrap());
    }

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = hilo_cli::run(
        vec!["hilo", "sim", "--sessions", "1", "--seed", "7"],
        &mut out,
        &mut err,
    );
    unsafe {
        std::env::remove_var("HILO_LOG_DIR");
    }

    assert_eq!(code, 0, "sim failed: {}", String::from_utf8_lossy(&err));
    assert!(dir.path().join("sim.jsonl").exists());
}
