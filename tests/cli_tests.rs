//! Command-line tests against the built `candysim` binary.

use std::process::Command;

fn candysim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_candysim"))
}

#[test]
fn cli_single_game_prints_four_equal_stats() {
    let output = candysim()
        .args(["--players", "1", "-n", "1"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);

    let labels: Vec<&str> = lines.iter().map(|l| l.split(' ').next().unwrap()).collect();
    assert_eq!(labels, vec!["min", "med", "90p", "max"]);

    let values: Vec<u32> = lines
        .iter()
        .map(|l| l.split(' ').nth(1).unwrap().parse().unwrap())
        .collect();
    assert!(values[0] > 0);
    assert!(values.iter().all(|&v| v == values[0]));
}

#[test]
fn cli_accepts_long_n_for_game_count() {
    let output = candysim()
        .args(["--n", "5", "--seed", "3", "--json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["games"], 5);
}

#[test]
fn cli_percentiles_ordered() {
    let output = candysim()
        .args(["--players", "2", "-n", "1000", "--allow-back=false"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let values: Vec<u32> = stdout
        .lines()
        .map(|l| l.split(' ').nth(1).unwrap().parse().unwrap())
        .collect();
    assert_eq!(values.len(), 4);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn cli_verbose_traces_one_game() {
    let output = candysim()
        .args(["--verbose", "--players", "2", "--seed", "5"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().filter(|l| l.ends_with(" WIN")).count(), 1);
    assert!(stdout.contains("moves: "));
    assert!(stdout.contains("  player 1: pos="));
    assert!(!stdout.lines().any(|l| l.starts_with("med ")));
}

#[test]
fn cli_seed_is_reproducible() {
    let run = || {
        candysim()
            .args(["-n", "200", "--seed", "99", "--json"])
            .output()
            .expect("run cli")
            .stdout
    };
    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}

#[test]
fn cli_rejects_zero_players() {
    let output = candysim()
        .args(["--players", "0"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least one player"));
}
