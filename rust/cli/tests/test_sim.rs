use serde_json::Value;
use std::fs;
use tictactoe_cli::run;

fn sim(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn count(out: &str, label: &str) -> u32 {
    out.lines()
        .find_map(|l| l.strip_prefix(label))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_else(|| panic!("missing `{}` in\n{}", label, out))
}

#[test]
fn sim_tallies_every_game() {
    let (code, out, err) = sim(&[
        "tictactoe",
        "sim",
        "--games",
        "25",
        "--difficulty",
        "medium",
        "--challenger",
        "easy",
        "--seed",
        "3",
    ]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("sim: games=25 difficulty=medium challenger=easy seed=3"));
    let total = count(&out, "Challenger wins:")
        + count(&out, "Computer wins:")
        + count(&out, "Draws:");
    assert_eq!(total, 25);
}

#[test]
fn sim_is_reproducible_with_a_seed() {
    let args = [
        "tictactoe",
        "sim",
        "--games",
        "15",
        "--difficulty",
        "hard",
        "--challenger",
        "medium",
        "--seed",
        "77",
    ];
    let (_, first, _) = sim(&args);
    let (_, second, _) = sim(&args);
    assert_eq!(first, second);
}

#[test]
fn sim_writes_one_record_per_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("games.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    let (code, out, err) = sim(&[
        "tictactoe", "sim", "--games", "5", "--seed", "1", "--output", &path_str,
    ]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Records appended to"));

    let contents = fs::read_to_string(&path).unwrap();
    let records: Vec<Value> = contents
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("valid JSON line"))
        .collect();
    assert_eq!(records.len(), 5);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec["seed"], 1 + i as u64);
        assert_eq!(rec["mode"], "singleplayer");
        assert!(rec["ts"].is_string());
        assert_ne!(rec["result"], "unfinished");
    }
}

#[test]
fn sim_rejects_zero_games() {
    let (code, _, err) = sim(&["tictactoe", "sim", "--games", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("games must be >= 1"));
}
