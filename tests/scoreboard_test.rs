//! Tests for scoreboard rendering.

use strictly_bowling::Game;
use strictly_bowling_cli::{OutputFormat, Scoreboard, ScorerConfig};

#[test]
fn test_scoreboard_rows_follow_frames() {
    let game = Game::replay(&[10, 7, 3, 9, 0]).expect("Valid replay");
    let board = Scoreboard::from_game(&game);

    let rows: Vec<(String, Option<u32>)> = board
        .frames()
        .iter()
        .map(|line| (line.marks().clone(), line.running_total().value()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("X".to_string(), Some(20)),
            ("7 /".to_string(), Some(39)),
            ("9 -".to_string(), Some(48)),
            (String::new(), None),
        ]
    );
    assert!(!board.finished());
}

#[test]
fn test_text_rendering() {
    let game = Game::replay(&[3, 5]).expect("Valid replay");
    let board = Scoreboard::from_game(&game);

    let text = board.render_text(true);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], " 1 | 3 5   |   8 |   8");
    assert_eq!(lines[1], " 2 |       |   - |   -");
    assert_eq!(lines[2], "Total: - (in progress)");

    let bare = board.render_text(false);
    assert_eq!(bare.lines().next(), Some(" 1 |   8 |   8"));
}

#[test]
fn test_json_rendering() {
    let game = Game::replay(&[10; 12]).expect("Valid replay");
    let board = Scoreboard::from_game(&game);
    let config = ScorerConfig::default().with_format(OutputFormat::Json);

    let json = board.render(&config).expect("Serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Valid JSON");
    assert_eq!(value["total"], 300);
    assert_eq!(value["finished"], true);
    assert_eq!(value["frames"].as_array().map(Vec::len), Some(10));
    assert_eq!(value["frames"][9]["marks"], "X X X");
    assert_eq!(value["frames"][0]["round"], 1);
}
