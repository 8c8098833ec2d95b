//! Record history and persistence tests.

use dartrs::{DartOutcome, Game, GameHistory, GameOptions, GameRecord, GameType, HistoryError};

fn finished_game(id: &str, date: u64) -> GameRecord {
    let game = Game::new(GameOptions::default().with_target_score(100));
    game.record_throw(DartOutcome::triple(20));
    game.record_throw(DartOutcome::double(20));
    game.to_record(id, date)
}

#[test]
fn newest_first_and_lookup() {
    let mut history = GameHistory::new();
    assert!(history.is_empty());

    history.add(finished_game("a", 1)).unwrap();
    history.add(finished_game("b", 2)).unwrap();

    assert_eq!(history.len(), 2);
    let ids: Vec<&str> = history.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
    assert_eq!(history.get("a").unwrap().date, 1);
    assert!(history.get("c").is_none());
}

#[test]
fn duplicate_and_missing_ids() {
    let mut history = GameHistory::new();
    history.add(finished_game("a", 1)).unwrap();
    assert_eq!(
        history.add(finished_game("a", 2)).unwrap_err(),
        HistoryError::DuplicateId
    );

    let removed = history.remove("a").unwrap();
    assert_eq!(removed.winner, "Player 1");
    assert!(history.is_empty());
    assert_eq!(history.remove("a").unwrap_err(), HistoryError::NotFound);
}

#[test]
fn records_survive_a_json_save_load_cycle() {
    let record = finished_game("saved", 1_700_000_000_000);
    assert_eq!(record.final_score, 0);

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(r#""type":"01""#));
    assert!(json.contains(r#""finalScore":0"#));

    let loaded: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, record);

    let game = Game::new(GameOptions::default().with_game_type(GameType::Cricket));
    game.record_throw(DartOutcome::triple(20));
    let cricket = game.to_record("cricket", 5);
    let loaded: GameRecord =
        serde_json::from_str(&serde_json::to_string(&cricket).unwrap()).unwrap();
    assert_eq!(loaded, cricket);
}
