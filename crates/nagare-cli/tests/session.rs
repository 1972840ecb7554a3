use std::io::Cursor;

use nagare_cli::session::{Session, SessionOutcome};
use nagare_core::game::GameEngine;
use nagare_core::model::card::Card;
use nagare_core::model::field::Field;
use nagare_core::model::player::Player;
use nagare_core::model::rank::Rank;
use nagare_core::model::suit::Suit;
use nagare_core::policy::FirstLegal;

fn classic_table(seed: u64) -> GameEngine {
    let roster = vec![
        Player::human("You"),
        Player::scripted("Player1", FirstLegal),
        Player::scripted("Player2", FirstLegal),
    ];
    GameEngine::with_seed(roster, seed).expect("valid roster")
}

fn run(engine: GameEngine, input: &str, json: bool) -> (SessionOutcome, String) {
    let mut output = Vec::new();
    let outcome = {
        let mut session = Session::new(engine, Cursor::new(input.to_string()), &mut output)
            .json_events(json);
        session.run().expect("session runs")
    };
    (outcome, String::from_utf8(output).expect("utf-8 transcript"))
}

#[test]
fn informational_commands_and_bad_input_are_answered() {
    let (outcome, transcript) = run(classic_table(7), "hand\nfield\nbogus\nput\nx9\n", false);

    assert_eq!(outcome, SessionOutcome::Quit);
    assert!(transcript.contains("Players: You, Player1, Player2"));
    assert!(transcript.contains("Game seed: 7"));
    assert!(transcript.contains("Commands:"));
    assert!(transcript.contains("Your hand: "));
    assert!(transcript.contains("The field shows "));
    assert!(transcript.contains("unknown command 'bogus'"));
    assert!(transcript.contains("Which card?"));
    assert!(transcript.contains("'x9' is not a card"));
}

#[test]
fn rejected_play_is_explained_and_a_legal_one_goes_through() {
    let field = Field::with_top(Card::new(Rank::Nine, Suit::Club));
    let players = vec![
        Player::human("You").with_hand(vec![
            Card::new(Rank::Two, Suit::Diamond),
            Card::new(Rank::Ten, Suit::Club),
        ]),
        Player::scripted("Player1", FirstLegal)
            .with_hand(vec![Card::new(Rank::King, Suit::Heart)]),
    ];
    let engine = GameEngine::with_table(players, field, 0).expect("valid table");

    let (outcome, transcript) = run(engine, "put d2\nput c10\nquit\n", false);

    assert_eq!(outcome, SessionOutcome::Quit);
    assert!(transcript.contains("2D cannot be played on 9C"));
    assert!(transcript.contains("You put ♣10 on the field"));
    assert!(transcript.contains("Player1 passed"));
    assert!(transcript.contains("Your hand: ♦2"));
}

#[test]
fn passing_every_turn_leaves_the_human_last() {
    let input = "pass\n".repeat(3_000);
    let (outcome, transcript) = run(classic_table(11), &input, false);

    let SessionOutcome::Finished(ranking) = outcome else {
        panic!("game should finish, transcript:\n{transcript}");
    };
    assert_eq!(ranking.len(), 3);
    assert_eq!(ranking[2].name, "You");
    assert!(transcript.contains("=== Results ==="));
    assert!(transcript.trim_end().ends_with("3. You"));
}

#[test]
fn events_can_be_printed_as_json_lines() {
    let (_, transcript) = run(classic_table(3), "pass\nquit\n", true);
    assert!(transcript.contains(r#"{"kind":"passed","seat":0}"#));
}
