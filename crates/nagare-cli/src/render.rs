use nagare_core::game::{GameEvent, Standing};
use nagare_core::model::card::Card;
use nagare_core::model::player::Player;

pub fn help_text() -> String {
    [
        "Commands:",
        "  hand   show the cards in your hand",
        "  field  show the card on the field",
        "  put    play a card from your hand, e.g. 'put d4'",
        "         cards are a suit letter and a number: ♦4 -> d4, ♠1 -> s1, ♣12 -> c12, ♥9 -> h9",
        "  pass   pass and hand the turn to the next player",
        "  help   show this help",
        "  quit   leave the game",
    ]
    .join("\n")
}

/// Suit symbol followed by the numeric rank, the same numbers the player types.
pub fn card_label(card: Card) -> String {
    format!("{}{}", card.suit.symbol(), card.rank.value())
}

pub fn field_line(top: Option<Card>) -> String {
    match top {
        Some(card) => format!("The field shows {}", card_label(card)),
        None => "The field is empty; any card may be played".to_string(),
    }
}

pub fn hand_line(cards: &[Card]) -> String {
    let labels: Vec<String> = cards.iter().copied().map(card_label).collect();
    format!("Your hand: {}", labels.join(", "))
}

pub fn describe_event(event: &GameEvent, players: &[Player]) -> String {
    let name = |seat: usize| {
        players
            .get(seat)
            .map(Player::name)
            .unwrap_or("?")
            .to_string()
    };
    match *event {
        GameEvent::Played { seat, card } => {
            format!("{} put {} on the field", name(seat), card_label(card))
        }
        GameEvent::Passed { seat } => format!("{} passed", name(seat)),
        GameEvent::FieldRefreshed { top } => {
            format!("Everyone passed, the field flows. {}", field_line(top))
        }
        GameEvent::Finished { seat, place } => {
            format!("{} is out of cards (place {place})", name(seat))
        }
        GameEvent::Stalled => {
            "Nobody can play and there is nothing left to turn over".to_string()
        }
        GameEvent::GameEnded { last } => format!("{} is the last one holding cards", name(last)),
    }
}

pub fn results_table(ranking: &[Standing]) -> String {
    let mut out = String::from("=== Results ===");
    for standing in ranking {
        out.push_str(&format!("\n{}. {}", standing.place, standing.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{card_label, describe_event, field_line, hand_line, results_table};
    use nagare_core::game::{GameEvent, Standing};
    use nagare_core::model::card::Card;
    use nagare_core::model::player::Player;
    use nagare_core::model::rank::Rank;
    use nagare_core::model::suit::Suit;
    use nagare_core::policy::FirstLegal;

    #[test]
    fn cards_render_with_symbols_and_numbers() {
        assert_eq!(card_label(Card::new(Rank::Four, Suit::Diamond)), "♦4");
        assert_eq!(card_label(Card::new(Rank::King, Suit::Spade)), "♠13");
        assert_eq!(
            hand_line(&[
                Card::new(Rank::Ace, Suit::Heart),
                Card::new(Rank::Ten, Suit::Club)
            ]),
            "Your hand: ♥1, ♣10"
        );
        assert_eq!(field_line(None), "The field is empty; any card may be played");
    }

    #[test]
    fn events_use_player_names() {
        let players = vec![
            Player::human("You"),
            Player::scripted("Player1", FirstLegal),
        ];
        let played = GameEvent::Played {
            seat: 1,
            card: Card::new(Rank::Nine, Suit::Heart),
        };
        assert_eq!(describe_event(&played, &players), "Player1 put ♥9 on the field");
        assert_eq!(
            describe_event(&GameEvent::Finished { seat: 0, place: 1 }, &players),
            "You is out of cards (place 1)"
        );
        assert_eq!(
            describe_event(&GameEvent::Passed { seat: 5 }, &players),
            "? passed"
        );
        assert_eq!(
            describe_event(&GameEvent::Stalled, &players),
            "Nobody can play and there is nothing left to turn over"
        );
    }

    #[test]
    fn results_list_places_in_order() {
        let ranking = vec![
            Standing {
                place: 1,
                seat: 2,
                name: "Player2".to_string(),
            },
            Standing {
                place: 2,
                seat: 0,
                name: "You".to_string(),
            },
        ];
        assert_eq!(
            results_table(&ranking),
            "=== Results ===\n1. Player2\n2. You"
        );
    }
}
