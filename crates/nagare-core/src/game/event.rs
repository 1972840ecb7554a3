use crate::model::card::Card;
use serde::Serialize;

/// Something that happened at the table, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    Played { seat: usize, card: Card },
    Passed { seat: usize },
    /// Every active player passed in turn; a new card was turned over.
    FieldRefreshed { top: Option<Card> },
    /// `place` is 1-based.
    Finished { seat: usize, place: usize },
    /// Nothing is left to turn over and no hand fits the top card.
    Stalled,
    /// `last` is the player ranked last.
    GameEnded { last: usize },
}

#[cfg(test)]
mod tests {
    use super::GameEvent;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use serde_json::json;

    #[test]
    fn events_serialize_with_a_kind_tag() {
        let played = GameEvent::Played {
            seat: 2,
            card: Card::new(Rank::Queen, Suit::Diamond),
        };
        assert_eq!(
            serde_json::to_value(played).unwrap(),
            json!({
                "kind": "played",
                "seat": 2,
                "card": { "rank": "Queen", "suit": "Diamond" }
            })
        );
        assert_eq!(
            serde_json::to_value(GameEvent::FieldRefreshed { top: None }).unwrap(),
            json!({ "kind": "field_refreshed", "top": null })
        );
    }

    #[test]
    fn unit_events_carry_only_the_tag() {
        assert_eq!(
            serde_json::to_value(GameEvent::Stalled).unwrap(),
            json!({ "kind": "stalled" })
        );
        assert_eq!(
            serde_json::to_value(GameEvent::GameEnded { last: 1 }).unwrap(),
            json!({ "kind": "game_ended", "last": 1 })
        );
    }
}
