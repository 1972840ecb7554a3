use super::Policy;
use crate::model::card::Card;
use crate::model::field::Field;
use crate::model::hand::Hand;
use tracing::{Level, event};

/// Plays the first card in hand order that the field accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegal;

impl Policy for FirstLegal {
    fn name(&self) -> &'static str {
        "first-legal"
    }

    fn choose_card(&mut self, hand: &Hand, field: &Field) -> Option<Card> {
        let choice = hand.iter().copied().find(|&card| field.can_accept(card));
        event!(
            target: "nagare::policy",
            Level::TRACE,
            policy = self.name(),
            top = ?field.top(),
            hand = hand.len(),
            choice = ?choice,
            "policy decision"
        );
        choice
    }
}
