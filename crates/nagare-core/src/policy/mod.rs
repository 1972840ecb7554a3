mod first_legal;

pub use first_legal::FirstLegal;

use crate::model::card::Card;
use crate::model::field::Field;
use crate::model::hand::Hand;

/// Decision interface for scripted players.
pub trait Policy: Send {
    /// Short label used in logs and debug output.
    fn name(&self) -> &'static str;

    /// Picks a card from `hand` to play on `field`, or `None` to pass.
    ///
    /// The engine re-checks the answer; a card that is not in hand or not
    /// accepted by the field is treated as a pass.
    fn choose_card(&mut self, hand: &Hand, field: &Field) -> Option<Card>;
}
