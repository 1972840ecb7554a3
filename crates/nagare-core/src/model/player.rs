use crate::model::card::Card;
use crate::model::deck::{Deck, DeckError};
use crate::model::field::Field;
use crate::model::hand::Hand;
use crate::policy::Policy;
use core::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not in hand")]
pub struct CardNotInHand(pub Card);

/// Who decides a player's moves.
pub enum Controller {
    /// Moves arrive from outside the engine.
    Human,
    /// Moves come from a policy consulted by the engine.
    Scripted(Box<dyn Policy>),
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Controller::Human => f.write_str("Human"),
            Controller::Scripted(policy) => write!(f, "Scripted({})", policy.name()),
        }
    }
}

#[derive(Debug)]
pub struct Player {
    name: String,
    hand: Hand,
    controller: Controller,
}

impl Player {
    pub fn new(name: impl Into<String>, controller: Controller) -> Self {
        Self {
            name: name.into(),
            hand: Hand::default(),
            controller,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, Controller::Human)
    }

    pub fn scripted(name: impl Into<String>, policy: impl Policy + 'static) -> Self {
        Self::new(name, Controller::Scripted(Box::new(policy)))
    }

    /// Replaces the hand; used when seating players at a prepared table.
    pub fn with_hand(mut self, cards: Vec<Card>) -> Self {
        self.hand = Hand::with_cards(cards);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn is_human(&self) -> bool {
        matches!(self.controller, Controller::Human)
    }

    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(card)
    }

    pub fn remove_card(&mut self, card: Card) -> Result<(), CardNotInHand> {
        if self.hand.remove(card) {
            Ok(())
        } else {
            Err(CardNotInHand(card))
        }
    }

    pub fn draw_from(&mut self, deck: &mut Deck, count: usize) -> Result<(), DeckError> {
        let drawn = deck.draw(count)?;
        self.hand.extend(drawn);
        Ok(())
    }

    /// Asks a scripted player's policy for a card. Humans never answer here.
    pub fn choose_card(&mut self, field: &Field) -> Option<Card> {
        match &mut self.controller {
            Controller::Human => None,
            Controller::Scripted(policy) => policy.choose_card(&self.hand, field),
        }
    }
}
