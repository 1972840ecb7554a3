use crate::model::card::Card;
use crate::model::deck::Deck;
use rand::Rng;
use tracing::{Level, event};

/// The shared pile: the active card, the cards buried beneath it, and the
/// undealt deck used to turn over a new card when a pass cycle closes.
#[derive(Debug, Clone)]
pub struct Field {
    top: Option<Card>,
    cemetery: Vec<Card>,
    deck: Deck,
    pass_starter: Option<usize>,
}

impl Field {
    /// Turns over the first card of `deck`. An exhausted deck leaves the field open.
    pub fn new(mut deck: Deck) -> Self {
        let top = deck.draw_one();
        Self::from_parts(top, deck, Vec::new())
    }

    pub fn from_parts(top: Option<Card>, deck: Deck, cemetery: Vec<Card>) -> Self {
        Self {
            top,
            cemetery,
            deck,
            pass_starter: None,
        }
    }

    pub fn with_top(top: Card) -> Self {
        Self::from_parts(Some(top), Deck::default(), Vec::new())
    }

    pub fn top(&self) -> Option<Card> {
        self.top
    }

    pub fn cemetery(&self) -> &[Card] {
        &self.cemetery
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn pass_starter(&self) -> Option<usize> {
        self.pass_starter
    }

    /// True when a refresh would have nothing to turn over.
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.cemetery.is_empty()
    }

    pub fn can_accept(&self, card: Card) -> bool {
        let Some(top) = self.top else {
            return true;
        };
        let same_suit = top.suit == card.suit;
        let same_rank = top.rank == card.rank;
        let adjacent = top.rank.is_adjacent(card.rank);
        same_suit | same_rank | adjacent
    }

    /// Buries the current top card under `card`. Legality is the caller's job.
    pub fn play_card(&mut self, card: Card) {
        if let Some(previous) = self.top.replace(card) {
            self.cemetery.push(previous);
        }
        self.pass_starter = None;
    }

    /// Remembers who opened the current run of passes, unless one is already open.
    pub fn mark_pass_start(&mut self, seat: usize) {
        if self.pass_starter.is_none() {
            self.pass_starter = Some(seat);
        }
    }

    /// Called with the new turn-holder after a pass. Returns `true` when the
    /// turn has come back to the player who opened the run, in which case the
    /// field has been refreshed.
    pub fn close_pass_cycle<R: Rng + ?Sized>(&mut self, seat: usize, rng: &mut R) -> bool {
        match self.pass_starter {
            None => {
                self.pass_starter = Some(seat);
                false
            }
            Some(starter) if starter == seat => {
                self.refresh(rng);
                self.pass_starter = None;
                true
            }
            Some(_) => false,
        }
    }

    /// Shuffles the cemetery back into the deck and turns over a new top card.
    /// Returns the top card afterwards; it only stays the same when there is
    /// nothing left to turn over.
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        self.deck.extend(self.cemetery.drain(..));
        self.deck.shuffle_in_place(rng);
        if let Some(next) = self.deck.draw_one() {
            if let Some(previous) = self.top.replace(next) {
                self.cemetery.push(previous);
            }
        }
        event!(
            target: "nagare::field",
            Level::DEBUG,
            top = ?self.top,
            deck = self.deck.len(),
            "field refreshed"
        );
        self.top
    }
}
