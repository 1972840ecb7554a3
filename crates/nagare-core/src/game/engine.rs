use crate::game::event::GameEvent;
use crate::model::card::Card;
use crate::model::deck::{Deck, DeckError};
use crate::model::field::Field;
use crate::model::player::Player;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{Level, event};

pub const INITIAL_HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// The turn-holder is human and the engine waits for a play or a pass.
    AwaitingInput,
    /// The turn-holder is scripted; `resolve_opponents` moves the game on.
    ResolvingOpponents,
    Ended,
}

/// Rejections for a human intent. The engine state is untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the game is already over")]
    GameOver,
    #[error("it is not your turn (seat {turn} is to play)")]
    NotPlayersTurn { turn: usize },
    #[error("{0} is not in your hand")]
    CardNotInHand(Card),
    #[error("{card} cannot be played on {top}")]
    IllegalPlay { card: Card, top: Card },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a game needs 2 to 7 players, got {0}")]
    PlayerCount(usize),
    #[error("at most one human player is supported, got {0}")]
    TooManyHumans(usize),
    #[error("seat {seat} has no cards")]
    EmptyHand { seat: usize },
    #[error("{0} is on the table more than once")]
    DuplicateCard(Card),
    #[error("dealing failed: {0}")]
    Deck(#[from] DeckError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub place: usize,
    pub seat: usize,
    pub name: String,
}

#[derive(Debug)]
pub struct GameEngine {
    players: Vec<Player>,
    field: Field,
    turn: usize,
    finished: Vec<usize>,
    ended: bool,
    events: Vec<GameEvent>,
    rng: StdRng,
    seed: u64,
}

impl GameEngine {
    pub fn new(players: Vec<Player>) -> Result<Self, SetupError> {
        let seed: u64 = rand::random();
        Self::with_seed(players, seed)
    }

    /// Shuffles a full deck with `seed`, deals seven cards to each player in
    /// seat order and turns over the first remaining card.
    pub fn with_seed(mut players: Vec<Player>, seed: u64) -> Result<Self, SetupError> {
        validate_roster(&players)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = Deck::shuffled(&mut rng);
        for _ in 0..INITIAL_HAND_SIZE {
            for player in players.iter_mut() {
                player.draw_from(&mut deck, 1)?;
            }
        }
        let field = Field::new(deck);
        event!(
            target: "nagare::engine",
            Level::DEBUG,
            seed,
            players = players.len(),
            top = ?field.top(),
            "cards dealt"
        );
        Ok(Self::assemble(players, field, rng, seed))
    }

    /// Seats players at a prepared table. Hands are taken as they are and
    /// `seed` only drives later refreshes. The table may hold fewer than 52
    /// cards, but no card may appear twice across hands, top, deck and cemetery.
    pub fn with_table(players: Vec<Player>, field: Field, seed: u64) -> Result<Self, SetupError> {
        validate_roster(&players)?;
        if let Some(seat) = players.iter().position(|p| p.hand().is_empty()) {
            return Err(SetupError::EmptyHand { seat });
        }
        let mut seen = HashSet::new();
        let on_table = field
            .top()
            .into_iter()
            .chain(field.cemetery().iter().copied())
            .chain(field.deck().cards().iter().copied())
            .chain(players.iter().flat_map(|p| p.hand().iter().copied()));
        for card in on_table {
            if !seen.insert(card) {
                return Err(SetupError::DuplicateCard(card));
            }
        }
        Ok(Self::assemble(players, field, StdRng::seed_from_u64(seed), seed))
    }

    fn assemble(players: Vec<Player>, field: Field, rng: StdRng, seed: u64) -> Self {
        Self {
            players,
            field,
            turn: 0,
            finished: Vec::new(),
            ended: false,
            events: Vec::new(),
            rng,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_card(&self) -> Option<Card> {
        self.field.top()
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn finished_order(&self) -> &[usize] {
        &self.finished
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn phase(&self) -> EnginePhase {
        if self.ended {
            EnginePhase::Ended
        } else if self.players[self.turn].is_human() {
            EnginePhase::AwaitingInput
        } else {
            EnginePhase::ResolvingOpponents
        }
    }

    pub fn human_seat(&self) -> Option<usize> {
        self.players.iter().position(Player::is_human)
    }

    pub fn human_hand(&self) -> Option<&[Card]> {
        self.human_seat()
            .map(|seat| self.players[seat].hand().cards())
    }

    /// Cards from `seat`'s hand that the field would take right now.
    pub fn legal_cards(&self, seat: usize) -> Vec<Card> {
        self.players
            .get(seat)
            .map(|player| {
                player
                    .hand()
                    .iter()
                    .copied()
                    .filter(|&card| self.field.can_accept(card))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drains the events recorded since the previous call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Finish order, first place first. `None` until the game has ended.
    pub fn ranking(&self) -> Option<Vec<Standing>> {
        if !self.ended {
            return None;
        }
        Some(
            self.finished
                .iter()
                .enumerate()
                .map(|(index, &seat)| Standing {
                    place: index + 1,
                    seat,
                    name: self.players[seat].name().to_string(),
                })
                .collect(),
        )
    }

    pub fn submit_play(&mut self, card: Card) -> Result<(), PlayError> {
        let seat = self.human_turn()?;
        if !self.players[seat].has_card(card) {
            event!(
                target: "nagare::engine",
                Level::DEBUG,
                seat,
                %card,
                "rejected play: card not in hand"
            );
            return Err(PlayError::CardNotInHand(card));
        }
        match self.field.top() {
            Some(top) if !self.field.can_accept(card) => {
                event!(
                    target: "nagare::engine",
                    Level::DEBUG,
                    seat,
                    %card,
                    %top,
                    "rejected play: field does not accept card"
                );
                return Err(PlayError::IllegalPlay { card, top });
            }
            _ => {}
        }
        self.apply_play(card);
        self.resolve_opponents();
        Ok(())
    }

    pub fn submit_pass(&mut self) -> Result<(), PlayError> {
        self.human_turn()?;
        self.apply_pass();
        self.resolve_opponents();
        Ok(())
    }

    /// Lets scripted players take their turns until a human must act or the game ends.
    pub fn resolve_opponents(&mut self) {
        while !self.ended && !self.players[self.turn].is_human() {
            let seat = self.turn;
            match self.players[seat].choose_card(&self.field) {
                Some(card) if self.players[seat].has_card(card) && self.field.can_accept(card) => {
                    self.apply_play(card);
                }
                Some(card) => {
                    event!(
                        target: "nagare::engine",
                        Level::WARN,
                        seat,
                        player = self.players[seat].name(),
                        %card,
                        "policy chose an unplayable card, passing instead"
                    );
                    self.apply_pass();
                }
                None => self.apply_pass(),
            }
        }
    }

    fn human_turn(&self) -> Result<usize, PlayError> {
        if self.ended {
            return Err(PlayError::GameOver);
        }
        if !self.players[self.turn].is_human() {
            return Err(PlayError::NotPlayersTurn { turn: self.turn });
        }
        Ok(self.turn)
    }

    fn apply_play(&mut self, card: Card) {
        let seat = self.turn;
        self.field.play_card(card);
        self.players[seat]
            .remove_card(card)
            .expect("played card was checked against the hand");
        event!(
            target: "nagare::engine",
            Level::DEBUG,
            seat,
            player = self.players[seat].name(),
            %card,
            "card played"
        );
        self.events.push(GameEvent::Played { seat, card });
        self.advance_turn();
    }

    fn apply_pass(&mut self) {
        let seat = self.turn;
        event!(
            target: "nagare::engine",
            Level::DEBUG,
            seat,
            player = self.players[seat].name(),
            "passed"
        );
        self.events.push(GameEvent::Passed { seat });
        self.field.mark_pass_start(seat);
        self.advance_turn();
        if self.ended {
            return;
        }
        if self.field.close_pass_cycle(self.turn, &mut self.rng) {
            let top = self.field.top();
            event!(
                target: "nagare::engine",
                Level::DEBUG,
                top = ?top,
                "everyone passed, field flows"
            );
            self.events.push(GameEvent::FieldRefreshed { top });
            if self.field.is_exhausted() && self.nobody_can_play() {
                self.end_in_stalemate();
            }
        }
    }

    fn nobody_can_play(&self) -> bool {
        (0..self.players.len()).all(|seat| self.legal_cards(seat).is_empty())
    }

    /// Nothing is left to turn over and no hand fits the top card, so further
    /// pass cycles would change nothing. Players still holding cards are
    /// ranked by fewest cards, then by seat.
    fn end_in_stalemate(&mut self) {
        let mut holding: Vec<usize> = (0..self.players.len())
            .filter(|seat| !self.finished.contains(seat))
            .collect();
        holding.sort_by_key(|&seat| (self.players[seat].hand().len(), seat));
        event!(
            target: "nagare::engine",
            Level::INFO,
            top = ?self.field.top(),
            players = holding.len(),
            "no playable card left, stopping"
        );
        self.events.push(GameEvent::Stalled);
        if let Some(last) = holding.pop() {
            self.finished.extend(holding);
            self.finished.push(last);
            self.ended = true;
            self.events.push(GameEvent::GameEnded { last });
        }
    }

    fn advance_turn(&mut self) {
        let current = self.turn;
        if self.players[current].hand().is_empty() && !self.finished.contains(&current) {
            self.finished.push(current);
            let place = self.finished.len();
            event!(
                target: "nagare::engine",
                Level::INFO,
                seat = current,
                player = self.players[current].name(),
                place,
                "player finished"
            );
            self.events.push(GameEvent::Finished {
                seat: current,
                place,
            });
        }

        let count = self.players.len();
        for _ in 0..count {
            if self.holding_players() < 2 {
                self.end_game();
                return;
            }
            self.turn = (self.turn + 1) % count;
            if !self.players[self.turn].hand().is_empty() {
                return;
            }
        }
    }

    fn holding_players(&self) -> usize {
        self.players.iter().filter(|p| !p.hand().is_empty()).count()
    }

    fn end_game(&mut self) {
        self.ended = true;
        let remaining = (0..self.players.len()).find(|seat| !self.finished.contains(seat));
        if let Some(last) = remaining {
            self.finished.push(last);
            event!(
                target: "nagare::engine",
                Level::INFO,
                seat = last,
                player = self.players[last].name(),
                "game ended"
            );
            self.events.push(GameEvent::GameEnded { last });
        }
    }
}

fn validate_roster(players: &[Player]) -> Result<(), SetupError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(SetupError::PlayerCount(players.len()));
    }
    let humans = players.iter().filter(|p| p.is_human()).count();
    if humans > 1 {
        return Err(SetupError::TooManyHumans(humans));
    }
    Ok(())
}
