use nagare_core::model::card::Card;
use nagare_core::model::rank::Rank;
use nagare_core::model::suit::Suit;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Hand,
    Field,
    /// `put` with the card on the same line, or `None` to prompt for it.
    Put(Option<Card>),
    Pass,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' to see what you can do")]
    Unknown(String),
    #[error("'{0}' is not a card; use a suit letter and a number, e.g. d4, s1, c12, h9")]
    InvalidCard(String),
}

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let trimmed = input.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "hand" => Command::Hand,
        "field" => Command::Field,
        "put" | "play" => {
            if rest.is_empty() {
                Command::Put(None)
            } else {
                Command::Put(Some(parse_card(rest)?))
            }
        }
        "pass" => Command::Pass,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(trimmed.to_string())),
    };

    if !rest.is_empty() && !matches!(command, Command::Put(_)) {
        return Err(CommandError::Unknown(trimmed.to_string()));
    }
    Ok(command)
}

/// Parses a suit letter followed by a rank from 1 to 13, e.g. `d4` or `c12`.
pub fn parse_card(input: &str) -> Result<Card, CommandError> {
    let trimmed = input.trim();
    let invalid = || CommandError::InvalidCard(trimmed.to_string());

    let mut chars = trimmed.chars();
    let suit = chars.next().and_then(Suit::from_letter).ok_or_else(invalid)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let rank = digits
        .parse::<u8>()
        .ok()
        .and_then(Rank::from_value)
        .ok_or_else(invalid)?;
    Ok(Card::new(rank, suit))
}
