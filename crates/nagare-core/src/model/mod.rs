pub mod card;
pub mod deck;
pub mod field;
pub mod hand;
pub mod player;
pub mod rank;
pub mod suit;
