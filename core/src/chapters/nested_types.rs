//! Supporting types declared inside the module of the type they serve.

use std::fmt;

use tour_common::{Result, say};

use crate::context::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackjackCard {
    pub suit: blackjack_card::Suit,
    pub rank: blackjack_card::Rank,
}

pub mod blackjack_card {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Suit {
        Spades,
        Hearts,
        Diamonds,
        Clubs,
    }

    impl Suit {
        pub fn raw_value(self) -> char {
            match self {
                Suit::Spades => '♠',
                Suit::Hearts => '♥',
                Suit::Diamonds => '♦',
                Suit::Clubs => '♣',
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    #[repr(u8)]
    pub enum Rank {
        Two = 2,
        Three,
        Four,
        Five,
        Six,
        Seven,
        Eight,
        Nine,
        Ten,
        Jack,
        Queen,
        King,
        Ace,
    }

    /// Points a rank is worth; only an ace has a second value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Values {
        pub first: u8,
        pub second: Option<u8>,
    }

    impl Rank {
        pub fn raw_value(self) -> u8 {
            self as u8
        }

        pub fn values(self) -> Values {
            match self {
                Rank::Ace => Values {
                    first: 1,
                    second: Some(11),
                },
                Rank::Jack | Rank::Queen | Rank::King => Values {
                    first: 10,
                    second: None,
                },
                _ => Values {
                    first: self.raw_value(),
                    second: None,
                },
            }
        }
    }
}

impl fmt::Display for BlackjackCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.rank.values();
        write!(f, "suit is {}, value is {}", self.suit.raw_value(), values.first)?;
        if let Some(second) = values.second {
            write!(f, " or {second}")?;
        }
        Ok(())
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    use blackjack_card::{Rank, Suit};

    let the_ace_of_spades = BlackjackCard {
        suit: Suit::Spades,
        rank: Rank::Ace,
    };
    say!(ctx, "theAceOfSpades: {the_ace_of_spades}");

    let card = BlackjackCard {
        suit: Suit::Hearts,
        rank: Rank::Ace,
    };
    say!(ctx, "{card}");

    let queen = BlackjackCard {
        suit: Suit::Diamonds,
        rank: Rank::Queen,
    };
    say!(ctx, "{queen}");

    let hearts_symbol = blackjack_card::Suit::Hearts.raw_value();
    say!(ctx, "heartsSymbol is {hearts_symbol}");

    Ok(())
}
