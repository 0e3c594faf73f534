//! Traits as requirements: properties, methods, constructors, delegation,
//! default methods and composition.

use tour_common::{Result, say};

use crate::context::Context;

pub trait FullyNamed {
    fn full_name(&self) -> String;
}

pub struct Person {
    pub full_name: String,
}

impl FullyNamed for Person {
    fn full_name(&self) -> String {
        self.full_name.clone()
    }
}

pub struct Starship {
    pub prefix: Option<String>,
    pub name: String,
}

impl FullyNamed for Starship {
    fn full_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix} {}", self.name),
            None => self.name.clone(),
        }
    }
}

pub trait RandomNumberGenerator {
    /// A value in `[0, 1)`.
    fn random(&mut self) -> f64;

    fn random_bool(&mut self) -> bool {
        self.random() > 0.5
    }
}

#[derive(Debug, Clone)]
pub struct LinearCongruentialGenerator {
    last_random: f64,
}

impl LinearCongruentialGenerator {
    const M: f64 = 139_968.0;
    const A: f64 = 3_877.0;
    const C: f64 = 29_573.0;
}

impl Default for LinearCongruentialGenerator {
    fn default() -> Self {
        Self { last_random: 42.0 }
    }
}

impl RandomNumberGenerator for LinearCongruentialGenerator {
    fn random(&mut self) -> f64 {
        self.last_random = (self.last_random * Self::A + Self::C) % Self::M;
        self.last_random / Self::M
    }
}

pub trait Togglable {
    fn toggle(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnOffSwitch {
    Off,
    On,
}

impl Togglable for OnOffSwitch {
    fn toggle(&mut self) {
        *self = match self {
            OnOffSwitch::Off => OnOffSwitch::On,
            OnOffSwitch::On => OnOffSwitch::Off,
        };
    }
}

/// Required constructor: every implementor can be built from a number.
pub trait FromCount {
    fn from_count(count: u32) -> Self;
}

/// A die that draws from any generator it is given.
pub struct Dice {
    pub sides: u32,
    generator: Box<dyn RandomNumberGenerator>,
}

impl Dice {
    pub fn new(sides: u32, generator: Box<dyn RandomNumberGenerator>) -> Self {
        Self { sides, generator }
    }

    pub fn roll(&mut self) -> u32 {
        (self.generator.random() * f64::from(self.sides)) as u32 + 1
    }
}

impl FromCount for Dice {
    fn from_count(count: u32) -> Self {
        Dice::new(count, Box::new(LinearCongruentialGenerator::default()))
    }
}

pub trait DiceGame {
    fn dice(&self) -> &Dice;

    fn name(&self) -> &str;

    fn play(&mut self, delegate: Option<&mut dyn DiceGameDelegate>);
}

pub trait DiceGameDelegate {
    fn game_did_start(&mut self, game: &dyn DiceGame);

    fn game_did_start_new_turn(&mut self, game: &dyn DiceGame, dice_roll: u32);

    fn game_did_end(&mut self, game: &dyn DiceGame);
}

pub struct SnakesAndLadders {
    dice: Dice,
    board: Vec<i32>,
    square: usize,
}

impl SnakesAndLadders {
    pub const FINAL_SQUARE: usize = 25;

    pub fn new(dice: Dice) -> Self {
        let mut board = vec![0; Self::FINAL_SQUARE + 1];
        for (square, shift) in [
            (3, 8),
            (6, 11),
            (9, 9),
            (10, 2),
            (14, -10),
            (19, -11),
            (22, -2),
            (24, -8),
        ] {
            board[square] = shift;
        }
        Self {
            dice,
            board,
            square: 0,
        }
    }
}

impl DiceGame for SnakesAndLadders {
    fn dice(&self) -> &Dice {
        &self.dice
    }

    fn name(&self) -> &str {
        "Snakes and Ladders"
    }

    fn play(&mut self, mut delegate: Option<&mut dyn DiceGameDelegate>) {
        self.square = 0;
        if let Some(d) = delegate.as_deref_mut() {
            d.game_did_start(&*self);
        }

        while self.square != Self::FINAL_SQUARE {
            let dice_roll = self.dice.roll();
            if let Some(d) = delegate.as_deref_mut() {
                d.game_did_start_new_turn(&*self, dice_roll);
            }

            let next = self.square + dice_roll as usize;
            if next == Self::FINAL_SQUARE {
                self.square = next;
            } else if next < Self::FINAL_SQUARE {
                self.square = next.saturating_add_signed(self.board[next] as isize);
            }
        }

        if let Some(d) = delegate.as_deref_mut() {
            d.game_did_end(&*self);
        }
    }
}

/// Counts turns and keeps a log of what it saw.
#[derive(Debug, Default)]
pub struct DiceGameTracker {
    pub number_of_turns: u32,
    pub log: Vec<String>,
}

impl DiceGameDelegate for DiceGameTracker {
    fn game_did_start(&mut self, game: &dyn DiceGame) {
        self.number_of_turns = 0;
        self.log.push(format!("Started a new game of {}", game.name()));
        self.log
            .push(format!("The game is using a {}-sided dice", game.dice().sides));
    }

    fn game_did_start_new_turn(&mut self, _game: &dyn DiceGame, dice_roll: u32) {
        self.number_of_turns += 1;
        self.log.push(format!("Rolled a {dice_roll}"));
    }

    fn game_did_end(&mut self, _game: &dyn DiceGame) {
        self.log
            .push(format!("The game lasted for {} turns", self.number_of_turns));
    }
}

pub trait TextRepresentable {
    fn text_description(&self) -> String;
}

/// Extends [`TextRepresentable`] with a default that builds on it.
pub trait PrettyTextRepresentable: TextRepresentable {
    fn pretty_text_description(&self) -> String {
        format!("~ {} ~", self.text_description())
    }
}

impl TextRepresentable for Dice {
    fn text_description(&self) -> String {
        format!("A {}-sided dice", self.sides)
    }
}

impl TextRepresentable for SnakesAndLadders {
    fn text_description(&self) -> String {
        format!("A game of Snakes and Ladders with {} squares", Self::FINAL_SQUARE)
    }
}

impl PrettyTextRepresentable for SnakesAndLadders {}

pub struct Hamster {
    pub name: String,
}

impl TextRepresentable for Hamster {
    fn text_description(&self) -> String {
        format!("A hamster named {}", self.name)
    }
}

impl<T: TextRepresentable> TextRepresentable for [T] {
    fn text_description(&self) -> String {
        let items: Vec<String> = self.iter().map(T::text_description).collect();
        format!("[{}]", items.join(", "))
    }
}

/// Requirements a data source may leave unimplemented.
pub trait CounterDataSource {
    fn increment_for_count(&self, _count: i64) -> Option<i64> {
        None
    }

    fn fixed_increment(&self) -> Option<i64> {
        None
    }
}

pub struct ThreeSource;

impl CounterDataSource for ThreeSource {
    fn fixed_increment(&self) -> Option<i64> {
        Some(3)
    }
}

pub struct TowardsZeroSource;

impl CounterDataSource for TowardsZeroSource {
    fn increment_for_count(&self, count: i64) -> Option<i64> {
        Some(-count.signum())
    }
}

#[derive(Default)]
pub struct Counter {
    pub count: i64,
    pub data_source: Option<Box<dyn CounterDataSource>>,
}

impl Counter {
    pub fn increment(&mut self) {
        let Some(source) = &self.data_source else {
            return;
        };
        if let Some(amount) = source.increment_for_count(self.count) {
            self.count += amount;
        } else if let Some(amount) = source.fixed_increment() {
            self.count += amount;
        }
    }
}

pub trait Named {
    fn name(&self) -> &str;
}

pub trait Aged {
    fn age(&self) -> u32;
}

pub struct Birthday {
    pub name: String,
    pub age: u32,
}

impl Named for Birthday {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Aged for Birthday {
    fn age(&self) -> u32 {
        self.age
    }
}

pub fn wish_happy_birthday(celebrator: &(impl Named + Aged)) -> String {
    format!(
        "Happy birthday, {}, you're {}!",
        celebrator.name(),
        celebrator.age()
    )
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let john = Person {
        full_name: "John Appleseed".to_string(),
    };
    let ncc1701 = Starship {
        prefix: Some("USS".to_string()),
        name: "Enterprise".to_string(),
    };
    say!(ctx, "{} and the {}", john.full_name(), ncc1701.full_name());

    let mut generator = LinearCongruentialGenerator::default();
    say!(ctx, "Here's a random number: {}", generator.random());
    say!(ctx, "And another one: {}", generator.random());
    say!(ctx, "And here's a random Boolean: {}", generator.random_bool());

    let mut light_switch = OnOffSwitch::Off;
    light_switch.toggle();
    say!(ctx, "light_switch is now {light_switch:?}");

    let mut d6 = Dice::from_count(6);
    let rolls: Vec<String> = (0..5).map(|_| d6.roll().to_string()).collect();
    say!(ctx, "Random dice rolls are {}", rolls.join(", "));

    let mut tracker = DiceGameTracker::default();
    let mut game = SnakesAndLadders::new(Dice::from_count(6));
    game.play(Some(&mut tracker));
    for line in &tracker.log {
        say!(ctx, "{line}");
    }

    let d12 = Dice::from_count(12);
    say!(ctx, "{}", d12.text_description());
    say!(ctx, "{}", game.pretty_text_description());

    let simon = Hamster {
        name: "Simon".to_string(),
    };
    let things: Vec<&dyn TextRepresentable> = vec![&game, &d12, &simon];
    for thing in things {
        say!(ctx, "{}", thing.text_description());
    }
    let dice = [Dice::from_count(6), Dice::from_count(12)];
    say!(ctx, "{}", dice.text_description());

    let mut counter = Counter {
        data_source: Some(Box::new(ThreeSource)),
        ..Counter::default()
    };
    let counts: Vec<String> = (0..4)
        .map(|_| {
            counter.increment();
            counter.count.to_string()
        })
        .collect();
    say!(ctx, "counting by three: {}", counts.join(" "));

    counter.count = -4;
    counter.data_source = Some(Box::new(TowardsZeroSource));
    let counts: Vec<String> = (0..5)
        .map(|_| {
            counter.increment();
            counter.count.to_string()
        })
        .collect();
    say!(ctx, "counting towards zero: {}", counts.join(" "));

    let birthday_person = Birthday {
        name: "Malcolm".to_string(),
        age: 21,
    };
    say!(ctx, "{}", wish_happy_birthday(&birthday_person));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starship_prefix_is_optional() {
        let ship = Starship {
            prefix: None,
            name: "Rocinante".to_string(),
        };
        assert_eq!(ship.full_name(), "Rocinante");
    }

    #[test]
    fn generator_sequence_is_fixed() {
        let mut generator = LinearCongruentialGenerator::default();
        assert!((generator.random() - 52_439.0 / 139_968.0).abs() < 1e-12);
        assert!((generator.random() - 102_040.0 / 139_968.0).abs() < 1e-12);
    }

    #[test]
    fn dice_rolls_stay_in_range() {
        let mut d6 = Dice::from_count(6);
        let rolls: Vec<u32> = (0..4).map(|_| d6.roll()).collect();
        assert_eq!(rolls, vec![3, 5, 4, 5]);
        assert!((0..100).all(|_| (1..=6).contains(&d6.roll())));
    }

    #[test]
    fn tracker_follows_the_game() {
        let mut tracker = DiceGameTracker::default();
        let mut game = SnakesAndLadders::new(Dice::from_count(6));
        game.play(Some(&mut tracker));
        assert_eq!(tracker.number_of_turns, 4);
        assert_eq!(tracker.log.first().unwrap(), "Started a new game of Snakes and Ladders");
        assert_eq!(tracker.log.last().unwrap(), "The game lasted for 4 turns");
    }

    #[test]
    fn game_runs_without_a_delegate() {
        let mut game = SnakesAndLadders::new(Dice::from_count(6));
        game.play(None);
        assert_eq!(game.square, SnakesAndLadders::FINAL_SQUARE);
    }

    #[test]
    fn toggle_flips() {
        let mut switch = OnOffSwitch::On;
        switch.toggle();
        assert_eq!(switch, OnOffSwitch::Off);
    }

    #[test]
    fn collection_conformance() {
        let dice = [Dice::from_count(6), Dice::from_count(12)];
        assert_eq!(dice.text_description(), "[A 6-sided dice, A 12-sided dice]");
    }

    #[test]
    fn optional_requirements() {
        let mut counter = Counter {
            count: -4,
            data_source: Some(Box::new(TowardsZeroSource)),
        };
        for _ in 0..5 {
            counter.increment();
        }
        assert_eq!(counter.count, 0);

        let mut idle = Counter::default();
        idle.increment();
        assert_eq!(idle.count, 0);
    }

    #[test]
    fn composition() {
        let person = Birthday {
            name: "Malcolm".to_string(),
            age: 21,
        };
        assert_eq!(wish_happy_birthday(&person), "Happy birthday, Malcolm, you're 21!");
    }
}
