use std::cell::Cell;
use std::rc::Rc;

use tour_common::{Result, say};

use crate::context::Context;

#[derive(Debug, Default)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn increment_by(&mut self, amount: i64) {
        self.count += amount;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn is_to_the_right_of(&self, x: f64) -> bool {
        self.x > x
    }

    pub fn move_by(&mut self, delta_x: f64, delta_y: f64) {
        self.x += delta_x;
        self.y += delta_y;
    }

    /// Same effect as [`Point::move_by`], by replacing the whole value.
    pub fn moved_by(self, delta_x: f64, delta_y: f64) -> Self {
        Point {
            x: self.x + delta_x,
            y: self.y + delta_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriStateSwitch {
    Off,
    Low,
    High,
}

impl TriStateSwitch {
    pub fn next(&mut self) {
        *self = match self {
            TriStateSwitch::Off => TriStateSwitch::Low,
            TriStateSwitch::Low => TriStateSwitch::High,
            TriStateSwitch::High => TriStateSwitch::Off,
        };
    }
}

/// The highest level anyone has unlocked, shared by every tracker made from
/// the same book.
#[derive(Debug, Clone)]
pub struct ProgressBook {
    highest_unlocked: Rc<Cell<u32>>,
}

impl Default for ProgressBook {
    fn default() -> Self {
        Self {
            highest_unlocked: Rc::new(Cell::new(1)),
        }
    }
}

impl ProgressBook {
    pub fn unlock(&self, level: u32) {
        if level > self.highest_unlocked.get() {
            self.highest_unlocked.set(level);
        }
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        level <= self.highest_unlocked.get()
    }

    pub fn highest_unlocked(&self) -> u32 {
        self.highest_unlocked.get()
    }
}

#[derive(Debug)]
pub struct LevelTracker {
    book: ProgressBook,
    current_level: u32,
}

impl LevelTracker {
    pub fn new(book: ProgressBook) -> Self {
        Self {
            book,
            current_level: 1,
        }
    }

    pub fn advance(&mut self, level: u32) -> bool {
        if self.book.is_unlocked(level) {
            self.current_level = level;
            true
        } else {
            false
        }
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }
}

#[derive(Debug)]
pub struct Player {
    pub name: String,
    pub tracker: LevelTracker,
}

impl Player {
    pub fn new(name: &str, book: &ProgressBook) -> Self {
        Self {
            name: name.to_string(),
            tracker: LevelTracker::new(book.clone()),
        }
    }

    pub fn complete(&mut self, level: u32) {
        self.tracker.book.unlock(level + 1);
        self.tracker.advance(level + 1);
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let mut counter = Counter::default();
    counter.increment();
    say!(ctx, "counter.count = {}", counter.count());
    counter.increment_by(5);
    say!(ctx, "counter.count = {}", counter.count());
    counter.reset();
    say!(ctx, "counter.count = {}", counter.count());

    let mut point = Point { x: 4.0, y: 5.0 };
    if point.is_to_the_right_of(1.0) {
        say!(ctx, "This point is to the right of the line where x == 1.0");
    }
    point.move_by(2.0, 3.0);
    say!(ctx, "The point is now at ({:.1}, {:.1})", point.x, point.y);
    let point = point.moved_by(-6.0, -8.0);
    say!(ctx, "The point is now at ({:.1}, {:.1})", point.x, point.y);

    let mut oven_light = TriStateSwitch::Low;
    oven_light.next();
    say!(ctx, "oven_light = {oven_light:?}");
    oven_light.next();
    say!(ctx, "oven_light = {oven_light:?}");

    let book = ProgressBook::default();
    let mut player = Player::new("Argyrios", &book);
    player.complete(1);
    say!(ctx, "highest unlocked level is now {}", book.highest_unlocked());

    let mut newcomer = Player::new("Beto", &book);
    if newcomer.tracker.advance(6) {
        say!(ctx, "{} is now on level 6", newcomer.name);
    } else {
        say!(ctx, "level 6 has not yet been unlocked");
    }
    if newcomer.tracker.advance(2) {
        say!(ctx, "{} skipped ahead to level {}", newcomer.name, newcomer.tracker.current_level());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_methods() {
        let mut counter = Counter::default();
        counter.increment();
        counter.increment_by(99);
        assert_eq!(counter.count(), 100);
        counter.reset();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn mutating_and_replacing_a_value() {
        let mut point = Point { x: 10.0, y: 10.0 };
        point.move_by(6.0, 6.0);
        assert_eq!(point, Point { x: 16.0, y: 16.0 });
        assert_eq!(point.moved_by(-16.0, 0.0), Point { x: 0.0, y: 16.0 });
    }

    #[test]
    fn enum_method_replaces_self() {
        let mut switch = TriStateSwitch::High;
        switch.next();
        assert_eq!(switch, TriStateSwitch::Off);
    }

    #[test]
    fn unlocks_are_shared_through_the_book() {
        let book = ProgressBook::default();
        let mut first = Player::new("a", &book);
        let mut second = Player::new("b", &book);
        assert!(!second.tracker.advance(2));

        first.complete(1);
        assert_eq!(first.tracker.current_level(), 2);
        assert!(second.tracker.advance(2));
        assert!(!second.tracker.advance(6));
        assert_eq!(book.highest_unlocked(), 2);
    }

    #[test]
    fn unlock_never_lowers_the_ceiling() {
        let book = ProgressBook::default();
        book.unlock(5);
        book.unlock(3);
        assert_eq!(book.highest_unlocked(), 5);
    }
}
