//! Adding behaviour to existing types through extension traits and extra
//! `impl` blocks.

use std::fmt;

use tour_common::{Result, say};

use crate::context::Context;

/// Length units, converted to metres.
pub trait Length {
    fn km(self) -> f64;
    fn m(self) -> f64;
    fn cm(self) -> f64;
    fn mm(self) -> f64;
    fn ft(self) -> f64;
}

impl Length for f64 {
    fn km(self) -> f64 {
        self * 1_000.0
    }

    fn m(self) -> f64 {
        self
    }

    fn cm(self) -> f64 {
        self / 100.0
    }

    fn mm(self) -> f64 {
        self / 1_000.0
    }

    fn ft(self) -> f64 {
        self / 3.28084
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "origin: ({}, {}), size: ({}, {})",
            self.origin.x, self.origin.y, self.size.width, self.size.height
        )
    }
}

impl Rect {
    pub fn from_center(center: Point, size: Size) -> Self {
        Self {
            origin: Point {
                x: center.x - size.width / 2.0,
                y: center.y - size.height / 2.0,
            },
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Negative,
    Zero,
    Positive,
}

impl Kind {
    pub fn symbol(self) -> char {
        match self {
            Kind::Negative => '-',
            Kind::Zero => '0',
            Kind::Positive => '+',
        }
    }
}

pub trait IntExt {
    fn repetitions(self, task: impl FnMut());

    fn square(&mut self);

    /// Decimal digit `index` places from the right; `None` past the most
    /// significant digit, and for zero or negative numbers.
    fn digit(self, index: u32) -> Option<i64>;

    fn kind(self) -> Kind;
}

impl IntExt for i64 {
    fn repetitions(self, mut task: impl FnMut()) {
        for _ in 0..self {
            task();
        }
    }

    fn square(&mut self) {
        *self *= *self;
    }

    fn digit(self, index: u32) -> Option<i64> {
        let base = 10_i64.checked_pow(index)?;
        if self < base {
            return None;
        }
        Some(self / base % 10)
    }

    fn kind(self) -> Kind {
        match self {
            0 => Kind::Zero,
            x if x < 0 => Kind::Negative,
            _ => Kind::Positive,
        }
    }
}

pub fn integer_kinds(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.kind().symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let one_inch = 25.4_f64.mm();
    say!(ctx, "One inch is {one_inch} meters");
    let three_feet = 3.0_f64.ft();
    say!(ctx, "Three feet is {three_feet:.3} meters");
    let a_marathon = 42.0_f64.km() + 195.0_f64.m();
    say!(ctx, "A marathon is {a_marathon} meters long");

    let rect = Rect::from_center(
        Point { x: 10.0, y: 10.0 },
        Size {
            width: 10.0,
            height: 10.0,
        },
    );
    say!(ctx, "{rect}");

    let mut greetings = 0;
    3_i64.repetitions(|| greetings += 1);
    for _ in 0..greetings {
        say!(ctx, "Hello, Extension.");
    }

    let mut three_square = 3_i64;
    three_square.square();
    say!(ctx, "square 3 is {three_square}");

    for index in [0, 1, 9, 11] {
        let digit = 9_876_543_210_i64.digit(index);
        say!(ctx, "9876543210 digit {index} = {}", digit.unwrap_or(-99));
    }

    say!(ctx, "-3 is {:?}", (-3_i64).kind());
    say!(ctx, "{}", integer_kinds(&[3, 19, -27, 0, -6, 0, 7]));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marathon_length() {
        assert_eq!(42.0_f64.km() + 195.0_f64.m(), 42_195.0);
        assert_eq!(300.0_f64.cm(), 3.0);
    }

    #[test]
    fn digits_from_the_right() {
        let n = 9_876_543_210_i64;
        assert_eq!(n.digit(0), Some(0));
        assert_eq!(n.digit(1), Some(1));
        assert_eq!(n.digit(9), Some(9));
        assert_eq!(n.digit(10), None);
        assert_eq!(n.digit(11), None);
        assert_eq!(746_381_295_i64.digit(25), None);
    }

    #[test]
    fn non_positive_numbers_have_no_digits() {
        assert_eq!((-123_i64).digit(0), None);
        assert_eq!((-123_i64).digit(2), None);
        assert_eq!(i64::MIN.digit(0), None);
        assert_eq!(0_i64.digit(0), None);
        assert_eq!(7_i64.digit(0), Some(7));
    }

    #[test]
    fn square_mutates_in_place() {
        let mut n = 3_i64;
        n.square();
        assert_eq!(n, 9);
    }

    #[test]
    fn repetitions_runs_the_task() {
        let mut count = 0;
        4_i64.repetitions(|| count += 1);
        assert_eq!(count, 4);
    }

    #[test]
    fn kinds() {
        assert_eq!(integer_kinds(&[3, 19, -27, 0, -6, 0, 7]), "+ + - 0 - 0 +");
    }

    #[test]
    fn rect_from_center() {
        let rect = Rect::from_center(
            Point { x: 10.0, y: 10.0 },
            Size {
                width: 10.0,
                height: 10.0,
            },
        );
        assert_eq!(rect.to_string(), "origin: (5, 5), size: (10, 10)");
    }
}
