use std::fmt;

use tour_common::{Result, say};

use crate::context::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    North,
    South,
    East,
    West,
}

impl CompassPoint {
    pub fn remark(self) -> &'static str {
        match self {
            CompassPoint::North => "Lots of planets have a north",
            CompassPoint::South => "Watch out for penguins",
            CompassPoint::East => "Where the sun rises",
            CompassPoint::West => "Where the skies are blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Barcode {
    Upc(u8, u32, u32, u8),
    QrCode(String),
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Barcode::Upc(number_system, manufacturer, product, check) => {
                write!(f, "UPC: {number_system}, {manufacturer}, {product}, {check}.")
            }
            Barcode::QrCode(code) => write!(f, "QR code: {code}."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsciiControl {
    Tab = b'\t' as isize,
    LineFeed = b'\n' as isize,
    CarriageReturn = b'\r' as isize,
}

/// Discriminants continue implicitly from the first explicit one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Planet {
    Mercury = 1,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Failable construction from a raw value.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|planet| *planet as u8 == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn raw_value(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// Recursive cases are boxed so the enum has a known size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticExpression {
    Number(i64),
    Addition(Box<ArithmeticExpression>, Box<ArithmeticExpression>),
    Multiplication(Box<ArithmeticExpression>, Box<ArithmeticExpression>),
}

impl ArithmeticExpression {
    pub fn add(left: Self, right: Self) -> Self {
        Self::Addition(Box::new(left), Box::new(right))
    }

    pub fn mul(left: Self, right: Self) -> Self {
        Self::Multiplication(Box::new(left), Box::new(right))
    }

    pub fn evaluate(&self) -> i64 {
        match self {
            Self::Number(value) => *value,
            Self::Addition(left, right) => left.evaluate() + right.evaluate(),
            Self::Multiplication(left, right) => left.evaluate() * right.evaluate(),
        }
    }
}

impl fmt::Display for ArithmeticExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Addition(left, right) => write!(f, "({left} + {right})"),
            Self::Multiplication(left, right) => write!(f, "{left} * {right}"),
        }
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let mut direction = CompassPoint::West;
    say!(ctx, "heading {direction:?}");
    direction = CompassPoint::East;
    say!(ctx, "{}", direction.remark());

    let mut product_barcode = Barcode::Upc(8, 85909, 51226, 3);
    say!(ctx, "{product_barcode}");
    product_barcode = Barcode::QrCode("ABCDEFGHIJKLMNOP".to_string());
    match &product_barcode {
        Barcode::Upc(..) => say!(ctx, "still a UPC"),
        Barcode::QrCode(code) => say!(ctx, "QR code: {code}."),
    }

    say!(ctx, "line feed raw value = {}", AsciiControl::LineFeed as u8);
    say!(ctx, "tab raw value = {}", AsciiControl::Tab as u8);
    say!(ctx, "carriage return raw value = {}", AsciiControl::CarriageReturn as u8);
    say!(ctx, "earth raw value = {}", Planet::Earth as u8);
    say!(ctx, "south raw value = {}", Direction::South.raw_value());

    let position = 11;
    match Planet::from_raw(position) {
        Some(Planet::Earth) => say!(ctx, "Mostly harmless"),
        Some(other) => say!(ctx, "Not a safe place for humans: {other:?}"),
        None => say!(ctx, "There isn't a planet at position {position}"),
    }
    if let Some(planet) = Planet::from_raw(7) {
        say!(ctx, "planet at position 7 is {planet:?}");
    }

    use self::ArithmeticExpression::Number;
    let sum = ArithmeticExpression::add(Number(5), Number(4));
    let product = ArithmeticExpression::mul(sum, Number(2));
    say!(ctx, "product = {product}");
    say!(ctx, "result = {}", product.evaluate());

    Ok(())
}
