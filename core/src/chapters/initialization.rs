//! Constructors: defaults, named constructors, delegation, and failable
//! construction that returns `None` instead of a value.

use std::fmt;

use tour_common::{Result, say};

use crate::context::Context;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fahrenheit {
    pub temperature: f64,
}

impl Default for Fahrenheit {
    fn default() -> Self {
        Self { temperature: 32.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Celsius {
    pub temperature_in_celsius: f64,
}

impl Celsius {
    pub fn new(celsius: f64) -> Self {
        Self {
            temperature_in_celsius: celsius,
        }
    }

    pub fn from_fahrenheit(fahrenheit: f64) -> Self {
        Self::new((fahrenheit - 32.0) / 1.8)
    }

    pub fn from_kelvin(kelvin: f64) -> Self {
        Self::new(kelvin - 273.15)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn white(white: f64) -> Self {
        Self::new(white, white, white)
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

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Delegates to [`Rect::new`] after working out the origin.
    pub fn from_center(center: Point, size: Size) -> Self {
        let origin = Point {
            x: center.x - size.width / 2.0,
            y: center.y - size.height / 2.0,
        };
        Self::new(origin, size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    pub name: String,
}

impl Food {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn unnamed() -> Self {
        Self::new("[Unnamed]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub food: Food,
    pub quantity: u32,
}

impl RecipeIngredient {
    pub fn new(name: &str, quantity: u32) -> Self {
        Self {
            food: Food::new(name),
            quantity,
        }
    }

    /// One of something, unless told otherwise.
    pub fn single(name: &str) -> Self {
        Self::new(name, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub ingredient: RecipeIngredient,
    pub purchased: bool,
}

impl From<RecipeIngredient> for ShoppingListItem {
    fn from(ingredient: RecipeIngredient) -> Self {
        Self {
            ingredient,
            purchased: false,
        }
    }
}

impl fmt::Display for ShoppingListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} {}",
            self.ingredient.quantity,
            self.ingredient.food.name,
            if self.purchased { "✔" } else { "✘" }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
}

impl Product {
    /// `None` for an empty name.
    pub fn new(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// `None` when the name is empty or fewer than one item is requested.
    pub fn new(name: &str, quantity: u32) -> Option<Self> {
        if quantity < 1 {
            return None;
        }
        let product = Product::new(name)?;
        Some(Self { product, quantity })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'K' => Some(TemperatureUnit::Kelvin),
            'C' => Some(TemperatureUnit::Celsius),
            'F' => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }
}

/// Every implementor must provide this constructor.
pub trait Blank {
    fn blank() -> Self;
}

impl Blank for Food {
    fn blank() -> Self {
        Food::unnamed()
    }
}

impl Blank for Rect {
    fn blank() -> Self {
        Rect::default()
    }
}

pub fn blank_pair<A: Blank, B: Blank>() -> (A, B) {
    (A::blank(), B::blank())
}

/// A board whose colours are computed by a function at construction time.
#[derive(Debug, Clone)]
pub struct Chessboard {
    colors: Vec<bool>,
}

impl Default for Chessboard {
    fn default() -> Self {
        let mut colors = Vec::with_capacity(64);
        let mut is_black = false;
        for _ in 0..8 {
            for _ in 0..8 {
                colors.push(is_black);
                is_black = !is_black;
            }
            is_black = !is_black;
        }
        Self { colors }
    }
}

impl Chessboard {
    pub fn square_is_black_at(&self, row: usize, column: usize) -> bool {
        self.colors[row * 8 + column]
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let f = Fahrenheit::default();
    say!(ctx, "The default temperature is {:.1}° Fahrenheit", f.temperature);

    let boiling = Celsius::from_fahrenheit(212.0);
    let freezing = Celsius::from_kelvin(273.15);
    say!(
        ctx,
        "boiling = {:.1}°C, freezing = {:.1}°C, body = {:.1}°C",
        boiling.temperature_in_celsius,
        freezing.temperature_in_celsius,
        Celsius::new(37.0).temperature_in_celsius
    );

    let magenta = Color::new(1.0, 0.0, 1.0);
    let half_gray = Color::white(0.5);
    say!(ctx, "magenta = {magenta:?}");
    say!(ctx, "half_gray = {half_gray:?}");

    let center_rect = Rect::from_center(
        Point { x: 4.0, y: 4.0 },
        Size {
            width: 3.0,
            height: 3.0,
        },
    );
    say!(
        ctx,
        "center_rect origin is ({:.1}, {:.1})",
        center_rect.origin.x,
        center_rect.origin.y
    );

    let mut breakfast_list: Vec<ShoppingListItem> = vec![
        RecipeIngredient::single("Orange juice").into(),
        RecipeIngredient::single("Bacon").into(),
        RecipeIngredient::new("Eggs", 6).into(),
        RecipeIngredient {
            food: Food::unnamed(),
            quantity: 1,
        }
        .into(),
    ];
    breakfast_list[0].purchased = true;
    for item in &breakfast_list {
        say!(ctx, "{item}");
    }

    for (name, quantity) in [("sock", 2), ("shirt", 0), ("", 1)] {
        match CartItem::new(name, quantity) {
            Some(item) => say!(ctx, "Item: {}, quantity: {}", item.product.name, item.quantity),
            None => say!(ctx, "Unable to initialize {quantity} x '{name}'"),
        }
    }

    for symbol in ['F', 'X'] {
        match TemperatureUnit::from_symbol(symbol) {
            Some(unit) => say!(ctx, "'{symbol}' is {unit:?}, initialization succeeded."),
            None => say!(ctx, "'{symbol}' is not a defined temperature unit, initialization failed."),
        }
    }

    let (food, rect): (Food, Rect) = blank_pair();
    say!(ctx, "blank food is {}, blank rect is {:?}", food.name, rect.size);

    let board = Chessboard::default();
    say!(
        ctx,
        "square (0, 1) is black: {}, square (7, 7) is black: {}",
        board.square_is_black_at(0, 1),
        board.square_is_black_at(7, 7)
    );

    Ok(())
}
