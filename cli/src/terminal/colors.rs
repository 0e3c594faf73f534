use colored::Color;

pub const PRIMARY: Color = Color::TrueColor {
    r: 129,
    g: 199,
    b: 132,
};
pub const ACCENT: Color = Color::TrueColor {
    r: 255,
    g: 183,
    b: 77,
};
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor {
    r: 220,
    g: 220,
    b: 220,
};
pub const GUTTER: Color = Color::TrueColor {
    r: 90,
    g: 90,
    b: 110,
};
