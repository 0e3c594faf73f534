use std::collections::BTreeMap;

use tour_common::{Result, say};

use crate::context::Context;

pub fn natural_count(count: u32) -> &'static str {
    match count {
        0 => "no",
        1..5 => "a few",
        5..12 => "several",
        12..100 => "dozens of",
        100..1000 => "hundreds of",
        _ => "many",
    }
}

pub fn classify_point(point: (i32, i32)) -> String {
    match point {
        (0, 0) => format!("{point:?} is at the origin"),
        (_, 0) => format!("{point:?} is on the x-axis"),
        (0, _) => format!("{point:?} is on the y-axis"),
        (-2..=2, -2..=2) => format!("{point:?} is inside the box"),
        _ => format!("{point:?} is outside of the box"),
    }
}

pub fn classify_diagonal(point: (i32, i32)) -> String {
    match point {
        (x, y) if x == y => format!("({x}, {y}) is on the line x == y"),
        (x, y) if x == -y => format!("({x}, {y}) is on the line x == -y"),
        (x, y) => format!("({x}, {y}) is just some arbitrary point"),
    }
}

/// Rust has no `fallthrough`; the prime arm appends its text and the
/// common suffix is added afterwards.
pub fn describe_integer(number: u32) -> String {
    let mut description = format!("The number {number} is");
    if let 2 | 3 | 5 | 7 | 11 | 13 | 17 | 19 = number {
        description += " a prime number, and also";
    }
    description += " an integer.";
    description
}

/// The inner `break` only leaves the `for`; the outer `while` keeps going.
pub fn nested_break() -> (u32, u32) {
    let (mut a, mut b) = (0, 0);
    while a < 100 {
        for _ in 0..50 {
            a += 1;
            b += 2;
            if a == 60 {
                break;
            }
        }
    }
    (a, b)
}

/// The labelled break leaves both loops at once.
pub fn labelled_break() -> (u32, u32) {
    let (mut a, mut b) = (0, 0);
    'outer: while a < 100 {
        for _ in 0..50 {
            a += 1;
            b += 2;
            if a == 60 {
                break 'outer;
            }
        }
    }
    (a, b)
}

pub fn run(ctx: &mut Context) -> Result<()> {
    for name in ["Anna", "Alex", "Brian", "Jack"] {
        say!(ctx, "Hello, {name}!");
    }

    let legs = BTreeMap::from([("spider", 8), ("ant", 6), ("cat", 4)]);
    for (animal, count) in &legs {
        say!(ctx, "{animal}s have {count} legs");
    }

    let base = 3;
    let power = 10;
    let mut answer = 1;
    for _ in 0..power {
        answer *= base;
    }
    say!(ctx, "{base} to the power of {power} is {answer}");

    let ticks: Vec<String> = (0..20).step_by(5).map(|t| t.to_string()).collect();
    say!(ctx, "ticks: {}", ticks.join(" "));

    let mut today = 1;
    while today < 7 {
        say!(ctx, "Today is day {today} of the week.");
        today += 1;
    }
    say!(ctx, "Finish. today = {today}");

    today = 8;
    loop {
        say!(ctx, "Today is day {today} of the week.");
        today += 1;
        if today >= 7 {
            break;
        }
    }
    say!(ctx, "Finish. today = {today}");

    let some_character = 'z';
    match some_character {
        'a' => say!(ctx, "The first letter of the alphabet"),
        'z' => say!(ctx, "The last letter of the alphabet"),
        _ => say!(ctx, "Some other character"),
    }
    match 'a' {
        'a' | 'A' => say!(ctx, "The letter A"),
        _ => say!(ctx, "Not the letter A"),
    }

    say!(ctx, "There are {} moons orbiting Saturn.", natural_count(62));
    say!(ctx, "{}", classify_point((1, 1)));

    match (2, 0) {
        (x, 0) => say!(ctx, "on the x-axis with an x value of {x}"),
        (0, y) => say!(ctx, "on the y-axis with a y value of {y}"),
        (x, y) => say!(ctx, "somewhere else at ({x}, {y})"),
    }
    say!(ctx, "{}", classify_diagonal((1, -1)));

    let puzzle_input = "great minds think alike";
    let puzzle_output: String = puzzle_input
        .chars()
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | ' '))
        .collect();
    say!(ctx, "{puzzle_output}");

    say!(ctx, "{}", describe_integer(5));

    let (a, b) = nested_break();
    say!(ctx, "loop_num1 = {a}, loop_num2 = {b}");
    let (a, b) = labelled_break();
    say!(ctx, "loop_num3 = {a}, loop_num4 = {b}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_matching() {
        assert_eq!(natural_count(0), "no");
        assert_eq!(natural_count(4), "a few");
        assert_eq!(natural_count(62), "dozens of");
        assert_eq!(natural_count(5000), "many");
    }

    #[test]
    fn tuple_matching() {
        assert_eq!(classify_point((0, 0)), "(0, 0) is at the origin");
        assert_eq!(classify_point((3, 0)), "(3, 0) is on the x-axis");
        assert_eq!(classify_point((1, 1)), "(1, 1) is inside the box");
        assert_eq!(classify_point((5, 5)), "(5, 5) is outside of the box");
        assert!(classify_diagonal((1, -1)).ends_with("x == -y"));
        assert!(classify_diagonal((2, 2)).ends_with("x == y"));
    }

    #[test]
    fn fallthrough_emulation() {
        assert_eq!(describe_integer(5), "The number 5 is a prime number, and also an integer.");
        assert_eq!(describe_integer(4), "The number 4 is an integer.");
    }

    #[test]
    fn labelled_break_exits_early() {
        assert_eq!(nested_break(), (110, 220));
        assert_eq!(labelled_break(), (60, 120));
    }
}
