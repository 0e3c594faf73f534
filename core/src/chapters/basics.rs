//! Constants, variables, literals, tuples, and values that may be absent.

use tour_common::{Result, say};

use crate::context::Context;

type Byte = u8;

/// Parses two numbers and checks that `first < second < 100`.
pub fn ordered_below_hundred(first: &str, second: &str) -> Option<(i64, i64)> {
    let first: i64 = first.parse().ok()?;
    let second: i64 = second.parse().ok()?;
    (first < second && second < 100).then_some((first, second))
}

pub fn ride_for_age(age: u32) -> &'static str {
    match age {
        0 => "You are too young to ride.",
        1..=10 => "You can ride the ferris wheel.",
        _ => "You can ride the roller-coaster or the ferris wheel.",
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let max_login_attempts = 10;
    let mut nickname = "Boom";
    nickname = if max_login_attempts > 3 { "Big Boom" } else { nickname };
    say!(ctx, "max_login_attempts = {max_login_attempts}, nickname = {nickname}");

    let favourite_show = "海贼王 😊";
    say!(ctx, "favourite show: {favourite_show}");

    let decimal = 17;
    let binary = 0b10001;
    let octal = 0o21;
    let hexadecimal = 0x11;
    say!(
        ctx,
        "17 written four ways: {decimal}, {binary}, {octal}, {hexadecimal}"
    );
    say!(ctx, "one million reads better as {}", 1_000_000);

    let one: i32 = 1;
    let pi_plus_one = std::f64::consts::PI + f64::from(one);
    say!(ctx, "pi + 1 = {pi_plus_one:.5}");

    let small: Byte = 19;
    say!(ctx, "Byte is an alias for u8, max = {}, small = {small}", Byte::MAX);

    let oranges_are_orange = true;
    if oranges_are_orange {
        say!(ctx, "Yes, you are right");
    }

    let http404_error = (404, "Not Found");
    say!(ctx, "http404_error: {}, {}", http404_error.0, http404_error.1);
    let (status_code, status_message) = http404_error;
    say!(ctx, "decomposed: {status_code} / {status_message}");

    struct Status {
        code: u16,
        message: &'static str,
    }
    let http200_status = Status {
        code: 200,
        message: "It's OK",
    };
    say!(
        ctx,
        "http200_status: {}, {}",
        http200_status.code,
        http200_status.message
    );

    let converted: Option<i64> = "123".parse().ok();
    say!(ctx, "converted = {converted:?}");

    let not_a_number: Option<i64> = "hello".parse().ok();
    match not_a_number {
        Some(number) => say!(ctx, "Convert Success: {number}"),
        None => say!(ctx, "Convert Failed"),
    }

    if let Ok(actual) = "456".parse::<i64>() {
        say!(ctx, "Optional Binding: {actual}");
    }

    if let Some((first, second)) = ordered_below_hundred("4", "42") {
        say!(ctx, "{first} < {second} < 100");
    }

    let possible: Option<&str> = Some("An optional string.");
    let forced: &str = possible.unwrap_or_default();
    say!(ctx, "forced = {forced}");

    let age: i32 = 3;
    assert!(age >= 0, "A person's age can't be less than zero.");
    say!(ctx, "{}", ride_for_age(age.unsigned_abs()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_pair_requires_both_parses_and_order() {
        assert_eq!(ordered_below_hundred("4", "42"), Some((4, 42)));
        assert_eq!(ordered_below_hundred("42", "4"), None);
        assert_eq!(ordered_below_hundred("4", "142"), None);
        assert_eq!(ordered_below_hundred("four", "42"), None);
    }

    #[test]
    fn rides_by_age() {
        assert_eq!(ride_for_age(3), "You can ride the ferris wheel.");
        assert!(ride_for_age(11).contains("roller-coaster"));
        assert!(ride_for_age(0).contains("too young"));
    }

    #[test]
    fn transcript_shows_parsing_outcomes() {
        let mut ctx = Context::new(0);
        run(&mut ctx).unwrap();
        let transcript = ctx.finish();
        assert!(transcript.contains("converted = Some(123)"));
        assert!(transcript.contains("Convert Failed"));
        assert!(transcript.contains("4 < 42 < 100"));
        assert!(transcript.contains("17, 17, 17, 17"));
    }
}
