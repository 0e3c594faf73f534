use tour_common::{Result, say};

use crate::context::Context;

pub fn display_name(nickname: Option<&str>) -> &str {
    nickname.unwrap_or("Default Name")
}

pub fn can_enter(door_code: bool, retina_scan: bool, door_key: bool, override_password: bool) -> bool {
    (door_code && retina_scan) || door_key || override_password
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let a = 10;
    let b: Option<i32> = Some(a);
    say!(ctx, "a = {a}, b = {b:?}");

    let (x, y) = (10, 80);
    say!(ctx, "x = {x}, y = {y}");

    say!(ctx, "1 + 2 = {}, 9 / 4 = {}, 9 % 4 = {}, -9 % 4 = {}", 1 + 2, 9 / 4, 9 % 4, -9 % 4);
    say!(ctx, "9.0 / 4.0 = {}", 9.0 / 4.0);
    say!(ctx, "{}", String::from("Hello") + " World! " + &(1 + 2).to_string());

    let mut num = 10;
    num += 10;
    say!(ctx, "num += 10 gives {num}");

    say!(ctx, "(1, \"zebra\") < (2, \"apple\") is {}", (1, "zebra") < (2, "apple"));
    say!(ctx, "(3, \"apple\") < (3, \"bird\") is {}", (3, "apple") < (3, "bird"));
    say!(ctx, "(4, \"dog\") == (4, \"dog\") is {}", (4, "dog") == (4, "dog"));

    let contents_height = 40;
    let has_header = true;
    let row_height = contents_height + if has_header { 50 } else { 20 };
    say!(ctx, "row_height = {row_height}");

    let nickname: Option<&str> = Some("Lee");
    say!(ctx, "name = {}", display_name(nickname));
    say!(ctx, "name1 = {}", display_name(None));

    for index in 1..=5 {
        say!(ctx, "{index} times 5 is {}", index * 5);
    }

    let names = ["Anna", "Alex", "Brian", "Jack"];
    for (i, name) in names.iter().enumerate() {
        say!(ctx, "Person {} is called {name}", i + 1);
    }
    for name in &names[2..] {
        say!(ctx, "{name}");
    }
    for name in &names[..2] {
        say!(ctx, "{name}");
    }

    let range = ..=5;
    say!(ctx, "range = {range:?}, contains 7: {}, contains -1: {}", range.contains(&7), range.contains(&-1));

    if can_enter(true, false, false, true) {
        say!(ctx, "Welcome!");
    } else {
        say!(ctx, "ACCESS DENIED");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_coalescing_falls_back_to_default() {
        assert_eq!(display_name(Some("Lee")), "Lee");
        assert_eq!(display_name(None), "Default Name");
    }

    #[test]
    fn logical_operators_short_circuit_left_to_right() {
        assert!(can_enter(true, true, false, false));
        assert!(!can_enter(true, false, false, false));
        assert!(can_enter(false, false, false, true));
    }

    #[test]
    fn transcript_walks_ranges() {
        let mut ctx = Context::new(0);
        run(&mut ctx).unwrap();
        let t = ctx.finish();
        assert!(t.contains("5 times 5 is 25"));
        assert!(t.contains("Person 4 is called Jack"));
        assert!(t.contains("-9 % 4 = -1"));
        assert!(t.contains("Welcome!"));
    }
}
