use tour_common::{Result, say};

use crate::context::Context;

const QUOTATION: &str = "\
The White Rabbit put on his spectacles.  \"Where shall I begin,
please your Majesty?\" he asked.
\"Begin at the beginning,\" the King said gravely, \"and go on
till you come to the end; then stop.\"";

/// Text before the first `delimiter`, or the whole string when it is absent.
pub fn prefix_before(text: &str, delimiter: char) -> &str {
    text.split_once(delimiter).map_or(text, |(head, _)| head)
}

/// Removes the last `n` characters, counting chars rather than bytes.
pub fn drop_last_chars(text: &mut String, n: usize) {
    let keep = text.chars().count().saturating_sub(n);
    let cut = text.char_indices().nth(keep).map_or(text.len(), |(idx, _)| idx);
    text.truncate(cut);
}

pub fn run(ctx: &mut Context) -> Result<()> {
    for line in QUOTATION.lines() {
        ctx.say(line);
    }
    for line in "Hello \nWorld \n!".lines() {
        ctx.say(line);
    }

    let mut empty = String::new();
    if empty.is_empty() {
        say!(ctx, "This string is empty.");
    }
    empty += "I am not empty now.";
    say!(ctx, "{empty}");

    for character in "Dog🐶".chars() {
        say!(ctx, "{character}");
    }

    let character = 'V';
    let characters = ['a', ',', 'b', ',', 'c'];
    let from_chars: String = characters.iter().collect();
    say!(ctx, "character: {character}, from_chars: {from_chars}");

    let mut built = String::from("aaa");
    built.push(character);
    built.push_str("another string");
    say!(ctx, "{built} has {} characters.", built.chars().count());

    let cafe = "café";
    say!(
        ctx,
        "\"{cafe}\" has {} chars but {} bytes",
        cafe.chars().count(),
        cafe.len()
    );

    let mut welcome = String::from("hello");
    welcome.push('!');
    say!(ctx, "{welcome}");
    welcome.insert_str(welcome.len() - 1, " there");
    say!(ctx, "{welcome}");
    welcome.pop();
    drop_last_chars(&mut welcome, 6);
    say!(ctx, "{welcome}");

    let greeting = "Hello, world!";
    say!(ctx, "beginning = {}", prefix_before(greeting, ','));

    let scene = "Act 1 Scene 1: Verona, A public place";
    say!(
        ctx,
        "starts with \"Act 1\": {}, ends with \"place\": {}",
        scene.starts_with("Act 1"),
        scene.ends_with("place")
    );

    let variable = "I am a variable string";
    let words: Vec<&str> = variable.split(' ').collect();
    say!(ctx, "split_result == {words:?}");
    say!(ctx, "upper = {}", variable.to_uppercase());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_stops_at_delimiter() {
        assert_eq!(prefix_before("Hello, world!", ','), "Hello");
        assert_eq!(prefix_before("no comma", ','), "no comma");
    }

    #[test]
    fn drop_last_chars_respects_char_boundaries() {
        let mut text = String::from("hello there");
        drop_last_chars(&mut text, 6);
        assert_eq!(text, "hello");

        let mut emoji = String::from("Dog🐶");
        drop_last_chars(&mut emoji, 1);
        assert_eq!(emoji, "Dog");

        let mut short = String::from("ab");
        drop_last_chars(&mut short, 5);
        assert_eq!(short, "");
    }

    #[test]
    fn transcript_edits_the_welcome_string() {
        let mut ctx = Context::new(0);
        run(&mut ctx).unwrap();
        let t = ctx.finish();
        assert!(t.contains("hello there!"));
        assert!(t.contains("aaaVanother string has 18 characters."));
        assert!(t.contains("has 4 chars but 5 bytes"));
        assert!(t.contains("🐶"));
    }
}
