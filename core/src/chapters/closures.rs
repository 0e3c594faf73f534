use std::cmp::{Ordering, Reverse};

use tour_common::{Result, say};

use crate::context::Context;

const NAMES: [&str; 5] = ["Chris", "Alex", "Ewa", "Barry", "Daniella"];

fn backward(s1: &&str, s2: &&str) -> Ordering {
    s2.cmp(s1)
}

/// Returns a counter that adds `amount` on every call.
///
/// The closure owns its running total, so two incrementers never share
/// state.
pub fn make_incrementer(amount: i32) -> impl FnMut() -> i32 {
    let mut running_total = 0;
    move || {
        running_total += amount;
        running_total
    }
}

/// Calls `f` once; an `FnOnce` may consume what it captured.
pub fn consume<F: FnOnce() -> String>(f: F) -> String {
    f()
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let mut by_function = NAMES.to_vec();
    by_function.sort_by(backward);
    say!(ctx, "names sorted by backward function: {by_function:?}");

    let mut by_closure = NAMES.to_vec();
    by_closure.sort_by(|s1: &&str, s2: &&str| -> Ordering { s2.cmp(s1) });
    say!(ctx, "names sorted by closure: {by_closure:?}");

    let mut inferred = NAMES.to_vec();
    inferred.sort_by(|s1, s2| s2.cmp(s1));
    say!(ctx, "names sorted by closure (inferred types): {inferred:?}");

    let mut keyed = NAMES.to_vec();
    keyed.sort_by_key(|name| Reverse(*name));
    say!(ctx, "names sorted by key (Reverse): {keyed:?}");

    let mut reversed = NAMES.to_vec();
    reversed.sort_unstable();
    reversed.reverse();
    say!(ctx, "names sorted then reversed: {reversed:?}");

    let mut increment_by_ten = make_incrementer(10);
    let mut increment_by_seven = make_incrementer(7);
    say!(ctx, "increment_by_ten() = {}", increment_by_ten());
    say!(ctx, "increment_by_ten() = {}", increment_by_ten());
    say!(ctx, "increment_by_seven() = {}", increment_by_seven());
    say!(ctx, "increment_by_ten() = {}", increment_by_ten());

    let digit_names = ["Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine"];
    let strings: Vec<String> = [16u32, 58, 510]
        .iter()
        .map(|&number| {
            let mut number = number;
            let mut output = String::new();
            loop {
                output.insert_str(0, digit_names[(number % 10) as usize]);
                number /= 10;
                if number == 0 {
                    break output;
                }
            }
        })
        .collect();
    say!(ctx, "mapped digits: {strings:?}");

    let customer = String::from("Chris");
    let served = consume(move || format!("Now serving {customer}!"));
    say!(ctx, "{served}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incrementers_keep_separate_totals() {
        let mut by_ten = make_incrementer(10);
        let mut by_seven = make_incrementer(7);
        assert_eq!(by_ten(), 10);
        assert_eq!(by_ten(), 20);
        assert_eq!(by_seven(), 7);
        assert_eq!(by_ten(), 30);
    }

    #[test]
    fn every_sort_variant_agrees() {
        let mut ctx = Context::new(0);
        run(&mut ctx).unwrap();
        let t = ctx.finish();
        let expected = r#"["Ewa", "Daniella", "Chris", "Barry", "Alex"]"#;
        let sorted_lines = t.lines().iter().filter(|l| l.starts_with("names sorted")).count();
        let agreeing = t.lines().iter().filter(|l| l.ends_with(expected)).count();
        assert_eq!(sorted_lines, 5);
        assert_eq!(agreeing, 5);
    }

    #[test]
    fn map_with_closure_builds_digit_names() {
        let mut ctx = Context::new(0);
        run(&mut ctx).unwrap();
        assert!(ctx.transcript().contains(r#"["OneSix", "FiveEight", "FiveOneZero"]"#));
    }
}
