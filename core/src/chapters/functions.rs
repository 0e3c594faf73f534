use tour_common::{Result, TourError, say};

use crate::context::Context;

pub fn greet(person: &str) -> String {
    format!("Hello, {person}!")
}

pub fn greet_from(person: &str, hometown: &str) -> String {
    format!("Hello {person}!  Glad you could visit from {hometown}.")
}

/// Smallest and largest value, or `None` for an empty slice.
pub fn min_max(values: &[i64]) -> Option<(i64, i64)> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold((*first, *first), |(min, max), &value| {
        (min.min(value), max.max(value))
    }))
}

/// `addend` falls back to 12 when the caller passes `None`.
pub fn add_with_default(value: i64, addend: Option<i64>) -> i64 {
    value + addend.unwrap_or(12)
}

pub fn arithmetic_mean(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

pub fn swap_two_ints(a: &mut i64, b: &mut i64) {
    let temp = *a;
    *a = *b;
    *b = temp;
}

fn add_two_ints(a: i64, b: i64) -> i64 {
    a + b
}

fn multiply_two_ints(a: i64, b: i64) -> i64 {
    a * b
}

fn math_result(math: fn(i64, i64) -> i64, a: i64, b: i64) -> String {
    format!("Result: {}", math(a, b))
}

fn step_forward(input: i64) -> i64 {
    input + 1
}

fn step_backward(input: i64) -> i64 {
    input - 1
}

pub fn choose_step_function(backward: bool) -> fn(i64) -> i64 {
    if backward { step_backward } else { step_forward }
}

/// Same as [`choose_step_function`], with the steps declared inside.
pub fn choose_nested_step(backward: bool) -> impl Fn(i64) -> i64 {
    fn forward(input: i64) -> i64 {
        input + 1
    }
    fn back(input: i64) -> i64 {
        input - 1
    }
    move |input| if backward { back(input) } else { forward(input) }
}

pub fn count_to_zero(mut current: i64, step: impl Fn(i64) -> i64) -> Vec<i64> {
    let mut visited = Vec::new();
    while current != 0 {
        visited.push(current);
        current = step(current);
    }
    visited
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let greeting = greet("Lee");
    say!(ctx, "Function name is \"greet\"");
    say!(ctx, "Function type is \"fn(&str) -> String\"");
    say!(ctx, "Function value is \"{greeting}\"");

    let (min, max) = min_max(&[8, -6, 2, 109, 3, 71])
        .ok_or_else(|| TourError::chapter("functions", "min_max found no values"))?;
    say!(ctx, "min is {min} and max is {max}");
    say!(ctx, "{}", greet_from("Bill", "Cupertino"));

    say!(ctx, "{}", add_with_default(3, Some(4)));
    say!(ctx, "{}", add_with_default(9, None));

    if let Some(mean) = arithmetic_mean(&[1.5, 6.5, 7.0]) {
        say!(ctx, "Average: {mean}");
    }

    let (mut num1, mut num2) = (11, 99);
    say!(ctx, "num1 = {num1}, num2 = {num2}");
    swap_two_ints(&mut num1, &mut num2);
    say!(ctx, "num1 = {num1}, num2 = {num2}");

    let mut math: fn(i64, i64) -> i64 = add_two_ints;
    say!(ctx, "math_result = {}", math(9, 8));
    math = multiply_two_ints;
    say!(ctx, "Result: {}", math(2, 3));
    say!(ctx, "{}", math_result(add_two_ints, 3, 5));
    say!(ctx, "{}", math_result(multiply_two_ints, 3, 5));

    let current = 3;
    say!(ctx, "Counting to zero:");
    for value in count_to_zero(current, choose_step_function(current > 0)) {
        say!(ctx, "{value}...");
    }
    say!(ctx, "zero!");

    let current = -4;
    for value in count_to_zero(current, choose_nested_step(current > 0)) {
        say!(ctx, "{value}...");
    }
    say!(ctx, "zero!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_of_values() {
        assert_eq!(min_max(&[8, -6, 2, 109, 3, 71]), Some((-6, 109)));
        assert_eq!(min_max(&[4]), Some((4, 4)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn default_and_variadic_parameters() {
        assert_eq!(add_with_default(3, Some(4)), 7);
        assert_eq!(add_with_default(9, None), 21);
        assert_eq!(arithmetic_mean(&[1.5, 6.5, 7.0]), Some(5.0));
        assert_eq!(arithmetic_mean(&[]), None);
    }

    #[test]
    fn swap_through_mutable_references() {
        let (mut a, mut b) = (1, 2);
        swap_two_ints(&mut a, &mut b);
        assert_eq!((a, b), (2, 1));
    }

    #[test]
    fn returned_functions_walk_to_zero() {
        assert_eq!(count_to_zero(3, choose_step_function(true)), vec![3, 2, 1]);
        assert_eq!(count_to_zero(-2, choose_nested_step(false)), vec![-2, -1]);
        assert!(count_to_zero(0, choose_step_function(true)).is_empty());
    }
}
