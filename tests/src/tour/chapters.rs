#![cfg(test)]
use std::rc::Rc;

use tour_core::chapters::deinitialization::{Bank, BankPlayer};
use tour_core::chapters::enumerations::ArithmeticExpression;
use tour_core::chapters::generics::Stack;
use tour_core::chapters::initialization::CartItem;
use tour_core::chapters::reference_counting::{Apartment, DropLog, Person};
use tour_core::chapters::subscripts::Matrix;
use tour_core::tour::{self, Selection};
use tour_common::config::Config;

fn transcript_of(slug: &str) -> Vec<String> {
    let cfg = Config {
        seed: Some(5),
        ..Config::default()
    };
    let runs = tour::perform_tour(&Selection::Only(vec![slug.to_string()]), &cfg)
        .expect("chapter runs");
    runs.into_iter()
        .next()
        .map(|run| run.transcript.into_lines())
        .unwrap_or_default()
}

#[test]
fn matrix_reads_back_what_was_written() {
    let mut matrix = Matrix::new(4, 4);
    matrix[(3, 3)] = 10.0;
    matrix[(0, 0)] = 1.0;

    assert_eq!(matrix[(3, 3)], 10.0);
    assert_eq!(matrix[(0, 0)], 1.0);
    assert_eq!(matrix[(2, 1)], 0.0);
    assert_eq!(matrix.get(4, 4), None);
}

#[test]
#[should_panic(expected = "Index out of range")]
fn matrix_rejects_out_of_range_index() {
    let matrix = Matrix::new(4, 4);
    let _ = matrix[(4, 0)];
}

#[test]
fn recursive_expression_evaluates() {
    let five = ArithmeticExpression::Number(5);
    let four = ArithmeticExpression::Number(4);
    let sum = ArithmeticExpression::add(five, four);
    let product = ArithmeticExpression::mul(sum, ArithmeticExpression::Number(2));
    assert_eq!(product.evaluate(), 18);
}

#[test]
fn failable_cart_item() {
    assert!(CartItem::new("", 1).is_none());
    assert!(CartItem::new("x", 0).is_none());
    let sock = CartItem::new("sock", 2).expect("valid item");
    assert_eq!((sock.product.name.as_str(), sock.quantity), ("sock", 2));
}

#[test]
fn stack_pops_in_reverse() {
    let mut stack = Stack::new();
    for item in ["p1", "p2", "p3"] {
        stack.push(item);
    }
    let popped: Vec<&str> = std::iter::from_fn(|| stack.pop()).collect();
    assert_eq!(popped, vec!["p3", "p2", "p1"]);
}

#[test]
fn player_coins_go_back_to_the_bank() {
    let before = Bank::coins_in_bank();
    {
        let mut player = BankPlayer::new(100);
        player.win(2_000);
        assert_eq!(Bank::coins_in_bank(), before - 2_100);
    }
    assert_eq!(Bank::coins_in_bank(), before);
}

#[test]
fn weak_tenant_link_does_not_keep_person_alive() {
    let log = DropLog::default();
    let john = Person::new("John", &log);
    let unit = Apartment::new("4A", &log);
    *john.apartment.borrow_mut() = Some(Rc::clone(&unit));
    *unit.tenant.borrow_mut() = Rc::downgrade(&john);

    drop(john);
    assert!(unit.tenant.borrow().upgrade().is_none());
    drop(unit);
    assert_eq!(
        log.drain(),
        vec!["John is being deinitialized", "Apartment 4A is being deinitialized"]
    );
}

#[test]
fn transcripts_carry_the_expected_lines() {
    let subscripts = transcript_of("subscripts");
    assert!(subscripts.iter().any(|l| l == "six times three is 18"));

    let generics = transcript_of("generics");
    let popped: Vec<&String> = generics.iter().filter(|l| l.starts_with("popped")).collect();
    assert_eq!(popped, vec!["popped p3", "popped p2", "popped p1"]);

    let nested = transcript_of("nested_types");
    assert!(nested.iter().any(|l| l == "suit is ♥, value is 1 or 11"));

    let extensions = transcript_of("extensions");
    assert!(extensions.iter().any(|l| l == "A marathon is 42195 meters long"));
    assert!(extensions.iter().any(|l| l == "9876543210 digit 11 = -99"));

    let deinit = transcript_of("deinitialization");
    assert_eq!(deinit.last().map(String::as_str), Some("The guest left at the end of the scope, bank has 10000"));
}
