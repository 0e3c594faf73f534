//! Generic functions, generic types, associated types and `where` clauses.

use std::fmt::Debug;

use tour_common::{Result, say};

use crate::context::Context;

pub fn swap_two_values<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn top_item(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: PartialEq> Stack<T> {
    pub fn is_top(&self, item: &T) -> bool {
        self.top_item() == Some(item)
    }
}

pub fn find_index<T: PartialEq>(value_to_find: &T, array: &[T]) -> Option<usize> {
    array.iter().position(|value| value == value_to_find)
}

pub trait Container {
    type Item;

    fn append(&mut self, item: Self::Item);

    fn count(&self) -> usize;

    fn item(&self, index: usize) -> Option<&Self::Item>;

    /// Items at each of `indices`, skipping any that are out of range.
    fn items_at<I>(&self, indices: I) -> Vec<&Self::Item>
    where
        I: IntoIterator<Item = usize>,
    {
        indices.into_iter().filter_map(|i| self.item(i)).collect()
    }
}

impl<T> Container for Stack<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn append(&mut self, item: T) {
        self.push(item);
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

/// True when both containers hold equal items in the same order.
pub fn all_items_match<C1, C2>(some_container: &C1, another_container: &C2) -> bool
where
    C1: Container,
    C2: Container<Item = C1::Item>,
    C1::Item: PartialEq,
{
    if some_container.count() != another_container.count() {
        return false;
    }
    (0..some_container.count()).all(|i| some_container.item(i) == another_container.item(i))
}

fn pair<T: Debug, U: Debug>(a: T, b: U) -> String {
    format!("{a:?} and {b:?}")
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let (mut num1, mut num2) = (19, 33);
    say!(ctx, "num1 = {num1}, num2 = {num2}");
    swap_two_values(&mut num1, &mut num2);
    say!(ctx, "num1 = {num1}, num2 = {num2}");

    let (mut str1, mut str2) = ("abc".to_string(), "kkk".to_string());
    swap_two_values(&mut str1, &mut str2);
    say!(ctx, "str1 = {str1}, str2 = {str2}");

    say!(ctx, "two type parameters: {}", pair(3, "three"));

    let mut stack_of_strings = Stack::new();
    for item in ["p1", "p2", "p3"] {
        stack_of_strings.push(item.to_string());
    }
    if let Some(top) = stack_of_strings.top_item() {
        say!(ctx, "The top item on the stack is {top}.");
    }
    if stack_of_strings.is_top(&"p3".to_string()) {
        say!(ctx, "p3 is on top of the stack.");
    }
    while let Some(popped) = stack_of_strings.pop() {
        say!(ctx, "popped {popped}");
    }

    let names = ["Mike", "Malcolm", "Andrea"];
    match find_index(&"Andrea", &names) {
        Some(index) => say!(ctx, "The index of Andrea is {index}"),
        None => say!(ctx, "Andrea is not in the list"),
    }
    say!(ctx, "index of 9.3 in [3.25, 0.1, 0.25] is {:?}", find_index(&9.3, &[3.25, 0.1, 0.25]));

    let mut stack = Stack::new();
    for word in ["uno", "dos", "tres"] {
        stack.append(word);
    }
    let array = vec!["uno", "dos", "tres"];
    if all_items_match(&stack, &array) {
        say!(ctx, "All items match.");
    } else {
        say!(ctx, "Not all items match.");
    }

    let picked: Vec<_> = array.items_at([2, 0, 7]);
    say!(ctx, "items at [2, 0, 7]: {picked:?}");

    Ok(())
}
