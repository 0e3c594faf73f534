//! Raising, propagating and handling recoverable errors.

use std::collections::BTreeMap;
use std::convert::Infallible;

use anyhow::Context as _;
use rand::Rng;
use thiserror::Error;
use tour_common::{Result, say};

use crate::context::Context;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VendingMachineError {
    #[error("Invalid Selection.")]
    InvalidSelection,
    #[error("Insufficient funds. Please insert an additional {coins_needed} coins.")]
    InsufficientFunds { coins_needed: u32 },
    #[error("Out of Stock.")]
    OutOfStock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub price: u32,
    pub count: u32,
}

#[derive(Debug)]
pub struct VendingMachine {
    inventory: BTreeMap<&'static str, Item>,
    coins_deposited: u32,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self {
            inventory: BTreeMap::from([
                ("Candy Bar", Item { price: 12, count: 7 }),
                ("Chips", Item { price: 10, count: 4 }),
                ("Pretzels", Item { price: 7, count: 11 }),
            ]),
            coins_deposited: 0,
        }
    }
}

impl VendingMachine {
    pub fn deposit(&mut self, coins: u32) {
        self.coins_deposited += coins;
    }

    pub fn coins_deposited(&self) -> u32 {
        self.coins_deposited
    }

    pub fn stock(&self, name: &str) -> Option<u32> {
        self.inventory.get(name).map(|item| item.count)
    }

    /// Hands out one `name`, paid from the deposited coins.
    pub fn vend(&mut self, name: &str) -> std::result::Result<String, VendingMachineError> {
        let item = self
            .inventory
            .get_mut(name)
            .ok_or(VendingMachineError::InvalidSelection)?;

        if item.count == 0 {
            return Err(VendingMachineError::OutOfStock);
        }
        if item.price > self.coins_deposited {
            return Err(VendingMachineError::InsufficientFunds {
                coins_needed: item.price - self.coins_deposited,
            });
        }

        self.coins_deposited -= item.price;
        item.count -= 1;
        Ok(format!("Dispensing {name}"))
    }
}

pub fn favorite_snack(person: &str) -> &'static str {
    match person {
        "Alice" => "Chips",
        "Bob" => "Licorice",
        "Eve" => "Pretzels",
        _ => "Candy Bar",
    }
}

/// Propagates whatever the machine raises, tagged with who was buying.
pub fn buy_favorite_snack(person: &str, machine: &mut VendingMachine) -> anyhow::Result<String> {
    let snack = favorite_snack(person);
    machine
        .vend(snack)
        .with_context(|| format!("{person} could not buy {snack}"))
}

fn always_short() -> anyhow::Result<()> {
    Err(VendingMachineError::InsufficientFunds { coins_needed: 5 }.into())
}

/// Fails about half the time, depending on the chapter's random stream.
pub fn sometimes_fails(rng: &mut impl Rng) -> std::result::Result<i32, VendingMachineError> {
    if rng.random_range(0..2) == 0 {
        Err(VendingMachineError::InvalidSelection)
    } else {
        Ok(11)
    }
}

pub fn never_fails() -> std::result::Result<&'static str, Infallible> {
    Ok("I never return an error.")
}

pub fn describe(error: &anyhow::Error) -> String {
    match error.downcast_ref::<VendingMachineError>() {
        Some(VendingMachineError::InsufficientFunds { coins_needed }) => {
            format!("Insufficient funds. Please insert an additional {coins_needed} coins.")
        }
        Some(VendingMachineError::InvalidSelection) => "Invalid Selection.".to_string(),
        Some(VendingMachineError::OutOfStock) => "Out of Stock.".to_string(),
        None => format!("Other Error: {error}"),
    }
}

/// Runs `cleanup` against the context when the guard goes out of scope.
pub struct Deferred<'a, F: FnOnce(&mut Context)> {
    ctx: &'a mut Context,
    cleanup: Option<F>,
}

pub fn defer<F: FnOnce(&mut Context)>(ctx: &mut Context, cleanup: F) -> Deferred<'_, F> {
    Deferred {
        ctx,
        cleanup: Some(cleanup),
    }
}

impl<F: FnOnce(&mut Context)> std::ops::Deref for Deferred<'_, F> {
    type Target = Context;

    fn deref(&self) -> &Context {
        &*self.ctx
    }
}

impl<F: FnOnce(&mut Context)> std::ops::DerefMut for Deferred<'_, F> {
    fn deref_mut(&mut self) -> &mut Context {
        &mut *self.ctx
    }
}

impl<F: FnOnce(&mut Context)> Drop for Deferred<'_, F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup(&mut *self.ctx);
        }
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let mut ctx = defer(ctx, |ctx| say!(ctx, "End of the vending machine tour."));

    let mut machine = VendingMachine::default();
    machine.deposit(8);
    match buy_favorite_snack("Alice", &mut machine) {
        Ok(dispensed) => say!(ctx, "{dispensed}"),
        Err(err) => {
            say!(ctx, "{err:#}");
            say!(ctx, "{}", describe(&err));
        }
    }

    machine.deposit(10);
    for person in ["Alice", "Bob", "Eve"] {
        match buy_favorite_snack(person, &mut machine) {
            Ok(dispensed) => say!(ctx, "{person}: {dispensed}"),
            Err(err) => say!(ctx, "{person}: {}", describe(&err)),
        }
    }
    say!(ctx, "{} coins left in the machine", machine.coins_deposited());

    if let Err(err) = always_short() {
        say!(ctx, "{}", describe(&err));
    }
    let foreign = anyhow::anyhow!("the coin slot is jammed");
    say!(ctx, "{}", describe(&foreign));

    for attempt in 1..=3 {
        let result = sometimes_fails(ctx.rng()).ok();
        say!(ctx, "attempt {attempt}: result = {}", result.unwrap_or(-99));
    }

    let Ok(message) = never_fails();
    say!(ctx, "{message}");

    say!(ctx, "Hello, Defer.");
    Ok(())
}
