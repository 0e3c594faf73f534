use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use tour_common::{Result, say};

use crate::context::Context;

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

fn arrays(ctx: &mut Context) {
    let mut a = vec![1, 2, 3];
    let b = a.clone();
    a[1] = 122;
    say!(ctx, "after a[1] = 122: a[1] == {}, b[1] == {}", a[1], b[1]);

    let shared = Rc::new(RefCell::new(vec![1, 2, 3]));
    let alias = Rc::clone(&shared);
    shared.borrow_mut()[1] = 9;
    say!(
        ctx,
        "after shared[1] = 9: shared[1] == {}, alias[1] == {}",
        shared.borrow()[1],
        alias.borrow()[1]
    );

    let mut main = vec![6, 7];
    main.push(5);
    main.extend_from_slice(&[1, 2, 3, 4]);
    for (i, item) in main.iter().enumerate() {
        say!(ctx, "The {i}th item is: {item}");
    }

    main[1] = 8;
    let replaced: Vec<i32> = main.splice(3..=6, [9, 9, 9]).collect();
    say!(ctx, "replaced [{}], after splice: [{}]", join(&replaced), join(&main));

    main.insert(0, 999);
    main.pop();
    main.remove(0);
    main.pop();
    for (index, value) in main.iter().enumerate() {
        say!(ctx, "Item {}: {value}", index + 1);
    }
}

fn sets(ctx: &mut Context) {
    let mut genres: BTreeSet<&str> = ["Rock", "Classical", "Hip hop"].into_iter().collect();
    say!(ctx, "genres has {} items.", genres.len());

    if genres.contains("Rock") {
        say!(ctx, "I like Rock.");
    }
    let inserted = genres.insert("Jazz");
    say!(ctx, "inserted Jazz: {inserted}, again: {}", genres.insert("Jazz"));

    if genres.remove("Rock") {
        say!(ctx, "Rock? I'm over it.");
    } else {
        say!(ctx, "I never much cared for that.");
    }
    say!(ctx, "sorted genres: {}", join(&genres));

    let odd: BTreeSet<i32> = [1, 3, 5, 7, 9].into_iter().collect();
    let even: BTreeSet<i32> = [0, 2, 4, 6, 8].into_iter().collect();
    let primes: BTreeSet<i32> = [2, 3, 5, 7].into_iter().collect();

    say!(ctx, "odd ∪ even = {}", join(odd.union(&even)));
    say!(ctx, "odd ∩ even = [{}]", join(odd.intersection(&even)));
    say!(ctx, "odd - primes = {}", join(odd.difference(&primes)));
    say!(ctx, "odd △ primes = {}", join(odd.symmetric_difference(&primes)));

    let house: BTreeSet<&str> = ["🐶", "🐱"].into_iter().collect();
    let farm: BTreeSet<&str> = ["🐮", "🐔", "🐑", "🐶", "🐱"].into_iter().collect();
    let city: BTreeSet<&str> = ["🐦", "🐭"].into_iter().collect();
    say!(
        ctx,
        "house ⊆ farm: {}, farm ⊇ house: {}, farm disjoint city: {}",
        house.is_subset(&farm),
        farm.is_superset(&house),
        farm.is_disjoint(&city)
    );
}

fn dictionaries(ctx: &mut Context) {
    let mut airports: BTreeMap<&str, &str> = BTreeMap::from([("YYZ", "Toronto Pearson"), ("DUB", "Dublin")]);
    say!(ctx, "airports contains {} items.", airports.len());

    airports.insert("LHR", "London");
    if let Some(old) = airports.insert("LHR", "London Heathrow") {
        say!(ctx, "The old value for LHR was {old}.");
    }

    match airports.get("DUB") {
        Some(name) => say!(ctx, "The name of the airport is {name}."),
        None => say!(ctx, "That airport is not in the airports dictionary."),
    }

    airports.insert("APL", "Apple International");
    airports.remove("APL");
    match airports.remove("DUB") {
        Some(removed) => say!(ctx, "The removed airport's name is {removed}."),
        None => say!(ctx, "The airports dictionary does not contain a value for DUB."),
    }

    for (code, name) in &airports {
        say!(ctx, "{code}: {name}");
    }
    say!(ctx, "codes: {}", join(airports.keys()));
    say!(ctx, "names: {}", join(airports.values()));
}

pub fn run(ctx: &mut Context) -> Result<()> {
    arrays(ctx);
    sets(ctx);
    dictionaries(ctx);
    Ok(())
}
