//! Querying through values that might be absent with `?`, `and_then` and
//! `map`. Any missing link makes the whole chain `None`.

use tour_common::{Result, say};

use crate::context::Context;

#[derive(Debug, Default)]
pub struct Person {
    pub residence: Option<Residence>,
}

#[derive(Debug, Default)]
pub struct Residence {
    pub rooms: Vec<Room>,
    pub address: Option<Address>,
}

impl Residence {
    pub fn number_of_rooms(&self) -> usize {
        self.rooms.len()
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn describe_number_of_rooms(&self) -> String {
        format!("The number of rooms is {}", self.number_of_rooms())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
}

impl Room {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub building_name: Option<String>,
    pub building_number: Option<String>,
    pub street: Option<String>,
}

impl Address {
    /// Number and street when both are known, otherwise the building name.
    pub fn building_identifier(&self) -> Option<String> {
        match (&self.building_number, &self.street) {
            (Some(number), Some(street)) => Some(format!("{number} {street}")),
            _ => self.building_name.clone(),
        }
    }
}

impl Person {
    /// Writes through the residence; `None` when there is none to write to.
    pub fn set_address(&mut self, address: Address) -> Option<()> {
        self.residence.as_mut()?.address = Some(address);
        Some(())
    }

    pub fn street(&self) -> Option<&str> {
        self.residence.as_ref()?.address.as_ref()?.street.as_deref()
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let mut john = Person::default();

    match john.residence.as_ref().map(Residence::number_of_rooms) {
        Some(count) => say!(ctx, "John's residence has {count} room(s)."),
        None => say!(ctx, "Unable to retrieve the number of rooms."),
    }

    let mut calls = 0;
    let mut create_address = || {
        calls += 1;
        Address {
            building_number: Some("29".to_string()),
            street: Some("Acacia Road".to_string()),
            ..Address::default()
        }
    };
    // Nothing to assign into, so the address is never built.
    if let Some(residence) = john.residence.as_mut() {
        residence.address = Some(create_address());
    }
    say!(ctx, "create_address was called {calls} time(s)");

    match john.residence.as_ref().map(Residence::describe_number_of_rooms) {
        Some(line) => {
            say!(ctx, "{line}");
            say!(ctx, "It was possible to print the number of rooms.");
        }
        None => say!(ctx, "It was not possible to print the number of rooms."),
    }

    let some_address = Address {
        building_number: Some("29".to_string()),
        street: Some("Acacia Road".to_string()),
        ..Address::default()
    };
    match john.set_address(some_address) {
        Some(()) => say!(ctx, "It was possible to set the address."),
        None => say!(ctx, "It was not possible to set the address."),
    }

    john.residence = Some(Residence {
        rooms: vec![Room::new("Living Room"), Room::new("Kitchen")],
        address: None,
    });

    match john.residence.as_ref().and_then(|r| r.room(0)) {
        Some(room) => say!(ctx, "The first room name is {}.", room.name),
        None => say!(ctx, "Unable to retrieve the first room name."),
    }

    let johns_address = Address {
        building_name: Some("The Larches".to_string()),
        street: Some("Laurel Street".to_string()),
        ..Address::default()
    };
    john.set_address(johns_address);

    match john.street() {
        Some(street) => say!(ctx, "John's street name is {street}."),
        None => say!(ctx, "Unable to retrieve the address."),
    }

    let identifier = john
        .residence
        .as_ref()
        .and_then(|r| r.address.as_ref())
        .and_then(Address::building_identifier);
    if let Some(identifier) = &identifier {
        say!(ctx, "John's building identifier is {identifier}.");
    }
    if let Some(begins_with_the) = identifier.map(|id| id.starts_with("The")) {
        if begins_with_the {
            say!(ctx, "John's building identifier begins with \"The\".");
        } else {
            say!(ctx, "John's building identifier does not begin with \"The\".");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_identifier_prefers_number_and_street() {
        let full = Address {
            building_name: Some("The Larches".to_string()),
            building_number: Some("29".to_string()),
            street: Some("Acacia Road".to_string()),
        };
        assert_eq!(full.building_identifier().as_deref(), Some("29 Acacia Road"));

        let named = Address {
            building_name: Some("The Larches".to_string()),
            street: Some("Laurel Street".to_string()),
            ..Address::default()
        };
        assert_eq!(named.building_identifier().as_deref(), Some("The Larches"));
        assert_eq!(Address::default().building_identifier(), None);
    }

    #[test]
    fn setting_through_a_missing_residence_fails() {
        let mut person = Person::default();
        assert_eq!(person.set_address(Address::default()), None);
        assert_eq!(person.street(), None);

        person.residence = Some(Residence::default());
        let address = Address {
            street: Some("Laurel Street".to_string()),
            ..Address::default()
        };
        assert_eq!(person.set_address(address), Some(()));
        assert_eq!(person.street(), Some("Laurel Street"));
    }

    #[test]
    fn chapter_walks_the_chains() {
        let mut ctx = Context::new(0);
        run(&mut ctx).unwrap();
        let transcript = ctx.transcript();
        assert!(transcript.contains("Unable to retrieve the number of rooms."));
        assert!(transcript.contains("create_address was called 0 time(s)"));
        assert!(transcript.contains("It was not possible to set the address."));
        assert!(transcript.contains("The first room name is Living Room."));
        assert!(transcript.contains("John's street name is Laurel Street."));
        assert!(transcript.contains("begins with \"The\"."));
    }
}
