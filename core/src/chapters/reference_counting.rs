//! Shared ownership with `Rc`, and the `Weak` references that keep cycles
//! from leaking.
//!
//! Every type here reports its drop into a shared [`DropLog`], so the
//! transcript shows exactly when memory is released.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tour_common::{Result, say};

use crate::context::Context;

/// Messages written by `Drop` impls, in the order they ran.
#[derive(Debug, Clone, Default)]
pub struct DropLog(Rc<RefCell<Vec<String>>>);

impl DropLog {
    pub fn record(&self, message: String) {
        self.0.borrow_mut().push(message);
    }

    /// Empties the log, returning what was in it.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

#[derive(Debug)]
pub struct Person {
    pub name: String,
    pub apartment: RefCell<Option<Rc<Apartment>>>,
    log: DropLog,
}

impl Person {
    pub fn new(name: &str, log: &DropLog) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            apartment: RefCell::new(None),
            log: log.clone(),
        })
    }
}

impl Drop for Person {
    fn drop(&mut self) {
        self.log.record(format!("{} is being deinitialized", self.name));
    }
}

/// The tenant link is weak: an apartment never keeps its tenant alive.
#[derive(Debug)]
pub struct Apartment {
    pub unit: String,
    pub tenant: RefCell<Weak<Person>>,
    log: DropLog,
}

impl Apartment {
    pub fn new(unit: &str, log: &DropLog) -> Rc<Self> {
        Rc::new(Self {
            unit: unit.to_string(),
            tenant: RefCell::new(Weak::new()),
            log: log.clone(),
        })
    }
}

impl Drop for Apartment {
    fn drop(&mut self) {
        self.log.record(format!("Apartment {} is being deinitialized", self.unit));
    }
}

#[derive(Debug)]
pub struct Customer {
    pub name: String,
    pub card: RefCell<Option<CreditCard>>,
    log: DropLog,
}

impl Customer {
    pub fn new(name: &str, log: &DropLog) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            card: RefCell::new(None),
            log: log.clone(),
        })
    }
}

impl Drop for Customer {
    fn drop(&mut self) {
        self.log.record(format!("{} is being deinitialized", self.name));
    }
}

/// Owned by its customer and never outlives it, so the back-reference does
/// not own anything.
#[derive(Debug)]
pub struct CreditCard {
    pub number: u64,
    pub customer: Weak<Customer>,
    log: DropLog,
}

impl CreditCard {
    pub fn holder(&self) -> Option<String> {
        self.customer.upgrade().map(|customer| customer.name.clone())
    }
}

impl Drop for CreditCard {
    fn drop(&mut self) {
        self.log.record(format!("Card #{} is being deinitialized", self.number));
    }
}

#[derive(Debug)]
pub struct Country {
    pub name: String,
    pub capital_city: City,
}

#[derive(Debug)]
pub struct City {
    pub name: String,
    pub country: Weak<Country>,
}

impl Country {
    /// Both sides exist once construction finishes.
    pub fn new(name: &str, capital_name: &str) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            name: name.to_string(),
            capital_city: City {
                name: capital_name.to_string(),
                country: me.clone(),
            },
        })
    }
}

/// An element that renders itself through a stored closure which needs to
/// reach back to the element.
pub struct HtmlElement {
    pub name: String,
    pub text: Option<String>,
    as_html: RefCell<Option<Box<dyn Fn() -> String>>>,
    log: DropLog,
}

impl HtmlElement {
    pub fn new(name: &str, text: Option<&str>, log: &DropLog) -> Rc<Self> {
        let element = Rc::new(Self {
            name: name.to_string(),
            text: text.map(str::to_string),
            as_html: RefCell::new(None),
            log: log.clone(),
        });

        let this = Rc::downgrade(&element);
        *element.as_html.borrow_mut() = Some(Box::new(move || match this.upgrade() {
            Some(el) => match &el.text {
                Some(text) => format!("<{}>{}</{}>", el.name, text, el.name),
                None => format!("<{} />", el.name),
            },
            None => String::new(),
        }));
        element
    }

    pub fn as_html(&self) -> String {
        self.as_html
            .borrow()
            .as_ref()
            .map(|render| render())
            .unwrap_or_default()
    }
}

impl Drop for HtmlElement {
    fn drop(&mut self) {
        self.log.record(format!("{} is being deinitialized", self.name));
    }
}

fn flush(ctx: &mut Context, log: &DropLog) {
    for line in log.drain() {
        say!(ctx, "{line}");
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let log = DropLog::default();

    let reference1 = Person::new("John Appleseed", &log);
    say!(ctx, "strong count after reference1: {}", Rc::strong_count(&reference1));
    let reference2 = Rc::clone(&reference1);
    let reference3 = Rc::clone(&reference1);
    say!(ctx, "strong count with three references: {}", Rc::strong_count(&reference1));
    drop(reference1);
    drop(reference2);
    say!(ctx, "strong count with one left: {}", Rc::strong_count(&reference3));
    drop(reference3);
    flush(ctx, &log);

    let john = Person::new("John", &log);
    let unit4a = Apartment::new("4A", &log);
    *john.apartment.borrow_mut() = Some(Rc::clone(&unit4a));
    *unit4a.tenant.borrow_mut() = Rc::downgrade(&john);
    say!(
        ctx,
        "John: {} strong, {} weak; 4A: {} strong",
        Rc::strong_count(&john),
        Rc::weak_count(&john),
        Rc::strong_count(&unit4a)
    );
    drop(john);
    flush(ctx, &log);
    let tenant = unit4a.tenant.borrow().upgrade().map(|p| p.name.clone());
    say!(ctx, "4A tenant after John left: {}", tenant.as_deref().unwrap_or("none"));
    drop(unit4a);
    flush(ctx, &log);

    let customer = Customer::new("Jonny", &log);
    *customer.card.borrow_mut() = Some(CreditCard {
        number: 1234_5678_9012_3456,
        customer: Rc::downgrade(&customer),
        log: log.clone(),
    });
    if let Some(holder) = customer.card.borrow().as_ref().and_then(CreditCard::holder) {
        say!(ctx, "card holder is {holder}");
    }
    drop(customer);
    flush(ctx, &log);

    let country = Country::new("Canada", "Ottawa");
    if let Some(owner) = country.capital_city.country.upgrade() {
        say!(ctx, "{}'s capital city is called {}", owner.name, country.capital_city.name);
    }

    let paragraph = HtmlElement::new("p", Some("hello, world"), &log);
    say!(ctx, "{}", paragraph.as_html());
    let heading = HtmlElement::new("h1", None, &log);
    say!(ctx, "{}", heading.as_html());
    drop(paragraph);
    drop(heading);
    flush(ctx, &log);

    Ok(())
}
