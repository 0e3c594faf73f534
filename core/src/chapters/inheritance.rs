//! A base behaviour shared through a trait, refined through composition.
//!
//! Each "subclass" embeds its parent and forwards to it, which is how an
//! override reaches the "superclass" implementation.

use tour_common::{Result, say};

use crate::context::Context;

pub trait Vehicle {
    fn current_speed(&self) -> f64;

    fn set_current_speed(&mut self, speed: f64);

    fn description(&self) -> String {
        format!("traveling at {:.1} miles per hour", self.current_speed())
    }

    /// Most vehicles are silent.
    fn make_noise(&self) -> Option<&'static str> {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct BaseVehicle {
    current_speed: f64,
}

impl Vehicle for BaseVehicle {
    fn current_speed(&self) -> f64 {
        self.current_speed
    }

    fn set_current_speed(&mut self, speed: f64) {
        self.current_speed = speed;
    }
}

#[derive(Debug, Clone, Default)]
pub struct Bicycle {
    base: BaseVehicle,
    pub has_basket: bool,
}

impl Vehicle for Bicycle {
    fn current_speed(&self) -> f64 {
        self.base.current_speed()
    }

    fn set_current_speed(&mut self, speed: f64) {
        self.base.set_current_speed(speed);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tandem {
    bicycle: Bicycle,
    pub current_number_of_passengers: u32,
}

impl Tandem {
    pub fn bicycle_mut(&mut self) -> &mut Bicycle {
        &mut self.bicycle
    }
}

impl Vehicle for Tandem {
    fn current_speed(&self) -> f64 {
        self.bicycle.current_speed()
    }

    fn set_current_speed(&mut self, speed: f64) {
        self.bicycle.set_current_speed(speed);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Train {
    base: BaseVehicle,
}

impl Vehicle for Train {
    fn current_speed(&self) -> f64 {
        self.base.current_speed()
    }

    fn set_current_speed(&mut self, speed: f64) {
        self.base.set_current_speed(speed);
    }

    fn make_noise(&self) -> Option<&'static str> {
        Some("Choo Choo")
    }
}

#[derive(Debug, Clone)]
pub struct Car {
    base: BaseVehicle,
    pub gear: u32,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            base: BaseVehicle::default(),
            gear: 1,
        }
    }
}

impl Vehicle for Car {
    fn current_speed(&self) -> f64 {
        self.base.current_speed()
    }

    fn set_current_speed(&mut self, speed: f64) {
        self.base.set_current_speed(speed);
    }

    fn description(&self) -> String {
        format!("{} in gear {}", self.base.description(), self.gear)
    }
}

/// Picks its own gear whenever the speed changes.
#[derive(Debug, Clone, Default)]
pub struct AutomaticCar {
    car: Car,
}

impl AutomaticCar {
    pub fn gear(&self) -> u32 {
        self.car.gear
    }
}

impl Vehicle for AutomaticCar {
    fn current_speed(&self) -> f64 {
        self.car.current_speed()
    }

    fn set_current_speed(&mut self, speed: f64) {
        self.car.set_current_speed(speed);
        self.car.gear = (speed / 10.0) as u32 + 1;
    }

    fn description(&self) -> String {
        self.car.description()
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let vehicle = BaseVehicle::default();
    say!(ctx, "Vehicle: {}", vehicle.description());

    let mut bicycle = Bicycle {
        has_basket: true,
        ..Bicycle::default()
    };
    bicycle.set_current_speed(15.0);
    say!(ctx, "Bicycle: {}", bicycle.description());

    let mut tandem = Tandem::default();
    tandem.bicycle_mut().has_basket = true;
    tandem.current_number_of_passengers = 2;
    tandem.set_current_speed(22.0);
    say!(ctx, "Tandem: {}", tandem.description());

    let train = Train::default();
    if let Some(noise) = train.make_noise() {
        say!(ctx, "Train: {noise}");
    }

    let mut car = Car::default();
    car.set_current_speed(25.0);
    car.gear = 3;
    say!(ctx, "Car: {}", car.description());

    let mut automatic = AutomaticCar::default();
    automatic.set_current_speed(35.0);
    say!(ctx, "AutomaticCar: {}", automatic.description());

    let fleet: Vec<Box<dyn Vehicle>> = vec![Box::new(bicycle), Box::new(train), Box::new(automatic)];
    let silent = fleet.iter().filter(|v| v.make_noise().is_none()).count();
    say!(ctx, "{silent} of {} vehicles make no noise", fleet.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_description_comes_from_the_trait() {
        let mut bicycle = Bicycle::default();
        bicycle.set_current_speed(15.0);
        assert_eq!(bicycle.description(), "traveling at 15.0 miles per hour");
    }

    #[test]
    fn overridden_description_extends_the_base() {
        let mut car = Car::default();
        car.set_current_speed(25.0);
        car.gear = 3;
        assert_eq!(car.description(), "traveling at 25.0 miles per hour in gear 3");
    }

    #[test]
    fn automatic_car_derives_gear_from_speed() {
        let mut car = AutomaticCar::default();
        car.set_current_speed(35.0);
        assert_eq!(car.gear(), 4);
        car.set_current_speed(100.0);
        assert_eq!(car.gear(), 11);
        assert_eq!(car.description(), "traveling at 100.0 miles per hour in gear 11");
    }

    #[test]
    fn only_the_train_overrides_make_noise() {
        assert_eq!(Train::default().make_noise(), Some("Choo Choo"));
        assert_eq!(Car::default().make_noise(), None);
    }
}
