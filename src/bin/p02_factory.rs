//! Pattern 2: Factory
//! Example: A vehicle factory dispatching on wheel count
//!
//! Run with: cargo run --bin p02_factory

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FactoryError {
    #[error("no vehicle model has {0} wheels")]
    UnsupportedWheelCount(u8),
}

pub trait Vehicle {
    fn name(&self) -> &str;
    fn wheels(&self) -> u8;
    fn kind(&self) -> &'static str;

    fn build_vehicle(&self) -> String {
        format!(
            "Your {} {} with {} wheels is ready!",
            self.name(),
            self.kind(),
            self.wheels()
        )
    }
}

pub struct Bike {
    name: String,
}

impl Vehicle for Bike {
    fn name(&self) -> &str {
        &self.name
    }

    fn wheels(&self) -> u8 {
        2
    }

    fn kind(&self) -> &'static str {
        "Bike"
    }
}

pub struct TriCycle {
    name: String,
}

impl Vehicle for TriCycle {
    fn name(&self) -> &str {
        &self.name
    }

    fn wheels(&self) -> u8 {
        3
    }

    fn kind(&self) -> &'static str {
        "TriCycle"
    }
}

pub struct Car {
    name: String,
}

impl Vehicle for Car {
    fn name(&self) -> &str {
        &self.name
    }

    fn wheels(&self) -> u8 {
        4
    }

    fn kind(&self) -> &'static str {
        "Car"
    }
}

/// One factory for every model. The caller orders by name and wheel count
/// and never names a concrete vehicle type.
pub struct VehicleFactory;

impl VehicleFactory {
    pub fn build_vehicle(name: &str, num_wheels: u8) -> Result<Box<dyn Vehicle>, FactoryError> {
        let name = name.to_string();
        match num_wheels {
            2 => Ok(Box::new(Bike { name })),
            3 => Ok(Box::new(TriCycle { name })),
            4 => Ok(Box::new(Car { name })),
            n => Err(FactoryError::UnsupportedWheelCount(n)),
        }
    }
}

fn main() {
    println!("=== Vehicle Factory ===\n");
    let orders = [("Chetak", 2), ("Tuffy", 3), ("Contessa", 4), ("Pushpak", 9)];
    for (name, wheels) in orders {
        match VehicleFactory::build_vehicle(name, wheels) {
            Ok(vehicle) => println!("{}", vehicle.build_vehicle()),
            Err(err) => println!("ERROR: {}", err),
        }
    }
}
