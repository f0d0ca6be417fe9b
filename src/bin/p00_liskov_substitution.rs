//! Pattern 0: SOLID Principles
//! Example: Liskov Substitution Principle
//!
//! Run with: cargo run --bin p00_liskov_substitution

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FlightError {
    #[error("{name} cannot fly")]
    CannotFly { name: String },
}

// ============================================================================
// Breach: every Bird must fly, so the ostrich has to break the contract
// ============================================================================

pub trait Bird {
    fn name(&self) -> &str;
    fn size(&self) -> &str;

    fn describe(&self) -> String {
        format!("{} is a {} bird!", self.name(), self.size())
    }

    fn fly(&self) -> Result<(), FlightError>;
}

pub struct Eagle {
    name: String,
    size: String,
}

impl Eagle {
    pub fn new(name: &str, size: &str) -> Self {
        Eagle {
            name: name.to_string(),
            size: size.to_string(),
        }
    }
}

impl Bird for Eagle {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> &str {
        &self.size
    }

    fn fly(&self) -> Result<(), FlightError> {
        println!("{} is a {} bird and it's flying now", self.name, self.size);
        Ok(())
    }
}

pub struct Ostrich {
    name: String,
    size: String,
}

impl Ostrich {
    pub fn new(name: &str, size: &str) -> Self {
        Ostrich {
            name: name.to_string(),
            size: size.to_string(),
        }
    }
}

impl Bird for Ostrich {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> &str {
        &self.size
    }

    // An Ostrich is a Bird, yet it cannot honor the Bird contract. Code
    // written against Bird breaks when handed an Ostrich.
    fn fly(&self) -> Result<(), FlightError> {
        Err(FlightError::CannotFly {
            name: self.name.clone(),
        })
    }
}

// ============================================================================
// Adhere: split the hierarchy so every subtype honors its full contract
// ============================================================================

pub trait FlyingBird {
    fn name(&self) -> &str;
    fn size(&self) -> &str;

    fn fly(&self) {
        println!("{} is a {} bird and it's flying now", self.name(), self.size());
    }
}

pub trait FlightlessBird {
    fn name(&self) -> &str;
    fn size(&self) -> &str;

    fn walk(&self) {
        println!("{} is a {} bird and it is walking now", self.name(), self.size());
    }
}

pub struct GoldenEagle {
    name: String,
    size: String,
}

impl GoldenEagle {
    pub fn new(name: &str, size: &str) -> Self {
        GoldenEagle {
            name: name.to_string(),
            size: size.to_string(),
        }
    }
}

impl FlyingBird for GoldenEagle {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> &str {
        &self.size
    }
}

pub struct CommonOstrich {
    name: String,
    size: String,
}

impl CommonOstrich {
    pub fn new(name: &str, size: &str) -> Self {
        CommonOstrich {
            name: name.to_string(),
            size: size.to_string(),
        }
    }
}

impl FlightlessBird for CommonOstrich {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> &str {
        &self.size
    }
}

fn main() {
    println!("=== Breach: one Bird contract for every bird ===");
    let birds: Vec<Box<dyn Bird>> = vec![
        Box::new(Eagle::new("Duniya Ka Rakshak", "medium")),
        Box::new(Ostrich::new("Dino ka Chota Bhai", "large")),
    ];
    for bird in &birds {
        println!("{}", bird.describe());
        if let Err(err) = bird.fly() {
            println!("ERROR: {}", err);
        }
    }

    println!("\n=== Adhere: flying and flightless birds have their own contracts ===");
    let eagle = GoldenEagle::new("Duniya Ka Rakshak", "medium");
    let ostrich = CommonOstrich::new("Dino ka Chota Bhai", "large");
    eagle.fly();
    ostrich.walk();
}
