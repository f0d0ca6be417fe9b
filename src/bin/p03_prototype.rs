//! Pattern 3: Prototype
//! Example: Game characters, aliased handles vs deep clones
//!
//! Run with: cargo run --bin p03_prototype

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct Capabilities {
    pub power: String,
    pub speed: String,
}

impl Capabilities {
    pub fn new(power: &str, speed: &str) -> Self {
        Capabilities {
            power: power.to_string(),
            speed: speed.to_string(),
        }
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capabilities: power={}, speed={}", self.power, self.speed)
    }
}

/// Cloning a GameCharacter clones the handle, not the capabilities: both
/// copies keep pointing at the same Capabilities record. `deep_clone` is the
/// prototype operation that actually decouples the copy.
#[derive(Clone)]
pub struct GameCharacter {
    pub name: String,
    pub power: String,
    pub capabilities: Rc<RefCell<Capabilities>>,
}

impl GameCharacter {
    pub fn new(name: &str, power: &str, capabilities: Capabilities) -> Self {
        GameCharacter {
            name: name.to_string(),
            power: power.to_string(),
            capabilities: Rc::new(RefCell::new(capabilities)),
        }
    }

    pub fn set_power_capability(&self, power: &str) {
        self.capabilities.borrow_mut().power = power.to_string();
    }

    pub fn deep_clone(&self) -> Self {
        GameCharacter {
            name: self.name.clone(),
            power: self.power.clone(),
            capabilities: Rc::new(RefCell::new(self.capabilities.borrow().clone())),
        }
    }
}

impl fmt::Display for GameCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has {} powers with {}",
            self.name,
            self.power,
            self.capabilities.borrow()
        )
    }
}

fn main() {
    println!("=== Aliased handles share their capabilities ===");
    let c1 = GameCharacter::new("Ragnar", "Immortal", Capabilities::new("Ultra Smart", "Ultra Fast"));
    println!("c1: {}", c1);

    let c2 = c1.clone();
    c2.set_power_capability("Ultra B Smart");
    println!("After editing through c2:");
    println!("c1: {}", c1);
    println!("c2: {}", c2);

    println!("\n=== A deep clone is its own prototype copy ===");
    let c3 = c1.deep_clone();
    c1.set_power_capability("Ultra C Smart");
    println!("After editing through c1:");
    println!("c1: {}", c1);
    println!("c3: {}", c3);
}
