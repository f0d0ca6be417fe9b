//! Pattern 12: Chain of Responsibility
//! Example: Game-character modifiers handing the character down a chain
//!
//! Run with: cargo run --bin p12_chain_modifiers

use std::fmt;

#[derive(Debug, PartialEq)]
pub struct Character {
    pub name: String,
    pub attack: i32,
    pub defence: i32,
}

impl Character {
    pub fn new(name: &str, attack: i32, defence: i32) -> Self {
        Character {
            name: name.to_string(),
            attack,
            defence,
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} power ({}/{})", self.name, self.attack, self.defence)
    }
}

/// One link's behavior. Returning false stops the walk at this link.
pub trait Modify {
    fn apply(&self, character: &mut Character) -> bool;
}

/// The root forwards without touching the character.
pub struct PassThrough;

impl Modify for PassThrough {
    fn apply(&self, _character: &mut Character) -> bool {
        true
    }
}

pub struct DoubleAttackModifier;

impl Modify for DoubleAttackModifier {
    fn apply(&self, character: &mut Character) -> bool {
        println!("Doubling attack for {}", character.name);
        character.attack *= 2;
        println!("Successfully doubled attack for {}", character.name);
        true
    }
}

pub struct IncreaseDefenceModifier;

impl Modify for IncreaseDefenceModifier {
    fn apply(&self, character: &mut Character) -> bool {
        println!("Doubling defense for {}", character.name);
        character.defence *= 2;
        println!("Successfully doubled defense for {}", character.name);
        true
    }
}

pub struct NoBonusModifier;

impl Modify for NoBonusModifier {
    fn apply(&self, _character: &mut Character) -> bool {
        println!("No bonus for you!");
        false
    }
}

/// A link owning its action and the rest of the chain.
pub struct Modifier {
    action: Box<dyn Modify>,
    next: Option<Box<Modifier>>,
}

impl Modifier {
    pub fn root() -> Self {
        Modifier {
            action: Box::new(PassThrough),
            next: None,
        }
    }

    /// Appends at the tail, walking the links to find it.
    pub fn add_modifier(&mut self, action: Box<dyn Modify>) {
        match &mut self.next {
            Some(next) => next.add_modifier(action),
            None => {
                self.next = Some(Box::new(Modifier { action, next: None }));
            }
        }
    }

    pub fn handle(&self, character: &mut Character) {
        if self.action.apply(character) {
            if let Some(next) = &self.next {
                next.handle(character);
            }
        }
    }

    pub fn len(&self) -> usize {
        1 + self.next.as_ref().map_or(0, |next| next.len())
    }
}

fn main() {
    let mut character = Character::new("Thor", 1, 1);
    println!("{}", character);

    let mut root = Modifier::root();
    root.add_modifier(Box::new(DoubleAttackModifier));
    root.add_modifier(Box::new(DoubleAttackModifier));
    root.add_modifier(Box::new(IncreaseDefenceModifier));
    println!("chain length: {}", root.len());

    root.handle(&mut character);
    println!("{}", character);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_attack_doublings_and_one_defence() {
        let mut character = Character::new("Thor", 1, 1);
        let mut root = Modifier::root();
        root.add_modifier(Box::new(DoubleAttackModifier));
        root.add_modifier(Box::new(DoubleAttackModifier));
        root.add_modifier(Box::new(IncreaseDefenceModifier));
        root.handle(&mut character);
        assert_eq!(character.attack, 4);
        assert_eq!(character.defence, 2);
    }

    #[test]
    fn test_no_bonus_stops_the_chain() {
        let mut character = Character::new("Thor", 1, 1);
        let mut root = Modifier::root();
        root.add_modifier(Box::new(NoBonusModifier));
        root.add_modifier(Box::new(DoubleAttackModifier));
        root.handle(&mut character);
        assert_eq!(character.attack, 1);
        assert_eq!(character.defence, 1);
    }

    #[test]
    fn test_root_alone_changes_nothing() {
        let mut character = Character::new("Thor", 1, 1);
        Modifier::root().handle(&mut character);
        assert_eq!(character, Character::new("Thor", 1, 1));
    }

    #[test]
    fn test_display_format() {
        let character = Character::new("Thor", 4, 2);
        assert_eq!(character.to_string(), "Thor power (4/2)");
    }

    #[test]
    fn test_add_modifier_appends_at_the_tail() {
        let mut root = Modifier::root();
        root.add_modifier(Box::new(DoubleAttackModifier));
        root.add_modifier(Box::new(IncreaseDefenceModifier));
        assert_eq!(root.len(), 3);
    }
}
