//! Pattern 0: SOLID Principles
//! Example: Dependency Inversion Principle
//!
//! Run with: cargo run --bin p00_dependency_inversion

use std::fmt;

// ============================================================================
// Breach: the high-level Person builds and uses a concrete store directly
// ============================================================================

/// An imaginary database-backed store. Person hardwires itself to this exact
/// type, so any change to it ripples into Person.
pub struct SaveData;

impl SaveData {
    pub fn save_data(&self, data: &str) -> bool {
        println!("Saving '{}' to the database", data);
        true
    }
}

pub struct PersonRecord {
    name: String,
    age: u32,
    salary: u64,
    store: SaveData,
}

impl PersonRecord {
    pub fn new(name: &str, age: u32, salary: u64) -> Self {
        PersonRecord {
            name: name.to_string(),
            age,
            salary,
            store: SaveData,
        }
    }

    pub fn save(&self, data: &str) -> bool {
        self.store.save_data(data)
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is aged {} years and has a salary of INR {}",
            self.name, self.age, self.salary
        )
    }
}

// ============================================================================
// Adhere: both sides depend on the DataHandler abstraction
// ============================================================================

pub trait DataHandler {
    fn save_data(&self, data: &str) -> bool;
}

pub struct DatabaseHandler;

impl DataHandler for DatabaseHandler {
    fn save_data(&self, data: &str) -> bool {
        println!("Saving '{}' to the database", data);
        true
    }
}

pub struct Person<H: DataHandler> {
    name: String,
    age: u32,
    salary: u64,
    handler: H,
}

impl<H: DataHandler> Person<H> {
    pub fn new(name: &str, age: u32, salary: u64, handler: H) -> Self {
        Person {
            name: name.to_string(),
            age,
            salary,
            handler,
        }
    }

    pub fn save(&self, data: &str) -> bool {
        self.handler.save_data(data)
    }
}

impl<H: DataHandler> fmt::Display for Person<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is aged {} years and has a salary of INR {}",
            self.name, self.age, self.salary
        )
    }
}

fn main() {
    println!("=== Breach: Person depends on a concrete store ===");
    let record = PersonRecord::new("Amitabh", 31, 100000);
    println!("{}", record);
    record.save("profile");

    println!("\n=== Adhere: Person depends on the DataHandler trait ===");
    let person = Person::new("Amitabh", 31, 100000, DatabaseHandler);
    println!("{}", person);
    person.save("profile");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingHandler {
        saved: RefCell<Vec<String>>,
    }

    impl DataHandler for RecordingHandler {
        fn save_data(&self, data: &str) -> bool {
            self.saved.borrow_mut().push(data.to_string());
            true
        }
    }

    #[test]
    fn test_display_format() {
        let person = Person::new("Amitabh", 31, 100000, DatabaseHandler);
        assert_eq!(
            person.to_string(),
            "Amitabh is aged 31 years and has a salary of INR 100000"
        );
    }

    #[test]
    fn test_person_saves_through_any_handler() {
        let handler = RecordingHandler {
            saved: RefCell::new(Vec::new()),
        };
        let person = Person::new("Amitabh", 31, 100000, handler);
        assert!(person.save("profile"));
        assert_eq!(*person.handler.saved.borrow(), vec!["profile".to_string()]);
    }
}
