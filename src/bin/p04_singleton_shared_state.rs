//! Pattern 4: Singleton
//! Example: Shared-state handles, every value reads and writes one record
//!
//! Run with: cargo run --bin p04_singleton_shared_state

use lazy_static::lazy_static;
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct SharedRecord {
    name: String,
    position: String,
}

lazy_static! {
    static ref SHARED: Arc<Mutex<SharedRecord>> = Arc::new(Mutex::new(SharedRecord {
        name: String::new(),
        position: "CEO".to_string(),
    }));
}

/// Every SharedCeo is a distinct value, but all of them hold the same
/// record. Constructing a handle resets the record to its defaults, the way
/// an initializer on shared state clobbers whatever was there.
pub struct SharedCeo {
    record: Arc<Mutex<SharedRecord>>,
}

impl SharedCeo {
    pub fn new() -> Self {
        let record = Arc::clone(&SHARED);
        {
            let mut guard = record.lock().expect("shared record lock");
            guard.name = String::new();
            guard.position = "CEO".to_string();
        }
        SharedCeo { record }
    }

    pub fn set_name(&self, name: &str) {
        self.record.lock().expect("shared record lock").name = name.to_string();
    }

    pub fn set_position(&self, position: &str) {
        self.record.lock().expect("shared record lock").position = position.to_string();
    }

    pub fn name(&self) -> String {
        self.record.lock().expect("shared record lock").name.clone()
    }

    pub fn position(&self) -> String {
        self.record
            .lock()
            .expect("shared record lock")
            .position
            .clone()
    }

    pub fn shares_record_with(&self, other: &SharedCeo) -> bool {
        Arc::ptr_eq(&self.record, &other.record)
    }
}

impl fmt::Display for SharedCeo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.record.lock().expect("shared record lock");
        write!(f, "{} is a {} in the company!", guard.name, guard.position)
    }
}

fn main() {
    println!("=== Shared-state singleton ===\n");
    let person1 = SharedCeo::new();
    println!("PERSON 1 : {}", person1);

    let person2 = SharedCeo::new();
    person1.set_name("Amitabh Suman");
    println!("PERSON 1 : {}", person1);
    println!("PERSON 2 : {}", person2);

    person2.set_position("GodFather");
    println!("PERSON 1 : {}", person1);
    println!("PERSON 2 : {}", person2);
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test, since every handle in the process shares the record.
    #[test]
    fn test_shared_state_is_visible_through_every_handle() {
        let person1 = SharedCeo::new();
        let person2 = SharedCeo::new();

        assert!(person1.shares_record_with(&person2));
        assert_eq!(person1.name(), person2.name());

        person1.set_name("Amitabh Suman");
        assert_eq!(person1.name(), person2.name());

        assert_eq!(person1.position(), "CEO");
        assert_eq!(person2.position(), "CEO");

        assert_eq!(person1.to_string(), "Amitabh Suman is a CEO in the company!");
        assert_eq!(person2.to_string(), "Amitabh Suman is a CEO in the company!");
    }
}
