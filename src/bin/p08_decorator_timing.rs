//! Pattern 8: Decorator
//! Example: A timing wrapper around any operation
//!
//! Run with: cargo run --bin p08_decorator_timing

use rand::Rng;
use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

/// Runs the wrapped operation, then reports how long it took. The wrapped
/// code does not know it is being measured.
pub fn timeit<T>(func: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let ret = func();
    println!(">>> Total time taken : {}ms", start.elapsed().as_millis());
    ret
}

pub fn generate_id(classname: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..12).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect();
    format!("{}{}", classname.to_uppercase(), suffix)
}

#[derive(Debug)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub address: String,
    pub age: u32,
    pub id: String,
}

impl Person {
    pub fn new(name: &str, email: &str, address: &str, age: u32) -> Self {
        let person = Person {
            name: name.to_string(),
            email: email.to_string(),
            address: address.to_string(),
            age,
            id: generate_id("Person"),
        };
        // Stands in for an expensive construction step worth measuring.
        thread::sleep(Duration::from_millis(100));
        person
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lives in {}", self.name, self.address)
    }
}

fn main() {
    timeit(|| {
        let mut person = Person::new("Amitabh", "amitabh@ainebula.in", "India", 31);
        println!("{}", person);
        println!("{:?}", person);
        person.address = "Bangalore, India".to_string();
        println!("After change");
        println!("{}", person);
        println!("{:?}", person);
    });
}
