//! Pattern 4: Singleton
//! Example: One Database instance, three ways to guarantee it
//!
//! Run with: cargo run --bin p04_singleton

use lazy_static::lazy_static;
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Counts true constructions across every variant, to show that accessors
/// run many times while the constructor runs once per instance.
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

pub struct Database {
    pub id: u32,
}

impl Database {
    fn new() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        let id = rand::thread_rng().gen_range(1..=100);
        println!("Hello from the Database, id {}", id);
        Database { id }
    }

    pub fn query(&self, query: &str) -> String {
        format!("db[{}] answering {}", self.id, query)
    }
}

// ============================================================================
// Variant 1: OnceLock, initialized on first access
// ============================================================================

static DATABASE: OnceLock<Database> = OnceLock::new();

pub fn database() -> &'static Database {
    DATABASE.get_or_init(Database::new)
}

// ============================================================================
// Variant 2: lazy_static global
// ============================================================================

lazy_static! {
    pub static ref REGISTRY_DB: Database = Database::new();
}

fn main() {
    println!("=== Variant 1: OnceLock ===");
    let d1 = database();
    let d2 = database();
    println!("d1 id {}, d2 id {}", d1.id, d2.id);
    println!("same instance: {}", std::ptr::eq(d1, d2));

    println!("\n=== Variant 2: lazy_static ===");
    let d3 = &*REGISTRY_DB;
    let d4 = &*REGISTRY_DB;
    println!("d3 id {}, d4 id {}", d3.id, d4.id);
    println!("same instance: {}", std::ptr::eq(d3, d4));

    println!("\n=== Variant 3: counting constructions ===");
    for query in ["get_name", "get_address", "get_salary"] {
        println!("{}", database().query(query));
    }
    println!(
        "constructions: {} (instances), accesses: many",
        CONSTRUCTIONS.load(Ordering::SeqCst)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_lock_hands_out_one_instance() {
        let d1 = database();
        let d2 = database();
        assert!(std::ptr::eq(d1, d2));
        assert_eq!(d1.id, d2.id);
    }

    #[test]
    fn test_lazy_static_hands_out_one_instance() {
        let d1 = &*REGISTRY_DB;
        let d2 = &*REGISTRY_DB;
        assert!(std::ptr::eq(d1, d2));
    }

    #[test]
    fn test_repeated_access_does_not_reconstruct() {
        let before_id = database().id;
        for _ in 0..10 {
            let _ = database().query("ping");
        }
        assert_eq!(database().id, before_id);
    }
}
