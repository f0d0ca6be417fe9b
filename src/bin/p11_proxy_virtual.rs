//! Pattern 11: Proxy
//! Example: A virtual proxy deferring an expensive database load
//!
//! Run with: cargo run --bin p11_proxy_virtual

use std::cell::OnceCell;

pub trait QueryDb {
    fn query_db(&self, query: &str);
}

/// The expensive real object. Loading it is the cost the proxy defers.
pub struct Database {
    pub name: String,
}

impl Database {
    pub fn new(name: &str) -> Self {
        println!("{} database loaded", name);
        Database {
            name: name.to_string(),
        }
    }
}

impl QueryDb for Database {
    fn query_db(&self, query: &str) {
        println!("Sending back the query result for {}", query);
    }
}

/// Stands in for the database; nothing loads until the first query, and
/// later queries reuse the loaded instance.
pub struct LazyDb {
    name: String,
    instance: OnceCell<Database>,
}

impl LazyDb {
    pub fn new(name: &str) -> Self {
        LazyDb {
            name: name.to_string(),
            instance: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.instance.get().is_some()
    }
}

impl QueryDb for LazyDb {
    fn query_db(&self, query: &str) {
        let db = self.instance.get_or_init(|| Database::new(&self.name));
        db.query_db(query);
    }
}

pub fn db_query(db: &dyn QueryDb, query: &str) {
    println!("Sending query to DB");
    db.query_db(query);
    println!("Query successful!");
}

fn main() {
    println!("=== Eager: the database loads up front ===");
    let db = Database::new("mongoDB");
    db_query(&db, "get_name");

    println!("\n=== Lazy: the proxy loads on first use ===");
    let lazy = LazyDb::new("mongoDB");
    println!("loaded yet: {}", lazy.is_loaded());
    db_query(&lazy, "get_name");
    db_query(&lazy, "get_address");
    println!("loaded yet: {}", lazy.is_loaded());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_starts_unloaded() {
        let lazy = LazyDb::new("mongoDB");
        assert!(!lazy.is_loaded());
    }

    #[test]
    fn test_first_query_loads_the_database() {
        let lazy = LazyDb::new("mongoDB");
        lazy.query_db("get_name");
        assert!(lazy.is_loaded());
    }

    #[test]
    fn test_later_queries_reuse_the_instance() {
        let lazy = LazyDb::new("mongoDB");
        lazy.query_db("get_name");
        let first = lazy.instance.get().unwrap() as *const Database;
        lazy.query_db("get_address");
        let second = lazy.instance.get().unwrap() as *const Database;
        assert_eq!(first, second);
    }

    #[test]
    fn test_both_sides_answer_through_the_trait() {
        let db = Database::new("mongoDB");
        let lazy = LazyDb::new("mongoDB");
        db_query(&db, "get_name");
        db_query(&lazy, "get_name");
    }
}
