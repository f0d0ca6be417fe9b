//! Pattern 0: SOLID Principles
//! Example: Single Responsibility Principle
//!
//! Run with: cargo run --bin p00_single_responsibility

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

// ============================================================================
// Breach: one type owns the task list AND how it is persisted
// ============================================================================

/// A todo list that also knows how to write itself to disk. Changing the
/// storage format means changing this type, so it has two reasons to change.
pub struct TodoList {
    tasks: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        TodoList { tasks: Vec::new() }
    }

    pub fn add_task(&mut self, task: &str) {
        println!("Adding : {}", task);
        self.tasks.push(task.to_string());
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    /// Appends the current list to `todo_list.txt` in the given directory.
    pub fn save_to_file(&self, dir: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("todo_list.txt"))?;
        writeln!(file, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task list:")?;
        for (index, task) in self.tasks.iter().enumerate() {
            write!(f, "\n{} : {}", index, task)?;
        }
        Ok(())
    }
}

// ============================================================================
// Adhere: the list keeps tasks, a separate store persists them
// ============================================================================

pub struct TaskList {
    tasks: Vec<String>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList { tasks: Vec::new() }
    }

    pub fn add_task(&mut self, task: &str) {
        println!("Adding : {}", task);
        self.tasks.push(task.to_string());
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task list:")?;
        for (index, task) in self.tasks.iter().enumerate() {
            write!(f, "\n{} : {}", index, task)?;
        }
        Ok(())
    }
}

/// Persistence lives here. A new storage format touches this type only.
pub struct TaskStore;

impl TaskStore {
    pub fn save(tasks: &TaskList, dir: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("todo_list.txt"))?;
        writeln!(file, "{}", tasks)?;
        Ok(())
    }
}

fn main() -> io::Result<()> {
    println!("=== Breach: list and persistence in one type ===");
    let mut todo = TodoList::new();
    todo.add_task("Get the Whey");
    todo.add_task("Get an hair cut for God's sake !");
    println!("{}", todo);
    todo.save_to_file(Path::new("."))?;

    println!("\n=== Adhere: the store persists, the list lists ===");
    let mut tasks = TaskList::new();
    tasks.add_task("Get the Whey");
    tasks.add_task("Get an hair cut for God's sake !");
    println!("{}", tasks);
    TaskStore::save(&tasks, Path::new("."))?;
    println!("\nSaved to todo_list.txt");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_display_numbers_tasks() {
        let mut tasks = TaskList::new();
        tasks.add_task("Get the Whey");
        tasks.add_task("Get an hair cut for God's sake !");
        assert_eq!(tasks.tasks().len(), 2);
        assert_eq!(
            tasks.to_string(),
            "Task list:\n0 : Get the Whey\n1 : Get an hair cut for God's sake !"
        );
    }

    #[test]
    fn test_empty_list_display() {
        let tasks = TaskList::new();
        assert_eq!(tasks.to_string(), "Task list:");
    }

    #[test]
    fn test_store_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut tasks = TaskList::new();
        tasks.add_task("one");
        TaskStore::save(&tasks, dir.path()).unwrap();
        TaskStore::save(&tasks, dir.path()).unwrap();

        let saved = fs::read_to_string(dir.path().join("todo_list.txt")).unwrap();
        assert_eq!(saved.matches("Task list:").count(), 2);
    }

    #[test]
    fn test_breach_type_still_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut todo = TodoList::new();
        todo.add_task("one");
        assert_eq!(todo.tasks(), ["one".to_string()]);
        todo.save_to_file(dir.path()).unwrap();
        assert!(dir.path().join("todo_list.txt").exists());
    }
}
