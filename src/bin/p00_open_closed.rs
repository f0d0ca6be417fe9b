//! Pattern 0: SOLID Principles
//! Example: Open-Closed Principle
//!
//! Run with: cargo run --bin p00_open_closed

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("failed to write task file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode tasks as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Breach: one method per format, the type changes for every new format
// ============================================================================

/// Wants to save as JSON as well? Another method lands here, and the next
/// format after that too. The type is never closed for modification.
pub struct SaveList;

impl SaveList {
    pub fn save_to_file(tasks: &[String], path: &Path) -> Result<(), SaveError> {
        fs::write(path, tasks.join("\n"))?;
        Ok(())
    }

    pub fn save_to_json(tasks: &[String], path: &Path) -> Result<(), SaveError> {
        let encoded = serde_json::to_string_pretty(tasks)?;
        fs::write(path, encoded)?;
        Ok(())
    }
}

// ============================================================================
// Adhere: one trait, one type per format
// ============================================================================

/// Adding a format means adding an implementor, never editing this trait.
pub trait SaveTasks {
    fn save_tasks(&self, tasks: &[String], path: &Path) -> Result<(), SaveError>;
}

pub struct SaveAsText;

impl SaveTasks for SaveAsText {
    fn save_tasks(&self, tasks: &[String], path: &Path) -> Result<(), SaveError> {
        fs::write(path, tasks.join("\n"))?;
        Ok(())
    }
}

pub struct SaveAsJson;

impl SaveTasks for SaveAsJson {
    fn save_tasks(&self, tasks: &[String], path: &Path) -> Result<(), SaveError> {
        let encoded = serde_json::to_string_pretty(tasks)?;
        fs::write(path, encoded)?;
        Ok(())
    }
}

fn main() -> Result<(), SaveError> {
    let tasks = vec![
        "Get the Whey".to_string(),
        "Get an hair cut for God's sake !".to_string(),
    ];

    println!("=== Breach: every format is a new method on SaveList ===");
    SaveList::save_to_file(&tasks, Path::new("todo_list.txt"))?;
    println!("Saved {} tasks as text", tasks.len());

    println!("\n=== Adhere: every format is a new SaveTasks implementor ===");
    let savers: Vec<(&str, Box<dyn SaveTasks>)> = vec![
        ("txt", Box::new(SaveAsText)),
        ("json", Box::new(SaveAsJson)),
    ];
    for (format, saver) in &savers {
        let path = format!("todo_list.{}", format);
        saver.save_tasks(&tasks, Path::new(&path))?;
        println!("Saved {} tasks as {}", tasks.len(), format);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<String> {
        vec!["one".to_string(), "two".to_string()]
    }

    #[test]
    fn test_text_saver_joins_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        SaveAsText.save_tasks(&sample_tasks(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo");
    }

    #[test]
    fn test_json_saver_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        SaveAsJson.save_tasks(&sample_tasks(), &path).unwrap();

        let decoded: Vec<String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(decoded, sample_tasks());
    }

    #[test]
    fn test_savers_work_through_the_trait() {
        let dir = tempfile::tempdir().unwrap();
        let savers: Vec<Box<dyn SaveTasks>> = vec![Box::new(SaveAsText), Box::new(SaveAsJson)];
        for (i, saver) in savers.iter().enumerate() {
            let path = dir.path().join(format!("tasks_{}", i));
            saver.save_tasks(&sample_tasks(), &path).unwrap();
            assert!(path.exists());
        }
    }
}
