//! Pattern 10: Flyweight
//! Example: Text formatting, one flag per character vs shared ranges
//!
//! Run with: cargo run --bin p10_flyweight

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

// ============================================================================
// Heavy form: one bool per character, however long the text
// ============================================================================

pub struct FormattedText {
    plain_text: String,
    caps: Vec<bool>,
}

impl FormattedText {
    pub fn new(plain_text: &str) -> Self {
        FormattedText {
            plain_text: plain_text.to_string(),
            caps: vec![false; plain_text.chars().count()],
        }
    }

    /// Marks the half-open range `start..end` for capitalization.
    pub fn capitalize(&mut self, start: usize, end: usize) {
        for (index, flag) in self.caps.iter_mut().enumerate() {
            if start <= index && index < end {
                *flag = true;
            }
        }
    }

    pub fn flags_stored(&self) -> usize {
        self.caps.len()
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, ch) in self.caps.iter().zip(self.plain_text.chars()) {
            if *flag {
                for upper in ch.to_uppercase() {
                    write!(f, "{}", upper)?;
                }
            } else {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Flyweight form: a handful of shared ranges, however long the text
// ============================================================================

#[derive(Debug, Default)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
    pub capitalize: bool,
    pub italic: bool,
    pub bold: bool,
}

impl TextRange {
    // Inclusive on both ends, matching how the ranges are handed out.
    pub fn covers(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }
}

pub struct BetterFormattedText {
    plain_text: String,
    ranges: Vec<Rc<RefCell<TextRange>>>,
}

impl BetterFormattedText {
    pub fn new(plain_text: &str) -> Self {
        BetterFormattedText {
            plain_text: plain_text.to_string(),
            ranges: Vec::new(),
        }
    }

    /// Registers a range and hands the caller a shared handle to flip its
    /// formatting flags.
    pub fn format_text(&mut self, start: usize, end: usize) -> Rc<RefCell<TextRange>> {
        let range = Rc::new(RefCell::new(TextRange {
            start,
            end,
            ..TextRange::default()
        }));
        self.ranges.push(Rc::clone(&range));
        range
    }

    pub fn ranges_stored(&self) -> usize {
        self.ranges.len()
    }
}

impl fmt::Display for BetterFormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, ch) in self.plain_text.chars().enumerate() {
            let capitalize = self
                .ranges
                .iter()
                .any(|range| range.borrow().covers(position) && range.borrow().capitalize);
            if capitalize {
                for upper in ch.to_uppercase() {
                    write!(f, "{}", upper)?;
                }
            } else {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

fn main() {
    println!("=== Heavy form: one flag per character ===");
    let mut text = FormattedText::new("Hello, World!");
    text.capitalize(7, 12);
    println!("{}", text);
    println!("flags stored: {}", text.flags_stored());

    println!("\n=== Flyweight form: shared ranges ===");
    let mut better_text = BetterFormattedText::new("Hello, World!");
    let range = better_text.format_text(7, 11);
    range.borrow_mut().capitalize = true;
    println!("{}", better_text);
    println!("ranges stored: {}", better_text.ranges_stored());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heavy_form_capitalizes_the_range() {
        let mut text = FormattedText::new("Hello, World!");
        text.capitalize(7, 12);
        assert_eq!(text.to_string(), "Hello, WORLD!");
    }

    #[test]
    fn test_heavy_form_stores_one_flag_per_char() {
        let text = FormattedText::new("Hello, World!");
        assert_eq!(text.flags_stored(), 13);
    }

    #[test]
    fn test_flyweight_capitalizes_through_the_handle() {
        let mut text = BetterFormattedText::new("Hello, World!");
        let range = text.format_text(7, 11);
        range.borrow_mut().capitalize = true;
        assert_eq!(text.to_string(), "Hello, WORLD!");
    }

    #[test]
    fn test_flyweight_stores_one_record_per_range() {
        let mut text = BetterFormattedText::new("Hello, World!");
        let range = text.format_text(7, 11);
        assert_eq!(text.ranges_stored(), 1);
        assert!(!range.borrow().italic);
        assert!(!range.borrow().bold);
    }

    #[test]
    fn test_range_without_flags_changes_nothing() {
        let mut text = BetterFormattedText::new("Hello, World!");
        let _ = text.format_text(7, 11);
        assert_eq!(text.to_string(), "Hello, World!");
    }

    #[test]
    fn test_covers_is_inclusive() {
        let range = TextRange {
            start: 7,
            end: 11,
            ..TextRange::default()
        };
        assert!(range.covers(7));
        assert!(range.covers(11));
        assert!(!range.covers(12));
    }
}
