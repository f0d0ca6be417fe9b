//! Pattern 12: Chain of Responsibility
//! Example: Expense approval walking manager, director, CEO
//!
//! Run with: cargo run --bin p12_chain_expense_approval

use colored::Colorize;
use std::fmt;

#[derive(Debug)]
pub struct Request {
    pub amount: u32,
    pub approved: bool,
}

impl Request {
    pub fn new(amount: u32) -> Self {
        Request {
            amount,
            approved: false,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Request approval for amount {} is {}",
            self.amount, self.approved
        )
    }
}

pub trait Approver {
    fn title(&self) -> &'static str;
    fn limit(&self) -> u32;
    fn successor(&self) -> Option<&dyn Approver>;

    fn process_request(&self, request: &mut Request) {
        if request.amount <= self.limit() {
            request.approved = true;
            println!(
                "{}",
                format!(
                    "Request for amount {} approved by {}",
                    request.amount,
                    self.title()
                )
                .green()
            );
        } else if let Some(successor) = self.successor() {
            successor.process_request(request);
        } else {
            println!(
                "{}",
                format!("Request for {} is rejected by {}", request.amount, self.title()).red()
            );
        }
    }
}

pub struct Manager {
    successor: Box<dyn Approver>,
}

impl Manager {
    pub fn new(successor: Box<dyn Approver>) -> Self {
        Manager { successor }
    }
}

impl Approver for Manager {
    fn title(&self) -> &'static str {
        "Manager"
    }

    fn limit(&self) -> u32 {
        5000
    }

    fn successor(&self) -> Option<&dyn Approver> {
        Some(self.successor.as_ref())
    }
}

pub struct Director {
    successor: Box<dyn Approver>,
}

impl Director {
    pub fn new(successor: Box<dyn Approver>) -> Self {
        Director { successor }
    }
}

impl Approver for Director {
    fn title(&self) -> &'static str {
        "Director"
    }

    fn limit(&self) -> u32 {
        10000
    }

    fn successor(&self) -> Option<&dyn Approver> {
        Some(self.successor.as_ref())
    }
}

/// End of the chain: approves up to the limit, rejects past it.
pub struct Ceo;

impl Approver for Ceo {
    fn title(&self) -> &'static str {
        "CEO"
    }

    fn limit(&self) -> u32 {
        15000
    }

    fn successor(&self) -> Option<&dyn Approver> {
        None
    }
}

fn main() {
    let chain = Manager::new(Box::new(Director::new(Box::new(Ceo))));

    let mut requests = [
        Request::new(4000),
        Request::new(8000),
        Request::new(14000),
        Request::new(20000),
    ];
    for request in &requests {
        println!("{}", request);
    }
    println!();

    for request in &mut requests {
        chain.process_request(request);
    }
    println!();

    for request in &requests {
        println!("{}", request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Manager {
        Manager::new(Box::new(Director::new(Box::new(Ceo))))
    }

    #[test]
    fn test_manager_approves_within_limit() {
        let mut request = Request::new(4000);
        chain().process_request(&mut request);
        assert!(request.approved);
    }

    #[test]
    fn test_director_approves_past_the_manager() {
        let mut request = Request::new(8000);
        chain().process_request(&mut request);
        assert!(request.approved);
    }

    #[test]
    fn test_ceo_approves_past_the_director() {
        let mut request = Request::new(14000);
        chain().process_request(&mut request);
        assert!(request.approved);
    }

    #[test]
    fn test_over_every_limit_is_rejected() {
        let mut request = Request::new(20000);
        chain().process_request(&mut request);
        assert!(!request.approved);
    }

    #[test]
    fn test_display_format() {
        let request = Request::new(4000);
        assert_eq!(request.to_string(), "Request approval for amount 4000 is false");
    }
}
