//! Pattern 11: Proxy
//! Example: A registration proxy screening joinees by experience
//!
//! Run with: cargo run --bin p11_proxy

use colored::Colorize;
use std::fmt;
use thiserror::Error;

const MIN_EXPERIENCE: f32 = 5.0;

#[derive(Error, Debug, PartialEq)]
pub enum ScreeningError {
    #[error("{name} has less than 5 years experience, cannot join")]
    NotEnoughExperience { name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    pub department: String,
    pub experience: f32,
}

impl Employee {
    pub fn new(name: &str, age: u32, department: &str, experience: f32) -> Self {
        Employee {
            name: name.to_string(),
            age,
            department: department.to_string(),
            experience,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} aged {} is from {} with {} years experience.",
            self.name, self.age, self.department, self.experience
        )
    }
}

// ============================================================================
// The plain interface: registers anyone, no questions asked
// ============================================================================

pub struct NewJoinee {
    pub emp: Employee,
}

impl NewJoinee {
    pub fn new(emp: Employee) -> Self {
        NewJoinee { emp }
    }

    pub fn add_to(&mut self, department: &str) {
        self.emp.department = department.to_string();
    }
}

impl fmt::Display for NewJoinee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has joined {} with {} years experience.",
            self.emp.name, self.emp.department, self.emp.experience
        )
    }
}

// ============================================================================
// The proxy: same surface, screening added in front of it
// ============================================================================

fn screen(employee: &Employee) -> Result<(), ScreeningError> {
    if employee.experience <= MIN_EXPERIENCE {
        Err(ScreeningError::NotEnoughExperience {
            name: employee.name.clone(),
        })
    } else {
        Ok(())
    }
}

pub struct NewJoineeProxy {
    pub emps: Vec<Employee>,
}

impl NewJoineeProxy {
    /// Takes a whole batch and drops anyone below the experience floor.
    pub fn new(emps: Vec<Employee>) -> Self {
        let mut proxy = NewJoineeProxy { emps };
        proxy.emps.retain(|employee| {
            println!("Checking details for : {}", employee);
            match screen(employee) {
                Ok(()) => true,
                Err(err) => {
                    println!("{}", err.to_string().red());
                    false
                }
            }
        });
        proxy
    }

    /// Re-screens before every move, in case experience was edited since.
    pub fn add_to(&mut self, department: &str) {
        self.emps.retain(|employee| match screen(employee) {
            Ok(()) => true,
            Err(err) => {
                println!("{}", err.to_string().red());
                false
            }
        });
        for employee in &mut self.emps {
            employee.department = department.to_string();
        }
    }
}

impl fmt::Display for NewJoineeProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.emps.iter().map(|employee| employee.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

fn main() {
    println!("=== Without the proxy: anyone joins ===");
    let emp1 = Employee::new("Amitabh", 31, "CEO", 10.0);
    println!("{}", emp1);
    let joinee = NewJoinee::new(emp1);
    println!("{}", joinee);

    println!("\n=== With the proxy: the batch is screened ===");
    let batch = vec![
        Employee::new("Amitabh", 31, "CEO", 10.0),
        Employee::new("Suman", 31, "BOD", 4.0),
        Employee::new("Shweta", 29, "SWD", 11.0),
    ];
    let mut proxy = NewJoineeProxy::new(batch);
    println!("{}", proxy);

    proxy.add_to("CFO");
    println!("After moving to CFO:");
    println!("{}", proxy);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_joinee_accepts_anyone() {
        let mut joinee = NewJoinee::new(Employee::new("Suman", 31, "BOD", 4.0));
        joinee.add_to("CEO");
        assert_eq!(joinee.emp.department, "CEO");
    }

    #[test]
    fn test_proxy_drops_the_underexperienced() {
        let proxy = NewJoineeProxy::new(vec![
            Employee::new("Amitabh", 31, "CEO", 10.0),
            Employee::new("Suman", 31, "BOD", 4.0),
        ]);
        assert_eq!(proxy.emps.len(), 1);
        assert_eq!(proxy.emps[0].name, "Amitabh");
    }

    #[test]
    fn test_exactly_five_years_is_not_enough() {
        let proxy = NewJoineeProxy::new(vec![Employee::new("Suman", 31, "BOD", 5.0)]);
        assert!(proxy.emps.is_empty());
    }

    #[test]
    fn test_add_to_rescreens_edited_employees() {
        let mut proxy = NewJoineeProxy::new(vec![
            Employee::new("Amitabh", 31, "CEO", 10.0),
            Employee::new("Shweta", 29, "SWD", 11.0),
        ]);
        proxy.emps[0].experience = 3.0;
        proxy.add_to("CFO");
        assert_eq!(proxy.emps.len(), 1);
        assert_eq!(proxy.emps[0].name, "Shweta");
        assert_eq!(proxy.emps[0].department, "CFO");
    }

    #[test]
    fn test_display_joins_lines() {
        let proxy = NewJoineeProxy::new(vec![
            Employee::new("Amitabh", 31, "CEO", 10.0),
            Employee::new("Shweta", 29, "SWD", 11.0),
        ]);
        assert_eq!(
            proxy.to_string(),
            "Amitabh aged 31 is from CEO with 10 years experience.\n\
             Shweta aged 29 is from SWD with 11 years experience."
        );
    }
}
