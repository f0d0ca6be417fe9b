//! Pattern 3: Prototype
//! Example: An employee factory stamping out customized prototype copies
//!
//! Run with: cargo run --bin p03_prototype_employee

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub road: String,
    pub country: String,
}

impl Address {
    pub fn new(street: &str, road: &str, country: &str) -> Self {
        Address {
            street: street.to_string(),
            road: road.to_string(),
            country: country.to_string(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.street, self.road, self.country)
    }
}

#[derive(Debug, Clone)]
pub struct Employee {
    pub name: String,
    pub address: Address,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lives at {}", self.name, self.address)
    }
}

/// Holds one blank prototype per office; new employees are deep copies of
/// the prototype with the name and road filled in.
pub struct EmployeeFactory {
    engineer: Employee,
    itsupport: Employee,
}

impl EmployeeFactory {
    pub fn new() -> Self {
        EmployeeFactory {
            engineer: Employee {
                name: String::new(),
                address: Address::new("Engineering Block", "Engineering Road", "India"),
            },
            itsupport: Employee {
                name: String::new(),
                address: Address::new("Support Block", "Support Road", "India"),
            },
        }
    }

    fn new_employee(prototype: &Employee, name: &str, road: &str) -> Employee {
        let mut employee = prototype.clone();
        employee.name = name.to_string();
        employee.address.road = road.to_string();
        employee
    }

    pub fn new_engineering_emp(&self, name: &str, road: &str) -> Employee {
        Self::new_employee(&self.engineer, name, road)
    }

    pub fn new_itsupport_emp(&self, name: &str, road: &str) -> Employee {
        Self::new_employee(&self.itsupport, name, road)
    }
}

fn main() {
    println!("=== Prototype Employee Factory ===\n");
    let factory = EmployeeFactory::new();

    let emp_eng = factory.new_engineering_emp("Amitabh", "Kings");
    println!("{}", emp_eng);

    let emp_it = factory.new_itsupport_emp("Suman", "Charles");
    println!("{}", emp_it);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineering_copy_customizes_name_and_road() {
        let factory = EmployeeFactory::new();
        let emp = factory.new_engineering_emp("Amitabh", "Kings");
        assert_eq!(
            emp.to_string(),
            "Amitabh lives at Engineering Block, Kings, India"
        );
    }

    #[test]
    fn test_itsupport_copy_customizes_name_and_road() {
        let factory = EmployeeFactory::new();
        let emp = factory.new_itsupport_emp("Suman", "Charles");
        assert_eq!(emp.to_string(), "Suman lives at Support Block, Charles, India");
    }

    #[test]
    fn test_copies_do_not_touch_the_prototype() {
        let factory = EmployeeFactory::new();
        let _ = factory.new_engineering_emp("Amitabh", "Kings");
        let again = factory.new_engineering_emp("Shweta", "Queens");
        assert_eq!(again.address.road, "Queens");
        assert_eq!(
            factory.engineer.address,
            Address::new("Engineering Block", "Engineering Road", "India")
        );
    }
}
