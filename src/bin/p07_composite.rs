//! Pattern 7: Composite
//! Example: An employee hierarchy rendered as one tree
//!
//! Run with: cargo run --bin p07_composite

use std::fmt;

/// A node and its subtree are handled the same way: printing a manager
/// prints every reportee underneath, one " - " per depth level.
pub struct Employee {
    pub name: String,
    pub designation: &'static str,
    pub reportees: Vec<Employee>,
}

impl Employee {
    pub fn manager(name: &str) -> Self {
        Employee {
            name: name.to_string(),
            designation: "Manager",
            reportees: Vec::new(),
        }
    }

    pub fn engineer(name: &str) -> Self {
        Employee {
            name: name.to_string(),
            designation: "Engineer",
            reportees: Vec::new(),
        }
    }

    pub fn architect(name: &str) -> Self {
        Employee {
            name: name.to_string(),
            designation: "Architect",
            reportees: Vec::new(),
        }
    }

    pub fn add_reportee(&mut self, reportee: Employee) {
        self.reportees.push(reportee);
    }

    fn render(&self, out: &mut String, depth: usize) {
        out.push_str(&" - ".repeat(depth));
        out.push_str(&self.name);
        out.push_str(&format!(" ({})\n", self.designation));
        for reportee in &self.reportees {
            reportee.render(out, depth + 1);
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render(&mut out, 0);
        f.write_str(&out)
    }
}

fn main() {
    println!("=== Composite: one employee, one subtree, same interface ===\n");
    let mut emp = Employee::manager("Amitabh");
    emp.add_reportee(Employee::engineer("Shweta"));
    emp.add_reportee(Employee::architect("Suman"));

    let mut emp3 = Employee::manager("Aadya");
    emp3.add_reportee(Employee::engineer("Chota Dhruv"));
    emp3.add_reportee(Employee::architect("Dhruv"));
    emp.add_reportee(emp3);

    print!("{}", emp);
}
