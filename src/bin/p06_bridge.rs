//! Pattern 6: Bridge
//! Example: Employee kinds on one side, info providers on the other
//!
//! Run with: cargo run --bin p06_bridge

// ============================================================================
// Abstraction side: kinds of employees
// ============================================================================

pub trait Employee {
    fn name(&self) -> &str;
    fn department(&self) -> &str;
    fn role(&self) -> &str;

    fn describe(&self) -> String {
        format!(
            "{} is from {} department. Role is {}",
            self.name(),
            self.department(),
            self.role()
        )
    }
}

pub struct Engineer {
    pub name: String,
    pub department: String,
    pub role: String,
}

impl Engineer {
    pub fn new(name: &str, department: &str, role: &str) -> Self {
        Engineer {
            name: name.to_string(),
            department: department.to_string(),
            role: role.to_string(),
        }
    }
}

impl Employee for Engineer {
    fn name(&self) -> &str {
        &self.name
    }

    fn department(&self) -> &str {
        &self.department
    }

    fn role(&self) -> &str {
        &self.role
    }
}

pub struct Support {
    pub name: String,
    pub department: String,
    pub role: String,
}

impl Support {
    pub fn new(name: &str, department: &str, role: &str) -> Self {
        Support {
            name: name.to_string(),
            department: department.to_string(),
            role: role.to_string(),
        }
    }
}

impl Employee for Support {
    fn name(&self) -> &str {
        &self.name
    }

    fn department(&self) -> &str {
        &self.department
    }

    fn role(&self) -> &str {
        &self.role
    }
}

// ============================================================================
// Implementor side: ways of reporting on an employee. Either side grows
// without touching the other.
// ============================================================================

pub trait EmployeeInfo {
    fn get_info(&self) -> String;
}

pub struct SalaryInfo<'a> {
    employee: &'a dyn Employee,
    salary: u64,
}

impl<'a> SalaryInfo<'a> {
    pub fn new(employee: &'a dyn Employee, salary: u64) -> Self {
        SalaryInfo { employee, salary }
    }
}

impl EmployeeInfo for SalaryInfo<'_> {
    fn get_info(&self) -> String {
        format!("{} has a salary of USD {}", self.employee.name(), self.salary)
    }
}

pub struct RoleInfo<'a> {
    employee: &'a dyn Employee,
}

impl<'a> RoleInfo<'a> {
    pub fn new(employee: &'a dyn Employee) -> Self {
        RoleInfo { employee }
    }
}

impl EmployeeInfo for RoleInfo<'_> {
    fn get_info(&self) -> String {
        format!("{} has a role {}", self.employee.name(), self.employee.role())
    }
}

fn main() {
    println!("=== Bridge: employees and their info providers ===\n");
    let mut eng_emp = Engineer::new("Amitabh", "SWD", "eng");
    let it_emp = Support::new("Charles", "IT_2", "it");
    println!("{}", eng_emp.describe());
    println!("{}", it_emp.describe());

    eng_emp.role = "Senior SWD".to_string();
    println!("{}", eng_emp.describe());
    println!("{}", it_emp.describe());

    let salary_info = SalaryInfo::new(&eng_emp, 1_000_000);
    let role_info = RoleInfo::new(&eng_emp);
    println!("{}", salary_info.get_info());
    println!("{}", role_info.get_info());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_format() {
        let eng = Engineer::new("Amitabh", "SWD", "eng");
        assert_eq!(eng.describe(), "Amitabh is from SWD department. Role is eng");
    }

    #[test]
    fn test_salary_info_works_for_any_employee() {
        let eng = Engineer::new("Amitabh", "SWD", "eng");
        let sup = Support::new("Charles", "IT_2", "it");
        assert_eq!(
            SalaryInfo::new(&eng, 1000).get_info(),
            "Amitabh has a salary of USD 1000"
        );
        assert_eq!(
            SalaryInfo::new(&sup, 900).get_info(),
            "Charles has a salary of USD 900"
        );
    }

    #[test]
    fn test_role_info_reads_the_current_role() {
        let mut eng = Engineer::new("Amitabh", "SWD", "eng");
        eng.role = "Senior SWD".to_string();
        assert_eq!(RoleInfo::new(&eng).get_info(), "Amitabh has a role Senior SWD");
    }
}
