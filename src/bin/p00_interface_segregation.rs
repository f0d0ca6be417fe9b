//! Pattern 0: SOLID Principles
//! Example: Interface Segregation Principle
//!
//! Run with: cargo run --bin p00_interface_segregation

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FeatureError {
    #[error("{model} does not support {feature}")]
    Unsupported {
        model: &'static str,
        feature: &'static str,
    },
}

// ============================================================================
// Breach: one fat trait, so a basic model must stub what it cannot do
// ============================================================================

pub trait Features {
    fn model(&self) -> &'static str;

    fn print(&self) -> Result<(), FeatureError>;
    fn scan(&self) -> Result<(), FeatureError>;
    fn fax(&self) -> Result<(), FeatureError>;
    fn email(&self) -> Result<(), FeatureError>;
}

/// A print-only model forced through the full Features surface.
pub struct PrinterModelA;

impl Features for PrinterModelA {
    fn model(&self) -> &'static str {
        "PrinterModelA"
    }

    fn print(&self) -> Result<(), FeatureError> {
        println!("Printed Successfully !!");
        Ok(())
    }

    fn scan(&self) -> Result<(), FeatureError> {
        println!("I am so sad...I can't scan :'(");
        Err(FeatureError::Unsupported {
            model: self.model(),
            feature: "scan",
        })
    }

    fn fax(&self) -> Result<(), FeatureError> {
        println!("I am so sad...I can't fax :'(");
        Err(FeatureError::Unsupported {
            model: self.model(),
            feature: "fax",
        })
    }

    fn email(&self) -> Result<(), FeatureError> {
        println!("I am so sad...I can't mail :'(");
        Err(FeatureError::Unsupported {
            model: self.model(),
            feature: "email",
        })
    }
}

// ============================================================================
// Adhere: one small trait per capability
// ============================================================================

pub trait Print {
    fn print(&self) {
        println!("I can Print!");
    }
}

pub trait Scan {
    fn scan(&self) {
        println!("I can Scan");
    }
}

pub trait Fax {
    fn fax(&self) {
        println!("I can Fax");
    }
}

pub trait Email {
    fn email(&self) {
        println!("I can Email");
    }
}

pub struct PrinterModelANew;
impl Print for PrinterModelANew {}

pub struct PrinterModelBNew;
impl Print for PrinterModelBNew {}
impl Scan for PrinterModelBNew {}

pub struct PrinterModelCNew;
impl Print for PrinterModelCNew {}
impl Scan for PrinterModelCNew {}
impl Fax for PrinterModelCNew {}

pub struct PrinterModelDNew;
impl Print for PrinterModelDNew {}
impl Scan for PrinterModelDNew {}
impl Fax for PrinterModelDNew {}
impl Email for PrinterModelDNew {}

fn main() {
    println!("=== Breach: a fat trait forces stubbed capabilities ===");
    let model_a = PrinterModelA;
    let _ = model_a.print();
    if let Err(err) = model_a.fax() {
        println!("ERROR: {}", err);
    }
    if let Err(err) = model_a.email() {
        println!("ERROR: {}", err);
    }

    println!("\n=== Adhere: models implement only what they support ===");
    println!("-- PrinterModelANew --");
    PrinterModelANew.print();

    println!("-- PrinterModelBNew --");
    PrinterModelBNew.print();
    PrinterModelBNew.scan();

    println!("-- PrinterModelCNew --");
    PrinterModelCNew.print();
    PrinterModelCNew.scan();
    PrinterModelCNew.fax();

    println!("-- PrinterModelDNew --");
    PrinterModelDNew.print();
    PrinterModelDNew.scan();
    PrinterModelDNew.fax();
    PrinterModelDNew.email();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_a_prints() {
        assert!(PrinterModelA.print().is_ok());
    }

    #[test]
    fn test_model_a_cannot_fax() {
        assert_eq!(
            PrinterModelA.fax(),
            Err(FeatureError::Unsupported {
                model: "PrinterModelA",
                feature: "fax",
            })
        );
    }

    #[test]
    fn test_model_a_cannot_email() {
        assert!(PrinterModelA.email().is_err());
    }

    #[test]
    fn test_error_message_names_the_feature() {
        let err = PrinterModelA.scan().unwrap_err();
        assert_eq!(err.to_string(), "PrinterModelA does not support scan");
    }
}
