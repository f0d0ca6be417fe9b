//! Pattern 13: Command
//! Example: Bank deposits and withdrawals as invokable, undoable commands
//!
//! Run with: cargo run --bin p13_command

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

const OVERDRAFT_LIMIT: i64 = -500;

#[derive(Error, Debug, PartialEq)]
pub enum AccountError {
    #[error("withdrawing {requested} would take {name} past the overdraft limit")]
    OverdraftLimit { name: String, requested: i64 },
}

pub struct BankAccount {
    pub name: String,
    pub amount: i64,
}

impl BankAccount {
    pub fn new(name: &str, amount: i64) -> Self {
        BankAccount {
            name: name.to_string(),
            amount,
        }
    }

    pub fn deposit(&mut self, amount: i64) {
        self.amount += amount;
    }

    pub fn withdraw(&mut self, amount: i64) -> Result<(), AccountError> {
        if self.amount - amount >= OVERDRAFT_LIMIT {
            self.amount -= amount;
            Ok(())
        } else {
            Err(AccountError::OverdraftLimit {
                name: self.name.clone(),
                requested: amount,
            })
        }
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AC Name {}, balance : {}", self.name, self.amount)
    }
}

pub trait Command {
    fn invoke(&mut self);
    fn undo(&mut self);
    fn succeeded(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Withdraw,
}

pub struct BankAccountCommand {
    account: Rc<RefCell<BankAccount>>,
    action: Action,
    amount: i64,
    success: bool,
}

impl BankAccountCommand {
    pub fn new(account: Rc<RefCell<BankAccount>>, action: Action, amount: i64) -> Self {
        BankAccountCommand {
            account,
            action,
            amount,
            success: false,
        }
    }
}

impl Command for BankAccountCommand {
    fn invoke(&mut self) {
        match self.action {
            Action::Deposit => {
                self.account.borrow_mut().deposit(self.amount);
                self.success = true;
            }
            Action::Withdraw => {
                self.success = self.account.borrow_mut().withdraw(self.amount).is_ok();
            }
        }
    }

    /// Applies the opposite operation of the last invoke.
    fn undo(&mut self) {
        match self.action {
            Action::Deposit => {
                let _ = self.account.borrow_mut().withdraw(self.amount);
            }
            Action::Withdraw => {
                self.account.borrow_mut().deposit(self.amount);
            }
        }
    }

    fn succeeded(&self) -> bool {
        self.success
    }
}

fn main() {
    let ba1 = Rc::new(RefCell::new(BankAccount::new("Amitabh", 0)));
    let ba2 = Rc::new(RefCell::new(BankAccount::new("Shweta", 0)));
    println!("BA1 : {}\nBA2 : {}", ba1.borrow(), ba2.borrow());

    let mut bac1 = BankAccountCommand::new(Rc::clone(&ba1), Action::Deposit, 500);
    let mut bac2 = BankAccountCommand::new(Rc::clone(&ba2), Action::Deposit, 1000);

    bac1.invoke();
    bac2.invoke();
    println!("BA1 : {}\nBA2 : {}", ba1.borrow(), ba2.borrow());

    bac1.undo();
    bac2.undo();
    println!("BA1 : {}\nBA2 : {}", ba1.borrow(), ba2.borrow());
}
