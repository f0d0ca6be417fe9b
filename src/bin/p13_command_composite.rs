//! Pattern 13: Command
//! Example: Composite commands and an all-or-nothing transfer
//!
//! Run with: cargo run --bin p13_command_composite

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

    pub fn invoke(&mut self) {
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

    pub fn undo(&mut self) {
        if !self.success {
            return;
        }
        match self.action {
            Action::Deposit => {
                let _ = self.account.borrow_mut().withdraw(self.amount);
            }
            Action::Withdraw => {
                self.account.borrow_mut().deposit(self.amount);
            }
        }
    }
}

// ============================================================================
// Composite: a list of commands handled as one command
// ============================================================================

pub struct CompositeBankAccountCommand {
    commands: Vec<BankAccountCommand>,
    success: bool,
}

impl CompositeBankAccountCommand {
    pub fn new(commands: Vec<BankAccountCommand>) -> Self {
        CompositeBankAccountCommand {
            commands,
            success: false,
        }
    }

    pub fn invoke(&mut self) {
        for command in &mut self.commands {
            command.invoke();
        }
        self.success = self.commands.iter().all(|command| command.success);
    }

    /// Undoes in reverse order, and only what actually ran.
    pub fn undo(&mut self) {
        for command in self.commands.iter_mut().rev() {
            command.undo();
        }
    }

    pub fn succeeded(&self) -> bool {
        self.success
    }
}

/// A transfer is a withdraw and a deposit that succeed or fail together:
/// the deposit only runs when the withdraw made it through.
pub struct WithdrawTransferCommand {
    inner: CompositeBankAccountCommand,
}

impl WithdrawTransferCommand {
    pub fn new(
        from_acc: Rc<RefCell<BankAccount>>,
        to_acc: Rc<RefCell<BankAccount>>,
        amount: i64,
    ) -> Self {
        WithdrawTransferCommand {
            inner: CompositeBankAccountCommand::new(vec![
                BankAccountCommand::new(from_acc, Action::Withdraw, amount),
                BankAccountCommand::new(to_acc, Action::Deposit, amount),
            ]),
        }
    }

    pub fn invoke(&mut self) {
        self.inner.commands[0].invoke();
        if self.inner.commands[0].success {
            self.inner.commands[1].invoke();
        }
        self.inner.success = self.inner.commands.iter().all(|command| command.success);
    }

    pub fn undo(&mut self) {
        self.inner.undo();
    }

    pub fn succeeded(&self) -> bool {
        self.inner.success
    }
}

fn main() {
    let ba1 = Rc::new(RefCell::new(BankAccount::new("Amitabh", 0)));
    let ba2 = Rc::new(RefCell::new(BankAccount::new("Shweta", 0)));
    println!("BA1 : {}\nBA2 : {}", ba1.borrow(), ba2.borrow());

    let mut composite = CompositeBankAccountCommand::new(vec![
        BankAccountCommand::new(Rc::clone(&ba1), Action::Deposit, 500),
        BankAccountCommand::new(Rc::clone(&ba2), Action::Deposit, 1000),
    ]);
    composite.invoke();
    println!("After composite deposit:");
    println!("BA1 : {}\nBA2 : {}", ba1.borrow(), ba2.borrow());

    let mut transfer = WithdrawTransferCommand::new(Rc::clone(&ba1), Rc::clone(&ba2), 1000);
    transfer.invoke();
    println!("After transfer of 1000 (succeeded: {}):", transfer.succeeded());
    println!("BA1 : {}\nBA2 : {}", ba1.borrow(), ba2.borrow());

    transfer.undo();
    composite.undo();
    println!("After undoing the transfer and the composite deposit:");
    println!("BA1 : {}\nBA2 : {}", ba1.borrow(), ba2.borrow());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, amount: i64) -> Rc<RefCell<BankAccount>> {
        Rc::new(RefCell::new(BankAccount::new(name, amount)))
    }

    #[test]
    fn test_bank_account_command() {
        let ba1 = account("Amitabh", 0);
        let ba2 = account("Shweta", 0);
        let mut bac1 = BankAccountCommand::new(Rc::clone(&ba1), Action::Withdraw, 500);
        let mut bac2 = BankAccountCommand::new(Rc::clone(&ba2), Action::Deposit, 500);
        bac1.invoke();
        bac2.invoke();
        assert_eq!(ba1.borrow().amount, -500);
        assert_eq!(ba2.borrow().amount, 500);
    }

    #[test]
    fn test_composite_invoke_and_undo_restore_both_accounts() {
        let ba1 = account("Amitabh", 0);
        let ba2 = account("Shweta", 0);
        let mut composite = CompositeBankAccountCommand::new(vec![
            BankAccountCommand::new(Rc::clone(&ba1), Action::Withdraw, 500),
            BankAccountCommand::new(Rc::clone(&ba2), Action::Deposit, 500),
        ]);
        composite.invoke();
        assert!(composite.succeeded());
        composite.undo();
        assert_eq!(ba1.borrow().amount, 0);
        assert_eq!(ba2.borrow().amount, 0);
    }

    #[test]
    fn test_transfer_moves_the_amount() {
        let ba1 = account("Amitabh", 100);
        let ba2 = account("Shweta", 0);
        let mut transfer = WithdrawTransferCommand::new(Rc::clone(&ba1), Rc::clone(&ba2), 100);
        transfer.invoke();
        assert!(transfer.succeeded());
        assert_eq!(ba1.borrow().amount, 0);
        assert_eq!(ba2.borrow().amount, 100);
    }

    #[test]
    fn test_failed_withdraw_skips_the_deposit() {
        let ba1 = account("Amitabh", 0);
        let ba2 = account("Shweta", 0);
        let mut transfer = WithdrawTransferCommand::new(Rc::clone(&ba1), Rc::clone(&ba2), 1000);
        transfer.invoke();
        assert!(!transfer.succeeded());
        assert_eq!(ba1.borrow().amount, 0);
        assert_eq!(ba2.borrow().amount, 0);
    }

    #[test]
    fn test_undo_skips_commands_that_never_ran() {
        let ba1 = account("Amitabh", 0);
        let ba2 = account("Shweta", 0);
        let mut transfer = WithdrawTransferCommand::new(Rc::clone(&ba1), Rc::clone(&ba2), 1000);
        transfer.invoke();
        transfer.undo();
        assert_eq!(ba1.borrow().amount, 0);
        assert_eq!(ba2.borrow().amount, 0);
    }
}
