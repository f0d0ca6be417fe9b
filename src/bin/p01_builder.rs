//! Pattern 1: Builder
//! Example: Pizza ordering, one builder per recipe plus a waiter director
//!
//! Run with: cargo run --bin p01_builder

use std::fmt;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use thiserror::Error;

// Kept short so transcripts (and tests) stay fast.
const STEP_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PizzaProgress {
    Queued,
    Preparation,
    Baking,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PizzaDough {
    Thin,
    Thick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PizzaSauce {
    Tomato,
    Creme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PizzaTopping {
    Mozzarella,
    DoubleMozzarella,
    Bacon,
    Ham,
    Mushrooms,
    RedOnion,
    Oregano,
}

pub struct Pizza {
    pub name: String,
    pub dough: Option<PizzaDough>,
    pub sauce: Option<PizzaSauce>,
    pub toppings: Vec<PizzaTopping>,
}

impl Pizza {
    pub fn new(name: &str) -> Self {
        Pizza {
            name: name.to_string(),
            dough: None,
            sauce: None,
            toppings: Vec::new(),
        }
    }

    pub fn prepare_dough(&mut self, dough: PizzaDough) {
        self.dough = Some(dough);
        println!("Preparing the {:?} dough of your {}...", dough, self);
        thread::sleep(STEP_DELAY);
        println!("Done with the {:?} dough", dough);
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ============================================================================
// One builder per recipe, all behind the same build steps
// ============================================================================

pub trait PizzaBuilder {
    fn prepare_dough(&mut self);
    fn add_sauce(&mut self);
    fn add_topping(&mut self);
    fn bake(&mut self);
    fn take_pizza(self: Box<Self>) -> Pizza;
}

pub struct MargaritaBuilder {
    pub pizza: Pizza,
    pub progress: PizzaProgress,
    pub baking_time: Duration,
}

impl MargaritaBuilder {
    pub fn new() -> Self {
        MargaritaBuilder {
            pizza: Pizza::new("margarita"),
            progress: PizzaProgress::Queued,
            baking_time: Duration::from_millis(5),
        }
    }
}

impl PizzaBuilder for MargaritaBuilder {
    fn prepare_dough(&mut self) {
        self.progress = PizzaProgress::Preparation;
        self.pizza.prepare_dough(PizzaDough::Thin);
    }

    fn add_sauce(&mut self) {
        println!("Adding tomato sauce to your pizza");
        self.pizza.sauce = Some(PizzaSauce::Tomato);
        thread::sleep(STEP_DELAY);
        println!("Done with sauce addition");
    }

    fn add_topping(&mut self) {
        println!("Adding toppings double mozzarella, oregano to your pizza");
        self.pizza
            .toppings
            .extend([PizzaTopping::DoubleMozzarella, PizzaTopping::Oregano]);
        println!("Toppings added");
    }

    fn bake(&mut self) {
        self.progress = PizzaProgress::Baking;
        println!("Baking your pizza");
        thread::sleep(self.baking_time);
        self.progress = PizzaProgress::Ready;
        println!("Pizza is ready!");
    }

    fn take_pizza(self: Box<Self>) -> Pizza {
        self.pizza
    }
}

pub struct CreamyBaconBuilder {
    pub pizza: Pizza,
    pub progress: PizzaProgress,
    pub baking_time: Duration,
}

impl CreamyBaconBuilder {
    pub fn new() -> Self {
        CreamyBaconBuilder {
            pizza: Pizza::new("creamy bacon"),
            progress: PizzaProgress::Queued,
            baking_time: Duration::from_millis(5),
        }
    }
}

impl PizzaBuilder for CreamyBaconBuilder {
    fn prepare_dough(&mut self) {
        self.progress = PizzaProgress::Preparation;
        self.pizza.prepare_dough(PizzaDough::Thick);
    }

    fn add_sauce(&mut self) {
        println!("Adding creme sauce to your pizza");
        self.pizza.sauce = Some(PizzaSauce::Creme);
        thread::sleep(STEP_DELAY);
        println!("Done with sauce addition");
    }

    fn add_topping(&mut self) {
        println!("Adding toppings mozzarella, oregano, bacon, ham, mushrooms, red onion to your pizza");
        self.pizza.toppings.extend([
            PizzaTopping::Mozzarella,
            PizzaTopping::Oregano,
            PizzaTopping::Bacon,
            PizzaTopping::Ham,
            PizzaTopping::Mushrooms,
            PizzaTopping::RedOnion,
        ]);
        println!("Toppings added");
    }

    fn bake(&mut self) {
        self.progress = PizzaProgress::Baking;
        println!("Baking your pizza");
        thread::sleep(self.baking_time);
        self.progress = PizzaProgress::Ready;
        println!("Pizza is ready!");
    }

    fn take_pizza(self: Box<Self>) -> Pizza {
        self.pizza
    }
}

// ============================================================================
// The waiter runs the build steps in order, whatever the recipe
// ============================================================================

pub struct Waiter {
    builder: Option<Box<dyn PizzaBuilder>>,
}

impl Waiter {
    pub fn new() -> Self {
        Waiter { builder: None }
    }

    pub fn construct_pizza(&mut self, mut builder: Box<dyn PizzaBuilder>) {
        builder.prepare_dough();
        builder.add_sauce();
        builder.add_topping();
        builder.bake();
        self.builder = Some(builder);
    }

    pub fn pizza(self) -> Option<Pizza> {
        self.builder.map(|builder| builder.take_pizza())
    }
}

// ============================================================================
// Menu input, reprompting on invalid choices
// ============================================================================

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Sorry, not a valid input")]
    UnknownChoice(String),
}

pub fn builder_for_choice(choice: &str) -> Result<Box<dyn PizzaBuilder>, MenuError> {
    match choice {
        "m" => Ok(Box::new(MargaritaBuilder::new())),
        "c" => Ok(Box::new(CreamyBaconBuilder::new())),
        other => Err(MenuError::UnknownChoice(other.to_string())),
    }
}

/// Reads one menu choice; None when stdin is closed.
fn read_choice() -> Option<String> {
    print!("What pizza would you like: [m]argarita / [c]reamy bacon? ");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn take_order() -> Box<dyn PizzaBuilder> {
    loop {
        let Some(choice) = read_choice() else {
            // Keeps the demo runnable without a terminal attached.
            println!("\nNo input available, ordering a margarita.");
            return Box::new(MargaritaBuilder::new());
        };
        match builder_for_choice(&choice) {
            Ok(builder) => return builder,
            Err(err) => println!("{}", err),
        }
    }
}

fn main() {
    let builder = take_order();
    println!();
    let mut waiter = Waiter::new();
    waiter.construct_pizza(builder);
    let pizza = waiter.pizza().expect("waiter constructed a pizza");
    println!();
    println!("Enjoy your {} pizza!!", pizza);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_init() {
        assert_eq!(Pizza::new("margarita").name, "margarita");
    }

    #[test]
    fn test_pizza_dough() {
        let mut pizza = Pizza::new("margarita");
        pizza.prepare_dough(PizzaDough::Thin);
        assert_eq!(pizza.dough, Some(PizzaDough::Thin));
    }

    #[test]
    fn test_margarita_topping() {
        let mut builder = MargaritaBuilder::new();
        builder.add_topping();
        assert_eq!(
            builder.pizza.toppings,
            vec![PizzaTopping::DoubleMozzarella, PizzaTopping::Oregano]
        );
    }

    #[test]
    fn test_creamy_bacon_sauce() {
        let mut builder = CreamyBaconBuilder::new();
        builder.add_sauce();
        assert_eq!(builder.pizza.sauce, Some(PizzaSauce::Creme));
    }

    #[test]
    fn test_waiter_runs_every_step() {
        let mut waiter = Waiter::new();
        waiter.construct_pizza(Box::new(MargaritaBuilder::new()));
        let pizza = waiter.pizza().unwrap();
        assert_eq!(pizza.dough, Some(PizzaDough::Thin));
        assert_eq!(pizza.sauce, Some(PizzaSauce::Tomato));
        assert_eq!(pizza.toppings.len(), 2);
    }

    #[test]
    fn test_invalid_choice_is_rejected() {
        assert!(builder_for_choice("x").is_err());
        assert!(builder_for_choice("m").is_ok());
        assert!(builder_for_choice("c").is_ok());
    }
}
