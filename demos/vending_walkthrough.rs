//! Vending Machine Walkthrough
//!
//! This example demonstrates two full purchase cycles on a stocked machine.
//!
//! Key concepts:
//! - Stocking via the fluent builder
//! - The select -> pay -> dispense -> return-change cycle
//! - Rejected commands leave the machine untouched
//! - Structured outcomes and errors for every command
//!
//! Run with: cargo run --example vending_walkthrough

use vendo::core::{Coin, Note, Product};
use vendo::machine::{CommandError, MachineBuilder, Outcome};

fn report(label: &str, result: Result<Outcome, CommandError>) {
    match result {
        Ok(outcome) => println!("  {label}: {outcome}"),
        Err(rejection) => println!("  {label}: rejected ({rejection})"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Vending Machine Walkthrough ===\n");

    let coke = Product::new("Coke", 18);
    let pepsi = Product::new("Pepsi", 15);
    let water = Product::new("Water", 10);

    let mut machine = MachineBuilder::new()
        .product(coke.clone(), 5)
        .product(pepsi.clone(), 3)
        .product(water, 2)
        .build()
        .expect("catalog is non-empty with positive prices");

    println!("Machine stocked: Coke(18) x5, Pepsi(15) x3, Water(10) x2\n");

    println!("Cycle 1: Coke with change");
    report("insert before selecting", machine.insert_coin(Coin::Five));
    report("select Coke", machine.select(coke.clone()));
    report("insert coin Five", machine.insert_coin(Coin::Five));
    report("insert coin Two", machine.insert_coin(Coin::Two));
    report("insert coin Two", machine.insert_coin(Coin::Two));
    report("insert coin One", machine.insert_coin(Coin::One));
    report("insert note Ten", machine.insert_note(Note::Ten));
    report("dispense", machine.dispense());
    report("return change", machine.return_change());
    println!("  Coke remaining: {}\n", machine.inventory().quantity(&coke));

    println!("Cycle 2: Pepsi with an early dispense attempt");
    report("select Pepsi", machine.select(pepsi.clone()));
    report("insert coin Five", machine.insert_coin(Coin::Five));
    report("insert coin Five", machine.insert_coin(Coin::Five));
    report("dispense too early", machine.dispense());
    report("insert coin Two", machine.insert_coin(Coin::Two));
    report("insert coin Two", machine.insert_coin(Coin::Two));
    report("insert coin Two", machine.insert_coin(Coin::Two));
    report("dispense", machine.dispense());
    report("return change", machine.return_change());
    println!(
        "  Pepsi remaining: {}\n",
        machine.inventory().quantity(&pepsi)
    );

    println!("Transitions logged: {}", machine.history().len());
    for record in machine.history().records() {
        println!("  {} -> {} ({})", record.from, record.to, record.command);
    }

    println!("\nKey Takeaways:");
    println!("- Commands are only legal in their state; everything else is an inert rejection");
    println!("- Payment accumulates until the price is covered, then dispensing unlocks");
    println!("- The product must be collected before the change tray releases");
    println!("- Every command returns a structured outcome or error");

    println!("\n=== Example Complete ===");
}
