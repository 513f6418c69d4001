//! Basic Session
//!
//! This example drives a calculator session directly, without the
//! interactive shell.
//!
//! Key concepts:
//! - Requests carry already-parsed operands
//! - Failed requests are reported and leave the history untouched
//! - Scientific operations are gated by the session mode
//! - The memory register persists across requests
//!
//! Run with: cargo run --example basic_session

use reckon::engine::{BinaryOp, Statistic, UnaryOp};
use reckon::session::{MemoryCommand, Request, Session};

fn main() {
    println!("=== Basic Session Example ===\n");

    let mut session = Session::default();

    // Basic arithmetic
    for request in [
        Request::Binary { op: BinaryOp::Add, lhs: 2.0, rhs: 3.0 },
        Request::Binary { op: BinaryOp::Percentage, lhs: 200.0, rhs: 15.0 },
        Request::Binary { op: BinaryOp::Divide, lhs: 1.0, rhs: 0.0 },
    ] {
        match session.execute(request) {
            Ok(outcome) => println!("{outcome}"),
            Err(err) => println!("Error: {err}"),
        }
    }

    // Scientific functions need scientific mode
    let sine = Request::Unary { op: UnaryOp::Sine, value: 0.5 };
    if let Err(err) = session.execute(sine.clone()) {
        println!("\nBlocked: {err}");
    }
    session.toggle_scientific();
    if let Ok(outcome) = session.execute(sine) {
        println!("After enabling scientific mode: {outcome}");
    }

    // Statistics over a list of numbers
    let numbers = vec![2.0, 4.0, 4.0, 5.0, 7.0, 7.0];
    if let Ok(outcome) = session.execute(Request::Statistic { op: Statistic::Mode, numbers }) {
        println!("\n{outcome}");
    }

    // Memory register
    for command in [MemoryCommand::Store(10.0), MemoryCommand::Add(2.5), MemoryCommand::Recall] {
        match session.memory(command) {
            Ok(outcome) => println!("{outcome}"),
            Err(err) => println!("Error: {err}"),
        }
    }

    println!("\nHistory:");
    for record in session.history() {
        println!("  {record}");
    }

    println!("\n=== Example Complete ===");
}
