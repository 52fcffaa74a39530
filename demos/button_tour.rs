//! Scripted tour of the calculator engine.
//!
//! This example demonstrates the engine's behavior on a few notable
//! sequences:
//! - A plain chained calculation with its history trail
//! - Division by zero and local recovery
//! - The uniform degrees conversion, constants included
//! - The bounded five-entry history
//!
//! Run with: cargo run --example button_tour

use deskcalc::{Engine, Event, Layout};

fn run(engine: &mut Engine, labels: &[&str]) {
    println!("pressing: {}", labels.join(" "));
    let mut render = None;
    for label in labels {
        let event = Event::from_label(label).expect("known button label");
        render = Some(engine.apply(event));
    }
    if let Some(render) = render {
        println!("  display: {}", render.display);
        for line in &render.history {
            println!("  history: {line}");
        }
    }
    println!();
}

fn main() {
    println!("=== Deskcalc Button Tour ===\n");

    let mut engine = Engine::new();

    println!("--- Chained arithmetic ---");
    run(&mut engine, &["3", "+", "4", "+", "2", "="]);

    println!("--- Division by zero is a local fault ---");
    run(&mut engine, &["CE", "1", "0", "/", "0", "="]);
    run(&mut engine, &["4", "2"]);

    println!("--- Degrees conversion applies to every trig input ---");
    run(&mut engine, &["CE", "pi", "Cos"]);

    println!("--- History keeps the last five operations ---");
    for i in 1..=6 {
        let digit = i.to_string();
        run(&mut engine, &["CE", &digit, "x", "2", "="]);
    }

    let (width, height) = Layout::Scientific.window_size();
    println!(
        "The scientific face plate shows {} buttons in a {}x{} window.",
        Layout::Scientific.buttons().count(),
        width,
        height
    );

    println!("\n=== Tour Complete ===");
}
