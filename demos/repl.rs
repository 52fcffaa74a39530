//! Drive the calculator engine from stdin.
//!
//! Type button captions one per line ("7", "+", "Cos", "=", ...) and the
//! engine's display plus history panel are printed after each one.
//!
//! Run with: cargo run --example repl

use std::io::{self, BufRead, Write};

use deskcalc::{Engine, Event};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut engine = Engine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("deskcalc repl - enter button captions, Ctrl-D to quit");
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let label = line.trim();
        if label.is_empty() {
            print!("> ");
            stdout.flush()?;
            continue;
        }

        match Event::from_label(label) {
            Some(event) => {
                let render = engine.apply(event);
                println!("display: {}", render.display);
                if !render.history.is_empty() {
                    println!("history:");
                    for entry in &render.history {
                        println!("  {entry}");
                    }
                }
            }
            None => println!("unknown button: {label:?}"),
        }

        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
