// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_calculator::numeral::Roman;
use roman_calculator::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Roman Numeral Codec ===\n");

    for value in [1, 4, 9, 14, 40, 90, 400, 900, 1994, 3999] {
        println!("  {:>4} -> {}", value, encode(value).unwrap());
    }

    println!("\nDecoding...");
    for text in ["XIV", "MCMXCIV", "IC", "IIII", "ABC", ""] {
        match decode(text) {
            Ok(value) => println!("  {:?} -> {}", text, value),
            Err(err) => println!("  {:?} -> error: {}", text, err),
        }
    }

    let year: Roman = "MMXXIV".parse().unwrap();
    println!("\nRoman value {} = {}", year, year.value());

    // Evaluate a few expressions directly
    println!("\n=== Evaluator ===");
    let evaluator = Evaluator::new(CalculatorConfig::classic());
    for input in ["X + V", "3 + 4", "V / II", "X + 3", "V - V", "1 % 2"] {
        match evaluator.evaluate(input) {
            Ok(result) => println!("  {} = {}", input, result),
            Err(err) => println!("  {} -> {}", input, err),
        }
    }

    // Scripted session that keeps going after errors
    println!("\n=== Session ===");
    let recorder = Arc::new(RecordingEventHandler::new());
    let session = Session::new(
        CalculatorConfig::forgiving().with_banner(false),
        recorder.clone(),
    )
    .unwrap();

    let mut output = Vec::new();
    let outcome = session
        .run("IX * IX\nI - X\nexit\n".as_bytes(), &mut output)
        .unwrap();

    print!("{}", String::from_utf8_lossy(&output));
    println!("\nOutcome: {:?}", outcome);
    println!("Events recorded: {}", recorder.len());
}
