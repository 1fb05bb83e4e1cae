// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with:
//   cargo run --example basic_usage --features logging -- 123.45 1e5

use money_words::prelude::*;
use rust_decimal::Decimal;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Money Words Example ===\n");

    println!("Library API:");
    for amount in [
        Decimal::ZERO,
        Decimal::new(1, 2),
        Decimal::from(101),
        Decimal::new(12345, 2),
        Decimal::from(1_000_001),
    ] {
        match money_to_words(amount) {
            Ok(words) => println!("  {:>12} -> {}", amount, words),
            Err(e) => println!("  {:>12} -> error: {}", amount, e),
        }
    }

    println!("\nTrillion tier:");
    match MoneyConverterBuilder::new().trillion_scale().build() {
        Ok(converter) => {
            let amount = Decimal::new(250_000_000_000_075, 2);
            match converter.convert(amount) {
                Ok(words) => println!("  {} -> {}", amount, words),
                Err(e) => println!("  {} -> error: {}", amount, e),
            }
        }
        Err(e) => println!("  invalid configuration: {}", e),
    }

    let form = AmountForm::standard();
    println!(
        "\nForm input (maximum {}):",
        form.max_amount_display()
    );
    for raw in std::env::args().skip(1) {
        match form.submit(&raw) {
            Ok(words) => println!("  {:?} -> {}", raw, words),
            Err(message) => println!("  {:?} -> {}", raw, message),
        }
    }
}
