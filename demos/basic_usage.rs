// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_decimal::context::Context;
use radix_decimal::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Radix Decimal Example ===\n");

    // Floats are read through their shortest round-trip text
    let a = parse(745834720.0001).unwrap();
    let b = parse("423.0002").unwrap();
    println!("{} + {} = {}", a, b, a.checked_add(&b).unwrap());
    println!("0.1 + 0.2 = {}", parse("0.1").unwrap() + parse("0.2").unwrap());

    // Products are exact, whatever their width
    let big: Decimal = "123456789.123456789".parse().unwrap();
    println!("{} squared = {}", big, big.checked_mul(&big).unwrap());

    // Division stops at 20 significant digits unless a context says otherwise
    println!("\n=== Division ===");
    let one = Decimal::one();
    let three = Decimal::from(3);
    println!("1 / 3 = {}", one.checked_div(&three).unwrap());
    for ctx in [Context::decimal32(), Context::decimal64(), Context::decimal128()] {
        println!(
            "  precision {:>2}: {}",
            ctx.precision,
            Decimal::from(2).div_with(&three, &ctx).unwrap()
        );
    }

    match one.checked_div(&Decimal::zero()) {
        Ok(q) => println!("1 / 0 = {q}"),
        Err(e) => println!("1 / 0 -> {e}"),
    }

    // Rounding
    println!("\n=== Rounding ===");
    let price: Decimal = "2.675".parse().unwrap();
    for mode in [
        RoundingMode::HalfUp,
        RoundingMode::HalfEven,
        RoundingMode::Down,
        RoundingMode::Ceiling,
    ] {
        println!(
            "  {:?}: {} -> {}",
            mode,
            price,
            price.round_to_places(2, mode).unwrap()
        );
    }

    // Formatting
    println!("\n=== Formatting ===");
    for text in ["0.0000015", "1e15", "-2.5e-300", "99999999999999.5"] {
        let x: Decimal = text.parse().unwrap();
        println!(
            "  {:<18} auto: {:<22} plain: {}",
            text,
            x,
            x.to_string_with(Notation::Plain, None)
        );
    }

    // Boundary conversions
    println!("\n=== Interop ===");
    let fee = Decimal::try_from(rust_decimal::Decimal::new(25, 4)).unwrap();
    println!("fee {} as f64 = {}", fee, fee.to_f64());
    println!("fee as rust_decimal = {}", fee.to_rust_decimal().unwrap());

    if let Err(e) = parse("12abc") {
        println!("\nparse(\"12abc\") -> {e}");
    }
}
