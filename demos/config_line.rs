//! Parsing a config-style line with trimming, escape-aware splitting, and
//! strict numeric conversion.
//!
//! Run with: cargo run --example config_line

use std::error::Error;
use strutil::{from_text, next_token, split, trim};

fn main() -> Result<(), Box<dyn Error>> {
    // The escaped semicolon is data, not a field boundary.
    let line = r" name = widget ; note = assembly\;paint ; qty = 4 ; scale = 2.5 ";

    // Fields between unescaped semicolons
    println!("Fields:");
    let mut fields = Vec::new();
    split(trim(line), ";", |field, _| fields.push(trim(field)));
    for field in &fields {
        println!("  {:?}", field);
    }
    println!();

    // Each field splits into a key and a value on '='
    println!("Settings:");
    let mut qty = 0u32;
    let mut scale = 0.0f64;
    for field in &fields {
        let mut cursor = 0;
        let key = trim(next_token(field, &mut cursor, "="));
        let value = trim(next_token(field, &mut cursor, "="));
        println!("  {} = {:?}", key, value);
        match key {
            "qty" => qty = from_text(value)?,
            "scale" => scale = from_text(value)?,
            _ => {}
        }
    }
    println!();

    println!("qty x scale = {}", f64::from(qty) * scale);

    Ok(())
}
