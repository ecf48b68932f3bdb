//! Turning CSV text into rows of typed values.
//!
//! Run with: cargo run --example csv_rows

use std::cell::Cell;
use std::error::Error;
use strutil::{from_text, parse_csv_with_records, to_text};

fn main() -> Result<(), Box<dyn Error>> {
    let doc = "sku,qty,price\r\n\
               bolt-m4,250,0.13\r\n\
               \"washer, flat\",500,0.05\r\n\
               nut-m4,175,0.08\r\n";

    // Group cells into rows; the record callback marks the boundaries.
    let record = Cell::new(0usize);
    let mut cells: Vec<(usize, String)> = Vec::new();
    parse_csv_with_records(
        doc,
        |cell, _| cells.push((record.get(), cell.to_string())),
        || record.set(record.get() + 1),
    );
    let mut rows = vec![Vec::new(); record.get()];
    for (row, cell) in cells {
        rows[row].push(cell);
    }

    println!("Rows:");
    for row in &rows {
        println!("  {:?}", row);
    }
    println!();

    // Skip the header row and total up the order.
    let mut total = 0.0f64;
    for row in &rows[1..] {
        let qty: u32 = from_text(&row[1])?;
        let price: f64 = from_text(&row[2])?;
        total += f64::from(qty) * price;
    }

    // Format the total into a stack buffer instead of allocating.
    let mut buf = [0u8; 32];
    println!("Order total: {}", to_text(total, &mut buf)?);

    Ok(())
}
