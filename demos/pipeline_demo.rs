//! Pipeline example
//!
//! Builds a logger that only accepts dated ERROR lines and sends them to the
//! console and a file.
//!
//! Run with: cargo run --example pipeline_demo

use pipeline_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Pipeline Logger - Filter Chain Example ===\n");

    let logger = Logger::builder()
        .filter(SubstringFilter::new("ERROR"))
        .filter(PatternFilter::new(r"\d{4}-\d{2}-\d{2}")?)
        .handler(ConsoleHandler::new())
        .handler(FileHandler::new("log_output.txt"))
        .build();

    logger.log("2025-06-08 ERROR: Something went wrong"); // passes both filters
    logger.log("2025-06-08 ERROR: Disk is full"); // passes both filters
    logger.log("2025-06-08 INFO: Just a test"); // no ERROR
    logger.log("ERROR without date"); // no date
    logger.log("2025-06-08 ERROR: Out of memory"); // passes both filters

    let metrics = logger.metrics();
    println!(
        "\nReceived {}, dispatched {}, rejected {} ({:.0}%)",
        metrics.received(),
        metrics.dispatched(),
        metrics.rejected(),
        metrics.rejection_rate()
    );
    println!("Check 'log_output.txt' for the accepted lines");

    Ok(())
}
