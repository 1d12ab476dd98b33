//! File logging example
//!
//! Demonstrates daily log files and cleanup of old ones.
//!
//! Run with: cargo run --example file_logging

use chrono::{Duration, Local};
use rust_event_logger::core::date_stamp;
use rust_event_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Event Logger - File Logging Example ===\n");

    let directory = std::env::temp_dir().join("rust_event_logger_demo");
    let logger = Logger::create("INFO", &directory, "application-%s.log")?;

    println!("1. Logging to {}:", directory.display());

    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.notice("Configuration loaded successfully")?;
    logger.warning("Using default settings for some options")?;
    logger.error("Failed to load optional plugin")?;

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i))?;
    }
    logger.flush()?;

    if let Some(path) = logger.current_file() {
        println!("   Today's file: {}", path.display());
    }

    println!("\n2. Cleaning up old files:");

    // Pretend an old file is lying around
    let last_week = (Local::now() - Duration::days(7)).date_naive();
    let stale = directory.join(format!("application-{}.log", date_stamp(last_week)));
    std::fs::write(&stale, "[old] INFO stale entry\n")?;

    for file in logger.files()? {
        println!("   found {} ({})", file.path.display(), file.date);
    }

    let report = logger.clear(None)?;
    println!("   removed {} file(s)", report.removed.len());
    for failure in &report.failures {
        println!("   could not remove: {}", failure);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
