//! Basic logger usage example
//!
//! Demonstrates console logging, severity thresholds and observers.
//!
//! Run with: cargo run --example basic_usage

use rust_event_logger::prelude::*;
use rust_event_logger::{logf, warning};

fn main() -> Result<()> {
    println!("=== Rust Event Logger - Basic Usage Example ===\n");

    // No directory: records go to standard output
    let logger = Logger::builder().min_severity("DEBUG").use_colors(true).build()?;

    println!("1. Logging at every severity:");
    logger
        .emergency("This is an emergency message")?
        .alert("This is an alert message")?
        .critical("This is a critical message")?
        .error("This is an error message")?
        .warning("This is a warning message")?
        .notice("This is a notice message")?
        .info("This is an info message")?
        .debug("This is a debug message")?;

    println!("\n2. Observers on a severity channel and on the catch-all channel:");
    logger.on(Severity::Error, |record: &LogRecord| {
        println!("   -> ERROR observer got: {}", record.message);
        Ok(())
    });
    let id = logger.on(Channel::All, |record: &LogRecord| {
        println!("   -> LOG observer got: {} {}", record.level, record.message);
        Ok(())
    });

    logger.error("Connection refused")?;
    warning!(logger, "Retry {} of {}", 2, 5)?;
    logger.off(Channel::All, id);

    println!("\n3. printf-style arguments:");
    logf!(logger, Severity::Notice, "user %s has %d open sessions", "ana", 3)?;

    println!("\n4. A logger with a higher threshold:");
    let quiet = Logger::stdout("WARNING");
    quiet.info("Info message (hidden)")?;
    quiet.warning("Warning message (visible)")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
