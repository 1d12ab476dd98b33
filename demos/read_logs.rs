//! Log reading example
//!
//! Writes a few records and reads the file back asynchronously.
//!
//! Run with: cargo run --example read_logs

use rust_event_logger::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Rust Event Logger - Read Logs Example ===\n");

    let directory = std::env::temp_dir().join("rust_event_logger_read_demo");
    let logger = Logger::create("DEBUG", &directory, "%s.log")?;

    logger
        .notice("cache warmed")?
        .error("upstream timed out")?
        .debug("retrying request")?;

    let Some(path) = logger.current_file() else {
        return Err(LoggerError::other("no log file was opened"));
    };

    let records = Logger::read(&path).await?;
    println!("Read {} record(s) from {}:", records.len(), path.display());

    for record in &records {
        let time = record
            .timestamp
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "Invalid Date".to_string());
        println!("  {} {:<9} {}", time, record.level.to_str(), record.message);
    }

    let errors = records
        .iter()
        .filter(|r| r.level.passes(Severity::Error))
        .count();
    println!("\n{} record(s) at ERROR or worse", errors);

    Ok(())
}
