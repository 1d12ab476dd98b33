//! Criterion benchmarks for rust_event_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_event_logger::core::{interpolate, parse_timestamp};
use rust_event_logger::parser;
use rust_event_logger::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

// ============================================================================
// Emit Benchmarks
// ============================================================================

fn bench_file_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_logging");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::create("DEBUG", temp_dir.path(), "bench-%s.log").expect("logger");

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message")).expect("log");
        });
    });

    group.bench_function("printf_args", |b| {
        let args = [Value::from("checkout"), Value::from(42)];
        b.iter(|| {
            logger
                .log_args(Severity::Notice, black_box("%s took %d ms"), &args)
                .expect("log");
        });
    });

    group.finish();
}

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::stdout("EMERGENCY");

    group.bench_function("filtered_debug", |b| {
        b.iter(|| {
            logger.debug(black_box("never written")).expect("log");
        });
    });

    group.bench_function("disabled", |b| {
        logger.disable();
        b.iter(|| {
            logger.emergency(black_box("never written")).expect("log");
        });
        logger.enable();
    });

    group.finish();
}

fn bench_observers(c: &mut Criterion) {
    let mut group = c.benchmark_group("observers");
    group.throughput(Throughput::Elements(1));

    for count in [1usize, 8, 32] {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let logger = Logger::create("DEBUG", temp_dir.path(), "%s.log").expect("logger");
        for _ in 0..count {
            logger.on(Channel::All, |record: &LogRecord| {
                black_box(record.message.len());
                Ok(())
            });
        }

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                logger.warning(black_box("observed")).expect("log");
            });
        });
    }

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            let logger =
                Arc::new(Logger::create("DEBUG", temp_dir.path(), "%s.log").expect("logger"));

            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                logger.info(format!("message {}", i)).expect("log");
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().expect("thread panicked");
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let content: String = (0..1000)
        .map(|i| {
            LogRecord::serialize_line(
                "Wed Jan 08 2025 10:30:45 GMT+0000",
                Severity::ALL[i % Severity::ALL.len()],
                &format!("request {} served", i),
            )
        })
        .collect();

    group.throughput(Throughput::Bytes(content.len() as u64));
    group.bench_function("parse_1000_lines", |b| {
        b.iter(|| black_box(parser::parse(black_box(&content))));
    });
    group.finish();

    let mut group = c.benchmark_group("timestamps");
    for (name, input) in [
        ("display", "Wed Jan 08 2025 10:30:45 GMT+0100"),
        ("rfc3339", "2025-01-08T10:30:45.123+01:00"),
        ("invalid", "not a time"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(parse_timestamp(black_box(input))));
        });
    }
    group.finish();
}

fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");
    let args = [
        Value::from("ana"),
        Value::from(3),
        serde_json::json!({ "cart": [1, 2, 3] }),
    ];

    group.bench_function("mixed_placeholders", |b| {
        b.iter(|| black_box(interpolate(black_box("%s bought %d items: %j"), &args)));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_file_logging,
    bench_level_filtering,
    bench_observers,
    bench_concurrent_logging,
    bench_parsing,
    bench_interpolation
);

criterion_main!(benches);
