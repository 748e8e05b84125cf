//! Performance benchmarks for attribute resolution and snapshot encoding

use session::{encode, SessionState};
use std::time::Instant;
use store::{AttributeBank, Domain};

fn populated_bank(keys: usize) -> AttributeBank {
    let mut bank = AttributeBank::new();
    for i in 0..keys {
        bank.add_numeric(&format!("stat-{}", i), i as f64);
    }
    bank
}

/// Benchmarks indexed resolution on a warm bank
#[test]
fn benchmark_indexed_resolution() {
    let bank = populated_bank(1_000);

    let iterations = 100_000;
    let start = Instant::now();

    for i in 0..iterations {
        let key = format!("stat-{}", i % 1_000);
        let _ = bank.resolve(Domain::Numeric, &key);
    }

    let duration = start.elapsed();
    println!(
        "Indexed resolution: {} iterations in {:?} ({:.2} ns/iter)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    // Should complete in under 500ms for 100k lookups on 1k keys
    assert!(duration.as_millis() < 500);
}

/// Benchmarks the scan fallback used right after deserialization
#[test]
fn benchmark_scan_resolution_after_decode() {
    let bank = populated_bank(1_000);
    let decoded: AttributeBank = bincode::deserialize(&bincode::serialize(&bank).unwrap()).unwrap();

    let iterations = 1_000;
    let start = Instant::now();

    for i in 0..iterations {
        let key = format!("stat-{}", i % 1_000);
        let _ = decoded.resolve(Domain::Numeric, &key);
    }

    let duration = start.elapsed();
    println!(
        "Scan resolution: {} iterations in {:?} ({:.2} μs/iter)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    // O(n) path, still bounded: under 1 second for 1k scans of 1k keys
    assert!(duration.as_millis() < 1000);
}

/// Benchmarks append throughput including lookup maintenance
#[test]
fn benchmark_append_throughput() {
    let iterations = 10_000;
    let start = Instant::now();

    let mut bank = AttributeBank::new();
    for i in 0..iterations {
        bank.add_numeric(&format!("stat-{}", i), i as f64);
    }

    let duration = start.elapsed();
    println!(
        "Append: {} iterations in {:?} ({:.2} μs/iter)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    assert!(bank.is_aligned());
    assert!(duration.as_millis() < 1000);
}

/// Benchmarks view access once resolution has been paid
#[test]
fn benchmark_view_access() {
    let mut bank = populated_bank(1_000);
    let mut view = bank.numeric_view("stat-500").unwrap();

    let iterations = 100_000;
    let start = Instant::now();

    for i in 0..iterations {
        let current = view.read();
        view.write(current + i as f64);
    }

    let duration = start.elapsed();
    println!(
        "View access: {} iterations in {:?} ({:.2} ns/iter)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    // Should complete in under 100ms for 100k read/write pairs
    assert!(duration.as_millis() < 100);
}

/// Benchmarks snapshot encoding of a realistic session
#[test]
fn benchmark_snapshot_encoding() {
    let mut state = SessionState::new();
    for c in 0..16 {
        let entity = state.handle_join(&format!("client-{}", c)).unwrap();
        for i in 0..32 {
            entity.attributes.add_numeric(&format!("stat-{}", i), i as f64);
        }
        entity.attributes.add_text("name", "fighter");
    }

    let iterations = 1_000;
    let start = Instant::now();

    for _ in 0..iterations {
        let _ = encode(&state).unwrap();
    }

    let duration = start.elapsed();
    println!(
        "Snapshot encode: {} iterations in {:?} ({:.2} μs/iter)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    assert!(duration.as_millis() < 2000);
}
