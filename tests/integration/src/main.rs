//! Integration Test Harness
//!
//! Runs every test category and prints a summary table.
//!
//! # Usage
//!
//! Run all categories:
//! ```
//! cargo run -p integration-tests
//! ```
//!
//! Run one category directly:
//! ```
//! cargo test -p integration-tests --test guid_tests
//! cargo test -p integration-tests --test codec_tests
//! cargo test -p integration-tests --test hresult_tests
//! cargo test -p integration-tests --test interface_tests
//! ```

use std::process::Command;
use std::time::{Duration, Instant};

/// Test category
#[derive(Debug, Clone)]
struct TestCategory {
    name: &'static str,
    description: &'static str,
    test_name: &'static str,
}

const TEST_CATEGORIES: &[TestCategory] = &[
    TestCategory {
        name: "Text Codec Tests",
        description: "Parse/format round trips, failure offsets, ordering, hashing",
        test_name: "guid_tests",
    },
    TestCategory {
        name: "Byte Codec Tests",
        description: "Variant-1 and Variant-2 wire forms, streaming codecs",
        test_name: "codec_tests",
    },
    TestCategory {
        name: "Result Code Tests",
        description: "Taxonomy, predicates, exception bridging at the boundary",
        test_name: "hresult_tests",
    },
    TestCategory {
        name: "Base Interface Tests",
        description: "Refcounting, GUID-keyed casting, weak references, races",
        test_name: "interface_tests",
    },
];

fn run_test_category(category: &TestCategory) -> (bool, Duration, String) {
    println!("\n{}", "=".repeat(72));
    println!("Running: {}", category.name);
    println!("{}", "=".repeat(72));

    let start = Instant::now();

    let output = Command::new("cargo")
        .args([
            "test",
            "-p",
            "integration-tests",
            "--test",
            category.test_name,
            "--",
            "--nocapture",
        ])
        .output();

    let duration = start.elapsed();

    match output {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stdout.is_empty() {
                println!("{}", stdout);
            }
            if !stderr.is_empty() {
                eprintln!("{}", stderr);
            }

            let success = output.status.success();
            let summary = if success {
                "PASSED".to_string()
            } else {
                format!("FAILED (exit code: {:?})", output.status.code())
            };
            (success, duration, summary)
        }
        Err(e) => (false, duration, format!("Failed to execute: {}", e)),
    }
}

fn main() {
    println!("GUID / nano-component foundation - integration suite");
    println!("{}", "-".repeat(72));
    for (i, cat) in TEST_CATEGORIES.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, cat.name, cat.description);
    }
    println!("{}", "-".repeat(72));

    let total_start = Instant::now();
    let mut results = Vec::new();

    for category in TEST_CATEGORIES {
        let (success, duration, summary) = run_test_category(category);
        results.push((category.name, success, duration, summary));
    }

    let total_duration = total_start.elapsed();

    println!("\n{}", "=".repeat(72));
    println!("FINAL SUMMARY");
    println!("{}", "=".repeat(72));

    let passed = results.iter().filter(|(_, s, _, _)| *s).count();
    let failed = results.len() - passed;

    println!(
        "\nCategories: {} | Passed: {} | Failed: {}",
        results.len(),
        passed,
        failed
    );
    println!("Total Duration: {:?}\n", total_duration);

    println!("{:<28} {:<10} {:<14} {}", "Category", "Status", "Duration", "Details");
    println!("{}", "-".repeat(72));
    for (name, success, duration, summary) in &results {
        let status = if *success { "PASS" } else { "FAIL" };
        println!("{:<28} {:<10} {:<14?} {}", name, status, duration, summary);
    }
    println!("{}", "=".repeat(72));

    if failed > 0 {
        println!("\nSome tests failed!");
        std::process::exit(1);
    }
    println!("\nAll tests passed!");
}
