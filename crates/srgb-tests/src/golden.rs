//! Golden hash tests for the generated C artifacts.
//!
//! Downstream builds compile the emitted files as-is, so the output is pinned
//! byte-for-byte. Hashes were recorded from the reference generator's output.
//!
//! # Running
//!
//! ```bash
//! cargo test --package srgb-tests golden
//! ```

use sha2::{Digest, Sha256};
use srgb_lut::{build_tables, codegen};

/// SHA-256 of the reference `srgb.h`.
const GOLDEN_HEADER: &str = "9053596e40a895d310fa3cf74a68ae1f87828d20a3cdcc927275acaf9d2104cc";

/// SHA-256 of the reference `srgb.c`.
const GOLDEN_SOURCE: &str = "c038205bf3f77953b6b1125ede9cee8df49d07dd004f9f70f6723f305a06e445";

fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

#[test]
fn test_golden_header() {
    let header = codegen::render_header().unwrap();
    assert_eq!(header.len(), 402);
    assert_eq!(sha256_hex(header.as_bytes()), GOLDEN_HEADER);
}

#[test]
fn test_golden_source() {
    let t = build_tables().unwrap();
    let source = codegen::render_source(&t.table16, &t.table8).unwrap();
    assert_eq!(sha256_hex(source.as_bytes()), GOLDEN_SOURCE, "source:\n{}", source);
}

/// Table sums catch a drifted entry even when only the hash is reported.
#[test]
fn test_golden_sums() {
    let t = build_tables().unwrap();
    let sum16: u64 = t.table16.iter().map(|&v| v as u64).sum();
    let sum8: u64 = t.table8.iter().map(|&v| v as u64).sum();
    assert_eq!(sum16, 5_255_141);
    assert_eq!(sum8, 20_408);
}
