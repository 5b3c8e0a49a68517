//! Integration tests for the sRGB table generator crates.
//!
//! Checks the transfer function, table builder and C emitter together,
//! including writing the artifacts to disk.

#[cfg(test)]
mod golden;
