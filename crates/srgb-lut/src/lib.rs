//! # srgb-lut
//!
//! Precomputed lookup tables mapping 8-bit sRGB values to linear light, and
//! the C code generator that embeds them in a native build.
//!
//! # Tables
//!
//! | Table | Input | Output | Derivation |
//! |-------|-------|--------|------------|
//! | [`Table16`] | `u8` | `u16` | `round(decode(i / 255) * 65535)` |
//! | [`Table8`] | `u8` | `u8` | `Table16[i] >> 8` |
//!
//! # Usage
//!
//! ```rust
//! use srgb_lut::{build_tables, codegen};
//!
//! let tables = build_tables().unwrap();
//! assert_eq!(tables.decode_8_to_16(255), 65535);
//!
//! let rendered = codegen::render(&tables.table16, &tables.table8).unwrap();
//! assert!(rendered.source.starts_with("#include \"srgb.h\"\n"));
//! ```
//!
//! # Dependencies
//!
//! - [`srgb-transfer`] - Gamma 2.2 decode
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Diagnostics
//!
//! # Used By
//!
//! - `srgb-cli` - The `srgb-gen` code generator

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod table;
mod error;
pub mod codegen;

pub use table::{build_tables, quantize_u16, SrgbTables, Table16, Table8, TABLE_SIZE};
pub use error::{LutError, LutResult};
