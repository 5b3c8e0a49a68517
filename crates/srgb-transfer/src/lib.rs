//! # srgb-transfer
//!
//! Transfer functions for converting 8-bit sRGB-encoded values to linear light.
//!
//! Compositors approximate sRGB with a pure power-law curve rather than the
//! piecewise IEC 61966-2-1 function, so this crate implements exactly that:
//!
//! - **Decode** (encoded -> linear): `v^2.2`
//! - **Encode** (linear -> encoded): `l^(1/2.2)`
//!
//! # Usage
//!
//! ```rust
//! use srgb_transfer::{decode_srgb_to_linear, encode_linear_to_srgb};
//!
//! let linear = decode_srgb_to_linear(0.5).unwrap();
//! let encoded = encode_linear_to_srgb(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Range
//!
//! Decoding validates its input against [0, 1] and returns
//! [`TransferError::OutOfRange`] instead of clamping.
//!
//! # Used By
//!
//! - `srgb-lut` - Table generation and C code emission

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
mod error;

pub use error::{TransferError, TransferResult};
pub use gamma::{decode_srgb_to_linear, encode_linear_to_srgb, GAMMA};
