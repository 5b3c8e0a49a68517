//! Pure gamma 2.2 transfer functions.
//!
//! Unlike the piecewise sRGB curve there is no linear segment near black:
//! decode is `v^2.2` over the whole range.
//!
//! # Range
//!
//! - Decode input: [0, 1], validated
//! - Encode input: unvalidated, follows `powf` for any value

use crate::{TransferError, TransferResult};

/// Gamma exponent used by compositors for sRGB content.
pub const GAMMA: f64 = 2.2;

/// Decodes an sRGB-encoded value to linear light: `x^2.2`.
///
/// Fails with [`TransferError::OutOfRange`] when `x` is not in [0, 1].
///
/// # Example
///
/// ```rust
/// use srgb_transfer::decode_srgb_to_linear;
///
/// assert_eq!(decode_srgb_to_linear(0.0).unwrap(), 0.0);
/// assert_eq!(decode_srgb_to_linear(1.0).unwrap(), 1.0);
/// assert!(decode_srgb_to_linear(1.1).is_err());
/// ```
#[inline]
pub fn decode_srgb_to_linear(x: f64) -> TransferResult<f64> {
    // Written as a negated range check so NaN is rejected too.
    if !(0.0..=1.0).contains(&x) {
        return Err(TransferError::OutOfRange { value: x });
    }
    Ok(x.powf(GAMMA))
}

/// Encodes a linear-light value to sRGB: `x^(1/2.2)`.
///
/// # Example
///
/// ```rust
/// use srgb_transfer::encode_linear_to_srgb;
///
/// let encoded = encode_linear_to_srgb(0.218);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode_linear_to_srgb(x: f64) -> f64 {
    x.powf(1.0 / GAMMA)
}
