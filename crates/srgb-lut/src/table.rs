//! 8-bit sRGB to linear lookup tables.
//!
//! Both tables are indexed directly by the 8-bit encoded value, so a runtime
//! `powf` becomes a single array load.

use crate::LutResult;
use srgb_transfer::decode_srgb_to_linear;
use tracing::debug;

/// Number of entries in each table: one per 8-bit input value.
pub const TABLE_SIZE: usize = 256;

/// 8-bit input, 16-bit linear output.
pub type Table16 = [u16; TABLE_SIZE];

/// 8-bit input, 8-bit linear output.
pub type Table8 = [u8; TABLE_SIZE];

/// Both decode tables, computed together.
///
/// # Example
///
/// ```rust
/// use srgb_lut::SrgbTables;
///
/// let tables = SrgbTables::build().unwrap();
/// assert_eq!(tables.decode_8_to_8(0), 0);
/// assert_eq!(tables.decode_8_to_8(255), 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrgbTables {
    /// Linear values scaled to [0, 65535]
    pub table16: Table16,
    /// High byte of each `table16` entry
    pub table8: Table8,
}

impl SrgbTables {
    /// Computes both tables. Same as [`build_tables`].
    pub fn build() -> LutResult<Self> {
        build_tables()
    }

    /// Derives the 8-bit table from a 16-bit one by keeping the high byte.
    ///
    /// Truncates rather than rounds, so 0x80ff maps to 0x80.
    pub fn from_table16(table16: Table16) -> Self {
        let table8 = table16.map(|v| (v >> 8) as u8);
        Self { table16, table8 }
    }

    /// Looks up the 16-bit linear value for an 8-bit sRGB value.
    #[inline]
    pub fn decode_8_to_16(&self, v: u8) -> u16 {
        self.table16[v as usize]
    }

    /// Looks up the 8-bit linear value for an 8-bit sRGB value.
    #[inline]
    pub fn decode_8_to_8(&self, v: u8) -> u8 {
        self.table8[v as usize]
    }
}

/// Scales a linear value in [0, 1] to 16 bits, rounding half up.
///
/// `as` saturates, so 1.0 lands on exactly 65535.
#[inline]
pub fn quantize_u16(linear: f64) -> u16 {
    (linear * 65535.0 + 0.5) as u16
}

/// Computes the 16-bit and 8-bit decode tables.
///
/// Entry `i` of the 16-bit table is `round((i / 255)^2.2 * 65535)`; the 8-bit
/// table holds the high byte of each 16-bit entry.
///
/// # Example
///
/// ```rust
/// use srgb_lut::build_tables;
///
/// let tables = build_tables().unwrap();
/// assert_eq!(tables.table16[0], 0);
/// assert_eq!(tables.table16[255], 65535);
/// ```
pub fn build_tables() -> LutResult<SrgbTables> {
    let mut table16: Table16 = [0; TABLE_SIZE];
    for (i, entry) in table16.iter_mut().enumerate() {
        let linear = decode_srgb_to_linear(i as f64 / 255.0)?;
        *entry = quantize_u16(linear);
    }

    let tables = SrgbTables::from_table16(table16);
    debug!(
        "Built decode tables: 16-bit [{}, {}], 8-bit [{}, {}]",
        tables.table16[0],
        tables.table16[TABLE_SIZE - 1],
        tables.table8[0],
        tables.table8[TABLE_SIZE - 1]
    );
    Ok(tables)
}
