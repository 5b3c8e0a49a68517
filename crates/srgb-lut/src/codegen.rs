//! C source emission for the decode tables.
//!
//! Produces a header with `extern` table declarations plus `static inline`
//! accessors, and a source file holding the table definitions. Identifier
//! names and the included header name are consumed by downstream C code and
//! must stay as they are.
//!
//! # Format
//!
//! Source tables are written one value per line, indented four spaces, each
//! followed by a comma:
//!
//! ```text
//! const uint16_t srgb_decode_8_to_16_table[256] = {
//!     0,
//!     0,
//!     2,
//!     ...
//! };
//! ```

use std::fmt::{Display, Write as _};
use std::io::Write;

use crate::{LutResult, SrgbTables, Table16, Table8};

/// Header file name the generated source includes.
pub const HEADER_NAME: &str = "srgb.h";

/// Name of the 16-bit output table.
pub const TABLE16_NAME: &str = "srgb_decode_8_to_16_table";

/// Name of the 16-bit accessor function.
pub const FN16_NAME: &str = "srgb_decode_8_to_16";

/// Name of the 8-bit output table.
pub const TABLE8_NAME: &str = "srgb_decode_8_to_8_table";

/// Name of the 8-bit accessor function.
pub const FN8_NAME: &str = "srgb_decode_8_to_8";

/// Generated header and source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Contents for `srgb.h`
    pub header: String,
    /// Contents for the C file holding the table definitions
    pub source: String,
}

/// Renders both artifacts.
///
/// # Example
///
/// ```rust
/// use srgb_lut::{build_tables, codegen};
///
/// let t = build_tables().unwrap();
/// let out = codegen::render(&t.table16, &t.table8).unwrap();
/// assert!(out.header.starts_with("#pragma once\n"));
/// ```
pub fn render(table16: &Table16, table8: &Table8) -> LutResult<Rendered> {
    Ok(Rendered {
        header: render_header()?,
        source: render_source(table16, table8)?,
    })
}

/// Renders the header text. Independent of table contents.
pub fn render_header() -> LutResult<String> {
    let mut out = String::new();
    writeln!(out, "#pragma once")?;
    writeln!(out, "#include <stdint.h>")?;
    writeln!(out)?;

    writeln!(out, "/* 8-bit input, 16-bit output */")?;
    writeln!(out, "extern const uint16_t {}[256];", TABLE16_NAME)?;
    write_accessor(&mut out, "uint16_t", FN16_NAME, TABLE16_NAME)?;
    writeln!(out)?;

    writeln!(out, "/* 8-bit input, 8-bit output */")?;
    writeln!(out, "extern const uint8_t {}[256];", TABLE8_NAME)?;
    writeln!(out)?;
    write_accessor(&mut out, "uint8_t", FN8_NAME, TABLE8_NAME)?;
    Ok(out)
}

/// Renders the source text holding both table definitions.
pub fn render_source(table16: &Table16, table8: &Table8) -> LutResult<String> {
    let mut out = String::new();
    writeln!(out, "#include \"{}\"", HEADER_NAME)?;
    writeln!(out)?;
    write_table(&mut out, "uint16_t", TABLE16_NAME, table16)?;
    write_table(&mut out, "uint8_t", TABLE8_NAME, table8)?;
    Ok(out)
}

/// Writes the header to any writer.
pub fn write_header_to<W: Write>(mut writer: W) -> LutResult<()> {
    writer.write_all(render_header()?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Writes the source to any writer.
pub fn write_source_to<W: Write>(mut writer: W, tables: &SrgbTables) -> LutResult<()> {
    writer.write_all(render_source(&tables.table16, &tables.table8)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn write_accessor(out: &mut String, ctype: &str, func: &str, table: &str) -> std::fmt::Result {
    writeln!(out, "static inline {}", ctype)?;
    writeln!(out, "{}(uint8_t v)", func)?;
    writeln!(out, "{{")?;
    writeln!(out, "    return {}[v];", table)?;
    writeln!(out, "}}")
}

fn write_table<T: Display>(out: &mut String, ctype: &str, name: &str, values: &[T]) -> std::fmt::Result {
    writeln!(out, "const {} {}[{}] = {{", ctype, name, values.len())?;
    for v in values {
        writeln!(out, "    {},", v)?;
    }
    writeln!(out, "}};")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_tables, TABLE_SIZE};

    const EXPECTED_HEADER: &str = "#pragma once
#include <stdint.h>

/* 8-bit input, 16-bit output */
extern const uint16_t srgb_decode_8_to_16_table[256];
static inline uint16_t
srgb_decode_8_to_16(uint8_t v)
{
    return srgb_decode_8_to_16_table[v];
}

/* 8-bit input, 8-bit output */
extern const uint8_t srgb_decode_8_to_8_table[256];

static inline uint8_t
srgb_decode_8_to_8(uint8_t v)
{
    return srgb_decode_8_to_8_table[v];
}
";

    fn expected_source(table16: &Table16, table8: &Table8) -> String {
        let mut s = String::from("#include \"srgb.h\"\n\n");
        s.push_str("const uint16_t srgb_decode_8_to_16_table[256] = {\n");
        for v in table16 {
            s.push_str(&format!("    {},\n", v));
        }
        s.push_str("};\n");
        s.push_str("const uint8_t srgb_decode_8_to_8_table[256] = {\n");
        for v in table8 {
            s.push_str(&format!("    {},\n", v));
        }
        s.push_str("};\n");
        s
    }

    #[test]
    fn test_header_exact() {
        assert_eq!(render_header().unwrap(), EXPECTED_HEADER);
    }

    #[test]
    fn test_source_fixed_contents() {
        // Arbitrary, non-gamma contents: formatting must not depend on the curve.
        let mut table16 = [0u16; TABLE_SIZE];
        let mut table8 = [0u8; TABLE_SIZE];
        for i in 0..TABLE_SIZE {
            table16[i] = (i * 257) as u16;
            table8[i] = (255 - i) as u8;
        }
        let source = render_source(&table16, &table8).unwrap();
        assert_eq!(source, expected_source(&table16, &table8));
        assert!(source.contains("\n    65535,\n};\n"));
        assert!(source.ends_with("    0,\n};\n"));
    }

    #[test]
    fn test_source_line_count() {
        let t = build_tables().unwrap();
        let source = render_source(&t.table16, &t.table8).unwrap();
        // include + blank + 2 * (open + 256 values + close)
        assert_eq!(source.lines().count(), 2 + 2 * (TABLE_SIZE + 2));
    }

    #[test]
    fn test_render_pairs_both() {
        let t = build_tables().unwrap();
        let out = render(&t.table16, &t.table8).unwrap();
        assert_eq!(out.header, EXPECTED_HEADER);
        assert_eq!(out.source, expected_source(&t.table16, &t.table8));
    }

    #[test]
    fn test_writers_match_render() {
        let t = build_tables().unwrap();
        let mut header = Vec::new();
        let mut source = Vec::new();
        write_header_to(&mut header).unwrap();
        write_source_to(&mut source, &t).unwrap();

        let out = render(&t.table16, &t.table8).unwrap();
        assert_eq!(header, out.header.into_bytes());
        assert_eq!(source, out.source.into_bytes());
    }
}
