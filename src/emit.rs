use std::io::{self, Write};

use itertools::Itertools;

use crate::types::OutputStyle;

/// Writes `<type> <name>[<len>] = `, the braces and the wrapped hex body.
pub fn write_array<W: Write>(
    out: &mut W,
    name: &str,
    pixels: &[u8],
    style: &OutputStyle,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}[{}] = ",
        style.element_type.declaration(),
        name,
        pixels.len()
    )?;
    writeln!(out, "{{")?;

    let per_line = style.per_line.max(1);
    for (line, values) in pixels.chunks(per_line).enumerate() {
        let body = values
            .iter()
            .map(|v| format!("0x{v:02x},"))
            .join(style.wrap.separator());
        writeln!(out, "{}{}", style.wrap.indent(line), body)?;
    }

    writeln!(out, "}};")
}

pub fn render(name: &str, pixels: &[u8], style: &OutputStyle) -> String {
    let mut buf = Vec::with_capacity(pixels.len() * 6 + 64);
    // writing into a Vec can't fail
    let _ = write_array(&mut buf, name, pixels, style);
    String::from_utf8_lossy(&buf).into_owned()
}
