//! Renderer module
//!
//! Renders a `SortedReport` as the human-readable listing and writes the
//! indented JSON output record.
//!
//! The record is pure ASCII: characters outside `' '..='~'` are written as
//! lowercase `\uXXXX` escapes, with surrogate pairs above the BMP.

use crate::core::model::SortedReport;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io::{self, Write};
use std::path::Path;

/// Header line announcing the file being processed
pub fn render_header(file_name: &str) -> String {
    format!("Extracting tokens from {}...\n\n", file_name)
}

/// Unique-count line followed by one line per entry
pub fn render_listing(report: &SortedReport) -> String {
    let mut output = format!("Found {} unique tokens\n\n", report.len());
    for entry in report.iter() {
        output.push_str(&format!("{:>4}x  {}\n", entry.count, entry.token));
    }
    output
}

/// Confirmation line naming the written output record
pub fn render_footer(output: &Path) -> String {
    format!("\nFull token list written to {}\n", output.display())
}

/// Write the output record as 2-space indented, ASCII-only JSON
pub fn write_json<W: Write>(report: &SortedReport, writer: W) -> serde_json::Result<()> {
    let mut serializer = Serializer::with_formatter(writer, AsciiPrettyFormatter::new());
    report.serialize(&mut serializer)
}

/// Pretty formatter that escapes every non-printable-ASCII character
struct AsciiPrettyFormatter {
    inner: PrettyFormatter<'static>,
}

impl AsciiPrettyFormatter {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for AsciiPrettyFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    // Quotes, backslashes and control characters never reach this point
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
