//! Audit reporting
//!
//! Validates the sample layout, runs the strip/tokenize/count pipeline,
//! prints the listing and persists the output record.

use std::fs;
use std::io::{BufWriter, Write};

use crate::audit::counter::analyze;
use crate::core::file_reader::read_file_lossy;
use crate::core::model::{AuditError, AuditSummary, SortedReport};
use crate::core::paths::AuditPaths;
use crate::core::render::{render_footer, render_header, render_listing, write_json};

/// Run the full audit, writing the human-readable report to `out`
///
/// The output record is only created once the input has been read and
/// aggregated, so a missing directory or file leaves no file behind.
pub fn run_audit<W: Write>(paths: &AuditPaths, out: &mut W) -> Result<AuditSummary, AuditError> {
    tracing::debug!(root = %paths.root.display(), "resolved audit root");

    if !paths.samples_dir.exists() {
        return Err(AuditError::MissingDirectory {
            path: paths.samples_dir.clone(),
        });
    }

    if !paths.input.exists() {
        return Err(AuditError::MissingFile {
            path: paths.input.clone(),
        });
    }

    write_out(out, &render_header(&paths.input_name()))?;

    let read = read_file_lossy(&paths.input).map_err(|e| AuditError::io(&paths.input, e))?;
    tracing::debug!(
        path = %paths.input.display(),
        bytes = read.bytes_read,
        lossy = read.lossy_conversion,
        "read input"
    );
    if read.lossy_conversion {
        tracing::warn!(
            path = %paths.input.display(),
            "invalid UTF-8 replaced during decoding"
        );
    }

    let report = analyze(&read.content);
    tracing::debug!(
        unique = report.len(),
        total = report.total(),
        "aggregated tokens"
    );

    write_out(out, &render_listing(&report))?;

    persist_report(&report, paths)?;
    tracing::debug!(path = %paths.output.display(), "wrote output record");

    write_out(out, &render_footer(&paths.output))?;

    Ok(AuditSummary {
        unique: report.len(),
        total: report.total(),
        output: paths.output.clone(),
    })
}

/// Write the sorted report as indented JSON, replacing any previous record
fn persist_report(report: &SortedReport, paths: &AuditPaths) -> Result<(), AuditError> {
    let file = fs::File::create(&paths.output).map_err(|e| AuditError::io(&paths.output, e))?;
    let mut writer = BufWriter::new(file);
    write_json(report, &mut writer).map_err(|e| AuditError::io(&paths.output, e.into()))?;
    writer
        .flush()
        .map_err(|e| AuditError::io(&paths.output, e))
}

fn write_out<W: Write>(out: &mut W, text: &str) -> Result<(), AuditError> {
    out.write_all(text.as_bytes())
        .map_err(|e| AuditError::io("<stdout>", e))
}
