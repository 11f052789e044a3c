//! File reading with lossy UTF-8 decoding
//!
//! Invalid byte sequences are replaced with U+FFFD instead of failing the read.
//! Whether that happened is reported back so callers can log it.

use std::fs;
use std::io::Read;
use std::path::Path;

/// Result of reading a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReadResult {
    /// Decoded content
    pub content: String,

    /// Number of raw bytes read
    pub bytes_read: usize,

    /// Whether lossy conversion replaced any bytes
    pub lossy_conversion: bool,
}

/// Read a whole file, decoding it as UTF-8 with replacement
pub fn read_file_lossy(path: &Path) -> std::io::Result<FileReadResult> {
    let bytes = read_file_bytes(path)?;
    Ok(decode_lossy(bytes))
}

/// Decode bytes, falling back to lossy conversion on invalid UTF-8
pub fn decode_lossy(bytes: Vec<u8>) -> FileReadResult {
    let bytes_read = bytes.len();
    match String::from_utf8(bytes) {
        Ok(content) => FileReadResult {
            content,
            bytes_read,
            lossy_conversion: false,
        },
        Err(e) => FileReadResult {
            content: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            bytes_read,
            lossy_conversion: true,
        },
    }
}

fn read_file_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = fs::File::open(path)?;
    let capacity = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

    let mut reader = std::io::BufReader::new(file);
    let mut buffer = Vec::with_capacity(capacity);
    reader.read_to_end(&mut buffer)?;

    Ok(buffer)
}
