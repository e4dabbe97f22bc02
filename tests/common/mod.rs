//! Common test utilities

use std::path::Path;

/// PNG file signature
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// True if `s` is exactly 6 hex digits
pub fn is_hex6(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// True if the file at `path` starts with the PNG signature
pub fn is_png(path: &Path) -> bool {
    std::fs::read(path)
        .map(|bytes| bytes.starts_with(&PNG_SIGNATURE))
        .unwrap_or(false)
}

/// Read the pixel size from a PNG's IHDR chunk
pub fn png_size(path: &Path) -> Option<(u32, u32)> {
    let bytes = std::fs::read(path).ok()?;
    if !bytes.starts_with(&PNG_SIGNATURE) || bytes.len() < 24 || &bytes[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(bytes[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(bytes[20..24].try_into().ok()?);
    Some((width, height))
}

/// Hex tokens on a line of CLI output
pub fn hex_tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().filter(|t| is_hex6(t)).collect()
}
