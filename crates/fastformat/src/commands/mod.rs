//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use std::io::Read;

pub mod diff;
pub mod doctor;
pub mod format;
pub mod info;
pub mod presets;
pub mod rules;

/// Read input from a file, or from stdin when the path is `-`, validating
/// its size against the configured limit.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        if let Some(max) = max_bytes
            && content.len() > max
        {
            anyhow::bail!(
                "input too large: stdin is {} bytes (limit: {max} bytes)",
                content.len()
            );
        }
        return Ok(content);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}
