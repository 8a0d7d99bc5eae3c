use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use onto2bsdd_core::{DocumentHeader, OntoError};

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(super) fn read_header(path: &Path) -> Result<DocumentHeader> {
    let raw = fs::read_to_string(path)
        .map_err(OntoError::from)
        .with_context(|| format!("failed to read header {}", path.display()))?;
    DocumentHeader::from_json_str(&raw)
        .with_context(|| format!("invalid header {}", path.display()))
}

pub(super) fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    let Some(path) = path else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(OntoError::from)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, content)
        .map_err(OntoError::from)
        .with_context(|| format!("failed to write {}", path.display()))
}
