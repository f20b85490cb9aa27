//! Name-list loading: one base word or "First Last" pair per line.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NameListError {
    #[error("failed to read name list: {0}")]
    Io(#[from] std::io::Error),
    #[error("name list '{0}' contains no usable entries")]
    Empty(String),
}

/// Read the name list, skipping blank lines and `#` comments.
pub fn load_names(path: &Path) -> Result<Vec<String>, NameListError> {
    let contents = fs::read_to_string(path)?;
    let names: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        return Err(NameListError::Empty(path.display().to_string()));
    }
    Ok(names)
}
