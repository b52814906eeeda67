//! Filesystem utilities.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_and_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("bin");

        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Second call is a no-op
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
