use crate::core::Storage;
use crate::utils::error::{DupError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Filesystem-backed storage. Paths are used as given.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path).map_err(|e| DupError::io(path, e))?;
        let reader = BufReader::new(file);

        reader
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| DupError::io(path, e))
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()> {
        let file = File::create(path).map_err(|e| DupError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        for line in lines {
            writer
                .write_all(line.as_bytes())
                .map_err(|e| DupError::io(path, e))?;
        }

        // Flush here so write errors are reported instead of lost in drop.
        writer.flush().map_err(|e| DupError::io(path, e))?;
        Ok(())
    }
}
