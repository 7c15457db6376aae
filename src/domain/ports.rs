use crate::domain::model::TransformResult;
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage: Send + Sync {
    /// Reads the whole file and splits it into lines without their terminators.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
    /// Creates or truncates `path` and writes `lines` verbatim, in order.
    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
}

/// Source of replication counts. Implementations must return a value in `[min, max]`.
pub trait RepeatSource {
    fn next_count(&mut self, min: usize, max: usize) -> usize;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<String>>;
    fn transform(&mut self, lines: Vec<String>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
