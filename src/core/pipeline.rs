use crate::config::rules::DuplicationRules;
use crate::core::duplicator::Duplicator;
use crate::core::{ConfigProvider, Pipeline, RepeatSource, Storage, TransformResult};
use crate::utils::error::Result;

/// Reads the input file, replicates hex records, writes the output file.
pub struct DuplicationPipeline<S: Storage, C: ConfigProvider, R: RepeatSource> {
    storage: S,
    config: C,
    duplicator: Duplicator<R>,
}

impl<S: Storage, C: ConfigProvider, R: RepeatSource> DuplicationPipeline<S, C, R> {
    pub fn new(storage: S, config: C, repeats: R) -> Self {
        Self {
            storage,
            config,
            duplicator: Duplicator::new(DuplicationRules::default(), repeats),
        }
    }

    pub fn with_rules(storage: S, config: C, rules: DuplicationRules, repeats: R) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            duplicator: Duplicator::try_new(rules, repeats)?,
        })
    }
}

impl<S: Storage, C: ConfigProvider, R: RepeatSource> Pipeline for DuplicationPipeline<S, C, R> {
    fn extract(&self) -> Result<Vec<String>> {
        let path = self.config.input_path();
        tracing::debug!("Reading {}", path.display());
        self.storage.read_lines(path)
    }

    fn transform(&mut self, lines: Vec<String>) -> Result<TransformResult> {
        Ok(self.duplicator.transform(lines))
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let path = self.config.output_path();
        tracing::debug!("Writing {} lines to {}", result.lines.len(), path.display());
        self.storage.write_lines(path, &result.lines)?;
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRepeats;
    use crate::utils::error::DupError;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<PathBuf, Vec<String>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, lines: &[&str]) -> Self {
            let storage = Self::default();
            storage.files.lock().unwrap().insert(
                PathBuf::from(path),
                lines.iter().map(|l| l.to_string()).collect(),
            );
            storage
        }

        fn get_file(&self, path: &str) -> Option<Vec<String>> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                DupError::io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
            })
        }

        fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_path_buf(), lines.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        input: PathBuf,
        output: PathBuf,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                input: PathBuf::from("in.txt"),
                output: PathBuf::from("out.txt"),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &Path {
            &self.input
        }

        fn output_path(&self) -> &Path {
            &self.output
        }
    }

    #[test]
    fn test_extract_reads_input() {
        let storage = MockStorage::with_file("in.txt", &["a", "0x1"]);
        let pipeline = DuplicationPipeline::new(storage, MockConfig::new(), ScriptedRepeats::default());
        assert_eq!(pipeline.extract().unwrap(), vec!["a", "0x1"]);
    }

    #[test]
    fn test_extract_missing_input() {
        let pipeline = DuplicationPipeline::new(
            MockStorage::default(),
            MockConfig::new(),
            ScriptedRepeats::default(),
        );
        assert!(matches!(pipeline.extract(), Err(DupError::IoError { .. })));
    }

    #[test]
    fn test_full_pass_writes_output() {
        let storage = MockStorage::with_file("in.txt", &["hello", "0xAB", "world"]);
        let mut pipeline =
            DuplicationPipeline::new(storage.clone(), MockConfig::new(), ScriptedRepeats::new([2]));

        let lines = pipeline.extract().unwrap();
        let result = pipeline.transform(lines).unwrap();
        assert_eq!(result.stats.output_lines, 4);

        let output_path = pipeline.load(result).unwrap();
        assert_eq!(output_path, "out.txt");
        assert_eq!(
            storage.get_file("out.txt").unwrap(),
            vec!["hello\n", "\t0xAB\n", "\t0xAB\n", "world\n"]
        );
    }
}
