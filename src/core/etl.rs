use crate::core::{Pipeline, TransformStats};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: String,
    pub stats: TransformStats,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load once. The first failing phase aborts the run.
    pub fn run(&mut self) -> Result<RunReport> {
        tracing::info!("Starting duplication run");
        self.monitor.log_stats("Start");

        let lines = self.pipeline.extract()?;
        tracing::info!("Read {} lines", lines.len());
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(lines)?;
        let stats = result.stats.clone();
        tracing::info!(
            "Replicated {} hex records into {} output lines",
            stats.hex_records,
            stats.output_lines
        );
        self.monitor.log_stats("Transform");

        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunReport { output_path, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransformResult;
    use crate::utils::error::DupError;

    #[derive(Default)]
    struct RecordingPipeline {
        phases: Vec<&'static str>,
        fail_extract: bool,
    }

    impl Pipeline for &mut RecordingPipeline {
        fn extract(&self) -> Result<Vec<String>> {
            if self.fail_extract {
                return Err(DupError::io(
                    "in.txt",
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                ));
            }
            Ok(vec!["0x1".to_string()])
        }

        fn transform(&mut self, lines: Vec<String>) -> Result<TransformResult> {
            self.phases.push("transform");
            Ok(TransformResult {
                stats: TransformStats {
                    input_lines: lines.len(),
                    hex_records: 1,
                    pass_through: 0,
                    output_lines: 2,
                },
                lines: vec!["\t0x1\n".to_string(); 2],
            })
        }

        fn load(&self, result: TransformResult) -> Result<String> {
            assert_eq!(result.lines.len(), 2);
            Ok("out.txt".to_string())
        }
    }

    #[test]
    fn test_run_returns_report() {
        let mut recording = RecordingPipeline::default();
        let mut engine = EtlEngine::new(&mut recording);

        let report = engine.run().unwrap();
        assert_eq!(report.output_path, "out.txt");
        assert_eq!(report.stats.output_lines, 2);
        drop(engine);
        assert_eq!(recording.phases, vec!["transform"]);
    }

    #[test]
    fn test_extract_failure_stops_run() {
        let mut recording = RecordingPipeline {
            fail_extract: true,
            ..Default::default()
        };
        let mut engine = EtlEngine::new_with_monitoring(&mut recording, true);

        assert!(engine.run().is_err());
        drop(engine);
        assert!(recording.phases.is_empty());
    }
}
