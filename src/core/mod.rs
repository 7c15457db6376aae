pub mod duplicator;
pub mod etl;
pub mod pipeline;
pub mod rng;

pub use crate::domain::model::{LineKind, TransformResult, TransformStats};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RepeatSource, Storage};
pub use crate::utils::error::Result;
