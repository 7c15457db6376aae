use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};

pub const DEFAULT_HEX_PREFIX: &str = "0x";
pub const DEFAULT_INDENT: &str = "\t";
pub const DEFAULT_MIN_COPIES: usize = 1;
pub const DEFAULT_MAX_COPIES: usize = 5;

/// Upper bound on `max_copies`, keeps a typo from producing a huge fixture.
pub const MAX_COPIES_LIMIT: usize = 1024;

/// What counts as a hex record and how it is replicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicationRules {
    pub prefix: String,
    pub indent: String,
    pub min_copies: usize,
    pub max_copies: usize,
}

impl Default for DuplicationRules {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_HEX_PREFIX.to_string(),
            indent: DEFAULT_INDENT.to_string(),
            min_copies: DEFAULT_MIN_COPIES,
            max_copies: DEFAULT_MAX_COPIES,
        }
    }
}

impl Validate for DuplicationRules {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("prefix", &self.prefix)?;
        validate_positive_number("min_copies", self.min_copies, 1)?;
        validate_range("max_copies", self.max_copies, self.min_copies, MAX_COPIES_LIMIT)?;
        Ok(())
    }
}
