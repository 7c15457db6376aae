/// How a single input line is treated by the duplicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Copied to the output once.
    PassThrough,
    /// Starts with the hex prefix; indented and replicated.
    HexRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub input_lines: usize,
    pub hex_records: usize,
    pub pass_through: usize,
    pub output_lines: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    /// Output lines, each terminated by a single `\n`.
    pub lines: Vec<String>,
    pub stats: TransformStats,
}
