//! Line classification and replication.
//!
//! Every input line is stripped of surrounding whitespace and given a single
//! `\n`. Lines whose stripped text starts with the hex prefix are indented and
//! written `k` times, `k` drawn from the [`RepeatSource`] per line; all other
//! lines are written once.

use crate::config::rules::DuplicationRules;
use crate::core::{LineKind, RepeatSource, Result, TransformResult, TransformStats};
use crate::utils::validation::Validate;

pub struct Duplicator<R: RepeatSource> {
    rules: DuplicationRules,
    repeats: R,
}

/// One input line after classification: the text to emit and how many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub kind: LineKind,
    pub line: String,
    pub copies: usize,
}

impl<R: RepeatSource> Duplicator<R> {
    pub fn new(rules: DuplicationRules, repeats: R) -> Self {
        Self { rules, repeats }
    }

    /// Like [`Duplicator::new`], but rejects rules that could emit zero copies.
    pub fn try_new(rules: DuplicationRules, repeats: R) -> Result<Self> {
        rules.validate()?;
        Ok(Self::new(rules, repeats))
    }

    pub fn rules(&self) -> &DuplicationRules {
        &self.rules
    }

    pub fn classify(&self, line: &str) -> LineKind {
        if line.trim().starts_with(self.rules.prefix.as_str()) {
            LineKind::HexRecord
        } else {
            LineKind::PassThrough
        }
    }

    pub fn expand(&mut self, raw: &str) -> Expansion {
        let stripped = raw.trim();

        match self.classify(stripped) {
            LineKind::PassThrough => Expansion {
                kind: LineKind::PassThrough,
                line: format!("{}\n", stripped),
                copies: 1,
            },
            LineKind::HexRecord => {
                let copies = self
                    .repeats
                    .next_count(self.rules.min_copies, self.rules.max_copies);
                Expansion {
                    kind: LineKind::HexRecord,
                    line: format!("{}{}\n", self.rules.indent, stripped),
                    copies,
                }
            }
        }
    }

    /// Eager transform of a whole document.
    pub fn transform<I, S>(&mut self, lines: I) -> TransformResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut output = Vec::new();
        let mut stats = TransformStats::default();

        for raw in lines {
            let expansion = self.expand(raw.as_ref());
            stats.input_lines += 1;
            match expansion.kind {
                LineKind::PassThrough => stats.pass_through += 1,
                LineKind::HexRecord => stats.hex_records += 1,
            }
            output.extend(std::iter::repeat(expansion.line).take(expansion.copies));
        }

        stats.output_lines = output.len();
        tracing::debug!(
            input = stats.input_lines,
            hex = stats.hex_records,
            output = stats.output_lines,
            "Transformed lines"
        );

        TransformResult {
            lines: output,
            stats,
        }
    }

    /// Lazy, single-pass variant of [`Duplicator::transform`]. Order is preserved.
    pub fn replicate<I>(&mut self, lines: I) -> Replicate<'_, I::IntoIter, R>
    where
        I: IntoIterator<Item = String>,
    {
        Replicate {
            duplicator: self,
            lines: lines.into_iter(),
            pending: None,
            remaining: 0,
        }
    }
}

pub struct Replicate<'a, I, R: RepeatSource> {
    duplicator: &'a mut Duplicator<R>,
    lines: I,
    pending: Option<String>,
    remaining: usize,
}

impl<I, R> Iterator for Replicate<'_, I, R>
where
    I: Iterator<Item = String>,
    R: RepeatSource,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if self.remaining > 0 {
                self.remaining -= 1;
                return if self.remaining == 0 {
                    self.pending.take()
                } else {
                    self.pending.clone()
                };
            }

            let raw = self.lines.next()?;
            let expansion = self.duplicator.expand(&raw);
            self.pending = Some(expansion.line);
            self.remaining = expansion.copies;
        }
    }
}
