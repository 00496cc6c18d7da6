use chumsky::error::Rich;
use itertools::Itertools;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum AocError {
    #[error("line {line}: {content:?} is not a planned course step ({reason})")]
    #[diagnostic(
        code(aoc::parse_error),
        help("every non-blank line must look like `<direction> <amount>`")
    )]
    Parse {
        line: usize,
        #[source_code]
        content: String,
        reason: String,
        #[label("{reason}")]
        span: SourceSpan,
    },

    #[error("line {line}: unrecognized instruction {token:?}")]
    #[diagnostic(
        code(aoc::unrecognized_instruction),
        help("the submarine only understands `forward`, `down` and `up`")
    )]
    UnrecognizedInstruction {
        token: String,
        line: usize,
        #[source_code]
        content: String,
        #[label("unknown direction")]
        span: SourceSpan,
    },

    #[error("the submarine left the charted range {context}")]
    #[diagnostic(code(aoc::overflow))]
    Overflow { context: String },
}

impl AocError {
    /// Flattens the chumsky errors for a single line into one diagnostic,
    /// labelled at the first failure.
    pub(crate) fn from_rich(line: usize, content: &str, errors: Vec<Rich<'_, char>>) -> Self {
        let span = errors
            .first()
            .map(|error| (error.span().start, error.span().end - error.span().start))
            .unwrap_or((0, content.len()));
        let reason = errors.iter().map(ToString::to_string).join("; ");

        Self::Parse {
            line,
            content: content.to_string(),
            reason,
            span: span.into(),
        }
    }

    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        Self::Overflow {
            context: context.into(),
        }
    }

    /// Line of the input the error points at, if it comes from parsing.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } | Self::UnrecognizedInstruction { line, .. } => Some(*line),
            Self::Overflow { .. } => None,
        }
    }
}
