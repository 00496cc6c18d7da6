use chumsky::error::Rich;
use itertools::Itertools;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum AocError {
    #[error("line {line}: {content:?} is not a depth reading ({reason})")]
    #[diagnostic(
        code(aoc::parse_error),
        help("every non-blank line must hold exactly one integer")
    )]
    Parse {
        line: usize,
        #[source_code]
        content: String,
        reason: String,
        #[label("{reason}")]
        span: SourceSpan,
    },
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

    pub fn line(&self) -> usize {
        match self {
            Self::Parse { line, .. } => *line,
        }
    }
}
