use thiserror::Error;

/// errors raised while aligning result series. all of them are fatal: a
/// misaligned series would silently pair timings of different problems.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlignError {
    #[error("length mismatch in {what}: expected {expected} entries, got {actual}")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("permutation index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("permutation repeats index {index}")]
    DuplicateIndex { index: usize },

    #[error("malformed line {line} ({content:?}): {reason}")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },
}

impl AlignError {
    pub fn length_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        AlignError::LengthMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    pub fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        AlignError::MalformedLine {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

/// make sure two index-aligned sequences have the same length
pub fn ensure_same_len(what: &str, expected: usize, actual: usize) -> Result<(), AlignError> {
    if expected != actual {
        return Err(AlignError::length_mismatch(what, expected, actual));
    }
    Ok(())
}
