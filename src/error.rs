// src/error.rs
//! Error type shared by the painter, the views and the C boundary.

use thiserror::Error;

use crate::render::gradient::MIN_STOPS;

pub type Result<T> = std::result::Result<T, PaintError>;

/// Precondition failures. Every operation checks its inputs and returns one of
/// these before touching any output buffer.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("gradient needs at least {min} color stops, got {got}", min = MIN_STOPS)]
    TooFewStops { got: usize },

    #[error("{what} buffer holds {got} entries, expected {expected}")]
    BufferSize {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("image dimensions {width}x{height} overflow")]
    DimensionsOverflow { width: usize, height: usize },

    #[error("null {0} pointer")]
    NullPointer(&'static str),

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl PaintError {
    /// Status code reported across the C boundary. Always negative.
    pub fn code(&self) -> i32 {
        match self {
            PaintError::TooFewStops { .. } => -1,
            PaintError::BufferSize { .. } => -2,
            PaintError::DimensionsOverflow { .. } => -3,
            PaintError::NullPointer(_) => -4,
            PaintError::Settings(_) => -5,
        }
    }
}

/// Fails with [`PaintError::BufferSize`] unless `got == expected`.
pub fn expect_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if got == expected {
        Ok(())
    } else {
        Err(PaintError::BufferSize {
            what,
            expected,
            got,
        })
    }
}

/// `width * height`, or [`PaintError::DimensionsOverflow`].
pub fn area(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or(PaintError::DimensionsOverflow { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_negative_and_distinct() {
        let errors = [
            PaintError::TooFewStops { got: 1 },
            PaintError::BufferSize {
                what: "image",
                expected: 4,
                got: 3,
            },
            PaintError::DimensionsOverflow {
                width: usize::MAX,
                height: 2,
            },
            PaintError::NullPointer("image"),
        ];
        let mut codes: Vec<i32> = errors.iter().map(PaintError::code).collect();
        assert!(codes.iter().all(|&c| c < 0));
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn area_reports_overflow() {
        assert_eq!(area(3, 4).unwrap(), 12);
        assert!(matches!(
            area(usize::MAX, 2),
            Err(PaintError::DimensionsOverflow { .. })
        ));
    }

    #[test]
    fn messages_name_the_buffer() {
        let err = expect_len("foreground gradient", 8, 7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "foreground gradient buffer holds 7 entries, expected 8"
        );
    }
}
