use thiserror::Error;

use crate::score::Field;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("{field} cannot be negative: {value}")]
    NegativeValue { field: Field, value: f64 },

    #[error("{field} must be a finite number: {value}")]
    NonFiniteValue { field: Field, value: f64 },

    #[error("Score cannot be greater than maximum possible score: {raw_score} > {max_score}")]
    ScoreExceedsMaximum { raw_score: f64, max_score: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The input that caused the error, if a single one is to blame
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::NegativeValue { field, .. } | Self::NonFiniteValue { field, .. } => Some(*field),
            Self::ScoreExceedsMaximum { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_value_message() {
        let err = Error::NegativeValue {
            field: Field::PerfectCount,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Perfect count cannot be negative: -1");
        assert_eq!(err.field(), Some(Field::PerfectCount));
    }

    #[test]
    fn test_non_finite_value_message() {
        let err = Error::NonFiniteValue {
            field: Field::ChartLevel,
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "Chart level must be a finite number: NaN");
    }

    #[test]
    fn test_score_exceeds_maximum_message() {
        let err = Error::ScoreExceedsMaximum {
            raw_score: 303.0,
            max_score: 300.0,
        };
        assert_eq!(
            err.to_string(),
            "Score cannot be greater than maximum possible score: 303 > 300"
        );
        assert_eq!(err.field(), None);
    }
}
