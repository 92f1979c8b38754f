//! Comparison operators for inventory checks.
//!
//! The operator set is statically closed: script tokens map onto a tagged
//! enum, and a single exhaustive comparator applies the semantics. There is
//! no runtime-extensible operator table.

/// Numeric comparison applied between an observed quantity and a threshold.
///
/// Script token forms are `greater_than`, `less_than`, and `equals`
/// (case-insensitive). An omitted token defaults to [`CompareOp::GreaterThan`],
/// so an unparameterized check reads as "holds the item at all"
/// (`quantity > 0`).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CompareOp {
    /// Observed quantity strictly exceeds the threshold (default).
    #[default]
    GreaterThan,
    /// Observed quantity is strictly below the threshold.
    LessThan,
    /// Observed quantity equals the threshold exactly.
    Equals,
}

impl CompareOp {
    /// Applies this comparison to an observed quantity and a threshold.
    pub const fn compare(self, observed: u32, threshold: u32) -> bool {
        match self {
            Self::GreaterThan => observed > threshold,
            Self::LessThan => observed < threshold,
            Self::Equals => observed == threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parses_script_tokens() {
        assert_eq!(
            CompareOp::from_str("greater_than").unwrap(),
            CompareOp::GreaterThan
        );
        assert_eq!(
            CompareOp::from_str("less_than").unwrap(),
            CompareOp::LessThan
        );
        assert_eq!(CompareOp::from_str("equals").unwrap(), CompareOp::Equals);
    }

    #[test]
    fn token_parsing_is_case_insensitive() {
        assert_eq!(
            CompareOp::from_str("Greater_Than").unwrap(),
            CompareOp::GreaterThan
        );
        assert_eq!(CompareOp::from_str("EQUALS").unwrap(), CompareOp::Equals);
    }

    #[test]
    fn rejects_unrecognized_tokens() {
        assert!(CompareOp::from_str("approximately").is_err());
        assert!(CompareOp::from_str(">").is_err());
        assert!(CompareOp::from_str("").is_err());
    }

    #[test]
    fn default_is_greater_than() {
        assert_eq!(CompareOp::default(), CompareOp::GreaterThan);
    }

    #[test]
    fn display_round_trips_through_token_form() {
        for op in [CompareOp::GreaterThan, CompareOp::LessThan, CompareOp::Equals] {
            assert_eq!(CompareOp::from_str(&op.to_string()).unwrap(), op);
        }
    }

    #[test]
    fn comparison_truth_table() {
        for observed in 0..5u32 {
            for threshold in 0..5u32 {
                assert_eq!(
                    CompareOp::GreaterThan.compare(observed, threshold),
                    observed > threshold
                );
                assert_eq!(
                    CompareOp::LessThan.compare(observed, threshold),
                    observed < threshold
                );
                assert_eq!(
                    CompareOp::Equals.compare(observed, threshold),
                    observed == threshold
                );
            }
        }
    }
}
