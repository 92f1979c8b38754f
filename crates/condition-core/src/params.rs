//! Parameter parsing for inventory checks.
//!
//! Script rules supply an ordered token list:
//!
//! ```text
//! [actor_ref, item_id, operator?, quantity?]
//! ```
//!
//! The first two positions are mandatory; the optional tail is replaced by
//! explicit named defaults on [`CheckRequest`] rather than by out-of-range
//! index fallback.

use crate::error::ConditionError;
use crate::operator::CompareOp;

/// A fully validated inventory check, ready for evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckRequest {
    /// Reference to the inventory owner: `"player"` or an NPC slug.
    pub actor_ref: String,
    /// Item identifier to look up, e.g. `"item_cherry"`.
    pub item_id: String,
    /// Comparison to apply; defaults to [`CompareOp::GreaterThan`].
    pub op: CompareOp,
    /// Threshold quantity; defaults to [`CheckRequest::DEFAULT_QUANTITY`].
    pub quantity: u32,
}

impl CheckRequest {
    /// Threshold used when the quantity token is absent.
    ///
    /// Combined with the default operator this makes a bare
    /// `[actor, item]` rule mean "holds at least one of the item".
    pub const DEFAULT_QUANTITY: u32 = 0;

    /// Creates a request with explicit defaults for operator and quantity.
    pub fn new(actor_ref: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            actor_ref: actor_ref.into(),
            item_id: item_id.into(),
            op: CompareOp::default(),
            quantity: Self::DEFAULT_QUANTITY,
        }
    }

    /// Sets the comparison operator (builder pattern).
    #[must_use]
    pub fn with_op(mut self, op: CompareOp) -> Self {
        self.op = op;
        self
    }

    /// Sets the threshold quantity (builder pattern).
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Parses the raw positional tokens of a script rule.
    ///
    /// - Positions 0 and 1 (`actor_ref`, `item_id`) are mandatory and must be
    ///   non-empty, else [`ConditionError::MissingParameter`].
    /// - Position 2, if present and non-empty, must be a recognized operator
    ///   token, else [`ConditionError::UnknownOperator`]. An empty token is
    ///   treated as absent.
    /// - Position 3, if present, must parse as a non-negative integer, else
    ///   [`ConditionError::InvalidQuantity`]. Zero is always valid.
    /// - Tokens beyond position 3 are ignored.
    pub fn parse(tokens: &[&str]) -> Result<Self, ConditionError> {
        let actor_ref = match tokens.first() {
            Some(token) if !token.is_empty() => (*token).to_string(),
            _ => return Err(ConditionError::MissingParameter("actor_ref")),
        };
        let item_id = match tokens.get(1) {
            Some(token) if !token.is_empty() => (*token).to_string(),
            _ => return Err(ConditionError::MissingParameter("item_id")),
        };

        let op = match tokens.get(2) {
            None => CompareOp::default(),
            Some(token) if token.is_empty() => CompareOp::default(),
            Some(token) => token
                .parse()
                .map_err(|_| ConditionError::UnknownOperator((*token).to_string()))?,
        };

        let quantity = match tokens.get(3) {
            None => Self::DEFAULT_QUANTITY,
            Some(token) => parse_quantity(token)?,
        };

        Ok(Self {
            actor_ref,
            item_id,
            op,
            quantity,
        })
    }
}

/// Parses a threshold token as a non-negative integer.
///
/// Negative values are reported as [`ConditionError::InvalidQuantity`] rather
/// than as an overflow artifact, so the token is parsed through `i64` first.
fn parse_quantity(token: &str) -> Result<u32, ConditionError> {
    let value: i64 = token
        .parse()
        .map_err(|_| ConditionError::InvalidQuantity(token.to_string()))?;
    u32::try_from(value).map_err(|_| ConditionError::InvalidQuantity(token.to_string()))
}
