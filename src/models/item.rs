//! Line items produced by the classifier.

use std::fmt;

use serde::{Serialize, Serializer};

/// Placeholder shown wherever a code or quantity could not be determined.
pub const UNKNOWN_MARKER: &str = "?";

/// A high-confidence extraction: quantity and code co-located by an explicit
/// `x`/`×` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundItem {
    pub code: String,
    pub quantity: u64,
}

impl FoundItem {
    pub fn new(code: impl Into<String>, quantity: u64) -> Self {
        Self {
            code: code.into(),
            quantity,
        }
    }
}

/// A low-confidence candidate. At least one of `code`/`quantity` may be
/// unknown; `reason` always explains which weaker pattern produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PossibleItem {
    pub code: Option<String>,
    pub quantity: Option<u64>,
    pub reason: Reason,
}

impl PossibleItem {
    /// Code for display, with the unknown marker in place of `None`.
    pub fn code_label(&self) -> &str {
        self.code.as_deref().unwrap_or(UNKNOWN_MARKER)
    }

    /// Quantity for display, with the unknown marker in place of `None`.
    pub fn quantity_label(&self) -> String {
        match self.quantity {
            Some(q) => q.to_string(),
            None => UNKNOWN_MARKER.to_string(),
        }
    }
}

/// Why a candidate landed in the low-confidence bucket.
///
/// The lookahead variant records the token that followed a bare quantity
/// marker (empty when the marker ended the page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    MarkerWithoutCode { next_token: String },
    QuantitySpaceCode,
    CodeWithoutQuantity,
    LongNumber,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::MarkerWithoutCode { next_token } => write!(
                f,
                "quantity marker with no clear following code (next token: {})",
                next_token
            ),
            Reason::QuantitySpaceCode => write!(f, "pattern without 'x' marker (quantity space code)"),
            Reason::CodeWithoutQuantity => write!(f, "code without quantity"),
            Reason::LongNumber => write!(f, "long number (possible code)"),
        }
    }
}

impl Serialize for Reason {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
