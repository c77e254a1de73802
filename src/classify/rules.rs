//! Pattern rules for token classification.
//!
//! Five grammars tried in a fixed priority order against each token. The
//! first two can also inspect the next token. Hyphens in the character
//! classes are placed last so they stay literals rather than ranges.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{FoundItem, PossibleItem, Reason};

/// Quantity, marker, and code in a single token: `3xABC-123`, `10× B:77`.
static COMBINED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)[x×]\s*([A-Za-z0-9][A-Za-z0-9:.-]*)$").unwrap());

/// A bare quantity marker: `5x`, `12×`.
static QUANTITY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)[x×]\s*$").unwrap());

/// The code grammar used for lookahead: alphanumeric start, then
/// alphanumerics, colons, dots, or hyphens.
static CODE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9:.-]*$").unwrap());

/// Quantity and code separated by whitespace, no marker: `12 CODE456`.
static QUANTITY_SPACE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+([A-Za-z0-9][A-Za-z0-9:.-]+)$").unwrap());

/// A code-shaped token of length >= 3.
static BARE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9:.-]{2,}$").unwrap());

/// Digits, colons, or hyphens anywhere in the token. Plain words fail this,
/// which keeps prose out of the candidate list.
static CODE_SIGNAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9:-]").unwrap());

/// Five or more consecutive digits and nothing else.
static LONG_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5,}$").unwrap());

/// Outcome of applying one rule to a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    NoMatch,
    Found {
        item: FoundItem,
        /// Tokens the scan cursor should skip over.
        consumed: usize,
    },
    Possible {
        item: PossibleItem,
        consumed: usize,
        /// When true, later rules still run on this token but may not emit a
        /// second candidate for it.
        continue_scanning: bool,
    },
}

/// The classification rules, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    CombinedQuantityCode,
    QuantityMarker,
    QuantitySpaceCode,
    CodeOnly,
    LongNumber,
}

impl Rule {
    /// Evaluation order for the scan loop.
    pub const PRIORITY: [Rule; 5] = [
        Rule::CombinedQuantityCode,
        Rule::QuantityMarker,
        Rule::QuantitySpaceCode,
        Rule::CodeOnly,
        Rule::LongNumber,
    ];

    /// Apply this rule to `token`, with the following token available for
    /// lookahead where the rule wants it.
    pub fn try_match(self, token: &str, lookahead: Option<&str>) -> MatchOutcome {
        match self {
            Rule::CombinedQuantityCode => combined_quantity_code(token),
            Rule::QuantityMarker => quantity_marker(token, lookahead),
            Rule::QuantitySpaceCode => quantity_space_code(token),
            Rule::CodeOnly => code_only(token),
            Rule::LongNumber => long_number(token),
        }
    }
}

/// Parse a captured digit group. Groups that overflow u64 make the rule
/// report no match so the token falls through to the code-shaped rules.
fn parse_quantity(digits: &str) -> Option<u64> {
    digits.parse().ok()
}

fn combined_quantity_code(token: &str) -> MatchOutcome {
    let Some(caps) = COMBINED.captures(token) else {
        return MatchOutcome::NoMatch;
    };
    let Some(quantity) = parse_quantity(&caps[1]) else {
        return MatchOutcome::NoMatch;
    };
    MatchOutcome::Found {
        item: FoundItem::new(&caps[2], quantity),
        consumed: 1,
    }
}

fn quantity_marker(token: &str, lookahead: Option<&str>) -> MatchOutcome {
    let Some(caps) = QUANTITY_MARKER.captures(token) else {
        return MatchOutcome::NoMatch;
    };
    let Some(quantity) = parse_quantity(&caps[1]) else {
        return MatchOutcome::NoMatch;
    };

    match lookahead {
        Some(next) if CODE_TOKEN.is_match(next) => MatchOutcome::Found {
            item: FoundItem::new(next, quantity),
            consumed: 2,
        },
        _ => MatchOutcome::Possible {
            item: PossibleItem {
                code: None,
                quantity: Some(quantity),
                reason: Reason::MarkerWithoutCode {
                    next_token: lookahead.unwrap_or_default().to_string(),
                },
            },
            consumed: 1,
            continue_scanning: false,
        },
    }
}

fn quantity_space_code(token: &str) -> MatchOutcome {
    let Some(caps) = QUANTITY_SPACE_CODE.captures(token) else {
        return MatchOutcome::NoMatch;
    };
    let Some(quantity) = parse_quantity(&caps[1]) else {
        return MatchOutcome::NoMatch;
    };
    MatchOutcome::Possible {
        item: PossibleItem {
            code: Some(caps[2].to_string()),
            quantity: Some(quantity),
            reason: Reason::QuantitySpaceCode,
        },
        consumed: 1,
        continue_scanning: false,
    }
}

fn code_only(token: &str) -> MatchOutcome {
    if !BARE_CODE.is_match(token) || !CODE_SIGNAL.is_match(token) {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::Possible {
        item: PossibleItem {
            code: Some(token.to_string()),
            quantity: None,
            reason: Reason::CodeWithoutQuantity,
        },
        consumed: 1,
        continue_scanning: true,
    }
}

fn long_number(token: &str) -> MatchOutcome {
    if !LONG_NUMBER.is_match(token) {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::Possible {
        item: PossibleItem {
            code: Some(token.to_string()),
            quantity: None,
            reason: Reason::LongNumber,
        },
        consumed: 1,
        continue_scanning: false,
    }
}
