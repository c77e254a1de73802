//! The per-page token scan.
//!
//! Tokens are visited left to right with a cursor. Each position runs the
//! rules in priority order; the first decisive outcome wins and tells the
//! cursor how far to advance. The code-shaped rule is the one exception: it
//! records a candidate and lets the long-number rule run, but a token never
//! contributes more than one candidate.

use crate::models::ScanReport;

use super::rules::{MatchOutcome, Rule};

/// One whitespace-delimited word of a page, tagged with its position in the
/// page's token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub index: usize,
    pub text: String,
}

/// Split page text on whitespace, keeping reading order.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| Token {
            index,
            text: word.to_string(),
        })
        .collect()
}

/// Accumulates scan results across the pages of one document.
#[derive(Debug, Default)]
pub struct TokenScanner {
    found: Vec<crate::models::FoundItem>,
    possible: Vec<crate::models::PossibleItem>,
    pages: u32,
}

impl TokenScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one page worth of tokens. Lookahead never crosses a page
    /// boundary; results accumulate across calls.
    pub fn scan_page(&mut self, tokens: &[Token]) {
        self.pages += 1;
        let mut i = 0;
        while i < tokens.len() {
            let text = tokens[i].text.as_str();
            let lookahead = tokens.get(i + 1).map(|t| t.text.as_str());
            let mut advance = 1;
            let mut candidate_recorded = false;

            for rule in Rule::PRIORITY {
                match rule.try_match(text, lookahead) {
                    MatchOutcome::NoMatch => {}
                    MatchOutcome::Found { item, consumed } => {
                        tracing::trace!("token {}: found item via {:?}", tokens[i].index, rule);
                        self.found.push(item);
                        advance = consumed;
                        break;
                    }
                    MatchOutcome::Possible {
                        item,
                        consumed,
                        continue_scanning,
                    } => {
                        if !candidate_recorded {
                            tracing::trace!(
                                "token {}: possible item via {:?}",
                                tokens[i].index,
                                rule
                            );
                            self.possible.push(item);
                            candidate_recorded = true;
                        }
                        advance = consumed;
                        if !continue_scanning {
                            break;
                        }
                    }
                }
            }

            i += advance;
        }
    }

    /// Finish the document and derive the counts.
    pub fn finish(self) -> ScanReport {
        let found_count = self.found.len();
        let possible_count = self.possible.len();
        ScanReport {
            found: self.found,
            possible: self.possible,
            found_count,
            possible_count,
            pages: self.pages,
        }
    }
}
