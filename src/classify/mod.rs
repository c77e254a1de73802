//! Token classification: the rule grammars and the page scan loop.

mod rules;
mod scanner;

pub use rules::{MatchOutcome, Rule};
pub use scanner::{tokenize, Token, TokenScanner};
