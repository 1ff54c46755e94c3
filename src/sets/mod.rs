/*
    FIRST and FOLLOW set computation
*/

pub mod first;
pub mod follow;
pub mod pure;
pub mod saturate;

use std::collections::BTreeSet;

pub use first::{first_of_nonterminal, get_first_sets, FirstSets};
pub use follow::{get_follow_sets, FollowSets};
pub use pure::{line_to_string, to_pure_grammar, PureGrammar};

// Marks a nullable line in FIRST sets and the end of input in FOLLOW sets
pub const EPSILON: &str = "";

// String form of the empty line and of EPSILON
pub const EMPTY_LINE: &str = "ε";

pub type TerminalSet<'g> = BTreeSet<&'g str>;

// Formats a terminal the way it is written in a grammar file
pub fn terminal_to_string(terminal: &str) -> String {
    if terminal == EPSILON {
        EMPTY_LINE.to_string()
    } else {
        format!("\"{}\"", terminal.escape_debug())
    }
}
