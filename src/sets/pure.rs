/*
    Projection of a grammar onto the parts the set computations look at
*/

use indexmap::IndexMap;
use itertools::Itertools;

use super::{terminal_to_string, EMPTY_LINE};
use crate::grammar::{Grammar, Symbol};

// A symbol reduced to its name and kind, borrowed from the grammar it came
// from. Lines of these are used directly as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PureSymbol<'g> {
    Terminal(&'g str),
    Nonterminal(&'g str),
}

impl<'g> From<&'g Symbol> for PureSymbol<'g> {
    fn from(symbol: &'g Symbol) -> Self {
        match symbol {
            Symbol::Terminal(name) => PureSymbol::Terminal(name),
            Symbol::Nonterminal(name) => PureSymbol::Nonterminal(name),
        }
    }
}

pub type PureLine<'g> = Vec<PureSymbol<'g>>;

#[derive(Debug, PartialEq)]
pub struct PureGrammar<'g> {
    pub start_symbol: &'g str,
    pub rules: IndexMap<&'g str, Vec<PureLine<'g>>>,
}

impl<'g> PureGrammar<'g> {
    pub fn lines(&self, nonterminal: &str) -> &[PureLine<'g>] {
        self.rules.get(nonterminal).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub fn to_pure_grammar(grammar: &Grammar) -> PureGrammar<'_> {
    PureGrammar {
        start_symbol: &grammar.start_symbol,
        rules: grammar.rules.iter()
            .map(|(name, rewrite)| {
                let lines: Vec<PureLine> = rewrite.iter()
                    .map(|alternative| alternative.iter().map(PureSymbol::from).collect())
                    .collect();
                (name.as_str(), lines)
            })
            .collect(),
    }
}

// Renders a line or suffix as a unique string. Terminals are written as in
// the report, nonterminals bare and the empty suffix as EMPTY_LINE, a name the
// parser refuses for nonterminals.
pub fn line_to_string(line: &[PureSymbol]) -> String {
    if line.is_empty() {
        return EMPTY_LINE.to_string();
    }

    line.iter()
        .map(|symbol| match symbol {
            PureSymbol::Terminal(name) => terminal_to_string(name),
            PureSymbol::Nonterminal(name) => name.to_string(),
        })
        .join(" ")
}
