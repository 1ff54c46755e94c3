/*
    This module is for storing grammars
*/

use indexmap::IndexMap;

// The base unit in a grammar rule
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
}

// The symbols in a single alternative
pub type Alternative = Vec<Symbol>;

// The alternatives of a rewrite rule
pub type Rewrite = Vec<Alternative>;

#[derive(Debug, PartialEq)]
pub struct Grammar {
    pub start_symbol: String,
    // Kept in declaration order
    pub rules: IndexMap<String, Rewrite>,
}

impl Grammar {
    /// Builds a grammar whose start symbol is the first declared nonterminal.
    pub fn new(rules: IndexMap<String, Rewrite>) -> Self {
        let start_symbol = rules.keys().next().cloned().unwrap_or_default();
        Grammar { start_symbol, rules }
    }

    pub fn with_start_symbol(self, start_symbol: String) -> Self {
        Grammar { start_symbol, ..self }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn t(text: &str) -> Symbol {
        Symbol::Terminal(text.to_string())
    }

    pub fn n(text: &str) -> Symbol {
        Symbol::Nonterminal(text.to_string())
    }

    pub fn grammar(rules: Vec<(&str, Rewrite)>) -> Grammar {
        Grammar::new(rules.into_iter().map(|(name, rewrite)| (name.to_string(), rewrite)).collect())
    }

    #[test]
    fn first_rule_is_start_symbol() {
        let g = grammar(vec![
            ("S", vec![vec![n("A")]]),
            ("A", vec![vec![t("a"), n("A")], vec![]]),
        ]);
        assert_eq!(g.start_symbol, "S");
        assert_eq!(g.rules.keys().collect::<Vec<_>>(), vec!["S", "A"]);
    }

    #[test]
    fn start_symbol_override() {
        let g = grammar(vec![
            ("S", vec![vec![n("A")]]),
            ("A", vec![vec![t("a")]]),
        ]).with_start_symbol("A".to_string());
        assert_eq!(g.start_symbol, "A");
    }

    #[test]
    fn empty_grammar_has_empty_start() {
        assert_eq!(Grammar::new(IndexMap::new()).start_symbol, "");
    }
}
