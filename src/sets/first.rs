/*
    FIRST sets of every line suffix in a grammar
*/

use std::collections::HashMap;
use std::iter::once;

use log::debug;

use super::pure::{PureGrammar, PureLine, PureSymbol};
use super::saturate::saturate;
use super::{TerminalSet, EPSILON};

// Keyed by the suffix itself. FIRST(N) of a nonterminal lives under `[N]`.
pub type FirstSets<'g> = HashMap<PureLine<'g>, TerminalSet<'g>>;

pub fn get_first_sets<'g>(grammar: &PureGrammar<'g>) -> FirstSets<'g> {
    let initial: FirstSets = suffixes(grammar)
        .map(|suffix| (suffix, TerminalSet::new()))
        .collect();
    debug!("computing FIRST sets of {} suffixes", initial.len());

    saturate(|first_sets| saturate_first_sets(grammar, first_sets), initial)
}

// Every suffix of every line, including the empty one, plus `[N]` for each
// nonterminal
fn suffixes<'a, 'g>(grammar: &'a PureGrammar<'g>) -> impl Iterator<Item = PureLine<'g>> + 'a {
    let line_suffixes = grammar.rules.values()
        .flatten()
        .flat_map(|line| (0..=line.len()).map(move |index| line[index..].to_vec()));
    let nonterminals = grammar.rules.keys()
        .map(|&name| vec![PureSymbol::Nonterminal(name)]);

    line_suffixes.chain(nonterminals).chain(once(PureLine::new()))
}

fn saturate_first_sets<'g>(grammar: &PureGrammar<'g>, first_sets: &FirstSets<'g>) -> FirstSets<'g> {
    first_sets.keys()
        .map(|suffix| (suffix.clone(), first_of_suffix(grammar, first_sets, suffix)))
        .collect()
}

// Recomputes one suffix from the previous iteration's sets
fn first_of_suffix<'g>(
    grammar: &PureGrammar<'g>,
    first_sets: &FirstSets<'g>,
    suffix: &[PureSymbol<'g>],
) -> TerminalSet<'g> {
    match suffix.split_first() {
        None => TerminalSet::from([EPSILON]),
        Some((PureSymbol::Terminal(name), _)) => TerminalSet::from([*name]),
        Some((PureSymbol::Nonterminal(name), rest)) => {
            let nonterminal_first: TerminalSet = grammar.lines(name).iter()
                .flat_map(|line| first_of_line(first_sets, line))
                .collect();

            let mut first_set: TerminalSet = nonterminal_first.iter()
                .copied()
                .filter(|&terminal| terminal != EPSILON)
                .collect();
            if nonterminal_first.contains(EPSILON) {
                first_set.extend(first_of_line(first_sets, rest));
            }
            first_set
        }
    }
}

// Missing suffixes have an empty FIRST set
pub fn first_of_line<'g>(first_sets: &FirstSets<'g>, line: &[PureSymbol<'g>]) -> TerminalSet<'g> {
    first_sets.get(line).cloned().unwrap_or_default()
}

pub fn first_of_nonterminal<'g>(first_sets: &FirstSets<'g>, name: &'g str) -> TerminalSet<'g> {
    first_of_line(first_sets, &[PureSymbol::Nonterminal(name)])
}
