/*
    FOLLOW sets of every nonterminal in a grammar
*/

use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, trace};

use super::first::{first_of_line, FirstSets};
use super::pure::{to_pure_grammar, PureGrammar, PureSymbol};
use super::saturate::saturate;
use super::{TerminalSet, EPSILON};
use crate::grammar::Grammar;

pub type FollowSets<'g> = HashMap<&'g str, TerminalSet<'g>>;

// What is left of a line after one occurrence of a nonterminal, together with
// the nonterminal that owns the line
#[derive(Debug, PartialEq)]
pub struct Ending<'a, 'g> {
    pub owner: &'g str,
    pub symbols: &'a [PureSymbol<'g>],
}

pub fn get_follow_sets<'g>(grammar: &'g Grammar, first_sets: &FirstSets<'g>) -> FollowSets<'g> {
    let grammar = to_pure_grammar(grammar);
    let initial: FollowSets = grammar.rules.keys()
        .map(|&key| (key, TerminalSet::new()))
        .collect();
    debug!("computing FOLLOW sets of {} nonterminals", initial.len());

    saturate(|follow_sets| saturate_follow_sets(&grammar, first_sets, follow_sets), initial)
}

// One round of the FOLLOW computation. Every set is rebuilt from scratch out
// of the fixed FIRST sets and the previous round's FOLLOW sets.
pub fn saturate_follow_sets<'g>(
    grammar: &PureGrammar<'g>,
    first_sets: &FirstSets<'g>,
    follow_sets: &FollowSets<'g>,
) -> FollowSets<'g> {
    follow_sets.keys()
        .map(|&key| {
            let mut follow_set = TerminalSet::new();

            if key == grammar.start_symbol {
                follow_set.insert(EPSILON);
            }

            for Ending { owner, symbols } in find_terminal_endings(grammar, key) {
                let raw_first_set = first_of_line(first_sets, symbols);
                let first_set: TerminalSet = raw_first_set.iter()
                    .copied()
                    .filter(|&terminal| terminal != EPSILON)
                    .collect();

                // An empty FIRST set and a nullable ending both hand over the
                // owner's FOLLOW set, and nothing else
                if first_set.is_empty() || raw_first_set.contains(EPSILON) {
                    trace!("FOLLOW({}) takes FOLLOW({})", key, owner);
                    follow_set.extend(follow_sets.get(owner).into_iter().flatten().copied());
                } else {
                    follow_set.extend(first_set);
                }
            }

            (key, follow_set)
        })
        .collect()
}

// Every ending that follows an occurrence of `key`, across the lines of every
// nonterminal. A line mentioning `key` twice yields two endings.
pub fn find_terminal_endings<'a, 'g>(grammar: &'a PureGrammar<'g>, key: &'g str) -> Vec<Ending<'a, 'g>> {
    let needle = PureSymbol::Nonterminal(key);

    grammar.rules.iter()
        .flat_map(|(&owner, lines)| lines.iter().map(move |line| (owner, line)))
        .flat_map(|(owner, line)| {
            find_all_indexes_of(line, &needle)
                .into_iter()
                .map(move |index| Ending { owner, symbols: &line[index + 1..] })
        })
        .collect()
}

pub fn find_all_indexes_of<T: PartialEq>(items: &[T], search: &T) -> Vec<usize> {
    items.iter().positions(|item| item == search).collect()
}
