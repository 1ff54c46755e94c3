/*
    Text output of the computed sets
*/

use std::iter::once;

use itertools::Itertools;

use crate::sets::{
    first_of_nonterminal, line_to_string, terminal_to_string, FirstSets, FollowSets, PureGrammar, TerminalSet,
};

#[derive(Debug, PartialEq)]
pub struct Sections {
    pub first: bool,
    pub follow: bool,
    pub suffixes: bool,
}

fn set_to_string(set: &TerminalSet) -> String {
    set.iter().map(|terminal| terminal_to_string(terminal)).join(" ")
}

fn section<'a>(title: &str, rows: impl Iterator<Item = (String, TerminalSet<'a>)>) -> String {
    once(title.to_string())
        .chain(rows.map(|(key, set)| format!("  {}: {}", key, set_to_string(&set))))
        .join("\n")
}

// Nonterminals are listed in declaration order, suffixes by their string form
pub fn render(grammar: &PureGrammar, first_sets: &FirstSets, follow_sets: &FollowSets, sections: &Sections) -> String {
    let mut parts = Vec::new();

    if sections.first {
        parts.push(section("FIRST", grammar.rules.keys().map(|&name| {
            (name.to_string(), first_of_nonterminal(first_sets, name))
        })));
    }

    if sections.suffixes {
        let rows = first_sets.iter()
            .map(|(suffix, set)| (line_to_string(suffix), set.clone()))
            .sorted();
        parts.push(section("SUFFIXES", rows));
    }

    if sections.follow {
        parts.push(section("FOLLOW", grammar.rules.keys().map(|&name| {
            (name.to_string(), follow_sets.get(name).cloned().unwrap_or_default())
        })));
    }

    parts.into_iter().map(|part| part + "\n").join("\n")
}
