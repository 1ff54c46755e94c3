use indexmap::IndexMap;

use crate::grammar::Symbol::Nonterminal;
use super::CompileErrorType::UndefinedNonterminal;
use super::{CompileError, CompileErrors, FileResult, SpannedAlternative};

pub type IntermediateRuleset = IndexMap<String, Vec<SpannedAlternative>>;

fn get_alternative_undefined_symbols(alternative: &SpannedAlternative, rules: &IntermediateRuleset) -> CompileErrors {
    // Filter out everything but nonterminals and unwrap the text from the
    // nonterminals. Then filter out all the undefined nonterminals.
    alternative.iter()
        .filter_map(|(symbol, span)| match symbol {
            Nonterminal(symbol) => Some((symbol, span)),
            _ => None
        })
        .filter(|(symbol, _)| !rules.contains_key(*symbol))
        .map(|(symbol_text, span)| CompileError {
            span: *span,
            error: UndefinedNonterminal(symbol_text.to_owned())
        })
        .collect()
}

fn get_rewrite_undefined_symbols(rewrite: &[SpannedAlternative], rules: &IntermediateRuleset) -> CompileErrors {
    // Get the undefined nonterminals in each alternative, while flattening
    // into all the undefined nonterminals in the rewrite
    rewrite.iter()
        .flat_map(|alternative| get_alternative_undefined_symbols(alternative, rules))
        .collect()
}

fn get_undefined_symbols(rules: &IntermediateRuleset) -> CompileErrors {
    // Get the undefined nonterminals in each rewrite, in declaration order
    rules.values()
        .flat_map(|rewrite| get_rewrite_undefined_symbols(rewrite, rules))
        .collect()
}

pub fn verify_rules(rules: &IntermediateRuleset) -> FileResult<()> {
    let errors = get_undefined_symbols(rules);

    if errors.len() > 0 {
        Err(errors)
    } else {
        Ok(())
    }
}
