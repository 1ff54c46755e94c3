mod cli;
mod diagnostics;
mod error_handling;
mod grammar;
mod parser;
mod report;
mod sets;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::info;

use cli::Cli;
use diagnostics::{format_errors, PositionResolver};
use parser::CompileError;

fn run(cli: &Cli) -> Result<String, String> {
    let text = fs::read_to_string(&cli.file)
        .map_err(|e| format!("Could not read {}: {}", cli.file.display(), e))?;

    let grammar = parser::parse_grammar(&text).map_err(|errors| {
        let resolver = PositionResolver::new(&text);
        let errors = errors.iter().map(CompileError::to_syntax_error).collect_vec();
        format_errors(&errors, |offset| resolver.resolve(offset))
    })?;

    let grammar = match &cli.start {
        Some(start) if grammar.rules.contains_key(start) => grammar.with_start_symbol(start.clone()),
        Some(start) => return Err(format!("No rule defines the start symbol `{}`", start)),
        None => grammar
    };
    info!("loaded {} rules starting at `{}`", grammar.rules.len(), grammar.start_symbol);

    let pure = sets::to_pure_grammar(&grammar);
    let first_sets = sets::get_first_sets(&pure);
    let follow_sets = sets::get_follow_sets(&grammar, &first_sets);

    Ok(report::render(&pure, &first_sets, &follow_sets, &cli.sections()))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
