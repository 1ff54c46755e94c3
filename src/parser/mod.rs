/*
    This module parses BNF grammars
*/

mod lexer;
mod verifier;

use std::fmt::Display;

use indexmap::map::Entry;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::error_handling::*;
use crate::grammar::*;
use crate::sets::{EMPTY_LINE, EPSILON};
use lexer::*;
use verifier::verify_rules;
use verifier::IntermediateRuleset;

#[derive(Debug, PartialEq)]
pub enum CompileErrorType {
    // A line which should contain a rule does not
    MissingEquals,
    // A rule has multiple equals signs
    UnexpectedEquals,
    // The user starts a rule line with something other than a nonterminal
    MissingNonterminal,
    // There is an unclosed quote
    UnmatchedQuote,
    // An undefined token was used
    UndefinedNonterminal(String),
    // The same nonterminal has two rule lines
    DuplicateNonterminal(String),
    // `ε` names the empty line and cannot be defined
    ReservedName(String),
    // The file has no rules at all
    EmptyGrammar,
    // Somehow a full rewrite was parsed as a base alternative
    // This is a problem with the parser, not the grammar
    UnsplitRewrite,
    // A blank line got too deep into the parser
    // This is a problem with the parser, not the grammar
    UnexpectedBlankLine,
}

impl ErrorType for CompileErrorType {}

impl Display for CompileErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileErrorType::MissingEquals => write!(f, "Expected `=` after nonterminal"),
            CompileErrorType::UnexpectedEquals => write!(f, "Unexpected `=` encountered"),
            CompileErrorType::MissingNonterminal => write!(f, "Tried to define something other than a nonterminal"),
            CompileErrorType::UnmatchedQuote => write!(f, "Unmatched quotes"),
            CompileErrorType::UndefinedNonterminal(nonterminal) => write!(f, "Could not find definition for `{}`", nonterminal),
            CompileErrorType::DuplicateNonterminal(nonterminal) => write!(f, "`{}` is defined more than once", nonterminal),
            CompileErrorType::ReservedName(name) => write!(f, "`{}` is reserved for the empty line", name),
            CompileErrorType::EmptyGrammar => write!(f, "The grammar has no rules"),
            CompileErrorType::UnsplitRewrite => write!(f, "Rewrite was not fully split (this is a problem with the parser, not the grammar)"),
            CompileErrorType::UnexpectedBlankLine => write!(f, "Blank line encountered in rule parser (this is a problem with the parser, not the grammar)"),
        }
    }
}

pub type CompileError = Error<CompileErrorType>;
pub type CompileErrors = Errors<CompileErrorType>;

pub type Result<T> = std::result::Result<T, CompileErrorType>;
pub type LineResult<T> = std::result::Result<T, CompileError>;
pub type FileResult<T> = std::result::Result<T, CompileErrors>;

// Symbols keep their spans until every reference has been checked
pub type SpannedAlternative = Vec<(Symbol, Span)>;

#[derive(PartialEq, Debug)]
struct Rule {
    symbol: String,
    rewrite: Vec<SpannedAlternative>,
    span: Span
}

fn error_at(span: Span, error: CompileErrorType) -> CompileError {
    CompileError { span, error }
}

fn parse_alternative(lexemes: &[Lexeme]) -> LineResult<SpannedAlternative> {
    lexemes.iter()
        // `""` stands for nothing at all
        .filter(|lexeme| !matches!(&lexeme.token, Token::Terminal(text) if text == EPSILON))
        .map(|lexeme| match &lexeme.token {
            Token::Equals => Err(error_at(lexeme.span, CompileErrorType::UnexpectedEquals)),
            Token::Or => Err(error_at(lexeme.span, CompileErrorType::UnsplitRewrite)),
            Token::Nonterminal(s) => Ok((Symbol::Nonterminal(s.clone()), lexeme.span)),
            Token::Terminal(s) => Ok((Symbol::Terminal(s.clone()), lexeme.span))
        })
        .collect()
}

fn parse_rewrite(lexemes: &[Lexeme]) -> LineResult<Vec<SpannedAlternative>> {
    lexemes.split(|lexeme| lexeme.token == Token::Or).map(parse_alternative).collect()
}

fn parse_line(lexemes: &[Lexeme], span: Span) -> LineResult<Rule> {
    // Try to get the nonterminal the rule is for
    let (symbol, symbol_span) = match lexemes.first() {
        Some(Lexeme { token: Token::Nonterminal(s), span }) if s == EMPTY_LINE => {
            Err(error_at(*span, CompileErrorType::ReservedName(s.clone())))
        }
        Some(Lexeme { token: Token::Nonterminal(s), span }) => Ok((s.clone(), *span)),
        Some(lexeme) => Err(error_at(lexeme.span, CompileErrorType::MissingNonterminal)),
        None => Err(error_at(span, CompileErrorType::UnexpectedBlankLine))
    }?;

    match lexemes.get(1) {
        Some(Lexeme { token: Token::Equals, .. }) => {}
        Some(lexeme) => return Err(error_at(symbol_span.to(lexeme.span), CompileErrorType::MissingEquals)),
        None => return Err(error_at(symbol_span, CompileErrorType::MissingEquals))
    }

    let rewrite = parse_rewrite(&lexemes[2..])?;

    return Ok(Rule {
        symbol,
        rewrite,
        span: symbol_span
    });
}

fn parse_lex_line(line: &str, offset: usize) -> LineResult<Rule> {
    lexer::lex_line(line, offset)
        .and_then(|lexemes| parse_line(&lexemes, Span::new(offset, offset + line.len())))
}

fn is_rule_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with(';')
}

// Returns the lines of the text together with the offset each one starts at
fn line_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line.trim_end_matches(['\n', '\r'])))
    })
}

fn ruleset_from_rules(rules: Vec<Rule>) -> FileResult<IndexMap<String, Rewrite>> {
    let mut errors = Vec::new();

    let mut test_ruleset = IntermediateRuleset::with_capacity(rules.len());
    for rule in rules {
        match test_ruleset.entry(rule.symbol) {
            Entry::Occupied(entry) => errors.push(error_at(
                rule.span,
                CompileErrorType::DuplicateNonterminal(entry.key().clone())
            )),
            Entry::Vacant(entry) => {
                entry.insert(rule.rewrite);
            }
        }
    }

    errors.extend(verify_rules(&test_ruleset).err().into_iter().flatten());
    if !errors.is_empty() {
        return Err(errors);
    }

    let ruleset: IndexMap<String, Rewrite> = test_ruleset.into_iter()
        .map(|(symbol, rewrite)| {
            let rewrite: Rewrite = rewrite.into_iter()
                .map(|alternative| alternative.into_iter().map(|(symbol, _)| symbol).collect())
                .collect();
            (symbol, rewrite)
        })
        .collect();

    return Ok(ruleset);
}

fn grammar_from_rules(rule_list: Vec<Rule>) -> FileResult<Grammar> {
    if rule_list.is_empty() {
        return Err(vec![error_at(Span::new(0, 0), CompileErrorType::EmptyGrammar)]);
    }

    // The first rule is the start symbol
    let rules = ruleset_from_rules(rule_list)?;

    return Ok(Grammar::new(rules));
}

pub fn parse_grammar(text: &str) -> FileResult<Grammar> {
    let (rules, errors): (Vec<_>, Vec<_>) = line_offsets(text)
        .filter(|(_, line)| is_rule_line(line))
        .map(|(offset, line)| parse_lex_line(line, offset))
        .partition_result();

    if !errors.is_empty() {
        return Err(errors);
    }

    return grammar_from_rules(rules);
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::iter::zip;

    use super::*;
    use crate::grammar::tests::{n, t};
    use crate::sets::line_to_string;

    fn lexeme(token: Token) -> Lexeme {
        Lexeme {
            token,
            span: Span::new(0, 0)
        }
    }

    fn unspanned(alternative: SpannedAlternative) -> Alternative {
        alternative.into_iter().map(|(symbol, _)| symbol).collect()
    }

    fn parse_error(line: &str) -> CompileErrorType {
        parse_lex_line(line, 0).unwrap_err().error
    }

    #[test]
    fn parse_normal_alternative() {
        let lines = vec![
            vec![
                lexeme(Token::Nonterminal("personal.part".to_string())),
                lexeme(Token::Nonterminal("last.name".to_string())),
                lexeme(Token::Nonterminal("opt.suffix.name".to_string())),
                lexeme(Token::Terminal("\\n".to_string()))
            ],
            vec![
                lexeme(Token::Nonterminal("town.name".to_string())),
                lexeme(Token::Terminal(",".to_string()))
            ],
            vec![
                lexeme(Token::Terminal("".to_string()))
            ]
        ];
        let answers = vec![
            vec![
                n("personal.part"),
                n("last.name"),
                n("opt.suffix.name"),
                t("\\n")
            ],
            vec![
                n("town.name"),
                t(",")
            ],
            vec![]
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(unspanned(parse_alternative(&line[..]).unwrap()), answer);
        }
    }

    #[test]
    fn parse_malformed_alternative() {
        assert_eq!(parse_alternative(&[lexeme(Token::Equals)]).unwrap_err().error, CompileErrorType::UnexpectedEquals);
        assert_eq!(parse_alternative(&[lexeme(Token::Or)]).unwrap_err().error, CompileErrorType::UnsplitRewrite);
    }

    #[test]
    fn parse_normal_line() {
        let rule = parse_lex_line("personal.part = first.name | initial \".\" |", 0).unwrap();

        assert_eq!(rule.symbol, "personal.part");
        assert_eq!(rule.span, Span::new(0, 13));
        assert_eq!(rule.rewrite.into_iter().map(unspanned).collect::<Vec<_>>(), vec![
            vec![n("first.name")],
            vec![n("initial"), t(".")],
            vec![]
        ]);
    }

    #[test]
    fn parse_malformed_line() {
        // Blank
        assert_eq!(parse_line(&[], Span::new(0, 0)).unwrap_err().error, CompileErrorType::UnexpectedBlankLine);

        // Missing equals
        assert_eq!(parse_error("alpha bravo charlie"), CompileErrorType::MissingEquals);
        assert_eq!(parse_error("alpha"), CompileErrorType::MissingEquals);

        // Improper definition
        assert_eq!(parse_error("\"alpha\" = bravo charlie"), CompileErrorType::MissingNonterminal);
        assert_eq!(parse_error("| = alpha bravo charlie"), CompileErrorType::MissingNonterminal);
        assert_eq!(parse_error("= alpha bravo charlie"), CompileErrorType::MissingNonterminal);
        assert_eq!(parse_error("ε = \"a\""), CompileErrorType::ReservedName("ε".to_string()));

        // Second equals
        assert_eq!(parse_error("alpha = bravo = charlie"), CompileErrorType::UnexpectedEquals);
    }

    #[test]
    fn empty_line_name_is_reserved() {
        let line = format!("{} = \"a\"", line_to_string(&[]));
        assert_eq!(parse_error(&line), CompileErrorType::ReservedName(EMPTY_LINE.to_string()));
    }

    #[test]
    fn line_offsets_skip_line_breaks() {
        let lines = line_offsets("a = b\r\n\nb = \"c\"").collect::<Vec<_>>();
        assert_eq!(lines, vec![(0, "a = b"), (7, ""), (8, "b = \"c\"")]);
    }

    #[test]
    fn parse_normal_file() {
        let text = fs::read_to_string("example_data/english.bnf").unwrap();
        let parsed = parse_grammar(&text).unwrap();

        let mut rules = IndexMap::new();
        rules.insert("sentence".to_string(), vec![vec![
            n("noun.phrase"),
            t(" "),
            n("verb.phrase")
        ]]);
        rules.insert("noun.phrase".to_string(), vec![
            vec![
                n("adjective.phrase"),
                t(" "),
                n("noun")
            ],
            vec![n("noun")]
        ]);
        rules.insert("noun".to_string(), vec![vec![t("ideas")]]);
        rules.insert("adjective.phrase".to_string(), vec![
            vec![
                n("adjective"),
                t(", "),
                n("adjective.phrase")
            ],
            vec![n("adjective")]
        ]);
        rules.insert("adjective".to_string(), vec![
            vec![t("colorless")],
            vec![t("green")]
        ]);
        rules.insert("verb.phrase".to_string(), vec![
            vec![
                n("verb"),
                t(" "),
                n("adverb")
            ],
            vec![
                n("adverb"),
                t(" "),
                n("verb"),
                t(" "),
                n("noun.phrase")
            ]
        ]);
        rules.insert("verb".to_string(), vec![vec![t("sleep")]]);
        rules.insert("adverb".to_string(), vec![vec![t("furiously")], vec![]]);

        assert_eq!(parsed, Grammar {
            start_symbol: "sentence".to_string(),
            rules
        });
    }

    #[test]
    fn parse_malformed_file() {
        let text = fs::read_to_string("example_data/malformed.bnf").unwrap();
        let errors = parse_grammar(&text).unwrap_err();

        assert_eq!(errors.into_iter().map(|error| error.error).collect::<Vec<_>>(), vec![
            CompileErrorType::MissingNonterminal,
            CompileErrorType::UnexpectedEquals
        ]);
    }

    #[test]
    fn parse_undefined_and_duplicate() {
        let text = "s = a \"x\" b\na = \"a\"\na = \"b\"\n";
        let errors = parse_grammar(text).unwrap_err();

        assert_eq!(errors, vec![
            CompileError {
                span: Span::new(20, 21),
                error: CompileErrorType::DuplicateNonterminal("a".to_string())
            },
            CompileError {
                span: Span::new(10, 11),
                error: CompileErrorType::UndefinedNonterminal("b".to_string())
            }
        ]);
    }

    #[test]
    fn parse_empty_file() {
        let errors = parse_grammar("; nothing here\n\n").unwrap_err();
        assert_eq!(errors, vec![error_at(Span::new(0, 0), CompileErrorType::EmptyGrammar)]);
    }

    #[test]
    fn first_rule_starts_the_grammar() {
        let grammar = parse_grammar("list = item list | \"\"\nitem = \"x\"").unwrap();

        assert_eq!(grammar.start_symbol, "list");
        assert_eq!(grammar.rules["list"], vec![vec![n("item"), n("list")], vec![]]);
    }
}
