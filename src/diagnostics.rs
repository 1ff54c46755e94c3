/*
    Rendering of offset based errors as `FATAL [line,col]-[line,col]: message`
*/

use itertools::Itertools;

#[derive(Debug, PartialEq, Clone)]
pub struct SyntaxError {
    pub start: usize,
    pub end: usize,
    pub message: String,
}

// 1-based
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Position {
    pub line_number: usize,
    pub column_number: usize,
}

// Turns byte offsets into positions within one source text. Offsets past the
// end resolve to the end of the text.
pub struct PositionResolver<'t> {
    text: &'t str,
    line_starts: Vec<usize>,
}

impl<'t> PositionResolver<'t> {
    pub fn new(text: &'t str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(index, _)| index + 1))
            .collect();
        PositionResolver { text, line_starts }
    }

    pub fn resolve(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self.text.get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);

        Position {
            line_number: line,
            column_number: column + 1,
        }
    }
}

pub fn format_position(position: Position) -> String {
    format!("[{},{}]", position.line_number, position.column_number)
}

pub fn format_errors(errors: &[SyntaxError], resolve: impl Fn(usize) -> Position) -> String {
    errors.iter()
        .map(|error| format!(
            "FATAL {}-{}: {}",
            format_position(resolve(error.start)),
            format_position(resolve(error.end)),
            error.message
        ))
        .join("\n")
}
