//! Sub-token splitting for terminal values.

use crate::SEPARATOR;

/// Split `term` on underscores and camel-case boundaries, lowercase every
/// piece, and join the pieces with [`SEPARATOR`]. Empty pieces are dropped.
pub fn tokenize(term: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();
    for underscore_block in term.split('_') {
        blocks.extend(camel_case_split(underscore_block).into_iter().map(str::to_lowercase));
    }
    blocks.join(&SEPARATOR.to_string())
}

/// Split at `aB` (lower to upper) and at `ABc` (the last capital of an
/// acronym starts a new word).
fn camel_case_split(identifier: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = identifier.char_indices().collect();
    let mut pieces = Vec::new();
    let mut start = 0;
    for i in 0..chars.len().saturating_sub(1) {
        let current = chars[i].1;
        let (next_at, next) = chars[i + 1];
        let lower_to_upper = current.is_ascii_lowercase() && next.is_ascii_uppercase();
        let acronym_end = current.is_ascii_uppercase()
            && next.is_ascii_uppercase()
            && chars.get(i + 2).is_some_and(|&(_, c)| c.is_ascii_lowercase());
        if lower_to_upper || acronym_end {
            pieces.push(&identifier[start..next_at]);
            start = next_at;
        }
    }
    if start < identifier.len() {
        pieces.push(&identifier[start..]);
    }
    pieces
}
