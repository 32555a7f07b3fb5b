//! Normalization boundary.
//!
//! Literal masking and identifier canonicalization live outside this crate;
//! the tree builder only calls through [`Normalizer`].

use crate::SEPARATOR;

/// Pure, total, deterministic value normalization.
///
/// Implementations must not introduce [`SEPARATOR`] into a `desensitize`
/// result: non-terminal values are used as single path tokens.
pub trait Normalizer: Send + Sync {
    /// Applied to every non-terminal's raw source text.
    fn desensitize(&self, value: &str) -> String;

    /// Applied to every terminal's tokenized value.
    fn formalize(&self, value: &str) -> String;
}

/// Default normalizer: terminal values pass through unchanged, non-terminal
/// values only lose separator characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl Normalizer for Verbatim {
    fn desensitize(&self, value: &str) -> String {
        value.replace(SEPARATOR, "")
    }

    fn formalize(&self, value: &str) -> String {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_strips_separator_from_nonterminals_only() {
        assert_eq!(Verbatim.desensitize("a | b"), "a  b");
        assert_eq!(Verbatim.formalize("get|name"), "get|name");
    }
}
