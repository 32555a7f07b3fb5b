//! Merging root paths at their lowest common ancestor.

use treepath_core::config::PathStyle;

/// A pair of ancestor sequences split at their LCA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPath<'a> {
    /// `u`'s labels below the LCA, innermost first.
    pub prefix: Vec<&'a str>,
    pub lca: &'a str,
    /// `v`'s labels below the LCA, outermost first.
    pub suffix: Vec<&'a str>,
}

/// Split two root-first ancestor sequences at their longest common prefix.
///
/// Returns `None` when the sequences share no root, in which case there is
/// no LCA to pass through.
pub fn merge_paths<'a>(u: &'a [String], v: &'a [String]) -> Option<MergedPath<'a>> {
    let shared = u.iter().zip(v).take_while(|(a, b)| a == b).count();
    if shared == 0 {
        return None;
    }
    Some(MergedPath {
        prefix: u[shared..].iter().rev().map(String::as_str).collect(),
        lca: &u[shared - 1],
        suffix: v[shared..].iter().map(String::as_str).collect(),
    })
}

impl MergedPath<'_> {
    /// Both legs non-empty, legs differ by at most `width`, and the whole
    /// path (LCA included) is at most `length` labels long.
    pub fn qualifies(&self, width: usize, length: usize) -> bool {
        let (up, down) = (self.prefix.len(), self.suffix.len());
        up >= 1 && down >= 1 && up.abs_diff(down) <= width && up + 1 + down <= length
    }

    /// Middle tokens of the leaf path in the given style.
    pub fn middle(&self, style: PathStyle) -> Vec<String> {
        match style {
            PathStyle::L2L => self
                .prefix
                .iter()
                .chain(std::iter::once(&self.lca))
                .chain(self.suffix.iter())
                .map(|label| label.to_string())
                .collect(),
            PathStyle::Ud => std::iter::repeat("U")
                .take(self.prefix.len())
                .chain(std::iter::repeat("D").take(self.suffix.len()))
                .map(str::to_string)
                .collect(),
            PathStyle::U2d => {
                let mut tokens = Vec::with_capacity(2 * (self.prefix.len() + self.suffix.len()) + 1);
                for label in &self.prefix {
                    tokens.push(label.to_string());
                    tokens.push("U".to_string());
                }
                tokens.push(self.lca.to_string());
                for label in &self.suffix {
                    tokens.push("D".to_string());
                    tokens.push(label.to_string());
                }
                tokens
            }
        }
    }
}
