//! Lexical primitives and rule classification for a single argument.
//!
//! Positions are character indices, not byte offsets, so slicing never
//! splits a code point even when an argument carries non-ASCII text.

use crate::Branch;

/// Precomputed lexical facts about one argument.
///
/// # Examples
///
/// ```
/// use argtoken_core::{Branch, Lexeme};
///
/// let lexeme = Lexeme::new("--file=a.txt");
/// assert!(lexeme.is_long_dash());
/// assert_eq!(lexeme.equals(), Some(6));
/// assert_eq!(lexeme.classify(), Some(Branch::LongData));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    chars: Vec<char>,
    equals: Option<usize>,
    colon: Option<usize>,
    long_dash: bool,
    short_dash: bool,
    short_plus: bool,
}

impl Lexeme {
    /// Evaluates every primitive of `text` up front.
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let equals = chars.iter().position(|&c| c == '=');
        let colon = chars.iter().position(|&c| c == ':');
        let long_dash = chars.starts_with(&['-', '-']);
        let short_dash = !long_dash && chars.first() == Some(&'-');
        let short_plus = chars.first() == Some(&'+');

        Self {
            chars,
            equals,
            colon,
            long_dash,
            short_dash,
            short_plus,
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Index of the first `=`.
    pub fn equals(&self) -> Option<usize> {
        self.equals
    }

    /// Index of the first `:`.
    pub fn colon(&self) -> Option<usize> {
        self.colon
    }

    pub fn is_long_dash(&self) -> bool {
        self.long_dash
    }

    pub fn is_short_dash(&self) -> bool {
        self.short_dash
    }

    pub fn is_short_plus(&self) -> bool {
        self.short_plus
    }

    /// Character at `index`, if any.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Characters in `start..end` collected into a string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Characters from `start` to the end.
    pub fn tail(&self, start: usize) -> String {
        self.slice(start, self.chars.len())
    }

    /// Applies the ten rules in precedence order; first match wins.
    ///
    /// Property style needs no prefix and only fires when the other nine
    /// rules missed, so `-:` is a property named `-`.
    pub fn classify(&self) -> Option<Branch> {
        let len = self.len();
        let short = self.short_dash || self.short_plus;
        let colon_after = |min: usize| self.colon.is_some_and(|c| c > min);
        let equals_after = |min: usize| self.equals.is_some_and(|e| e > min);
        let bare = self.colon.is_none() && self.equals.is_none();

        if self.long_dash && bare && len > 2 {
            return Some(Branch::LongSwitch);
        }
        if self.long_dash && colon_after(2) && len > 3 {
            return Some(Branch::LongSetting);
        }
        if self.long_dash && equals_after(2) {
            return Some(Branch::LongData);
        }
        if short && bare && len == 2 {
            return Some(Branch::ShortSwitch);
        }
        if short && self.colon == Some(2) {
            return Some(Branch::ShortSetting);
        }
        if short && self.equals == Some(2) {
            return Some(Branch::ShortData);
        }
        if short && bare && len > 2 {
            return Some(Branch::Cluster);
        }
        if short && colon_after(2) {
            return Some(Branch::ClusterSetting);
        }
        if short && equals_after(3) && len > 3 {
            return Some(Branch::ClusterData);
        }
        if len > 0 && self.colon == Some(len - 1) {
            return Some(Branch::Property);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Option<Branch> {
        Lexeme::new(text).classify()
    }

    #[test]
    fn test_primitives() {
        let lexeme = Lexeme::new("-ab:c=d");
        assert_eq!(lexeme.len(), 7);
        assert_eq!(lexeme.colon(), Some(3));
        assert_eq!(lexeme.equals(), Some(5));
        assert!(lexeme.is_short_dash());
        assert!(!lexeme.is_long_dash());
        assert!(!lexeme.is_short_plus());
    }

    #[test]
    fn test_long_dash_is_not_short_dash() {
        let lexeme = Lexeme::new("--x");
        assert!(lexeme.is_long_dash());
        assert!(!lexeme.is_short_dash());
    }

    #[test]
    fn test_long_rules() {
        assert_eq!(classify("--verbose"), Some(Branch::LongSwitch));
        assert_eq!(classify("--file:a.txt"), Some(Branch::LongSetting));
        assert_eq!(classify("--file:"), Some(Branch::LongSetting));
        assert_eq!(classify("--file=a.txt"), Some(Branch::LongData));
        assert_eq!(classify("--file="), Some(Branch::LongData));
    }

    #[test]
    fn test_colon_takes_precedence_over_equals_for_long() {
        assert_eq!(classify("--a=b:c"), Some(Branch::LongSetting));
    }

    #[test]
    fn test_bare_double_dash_matches_nothing() {
        assert_eq!(classify("--"), None);
        assert_eq!(classify("--=x"), None);
    }

    #[test]
    fn test_short_rules() {
        assert_eq!(classify("-v"), Some(Branch::ShortSwitch));
        assert_eq!(classify("+v"), Some(Branch::ShortSwitch));
        assert_eq!(classify("-o:"), Some(Branch::ShortSetting));
        assert_eq!(classify("+o:out"), Some(Branch::ShortSetting));
        assert_eq!(classify("-o=out"), Some(Branch::ShortData));
    }

    #[test]
    fn test_cluster_rules() {
        assert_eq!(classify("-xyz"), Some(Branch::Cluster));
        assert_eq!(classify("+xyz"), Some(Branch::Cluster));
        assert_eq!(classify("-xyz:"), Some(Branch::ClusterSetting));
        assert_eq!(classify("-xy:val"), Some(Branch::ClusterSetting));
        assert_eq!(classify("-xyz=val"), Some(Branch::ClusterData));
    }

    #[test]
    fn test_cluster_equals_needs_three_flags() {
        assert_eq!(classify("-xy=val"), None);
    }

    #[test]
    fn test_property_rule() {
        assert_eq!(classify("name:"), Some(Branch::Property));
        assert_eq!(classify("a=b:"), Some(Branch::Property));
        assert_eq!(classify("name:value"), None);
    }

    #[test]
    fn test_prefixed_trailing_colon_falls_through_to_property() {
        assert_eq!(classify("-:"), Some(Branch::Property));
        assert_eq!(classify("+:"), Some(Branch::Property));
        assert_eq!(classify("--:"), Some(Branch::Property));
    }

    #[test]
    fn test_unmatched_inputs() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("-"), None);
        assert_eq!(classify("+"), None);
        assert_eq!(classify("plain"), None);
        assert_eq!(classify("-:x"), None);
    }

    #[test]
    fn test_non_ascii_positions_are_character_indices() {
        let lexeme = Lexeme::new("--héllo=wörld");
        assert_eq!(lexeme.equals(), Some(7));
        assert_eq!(lexeme.slice(2, 7), "héllo");
        assert_eq!(lexeme.tail(8), "wörld");
    }
}
