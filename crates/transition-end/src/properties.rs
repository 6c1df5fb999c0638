//! Property-set parsing for transition property lists.
//!
//! Callers and computed styles both name transition properties as
//! delimiter-separated strings ("left, width" or "left width"). Parsing is
//! total: any string yields a valid set, with empty input and the literal
//! `all` token both collapsing to the wildcard.

use serde::{Deserialize, Serialize};

/// A set of transition property names, or the wildcard.
///
/// The wildcard means "any property counts": as a caller filter it matches
/// every completion event, and as a resolved `transition-property` value it
/// makes any requested set active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertySet {
    /// Match any property (CSS `transition-property: all`, or no filter given).
    All,
    /// Match exactly these property names.
    Named {
        /// Deduplicated names in source order.
        names: Vec<String>,
    },
}

impl Default for PropertySet {
    fn default() -> Self {
        Self::All
    }
}

impl PropertySet {
    /// Parse a comma/whitespace separated property list.
    ///
    /// Splits on one-or-more consecutive delimiters, so `"left,width"`,
    /// `"left, width"`, and `"left  width"` all parse to the same set.
    /// Empty or whitespace-only input yields [`PropertySet::All`], as does a
    /// list containing the `all` token.
    pub fn parse(input: &str) -> Self {
        let mut names: Vec<String> = Vec::new();
        for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            if token == "all" {
                return Self::All;
            }
            if !names.iter().any(|n| n == token) {
                names.push(token.to_string());
            }
        }

        if names.is_empty() {
            Self::All
        } else {
            Self::Named { names }
        }
    }

    /// Whether this set is the wildcard.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a property name is in the set. The wildcard contains everything.
    pub fn contains(&self, property_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named { names } => names.iter().any(|n| n == property_name),
        }
    }

    /// The named members, or `None` for the wildcard.
    pub fn names(&self) -> Option<&[String]> {
        match self {
            Self::All => None,
            Self::Named { names } => Some(names),
        }
    }

    /// Whether any member of this set appears in `other`.
    ///
    /// The wildcard intersects any non-empty set, including the wildcard.
    pub fn intersects(&self, other: &PropertySet) -> bool {
        match (self, other) {
            (Self::All, _) | (_, Self::All) => true,
            (Self::Named { names }, other) => names.iter().any(|n| other.contains(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_delimiter_agnostic() {
        let comma = PropertySet::parse("left,width");
        let comma_space = PropertySet::parse("left, width");
        let spaces = PropertySet::parse("left  width");

        assert_eq!(comma, comma_space);
        assert_eq!(comma_space, spaces);
        assert_eq!(comma.names().unwrap(), ["left", "width"]);
    }

    #[test]
    fn test_parse_trims_boundary_delimiters() {
        let set = PropertySet::parse(" ,left width, ");
        assert_eq!(set.names().unwrap(), ["left", "width"]);
    }

    #[test]
    fn test_empty_input_is_wildcard() {
        assert!(PropertySet::parse("").is_all());
        assert!(PropertySet::parse("   ").is_all());
        assert!(PropertySet::parse(", ,").is_all());
    }

    #[test]
    fn test_all_token_is_wildcard() {
        assert!(PropertySet::parse("all").is_all());
        assert!(PropertySet::parse("left all width").is_all());
    }

    #[test]
    fn test_parse_deduplicates() {
        let set = PropertySet::parse("left left width");
        assert_eq!(set.names().unwrap(), ["left", "width"]);
    }

    #[test]
    fn test_contains() {
        let set = PropertySet::parse("left width");
        assert!(set.contains("left"));
        assert!(set.contains("width"));
        assert!(!set.contains("top"));
        assert!(PropertySet::All.contains("anything"));
    }

    #[test]
    fn test_intersects() {
        let requested = PropertySet::parse("left width");
        let resolved = PropertySet::parse("width top");
        assert!(requested.intersects(&resolved));

        let disjoint = PropertySet::parse("top height");
        assert!(!requested.intersects(&disjoint));

        assert!(PropertySet::All.intersects(&resolved));
        assert!(requested.intersects(&PropertySet::All));
    }
}
