//! Computed-style inspection and the transition-activity check.
//!
//! The host adapter snapshots an element's resolved transition configuration
//! into a [`ComputedStyle`]; [`has_active_transition`] then makes the one-shot
//! admission decision at registration time. Malformed or missing style data is
//! treated as "no transition", never as an error.

use serde::{Deserialize, Serialize};

use crate::properties::PropertySet;

/// Snapshot of an element's resolved transition style.
///
/// Both the standard properties and their `-webkit-` prefixed aliases are
/// carried; the standard value is preferred and the prefixed one consulted
/// only when the standard one is empty or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputedStyle {
    /// Resolved `transition-duration`, a comma-separated list of time values.
    pub transition_duration: Option<String>,
    /// Resolved `-webkit-transition-duration`.
    pub webkit_transition_duration: Option<String>,
    /// Resolved `transition-property`, a comma-separated list of property
    /// names or the literal `all`.
    pub transition_property: Option<String>,
    /// Resolved `-webkit-transition-property`.
    pub webkit_transition_property: Option<String>,
}

impl ComputedStyle {
    /// A style with no transition configured.
    pub fn none() -> Self {
        Self::default()
    }

    /// A style with the standard duration and property fields set.
    pub fn with_transition(
        duration: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            transition_duration: Some(duration.into()),
            transition_property: Some(property.into()),
            ..Self::default()
        }
    }

    /// A style carrying only the `-webkit-` prefixed aliases.
    pub fn with_webkit_transition(
        duration: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            webkit_transition_duration: Some(duration.into()),
            webkit_transition_property: Some(property.into()),
            ..Self::default()
        }
    }

    /// The first duration in the resolved list, in seconds.
    ///
    /// Only the first entry of the comma-separated list is inspected. The
    /// value is read with the leading-float rule, so `"0.3s"` is 0.3 and a
    /// non-numeric value is `None`.
    pub fn first_duration_secs(&self) -> Option<f32> {
        let raw = preferred(&self.transition_duration, &self.webkit_transition_duration)?;
        let first = raw.split(',').next().unwrap_or(raw);
        leading_float(first)
    }

    /// The resolved transition-property list as a [`PropertySet`].
    ///
    /// An absent or empty value parses to the wildcard, matching how hosts
    /// resolve an unset `transition-property` to its `all` initial value.
    pub fn property_set(&self) -> PropertySet {
        match preferred(&self.transition_property, &self.webkit_transition_property) {
            Some(raw) => PropertySet::parse(raw),
            None => PropertySet::All,
        }
    }
}

/// Decide whether a genuine transition is configured for any requested property.
///
/// True iff the first resolved duration is a finite number strictly greater
/// than zero, and the resolved property list either contains `all` or
/// intersects the requested set. A wildcard request intersects any resolved
/// list. This runs once at registration; it is not a live gate.
pub fn has_active_transition(style: &ComputedStyle, requested: &PropertySet) -> bool {
    let Some(duration) = style.first_duration_secs() else {
        return false;
    };
    if !duration.is_finite() || duration <= 0.0 {
        return false;
    }

    requested.intersects(&style.property_set())
}

fn preferred<'a>(standard: &'a Option<String>, prefixed: &'a Option<String>) -> Option<&'a str> {
    match standard.as_deref() {
        Some(s) if !s.trim().is_empty() => Some(s),
        _ => prefixed.as_deref().filter(|s| !s.trim().is_empty()),
    }
}

/// Parse the leading numeric prefix of a string, ignoring any trailing unit.
fn leading_float(input: &str) -> Option<f32> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_duration_parses_leading_float() {
        let style = ComputedStyle::with_transition("0.3s", "left");
        assert_eq!(style.first_duration_secs(), Some(0.3));

        let style = ComputedStyle::with_transition("1s, 2s", "left, width");
        assert_eq!(style.first_duration_secs(), Some(1.0));
    }

    #[test]
    fn test_unparseable_duration_is_none() {
        let style = ComputedStyle::with_transition("fast", "left");
        assert_eq!(style.first_duration_secs(), None);

        assert_eq!(ComputedStyle::none().first_duration_secs(), None);
    }

    #[test]
    fn test_prefixed_fields_are_fallback_only() {
        let style = ComputedStyle {
            transition_duration: Some("0.5s".to_string()),
            webkit_transition_duration: Some("9s".to_string()),
            ..ComputedStyle::default()
        };
        assert_eq!(style.first_duration_secs(), Some(0.5));

        let style = ComputedStyle::with_webkit_transition("0.2s", "left");
        assert_eq!(style.first_duration_secs(), Some(0.2));
        assert!(style.property_set().contains("left"));
    }

    #[test]
    fn test_zero_duration_is_inactive() {
        let style = ComputedStyle::with_transition("0s", "left");
        assert!(!has_active_transition(&style, &PropertySet::parse("left")));
    }

    #[test]
    fn test_resolved_all_activates_any_request() {
        let style = ComputedStyle::with_transition("0.3s", "all");
        assert!(has_active_transition(&style, &PropertySet::parse("color")));
        assert!(has_active_transition(&style, &PropertySet::All));
    }

    #[test]
    fn test_disjoint_property_lists_are_inactive() {
        let style = ComputedStyle::with_transition("0.3s", "left, width");
        assert!(!has_active_transition(&style, &PropertySet::parse("color")));
        assert!(has_active_transition(&style, &PropertySet::parse("width top")));
    }

    #[test]
    fn test_wildcard_request_intersects_any_resolved_list() {
        let style = ComputedStyle::with_transition("0.3s", "left");
        assert!(has_active_transition(&style, &PropertySet::All));
    }

    #[test]
    fn test_absent_property_list_defaults_to_all() {
        let style = ComputedStyle {
            transition_duration: Some("0.3s".to_string()),
            ..ComputedStyle::default()
        };
        assert!(has_active_transition(&style, &PropertySet::parse("left")));
    }
}
