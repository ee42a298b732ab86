//! Prioritized, data-driven targeting rules.
//!
//! When nothing useful holds focus, the locator scans the surface for a
//! candidate using this table instead of hard-coded lookups, so new site or
//! app heuristics are added as rows, never as insertion-logic changes.
//! Lower priority value = tried earlier.

use crate::locator::element::{Element, ElementKind, FieldSubtype};

/// Which element kinds a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    /// Multi-line fields only.
    Multiline,
    /// Single-line fields of an accepted text subtype.
    SingleLineText,
    /// Editable regions only.
    EditableRegion,
}

/// One row of the targeting table.
#[derive(Debug, Clone)]
pub struct TargetRule {
    pub priority: u8,
    pub kind: KindFilter,
    /// Case-insensitive substring the element's placeholder must contain.
    /// `None` matches any placeholder, including none at all.
    pub placeholder_contains: Option<&'static str>,
}

impl TargetRule {
    pub fn matches(&self, element: &Element) -> bool {
        let kind_ok = match self.kind {
            KindFilter::Multiline => element.kind == ElementKind::Multiline,
            KindFilter::EditableRegion => element.kind == ElementKind::EditableRegion,
            KindFilter::SingleLineText => matches!(
                element.kind,
                ElementKind::SingleLine(
                    FieldSubtype::Text | FieldSubtype::Search | FieldSubtype::Unspecified
                )
            ),
        };
        if !kind_ok {
            return false;
        }
        match self.placeholder_contains {
            None => true,
            Some(needle) => element
                .placeholder
                .as_deref()
                .map(|p| p.to_lowercase().contains(needle))
                .unwrap_or(false),
        }
    }
}

/// Default table, tuned for chat-style composers first, then generic
/// fallbacks for any text field or editable region.
pub fn default_rules() -> Vec<TargetRule> {
    vec![
        TargetRule { priority: 1, kind: KindFilter::Multiline, placeholder_contains: Some("message") },
        TargetRule { priority: 2, kind: KindFilter::Multiline, placeholder_contains: Some("prompt") },
        TargetRule { priority: 3, kind: KindFilter::Multiline, placeholder_contains: Some("ask") },
        TargetRule { priority: 4, kind: KindFilter::EditableRegion, placeholder_contains: None },
        TargetRule { priority: 5, kind: KindFilter::Multiline, placeholder_contains: None },
        TargetRule { priority: 6, kind: KindFilter::SingleLineText, placeholder_contains: None },
    ]
}
