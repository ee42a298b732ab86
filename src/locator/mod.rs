//! Target locator & inserter — the core of Prompt Dock.
//!
//! Given literal text, find the most plausible text-entry surface and write
//! the text into it, or fall back to a clipboard copy. Stateless: every
//! decision is derived from a fresh surface snapshot at call time, and the
//! whole operation is a single shot with no retry.

pub mod element;
pub mod insert;
pub mod rules;
pub mod surface;

use serde::Serialize;
use thiserror::Error;

use self::element::Element;
use self::rules::TargetRule;
use self::surface::{ClipboardSink, PageSurface};

/// Why an insertion attempt could not complete directly.
#[derive(Debug, Error)]
pub enum InsertError {
    #[error("no qualifying text-entry surface found")]
    NoTargetFound,
    #[error("insertion failed: {0}")]
    InsertionFailed(String),
    #[error("clipboard write rejected: {0}")]
    ClipboardDenied(String),
    #[error("target cannot receive input: {0}")]
    UnreachableTarget(String),
}

/// How the text actually reached the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    Inserted,
    Clipboard,
}

/// Result of one delivery attempt, sent back to the popup and rendered
/// as a toast.
#[derive(Debug, Clone, Serialize)]
pub struct InsertOutcome {
    pub succeeded: bool,
    pub method: DeliveryMethod,
    pub detail: Option<String>,
}

impl InsertOutcome {
    pub fn inserted() -> Self {
        Self { succeeded: true, method: DeliveryMethod::Inserted, detail: None }
    }

    pub fn clipboard(detail: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            method: DeliveryMethod::Clipboard,
            detail: Some(detail.into()),
        }
    }
}

/// Pick the best candidate element, first qualifying wins:
/// 1. whatever holds focus, if it qualifies;
/// 2. the first visible, enabled match of the rule table, in rule priority
///    order and document order within a rule.
pub fn find_target(page: &dyn PageSurface, rules: &[TargetRule]) -> Option<Element> {
    if let Some(focused) = page.focused() {
        if focused.qualifies() {
            log::debug!("[LOCATOR] Using focused element {:?}", focused.id);
            return Some(focused);
        }
        log::debug!(
            "[LOCATOR] Focused element {:?} does not qualify, scanning rules",
            focused.id
        );
    }

    let elements = page.elements();
    let mut ordered: Vec<&TargetRule> = rules.iter().collect();
    ordered.sort_by_key(|r| r.priority);

    for rule in ordered {
        if let Some(found) = elements
            .iter()
            .find(|el| rule.matches(el) && el.qualifies() && el.is_visible())
        {
            log::debug!(
                "[LOCATOR] Rule priority {} matched element {:?}",
                rule.priority,
                found.id
            );
            return Some(found.clone());
        }
    }
    None
}

/// Deliver `text` to the page: direct insertion when a target qualifies,
/// clipboard copy otherwise. The only unrecovered failure is a rejected
/// clipboard write.
pub fn deliver(
    page: &mut dyn PageSurface,
    clipboard: &mut dyn ClipboardSink,
    rules: &[TargetRule],
    text: &str,
) -> Result<InsertOutcome, InsertError> {
    match find_target(page, rules) {
        Some(target) => match insert::insert_into(page, &target, text) {
            Ok(()) => {
                log::info!("[LOCATOR] Inserted {} chars into {:?}", text.len(), target.id);
                Ok(InsertOutcome::inserted())
            }
            Err(e) => {
                log::warn!("[LOCATOR] Insertion into {:?} failed: {}", target.id, e);
                copy_fallback(clipboard, text, "insertion failed, copied to clipboard")
            }
        },
        None => {
            log::info!("[LOCATOR] No qualifying target, falling back to clipboard");
            copy_fallback(clipboard, text, "no input found, copied to clipboard")
        }
    }
}

/// Clipboard fallback shared by both failure paths.
pub fn copy_fallback(
    clipboard: &mut dyn ClipboardSink,
    text: &str,
    detail: &str,
) -> Result<InsertOutcome, InsertError> {
    clipboard
        .write_text(text)
        .map_err(InsertError::ClipboardDenied)?;
    log::info!("[CLIPBOARD] Copied {} chars ({})", text.len(), detail);
    Ok(InsertOutcome::clipboard(detail))
}
