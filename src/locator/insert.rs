//! The insertion procedure: given a chosen element, deposit text into it.
//!
//! Editable regions get full plain-text replacement; fields get a selection
//! splice that preserves text around the selection. Both end with the caret
//! after the inserted text and the change-notification sequence fired.

use crate::locator::element::{Element, ElementKind, Selection};
use crate::locator::surface::{PageSurface, SurfaceError, NOTIFY_SEQUENCE};

/// Replace the selection `[start, end)` of `value` with `payload`.
///
/// Indices are char positions and are clamped to the value's length, so a
/// stale selection can never panic mid-insertion. Returns the new value and
/// the caret position (char index just past the inserted text).
pub fn splice(value: &str, selection: Selection, payload: &str) -> (String, usize) {
    let char_count = value.chars().count();
    let (start, end) = selection.normalized();
    let start = start.min(char_count);
    let end = end.min(char_count);

    let byte_of = |char_pos: usize| -> usize {
        value
            .char_indices()
            .nth(char_pos)
            .map(|(byte, _)| byte)
            .unwrap_or(value.len())
    };

    let mut out = String::with_capacity(value.len() + payload.len());
    out.push_str(&value[..byte_of(start)]);
    out.push_str(payload);
    out.push_str(&value[byte_of(end)..]);

    (out, start + payload.chars().count())
}

/// Deposit `text` into `element` on the given surface.
///
/// Activates and focuses the element, lets the host settle, mutates, then
/// probes the native setter and fires the notification sequence. Any
/// surface error bubbles up; the caller owns the clipboard fallback.
pub fn insert_into(
    surface: &mut dyn PageSurface,
    element: &Element,
    text: &str,
) -> Result<(), SurfaceError> {
    surface.activate(element.id)?;
    surface.focus(element.id)?;
    surface.settle();

    let caret = match element.kind {
        ElementKind::EditableRegion => {
            // Rich content is discarded wholesale; the payload is the new
            // content, never appended to what was there.
            surface.replace_content(element.id, text)?;
            text.chars().count()
        }
        ElementKind::Multiline | ElementKind::SingleLine(_) => {
            let (new_value, caret) = splice(&element.value, element.selection, text);
            surface.write_value(element.id, &new_value)?;
            // Some frameworks intercept the value setter itself rather than
            // listening for signals. Capability probe: if the surface
            // exposes the underlying descriptor, write through it too;
            // otherwise skip silently.
            if surface.write_value_native(element.id, &new_value) {
                log::debug!("[INSERT] Native setter path taken for {:?}", element.id);
            }
            caret
        }
    };

    surface.set_caret(element.id, caret)?;
    for signal in NOTIFY_SEQUENCE {
        surface.notify(element.id, signal);
    }
    Ok(())
}
