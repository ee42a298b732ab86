//! The insertion procedure end to end: focus choreography, splice
//! semantics, signal sequence, setter probe, and the fallback when a
//! host rejects the edit mid-flight.

mod helpers;

use helpers::{MockClipboard, MockPage, SurfaceCall};
use pretty_assertions::assert_eq;
use prompt_dock_lib::locator::element::{
    Element, ElementId, ElementKind, FieldSubtype, Selection,
};
use prompt_dock_lib::locator::rules::default_rules;
use prompt_dock_lib::locator::surface::ChangeSignal;
use prompt_dock_lib::locator::{deliver, DeliveryMethod};

fn focused_field(value: &str, selection: Selection) -> MockPage {
    let mut field = Element::new(ElementId(1), ElementKind::SingleLine(FieldSubtype::Text));
    field.value = value.to_string();
    field.selection = selection;
    MockPage::new(vec![field]).with_focus(ElementId(1))
}

#[test]
fn splices_payload_over_the_selection() {
    // "ab|cd" with "b" selected: replacing [1,2) with "X" yields "aXcd",
    // caret right after the payload.
    let mut page = focused_field("abcd", Selection { start: 1, end: 2 });
    let mut clipboard = MockClipboard::default();

    let outcome = deliver(&mut page, &mut clipboard, &default_rules(), "X").unwrap();

    assert!(outcome.succeeded);
    assert_eq!(outcome.method, DeliveryMethod::Inserted);
    let field = page.element(ElementId(1));
    assert_eq!(field.value, "aXcd");
    assert_eq!(field.selection, Selection::caret(2));
    assert_eq!(clipboard.content, None);
}

#[test]
fn bare_caret_preserves_surrounding_text() {
    let mut page = focused_field("hello", Selection::caret(5));
    let mut clipboard = MockClipboard::default();

    deliver(&mut page, &mut clipboard, &default_rules(), " world").unwrap();

    let field = page.element(ElementId(1));
    assert_eq!(field.value, "hello world");
    assert_eq!(field.selection, Selection::caret(11));
}

#[test]
fn editable_region_content_is_fully_replaced() {
    let mut region = Element::new(ElementId(1), ElementKind::EditableRegion);
    region.value = "old rich content".to_string();
    let mut page = MockPage::new(vec![region]).with_focus(ElementId(1));
    let mut clipboard = MockClipboard::default();

    deliver(&mut page, &mut clipboard, &default_rules(), "new text").unwrap();

    let element = page.element(ElementId(1));
    // Never a concatenation of old and new.
    assert_eq!(element.value, "new text");
    assert_eq!(element.selection, Selection::caret(8));
}

#[test]
fn activation_focus_and_settle_precede_the_mutation() {
    let mut page = focused_field("", Selection::caret(0));
    let mut clipboard = MockClipboard::default();

    deliver(&mut page, &mut clipboard, &default_rules(), "payload").unwrap();

    let mutation_at = page
        .calls
        .iter()
        .position(|c| matches!(c, SurfaceCall::WriteValue(..)))
        .expect("mutation happened");
    let prelude = &page.calls[..mutation_at];
    assert_eq!(
        prelude,
        &[
            SurfaceCall::Activate(ElementId(1)),
            SurfaceCall::Focus(ElementId(1)),
            SurfaceCall::Settle,
        ]
    );
}

#[test]
fn change_signals_fire_in_order_after_the_caret_lands() {
    let mut page = focused_field("", Selection::caret(0));
    let mut clipboard = MockClipboard::default();

    deliver(&mut page, &mut clipboard, &default_rules(), "hi").unwrap();

    assert_eq!(
        page.signals(ElementId(1)),
        vec![
            ChangeSignal::Input,
            ChangeSignal::Change,
            ChangeSignal::KeyUp,
            ChangeSignal::Paste,
        ]
    );
    // Caret is placed before any signal goes out.
    let caret_at = page
        .calls
        .iter()
        .position(|c| matches!(c, SurfaceCall::SetCaret(..)))
        .unwrap();
    let first_signal_at = page
        .calls
        .iter()
        .position(|c| matches!(c, SurfaceCall::Notify(..)))
        .unwrap();
    assert!(caret_at < first_signal_at);
}

#[test]
fn native_setter_is_used_only_when_the_surface_exposes_it() {
    let mut with_descriptor = focused_field("", Selection::caret(0));
    with_descriptor.native_setter_available = true;
    let mut clipboard = MockClipboard::default();
    deliver(&mut with_descriptor, &mut clipboard, &default_rules(), "x").unwrap();
    assert!(with_descriptor
        .calls
        .iter()
        .any(|c| matches!(c, SurfaceCall::WriteValueNative(..))));

    let mut without_descriptor = focused_field("", Selection::caret(0));
    deliver(&mut without_descriptor, &mut clipboard, &default_rules(), "x").unwrap();
    assert!(!without_descriptor
        .calls
        .iter()
        .any(|c| matches!(c, SurfaceCall::WriteValueNative(..))));
}

#[test]
fn rejected_edit_falls_back_to_clipboard() {
    let mut page = focused_field("abcd", Selection::caret(0));
    page.reject_edits = true;
    let mut clipboard = MockClipboard::default();

    let outcome = deliver(&mut page, &mut clipboard, &default_rules(), "payload").unwrap();

    assert!(outcome.succeeded);
    assert_eq!(outcome.method, DeliveryMethod::Clipboard);
    assert_eq!(clipboard.content.as_deref(), Some("payload"));
    // The field kept its original value.
    assert_eq!(page.element(ElementId(1)).value, "abcd");
}

#[test]
fn rejected_edit_with_denied_clipboard_is_a_hard_failure() {
    let mut page = focused_field("abcd", Selection::caret(0));
    page.reject_edits = true;
    let mut clipboard = MockClipboard { deny: true, ..Default::default() };

    let result = deliver(&mut page, &mut clipboard, &default_rules(), "payload");
    assert!(result.is_err());
}
