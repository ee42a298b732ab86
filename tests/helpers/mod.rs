//! Shared test fixtures: an in-memory page surface and clipboard.
//!
//! `MockPage` plays the role of a live page: a flat element list in
//! document order, an optional focus holder, and a call log the tests
//! assert ordering and side effects against.

#![allow(dead_code)]

use prompt_dock_lib::locator::element::{Element, ElementId, Selection};
use prompt_dock_lib::locator::surface::{
    ChangeSignal, ClipboardSink, PageSurface, SurfaceError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Activate(ElementId),
    Focus(ElementId),
    Settle,
    ReplaceContent(ElementId, String),
    WriteValue(ElementId, String),
    WriteValueNative(ElementId, String),
    SetCaret(ElementId, usize),
    Notify(ElementId, ChangeSignal),
}

pub struct MockPage {
    pub elements: Vec<Element>,
    pub focused: Option<ElementId>,
    pub calls: Vec<SurfaceCall>,
    /// Whether the surface exposes the underlying native value setter.
    pub native_setter_available: bool,
    /// When set, every mutation fails — simulates a host that throws
    /// mid-insertion.
    pub reject_edits: bool,
}

impl MockPage {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            focused: None,
            calls: Vec::new(),
            native_setter_available: false,
            reject_edits: false,
        }
    }

    pub fn with_focus(mut self, id: ElementId) -> Self {
        self.focused = Some(id);
        self
    }

    pub fn element(&self, id: ElementId) -> &Element {
        self.elements
            .iter()
            .find(|el| el.id == id)
            .expect("element exists")
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element, SurfaceError> {
        self.elements
            .iter_mut()
            .find(|el| el.id == id)
            .ok_or(SurfaceError::UnknownElement(id))
    }

    fn check_rejection(&self) -> Result<(), SurfaceError> {
        if self.reject_edits {
            Err(SurfaceError::EditRejected("host rejected the edit".into()))
        } else {
            Ok(())
        }
    }

    /// The change signals fired at `id`, in order.
    pub fn signals(&self, id: ElementId) -> Vec<ChangeSignal> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Notify(target, signal) if *target == id => Some(*signal),
                _ => None,
            })
            .collect()
    }

    /// Whether any element content was touched at all.
    pub fn mutated(&self) -> bool {
        self.calls.iter().any(|call| {
            matches!(
                call,
                SurfaceCall::ReplaceContent(..)
                    | SurfaceCall::WriteValue(..)
                    | SurfaceCall::WriteValueNative(..)
            )
        })
    }
}

impl PageSurface for MockPage {
    fn focused(&self) -> Option<Element> {
        let id = self.focused?;
        self.elements.iter().find(|el| el.id == id).cloned()
    }

    fn elements(&self) -> Vec<Element> {
        self.elements.clone()
    }

    fn activate(&mut self, id: ElementId) -> Result<(), SurfaceError> {
        self.element_mut(id)?;
        self.calls.push(SurfaceCall::Activate(id));
        Ok(())
    }

    fn focus(&mut self, id: ElementId) -> Result<(), SurfaceError> {
        self.element_mut(id)?;
        self.focused = Some(id);
        self.calls.push(SurfaceCall::Focus(id));
        Ok(())
    }

    fn settle(&mut self) {
        self.calls.push(SurfaceCall::Settle);
    }

    fn replace_content(&mut self, id: ElementId, text: &str) -> Result<(), SurfaceError> {
        self.check_rejection()?;
        let element = self.element_mut(id)?;
        element.value = text.to_string();
        self.calls.push(SurfaceCall::ReplaceContent(id, text.to_string()));
        Ok(())
    }

    fn write_value(&mut self, id: ElementId, value: &str) -> Result<(), SurfaceError> {
        self.check_rejection()?;
        let element = self.element_mut(id)?;
        element.value = value.to_string();
        self.calls.push(SurfaceCall::WriteValue(id, value.to_string()));
        Ok(())
    }

    fn write_value_native(&mut self, id: ElementId, value: &str) -> bool {
        if !self.native_setter_available {
            return false;
        }
        if let Ok(element) = self.element_mut(id) {
            element.value = value.to_string();
            self.calls
                .push(SurfaceCall::WriteValueNative(id, value.to_string()));
            true
        } else {
            false
        }
    }

    fn set_caret(&mut self, id: ElementId, position: usize) -> Result<(), SurfaceError> {
        let element = self.element_mut(id)?;
        element.selection = Selection::caret(position);
        self.calls.push(SurfaceCall::SetCaret(id, position));
        Ok(())
    }

    fn notify(&mut self, id: ElementId, signal: ChangeSignal) {
        self.calls.push(SurfaceCall::Notify(id, signal));
    }
}

#[derive(Default)]
pub struct MockClipboard {
    pub content: Option<String>,
    pub deny: bool,
    pub writes: u32,
}

impl ClipboardSink for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        if self.deny {
            return Err("clipboard access denied".to_string());
        }
        self.writes += 1;
        self.content = Some(text.to_string());
        Ok(())
    }
}
