//! The seam between the locator engine and whatever UI it writes into.
//!
//! Production uses `crate::inject::SystemSurface` (synthetic keyboard input
//! against the system caret); tests use an in-memory page model. The engine
//! only ever talks to these traits.

use thiserror::Error;

use crate::locator::element::{Element, ElementId};

/// Change-notification signals fired after a mutation so reactive UIs
/// observing the element detect the new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSignal {
    Input,
    Change,
    KeyUp,
    Paste,
}

/// The full sequence fired after every successful mutation.
pub const NOTIFY_SEQUENCE: [ChangeSignal; 4] = [
    ChangeSignal::Input,
    ChangeSignal::Change,
    ChangeSignal::KeyUp,
    ChangeSignal::Paste,
];

/// An element-level operation failed on the concrete surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no element with id {0:?}")]
    UnknownElement(ElementId),
    #[error("element rejected the edit: {0}")]
    EditRejected(String),
    #[error("input synthesis failed: {0}")]
    Synthesis(String),
}

/// One live snapshot of a page or foreign application UI.
///
/// Mutating methods act on the real surface; the snapshot accessors must
/// reflect those mutations so the engine can verify its own work in tests.
pub trait PageSurface {
    /// The element currently holding input focus, if any.
    fn focused(&self) -> Option<Element>;

    /// All candidate elements in document order. Surfaces that cannot
    /// enumerate foreign UI return an empty list.
    fn elements(&self) -> Vec<Element>;

    /// Simulated pointer activation, fired before focusing so hosts that
    /// arm their composer on click behave as if the user clicked.
    fn activate(&mut self, id: ElementId) -> Result<(), SurfaceError>;

    /// Move input focus to the element.
    fn focus(&mut self, id: ElementId) -> Result<(), SurfaceError>;

    /// Short pause after focusing so the host's own focus handling settles
    /// before we mutate. Scheduling nicety, not a correctness guarantee.
    fn settle(&mut self) {}

    /// Replace an editable region's entire content with plain text,
    /// discarding any rich content it held.
    fn replace_content(&mut self, id: ElementId, text: &str) -> Result<(), SurfaceError>;

    /// Write a field's full new value through the standard path.
    fn write_value(&mut self, id: ElementId, value: &str) -> Result<(), SurfaceError>;

    /// Write through the native value setter, bypassing any override the
    /// hosting framework installed. Returns false when the surface exposes
    /// no such descriptor; callers skip silently in that case.
    fn write_value_native(&mut self, id: ElementId, value: &str) -> bool;

    /// Place the caret (char index).
    fn set_caret(&mut self, id: ElementId, position: usize) -> Result<(), SurfaceError>;

    /// Fire one change-notification signal. Best effort.
    fn notify(&mut self, id: ElementId, signal: ChangeSignal);
}

/// Destination for the clipboard fallback.
pub trait ClipboardSink {
    /// Overwrite the clipboard with the text. Idempotent by contract:
    /// writing the same text twice leaves the same content.
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}
