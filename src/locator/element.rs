//! Abstract model of a text-entry surface candidate.
//!
//! The locator never touches a concrete UI tree. It reasons over these
//! snapshots, which a `PageSurface` implementation produces however it can:
//! test fixtures build them by hand, the system surface synthesizes one for
//! the current caret owner.

/// Opaque handle to an element within one surface snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// Declared subtype of a single-line field.
///
/// Chat-style pages accept plain text, search boxes, and fields that
/// declare no subtype at all. Everything else (passwords, numbers, ...)
/// is not a text-entry surface for our purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSubtype {
    Text,
    Search,
    Unspecified,
    Password,
    Other,
}

/// What kind of text-entry surface an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Multi-line text field (textarea-like).
    Multiline,
    /// Single-line field with a declared subtype.
    SingleLine(FieldSubtype),
    /// Region explicitly marked editable (rich-text hosts).
    EditableRegion,
}

/// Rendered bounding box, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Selection range in char indices. `start == end` is a bare caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(position: usize) -> Self {
        Self { start: position, end: position }
    }

    /// Range with start <= end regardless of selection direction.
    pub fn normalized(&self) -> (usize, usize) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

/// Snapshot of one candidate element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub placeholder: Option<String>,
    pub read_only: bool,
    pub disabled: bool,
    pub bounds: Bounds,
    pub hidden: bool,
    pub opacity: f32,
    pub value: String,
    pub selection: Selection,
}

impl Element {
    /// A visible, enabled, empty element of the given kind. Callers adjust
    /// fields as needed via struct update.
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self {
            id,
            kind,
            placeholder: None,
            read_only: false,
            disabled: false,
            bounds: Bounds { x: 10.0, y: 10.0, width: 200.0, height: 24.0 },
            hidden: false,
            opacity: 1.0,
            value: String::new(),
            selection: Selection::caret(0),
        }
    }

    /// Whether this element counts as a writable text-entry surface:
    /// a multi-line field, a single-line field of an accepted subtype,
    /// or an editable region — and neither read-only nor disabled.
    pub fn qualifies(&self) -> bool {
        if self.read_only || self.disabled {
            return false;
        }
        match self.kind {
            ElementKind::Multiline | ElementKind::EditableRegion => true,
            ElementKind::SingleLine(subtype) => matches!(
                subtype,
                FieldSubtype::Text | FieldSubtype::Search | FieldSubtype::Unspecified
            ),
        }
    }

    /// Whether this element is actually rendered: non-zero size, not hidden,
    /// not fully transparent, and positioned in the non-negative quadrant.
    pub fn is_visible(&self) -> bool {
        self.bounds.width > 0.0
            && self.bounds.height > 0.0
            && !self.hidden
            && self.opacity > 0.0
            && self.bounds.x >= 0.0
            && self.bounds.y >= 0.0
    }
}
