#![forbid(unsafe_code)]

//! Fixed enumeration of the list-view callback interface.
//!
//! Every optional callback a delegate may implement is named here, once.
//! Event sources iterate [`CallbackMethod::ALL`] to probe capabilities at
//! attach time; relays and delegates describe capabilities as a
//! [`MethodSet`]. Adding a callback to the interface means adding a variant,
//! a flag bit, and a `Call` variant — the compiler flags every dispatch
//! site that needs updating.

use bitflags::bitflags;

/// A single optional callback in the list-view delegate interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackMethod {
    /// Selection is about to move to a row; the delegate may veto or redirect.
    WillSelectRow,
    /// A row became selected.
    DidSelectRow,
    /// A row lost its selection.
    DidDeselectRow,
    /// Height of a row in terminal cells.
    RowHeight,
    /// A row is about to scroll into the viewport.
    WillDisplayRow,
    /// A row scrolled out of the viewport.
    DidEndDisplayingRow,
    /// The viewport offset changed.
    DidScroll,
    /// The user started a drag gesture on the view.
    WillBeginDragging,
    /// The drag gesture ended.
    DidEndDragging,
    /// The user requested an action on a row; the delegate may refuse.
    PerformRowAction,
}

bitflags! {
    /// A set of [`CallbackMethod`]s, used both for capability declarations
    /// and for ignore lists.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MethodSet: u16 {
        const WILL_SELECT_ROW = 1 << 0;
        const DID_SELECT_ROW = 1 << 1;
        const DID_DESELECT_ROW = 1 << 2;
        const ROW_HEIGHT = 1 << 3;
        const WILL_DISPLAY_ROW = 1 << 4;
        const DID_END_DISPLAYING_ROW = 1 << 5;
        const DID_SCROLL = 1 << 6;
        const WILL_BEGIN_DRAGGING = 1 << 7;
        const DID_END_DRAGGING = 1 << 8;
        const PERFORM_ROW_ACTION = 1 << 9;
    }
}

impl CallbackMethod {
    /// Every method in the interface, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::WillSelectRow,
        Self::DidSelectRow,
        Self::DidDeselectRow,
        Self::RowHeight,
        Self::WillDisplayRow,
        Self::DidEndDisplayingRow,
        Self::DidScroll,
        Self::WillBeginDragging,
        Self::DidEndDragging,
        Self::PerformRowAction,
    ];

    /// Stable snake_case name, used in logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WillSelectRow => "will_select_row",
            Self::DidSelectRow => "did_select_row",
            Self::DidDeselectRow => "did_deselect_row",
            Self::RowHeight => "row_height",
            Self::WillDisplayRow => "will_display_row",
            Self::DidEndDisplayingRow => "did_end_displaying_row",
            Self::DidScroll => "did_scroll",
            Self::WillBeginDragging => "will_begin_dragging",
            Self::DidEndDragging => "did_end_dragging",
            Self::PerformRowAction => "perform_row_action",
        }
    }

    /// The single-bit [`MethodSet`] for this method.
    #[must_use]
    pub const fn flag(self) -> MethodSet {
        match self {
            Self::WillSelectRow => MethodSet::WILL_SELECT_ROW,
            Self::DidSelectRow => MethodSet::DID_SELECT_ROW,
            Self::DidDeselectRow => MethodSet::DID_DESELECT_ROW,
            Self::RowHeight => MethodSet::ROW_HEIGHT,
            Self::WillDisplayRow => MethodSet::WILL_DISPLAY_ROW,
            Self::DidEndDisplayingRow => MethodSet::DID_END_DISPLAYING_ROW,
            Self::DidScroll => MethodSet::DID_SCROLL,
            Self::WillBeginDragging => MethodSet::WILL_BEGIN_DRAGGING,
            Self::DidEndDragging => MethodSet::DID_END_DRAGGING,
            Self::PerformRowAction => MethodSet::PERFORM_ROW_ACTION,
        }
    }
}

impl MethodSet {
    /// Whether the set contains `method`.
    #[must_use]
    pub fn contains_method(self, method: CallbackMethod) -> bool {
        self.contains(method.flag())
    }

    /// Iterate the methods in the set, in declaration order.
    pub fn methods(self) -> impl Iterator<Item = CallbackMethod> {
        CallbackMethod::ALL
            .into_iter()
            .filter(move |m| self.contains(m.flag()))
    }
}

impl From<CallbackMethod> for MethodSet {
    fn from(method: CallbackMethod) -> Self {
        method.flag()
    }
}

impl FromIterator<CallbackMethod> for MethodSet {
    fn from_iter<I: IntoIterator<Item = CallbackMethod>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, method| set | method.flag())
    }
}
