#![forbid(unsafe_code)]

//! Generic invocation surface: calls, replies, and the dispatch table.
//!
//! An event source does not hold typed references to delegate methods; it
//! drives whatever sits behind a [`CallbackTarget`] through [`Call`] values
//! and reads results back as [`Reply`] values. [`dispatch`] is the explicit
//! dispatch table that routes a generic call to the matching typed method on
//! a [`RowDelegate`] — a total match over the fixed method enumeration, so
//! there is no reflection and nothing to get out of sync.
//!
//! # Invariants
//!
//! 1. **Verbatim forwarding**: [`dispatch`] passes arguments and replies
//!    through unchanged, including delegate-signaled refusals inside
//!    [`Reply::Action`].
//! 2. **Total coverage**: every [`Call`] variant maps to exactly one
//!    [`CallbackMethod`] ([`Call::method`]) and one trait method.
//! 3. **Fresh capability answers**: [`CallbackTarget::responds_to`] is
//!    computed from current state on every query; implementations must not
//!    memoize across reconfiguration.
//!
//! # Failure Modes
//!
//! | Mode | Condition | Behavior |
//! |------|-----------|----------|
//! | Contract violation | `invoke` on a method `responds_to` denies | `Err(NotSupported)`, loud |
//! | Delegate refusal | delegate declines a row action | `Ok(Reply::Action(Err(..)))`, verbatim |
//! | Delegate panic | delegate body panics | unwinds through, untouched |

use std::fmt;

use crate::delegate::{ActionRejected, RowAction, RowDelegate, RowId};
use crate::method::CallbackMethod;

/// A single callback invocation with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    /// See [`RowDelegate::will_select_row`].
    WillSelectRow { row: RowId },
    /// See [`RowDelegate::did_select_row`].
    DidSelectRow { row: RowId },
    /// See [`RowDelegate::did_deselect_row`].
    DidDeselectRow { row: RowId },
    /// See [`RowDelegate::row_height`].
    RowHeight { row: RowId },
    /// See [`RowDelegate::will_display_row`].
    WillDisplayRow { row: RowId },
    /// See [`RowDelegate::did_end_displaying_row`].
    DidEndDisplayingRow { row: RowId },
    /// See [`RowDelegate::did_scroll`].
    DidScroll { offset: usize },
    /// See [`RowDelegate::will_begin_dragging`].
    WillBeginDragging,
    /// See [`RowDelegate::did_end_dragging`].
    DidEndDragging { decelerate: bool },
    /// See [`RowDelegate::perform_row_action`].
    PerformRowAction { row: RowId, action: RowAction },
}

impl Call {
    /// The interface method this call targets.
    #[must_use]
    pub const fn method(&self) -> CallbackMethod {
        match self {
            Self::WillSelectRow { .. } => CallbackMethod::WillSelectRow,
            Self::DidSelectRow { .. } => CallbackMethod::DidSelectRow,
            Self::DidDeselectRow { .. } => CallbackMethod::DidDeselectRow,
            Self::RowHeight { .. } => CallbackMethod::RowHeight,
            Self::WillDisplayRow { .. } => CallbackMethod::WillDisplayRow,
            Self::DidEndDisplayingRow { .. } => CallbackMethod::DidEndDisplayingRow,
            Self::DidScroll { .. } => CallbackMethod::DidScroll,
            Self::WillBeginDragging => CallbackMethod::WillBeginDragging,
            Self::DidEndDragging { .. } => CallbackMethod::DidEndDragging,
            Self::PerformRowAction { .. } => CallbackMethod::PerformRowAction,
        }
    }
}

/// The result of a forwarded callback, carried back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The callback returns nothing.
    Unit,
    /// Selection veto/redirect from [`RowDelegate::will_select_row`].
    Selection(Option<RowId>),
    /// Row height in terminal cells.
    Height(u16),
    /// Outcome of a row action, including the delegate's refusal.
    Action(Result<(), ActionRejected>),
}

/// Route a generic [`Call`] to the matching typed method on `delegate`.
///
/// Performs no capability check: callers gate on
/// [`RowDelegate::implemented`] or a [`CallbackTarget`]'s capability query
/// first. Arguments and replies pass through unchanged.
pub fn dispatch(delegate: &mut dyn RowDelegate, call: Call) -> Reply {
    match call {
        Call::WillSelectRow { row } => Reply::Selection(delegate.will_select_row(row)),
        Call::DidSelectRow { row } => {
            delegate.did_select_row(row);
            Reply::Unit
        }
        Call::DidDeselectRow { row } => {
            delegate.did_deselect_row(row);
            Reply::Unit
        }
        Call::RowHeight { row } => Reply::Height(delegate.row_height(row)),
        Call::WillDisplayRow { row } => {
            delegate.will_display_row(row);
            Reply::Unit
        }
        Call::DidEndDisplayingRow { row } => {
            delegate.did_end_displaying_row(row);
            Reply::Unit
        }
        Call::DidScroll { offset } => {
            delegate.did_scroll(offset);
            Reply::Unit
        }
        Call::WillBeginDragging => {
            delegate.will_begin_dragging();
            Reply::Unit
        }
        Call::DidEndDragging { decelerate } => {
            delegate.did_end_dragging(decelerate);
            Reply::Unit
        }
        Call::PerformRowAction { row, action } => {
            Reply::Action(delegate.perform_row_action(row, action))
        }
    }
}

/// Invocation reached a target that should have reported the method as
/// unsupported.
///
/// This is a contract violation on the *calling* side: the framework
/// contract is to consult [`CallbackTarget::responds_to`] before invoking.
/// Failing loudly here keeps bugs in a caller's optional-method dispatch
/// visible; silently ignoring the call would bury them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSupported {
    /// The method the caller tried to invoke.
    pub method: CallbackMethod,
}

impl fmt::Display for NotSupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "callback '{}' invoked on a target that does not support it",
            self.method.name()
        )
    }
}

impl std::error::Error for NotSupported {}

/// The surface an event source drives: capability query plus generic
/// invocation over the fixed method set.
///
/// # Caller-side caching
///
/// Event sources typically probe [`responds_to`](Self::responds_to) once per
/// attach, cache the answers themselves, and afterwards dispatch directly.
/// Implementations therefore compute every answer fresh — but a target
/// reconfigured *after* attach cannot flip a cached "does not respond"
/// answer back to true at the source. Callers needing runtime-variable
/// routing must re-trigger the source's probe (detach and reattach). This is
/// a contract on consumers of the whole system, not something a target can
/// work around.
pub trait CallbackTarget {
    /// Whether the target currently handles `method`, computed fresh.
    fn responds_to(&self, method: CallbackMethod) -> bool;

    /// Invoke `call` on the target.
    ///
    /// # Errors
    ///
    /// [`NotSupported`] when the target would have answered `false` to
    /// [`responds_to`](Self::responds_to) for this call's method.
    fn invoke(&mut self, call: Call) -> Result<Reply, NotSupported>;
}
