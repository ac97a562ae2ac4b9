#![forbid(unsafe_code)]

//! Scripted delegates for exercising callback targets in tests.
//!
//! Gated behind the `test-helpers` feature so downstream crates can share
//! one recording delegate instead of redefining it per test suite.

use crate::call::Call;
use crate::delegate::{ActionRejected, DEFAULT_ROW_HEIGHT, RowAction, RowDelegate, RowId};
use crate::method::MethodSet;

/// A delegate whose capability set and replies are fully scripted.
///
/// Every typed callback records itself into [`received`](Self::received) as
/// the equivalent [`Call`], which makes "the delegate saw exactly these
/// invocations, in this order, with these arguments" a single assertion.
#[derive(Debug, Clone)]
pub struct ScriptDelegate {
    implemented: MethodSet,
    /// Every callback received, in order.
    pub received: Vec<Call>,
    /// Scripted reply for `will_select_row`; `None` keeps the pass-through
    /// default.
    pub select_reply: Option<Option<RowId>>,
    /// Scripted reply for `row_height`.
    pub height: u16,
    /// When set, `perform_row_action` refuses with this reason.
    pub reject_reason: Option<String>,
}

impl ScriptDelegate {
    /// A delegate declaring exactly `implemented`.
    #[must_use]
    pub fn new(implemented: MethodSet) -> Self {
        Self {
            implemented,
            received: Vec::new(),
            select_reply: None,
            height: DEFAULT_ROW_HEIGHT,
            reject_reason: None,
        }
    }

    /// Script the `row_height` reply.
    #[must_use]
    pub fn with_height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    /// Script the `will_select_row` reply.
    #[must_use]
    pub fn with_select_reply(mut self, reply: Option<RowId>) -> Self {
        self.select_reply = Some(reply);
        self
    }

    /// Make every row action fail with `reason`.
    #[must_use]
    pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
        self.reject_reason = Some(reason.into());
        self
    }
}

impl RowDelegate for ScriptDelegate {
    fn implemented(&self) -> MethodSet {
        self.implemented
    }

    fn will_select_row(&mut self, row: RowId) -> Option<RowId> {
        self.received.push(Call::WillSelectRow { row });
        self.select_reply.unwrap_or(Some(row))
    }

    fn did_select_row(&mut self, row: RowId) {
        self.received.push(Call::DidSelectRow { row });
    }

    fn did_deselect_row(&mut self, row: RowId) {
        self.received.push(Call::DidDeselectRow { row });
    }

    fn row_height(&mut self, row: RowId) -> u16 {
        self.received.push(Call::RowHeight { row });
        self.height
    }

    fn will_display_row(&mut self, row: RowId) {
        self.received.push(Call::WillDisplayRow { row });
    }

    fn did_end_displaying_row(&mut self, row: RowId) {
        self.received.push(Call::DidEndDisplayingRow { row });
    }

    fn did_scroll(&mut self, offset: usize) {
        self.received.push(Call::DidScroll { offset });
    }

    fn will_begin_dragging(&mut self) {
        self.received.push(Call::WillBeginDragging);
    }

    fn did_end_dragging(&mut self, decelerate: bool) {
        self.received.push(Call::DidEndDragging { decelerate });
    }

    fn perform_row_action(&mut self, row: RowId, action: RowAction) -> Result<(), ActionRejected> {
        self.received.push(Call::PerformRowAction { row, action });
        match &self.reject_reason {
            Some(reason) => Err(ActionRejected::new(reason.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::{Reply, dispatch};
    use crate::method::CallbackMethod;

    #[test]
    fn records_calls_in_order() {
        let mut delegate = ScriptDelegate::new(MethodSet::all());
        dispatch(&mut delegate, Call::DidScroll { offset: 2 });
        dispatch(&mut delegate, Call::DidSelectRow { row: RowId::new(5) });
        assert_eq!(
            delegate.received,
            vec![
                Call::DidScroll { offset: 2 },
                Call::DidSelectRow { row: RowId::new(5) },
            ]
        );
    }

    #[test]
    fn scripted_replies_surface_through_dispatch() {
        let mut delegate = ScriptDelegate::new(CallbackMethod::RowHeight.flag())
            .with_height(3)
            .with_select_reply(None)
            .rejecting("read-only");

        let row = RowId::new(1);
        assert_eq!(dispatch(&mut delegate, Call::RowHeight { row }), Reply::Height(3));
        assert_eq!(
            dispatch(&mut delegate, Call::WillSelectRow { row }),
            Reply::Selection(None)
        );
        assert_eq!(
            dispatch(
                &mut delegate,
                Call::PerformRowAction {
                    row,
                    action: RowAction::Remove,
                }
            ),
            Reply::Action(Err(ActionRejected::new("read-only")))
        );
    }
}
