//! Property-based invariant tests for the method enumeration and dispatch.
//!
//! Verifies:
//! 1. MethodSet bit algebra agrees with contains_method
//! 2. methods() → collect() roundtrips any set
//! 3. Single-method sets are singletons
//! 4. dispatch delivers exactly one call, and Call::method names it

use proptest::prelude::*;

use rtui_core::{
    ActionRejected, Call, CallbackMethod, MethodSet, Reply, RowAction, RowDelegate, RowId,
    dispatch,
};

fn method_strategy() -> impl Strategy<Value = CallbackMethod> {
    prop::sample::select(CallbackMethod::ALL.to_vec())
}

fn method_set_strategy() -> impl Strategy<Value = MethodSet> {
    any::<u16>().prop_map(MethodSet::from_bits_truncate)
}

fn call_strategy() -> impl Strategy<Value = Call> {
    let action = prop::sample::select(vec![
        RowAction::Activate,
        RowAction::Remove,
        RowAction::MoveUp,
        RowAction::MoveDown,
    ]);
    (
        method_strategy(),
        any::<u32>().prop_map(RowId::new),
        any::<usize>(),
        any::<bool>(),
        action,
    )
        .prop_map(|(method, row, offset, decelerate, action)| match method {
            CallbackMethod::WillSelectRow => Call::WillSelectRow { row },
            CallbackMethod::DidSelectRow => Call::DidSelectRow { row },
            CallbackMethod::DidDeselectRow => Call::DidDeselectRow { row },
            CallbackMethod::RowHeight => Call::RowHeight { row },
            CallbackMethod::WillDisplayRow => Call::WillDisplayRow { row },
            CallbackMethod::DidEndDisplayingRow => Call::DidEndDisplayingRow { row },
            CallbackMethod::DidScroll => Call::DidScroll { offset },
            CallbackMethod::WillBeginDragging => Call::WillBeginDragging,
            CallbackMethod::DidEndDragging => Call::DidEndDragging { decelerate },
            CallbackMethod::PerformRowAction => Call::PerformRowAction { row, action },
        })
}

/// Records every typed callback as its generic `Call`.
#[derive(Default)]
struct Recorder {
    received: Vec<Call>,
}

impl RowDelegate for Recorder {
    fn implemented(&self) -> MethodSet {
        MethodSet::all()
    }

    fn will_select_row(&mut self, row: RowId) -> Option<RowId> {
        self.received.push(Call::WillSelectRow { row });
        Some(row)
    }

    fn did_select_row(&mut self, row: RowId) {
        self.received.push(Call::DidSelectRow { row });
    }

    fn did_deselect_row(&mut self, row: RowId) {
        self.received.push(Call::DidDeselectRow { row });
    }

    fn row_height(&mut self, row: RowId) -> u16 {
        self.received.push(Call::RowHeight { row });
        1
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
        Ok(())
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Set algebra agrees with contains_method
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn union_and_difference_track_membership(
        a in method_set_strategy(),
        b in method_set_strategy(),
        method in method_strategy(),
    ) {
        let in_a = a.contains_method(method);
        let in_b = b.contains_method(method);
        prop_assert_eq!((a | b).contains_method(method), in_a || in_b);
        prop_assert_eq!((a - b).contains_method(method), in_a && !in_b);
        prop_assert_eq!((a & b).contains_method(method), in_a && in_b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. methods() → collect() roundtrips any set
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn methods_collect_roundtrip(set in method_set_strategy()) {
        let collected: MethodSet = set.methods().collect();
        prop_assert_eq!(collected, set);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Single-method sets are singletons
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_flag_is_singleton(method in method_strategy()) {
        let methods: Vec<_> = method.flag().methods().collect();
        prop_assert_eq!(methods, vec![method]);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. dispatch delivers exactly one call, named by Call::method
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dispatch_delivers_exactly_the_call(call in call_strategy()) {
        let mut recorder = Recorder::default();
        let reply = dispatch(&mut recorder, call);

        prop_assert_eq!(recorder.received.len(), 1);
        prop_assert_eq!(recorder.received[0], call);
        prop_assert_eq!(recorder.received[0].method(), call.method());

        // Reply shape is fixed per method.
        match call.method() {
            CallbackMethod::WillSelectRow => {
                prop_assert!(matches!(reply, Reply::Selection(_)));
            }
            CallbackMethod::RowHeight => prop_assert!(matches!(reply, Reply::Height(_))),
            CallbackMethod::PerformRowAction => {
                prop_assert!(matches!(reply, Reply::Action(_)));
            }
            _ => prop_assert_eq!(reply, Reply::Unit),
        }
    }
}
