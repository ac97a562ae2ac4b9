#![forbid(unsafe_code)]

//! The forwarding relay: capability answers computed live from current state.
//!
//! # Invariants
//!
//! 1. **Capability consistency**: for a method with no local override,
//!    [`DelegateRelay::responds_to`] answers true iff the delegate reference
//!    upgrades, the delegate declares the method, and the method is not
//!    ignored. Every answer is recomputed on every query; the relay caches
//!    nothing across reconfiguration.
//! 2. **Verbatim forwarding**: when `responds_to` affirms a method,
//!    [`DelegateRelay::invoke`] returns exactly the delegate's reply (or the
//!    local override's) — no substitution, no translation, delegate refusals
//!    included.
//! 3. **Block-list wins**: an ignored method behaves, for capability queries
//!    and invocation alike, as though the delegate did not implement it.
//!    Local overrides are the relay's *own* methods and are not masked.
//!
//! # Failure Modes
//!
//! | Mode | Condition | Behavior |
//! |------|-----------|----------|
//! | Contract violation | `invoke` on an unsupported method | `Err(NotSupported)`, fatal to that call only |
//! | Dead delegate | owning `Rc` dropped without `clear_delegate` | treated as detached |
//! | Reentrant invoke | delegate calls back into the same relay | `RefCell` double-borrow panic |
//!
//! # Stale capability answers
//!
//! The attached event source caches `responds_to` answers per attach point.
//! [`DelegateRelay::set_delegate`], [`DelegateRelay::set_ignored`], and
//! [`DelegateRelay::set_override`] are therefore not safe to call after the
//! source has cached a stale "does not respond" answer for a method whose
//! answer would now flip to true — the source will simply never invoke it.
//! Detach and reattach the relay to force a re-probe, or fix delegate and
//! ignore set before first attach. This is a documented limitation of the
//! surrounding framework contract, not something the relay works around.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use rtui_core::{
    Call, CallbackMethod, CallbackTarget, MethodSet, NotSupported, Reply, RowDelegate, dispatch,
};

/// Owning handle for a delegate shared with a relay.
pub type SharedDelegate = Rc<RefCell<dyn RowDelegate>>;

/// Non-owning delegate reference held by a relay.
///
/// The relay never extends the delegate's lifetime; once the last owning
/// [`Rc`] drops, the reference behaves exactly like a detached delegate.
pub type DelegateRef = Weak<RefCell<dyn RowDelegate>>;

/// Local handler for a single callback, taking precedence over forwarding.
pub type OverrideHandler = Box<dyn FnMut(Call) -> Reply>;

/// A drop-in callback target that forwards to an externally owned delegate,
/// minus an ignore set, plus local per-method overrides.
///
/// Configuration never fails and takes effect immediately; see the module
/// docs for the one hazard (caller-side capability caching).
#[derive(Default)]
pub struct DelegateRelay {
    delegate: Option<DelegateRef>,
    ignored: MethodSet,
    overrides: HashMap<CallbackMethod, OverrideHandler>,
}

impl DelegateRelay {
    /// A relay with no delegate, nothing ignored, and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A detached relay that starts out ignoring `ignored`.
    ///
    /// Useful when the block-list is known before the delegate is: e.g. a
    /// view using automatic row heights blocks `RowHeight` up front so the
    /// widget's own measurement stays in charge even after an application
    /// delegate implementing it is attached.
    #[must_use]
    pub fn with_ignored(ignored: MethodSet) -> Self {
        Self {
            ignored,
            ..Self::default()
        }
    }

    /// Replace the forwarding target.
    ///
    /// Capability queries and invocations reflect the new delegate
    /// immediately; no answer derived from the old one persists.
    pub fn set_delegate(&mut self, delegate: DelegateRef) {
        debug!("delegate attached");
        self.delegate = Some(delegate);
    }

    /// Detach the forwarding target.
    pub fn clear_delegate(&mut self) {
        debug!("delegate detached");
        self.delegate = None;
    }

    /// Whether a delegate is attached and still alive.
    #[must_use]
    pub fn has_delegate(&self) -> bool {
        self.upgrade_delegate().is_some()
    }

    /// Replace the whole block-list atomically; the old set is discarded,
    /// never merged. `MethodSet::empty()` clears all blocking.
    pub fn set_ignored(&mut self, ignored: MethodSet) {
        debug!(ignored = ?ignored, "ignore set replaced");
        self.ignored = ignored;
    }

    /// The current block-list.
    #[must_use]
    pub fn ignored(&self) -> MethodSet {
        self.ignored
    }

    /// Register a local handler for `method`, replacing any previous one.
    ///
    /// Local handlers are the relay's own method implementations: they win
    /// over forwarding for that method, answer capability queries even with
    /// no delegate attached, and are not masked by the ignore set.
    pub fn set_override(&mut self, method: CallbackMethod, handler: OverrideHandler) {
        debug!(method = method.name(), "local override registered");
        self.overrides.insert(method, handler);
    }

    /// Remove the local handler for `method`, restoring forwarding.
    pub fn clear_override(&mut self, method: CallbackMethod) {
        debug!(method = method.name(), "local override removed");
        self.overrides.remove(&method);
    }

    /// The methods currently answered by a local override.
    #[must_use]
    pub fn overridden(&self) -> MethodSet {
        self.overrides.keys().copied().collect()
    }

    /// The full set of methods `responds_to` would affirm right now — the
    /// snapshot an event source caches at attach time.
    #[must_use]
    pub fn capabilities(&self) -> MethodSet {
        let mut set = self.overridden();
        if let Some(delegate) = self.upgrade_delegate() {
            set |= delegate.borrow().implemented() - self.ignored;
        }
        set
    }

    fn upgrade_delegate(&self) -> Option<SharedDelegate> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    fn forwardable(&self, method: CallbackMethod) -> bool {
        if self.ignored.contains(method.flag()) {
            return false;
        }
        match self.upgrade_delegate() {
            Some(delegate) => delegate.borrow().implemented().contains(method.flag()),
            None => false,
        }
    }
}

impl CallbackTarget for DelegateRelay {
    fn responds_to(&self, method: CallbackMethod) -> bool {
        self.overrides.contains_key(&method) || self.forwardable(method)
    }

    fn invoke(&mut self, call: Call) -> Result<Reply, NotSupported> {
        let method = call.method();

        if let Some(handler) = self.overrides.get_mut(&method) {
            trace!(method = method.name(), "answering callback locally");
            return Ok(handler(call));
        }
        if self.ignored.contains(method.flag()) {
            debug!(method = method.name(), "callback invoked for ignored method");
            return Err(NotSupported { method });
        }
        let Some(delegate) = self.upgrade_delegate() else {
            debug!(method = method.name(), "callback invoked with no live delegate");
            return Err(NotSupported { method });
        };
        let mut delegate = delegate.borrow_mut();
        if !delegate.implemented().contains(method.flag()) {
            debug!(method = method.name(), "callback invoked for undeclared method");
            return Err(NotSupported { method });
        }
        trace!(method = method.name(), "forwarding callback to delegate");
        Ok(dispatch(&mut *delegate, call))
    }
}

impl fmt::Debug for DelegateRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateRelay")
            .field("delegate_alive", &self.has_delegate())
            .field("ignored", &self.ignored)
            .field("overridden", &self.overridden())
            .finish()
    }
}
