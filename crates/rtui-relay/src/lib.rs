#![forbid(unsafe_code)]

//! Selective delegate-forwarding relay for list-view callbacks.
//!
//! A list widget drives its optional callbacks against whatever implements
//! [`CallbackTarget`](rtui_core::CallbackTarget). [`DelegateRelay`] slots
//! into that position as a drop-in substitute for a directly-assigned
//! delegate: it answers capability queries from the *current* delegate and
//! ignore set, forwards calls verbatim, and lets a binding layer intercept
//! exactly the methods it cares about — either by registering a local
//! override or by blocking a method outright — without the widget ever
//! learning an intermediary exists.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use rtui_core::{Call, CallbackMethod, CallbackTarget, MethodSet, Reply, RowDelegate, RowId};
//! use rtui_relay::{DelegateRelay, SharedDelegate};
//!
//! struct Selection {
//!     last: Option<RowId>,
//! }
//!
//! impl RowDelegate for Selection {
//!     fn implemented(&self) -> MethodSet {
//!         CallbackMethod::DidSelectRow.flag()
//!     }
//!
//!     fn did_select_row(&mut self, row: RowId) {
//!         self.last = Some(row);
//!     }
//! }
//!
//! let selection = Rc::new(RefCell::new(Selection { last: None }));
//! let shared: SharedDelegate = selection.clone();
//!
//! let mut relay = DelegateRelay::new();
//! relay.set_delegate(Rc::downgrade(&shared));
//!
//! assert!(relay.responds_to(CallbackMethod::DidSelectRow));
//! assert!(!relay.responds_to(CallbackMethod::DidScroll));
//!
//! let reply = relay.invoke(Call::DidSelectRow { row: RowId::new(3) }).unwrap();
//! assert_eq!(reply, Reply::Unit);
//! assert_eq!(selection.borrow().last, Some(RowId::new(3)));
//! ```
//!
//! # Reconfiguration and cached capability answers
//!
//! Event sources usually probe capabilities once per attach and cache the
//! answers on their side. Reconfiguring a relay afterwards cannot flip a
//! cached "does not respond" back to true at the source; detach and
//! reattach to force a re-probe. See [`relay::DelegateRelay`] for the full
//! contract.

pub mod relay;

pub use relay::{DelegateRef, DelegateRelay, OverrideHandler, SharedDelegate};
