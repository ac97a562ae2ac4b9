#![forbid(unsafe_code)]

//! Core: the list-view callback interface, method sets, and dispatch.
//!
//! # Role in RelayTUI
//! `rtui-core` defines the *interface* both sides of a delegate relay agree
//! on. It owns the fixed method enumeration, the typed delegate trait, and
//! the generic invocation surface that event sources drive.
//!
//! # Primary responsibilities
//! - **[`CallbackMethod`] / [`MethodSet`]**: the enumerable method set and
//!   set algebra over it.
//! - **[`RowDelegate`]**: the typed, optional-callback trait application
//!   delegates implement.
//! - **[`Call`] / [`Reply`] / [`dispatch`]**: the generic invocation surface
//!   and the dispatch table routing it to typed methods.
//! - **[`CallbackTarget`]**: the capability-query + invocation surface an
//!   event source consumes.
//!
//! # How it fits in the system
//! The relay (`rtui-relay`) implements [`CallbackTarget`] on top of a
//! non-owning delegate reference; list widgets consume [`CallbackTarget`]
//! without knowing whether a relay sits in between. This crate has no
//! opinion on ownership wiring and performs no I/O.
//!
//! # Example
//!
//! ```
//! use rtui_core::{Call, CallbackMethod, MethodSet, Reply, RowDelegate, RowId, dispatch};
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
//! let mut delegate = Selection { last: None };
//! let reply = dispatch(&mut delegate, Call::DidSelectRow { row: RowId::new(3) });
//! assert_eq!(reply, Reply::Unit);
//! assert_eq!(delegate.last, Some(RowId::new(3)));
//! ```

pub mod call;
pub mod delegate;
pub mod method;

#[cfg(feature = "test-helpers")]
pub mod testing;

pub use call::{Call, CallbackTarget, NotSupported, Reply, dispatch};
pub use delegate::{ActionRejected, DEFAULT_ROW_HEIGHT, RowAction, RowDelegate, RowId};
pub use method::{CallbackMethod, MethodSet};
