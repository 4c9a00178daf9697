//! Canonical invokable types for the fanout delegate system.
//!
//! An invokable wraps one callable unit (a free function or a bound
//! receiver/method pair) behind the uniform [`Invokable`] contract, so
//! heterogeneous callables sharing one call signature can live in a single
//! collection, be invoked uniformly, and be matched by identity. A signature
//! is a result type plus an argument tuple; see [`ArgList`].
//!
//! Direct variants ([`StaticInvokable`], [`BoundInvokable`]) take their
//! arguments at invoke time. Deferred variants ([`DeferredStatic`],
//! [`DeferredBound`], [`DeferredCall`]) snapshot the arguments by value at
//! construction and replay them on dispatch; [`ErasedDispatch`] erases the
//! signature so deferred calls of mixed signatures can be driven from one
//! queue.
//!
//! Bound variants never own their receiver. The receiver is a bare pointer
//! whose validity is the caller's obligation for the invokable's whole
//! lifetime; there is no destruction tracking. The `unsafe` constructors
//! state that contract.

mod args;
mod deferred;
mod direct;
mod error;
mod identity;
mod invokable;

pub use args::ArgList;
pub use deferred::{DeferredBound, DeferredCall, DeferredStatic, ErasedDispatch};
pub use direct::{BoundInvokable, StaticInvokable};
pub use error::InvokeError;
pub use identity::{CallableId, InvokableId, ReceiverId};
pub use invokable::Invokable;

#[cfg(test)]
mod tests;
