//! The uniform invocation contract.

use crate::args::ArgList;
use crate::error::InvokeError;
use crate::identity::{CallableId, ReceiverId};

/// Something that can be invoked with a fixed argument list.
///
/// Exactly one of unbound/bound holds for an invokable's whole lifetime.
/// The match predicates are pure and total; the registry drives them for
/// removal and callers may use them for manual lookups.
pub trait Invokable<R, A: ArgList> {
	/// Invokes the wrapped callable with `args`.
	///
	/// Fails with [`InvokeError::UnsetFunction`] when the callable reference
	/// is unset and, on bound invokables, with [`InvokeError::UnsetReceiver`]
	/// when the receiver reference is unset. Both checks run before the
	/// underlying call.
	fn invoke(&self, args: A) -> Result<R, InvokeError>;

	/// Whether this invokable targets a receiver/method pair.
	fn is_bound(&self) -> bool;

	/// Identity of the wrapped callable, `None` while unset.
	fn callable_id(&self) -> Option<CallableId>;

	/// Whether the wrapped callable has the given identity.
	fn matches_callable(&self, id: CallableId) -> bool {
		self.callable_id() == Some(id)
	}

	/// Whether this invokable is bound to the given receiver.
	///
	/// Always false for unbound invokables.
	fn matches_receiver(&self, _receiver: ReceiverId) -> bool {
		false
	}

	/// Delegate equality: same variant and same callable identity.
	///
	/// Receiver identity is deliberately not part of this; two bound
	/// invokables over one method but different receivers compare equal.
	fn same_callable(&self, other: &dyn Invokable<R, A>) -> bool {
		self.is_bound() == other.is_bound() && self.callable_id() == other.callable_id()
	}
}

impl<R, A: ArgList> PartialEq for dyn Invokable<R, A> {
	fn eq(&self, other: &Self) -> bool {
		self.same_callable(other)
	}
}
