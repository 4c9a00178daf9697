//! Deferred invokables: argument capture now, dispatch later.
//!
//! A deferred invokable snapshots its full argument tuple by value at
//! construction, so the call no longer depends on call-site argument
//! lifetime. Dispatch replays a clone of the snapshot any number of times.

use crate::args::ArgList;
use crate::error::InvokeError;
use crate::identity::{CallableId, ReceiverId};
use crate::invokable::Invokable;

/// Type-erased dispatch for heterogeneous deferred collections.
///
/// A scheduler holding `Box<dyn ErasedDispatch>` can drive deferred calls
/// with different signatures without knowing any return type: results are
/// dropped, errors surface unchanged.
pub trait ErasedDispatch {
	/// Dispatches the captured call, discarding the result.
	fn dispatch_erased(&self) -> Result<(), InvokeError>;
}

/// Deferred call over a free function.
pub struct DeferredStatic<R, A: ArgList> {
	func: Option<A::Fn<R>>,
	args: A,
}

impl<R, A: ArgList> DeferredStatic<R, A> {
	/// Captures `args` for later dispatch through `func`.
	pub fn new(func: A::Fn<R>, args: A) -> Self {
		Self {
			func: Some(func),
			args,
		}
	}

	/// Captures `args` with no function bound.
	///
	/// Dispatching fails with [`InvokeError::UnsetFunction`].
	pub fn unset(args: A) -> Self {
		Self { func: None, args }
	}

	/// Identity of the wrapped function, `None` while unset.
	pub fn callable_id(&self) -> Option<CallableId> {
		self.func.map(CallableId::of_fn::<R, A>)
	}
}

impl<R, A: ArgList + Clone> DeferredStatic<R, A> {
	/// Replays the captured arguments against the function.
	pub fn dispatch(&self) -> Result<R, InvokeError> {
		let Some(func) = self.func else {
			return Err(InvokeError::UnsetFunction);
		};
		Ok(A::call_fn(func, self.args.clone()))
	}
}

impl<R, A: ArgList + Clone> ErasedDispatch for DeferredStatic<R, A> {
	fn dispatch_erased(&self) -> Result<(), InvokeError> {
		self.dispatch().map(drop)
	}
}

/// Deferred call over a receiver/method pair.
///
/// The receiver is a bare non-owning pointer, exactly as on
/// [`crate::BoundInvokable`]; keeping it alive is the caller's obligation.
pub struct DeferredBound<C, R, A: ArgList> {
	receiver: *mut C,
	method: A::Method<C, R>,
	args: A,
}

impl<C, R, A: ArgList> DeferredBound<C, R, A> {
	/// Captures `args` for later dispatch of `method` on `receiver`.
	///
	/// # Safety
	///
	/// A non-null `receiver` must point to a live `C` for as long as this
	/// deferred call can be dispatched, and no other reference to the
	/// receiver may be active while [`DeferredBound::dispatch`] runs.
	pub unsafe fn new(receiver: *mut C, method: A::Method<C, R>, args: A) -> Self {
		Self {
			receiver,
			method,
			args,
		}
	}

	/// Identity of the wrapped method.
	pub fn callable_id(&self) -> Option<CallableId> {
		Some(CallableId::of_method::<C, R, A>(self.method))
	}

	/// Identity of the bound receiver, `None` while null.
	pub fn receiver_id(&self) -> Option<ReceiverId> {
		(!self.receiver.is_null()).then(|| ReceiverId::from_ptr(self.receiver))
	}

	/// Whether this deferred call targets the given receiver.
	pub fn matches_receiver(&self, receiver: ReceiverId) -> bool {
		self.receiver_id() == Some(receiver)
	}
}

impl<C, R, A: ArgList + Clone> DeferredBound<C, R, A> {
	/// Replays the captured arguments against the method.
	///
	/// Only the receiver is checked before the replay; the method reference
	/// on this variant cannot be unset.
	pub fn dispatch(&self) -> Result<R, InvokeError> {
		if self.receiver.is_null() {
			return Err(InvokeError::UnsetReceiver);
		}
		// Safety: non-null receivers are live and unaliased per the `new`
		// contract.
		let receiver = unsafe { &mut *self.receiver };
		Ok(A::call_method(self.method, receiver, self.args.clone()))
	}
}

impl<C, R, A: ArgList + Clone> ErasedDispatch for DeferredBound<C, R, A> {
	fn dispatch_erased(&self) -> Result<(), InvokeError> {
		self.dispatch().map(drop)
	}
}

/// Deferred call over an owned invokable of either variant.
///
/// Owns the wrapped invokable: dropping the deferred call drops it too,
/// unless it is released first with [`DeferredCall::into_inner`].
pub struct DeferredCall<R, A: ArgList> {
	invokable: Box<dyn Invokable<R, A>>,
	args: A,
}

impl<R, A: ArgList> DeferredCall<R, A> {
	/// Captures `args` for later dispatch through `invokable`.
	pub fn new(invokable: Box<dyn Invokable<R, A>>, args: A) -> Self {
		Self { invokable, args }
	}

	/// Releases the wrapped invokable back to the caller.
	pub fn into_inner(self) -> Box<dyn Invokable<R, A>> {
		self.invokable
	}
}

impl<R, A: ArgList + Clone> DeferredCall<R, A> {
	/// Replays the captured arguments against the wrapped invokable.
	///
	/// Unset errors from the wrapped invokable surface unchanged.
	pub fn dispatch(&self) -> Result<R, InvokeError> {
		self.invokable.invoke(self.args.clone())
	}
}

impl<R, A: ArgList + Clone> ErasedDispatch for DeferredCall<R, A> {
	fn dispatch_erased(&self) -> Result<(), InvokeError> {
		self.dispatch().map(drop)
	}
}
