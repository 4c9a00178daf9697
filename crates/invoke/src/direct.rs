//! Direct invokable variants: free functions and bound methods.

use std::fmt;

use crate::args::ArgList;
use crate::error::InvokeError;
use crate::identity::{CallableId, ReceiverId};
use crate::invokable::Invokable;

/// Invokable wrapping a free function.
pub struct StaticInvokable<R, A: ArgList> {
	func: Option<A::Fn<R>>,
}

impl<R, A: ArgList> StaticInvokable<R, A> {
	/// Creates an invokable over a free function.
	pub fn new(func: A::Fn<R>) -> Self {
		Self { func: Some(func) }
	}

	/// Creates an invokable with no function bound.
	///
	/// Invoking it fails with [`InvokeError::UnsetFunction`].
	pub fn unset() -> Self {
		Self { func: None }
	}
}

impl<R, A: ArgList> Invokable<R, A> for StaticInvokable<R, A> {
	fn invoke(&self, args: A) -> Result<R, InvokeError> {
		let Some(func) = self.func else {
			return Err(InvokeError::UnsetFunction);
		};
		Ok(A::call_fn(func, args))
	}

	fn is_bound(&self) -> bool {
		false
	}

	fn callable_id(&self) -> Option<CallableId> {
		self.func.map(CallableId::of_fn::<R, A>)
	}
}

impl<R, A: ArgList> Clone for StaticInvokable<R, A> {
	fn clone(&self) -> Self {
		Self { func: self.func }
	}
}

impl<R, A: ArgList> fmt::Debug for StaticInvokable<R, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StaticInvokable")
			.field("callable", &Invokable::callable_id(self))
			.finish()
	}
}

impl<R, A: ArgList> PartialEq for StaticInvokable<R, A> {
	fn eq(&self, other: &Self) -> bool {
		self.same_callable(other)
	}
}

impl<C, R, A: ArgList> PartialEq<BoundInvokable<C, R, A>> for StaticInvokable<R, A> {
	fn eq(&self, other: &BoundInvokable<C, R, A>) -> bool {
		self.same_callable(other)
	}
}

/// Invokable wrapping a receiver and a method on the receiver's type.
///
/// The receiver is never owned: the wrapper holds a bare pointer and the
/// caller keeps the receiver alive (see [`BoundInvokable::new`]). Nothing
/// here can detect a destroyed receiver.
pub struct BoundInvokable<C, R, A: ArgList> {
	receiver: *mut C,
	method: Option<A::Method<C, R>>,
}

impl<C, R, A: ArgList> BoundInvokable<C, R, A> {
	/// Creates an invokable over a receiver and a method.
	///
	/// # Safety
	///
	/// A non-null `receiver` must point to a live `C` for as long as this
	/// invokable (or any clone of it) can be invoked, and no other reference
	/// to the receiver may be active while [`Invokable::invoke`] runs.
	pub unsafe fn new(receiver: *mut C, method: A::Method<C, R>) -> Self {
		Self {
			receiver,
			method: Some(method),
		}
	}

	/// Creates an invokable with no receiver and no method bound.
	///
	/// Invoking it fails with [`InvokeError::UnsetReceiver`].
	pub fn unset() -> Self {
		Self {
			receiver: std::ptr::null_mut(),
			method: None,
		}
	}

	/// Identity of the bound receiver, `None` while unset.
	pub fn receiver_id(&self) -> Option<ReceiverId> {
		(!self.receiver.is_null()).then(|| ReceiverId::from_ptr(self.receiver))
	}
}

impl<C, R, A: ArgList> Invokable<R, A> for BoundInvokable<C, R, A> {
	fn invoke(&self, args: A) -> Result<R, InvokeError> {
		if self.receiver.is_null() {
			return Err(InvokeError::UnsetReceiver);
		}
		let Some(method) = self.method else {
			return Err(InvokeError::UnsetFunction);
		};
		// Safety: non-null receivers are live and unaliased per the `new`
		// contract.
		let receiver = unsafe { &mut *self.receiver };
		Ok(A::call_method(method, receiver, args))
	}

	fn is_bound(&self) -> bool {
		true
	}

	fn callable_id(&self) -> Option<CallableId> {
		self.method.map(CallableId::of_method::<C, R, A>)
	}

	fn matches_receiver(&self, receiver: ReceiverId) -> bool {
		self.receiver_id() == Some(receiver)
	}
}

impl<C, R, A: ArgList> Clone for BoundInvokable<C, R, A> {
	fn clone(&self) -> Self {
		Self {
			receiver: self.receiver,
			method: self.method,
		}
	}
}

impl<C, R, A: ArgList> fmt::Debug for BoundInvokable<C, R, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BoundInvokable")
			.field("receiver", &self.receiver_id())
			.field("callable", &Invokable::callable_id(self))
			.finish()
	}
}

impl<C, C2, R, A: ArgList> PartialEq<BoundInvokable<C2, R, A>> for BoundInvokable<C, R, A> {
	fn eq(&self, other: &BoundInvokable<C2, R, A>) -> bool {
		self.same_callable(other)
	}
}

impl<C, R, A: ArgList> PartialEq<StaticInvokable<R, A>> for BoundInvokable<C, R, A> {
	fn eq(&self, other: &StaticInvokable<R, A>) -> bool {
		self.same_callable(other)
	}
}
