//! Address-identity tokens used for equality and removal.
//!
//! Identity here is pointer identity: the address of a function, a receiver,
//! or a registered instance. Addresses are whatever codegen produced, so two
//! generic instantiations with identical bodies may fold to one address.

use crate::args::ArgList;
use crate::invokable::Invokable;

/// Identity of the callable wrapped by an invokable.
///
/// The free/method discriminant is part of the identity: a method reference
/// never matches a free-function reference, whatever their addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallableId {
	/// Address of a free function.
	Free(usize),
	/// Address of a method taking a receiver.
	Method(usize),
}

impl CallableId {
	/// Identity of a free function.
	pub fn of_fn<R, A: ArgList>(func: A::Fn<R>) -> Self {
		Self::Free(A::fn_addr(func))
	}

	/// Identity of a method.
	pub fn of_method<C, R, A: ArgList>(method: A::Method<C, R>) -> Self {
		Self::Method(A::method_addr(method))
	}
}

/// Identity of a receiver object, taken from its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiverId(usize);

impl ReceiverId {
	/// Identity of a live receiver.
	pub fn of<C>(receiver: &C) -> Self {
		Self(std::ptr::from_ref(receiver) as usize)
	}

	/// Identity taken from a bare receiver pointer.
	pub fn from_ptr<C>(receiver: *const C) -> Self {
		Self(receiver as usize)
	}
}

/// Object identity of one invokable instance.
///
/// Distinct from delegate equality: two invokables over the same function
/// compare equal yet carry different `InvokableId`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvokableId(usize);

impl InvokableId {
	/// Identity of an invokable instance by address.
	pub fn of<R, A: ArgList>(invokable: &dyn Invokable<R, A>) -> Self {
		Self(std::ptr::from_ref(invokable) as *const () as usize)
	}
}
