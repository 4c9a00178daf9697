//! Owning registry of invokables with bulk invocation and identity removal.
//!
//! A [`Registry`] collects boxed [`Invokable`]s sharing one call signature,
//! fans invocations out to every member, and removes members by three
//! distinct identities: the wrapped callable, the bound receiver, or the
//! registered instance itself. Depend on this crate to get the whole
//! delegate surface; the capability types are re-exported from
//! `fanout_invoke`.

use std::fmt;

pub use fanout_invoke::{
	ArgList, BoundInvokable, CallableId, DeferredBound, DeferredCall, DeferredStatic,
	ErasedDispatch, Invokable, InvokableId, InvokeError, ReceiverId, StaticInvokable,
};

/// Ownership toggle for the removal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposal {
	/// Drop removed invokables immediately.
	Destroy,
	/// Hand removed invokables back to the caller, still fully usable.
	Reclaim,
}

/// Owning collection of invokables sharing one call signature.
///
/// Fan-out order is insertion order: deterministic within one invocation
/// call, not otherwise meaningful. The registry owns every invokable added
/// to it and drops each exactly once, unless a removal with
/// [`Disposal::Reclaim`] hands it back first.
///
/// There is no internal locking and no scheduling: every operation runs
/// synchronously on the caller's thread, so a registry shared across threads
/// needs external mutual exclusion around every operation.
pub struct Registry<R, A: ArgList> {
	entries: Vec<Box<dyn Invokable<R, A>>>,
}

impl<R, A: ArgList> Registry<R, A> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Adds an invokable, taking ownership, and returns its object identity.
	pub fn add(&mut self, invokable: Box<dyn Invokable<R, A>>) -> InvokableId {
		let id = InvokableId::of(invokable.as_ref());
		self.entries.push(invokable);
		tracing::trace!(total = self.entries.len(), "registry.add");
		id
	}

	/// Number of held invokables.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the registry holds nothing.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates the held invokables in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &dyn Invokable<R, A>> {
		self.entries.iter().map(|entry| entry.as_ref())
	}

	/// Invokes every held invokable once, in insertion order.
	///
	/// The first failure aborts the remaining fan-out and propagates; there
	/// is no partial-failure isolation.
	pub fn invoke_all(&self, args: A) -> Result<(), InvokeError>
	where
		A: Clone,
	{
		tracing::trace!(total = self.entries.len(), "registry.invoke_all");
		for entry in &self.entries {
			entry.invoke(args.clone())?;
		}
		Ok(())
	}

	/// Invokes every held invokable once, collecting results in fan-out
	/// order.
	///
	/// Aborts on the first failure like [`Registry::invoke_all`]; results of
	/// the invokables that already ran are discarded with the fan-out.
	pub fn invoke_all_collecting(&self, args: A) -> Result<Vec<R>, InvokeError>
	where
		A: Clone,
	{
		tracing::trace!(total = self.entries.len(), "registry.invoke_all_collecting");
		let mut results = Vec::with_capacity(self.entries.len());
		for entry in &self.entries {
			results.push(entry.invoke(args.clone())?);
		}
		Ok(results)
	}

	/// Removes every invokable whose callable has the given identity.
	///
	/// A method identity only ever matches bound entries and a free-function
	/// identity only unbound ones, so the caller does not need to know which
	/// kind is stored. Zero matches is a no-op.
	pub fn remove_by_callable(
		&mut self,
		id: CallableId,
		disposal: Disposal,
	) -> Vec<Box<dyn Invokable<R, A>>> {
		let removed: Vec<_> = self
			.entries
			.extract_if(.., |entry| entry.matches_callable(id))
			.collect();
		tracing::trace!(removed = removed.len(), "registry.remove_by_callable");
		match disposal {
			Disposal::Destroy => Vec::new(),
			Disposal::Reclaim => removed,
		}
	}

	/// Removes every invokable wrapping the given free function.
	pub fn remove_by_function(
		&mut self,
		func: A::Fn<R>,
		disposal: Disposal,
	) -> Vec<Box<dyn Invokable<R, A>>> {
		self.remove_by_callable(CallableId::of_fn::<R, A>(func), disposal)
	}

	/// Removes every invokable wrapping the given method, on any receiver.
	pub fn remove_by_method<C>(
		&mut self,
		method: A::Method<C, R>,
		disposal: Disposal,
	) -> Vec<Box<dyn Invokable<R, A>>> {
		self.remove_by_callable(CallableId::of_method::<C, R, A>(method), disposal)
	}

	/// Removes every bound invokable targeting the given receiver.
	///
	/// Unbound invokables never match. Zero matches is a no-op.
	pub fn remove_by_receiver(
		&mut self,
		receiver: ReceiverId,
		disposal: Disposal,
	) -> Vec<Box<dyn Invokable<R, A>>> {
		let removed: Vec<_> = self
			.entries
			.extract_if(.., |entry| entry.matches_receiver(receiver))
			.collect();
		tracing::trace!(removed = removed.len(), "registry.remove_by_receiver");
		match disposal {
			Disposal::Destroy => Vec::new(),
			Disposal::Reclaim => removed,
		}
	}

	/// Removes one specific invokable instance, independent of delegate
	/// equality.
	///
	/// Returns the instance under [`Disposal::Reclaim`]; a reclaimed
	/// invokable stays fully usable, since removal from the registry is not
	/// invalidation.
	pub fn remove_by_id(
		&mut self,
		id: InvokableId,
		disposal: Disposal,
	) -> Option<Box<dyn Invokable<R, A>>> {
		let index = self
			.entries
			.iter()
			.position(|entry| InvokableId::of(entry.as_ref()) == id)?;
		let removed = self.entries.remove(index);
		tracing::trace!(?id, "registry.remove_by_id");
		match disposal {
			Disposal::Destroy => None,
			Disposal::Reclaim => Some(removed),
		}
	}
}

impl<R, A: ArgList> Default for Registry<R, A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R, A: ArgList> Extend<Box<dyn Invokable<R, A>>> for Registry<R, A> {
	fn extend<I: IntoIterator<Item = Box<dyn Invokable<R, A>>>>(&mut self, iter: I) {
		for invokable in iter {
			self.add(invokable);
		}
	}
}

impl<R, A: ArgList> fmt::Debug for Registry<R, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("len", &self.entries.len())
			.finish()
	}
}
