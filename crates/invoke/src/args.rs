//! Argument-tuple plumbing behind every invokable signature.
//!
//! A call signature is a result type plus an argument tuple. [`ArgList`]
//! maps the tuple onto the concrete free-function and method pointer types
//! for that signature, applies them, and extracts the addresses used for
//! identity matching.

/// Argument tuple of a call signature.
///
/// Implemented for tuples of arity 0 through 8. The associated pointer types
/// normalize to concrete function-pointer types once the tuple is known,
/// which is what lets plain function and method names coerce at call sites
/// without casts.
pub trait ArgList: Sized {
	/// Free-function pointer taking this argument list.
	type Fn<R>: Copy;
	/// Method pointer taking a mutable receiver plus this argument list.
	type Method<C, R>: Copy;

	/// Applies a free function to the tuple.
	fn call_fn<R>(func: Self::Fn<R>, args: Self) -> R;

	/// Applies a method to a receiver and the tuple.
	fn call_method<C, R>(method: Self::Method<C, R>, receiver: &mut C, args: Self) -> R;

	/// Address of a free function, for identity matching.
	fn fn_addr<R>(func: Self::Fn<R>) -> usize;

	/// Address of a method, for identity matching.
	fn method_addr<C, R>(method: Self::Method<C, R>) -> usize;
}

impl ArgList for () {
	type Fn<R> = fn() -> R;
	type Method<C, R> = fn(&mut C) -> R;

	fn call_fn<R>(func: Self::Fn<R>, (): Self) -> R {
		func()
	}

	fn call_method<C, R>(method: Self::Method<C, R>, receiver: &mut C, (): Self) -> R {
		method(receiver)
	}

	fn fn_addr<R>(func: Self::Fn<R>) -> usize {
		func as usize
	}

	fn method_addr<C, R>(method: Self::Method<C, R>) -> usize {
		method as usize
	}
}

macro_rules! impl_arg_list {
	($($ty:ident . $idx:tt),+) => {
		impl<$($ty,)+> ArgList for ($($ty,)+) {
			type Fn<R> = fn($($ty),+) -> R;
			type Method<C, R> = fn(&mut C, $($ty),+) -> R;

			fn call_fn<R>(func: Self::Fn<R>, args: Self) -> R {
				func($(args.$idx),+)
			}

			fn call_method<C, R>(method: Self::Method<C, R>, receiver: &mut C, args: Self) -> R {
				method(receiver, $(args.$idx),+)
			}

			fn fn_addr<R>(func: Self::Fn<R>) -> usize {
				func as usize
			}

			fn method_addr<C, R>(method: Self::Method<C, R>) -> usize {
				method as usize
			}
		}
	};
}

impl_arg_list!(T0.0);
impl_arg_list!(T0.0, T1.1);
impl_arg_list!(T0.0, T1.1, T2.2);
impl_arg_list!(T0.0, T1.1, T2.2, T3.3);
impl_arg_list!(T0.0, T1.1, T2.2, T3.3, T4.4);
impl_arg_list!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5);
impl_arg_list!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6);
impl_arg_list!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7);
