//! Failure taxonomy shared by direct and deferred invocation.

/// Error raised when an invokable is driven while one of its references is
/// unset.
///
/// Both variants are detected before the wrapped callable runs, so a failed
/// invocation has no partial side effects. Failures raised by the callable's
/// own body are not translated; they unwind through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvokeError {
	/// The wrapped function or method reference is unset.
	#[error("invokable has no function bound")]
	UnsetFunction,
	/// The receiver reference of a bound invokable is unset.
	#[error("invokable has no receiver bound")]
	UnsetReceiver,
}
