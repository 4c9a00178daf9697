use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;

use super::*;

type Adder = StaticInvokable<i32, (i32,)>;
type CounterBound = BoundInvokable<Counter, i32, (i32,)>;

fn add_one(n: i32) -> i32 {
	n + 1
}

fn add_ten(n: i32) -> i32 {
	n + 10
}

#[derive(Default)]
struct Counter {
	calls: usize,
	last: i32,
}

impl Counter {
	fn bump(&mut self, n: i32) -> i32 {
		self.calls += 1;
		self.last = n;
		n + 2
	}
}

#[test]
fn static_invokables_over_one_function_compare_equal() {
	let first = Adder::new(add_one);
	let second = Adder::new(add_one);
	assert_eq!(first, second);
	assert!(first.matches_callable(CallableId::of_fn::<i32, (i32,)>(add_one)));
	assert!(first != Adder::new(add_ten));
}

#[test]
fn bound_equality_ignores_receiver_identity() {
	let mut first_recv = Counter::default();
	let mut second_recv = Counter::default();
	let first = unsafe { CounterBound::new(&mut first_recv, Counter::bump) };
	let second = unsafe { CounterBound::new(&mut second_recv, Counter::bump) };
	assert_eq!(first, second);
	assert!(first.matches_receiver(ReceiverId::of(&first_recv)));
	assert!(!first.matches_receiver(ReceiverId::of(&second_recv)));
}

#[test]
fn static_and_bound_are_never_equal() {
	let mut recv = Counter::default();
	let bound = unsafe { CounterBound::new(&mut recv, Counter::bump) };
	let stat = Adder::new(add_one);
	assert!(stat != bound);
	assert!(bound != stat);
	assert!(!Adder::unset().same_callable(&CounterBound::unset()));
}

#[test]
fn dyn_equality_matches_same_callable() {
	let first: Box<dyn Invokable<i32, (i32,)>> = Box::new(Adder::new(add_one));
	let second: Box<dyn Invokable<i32, (i32,)>> = Box::new(Adder::new(add_one));
	assert!(*first == *second);
}

#[test]
fn object_identity_differs_for_equal_invokables() {
	let first = Adder::new(add_one);
	let second = Adder::new(add_one);
	assert_eq!(first, second);
	assert_ne!(InvokableId::of(&first), InvokableId::of(&second));
}

#[test]
fn static_invoke_calls_the_function() {
	assert_eq!(Adder::new(add_one).invoke((5,)), Ok(6));
	assert!(!Adder::new(add_one).is_bound());
}

#[test]
fn bound_invoke_calls_the_method_on_the_receiver() {
	let mut recv = Counter::default();
	let bound = unsafe { CounterBound::new(&mut recv, Counter::bump) };
	assert!(bound.is_bound());
	assert_eq!(bound.invoke((5,)), Ok(7));
	assert_eq!(bound.invoke((9,)), Ok(11));
	drop(bound);
	assert_eq!(recv.calls, 2);
	assert_eq!(recv.last, 9);
}

#[test]
fn unset_static_fails_with_unset_function() {
	assert_eq!(Adder::unset().invoke((5,)), Err(InvokeError::UnsetFunction));
	assert_eq!(Invokable::callable_id(&Adder::unset()), None);
}

#[test]
fn unset_bound_checks_the_receiver_first() {
	let unset = CounterBound::unset();
	assert_eq!(unset.invoke((5,)), Err(InvokeError::UnsetReceiver));
	assert_eq!(unset.receiver_id(), None);
	assert!(!unset.matches_receiver(ReceiverId::of(&Counter::default())));
}

#[test]
fn deferred_static_replays_the_captured_snapshot() {
	let mut supplied = 10;
	let deferred = DeferredStatic::<i32, (i32,)>::new(add_one, (supplied,));
	supplied = 99;
	assert_eq!(deferred.dispatch(), Ok(11));
	assert_eq!(deferred.dispatch(), Ok(11));
	assert_eq!(supplied, 99);
}

#[test]
fn deferred_bound_records_each_replay() {
	let mut recv = Counter::default();
	let deferred =
		unsafe { DeferredBound::<Counter, i32, (i32,)>::new(&mut recv, Counter::bump, (4,)) };
	assert_eq!(deferred.dispatch(), Ok(6));
	assert_eq!(deferred.dispatch(), Ok(6));
	assert_eq!(deferred.dispatch(), Ok(6));
	drop(deferred);
	assert_eq!(recv.calls, 3);
	assert_eq!(recv.last, 4);
}

#[test]
fn deferred_unset_paths_fail_before_replay() {
	let unset = DeferredStatic::<i32, (i32,)>::unset((5,));
	assert_eq!(unset.dispatch(), Err(InvokeError::UnsetFunction));
	assert_eq!(unset.callable_id(), None);

	let orphan = unsafe {
		DeferredBound::<Counter, i32, (i32,)>::new(std::ptr::null_mut(), Counter::bump, (5,))
	};
	assert_eq!(orphan.dispatch(), Err(InvokeError::UnsetReceiver));
	assert_eq!(orphan.receiver_id(), None);
}

static PINGS: AtomicUsize = AtomicUsize::new(0);

fn ping() {
	PINGS.fetch_add(1, Ordering::SeqCst);
}

fn format_pair(label: &'static str, value: f64) -> String {
	format!("{label}={value}")
}

#[test]
fn erased_dispatch_drives_mixed_signatures() {
	let queue: Vec<Box<dyn ErasedDispatch>> = vec![
		Box::new(DeferredStatic::<(), ()>::new(ping, ())),
		Box::new(DeferredStatic::<String, (&'static str, f64)>::new(
			format_pair,
			("ratio", 2.5),
		)),
	];
	for deferred in &queue {
		assert_eq!(deferred.dispatch_erased(), Ok(()));
	}
	assert_eq!(PINGS.load(Ordering::SeqCst), 1);
}

#[test]
fn deferred_call_owns_and_releases_its_invokable() {
	let deferred = DeferredCall::new(Box::new(Adder::new(add_one)), (41,));
	assert_eq!(deferred.dispatch(), Ok(42));
	let released = deferred.into_inner();
	assert_eq!(released.invoke((1,)), Ok(2));
}
