//! End-to-end delegate lifecycle against the public surface only.

use fanout_registry::{
	BoundInvokable, DeferredBound, DeferredCall, DeferredStatic, Disposal, ErasedDispatch,
	InvokeError, ReceiverId, Registry, StaticInvokable,
};
use pretty_assertions::assert_eq;

type Celsius = f64;
type Reading = Registry<String, (Celsius,)>;
type ReadingStatic = StaticInvokable<String, (Celsius,)>;
type ReadingBound = BoundInvokable<Display, String, (Celsius,)>;

fn format_reading(value: Celsius) -> String {
	format!("{value:.1}C")
}

#[derive(Default)]
struct Display {
	shown: Vec<String>,
}

impl Display {
	fn show(&mut self, value: Celsius) -> String {
		let line = format!("display: {value:.1}");
		self.shown.push(line.clone());
		line
	}
}

#[test]
fn listener_lifecycle_register_invoke_remove() {
	let mut display = Display::default();
	let mut readings = Reading::new();

	readings.add(Box::new(ReadingStatic::new(format_reading)));
	let bound_id = readings.add(Box::new(unsafe {
		ReadingBound::new(&mut display, Display::show)
	}));

	let mut lines = readings.invoke_all_collecting((21.5,)).unwrap();
	lines.sort_unstable();
	assert_eq!(lines, vec!["21.5C".to_string(), "display: 21.5".to_string()]);

	// Removing the free function leaves only the bound listener.
	readings.remove_by_function(format_reading, Disposal::Destroy);
	assert_eq!(
		readings.invoke_all_collecting((3.0,)).unwrap(),
		vec!["display: 3.0".to_string()]
	);

	// Removal by object identity hands the listener back, still usable.
	let reclaimed = readings.remove_by_id(bound_id, Disposal::Reclaim).unwrap();
	assert!(readings.is_empty());
	assert_eq!(reclaimed.invoke((7.25,)), Ok("display: 7.2".to_string()));

	// A reclaimed listener can be deferred with a captured argument.
	let deferred = DeferredCall::new(reclaimed, (0.0,));
	assert_eq!(deferred.dispatch(), Ok("display: 0.0".to_string()));
	drop(deferred);

	assert_eq!(display.shown.len(), 4);
}

#[test]
fn receiver_removal_only_evicts_that_receiver() {
	let mut left = Display::default();
	let mut right = Display::default();
	let mut readings = Reading::new();
	readings.add(Box::new(unsafe { ReadingBound::new(&mut left, Display::show) }));
	readings.add(Box::new(unsafe { ReadingBound::new(&mut right, Display::show) }));

	readings.remove_by_receiver(ReceiverId::of(&left), Disposal::Destroy);
	readings.invoke_all((1.0,)).unwrap();
	drop(readings);

	assert!(left.shown.is_empty());
	assert_eq!(right.shown.len(), 1);
}

#[test]
fn deferred_queue_dispatches_mixed_signatures() {
	let mut display = Display::default();

	let queue: Vec<Box<dyn ErasedDispatch>> = vec![
		Box::new(DeferredStatic::<String, (Celsius,)>::new(format_reading, (1.0,))),
		Box::new(unsafe {
			DeferredBound::<Display, String, (Celsius,)>::new(&mut display, Display::show, (2.0,))
		}),
		Box::new(DeferredStatic::<String, (Celsius,)>::unset((3.0,))),
	];

	assert_eq!(queue[0].dispatch_erased(), Ok(()));
	assert_eq!(queue[1].dispatch_erased(), Ok(()));
	assert_eq!(queue[2].dispatch_erased(), Err(InvokeError::UnsetFunction));
	drop(queue);

	assert_eq!(display.shown, vec!["display: 2.0".to_string()]);
}
