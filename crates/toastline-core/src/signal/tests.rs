use super::*;
use std::thread;

fn recorder() -> (Arc<Mutex<Vec<i32>>>, impl Fn(&i32) + Send + Sync + 'static) {
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = values.clone();
    (values, move |value: &i32| sink.lock().push(*value))
}

#[test]
fn test_values_arrive_in_firing_order() {
    let signal = Signal::new();
    let (values, observer) = recorder();
    signal.subscribe(observer);

    signal.fire(1);
    signal.fire(2);
    signal.fire(3);

    assert_eq!(*values.lock(), vec![1, 2, 3]);
}

#[test]
fn test_no_replay_of_earlier_values() {
    let signal = Signal::new();
    signal.fire(1);
    signal.fire(2);
    signal.fire(3);

    let (values, observer) = recorder();
    signal.subscribe(observer);

    signal.fire(4);
    signal.fire(5);
    signal.fire(6);

    let values = values.lock();
    assert_eq!(*values, vec![4, 5, 6]);
    assert!(!values.contains(&1));
    assert!(!values.contains(&2));
    assert!(!values.contains(&3));
}

#[test]
fn test_concurrent_fire_delivers_every_value_once() {
    let signal = Arc::new(Signal::new());
    let (values, observer) = recorder();
    signal.subscribe(observer);

    thread::scope(|scope| {
        for value in 1..=3 {
            let signal = signal.clone();
            scope.spawn(move || {
                signal.fire(value);
            });
        }
    });

    let mut values = values.lock().clone();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_observers_run_in_registration_order() {
    let signal = Signal::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let order = order.clone();
        signal.subscribe(move |_: &()| order.lock().push(tag));
    }

    assert_eq!(signal.fire(()), 3);
    assert_eq!(*order.lock(), vec!["first", "second", "third"]);
}

#[test]
fn test_panicking_observer_does_not_stop_traversal() {
    let signal = Signal::named("panics");
    let (values, observer) = recorder();

    signal.subscribe(|_: &i32| panic!("observer failure"));
    signal.subscribe(observer);

    assert_eq!(signal.fire(7), 2);
    assert_eq!(*values.lock(), vec![7]);
}

#[test]
fn test_subscribe_during_fire_applies_to_next_fire() {
    let signal = Arc::new(Signal::new());
    let (values, observer) = recorder();
    let observer = Arc::new(observer);

    let inner = signal.clone();
    let late = observer.clone();
    let added = Arc::new(Mutex::new(false));
    let added_flag = added.clone();
    signal.subscribe(move |_: &i32| {
        let mut added = added_flag.lock();
        if !*added {
            *added = true;
            let late = late.clone();
            inner.subscribe(move |value: &i32| late(value));
        }
    });

    signal.fire(1);
    assert!(values.lock().is_empty());

    signal.fire(2);
    assert_eq!(*values.lock(), vec![2]);
    assert_eq!(signal.observer_count(), 2);
}

#[test]
fn test_reentrant_fire_does_not_deadlock() {
    let signal = Arc::new(Signal::new());
    let (values, observer) = recorder();
    signal.subscribe(observer);

    let inner = signal.clone();
    signal.subscribe(move |value: &i32| {
        if *value == 1 {
            inner.fire(2);
        }
    });

    signal.fire(1);
    assert_eq!(*values.lock(), vec![1, 2]);
}

#[test]
fn test_counters_and_debug() {
    let signal: Signal<u8> = Signal::named("dismissed");
    assert_eq!(signal.observer_count(), 0);
    assert_eq!(signal.fire(0), 0);
    assert_eq!(signal.fire_count(), 1);

    signal.subscribe(|_| {});
    assert_eq!(signal.observer_count(), 1);

    let debug = format!("{:?}", signal);
    assert!(debug.contains("dismissed"));
    assert!(debug.contains("observers: 1"));
}
