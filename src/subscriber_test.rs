use crate::error::{ComponentInfo, ErrorContext, StreamError, StringError};
use crate::signal::{Ack, Signal};
use crate::subscriber::{CallbackSubscriber, Subscriber};
use std::sync::{Arc, Mutex};

fn sample_error() -> StreamError {
  StreamError::new(
    Box::new(StringError("boom".to_string())),
    ErrorContext::new(),
    ComponentInfo::new("stage".to_string(), "MapStage".to_string()),
  )
}

#[test]
fn test_callback_subscriber_dispatches_next() {
  let received = Arc::new(Mutex::new(Vec::new()));
  let sink = Arc::clone(&received);
  let mut subscriber =
    CallbackSubscriber::new().on_next(move |v: i64| sink.lock().unwrap().push(v));

  let ack = subscriber.on_signal(Signal::Next(7));

  assert_eq!(ack, Ack::Continue);
  assert_eq!(*received.lock().unwrap(), vec![7]);
}

#[test]
fn test_callback_subscriber_dispatches_error() {
  let received = Arc::new(Mutex::new(Vec::new()));
  let sink = Arc::clone(&received);
  let mut subscriber = CallbackSubscriber::<i64>::new()
    .on_error(move |e| sink.lock().unwrap().push(e.source.to_string()));

  let ack = subscriber.on_signal(Signal::Error(sample_error()));

  assert_eq!(ack, Ack::Terminated);
  assert_eq!(*received.lock().unwrap(), vec!["boom".to_string()]);
}

#[test]
fn test_callback_subscriber_dispatches_complete() {
  let completed = Arc::new(Mutex::new(0));
  let sink = Arc::clone(&completed);
  let mut subscriber =
    CallbackSubscriber::<i64>::new().on_complete(move || *sink.lock().unwrap() += 1);

  let ack = subscriber.on_signal(Signal::Complete);

  assert_eq!(ack, Ack::Terminated);
  assert_eq!(*completed.lock().unwrap(), 1);
}

#[test]
fn test_unset_slots_are_noops() {
  let mut subscriber = CallbackSubscriber::<i64>::default();

  assert_eq!(subscriber.on_signal(Signal::Next(1)), Ack::Continue);
  assert_eq!(
    subscriber.on_signal(Signal::Error(sample_error())),
    Ack::Terminated
  );
  assert_eq!(subscriber.on_signal(Signal::Complete), Ack::Terminated);
}
