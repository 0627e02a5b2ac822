use crate::error::{BoxError, ComponentInfo, ErrorContext, StreamError, StringError};
use crate::operators::MapStage;
use crate::signal::{Ack, Signal};
use crate::subscriber::{CallbackSubscriber, Subscriber};
use std::sync::{Arc, Mutex};

type Events = Arc<Mutex<Vec<String>>>;

fn recording(events: &Events) -> Box<dyn Subscriber<i64> + Send> {
  let next_events = Arc::clone(events);
  let error_events = Arc::clone(events);
  let complete_events = Arc::clone(events);
  Box::new(
    CallbackSubscriber::new()
      .on_next(move |v: i64| next_events.lock().unwrap().push(format!("next:{v}")))
      .on_error(move |e| {
        error_events.lock().unwrap().push(format!(
          "error:{}:{}",
          e.component.name,
          e.context.item.clone().unwrap_or_default()
        ))
      })
      .on_complete(move || complete_events.lock().unwrap().push("complete".to_string())),
  )
}

fn upstream_error() -> StreamError {
  StreamError::new(
    Box::new(StringError("upstream".to_string())),
    ErrorContext::new(),
    ComponentInfo::new("source".to_string(), "RangeSource".to_string()),
  )
}

#[test]
fn test_map_stage_transforms_and_forwards() {
  let events = Events::default();
  let mut stage = MapStage::new(|x: i64| Ok::<i64, BoxError>(x * 2), recording(&events));

  assert_eq!(stage.on_signal(Signal::Next(2)), Ack::Continue);
  assert_eq!(stage.on_signal(Signal::Next(3)), Ack::Continue);

  assert_eq!(
    *events.lock().unwrap(),
    vec!["next:4".to_string(), "next:6".to_string()]
  );
}

#[test]
fn test_map_stage_failure_synthesizes_single_error() {
  let events = Events::default();
  let mut stage = MapStage::new(
    |x: i64| {
      if x == 3 {
        Err(StringError("division by zero".to_string()).into())
      } else {
        Ok::<i64, BoxError>(x)
      }
    },
    recording(&events),
  );

  assert_eq!(stage.on_signal(Signal::Next(1)), Ack::Continue);
  assert_eq!(stage.on_signal(Signal::Next(3)), Ack::Terminated);
  // Everything after the fault is suppressed.
  assert_eq!(stage.on_signal(Signal::Next(4)), Ack::Terminated);
  assert_eq!(stage.on_signal(Signal::Complete), Ack::Terminated);

  assert_eq!(
    *events.lock().unwrap(),
    vec!["next:1".to_string(), "error:map_stage:3".to_string()]
  );
}

#[test]
fn test_map_stage_error_uses_configured_name() {
  let events = Events::default();
  let mut stage = MapStage::new(
    |_: i64| Err::<i64, BoxError>(StringError("boom".to_string()).into()),
    recording(&events),
  )
  .with_name("divide".to_string());

  stage.on_signal(Signal::Next(9));

  assert_eq!(*events.lock().unwrap(), vec!["error:divide:9".to_string()]);
}

#[test]
fn test_map_stage_forwards_complete_once() {
  let events = Events::default();
  let mut stage = MapStage::new(|x: i64| Ok::<i64, BoxError>(x), recording(&events));

  assert_eq!(stage.on_signal(Signal::Complete), Ack::Terminated);
  assert_eq!(stage.on_signal(Signal::Complete), Ack::Terminated);

  assert_eq!(*events.lock().unwrap(), vec!["complete".to_string()]);
}

#[test]
fn test_map_stage_passes_upstream_error_through() {
  let events = Events::default();
  let mut stage = MapStage::new(|x: i64| Ok::<i64, BoxError>(x), recording(&events));

  assert_eq!(
    stage.on_signal(Signal::Error(upstream_error())),
    Ack::Terminated
  );
  // The stage is inert afterwards.
  assert_eq!(stage.on_signal(Signal::Next(1)), Ack::Terminated);

  assert_eq!(*events.lock().unwrap(), vec!["error:source:".to_string()]);
}

#[test]
fn test_map_stage_stops_after_downstream_termination() {
  let events = Events::default();
  let next_events = Arc::clone(&events);
  // A downstream that terminates on the first element.
  struct OneShot {
    events: Events,
  }
  impl Subscriber<i64> for OneShot {
    fn on_signal(&mut self, signal: Signal<i64>) -> Ack {
      if let Signal::Next(v) = signal {
        self.events.lock().unwrap().push(format!("next:{v}"));
      }
      Ack::Terminated
    }
  }

  let mut stage = MapStage::new(
    |x: i64| Ok::<i64, BoxError>(x),
    Box::new(OneShot {
      events: next_events,
    }),
  );

  assert_eq!(stage.on_signal(Signal::Next(1)), Ack::Terminated);
  assert_eq!(stage.on_signal(Signal::Next(2)), Ack::Terminated);

  assert_eq!(*events.lock().unwrap(), vec!["next:1".to_string()]);
}
