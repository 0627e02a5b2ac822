use crate::source::Source;
use crate::sources::RangeSource;

#[test]
fn test_range_pulls_in_order() {
  let mut source = RangeSource::new(1i64, 6);

  let mut values = Vec::new();
  while let Some(v) = source.pull() {
    values.push(v);
  }

  assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_range_stays_exhausted() {
  let mut source = RangeSource::new(5i64, 2);

  assert_eq!(source.pull(), Some(5));
  assert_eq!(source.pull(), Some(6));
  assert_eq!(source.pull(), None);
  // Exhaustion is permanent.
  assert_eq!(source.pull(), None);
}

#[test]
fn test_range_exhaustion_flag_tracks_cursor() {
  let mut source = RangeSource::new(0i64, 2);

  assert!(!source.is_exhausted());
  source.pull();
  assert!(!source.is_exhausted());
  source.pull();
  assert!(source.is_exhausted());
}

#[test]
fn test_empty_range_is_exhausted_immediately() {
  let mut source = RangeSource::new(1i64, 0);

  assert!(source.is_exhausted());
  assert_eq!(source.pull(), None);
}

#[test]
fn test_range_with_unsigned_elements() {
  let mut source = RangeSource::new(10u32, 3);

  assert_eq!(source.pull(), Some(10));
  assert_eq!(source.pull(), Some(11));
  assert_eq!(source.pull(), Some(12));
  assert_eq!(source.pull(), None);
}

#[test]
fn test_range_component_info_uses_configured_name() {
  let source = RangeSource::new(1i64, 6).with_name("numbers".to_string());

  let info = source.component_info();
  assert_eq!(info.name, "numbers");
  assert_eq!(info.type_name, "RangeSource");
}

#[test]
fn test_range_component_info_default_name() {
  let source = RangeSource::new(1i64, 6);

  assert_eq!(source.component_info().name, "range_source");
  assert_eq!(source.config().name(), None);
}
