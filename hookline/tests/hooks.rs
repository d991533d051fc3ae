//! Hook pipeline tests through `HooksAware`.

use hookline::{HookError, HooksAware, testing::OrderRecorder};

mod common;
use common::Priced;

#[test]
fn test_price_pipeline_applies_in_position_order() {
    let mut item = Priced::default();
    item.add_hook("price", |v: i32| Some(v * 2))
        .add_hook("price", |v: i32| Some(v + 1));

    assert_eq!(item.fire_hook("price", 10).unwrap(), 21);
}

#[test]
fn test_unregistered_hook_returns_argument() {
    let item = Priced::default();
    assert_eq!(item.fire_hook("price", 10).unwrap(), 10);
    assert_eq!(item.fire_hook("label", String::from("tea")).unwrap(), "tea");
}

#[test]
fn test_missing_response_aborts_remaining_hooks() {
    let recorder = OrderRecorder::new();
    let mut item = Priced::default();
    item.add_hook::<i32>("price", recorder.hook(1))
        .add_hook("price", |_: i32| None::<i32>)
        .add_hook::<i32>("price", recorder.hook(3));

    let err = item.fire_hook("price", 10).unwrap_err();
    assert!(err.is_missing_response());
    assert_eq!(err.hook(), "price");
    assert_eq!(recorder.order(), vec![1]);
}

#[test]
fn test_explicit_positions_interleave_with_automatic() {
    let recorder = OrderRecorder::new();
    let mut item = Priced::default();
    item.add_hook_at::<i32>("price", recorder.hook(1), 20)
        .add_hook::<i32>("price", recorder.hook(2))
        .add_hook_at::<i32>("price", recorder.hook(3), -5);

    item.fire_hook("price", 0).unwrap();
    assert_eq!(item.hooks().positions("price"), vec![-5, 1, 20]);
    assert_eq!(recorder.order(), vec![3, 2, 1]);
}

#[test]
fn test_automatic_position_skips_occupied_slot() {
    let mut item = Priced::default();
    item.add_hook_at("price", |v: i32| Some(v), 2)
        .add_hook("price", |v: i32| Some(v))
        .add_hook("price", |v: i32| Some(v));

    assert_eq!(item.hooks().positions("price"), vec![1, 2, 3]);
}

#[test]
fn test_explicit_position_replaces_callback() {
    let mut item = Priced::default();
    item.add_hook_at("price", |v: i32| Some(v * 10), 1)
        .add_hook_at("price", |v: i32| Some(v + 10), 1);

    assert_eq!(item.fire_hook("price", 1).unwrap(), 11);
}

#[test]
fn test_namespaced_hooks() {
    let mut item = Priced::default();
    item.add_hook("price.tax", |v: i32| Some(v + 5))
        .add_hook("price.discount", |v: i32| Some(v - 2))
        .add_hook("price", |v: i32| Some(v * 2));

    assert_eq!(item.fire_hook("price.tax", 10).unwrap(), 30);
    assert_eq!(item.fire_hook("price", 10).unwrap(), 26);

    item.remove_hook("price.disc");
    assert_eq!(item.fire_hook("price", 10).unwrap(), 30);

    item.remove_hook("price");
    assert!(!item.hooks().contains("price"));
}

#[test]
fn test_value_type_mismatch() {
    let mut item = Priced::default();
    item.add_hook("price", |v: i32| Some(v));

    let err = item.fire_hook("price", 1.5_f64).unwrap_err();
    assert!(matches!(err, HookError::TypeMismatch { position: 1, .. }));
}
