// tests/rethrow.rs

mod common;
use crate::common::fixtures::{
    MyError, MyOtherError, PlainError, address_of, my_error, my_other_error, plain_error,
};
use crate::common::init_tracing;

use ::thrown::{Caught, thrown};

#[test]
fn rethrow_after_a_match_returns_normally() {
    init_tracing();

    let result = thrown(my_other_error())
        .catch(|_: &MyOtherError| {})
        .rethrow_uncaught();

    assert!(result.is_ok());
}

#[test]
fn override_is_ignored_after_a_match() {
    init_tracing();

    let result = thrown(my_error())
        .catch(|_: &MyError| {})
        .rethrow_uncaught_or(Some(plain_error("overridden")));

    assert!(result.is_ok());
}

#[test]
fn absent_override_rethrows_the_original() {
    init_tracing();
    let original = plain_error("foobar");
    let addr = address_of::<PlainError>(&original);

    let err = thrown(original)
        .catch(|_: &MyError| {})
        .rethrow_uncaught_or(None)
        .expect_err("unmatched error must be rethrown");

    assert_eq!(address_of::<PlainError>(&err), addr);
}

#[test]
fn override_may_have_a_different_type() {
    init_tracing();
    let replacement = Caught::value(MyError::new());
    let addr = address_of::<MyError>(&replacement);

    let err = thrown(plain_error("foobar"))
        .rethrow_uncaught_or(Some(replacement))
        .expect_err("unmatched error must be rethrown");

    assert!(!err.is::<PlainError>());
    assert_eq!(address_of::<MyError>(&err), addr);
}

fn load_settings() -> anyhow::Result<()> {
    Err(anyhow::Error::new(PlainError::new("disk on fire")))
}

fn load_settings_or_default(fallback_on_missing: bool) -> anyhow::Result<bool> {
    let mut used_default = false;

    if let Err(e) = load_settings() {
        thrown(e)
            .catch_predicate(
                |c| {
                    c.downcast_error_ref::<PlainError>()
                        .filter(|e| fallback_on_missing && e.message.contains("missing"))
                },
                |_| used_default = true,
            )
            .rethrow_uncaught()?;
    }

    Ok(used_default)
}

#[test]
fn rethrown_value_propagates_through_question_mark() {
    init_tracing();

    let err = load_settings_or_default(true).expect_err("not a missing-file error");

    let caught = err
        .downcast_ref::<Caught>()
        .expect("rethrown value converts into anyhow::Error as a Caught");
    assert_eq!(
        caught.downcast_error_ref::<PlainError>().map(|e| e.message.as_str()),
        Some("disk on fire")
    );
    assert_eq!(err.to_string(), "disk on fire");
}
