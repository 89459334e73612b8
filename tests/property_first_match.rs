// tests/property_first_match.rs

mod common;
use crate::common::fixtures::{
    CustomError, MyError, MyOtherError, my_error, my_other_error, plain_error,
};

use proptest::prelude::*;
use ::thrown::{Caught, DispatchConfig, Thrown, thrown_with};

/// Which value the chain dispatches on.
#[derive(Debug, Clone, Copy)]
enum Subject {
    Mine,
    MyOther,
    Plain,
    Record,
}

impl Subject {
    fn build(self) -> Caught {
        match self {
            Subject::Mine => my_error(),
            Subject::MyOther => my_other_error(),
            Subject::Plain => plain_error("foobar"),
            Subject::Record => Caught::value(CustomError { foo: "bar" }),
        }
    }
}

/// One registered match attempt.
#[derive(Debug, Clone, Copy)]
enum Attempt {
    ByTypeMine,
    ByTypeMyOther,
    BaseError,
    NarrowRecord,
    Always,
    Never,
}

impl Attempt {
    /// Reference answer: does this attempt's test pass for `value`?
    fn matches(self, value: Subject) -> bool {
        match self {
            Attempt::ByTypeMine => matches!(value, Subject::Mine),
            Attempt::ByTypeMyOther => matches!(value, Subject::MyOther),
            Attempt::BaseError => matches!(value, Subject::MyOther | Subject::Plain),
            Attempt::NarrowRecord => matches!(value, Subject::Record),
            Attempt::Always => true,
            Attempt::Never => false,
        }
    }

    fn register(
        self,
        t: Thrown,
        idx: usize,
        tested: &mut Vec<usize>,
        fired: &mut Vec<usize>,
    ) -> Thrown {
        match self {
            Attempt::ByTypeMine => t.catch(|_: &MyError| fired.push(idx)),
            Attempt::ByTypeMyOther => t.catch(|_: &MyOtherError| fired.push(idx)),
            Attempt::BaseError => t.catch_error(|_| fired.push(idx)),
            Attempt::NarrowRecord => t.catch_predicate(
                |c| {
                    tested.push(idx);
                    c.downcast_ref::<CustomError>()
                },
                |_| fired.push(idx),
            ),
            Attempt::Always => t.catch_if(
                |_| {
                    tested.push(idx);
                    true
                },
                |_| fired.push(idx),
            ),
            Attempt::Never => t.catch_if(
                |_| {
                    tested.push(idx);
                    false
                },
                |_| fired.push(idx),
            ),
        }
    }

    fn is_predicate(self) -> bool {
        matches!(self, Attempt::NarrowRecord | Attempt::Always | Attempt::Never)
    }
}

fn value_strategy() -> impl Strategy<Value = Subject> {
    prop_oneof![
        Just(Subject::Mine),
        Just(Subject::MyOther),
        Just(Subject::Plain),
        Just(Subject::Record),
    ]
}

fn attempt_strategy() -> impl Strategy<Value = Attempt> {
    prop_oneof![
        Just(Attempt::ByTypeMine),
        Just(Attempt::ByTypeMyOther),
        Just(Attempt::BaseError),
        Just(Attempt::NarrowRecord),
        Just(Attempt::Always),
        Just(Attempt::Never),
    ]
}

proptest! {
    #[test]
    fn only_the_first_passing_attempt_fires(
        value in value_strategy(),
        attempts in proptest::collection::vec(attempt_strategy(), 0..8),
        finish_with_catch_any in any::<bool>(),
    ) {
        let expected = attempts.iter().position(|a| a.matches(value));

        let mut tested = Vec::new();
        let mut fired = Vec::new();
        let mut t = thrown_with(value.build(), DispatchConfig::silent());
        for (idx, attempt) in attempts.iter().enumerate() {
            t = attempt.register(t, idx, &mut tested, &mut fired);
        }

        prop_assert_eq!(t.is_caught(), expected.is_some());

        // Predicates are consulted up to and including the first match, never after.
        let last_tested = expected.unwrap_or(attempts.len());
        let expected_tested: Vec<usize> = attempts
            .iter()
            .enumerate()
            .take(last_tested + 1)
            .filter(|(_, a)| a.is_predicate())
            .map(|(idx, _)| idx)
            .collect();
        prop_assert_eq!(&tested, &expected_tested);
        prop_assert_eq!(&fired, &expected.into_iter().collect::<Vec<_>>());

        if finish_with_catch_any {
            let mut catch_all = 0;
            t.catch_any(|_| catch_all += 1);
            prop_assert_eq!(catch_all, usize::from(expected.is_none()));
        } else {
            prop_assert_eq!(t.rethrow_uncaught().is_err(), expected.is_none());
        }
    }
}
