use gramma_core::{
    Error, Rule,
    diagnostics::premade::LastFailure,
    digits::DecimalDigit,
};

use gramma_shared_tests::{
    grammars::{Byte, Letters, VersionTriple},
    suites::*,
    utils::apply,
};


#[test_log::test]
fn bytes() {
    test_suite_numeric::<u8, _, _>(LastFailure::default);
    test_suite_structural::<u8, _, _>(LastFailure::default);
    test_suite_grammars::<u8, _, _>(LastFailure::default);
}

#[test_log::test]
fn chars() {
    test_suite_numeric::<char, _, _>(LastFailure::default);
    test_suite_structural::<char, _, _>(LastFailure::default);
    test_suite_grammars::<char, _, _>(LastFailure::default);
}

#[test]
fn overflow_is_last() {
    let outcome = apply::<Byte<u8>, u8, _>("256", LastFailure::default());
    let d = outcome.diagnostics;
    assert_eq!(d.error(), Some(&Error::Overflow { ty: "u8", at: 2 }));
    assert_eq!(d.found(), Some(&b'6'));
    assert_eq!(d.count(), 1);
}

#[test]
fn absorbed_failures_are_reported() {
    // The `Join` stops by failing to match a separator at the end.
    let outcome = apply::<Letters<char>, char, _>("a,b", LastFailure::default());
    assert_eq!(outcome.result, Ok(vec!['a', 'b']));
    let d = outcome.diagnostics;
    assert!(matches!(d.error(), Some(&Error::Expected { at: 3, .. })));
    assert_eq!(d.found(), None);
    assert_eq!(d.count(), 1);
}

#[test]
fn version_failure() {
    let outcome = apply::<VersionTriple<u8>, u8, _>("1.x.3", LastFailure::default());
    let digit = DecimalDigit::<usize, u8, u16>::name();
    assert_eq!(outcome.result, Err(Error::Expected { rule: digit, at: 2 }));
    assert_eq!(outcome.diagnostics.error(), Some(&Error::Expected { rule: digit, at: 2 }));
    assert_eq!(outcome.diagnostics.found(), Some(&b'x'));
}
