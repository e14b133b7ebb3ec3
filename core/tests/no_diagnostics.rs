use gramma_core::diagnostics::premade::NoDiagnostics;

use gramma_shared_tests::suites::*;


#[test]
fn bytes() {
    test_suite_numeric::<u8, _, _>(NoDiagnostics::default);
    test_suite_structural::<u8, _, _>(NoDiagnostics::default);
    test_suite_grammars::<u8, _, _>(NoDiagnostics::default);
}

#[test]
fn chars() {
    test_suite_numeric::<char, _, _>(NoDiagnostics::default);
    test_suite_structural::<char, _, _>(NoDiagnostics::default);
    test_suite_grammars::<char, _, _>(NoDiagnostics::default);
}
