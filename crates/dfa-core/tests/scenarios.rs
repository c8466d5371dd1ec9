// End-to-end scenarios: description text -> model -> evaluation.

use dfa_core::{Automaton, BuildError, Verdict, evaluate};

/// Binary strings whose value is divisible by three. State k tracks the
/// value of the consumed prefix modulo 3; only state 0 accepts.
const DIV3: &str = "3\n0\n0 1\n0 1\n2 0\n1 2\n";

#[test]
fn divisible_by_three() {
    let automaton = Automaton::from_text(DIV3).unwrap();

    for (input, expected) in [
        ("", Verdict::Accepted),
        ("0", Verdict::Accepted),
        ("11", Verdict::Accepted),      // 3
        ("110", Verdict::Accepted),     // 6
        ("1001", Verdict::Accepted),    // 9
        ("1", Verdict::Rejected),
        ("10", Verdict::Rejected),      // 2
        ("111", Verdict::Rejected),     // 7
    ] {
        let evaluation = evaluate(&automaton, input);
        assert_eq!(evaluation.verdict, expected, "input {input:?}");
        assert_eq!(evaluation.trace.len(), input.len(), "input {input:?}");
    }
}

#[test]
fn invalid_symbol_rejects_regardless_of_suffix() {
    let automaton = Automaton::from_text(DIV3).unwrap();

    // "11" alone would be accepted; the stray '2' rejects the whole string.
    let evaluation = evaluate(&automaton, "121");
    assert_eq!(evaluation.verdict, Verdict::Rejected);
    let failure = evaluation.failure.unwrap();
    assert_eq!(failure.symbol, '2');
    assert_eq!(failure.state, 1);
    assert!(evaluation.trace.is_empty());
}

#[test]
fn one_model_many_queries() {
    let automaton = Automaton::from_text(DIV3).unwrap();
    let first: Vec<_> = (0..64)
        .map(|n| evaluate(&automaton, &format!("{n:b}")).verdict)
        .collect();
    let second: Vec<_> = (0..64)
        .map(|n| evaluate(&automaton, &format!("{n:b}")).verdict)
        .collect();
    assert_eq!(first, second);
    for (n, verdict) in first.iter().enumerate() {
        let expected = if n % 3 == 0 {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        };
        assert_eq!(*verdict, expected, "n = {n}");
    }
}

#[test]
fn truncated_description_rejected_with_row_count() {
    // Three states declared, only two rows supplied.
    let err = Automaton::from_text("3\n0\n0 1\n0 1\n2 0\n").unwrap_err();
    assert!(matches!(
        err,
        BuildError::MalformedRow {
            expected: 3,
            actual: 2
        }
    ));
}

#[test]
fn out_of_range_target_rejected() {
    let err = Automaton::from_text("2\n1\na b\n1 5\n1 1\n").unwrap_err();
    assert!(matches!(err, BuildError::InvalidTargetState { row: 0, .. }));
}
