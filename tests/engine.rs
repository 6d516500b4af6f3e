use std::thread;

use mathparse::{
    Bindings, Context, UnboundPolicy,
    error::{Error, FailureKind, ParseError, ParseWarning, RuntimeError},
    evaluate,
    interpreter::value::Value,
    try_evaluate,
};

const EPSILON: f64 = 1e-12;

fn assert_scalar(src: &str, expected: f64) {
    match try_evaluate(src, &Bindings::default()) {
        Ok(evaluation) => match evaluation.value {
            Value::Scalar(v) => {
                assert!((v - expected).abs() < EPSILON,
                        "'{src}' evaluated to {v}, expected {expected}")
            },
            Value::Vector(v) => panic!("'{src}' evaluated to vector {v:?}"),
        },
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_vector(src: &str, bindings: &Bindings, expected: &[f64]) {
    let evaluation = try_evaluate(src, bindings).unwrap_or_else(|e| panic!("'{src}' failed: {e}"));
    let values = evaluation.value
                           .as_vector()
                           .unwrap_or_else(|| panic!("'{src}' did not produce a vector"));

    assert_eq!(values.len(), expected.len(), "'{src}' has the wrong length");
    for (i, (got, want)) in values.iter().zip(expected).enumerate() {
        assert!((got - want).abs() < EPSILON,
                "'{src}' element {i} is {got}, expected {want}");
    }
}

fn assert_failure(src: &str, bindings: &Bindings, kind: FailureKind) {
    match try_evaluate(src, bindings) {
        Ok(evaluation) => panic!("'{src}' succeeded with {} but was expected to fail",
                                 evaluation.value),
        Err(e) => assert_eq!(e.kind(), kind, "'{src}' failed with {e}"),
    }
    assert!(evaluate(src, bindings).is_failure(),
            "'{src}' did not collapse to NaN");
}

fn ramp() -> Bindings {
    Bindings::new(5).with("a", [0.0, 1.0, 2.0, 3.0, 4.0])
                    .with("b", [0.0, 1.0, 2.0, 3.0, 4.0])
}

#[test]
fn precedence_and_grouping() {
    assert_scalar("3+4*2", 11.0);
    assert_scalar("(3+4)*2", 14.0);
    assert_scalar("(1+2)*3", 9.0);
    assert_scalar("[1+2]*3", 9.0);
    assert_scalar("2*[3+(4-1)]", 12.0);
    assert_scalar("2+3^2*2", 20.0);
    assert_scalar("((7))", 7.0);
}

#[test]
fn every_operator_is_left_associative() {
    assert_scalar("2^3^2", 64.0);
    assert_scalar("10-4-3", 3.0);
    assert_scalar("64/4/2", 8.0);
    assert_scalar("2^(3^2)", 512.0);
}

#[test]
fn number_literals() {
    assert_scalar("42", 42.0);
    assert_scalar("3.25", 3.25);
    assert_scalar(".5", 0.5);
    assert_scalar("2.", 2.0);
    assert_scalar("0.125*8", 1.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_scalar("  3 +\t4 * 2 ", 11.0);
    assert_scalar("1 0 + 1", 11.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    let output = evaluate("1/0", &Bindings::default());
    assert!(output.value.is_infinite());
    assert!(evaluate("0/0", &Bindings::default()).value.is_nan());
}

#[test]
fn vector_broadcasting() {
    assert_vector("a*b", &ramp(), &[0.0, 1.0, 4.0, 9.0, 16.0]);
    assert_vector("a+1", &ramp(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_vector("a^2", &ramp(), &[0.0, 1.0, 4.0, 9.0, 16.0]);
    assert_vector("2^a", &ramp(), &[1.0, 2.0, 4.0, 8.0, 16.0]);
    assert_vector("(a+b)*2-a", &ramp(), &[0.0, 3.0, 6.0, 9.0, 12.0]);
}

#[test]
fn broadcasting_keeps_operand_order() {
    let bindings = Bindings::new(3).with("a", [1.0, 2.0, 3.0]);

    assert_vector("5-a", &bindings, &[4.0, 3.0, 2.0]);
    assert_vector("a-5", &bindings, &[-4.0, -3.0, -2.0]);
    assert_vector("10/a", &bindings, &[10.0, 5.0, 10.0 / 3.0]);
    assert_vector("a/10", &bindings, &[0.1, 0.2, 0.3]);
    assert_vector("a-a*2", &bindings, &[-1.0, -2.0, -3.0]);
}

#[test]
fn vector_output_contract() {
    let output = evaluate("a*b", &ramp());
    assert_eq!(output.value, 0.0);
    assert_eq!(output.vector, Some(vec![0.0, 1.0, 4.0, 9.0, 16.0]));

    let output = evaluate("1+1", &ramp());
    assert_eq!(output.value, 2.0);
    assert_eq!(output.vector, None);
}

#[test]
fn digits_after_a_letter_extend_the_name() {
    let bindings = Bindings::new(2).with("a1", [1.0, 2.0]);
    assert_vector("a1*3", &bindings, &[3.0, 6.0]);

    let bindings = Bindings::new(2).with("a", [1.0, 2.0]);
    assert_failure("a1", &bindings, FailureKind::UnboundVariable);
}

#[test]
fn multi_letter_names() {
    let bindings = Bindings::new(2).with("speed", [3.0, 4.0])
                                   .with("time", [2.0, 0.5]);
    assert_vector("speed*time", &bindings, &[6.0, 2.0]);
}

#[test]
fn unknown_characters_are_skipped_with_a_warning() {
    let evaluation = try_evaluate("3+$4", &Bindings::default()).unwrap();

    assert_eq!(evaluation.value, Value::Scalar(7.0));
    assert_eq!(evaluation.warnings,
               vec![ParseWarning::UnknownCharacter { character: '$',
                                                     position:  2, }]);
}

#[test]
fn empty_expression_fails() {
    assert_failure("", &Bindings::default(), FailureKind::EmptyExpression);
    assert_failure(" \t ", &Bindings::default(), FailureKind::EmptyExpression);
}

#[test]
fn missing_operands_fail() {
    assert_failure("+", &Bindings::default(), FailureKind::StackUnderflow);
    assert_failure("-3", &Bindings::default(), FailureKind::StackUnderflow);
    assert_failure("2*", &Bindings::default(), FailureKind::StackUnderflow);

    let err = try_evaluate("1+*2", &Bindings::default()).unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::StackUnderflow { operator: '+',
                                                             position: 1, }));
}

#[test]
fn leftover_operands_fail() {
    assert_failure("2a", &ramp(), FailureKind::UnbalancedOperands);
    assert_failure("()", &Bindings::default(), FailureKind::UnbalancedOperands);
    assert_failure("1.2.3", &Bindings::default(), FailureKind::UnbalancedOperands);
}

#[test]
fn grouping_mismatches_fail() {
    assert_failure("1+2)", &Bindings::default(), FailureKind::MismatchedGrouping);
    assert_failure("(1+2]", &Bindings::default(), FailureKind::MismatchedGrouping);
    assert_failure("[(1+2])", &Bindings::default(), FailureKind::MismatchedGrouping);
    assert_failure("(1+2", &Bindings::default(), FailureKind::UnclosedGrouping);

    let err = try_evaluate("(1)+2)", &Bindings::default()).unwrap_err();
    assert_eq!(err,
               Error::Parse(ParseError::MismatchedGrouping { found:    ')',
                                                             position: 5, }));
}

#[test]
fn binding_validation() {
    assert_failure("a", &Bindings::default(), FailureKind::UnboundVariable);

    let short = Bindings::new(3).with("a", [1.0, 2.0]);
    assert_failure("a", &short, FailureKind::LengthMismatch);

    let twice = Bindings::new(1).with("a", [1.0]).with("a", [2.0]);
    assert_failure("a", &twice, FailureKind::DuplicateBinding);
}

#[test]
fn unused_bindings_are_ignored() {
    let bindings = Bindings::new(2).with("a", [1.0, 2.0])
                                   .with("unused", [0.0, 0.0]);
    assert_vector("a+a", &bindings, &[2.0, 4.0]);
}

#[test]
fn unbound_variables_can_be_zero() {
    let context = Context::new().with_unbound_policy(UnboundPolicy::Zero);
    let bindings = Bindings::new(2).with("a", [1.0, 2.0]);

    let output = context.evaluate("x+4", &Bindings::default());
    assert_eq!(output.value, 4.0);

    let output = context.evaluate("a*2+y", &bindings);
    assert_eq!(output.vector, Some(vec![2.0, 4.0]));
}

#[test]
fn empty_vectors_are_allowed() {
    let bindings = Bindings::new(0).with("a", Vec::<f64>::new());
    assert_vector("a*2", &bindings, &[]);
}

#[test]
fn evaluation_is_repeatable() {
    let bindings = Bindings::new(3).with("a", [0.1, 0.2, 0.3]);
    let first = evaluate("(a+0.7)^1.5/3-a", &bindings);

    for _ in 0..10 {
        let again = evaluate("(a+0.7)^1.5/3-a", &bindings);
        let (Some(x), Some(y)) = (&first.vector, &again.vector) else {
            panic!("expected vector results");
        };
        assert!(x.iter().zip(y).all(|(x, y)| x.to_bits() == y.to_bits()));
    }
}

#[test]
fn independent_threads_do_not_interfere() {
    let handles: Vec<_> = (0..4).map(|i| {
                                    thread::spawn(move || {
                                        let bindings =
                                            Bindings::new(2).with("a", [f64::from(i), 1.0]);
                                        evaluate("a*2+1", &bindings).vector
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let vector = handle.join().unwrap();
        let i = f64::from(u32::try_from(i).unwrap());
        assert_eq!(vector, Some(vec![i * 2.0 + 1.0, 3.0]));
    }
}
