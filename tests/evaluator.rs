use forklang::{
    ast::{InfixOperator, PrefixOperator, Statement},
    error::{Error, RuntimeError},
    eval_source,
    interpreter::{
        evaluator::{eval_expression, evaluate},
        value::{FALSE, NULL, TRUE, Value},
    },
    parse,
};

fn eval(source: &str) -> Option<Value> {
    eval_source(source).unwrap_or_else(|e| panic!("{source:?} failed: {e}"))
}

fn assert_value(source: &str, expected: Value) {
    assert_eq!(eval(source), Some(expected), "value of {source:?}");
}

fn assert_runtime_error(source: &str, expected: &RuntimeError) {
    match eval_source(source) {
        Err(Error::Runtime(error)) => assert_eq!(&error, expected, "error of {source:?}"),
        other => panic!("{source:?} should fail at runtime, got {other:?}"),
    }
}

#[test]
fn integer_arithmetic() {
    let cases = [("5", 5),
                 ("10", 10),
                 ("-5", -5),
                 ("--5", 5),
                 ("5 + 5 * 2", 15),
                 ("1 - 2 - 3", -4),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * (3 * 3) + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50)];

    for (source, expected) in cases {
        assert_value(source, Value::Integer(expected));
    }
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", Value::Integer(3));
    assert_value("-7 / 2", Value::Integer(-3));
    assert_value("7 / -2", Value::Integer(-3));
}

#[test]
fn comparisons() {
    let cases = [("true", true),
                 ("false", false),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 < 1", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("1 == 2", false),
                 ("1 != 2", true),
                 ("true == true", true),
                 ("true != false", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("1 < 2 == true", true),
                 ("(1 > 2) == false", true),
                 ("(1 > 2) == true", false)];

    for (source, expected) in cases {
        assert_value(source, Value::from_bool(expected));
    }
}

#[test]
fn logical_negation_uses_truthiness() {
    assert_value("!true", FALSE);
    assert_value("!false", TRUE);
    assert_value("!!true", TRUE);
    assert_value("!!false", FALSE);
    assert_value("!5", FALSE);
    assert_value("!0", FALSE);
    assert_value("!!5", TRUE);
    assert_value("!(true + 1)", TRUE);
}

#[test]
fn type_mismatches_yield_null() {
    for source in ["true + 1",
                   "1 + true",
                   "-true",
                   "true > false",
                   "true < false",
                   "1 == true",
                   "false != 0",
                   "true * false",
                   "true / true",
                   "(true + 1) == (true + 1)"]
    {
        assert_value(source, NULL);
    }
}

#[test]
fn unsupported_nodes_produce_no_value() {
    for source in ["", "let x = 5", "return 1", "x", "add(1, 2)", "1; let x = 2"] {
        assert_eq!(eval(source), None, "value of {source:?}");
    }
}

#[test]
fn missing_operands_follow_the_null_policy() {
    assert_value("x + 1", NULL);
    assert_value("-x", NULL);
    assert_value("!x", FALSE);
    assert_value("f() == f()", NULL);
}

#[test]
fn program_yields_last_statement_value() {
    assert_value("1; 2; 3", Value::Integer(3));
    assert_value("let x = 2; 3", Value::Integer(3));
    assert_value("return 1; true", TRUE);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_runtime_error("1 / 0", &RuntimeError::DivisionByZero { dividend: 1 });
    assert_runtime_error("1; (5 - 5) / (2 - 2); 3",
                         &RuntimeError::DivisionByZero { dividend: 0 });
    assert_eq!(RuntimeError::DivisionByZero { dividend: 1 }.to_string(),
               "division by zero: 1 / 0");
}

#[test]
fn integer_overflow_is_an_error() {
    assert_runtime_error("9223372036854775807 + 1",
                         &RuntimeError::Overflow { left:     i64::MAX,
                                                   operator: InfixOperator::Add,
                                                   right:    1, });
    assert_runtime_error("(-9223372036854775807 - 1) / -1",
                         &RuntimeError::Overflow { left:     i64::MIN,
                                                   operator: InfixOperator::Div,
                                                   right:    -1, });
    assert_runtime_error("-(-9223372036854775807 - 1)",
                         &RuntimeError::PrefixOverflow { operator: PrefixOperator::Negate,
                                                         operand:  i64::MIN, });
    assert_value("-9223372036854775807 - 1", Value::Integer(i64::MIN));
}

#[test]
fn parse_errors_are_reported_before_evaluation() {
    match eval_source("let x 5; 1 / 0") {
        Err(Error::Parse(errors)) => assert_eq!(errors.len(), 1),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn long_chains_evaluate_and_deeper_ones_are_rejected() {
    assert_value(&vec!["1"; 200].join(" + "), Value::Integer(200));
    assert_value(&format!("{}7{}", "-(".repeat(100), ")".repeat(100)), Value::Integer(7));

    match eval_source(&vec!["1"; 100_000].join(" + ")) {
        Err(Error::Parse(errors)) => assert_eq!(errors.len(), 1),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn any_node_can_be_evaluated() {
    let program = parse("1 + 2; 3 * 4").unwrap();

    assert_eq!(evaluate(&program).unwrap(), Some(Value::Integer(12)));
    assert_eq!(evaluate(&program.statements[0]).unwrap(), Some(Value::Integer(3)));

    let Statement::Expression(statement) = &program.statements[1] else {
        panic!("expected an expression statement");
    };
    assert_eq!(eval_expression(&statement.expression).unwrap(), Some(Value::Integer(12)));
}

#[test]
fn values_display() {
    assert_eq!(Value::Integer(-15).to_string(), "-15");
    assert_eq!(TRUE.to_string(), "true");
    assert_eq!(FALSE.to_string(), "false");
    assert_eq!(NULL.to_string(), "null");
    assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    assert_eq!(TRUE.type_name(), "BOOLEAN");
    assert_eq!(NULL.type_name(), "NULL");
}

#[test]
fn values_convert_from_native_types() {
    assert_eq!(Value::from(-3_i64), Value::Integer(-3));
    assert_eq!(Value::from(true), TRUE);
    assert_eq!(Value::from(false), FALSE);
    assert_eq!(Value::from(1 < 2), Value::from_bool(true));
}
