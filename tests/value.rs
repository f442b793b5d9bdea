use pocketcalc::{
    calculator::{
        arithmetic::{add, apply, divide, multiply, subtract},
        operator::Operator,
        value::Value,
    },
    error::ValueError,
};

const HELPERS: [fn(Value, Value) -> Value; 4] = [add, subtract, multiply, divide];

fn samples() -> Vec<Value> {
    vec![Value::Integer(0),
         Value::Integer(7),
         Value::Integer(-3),
         Value::Integer(i64::MAX),
         Value::Float(0.5),
         Value::Float(-49.7),
         Value::Float(1e20),
         Value::Error]
}

#[test]
fn error_is_absorbing() {
    for helper in HELPERS {
        for value in samples() {
            assert_eq!(helper(Value::Error, value), Value::Error, "Error with {value}");
            assert_eq!(helper(value, Value::Error), Value::Error, "{value} with Error");
        }
    }
}

#[test]
fn integers_stay_integers() {
    let integers = [0, 1, -1, 7, 72345, -600, i64::MAX, i64::MIN];
    // Everything but division.
    for helper in &HELPERS[..3] {
        for a in integers {
            for b in integers {
                assert!(helper(Value::Integer(a), Value::Integer(b)).is_integer(), "{a} and {b}");
            }
        }
    }
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(add(Value::Integer(i64::MAX), Value::Integer(1)), Value::Integer(i64::MIN));
    assert_eq!(subtract(Value::Integer(i64::MIN), Value::Integer(1)), Value::Integer(i64::MAX));
    assert_eq!(multiply(Value::Integer(i64::MIN), Value::Integer(-1)), Value::Integer(i64::MIN));
    assert_eq!(multiply(Value::Integer(1 << 40), Value::Integer(1 << 40)), Value::Integer(0));
}

#[test]
fn float_overflow_is_error() {
    assert_eq!(multiply(Value::Float(1e200), Value::Float(1e200)), Value::Error);
    assert_eq!(divide(Value::Float(1e300), Value::Float(1e-300)), Value::Error);
    assert_eq!(subtract(Value::Float(-1e308), Value::Float(1e308)), Value::Error);
    // Rounding 15 digits up pushes the largest float past the float range.
    assert_eq!(add(Value::Float(f64::MAX), Value::Float(0.5)), Value::Error);
}

#[test]
fn integral_floats_collapse() {
    assert_eq!(Value::from(8.0), Value::Integer(8));
    assert_eq!(Value::from(-0.0), Value::Integer(0));
    assert_eq!(Value::from(8.5), Value::Float(8.5));
    assert_eq!(add(Value::Float(0.25), Value::Float(0.75)), Value::Integer(1));
    assert_eq!(multiply(Value::Float(2.5), Value::Integer(4)), Value::Integer(10));
}

#[test]
fn mixed_arithmetic_uses_floats() {
    assert_eq!(add(Value::Integer(1), Value::Float(0.5)), Value::Float(1.5));
    assert_eq!(subtract(Value::Float(17.0), Value::Float(6.1)), Value::Float(10.9));
    assert_eq!(add(Value::Float(0.1), Value::Float(0.2)), Value::Float(0.3));
}

#[test]
fn division_by_zero_is_error() {
    for value in samples() {
        assert_eq!(divide(value, Value::Integer(0)), Value::Error);
        assert_eq!(divide(value, Value::Float(0.0)), Value::Error);
        assert_eq!(divide(value, Value::Float(-0.0)), Value::Error);
    }
}

#[test]
fn division_results() {
    assert_eq!(divide(Value::Integer(7), Value::Integer(2)), Value::Float(3.5));
    assert_eq!(divide(Value::Integer(-8), Value::Integer(2)), Value::Integer(-4));
    assert_eq!(divide(Value::Integer(1), Value::Integer(3)).to_string(), "0.333333333333333");
}

#[test]
fn apply_dispatches_on_operator() {
    let (a, b) = (Value::Integer(12), Value::Integer(4));
    assert_eq!(apply(Operator::Add, a, b), Value::Integer(16));
    assert_eq!(apply(Operator::Subtract, a, b), Value::Integer(8));
    assert_eq!(apply(Operator::Multiply, a, b), Value::Integer(48));
    assert_eq!(apply(Operator::Divide, a, b), Value::Integer(3));
}

#[test]
fn parsing() {
    assert_eq!(Value::parse("72345"), Value::Integer(72345));
    assert_eq!(Value::parse("007"), Value::Integer(7));
    assert_eq!(Value::parse("7."), Value::Integer(7));
    assert_eq!(Value::parse(".5"), Value::Float(0.5));
    assert_eq!(Value::parse("Error"), Value::Error);
    assert_eq!(Value::parse(""), Value::Error);
    assert_eq!(Value::parse("."), Value::Error);
    assert_eq!(Value::parse("1.2.3"), Value::Error);
    assert_eq!(Value::parse("abc"), Value::Error);
}

#[test]
fn parse_errors_are_reported() {
    assert_eq!(Value::try_parse("12a"),
               Err(ValueError::InvalidLiteral { literal: "12a".to_string() }));
    assert_eq!(Value::try_parse("99999999999999999999"),
               Err(ValueError::LiteralTooLarge { literal: "99999999999999999999".to_string() }));
    assert_eq!("4.5".parse::<Value>(), Ok(Value::Float(4.5)));
}

#[test]
fn display() {
    assert_eq!(Value::Integer(-42).to_string(), "-42");
    assert_eq!(Value::Float(49.7).to_string(), "49.7");
    assert_eq!(Value::Float(1e20).to_string(), "100000000000000000000.0");
    assert_eq!(Value::Error.to_string(), "Error");
}

#[test]
fn display_round_trips() {
    for value in samples().into_iter().filter(|v| !v.is_error()) {
        let parsed = Value::parse(&value.to_string());
        assert_eq!(parsed, value, "{value}");
        assert_eq!(parsed.is_integer(), value.is_integer());
    }
}

#[test]
fn predicates_and_coercions() {
    assert!(Value::Integer(0).is_zero());
    assert!(Value::Float(0.0).is_zero());
    assert!(Value::Error.is_zero());
    assert!(!Value::Float(0.1).is_zero());

    assert!(Value::Float(0.1).is_float());
    assert!(!Value::Error.is_float());
    assert!(Value::Error.is_error());

    assert_eq!(Value::Float(-3.9).to_integer(), -3);
    assert_eq!(Value::Integer(5).to_float(), 5.0);
    assert_eq!(Value::Error.to_integer(), 0);
    assert_eq!(Value::Error.to_float(), 0.0);
}
