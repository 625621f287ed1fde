//! Moving values between typed Rust code and the erased encoding

use std::convert::Infallible;

use erased_option::{
    is_none, is_some, ops, some, value, Exception, FromValue, IntoValue,
    Optional, Value, ValueError, NONE,
};

mod common;

#[test]
fn nested_options_round_trip() {
    common::init();

    let cases: [Optional<Optional<f64>>; 3] = [
        Optional::None,
        Optional::Some(Optional::None),
        Optional::Some(Optional::Some(7.0)),
    ];
    for case in cases {
        let encoded = case.encode();
        assert_eq!(Optional::decode(encoded), Ok(case));
    }
}

#[test]
fn unit_payload_is_boxed() {
    common::init();

    let encoded = Optional::Some(()).encode();
    assert!(encoded.is_boxed());
    assert!(is_some(&encoded));
    assert_eq!(Optional::<()>::decode(encoded), Ok(Optional::Some(())));
    assert_eq!(Optional::<()>::decode(NONE), Ok(Optional::None));

    let encoded = Optional::Some(Optional::Some(())).encode();
    assert_eq!(
        Optional::decode(encoded),
        Ok(Optional::Some(Optional::Some(())))
    );
}

#[test]
fn std_option_goes_through_the_encoding() {
    let encoded = Some(None::<bool>).into_value();
    assert!(encoded.is_boxed());
    assert_eq!(Option::<Option<bool>>::from_value(encoded), Ok(Some(None)));

    let encoded = vec![Some(1.0), None].into_value();
    assert_eq!(encoded.to_string(), "[1, undefined]");
    assert_eq!(
        Vec::<Option<f64>>::from_value(encoded),
        Ok(vec![Some(1.0), None])
    );
}

#[test]
fn decode_reports_mismatch() {
    let res = Optional::<bool>::decode(Value::from("yes"));
    assert_eq!(
        res,
        Err(ValueError::TypeMismatch {
            expected: "boolean",
            found: "string",
        })
    );
}

#[test]
fn flatten_nested_some() {
    let seven: Value = Optional::Some(7.0).encode();
    let nested = some(seven.clone());
    let flat = ops::flatten(nested);
    assert_eq!(flat, seven);
    assert_eq!(Optional::<f64>::decode(flat), Ok(Optional::Some(7.0)));

    let nested: Value = Optional::Some(Optional::<f64>::None).encode();
    let flat = ops::flatten(nested);
    assert!(is_none(&flat));
}

#[test]
fn map_and_map2_differ_on_absent_results() {
    let to_null = |_: Value| Ok::<_, Infallible>(Value::Null);
    let mapped = ops::map(to_null, some(Value::from(1))).unwrap();
    assert_eq!(Optional::<Value>::decode(mapped), Ok(Optional::Some(Value::Null)));

    let mapped2 = ops::map2(
        |_, _| Ok::<_, Infallible>(Value::Null),
        some(Value::from(1)),
        some(Value::from(2)),
    )
    .unwrap();
    assert_eq!(Optional::<Value>::decode(mapped2), Ok(Optional::None));
}

#[test]
fn pipeline_of_combinators() {
    common::init();

    let parse = |s: Value| -> Result<Value, Exception> {
        let s = s.as_str().ok_or("not a string")?;
        s.parse::<f64>()
            .map(Value::from)
            .map_err(|e| Exception::new(e.to_string()))
    };

    let input = ops::of_nullable(Value::from("21"));
    let parsed = ops::bind(|s| Ok::<_, Infallible>(ops::try_op(parse, s)), input).unwrap();
    let doubled = ops::map(
        |n| Ok::<_, Infallible>(Value::from(n.as_number().unwrap_or(0.0) * 2.0)),
        parsed,
    )
    .unwrap();
    assert_eq!(ops::default_arg(doubled, Value::from(0)), Value::from(42));

    let input = ops::of_nullable(Value::from("nope"));
    let parsed = ops::bind(|s| Ok::<_, Infallible>(ops::try_op(parse, s)), input).unwrap();
    assert_eq!(ops::to_nullable(parsed), Value::Null);

    let input = ops::of_nullable(Value::Null);
    let res = ops::or_else(input, some(Value::Undefined));
    assert_eq!(value(&res), Ok(Value::Undefined));
}
