use ferret_values::{Error, Object, Unwrapped, Value, array};
use pretty_assertions::assert_eq;

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_scalars() {
    assert_eq!(Value::from_json("null").unwrap(), Value::None);
    assert_eq!(Value::from_json("true").unwrap(), Value::Boolean(true));
    assert_eq!(Value::from_json("42").unwrap(), Value::Int(42));
    assert_eq!(Value::from_json("-7").unwrap(), Value::Int(-7));
    assert_eq!(Value::from_json("2.5").unwrap(), Value::Float(2.5));
    assert_eq!(Value::from_json(r#""hi""#).unwrap(), Value::from("hi"));
}

#[test]
fn parse_numbers_outside_i64_become_floats() {
    let v = Value::from_json("18446744073709551615").unwrap();
    assert_eq!(v.as_float(), Some(18446744073709551615.0));
}

#[test]
fn parse_collections() {
    let v = Value::from_json(r#"{"b": [1, {"c": null}], "a": "x"}"#).unwrap();

    let mut inner = Object::new();
    inner.set("c", Value::None);
    let mut expected = Object::new();
    expected.set("a", Value::from("x"));
    expected.set("b", Value::from(array![1, inner]));

    assert_eq!(v, Value::from(expected));
}

#[test]
fn parse_error() {
    let err = Value::from_json("[1, 2").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("json: "));
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn output_has_no_whitespace() {
    let v = Value::from_json("[ 1 , [ 2 , 3 ] , { \"k\" : [ ] } ]").unwrap();
    assert_eq!(v.to_json().unwrap(), r#"[1,[2,3],{"k":[]}]"#);
}

#[test]
fn object_keys_are_sorted() {
    let v = Value::from_json(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    assert_eq!(v.to_json().unwrap(), r#"{"a":2,"m":3,"z":1}"#);
    assert_eq!(v.to_string(), r#"{"a":2,"m":3,"z":1}"#);
}

#[test]
fn non_finite_floats_become_null() {
    let arr = array![f64::NAN, f64::INFINITY, 1.0];
    assert_eq!(arr.to_json().unwrap(), "[null,null,1.0]");
}

// =============================================================================
// Host values
// =============================================================================

#[test]
fn host_values_convert_to_serde_json() {
    let v = Value::from_json(r#"{"list": [1, "two", null], "ok": true}"#).unwrap();

    let host = v.to_host();
    let map = host.as_map().unwrap();
    assert_eq!(map["list"].as_list().map(<[Unwrapped]>::len), Some(3));

    let json = serde_json::Value::from(host);
    assert_eq!(json, serde_json::json!({"list": [1, "two", null], "ok": true}));
}

#[test]
fn host_values_serialize_untagged() {
    let host = array![1, Value::None, "s"].to_host();
    assert_eq!(serde_json::to_string(&host).unwrap(), r#"[1,null,"s"]"#);
}
