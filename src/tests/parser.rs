use crate::binder::ast::{StateMutability, TypeDescriptor};
use crate::error::BindError;
use crate::parser::{canonicalize, parse_abi, parse_type, RawParam};
use anyhow::Result;

fn uint256() -> TypeDescriptor {
    TypeDescriptor::Int {
        signed: false,
        bits: Some(256),
    }
}

#[test]
fn test_parse_elementary_types() -> Result<()> {
    assert_eq!(parse_type("address", &[])?, TypeDescriptor::Address);
    assert_eq!(parse_type("bool", &[])?, TypeDescriptor::Bool);
    assert_eq!(parse_type("string", &[])?, TypeDescriptor::String);
    assert_eq!(parse_type("bytes", &[])?, TypeDescriptor::Bytes);
    assert_eq!(parse_type("bytes4", &[])?, TypeDescriptor::FixedBytes(4));
    assert_eq!(parse_type("uint256", &[])?, uint256());
    assert_eq!(
        parse_type("int", &[])?,
        TypeDescriptor::Int {
            signed: true,
            bits: None
        }
    );
    Ok(())
}

#[test]
fn test_omitted_width_is_canonically_256() -> Result<()> {
    assert_eq!(parse_type("uint", &[])?.to_string(), "uint256");
    assert_eq!(parse_type("int[]", &[])?.to_string(), "int256[]");
    Ok(())
}

#[test]
fn test_non_standard_widths_are_kept() -> Result<()> {
    assert_eq!(
        parse_type("uint7", &[])?,
        TypeDescriptor::Int {
            signed: false,
            bits: Some(7)
        }
    );
    assert_eq!(parse_type("int300", &[])?.to_string(), "int300");
    assert_eq!(parse_type("uint0", &[])?.to_string(), "uint0");
    assert_eq!(parse_type("uint99999", &[])?.to_string(), "uint99999");
    Ok(())
}

#[test]
fn test_parse_function_and_fixed_point() -> Result<()> {
    assert_eq!(parse_type("function", &[])?, TypeDescriptor::Function);
    assert_eq!(
        parse_type("fixed128x18", &[])?,
        TypeDescriptor::Fixed {
            signed: true,
            precision: Some((128, 18))
        }
    );
    assert_eq!(
        parse_type("ufixed", &[])?,
        TypeDescriptor::Fixed {
            signed: false,
            precision: None
        }
    );
    assert_eq!(parse_type("ufixed", &[])?.to_string(), "ufixed128x18");
    assert_eq!(parse_type("fixed8x1[2]", &[])?.to_string(), "fixed8x1[2]");
    Ok(())
}

#[test]
fn test_parse_nested_arrays() -> Result<()> {
    let kind = parse_type("uint256[2][]", &[])?;
    assert_eq!(
        kind,
        TypeDescriptor::Array {
            element: Box::new(TypeDescriptor::Array {
                element: Box::new(uint256()),
                len: Some(2),
            }),
            len: None,
        }
    );
    assert_eq!(kind.to_string(), "uint256[2][]");
    Ok(())
}

#[test]
fn test_parse_tuple_components() -> Result<()> {
    let components: Vec<RawParam> = serde_json::from_str(
        r#"[{"name":"owner","type":"address"},{"name":"ids","type":"uint64[]"}]"#,
    )?;
    let kind = parse_type("tuple[]", &components)?;
    assert_eq!(kind.to_string(), "(address,uint64[])[]");

    match kind {
        TypeDescriptor::Array { element, len: None } => match *element {
            TypeDescriptor::Tuple(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].name, "owner");
                assert_eq!(fields[1].name, "ids");
            }
            other => panic!("Expected tuple element, got {:?}", other),
        },
        other => panic!("Expected dynamic array, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_reject_malformed_types() {
    for ty in [
        "uint4294967296", "bytes0", "bytes33", "foo", "uint256[", "[]", "", "tuple", "fixed128",
        "ufixed8x",
    ] {
        assert!(
            matches!(parse_type(ty, &[]), Err(BindError::InvalidType { .. })),
            "{} should be rejected",
            ty
        );
    }
}

#[test]
fn test_parse_abi_functions_in_order() -> Result<()> {
    let source = r#"[
        {"type":"constructor","inputs":[]},
        {"type":"function","name":"b","inputs":[],"outputs":[],"stateMutability":"view"},
        {"type":"event","name":"Transfer","inputs":[{"name":"from","type":"address","indexed":true}]},
        {"name":"a","inputs":[{"name":"x","type":"uint8"}],"outputs":[],"constant":true},
        {"type":"function","name":"c","inputs":[],"outputs":[],"payable":true}
    ]"#;
    let document = parse_abi(source)?;

    let names: Vec<&str> = document.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["b", "a", "c"]);
    assert_eq!(document.functions[0].state_mutability, StateMutability::View);
    assert_eq!(document.functions[1].state_mutability, StateMutability::View);
    assert_eq!(document.functions[2].state_mutability, StateMutability::Payable);
    assert_eq!(document.constructor_inputs.map(|inputs| inputs.len()), Some(0));
    Ok(())
}

#[test]
fn test_parse_abi_rejects_truncated_json() {
    let source = r#"[{"name":"mod","inputs":[{"name":"a","type":"uint256"}"#;
    assert!(matches!(parse_abi(source), Err(BindError::Json(_))));
}

#[test]
fn test_parse_abi_rejects_non_array() {
    assert!(matches!(
        parse_abi(r#"{"name":"mod"}"#),
        Err(BindError::MalformedAbi(_))
    ));
}

#[test]
fn test_parse_abi_rejects_wrong_shape() {
    assert!(matches!(
        parse_abi(r#"[{"name":"mod","inputs":"nope"}]"#),
        Err(BindError::Json(_))
    ));
    assert!(matches!(
        parse_abi(r#"[{"type":"method","name":"mod"}]"#),
        Err(BindError::MalformedAbi(_))
    ));
}

#[test]
fn test_parse_abi_rejects_empty_method_name() {
    let source = r#"[{"name":"ok","inputs":[],"outputs":[]},{"name":"","inputs":[],"outputs":[]}]"#;
    assert!(matches!(
        parse_abi(source),
        Err(BindError::EmptyMethodName(1))
    ));
}

#[test]
fn test_canonicalize_keeps_key_order_and_escapes() -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str("[ {\"name\" : \"mod\",\n \"inputs\": [] } ]")?;
    assert_eq!(
        canonicalize(&value)?,
        r#"[{\"name\":\"mod\",\"inputs\":[]}]"#
    );

    let value: serde_json::Value = serde_json::from_str(r#"["a\"b"]"#)?;
    assert_eq!(canonicalize(&value)?, r#"[\"a\\\"b\"]"#);
    Ok(())
}
