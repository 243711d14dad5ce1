use pest::Parser;
use pest_derive::Parser;

use super::RawParam;
use crate::binder::ast::{TupleField, TypeDescriptor};
use crate::error::{BindError, Result};

#[derive(Parser)]
#[grammar = "parser/abi_type.pest"]
pub struct AbiTypeParser;

/// Parses a canonical type string. `components` is only consulted for tuples.
pub fn parse_type(ty: &str, components: &[RawParam]) -> Result<TypeDescriptor> {
    let invalid = |reason: &str| BindError::InvalidType {
        ty: ty.to_string(),
        reason: reason.to_string(),
    };

    let root = AbiTypeParser::parse(Rule::abi_type, ty)
        .map_err(|_| invalid("not a canonical ABI type"))?
        .next()
        .ok_or_else(|| invalid("empty type"))?;

    let mut kind = None;
    for pair in root.into_inner() {
        match pair.as_rule() {
            Rule::tuple => {
                if components.is_empty() {
                    return Err(invalid("tuple without components"));
                }
                let fields = components
                    .iter()
                    .map(|c| {
                        Ok(TupleField {
                            name: c.name.clone(),
                            kind: parse_type(&c.ty, &c.components)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                kind = Some(TypeDescriptor::Tuple(fields));
            }
            Rule::address => kind = Some(TypeDescriptor::Address),
            Rule::boolean => kind = Some(TypeDescriptor::Bool),
            Rule::string => kind = Some(TypeDescriptor::String),
            Rule::dynamic_bytes => kind = Some(TypeDescriptor::Bytes),
            Rule::fixed_bytes => {
                let size = pair
                    .into_inner()
                    .next()
                    .and_then(|w| w.as_str().parse::<usize>().ok())
                    .filter(|size| (1..=32).contains(size))
                    .ok_or_else(|| invalid("fixed bytes length must be between 1 and 32"))?;
                kind = Some(TypeDescriptor::FixedBytes(size));
            }
            Rule::function => kind = Some(TypeDescriptor::Function),
            Rule::integer => {
                let mut signed = false;
                let mut bits = None;
                for part in pair.into_inner() {
                    match part.as_rule() {
                        Rule::signedness => signed = part.as_str() == "int",
                        Rule::width => bits = Some(parse_digits(part.as_str(), &invalid)?),
                        _ => {}
                    }
                }
                kind = Some(TypeDescriptor::Int { signed, bits });
            }
            Rule::fixed_point => {
                let mut signed = false;
                let mut bits = None;
                let mut decimals = None;
                for part in pair.into_inner() {
                    match part.as_rule() {
                        Rule::fixed_signedness => signed = part.as_str() == "fixed",
                        Rule::width => bits = Some(parse_digits(part.as_str(), &invalid)?),
                        Rule::decimals => decimals = Some(parse_digits(part.as_str(), &invalid)?),
                        _ => {}
                    }
                }
                kind = Some(TypeDescriptor::Fixed {
                    signed,
                    precision: bits.zip(decimals),
                });
            }
            Rule::dimension => {
                let element = kind.take().ok_or_else(|| invalid("array without element type"))?;
                let len = match pair.into_inner().next() {
                    Some(len) => Some(
                        len.as_str()
                            .parse::<usize>()
                            .map_err(|_| invalid("array length out of range"))?,
                    ),
                    None => None,
                };
                kind = Some(TypeDescriptor::Array {
                    element: Box::new(element),
                    len,
                });
            }
            _ => {}
        }
    }

    kind.ok_or_else(|| invalid("missing base type"))
}

/// Any digit run is accepted; only values that do not fit are rejected.
fn parse_digits(digits: &str, invalid: &dyn Fn(&str) -> BindError) -> Result<u32> {
    digits
        .parse::<u32>()
        .map_err(|_| invalid("width out of range"))
}
