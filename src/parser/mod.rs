pub mod types;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::binder::ast::{AbiFunction, Parameter, StateMutability};
use crate::error::{BindError, Result};

pub use types::parse_type;

/// A parameter exactly as it appears in the ABI JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct RawParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub components: Vec<RawParam>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "type", default = "default_entry_type")]
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    inputs: Vec<RawParam>,
    #[serde(default)]
    outputs: Vec<RawParam>,
    #[serde(rename = "stateMutability")]
    state_mutability: Option<String>,
    #[serde(default)]
    constant: bool,
    #[serde(default)]
    payable: bool,
}

fn default_entry_type() -> String {
    "function".to_string()
}

/// The parts of an ABI document the binder cares about.
#[derive(Debug, Clone)]
pub struct AbiDocument {
    /// Functions in declaration order.
    pub functions: Vec<AbiFunction>,
    pub constructor_inputs: Option<Vec<Parameter>>,
    pub value: Value,
}

pub fn parse_abi(source: &str) -> Result<AbiDocument> {
    let value: Value = serde_json::from_str(source)?;
    if !value.is_array() {
        return Err(BindError::MalformedAbi(
            "expected a JSON array of ABI entries".to_string(),
        ));
    }

    let entries: Vec<RawEntry> = serde_json::from_value(value.clone())?;

    let mut document = AbiDocument {
        functions: Vec::new(),
        constructor_inputs: None,
        value,
    };

    for (position, entry) in entries.into_iter().enumerate() {
        match entry.kind.as_str() {
            "function" => {
                if entry.name.is_empty() {
                    return Err(BindError::EmptyMethodName(position));
                }
                document.functions.push(parse_function(entry)?);
            }
            "constructor" => {
                document.constructor_inputs = Some(parse_params(&entry.inputs)?);
            }
            "event" | "error" | "fallback" | "receive" => {
                debug!("Skipping {} entry {:?}", entry.kind, entry.name);
            }
            other => {
                return Err(BindError::MalformedAbi(format!(
                    "unknown entry type `{}` at position {}",
                    other, position
                )));
            }
        }
    }

    Ok(document)
}

fn parse_function(entry: RawEntry) -> Result<AbiFunction> {
    let state_mutability = match entry.state_mutability.as_deref() {
        Some(value) => StateMutability::parse(value).ok_or_else(|| {
            BindError::MalformedAbi(format!(
                "unknown stateMutability `{}` on `{}`",
                value, entry.name
            ))
        })?,
        None if entry.constant => StateMutability::View,
        None if entry.payable => StateMutability::Payable,
        None => StateMutability::NonPayable,
    };

    Ok(AbiFunction {
        inputs: parse_params(&entry.inputs)?,
        outputs: parse_params(&entry.outputs)?,
        name: entry.name,
        state_mutability,
    })
}

fn parse_params(params: &[RawParam]) -> Result<Vec<Parameter>> {
    params
        .iter()
        .map(|p| {
            Ok(Parameter {
                name: p.name.clone(),
                kind: parse_type(&p.ty, &p.components)?,
            })
        })
        .collect()
}

/// Compact JSON text with key order preserved, escaped for a double-quoted literal.
pub fn canonicalize(value: &Value) -> Result<String> {
    let compact = serde_json::to_string(value)?;
    Ok(compact.replace('\\', "\\\\").replace('"', "\\\""))
}
