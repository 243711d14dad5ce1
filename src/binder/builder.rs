use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::{debug, info};

use super::ast::{AbiFunction, Parameter};
use super::body::{compose_body, GENERATED_IDENTIFIERS};
use super::mapper::map_type;
use super::model::{BindOptions, BindingModel, BoundOutput, BoundParameter, MethodBinding};
use crate::error::{BindError, Result};
use crate::stripper::{strip_constructor, Interpreter};

/// Identifiers the generated file declares next to the method bindings.
const RESERVED: [&str; 2] = ["ABI", "Bin"];

/// Builds the binding model for one contract.
///
/// `constructor_inputs` is the arity of the ABI constructor, if any; stripping
/// is refused for constructors that take arguments.
pub fn build(
    functions: &[AbiFunction],
    document: &Value,
    bytecode: &str,
    constructor_inputs: Option<usize>,
    options: &BindOptions,
    interpreter: &dyn Interpreter,
) -> Result<BindingModel> {
    validate_package(&options.package)?;

    let bytecode = if options.strip_constructor {
        if let Some(count) = constructor_inputs.filter(|count| *count > 0) {
            return Err(BindError::ConstructorArguments(count));
        }
        info!("Stripping constructor code");
        strip_constructor(interpreter, bytecode)?
    } else {
        bytecode.to_string()
    };

    let abi = crate::parser::canonicalize(document)?;

    let mut methods = Vec::with_capacity(functions.len());
    let mut used_keys = HashSet::new();
    let mut bindings: HashMap<String, String> = RESERVED
        .iter()
        .map(|name| (name.to_string(), name.to_string()))
        .collect();

    for function in functions {
        let method = resolve_overload(&function.name, &used_keys);
        used_keys.insert(method.clone());

        let name = capitalize(&method);
        if let Some(existing) = bindings.get(&name) {
            return Err(BindError::NameCollision {
                binding: name,
                method,
                existing: existing.clone(),
            });
        }
        bindings.insert(name.clone(), method.clone());

        let binding = bind_method(function, name, method);
        debug!(
            "Bound {} as {} ({})",
            binding.signature, binding.name, binding.selector
        );
        methods.push(binding);
    }

    info!("Built bindings for {} method(s)", methods.len());

    Ok(BindingModel {
        package: options.package.clone(),
        abi,
        bytecode,
        methods,
    })
}

fn bind_method(function: &AbiFunction, name: String, method: String) -> MethodBinding {
    let inputs: Vec<BoundParameter> = function
        .inputs
        .iter()
        .zip(parameter_idents(&function.inputs))
        .map(|(input, ident)| BoundParameter {
            name: input.name.clone(),
            ident,
            kind: input.kind.clone(),
            target: map_type(&input.kind),
        })
        .collect();

    let outputs: Vec<BoundOutput> = function
        .outputs
        .iter()
        .map(|output| BoundOutput {
            kind: output.kind.clone(),
            target: map_type(&output.kind),
        })
        .collect();

    let body = compose_body(&inputs, &outputs);

    MethodBinding {
        name,
        method,
        selector: function.selector(),
        signature: function.signature(),
        raw: function.describe(),
        inputs,
        outputs,
        body,
    }
}

/// Go identifiers for the inputs, in order.
///
/// Unnamed inputs take the first `argN` (N from their position up) that no
/// declared input uses. A name that clashes with a generated identifier or an
/// earlier input gets `_` appended until it is free.
pub fn parameter_idents(inputs: &[Parameter]) -> Vec<String> {
    let declared: HashSet<&str> = inputs
        .iter()
        .map(|p| p.name.as_str())
        .filter(|name| !name.is_empty())
        .collect();
    let mut taken: HashSet<String> = HashSet::new();

    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            let clashes = |candidate: &str, taken: &HashSet<String>| {
                GENERATED_IDENTIFIERS.iter().any(|generated| *generated == candidate)
                    || taken.contains(candidate)
                    || (candidate != input.name && declared.contains(candidate))
            };

            let mut ident = if input.name.is_empty() {
                (i..)
                    .map(|n| format!("arg{}", n))
                    .find(|candidate| !clashes(candidate.as_str(), &taken))
                    .unwrap_or_default()
            } else {
                input.name.clone()
            };
            while clashes(ident.as_str(), &taken) {
                ident.push('_');
            }

            taken.insert(ident.clone());
            ident
        })
        .collect()
}

/// Upper-cases the first character only.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Overloads keep the first name; later ones take the first free `name0`, `name1`, ...
pub fn resolve_overload(name: &str, used: &HashSet<String>) -> String {
    if !used.contains(name) {
        return name.to_string();
    }
    (0..)
        .map(|idx| format!("{}{}", name, idx))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| name.to_string())
}

fn validate_package(package: &str) -> Result<()> {
    let mut chars = package.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(BindError::InvalidPackage(package.to_string()))
    }
}
