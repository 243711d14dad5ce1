pub mod ast;
pub mod body;
pub mod builder;
pub mod mapper;
pub mod model;

use crate::error::Result;
use crate::parser;
use crate::stripper::Interpreter;
use model::{BindOptions, BindingModel};

/// Parses the ABI text and builds the binding model in one step.
pub fn bind(
    abi_source: &str,
    bytecode: &str,
    options: &BindOptions,
    interpreter: &dyn Interpreter,
) -> Result<BindingModel> {
    let document = parser::parse_abi(abi_source)?;
    builder::build(
        &document.functions,
        &document.value,
        bytecode,
        document.constructor_inputs.as_ref().map(Vec::len),
        options,
        interpreter,
    )
}
