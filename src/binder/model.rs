use super::ast::{Selector, TypeDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOptions {
    pub package: String,
    pub strip_constructor: bool,
}

/// Everything the generator needs to emit one bindings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingModel {
    pub package: String,
    /// Compact ABI JSON, escaped for a double-quoted literal.
    pub abi: String,
    /// Hex bytecode without `0x`.
    pub bytecode: String,
    /// Declaration order of the ABI document.
    pub methods: Vec<MethodBinding>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBinding {
    /// Exported name of the generated function.
    pub name: String,
    /// Key used for `Pack`/`Unpack`.
    pub method: String,
    pub selector: Selector,
    /// Canonical signature, e.g. `transfer(address,uint256)`.
    pub signature: String,
    pub raw: String,
    pub inputs: Vec<BoundParameter>,
    pub outputs: Vec<BoundOutput>,
    pub body: CallBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParameter {
    /// As declared, possibly empty.
    pub name: String,
    /// Identifier used in generated code; `argN` when `name` is empty.
    pub ident: String,
    pub kind: TypeDescriptor,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundOutput {
    pub kind: TypeDescriptor,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallBody {
    /// `a, b`
    pub pack_args: String,
    /// `res[0].(*big.Int), res[1].(bool)`
    pub results: String,
}
