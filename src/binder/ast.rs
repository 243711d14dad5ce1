use alloy_primitives::keccak256;
use std::fmt;

/// One ABI type, as described by a canonical type string plus tuple components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Address,
    Bool,
    /// `bits` is `None` when the source spelled plain `int`/`uint`; other
    /// widths are kept as written, standard or not.
    Int { signed: bool, bits: Option<u32> },
    /// `(bits, decimals)` is `None` for plain `fixed`/`ufixed`, i.e. `128x18`.
    Fixed {
        signed: bool,
        precision: Option<(u32, u32)>,
    },
    Function,
    FixedBytes(usize),
    Bytes,
    String,
    /// `len` is `None` for dynamic arrays.
    Array {
        element: Box<TypeDescriptor>,
        len: Option<usize>,
    },
    Tuple(Vec<TupleField>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleField {
    pub name: String,
    pub kind: TypeDescriptor,
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Address => write!(f, "address"),
            TypeDescriptor::Bool => write!(f, "bool"),
            TypeDescriptor::Int { signed, bits } => {
                let prefix = if *signed { "int" } else { "uint" };
                write!(f, "{}{}", prefix, bits.unwrap_or(256))
            }
            TypeDescriptor::Fixed { signed, precision } => {
                let prefix = if *signed { "fixed" } else { "ufixed" };
                let (bits, decimals) = precision.unwrap_or((128, 18));
                write!(f, "{}{}x{}", prefix, bits, decimals)
            }
            TypeDescriptor::Function => write!(f, "function"),
            TypeDescriptor::FixedBytes(size) => write!(f, "bytes{}", size),
            TypeDescriptor::Bytes => write!(f, "bytes"),
            TypeDescriptor::String => write!(f, "string"),
            TypeDescriptor::Array { element, len } => match len {
                Some(len) => write!(f, "{}[{}]", element, len),
                None => write!(f, "{}[]", element),
            },
            TypeDescriptor::Tuple(fields) => {
                write!(f, "(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", field.kind)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// May be empty; the ABI allows anonymous parameters.
    pub name: String,
    pub kind: TypeDescriptor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateMutability {
    Pure,
    View,
    #[default]
    NonPayable,
    Payable,
}

impl StateMutability {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pure" => Some(StateMutability::Pure),
            "view" => Some(StateMutability::View),
            "nonpayable" => Some(StateMutability::NonPayable),
            "payable" => Some(StateMutability::Payable),
            _ => None,
        }
    }
}

/// A function entry of the ABI document, types already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiFunction {
    pub name: String,
    pub inputs: Vec<Parameter>,
    pub outputs: Vec<Parameter>,
    pub state_mutability: StateMutability,
}

impl AbiFunction {
    /// `name(t1,t2,...)` over canonical input types.
    pub fn signature(&self) -> String {
        let types: Vec<String> = self.inputs.iter().map(|p| p.kind.to_string()).collect();
        format!("{}({})", self.name, types.join(","))
    }

    pub fn selector(&self) -> Selector {
        Selector::from_signature(&self.signature())
    }

    /// Human readable form, e.g. `function transfer(address to, uint256 amount) returns(bool )`.
    ///
    /// Every parameter renders as `type name`, so unnamed ones keep a trailing space.
    pub fn describe(&self) -> String {
        let list = |params: &[Parameter]| {
            params
                .iter()
                .map(|p| format!("{} {}", p.kind, p.name))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let state = match self.state_mutability {
            StateMutability::Pure => "pure ",
            StateMutability::View => "view ",
            StateMutability::Payable => "payable ",
            StateMutability::NonPayable => "",
        };

        format!(
            "function {}({}) {}returns({})",
            self.name,
            list(self.inputs.as_slice()),
            state,
            list(self.outputs.as_slice())
        )
    }
}

/// First four bytes of the Keccak-256 digest of a canonical signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(pub [u8; 4]);

impl Selector {
    pub fn from_signature(signature: &str) -> Self {
        let digest = keccak256(signature.as_bytes());
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&digest[..4]);
        Selector(bytes)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
