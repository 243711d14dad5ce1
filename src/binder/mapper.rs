use super::ast::TypeDescriptor;
use tracing::warn;

/// Go type used for integers wider than 64 bits, or whose width was omitted.
pub const BIG_INT: &str = "*big.Int";

/// Go type of `address`.
pub const ADDRESS: &str = "common.Address";

/// Maps one ABI type to the Go type the binding exposes for it.
pub fn map_type(kind: &TypeDescriptor) -> String {
    match kind {
        TypeDescriptor::Address => ADDRESS.to_string(),
        TypeDescriptor::Int { signed, bits } => match bits {
            Some(width @ (8 | 16 | 32 | 64)) => {
                format!("{}int{}", if *signed { "" } else { "u" }, width)
            }
            _ => BIG_INT.to_string(),
        },
        TypeDescriptor::FixedBytes(size) => format!("[{}]byte", size),
        TypeDescriptor::Bytes => "[]byte".to_string(),
        TypeDescriptor::Bool | TypeDescriptor::String => kind.to_string(),
        TypeDescriptor::Array { .. }
        | TypeDescriptor::Tuple(_)
        | TypeDescriptor::Fixed { .. }
        | TypeDescriptor::Function => {
            let canonical = kind.to_string();
            warn!(
                "Unsupported type {}, emitting its ABI spelling which may not compile",
                canonical
            );
            canonical
        }
    }
}
