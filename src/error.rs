use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("malformed ABI JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed ABI: {0}")]
    MalformedAbi(String),

    #[error("invalid ABI type `{ty}`: {reason}")]
    InvalidType { ty: String, reason: String },

    #[error("ABI function at position {0} has an empty name")]
    EmptyMethodName(usize),

    #[error("binding name `{binding}` for method `{method}` collides with `{existing}`")]
    NameCollision {
        binding: String,
        method: String,
        existing: String,
    },

    #[error("constructor takes {0} argument(s); constructor code can only be stripped for argument-less constructors")]
    ConstructorArguments(usize),

    #[error("`{0}` is not a valid package name")]
    InvalidPackage(String),

    #[error("bytecode is not valid hex: {0}")]
    InvalidBytecode(#[from] hex::FromHexError),

    #[error("{0}")]
    Execution(String),
}

pub type Result<T> = std::result::Result<T, BindError>;
