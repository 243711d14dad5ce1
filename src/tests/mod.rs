use crate::error::{BindError, Result};
use crate::stripper::Interpreter;

mod parser;

const MOD_ABI: &str = r#"[{"name":"mod","inputs":[{"name":"a","type":"uint256"},{"name":"b","type":"uint256"}],"outputs":[{"name":"","type":"uint256"}]}]"#;

/// Deterministic interpreter returning a canned result.
pub struct StubInterpreter {
    pub returns: std::result::Result<Vec<u8>, String>,
}

impl StubInterpreter {
    pub fn returning(bytes: &[u8]) -> Self {
        Self {
            returns: Ok(bytes.to_vec()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            returns: Err(message.to_string()),
        }
    }
}

impl Interpreter for StubInterpreter {
    fn execute(&self, _code: &[u8], _input: &[u8]) -> Result<Vec<u8>> {
        self.returns.clone().map_err(BindError::Execution)
    }
}
