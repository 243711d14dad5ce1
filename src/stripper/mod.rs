use revm::{
    context::{result::ExecutionResult, tx::TxEnvBuilder},
    database::{CacheDB, EmptyDB},
    primitives::{Bytes, TxKind},
    Context, ExecuteEvm, MainBuilder, MainContext,
};
use tracing::{debug, info};

use crate::error::{BindError, Result};

/// Gas budget for constructor execution unless configured otherwise.
pub const DEFAULT_GAS_LIMIT: u64 = 16_000_000;

/// Executes EVM code with the given call input and returns what it `RETURN`s.
pub trait Interpreter {
    fn execute(&self, code: &[u8], input: &[u8]) -> Result<Vec<u8>>;
}

/// Runs the code as a contract-creation transaction on an empty in-memory state.
#[derive(Debug, Clone, Copy)]
pub struct RevmInterpreter {
    gas_limit: u64,
}

impl RevmInterpreter {
    pub fn new(gas_limit: u64) -> Self {
        Self { gas_limit }
    }
}

impl Default for RevmInterpreter {
    fn default() -> Self {
        Self::new(DEFAULT_GAS_LIMIT)
    }
}

impl Interpreter for RevmInterpreter {
    fn execute(&self, code: &[u8], input: &[u8]) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(code.len() + input.len());
        data.extend_from_slice(code);
        data.extend_from_slice(input);

        let tx = TxEnvBuilder::new()
            .kind(TxKind::Create)
            .data(Bytes::from(data))
            .gas_limit(self.gas_limit)
            .build_fill();

        let mut evm = Context::mainnet()
            .with_db(CacheDB::new(EmptyDB::default()))
            .build_mainnet();

        let result = evm
            .transact_one(tx)
            .map_err(|e| BindError::Execution(e.to_string()))?;

        match result {
            ExecutionResult::Success { output, .. } => Ok(output.into_data().to_vec()),
            ExecutionResult::Revert { output, .. } => Err(BindError::Execution(format!(
                "execution reverted: 0x{}",
                hex::encode(output)
            ))),
            ExecutionResult::Halt { reason, .. } => Err(BindError::Execution(format!(
                "execution halted: {:?}",
                reason
            ))),
        }
    }
}

/// Runs deployment bytecode with empty input and returns the runtime code it deploys, hex encoded.
pub fn strip_constructor(interpreter: &dyn Interpreter, bytecode: &str) -> Result<String> {
    let trimmed = bytecode.trim();
    let code = hex::decode(trimmed.strip_prefix("0x").unwrap_or(trimmed))?;
    debug!("Executing {} bytes of deployment code", code.len());

    let runtime = interpreter.execute(&code, &[])?;
    info!(
        "Constructor returned {} bytes of runtime code",
        runtime.len()
    );

    Ok(hex::encode(runtime))
}
