use serde::Serialize;

use crate::error::{ErrorCode, TxError};
use crate::tx::{Transaction, TxInput, TxOutput};

/// Inspection form of a transaction with byte fields rendered as hex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionView {
    pub version: u32,
    pub inputs: Vec<InputView>,
    pub outputs: Vec<OutputView>,
    pub locktime: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub prev_hash: String,
    /// Big-endian hex.
    pub output_index: String,
    pub script_sig: String,
    /// Wire-order hex.
    pub sequence: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputView {
    pub amount: u64,
    pub script: String,
}

impl From<&TxInput> for InputView {
    fn from(i: &TxInput) -> Self {
        Self {
            prev_hash: hex::encode(i.prev_tx_hash),
            output_index: hex::encode(i.output_index.to_be_bytes()),
            script_sig: hex::encode(&i.script_sig),
            sequence: hex::encode(i.sequence.to_le_bytes()),
        }
    }
}

impl From<&TxOutput> for OutputView {
    fn from(o: &TxOutput) -> Self {
        Self {
            amount: o.amount,
            script: hex::encode(&o.script),
        }
    }
}

impl TransactionView {
    pub fn to_json(&self) -> Result<String, TxError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TxError::new(ErrorCode::TxErrSerialize, format!("view: {e}")))
    }
}

impl Transaction {
    pub fn view(&self) -> TransactionView {
        TransactionView {
            version: self.version,
            inputs: self.inputs.iter().map(InputView::from).collect(),
            outputs: self.outputs.iter().map(OutputView::from).collect(),
            locktime: self.locktime,
        }
    }
}
