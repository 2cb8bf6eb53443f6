use legacy_tx_crypto::CryptoProvider;

use crate::compactsize::{compact_size_len, encode_compact_size};
use crate::constants::SIGHASH_ALL;
use crate::error::{ErrorCode, TxError};
use crate::sighash::signing_preimage;
use crate::tx::{Transaction, TxInput, TxOutput};

fn push_outpoint(out: &mut Vec<u8>, input: &TxInput) {
    let mut prev = input.prev_tx_hash;
    prev.reverse();
    out.extend_from_slice(&prev);
    out.extend_from_slice(&input.output_index.to_le_bytes());
}

fn push_script(out: &mut Vec<u8>, script: &[u8]) {
    encode_compact_size(script.len() as u64, out);
    out.extend_from_slice(script);
}

fn push_output(out: &mut Vec<u8>, output: &TxOutput) {
    out.extend_from_slice(&output.amount.to_le_bytes());
    push_script(out, &output.script);
}

fn push_outputs_and_locktime(out: &mut Vec<u8>, tx: &Transaction) {
    encode_compact_size(tx.outputs.len() as u64, out);
    for output in &tx.outputs {
        push_output(out, output);
    }
    out.extend_from_slice(&tx.locktime.to_le_bytes());
}

/// Canonical wire encoding; the inverse of `parse_tx`.
pub fn tx_bytes(tx: &Transaction) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(tx));
    out.extend_from_slice(&tx.version.to_le_bytes());
    encode_compact_size(tx.inputs.len() as u64, &mut out);
    for input in &tx.inputs {
        push_outpoint(&mut out, input);
        push_script(&mut out, &input.script_sig);
        out.extend_from_slice(&input.sequence.to_le_bytes());
    }
    push_outputs_and_locktime(&mut out, tx);
    out
}

pub fn encoded_len(tx: &Transaction) -> usize {
    let inputs: usize = tx
        .inputs
        .iter()
        .map(|i| 36 + compact_size_len(i.script_sig.len() as u64) + i.script_sig.len() + 4)
        .sum();
    let outputs: usize = tx
        .outputs
        .iter()
        .map(|o| 8 + compact_size_len(o.script.len() as u64) + o.script.len())
        .sum();
    4 + compact_size_len(tx.inputs.len() as u64)
        + inputs
        + compact_size_len(tx.outputs.len() as u64)
        + outputs
        + 4
}

/// Legacy SIGHASH_ALL preimage for the input at position `signing_input`: that
/// input carries `script_code`, every other input an empty script, and the hash
/// type is appended after the locktime.
pub fn legacy_preimage(
    tx: &Transaction,
    signing_input: usize,
    script_code: &[u8],
) -> Result<Vec<u8>, TxError> {
    if signing_input >= tx.inputs.len() {
        return Err(TxError::new(
            ErrorCode::TxErrInputIndex,
            format!(
                "signing input {signing_input} not in transaction with {} inputs",
                tx.inputs.len()
            ),
        ));
    }

    let mut out = Vec::with_capacity(encoded_len(tx) + script_code.len() + 4);
    out.extend_from_slice(&tx.version.to_le_bytes());
    encode_compact_size(tx.inputs.len() as u64, &mut out);
    for (i, input) in tx.inputs.iter().enumerate() {
        push_outpoint(&mut out, input);
        if i == signing_input {
            push_script(&mut out, script_code);
        } else {
            out.push(0x00);
        }
        out.extend_from_slice(&input.sequence.to_le_bytes());
    }
    push_outputs_and_locktime(&mut out, tx);
    out.extend_from_slice(&SIGHASH_ALL.to_le_bytes());
    Ok(out)
}

/// Full encoding when `signing_input` is `None`, otherwise the signing preimage
/// for that input with its script code derived from its own public key.
pub fn encode(
    tx: &Transaction,
    signing_input: Option<usize>,
    provider: &dyn CryptoProvider,
) -> Result<Vec<u8>, TxError> {
    match signing_input {
        None => Ok(tx_bytes(tx)),
        Some(k) => signing_preimage(tx, k, provider),
    }
}

impl Transaction {
    pub fn raw(&self) -> Vec<u8> {
        tx_bytes(self)
    }

    pub fn raw_hex(&self) -> String {
        hex::encode(tx_bytes(self))
    }

    /// Double SHA-256 of the full encoding, in display (reversed) order.
    pub fn txid(&self) -> [u8; 32] {
        let mut h = legacy_tx_crypto::sha256d(&tx_bytes(self));
        h.reverse();
        h
    }
}
