use crate::compactsize::read_compact_size;
use crate::constants::*;
use crate::error::{ErrorCode, TxError};
use crate::limits::DecodeLimits;
use crate::wire_read::Reader;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub locktime: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    /// Natural (display) byte order; the wire carries it reversed.
    pub prev_tx_hash: [u8; 32],
    pub output_index: u32,
    pub script_sig: Vec<u8>,
    pub sequence: u32,
    /// Position within the owning transaction, as assigned by decoding and
    /// `Transaction::new`. Signing and verification address inputs by their
    /// position in `inputs`, never by this field.
    pub id: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutput {
    pub amount: u64,
    pub script: Vec<u8>,
}

/// A raw transaction handed in either as hex text or as bytes.
#[derive(Clone, Copy, Debug)]
pub enum RawTx<'a> {
    Hex(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for RawTx<'a> {
    fn from(s: &'a str) -> Self {
        RawTx::Hex(s)
    }
}

impl<'a> From<&'a String> for RawTx<'a> {
    fn from(s: &'a String) -> Self {
        RawTx::Hex(s)
    }
}

impl<'a> From<&'a [u8]> for RawTx<'a> {
    fn from(b: &'a [u8]) -> Self {
        RawTx::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for RawTx<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        RawTx::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for RawTx<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        RawTx::Bytes(b)
    }
}

impl TxInput {
    pub fn new(prev_tx_hash: [u8; 32], output_index: u32, script_sig: Vec<u8>, sequence: u32) -> Self {
        Self {
            prev_tx_hash,
            output_index,
            script_sig,
            sequence,
            id: 0,
        }
    }
}

impl Transaction {
    /// Builds a transaction from parts. Input ids are reassigned by position.
    pub fn new(
        mut inputs: Vec<TxInput>,
        outputs: Vec<TxOutput>,
        locktime: u32,
        version: u32,
    ) -> Result<Self, TxError> {
        if outputs.is_empty() {
            return Err(TxError::parse("no outputs found"));
        }
        for (i, input) in inputs.iter_mut().enumerate() {
            input.id = i;
        }
        Ok(Self {
            version,
            inputs,
            outputs,
            locktime,
        })
    }

    pub fn decode<'a>(raw: impl Into<RawTx<'a>>) -> Result<Self, TxError> {
        Self::decode_with_limits(raw, &DecodeLimits::default())
    }

    pub fn decode_with_limits<'a>(
        raw: impl Into<RawTx<'a>>,
        limits: &DecodeLimits,
    ) -> Result<Self, TxError> {
        match raw.into() {
            RawTx::Bytes(b) => parse_tx_with_limits(b, limits),
            RawTx::Hex(s) => {
                let b = hex::decode(s.trim()).map_err(|e| {
                    TxError::new(
                        ErrorCode::TxErrInputType,
                        format!("raw transaction must be hex text or bytes: {e}"),
                    )
                })?;
                parse_tx_with_limits(&b, limits)
            }
        }
    }
}

pub fn parse_tx(b: &[u8]) -> Result<Transaction, TxError> {
    parse_tx_with_limits(b, &DecodeLimits::default())
}

pub fn parse_tx_with_limits(b: &[u8], limits: &DecodeLimits) -> Result<Transaction, TxError> {
    let mut r = Reader::new(b);

    let version = r.read_u32_le()?;

    let (in_count, _) = read_compact_size(&mut r)?;
    if in_count > limits.max_inputs {
        return Err(TxError::parse(format!(
            "input_count {in_count} exceeds limit {}",
            limits.max_inputs
        )));
    }
    let in_count_usize = in_count as usize;

    let mut inputs = Vec::with_capacity(in_count_usize.min(r.remaining() / MIN_INPUT_BYTES));
    for i in 0..in_count_usize {
        if r.remaining() < PREV_TX_HASH_BYTES {
            return Err(TxError::parse(format!(
                "missing previous-transaction hash for input {i} of {in_count}"
            )));
        }
        let mut prev_tx_hash: [u8; 32] = r.read_array("prev_tx_hash")?;
        prev_tx_hash.reverse();

        let output_index = r.read_u32_le()?;

        let (script_sig_len, _) = read_compact_size(&mut r)?;
        if script_sig_len > limits.max_script_bytes {
            return Err(TxError::parse(format!(
                "script_sig_len {script_sig_len} exceeds limit {}",
                limits.max_script_bytes
            )));
        }
        let script_sig = r.read_bytes(script_sig_len as usize, "script_sig")?.to_vec();

        let sequence = r.read_u32_le()?;

        inputs.push(TxInput {
            prev_tx_hash,
            output_index,
            script_sig,
            sequence,
            id: i,
        });
    }

    let (out_count, _) = read_compact_size(&mut r)?;
    if out_count == 0 {
        return Err(TxError::parse("no outputs found"));
    }
    if out_count > limits.max_outputs {
        return Err(TxError::parse(format!(
            "output_count {out_count} exceeds limit {}",
            limits.max_outputs
        )));
    }
    let out_count_usize = out_count as usize;

    let mut outputs = Vec::with_capacity(out_count_usize.min(r.remaining() / MIN_OUTPUT_BYTES));
    for _ in 0..out_count_usize {
        let amount = r.read_u64_le()?;

        let (script_len, _) = read_compact_size(&mut r)?;
        if script_len > limits.max_script_bytes {
            return Err(TxError::parse(format!(
                "script_len {script_len} exceeds limit {}",
                limits.max_script_bytes
            )));
        }
        let script = r.read_bytes(script_len as usize, "script")?.to_vec();

        outputs.push(TxOutput { amount, script });
    }

    let locktime = r.read_u32_le()?;

    if r.remaining() != 0 {
        return Err(TxError::parse(format!(
            "{} trailing bytes after locktime",
            r.remaining()
        )));
    }

    Ok(Transaction {
        version,
        inputs,
        outputs,
        locktime,
    })
}
