use legacy_tx_crypto::CryptoProvider;

use crate::constants::{
    OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160, OP_PUSH_20, P2PKH_SCRIPT_BYTES,
};
use crate::encode::legacy_preimage;
use crate::error::{ErrorCode, TxError};
use crate::scriptsig::parse_script_sig;
use crate::tx::{Transaction, TxInput};

pub fn p2pkh_script_code(key_hash: &[u8; 20]) -> [u8; P2PKH_SCRIPT_BYTES] {
    let mut out = [0u8; P2PKH_SCRIPT_BYTES];
    out[0] = OP_DUP;
    out[1] = OP_HASH160;
    out[2] = OP_PUSH_20;
    out[3..23].copy_from_slice(key_hash);
    out[23] = OP_EQUALVERIFY;
    out[24] = OP_CHECKSIG;
    out
}

/// Supplies the script placed in the signing input's slot of the preimage.
/// `index` is the input's position in `tx.inputs`.
pub trait ScriptCodeSource {
    fn script_code(
        &self,
        tx: &Transaction,
        index: usize,
        input: &TxInput,
        provider: &dyn CryptoProvider,
    ) -> Result<Vec<u8>, TxError>;
}

/// Rebuilds a P2PKH locking script from the key in the input's own scriptSig.
///
/// Only correct when the spent output really is P2PKH to that same key in that
/// same encoding; use [`KnownPrevouts`] when the previous outputs are at hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct DerivedP2pkh;

impl ScriptCodeSource for DerivedP2pkh {
    fn script_code(
        &self,
        _tx: &Transaction,
        _index: usize,
        input: &TxInput,
        provider: &dyn CryptoProvider,
    ) -> Result<Vec<u8>, TxError> {
        let sig = parse_script_sig(&input.script_sig)?;
        let key_hash = provider.hash160(sig.public_key.as_bytes());
        Ok(p2pkh_script_code(&key_hash).to_vec())
    }
}

/// Locking scripts of the outputs being spent, in input order.
#[derive(Clone, Copy, Debug)]
pub struct KnownPrevouts<'a>(pub &'a [Vec<u8>]);

impl ScriptCodeSource for KnownPrevouts<'_> {
    fn script_code(
        &self,
        _tx: &Transaction,
        index: usize,
        _input: &TxInput,
        _provider: &dyn CryptoProvider,
    ) -> Result<Vec<u8>, TxError> {
        self.0.get(index).cloned().ok_or_else(|| {
            TxError::new(
                ErrorCode::TxErrInputIndex,
                format!("no previous output script for input {index}"),
            )
        })
    }
}

pub(crate) fn find_input(tx: &Transaction, input_id: usize) -> Result<&TxInput, TxError> {
    tx.inputs.get(input_id).ok_or_else(|| {
        TxError::new(
            ErrorCode::TxErrInputIndex,
            format!(
                "input {input_id} not in transaction with {} inputs",
                tx.inputs.len()
            ),
        )
    })
}

pub fn preimage_with_source(
    tx: &Transaction,
    input_id: usize,
    source: &dyn ScriptCodeSource,
    provider: &dyn CryptoProvider,
) -> Result<Vec<u8>, TxError> {
    let input = find_input(tx, input_id)?;
    let script_code = source.script_code(tx, input_id, input, provider)?;
    legacy_preimage(tx, input_id, &script_code)
}

/// The exact bytes that were hashed and signed for input `input_id`.
pub fn signing_preimage(
    tx: &Transaction,
    input_id: usize,
    provider: &dyn CryptoProvider,
) -> Result<Vec<u8>, TxError> {
    preimage_with_source(tx, input_id, &DerivedP2pkh, provider)
}

pub fn sighash_all_digest(
    tx: &Transaction,
    input_id: usize,
    source: &dyn ScriptCodeSource,
    provider: &dyn CryptoProvider,
) -> Result<[u8; 32], TxError> {
    let preimage = preimage_with_source(tx, input_id, source, provider)?;
    Ok(provider.sha256d(&preimage))
}
