//! Per-input ECDSA verification of legacy SIGHASH_ALL signatures.
//!
//! Inputs are checked in order and verification stops at the first failure, so
//! a `false` result says nothing about the inputs after the failing one.

use legacy_tx_crypto::{CryptoProvider, Secp256k1Provider};
use thiserror::Error;

use crate::constants::SIGHASH_ALL;
use crate::error::{ErrorCode, TxError};
use crate::observer::{TracingObserver, VerifyObserver};
use crate::scriptsig::parse_script_sig;
use crate::sighash::{find_input, sighash_all_digest, DerivedP2pkh, ScriptCodeSource};
use crate::tx::Transaction;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// Well-formed signature and key that do not match the digest.
    #[error("signature does not verify")]
    BadSignature,

    /// The input could not be interpreted: truncated scriptSig, bad DER,
    /// bad public key, unsupported sighash type.
    #[error("malformed input: {0}")]
    Malformed(TxError),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("input {input_id}: {kind}")]
pub struct VerifyFailure {
    pub input_id: usize,
    pub kind: FailureKind,
}

pub fn verify_input(
    tx: &Transaction,
    input_id: usize,
    source: &dyn ScriptCodeSource,
    provider: &dyn CryptoProvider,
) -> Result<(), FailureKind> {
    let input = find_input(tx, input_id).map_err(FailureKind::Malformed)?;
    let digest =
        sighash_all_digest(tx, input_id, source, provider).map_err(FailureKind::Malformed)?;

    let sig = parse_script_sig(&input.script_sig).map_err(FailureKind::Malformed)?;
    if sig.sighash_type as u32 != SIGHASH_ALL {
        return Err(FailureKind::Malformed(TxError::new(
            ErrorCode::TxErrSighashType,
            format!("sighash type 0x{:02x} is not SIGHASH_ALL", sig.sighash_type),
        )));
    }

    let pubkey = sig
        .public_key
        .to_uncompressed(provider)
        .map_err(|e| FailureKind::Malformed(e.into()))?;
    let sig64 = sig
        .normalized_signature(provider)
        .map_err(FailureKind::Malformed)?;

    match provider.verify_ecdsa(&pubkey, &sig64, &digest) {
        Ok(true) => Ok(()),
        Ok(false) => Err(FailureKind::BadSignature),
        Err(e) => Err(FailureKind::Malformed(e.into())),
    }
}

/// Checks every input in order and returns how many were checked.
pub fn verify_with_source(
    tx: &Transaction,
    source: &dyn ScriptCodeSource,
    provider: &dyn CryptoProvider,
    observer: &dyn VerifyObserver,
) -> Result<usize, VerifyFailure> {
    for (i, input) in tx.inputs.iter().enumerate() {
        match verify_input(tx, i, source, provider) {
            Ok(()) => observer.input_verified(i, input),
            Err(kind) => {
                observer.input_rejected(i, input, &kind);
                return Err(VerifyFailure { input_id: i, kind });
            }
        }
    }
    Ok(tx.inputs.len())
}

pub fn verify_with(
    tx: &Transaction,
    provider: &dyn CryptoProvider,
    observer: &dyn VerifyObserver,
) -> Result<usize, VerifyFailure> {
    verify_with_source(tx, &DerivedP2pkh, provider, observer)
}

/// `true` only if every input's signature verifies. Malformed inputs count as
/// failed signatures.
pub fn verify(tx: &Transaction) -> bool {
    verify_with(tx, &Secp256k1Provider::new(), &TracingObserver).is_ok()
}

impl Transaction {
    pub fn verify(&self) -> bool {
        verify(self)
    }

    pub fn verify_detailed(&self) -> Result<usize, VerifyFailure> {
        verify_with(self, &Secp256k1Provider::new(), &TracingObserver)
    }
}
