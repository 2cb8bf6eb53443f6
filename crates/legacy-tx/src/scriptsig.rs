use legacy_tx_crypto::{CryptoProvider, PublicKeyBytes};

use crate::error::TxError;
use crate::tx::Transaction;
use crate::wire_read::Reader;

/// Largest length a single-byte direct push can declare; 0x4c and up are
/// OP_PUSHDATA opcodes rather than lengths.
const MAX_DIRECT_PUSH: u8 = 0x4b;

/// The two pushes of a P2PKH unlocking script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptSig<'a> {
    pub der_signature: &'a [u8],
    pub sighash_type: u8,
    pub public_key: PublicKeyBytes,
}

impl ScriptSig<'_> {
    /// The signature as low-S `r || s`.
    pub fn normalized_signature(&self, provider: &dyn CryptoProvider) -> Result<[u8; 64], TxError> {
        Ok(provider.normalize_der_signature(self.der_signature)?)
    }
}

fn read_push<'a>(r: &mut Reader<'a>, what: &str) -> Result<&'a [u8], TxError> {
    let len = r.read_u8()?;
    if len == 0 || len > MAX_DIRECT_PUSH {
        return Err(TxError::parse(format!(
            "script_sig: {what} push opcode 0x{len:02x} is not a direct data push"
        )));
    }
    if len as usize > r.remaining() {
        return Err(TxError::parse(format!(
            "script_sig: {what} push of {len} bytes exceeds remaining {}",
            r.remaining()
        )));
    }
    r.read_bytes(len as usize, what)
}

/// Splits `[len1][DER signature || sighash byte][len2][public key]`.
pub fn parse_script_sig(s: &[u8]) -> Result<ScriptSig<'_>, TxError> {
    let mut r = Reader::new(s);

    let sig_push = read_push(&mut r, "signature")?;
    let (sighash_type, der_signature) = match sig_push.split_last() {
        Some((t, der)) if !der.is_empty() => (*t, der),
        _ => return Err(TxError::parse("script_sig: signature push holds no DER bytes")),
    };

    let key_push = read_push(&mut r, "public key")?;
    if r.remaining() != 0 {
        return Err(TxError::parse(format!(
            "script_sig: {} trailing bytes after public key",
            r.remaining()
        )));
    }
    let public_key = PublicKeyBytes::from_slice(key_push)?;

    Ok(ScriptSig {
        der_signature,
        sighash_type,
        public_key,
    })
}

impl Transaction {
    /// The public key pushed by each input's scriptSig, in input order.
    pub fn input_public_keys(&self) -> Result<Vec<PublicKeyBytes>, TxError> {
        self.inputs
            .iter()
            .map(|i| parse_script_sig(&i.script_sig).map(|s| s.public_key))
            .collect()
    }

    /// hash160 of each input's public key, as committed to by a P2PKH output.
    pub fn input_hash160s(&self, provider: &dyn CryptoProvider) -> Result<Vec<[u8; 20]>, TxError> {
        Ok(self
            .input_public_keys()?
            .iter()
            .map(|k| provider.hash160(k.as_bytes()))
            .collect())
    }
}
