//! Cryptography provider interface for legacy P2PKH verification.
//!
//! Transaction code depends only on this narrow interface: hashing, public-key
//! conversion, DER canonicalization and ECDSA verification over secp256k1.

mod error;
pub mod hash;
mod pubkey;
mod secp;

pub use error::CryptoError;
pub use hash::{hash160, sha256, sha256d};
pub use pubkey::{PublicKeyBytes, COMPRESSED_PUBKEY_BYTES, UNCOMPRESSED_PUBKEY_BYTES};
pub use secp::Secp256k1Provider;

pub trait CryptoProvider {
    fn sha256d(&self, input: &[u8]) -> [u8; 32] {
        hash::sha256d(input)
    }

    fn hash160(&self, input: &[u8]) -> [u8; 20] {
        hash::hash160(input)
    }

    /// Expands a 33-byte SEC1 compressed key into its 65-byte `0x04 || X || Y` form.
    fn decompress_public_key(&self, compressed: &[u8; 33]) -> Result<[u8; 65], CryptoError>;

    /// Parses a (possibly non-strict) DER signature and returns it as low-S `r || s`.
    fn normalize_der_signature(&self, der: &[u8]) -> Result<[u8; 64], CryptoError>;

    /// `Ok(false)` means a well-formed signature that does not match; `Err` means
    /// the key or signature could not be interpreted at all.
    fn verify_ecdsa(
        &self,
        pubkey: &[u8; 65],
        sig64: &[u8; 64],
        digest32: &[u8; 32],
    ) -> Result<bool, CryptoError>;
}
