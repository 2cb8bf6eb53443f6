use crate::{CryptoError, CryptoProvider};

pub const COMPRESSED_PUBKEY_BYTES: usize = 33;
pub const UNCOMPRESSED_PUBKEY_BYTES: usize = 65;

/// A SEC1-encoded secp256k1 public key as it appears inside a scriptSig.
///
/// The encoding is kept as supplied: the P2PKH key hash commits to these exact
/// bytes, so a compressed key must not be silently widened before hashing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicKeyBytes {
    Compressed([u8; COMPRESSED_PUBKEY_BYTES]),
    Uncompressed([u8; UNCOMPRESSED_PUBKEY_BYTES]),
}

impl PublicKeyBytes {
    pub fn from_slice(b: &[u8]) -> Result<Self, CryptoError> {
        match (b.len(), b.first()) {
            (COMPRESSED_PUBKEY_BYTES, Some(0x02 | 0x03)) => {
                let mut out = [0u8; COMPRESSED_PUBKEY_BYTES];
                out.copy_from_slice(b);
                Ok(PublicKeyBytes::Compressed(out))
            }
            (UNCOMPRESSED_PUBKEY_BYTES, Some(0x04)) => {
                let mut out = [0u8; UNCOMPRESSED_PUBKEY_BYTES];
                out.copy_from_slice(b);
                Ok(PublicKeyBytes::Uncompressed(out))
            }
            (n, prefix) => Err(CryptoError::InvalidPublicKey(format!(
                "unsupported encoding: {n} bytes, prefix {prefix:02x?}"
            ))),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKeyBytes::Compressed(b) => b,
            PublicKeyBytes::Uncompressed(b) => b,
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, PublicKeyBytes::Compressed(_))
    }

    pub fn to_uncompressed(
        &self,
        provider: &dyn CryptoProvider,
    ) -> Result<[u8; UNCOMPRESSED_PUBKEY_BYTES], CryptoError> {
        match self {
            PublicKeyBytes::Compressed(b) => provider.decompress_public_key(b),
            PublicKeyBytes::Uncompressed(b) => Ok(*b),
        }
    }
}
