use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

pub fn sha256(b: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(b);
    h.finalize().into()
}

/// SHA-256 applied twice, as used for transaction ids and signature digests.
pub fn sha256d(b: &[u8]) -> [u8; 32] {
    sha256(&sha256(b))
}

/// RIPEMD-160 of SHA-256; the key hash committed to by a P2PKH locking script.
pub fn hash160(b: &[u8]) -> [u8; 20] {
    let mut h = Ripemd160::new();
    h.update(sha256(b));
    h.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256d_empty() {
        assert_eq!(
            hex::encode(sha256d(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn hash160_empty() {
        assert_eq!(
            hex::encode(hash160(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    #[test]
    fn hash160_compressed_key() {
        let key = hex::decode("0239a18d586c34e51238a7c9a27a342abfb35e3e4aa5ac6559889db1dab2816e9d")
            .expect("hex");
        assert_eq!(
            hex::encode(hash160(&key)),
            "6b48d493de321c80f9ac32d3f7a6c38084337dc0"
        );
    }
}
