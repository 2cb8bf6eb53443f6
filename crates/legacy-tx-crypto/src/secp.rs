use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, VerifyOnly};

use crate::{CryptoError, CryptoProvider};

/// Software provider backed by libsecp256k1.
pub struct Secp256k1Provider {
    secp: Secp256k1<VerifyOnly>,
}

impl Secp256k1Provider {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::verification_only(),
        }
    }
}

impl Default for Secp256k1Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoProvider for Secp256k1Provider {
    fn decompress_public_key(&self, compressed: &[u8; 33]) -> Result<[u8; 65], CryptoError> {
        let pk = PublicKey::from_slice(compressed)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Ok(pk.serialize_uncompressed())
    }

    fn normalize_der_signature(&self, der: &[u8]) -> Result<[u8; 64], CryptoError> {
        // Legacy transactions predate strict DER and low-S rules.
        let mut sig = Signature::from_der_lax(der)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        sig.normalize_s();
        Ok(sig.serialize_compact())
    }

    fn verify_ecdsa(
        &self,
        pubkey: &[u8; 65],
        sig64: &[u8; 64],
        digest32: &[u8; 32],
    ) -> Result<bool, CryptoError> {
        let pk = PublicKey::from_slice(pubkey)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        let sig = Signature::from_compact(sig64)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        let msg = Message::from_digest(*digest32);
        Ok(self.secp.verify_ecdsa(&msg, &sig, &pk).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PublicKeyBytes;

    const PUBKEY: &str = "0239a18d586c34e51238a7c9a27a342abfb35e3e4aa5ac6559889db1dab2816e9d";
    const PUBKEY_UNCOMPRESSED: &str = "0439a18d586c34e51238a7c9a27a342abfb35e3e4aa5ac6559889db1dab2816e9d8442c2f5589f69a7be4197877a765eb04c759774b648b9f798946ad286f63ece";
    const SIG_DER: &str = "304402201f6e18f4532e14f328bc820cb78c53c57c91b1da9949fecb8cf42318b791fb38022045e78c9e55df1cf3db74bfd52ff2add2b59ba63e068680f0023e6a80ac9f51f4";
    const SIG_DER_HIGH_S: &str = "304502201f6e18f4532e14f328bc820cb78c53c57c91b1da9949fecb8cf42318b791fb38022100ba187361aa20e30c248b402ad00d522c051336a8a8c21f4bbd93f40c2396ef4d";
    const DIGEST: &str = "30944d3c7a9382db6f2e34fd7d1f632fb4095c10da1e35373f44284a2d59eb90";

    fn decode<const N: usize>(s: &str) -> [u8; N] {
        let v = hex::decode(s).expect("hex");
        v.try_into().expect("length")
    }

    #[test]
    fn decompress_matches_known_point() {
        let p = Secp256k1Provider::new();
        let key = PublicKeyBytes::from_slice(&hex::decode(PUBKEY).expect("hex")).expect("key");
        let got = key.to_uncompressed(&p).expect("decompress");
        assert_eq!(hex::encode(got), PUBKEY_UNCOMPRESSED);
    }

    #[test]
    fn decompress_rejects_point_off_curve() {
        let p = Secp256k1Provider::new();
        let mut bad = [0xffu8; 33];
        bad[0] = 0x02;
        assert!(matches!(
            p.decompress_public_key(&bad),
            Err(CryptoError::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn normalize_folds_high_s() {
        let p = Secp256k1Provider::new();
        let low = p
            .normalize_der_signature(&hex::decode(SIG_DER).expect("hex"))
            .expect("low-s");
        let high = p
            .normalize_der_signature(&hex::decode(SIG_DER_HIGH_S).expect("hex"))
            .expect("high-s");
        assert_eq!(low, high);
    }

    #[test]
    fn normalize_rejects_garbage() {
        let p = Secp256k1Provider::new();
        assert!(matches!(
            p.normalize_der_signature(&[0x30, 0x02, 0x01]),
            Err(CryptoError::InvalidSignature(_))
        ));
    }

    #[test]
    fn verify_known_digest() {
        let p = Secp256k1Provider::new();
        let pk: [u8; 65] = decode(PUBKEY_UNCOMPRESSED);
        let sig = p
            .normalize_der_signature(&hex::decode(SIG_DER).expect("hex"))
            .expect("sig");
        let mut digest: [u8; 32] = decode(DIGEST);
        assert!(p.verify_ecdsa(&pk, &sig, &digest).expect("verify"));

        digest[0] ^= 0x01;
        assert!(!p.verify_ecdsa(&pk, &sig, &digest).expect("verify"));
    }
}
