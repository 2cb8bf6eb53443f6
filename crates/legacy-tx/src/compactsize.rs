use crate::error::TxError;
use crate::wire_read::Reader;

pub fn read_compact_size(r: &mut Reader<'_>) -> Result<(u64, usize), TxError> {
    let start = r.offset();
    let tag = r.read_u8()?;

    let (v, minimal_ok) = match tag {
        0x00..=0xfc => (tag as u64, true),
        0xfd => {
            let v = r.read_u16_le()? as u64;
            (v, v >= 0xfd)
        }
        0xfe => {
            let v = r.read_u32_le()? as u64;
            (v, v > 0xffff)
        }
        0xff => {
            let v = r.read_u64_le()?;
            (v, v > 0xffff_ffff)
        }
    };

    if !minimal_ok {
        return Err(TxError::parse(format!(
            "non-minimal CompactSize {v} at offset {start}"
        )));
    }

    Ok((v, r.offset() - start))
}

pub fn read_compact_size_bytes(b: &[u8]) -> Result<(u64, usize), TxError> {
    read_compact_size_at(b, 0)
}

/// Decodes the CompactSize starting at `offset`, returning the value and the
/// number of bytes it occupied.
pub fn read_compact_size_at(b: &[u8], offset: usize) -> Result<(u64, usize), TxError> {
    let mut r = Reader::at(b, offset);
    read_compact_size(&mut r)
}

pub fn encode_compact_size(n: u64, out: &mut Vec<u8>) {
    match n {
        0x00..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

pub fn compact_size_bytes(n: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(9);
    encode_compact_size(n, &mut out);
    out
}

pub fn compact_size_len(n: u64) -> usize {
    match n {
        0x00..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    /// Every value encodes to the length `compact_size_len` reports and decodes back.
    #[kani::proof]
    fn verify_compact_size_roundtrip() {
        let n: u64 = kani::any();
        let b = compact_size_bytes(n);
        assert_eq!(b.len(), compact_size_len(n));
        let got = read_compact_size_bytes(&b);
        assert!(matches!(got, Ok((v, used)) if v == n && used == b.len()));
    }

    /// A 0xfd prefix never decodes to a value that fits in one byte.
    #[kani::proof]
    fn verify_compact_size_rejects_short_fd() {
        let lo: u8 = kani::any();
        let hi: u8 = kani::any();
        if let Ok((v, _)) = read_compact_size_bytes(&[0xfd, lo, hi]) {
            assert!(v >= 0xfd);
        }
    }
}
