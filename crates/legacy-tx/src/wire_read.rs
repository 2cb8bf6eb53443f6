use crate::error::TxError;

pub struct Reader<'a> {
    b: &'a [u8],
    off: usize,
}

impl<'a> Reader<'a> {
    pub fn new(b: &'a [u8]) -> Self {
        Self { b, off: 0 }
    }

    pub fn at(b: &'a [u8], off: usize) -> Self {
        Self { b, off }
    }

    pub fn offset(&self) -> usize {
        self.off
    }

    pub fn remaining(&self) -> usize {
        self.b.len().saturating_sub(self.off)
    }

    pub fn read_u8(&mut self) -> Result<u8, TxError> {
        Ok(self.read_array::<1>("u8")?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16, TxError> {
        Ok(u16::from_le_bytes(self.read_array("u16le")?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, TxError> {
        Ok(u32::from_le_bytes(self.read_array("u32le")?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, TxError> {
        Ok(u64::from_le_bytes(self.read_array("u64le")?))
    }

    pub fn read_array<const N: usize>(&mut self, what: &str) -> Result<[u8; N], TxError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, what)?);
        Ok(out)
    }

    pub fn read_bytes(&mut self, n: usize, what: &str) -> Result<&'a [u8], TxError> {
        if n > self.remaining() {
            return Err(TxError::parse(format!(
                "unexpected EOF ({what}): need {n} bytes at offset {}, have {}",
                self.off,
                self.remaining()
            )));
        }
        let v = &self.b[self.off..self.off + n];
        self.off += n;
        Ok(v)
    }
}
