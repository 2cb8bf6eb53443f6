use core::fmt;

use legacy_tx_crypto::CryptoError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    TxErrParse,
    TxErrInputType,
    TxErrInputIndex,
    TxErrSighashType,
    TxErrPubkeyEncoding,
    TxErrSigEncoding,
    TxErrConfig,
    TxErrSerialize,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::TxErrParse => "TX_ERR_PARSE",
            ErrorCode::TxErrInputType => "TX_ERR_INPUT_TYPE",
            ErrorCode::TxErrInputIndex => "TX_ERR_INPUT_INDEX",
            ErrorCode::TxErrSighashType => "TX_ERR_SIGHASH_TYPE",
            ErrorCode::TxErrPubkeyEncoding => "TX_ERR_PUBKEY_ENCODING",
            ErrorCode::TxErrSigEncoding => "TX_ERR_SIG_ENCODING",
            ErrorCode::TxErrConfig => "TX_ERR_CONFIG",
            ErrorCode::TxErrSerialize => "TX_ERR_SERIALIZE",
        }
    }

    /// Malformed or truncated wire data.
    pub fn is_format(self) -> bool {
        matches!(self, ErrorCode::TxErrParse)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error value only; nothing is logged when one is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxError {
    pub code: ErrorCode,
    pub msg: String,
}

impl TxError {
    pub fn new(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    pub(crate) fn parse(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::TxErrParse, msg)
    }
}

impl fmt::Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            f.write_str(self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code, self.msg)
        }
    }
}

impl std::error::Error for TxError {}

impl From<CryptoError> for TxError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::InvalidPublicKey(m) => TxError::new(ErrorCode::TxErrPubkeyEncoding, m),
            CryptoError::InvalidSignature(m) => TxError::new(ErrorCode::TxErrSigEncoding, m),
        }
    }
}
