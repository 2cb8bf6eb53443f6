use serde::Deserialize;

use crate::error::{ErrorCode, TxError};

/// Optional caps applied while decoding, checked before a declared count or
/// length is acted on.
///
/// The default caps nothing, so every encodable transaction decodes. Loadable
/// from JSON; missing fields stay uncapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeLimits {
    pub max_inputs: u64,
    pub max_outputs: u64,
    pub max_script_bytes: u64,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_inputs: u64::MAX,
            max_outputs: u64::MAX,
            max_script_bytes: u64::MAX,
        }
    }
}

impl DecodeLimits {
    pub fn from_json(s: &str) -> Result<Self, TxError> {
        serde_json::from_str(s)
            .map_err(|e| TxError::new(ErrorCode::TxErrConfig, format!("decode limits: {e}")))
    }
}
