mod compactsize;
pub mod constants;
pub mod encode;
pub mod error;
pub mod limits;
pub mod observer;
pub mod scriptsig;
pub mod sighash;
pub mod tx;
pub mod verify;
pub mod view;
mod wire_read;

pub use compactsize::{
    compact_size_bytes, compact_size_len, encode_compact_size, read_compact_size_at,
    read_compact_size_bytes,
};
pub use encode::{encode, encoded_len, legacy_preimage, tx_bytes};
pub use error::{ErrorCode, TxError};
pub use limits::DecodeLimits;
pub use observer::{NoopObserver, ObservedEvent, RecordingObserver, TracingObserver, VerifyObserver};
pub use scriptsig::{parse_script_sig, ScriptSig};
pub use sighash::{
    p2pkh_script_code, preimage_with_source, sighash_all_digest, signing_preimage, DerivedP2pkh,
    KnownPrevouts, ScriptCodeSource,
};
pub use tx::{parse_tx, parse_tx_with_limits, RawTx, Transaction, TxInput, TxOutput};
pub use verify::{verify, verify_input, verify_with, verify_with_source, FailureKind, VerifyFailure};
pub use view::{InputView, OutputView, TransactionView};

pub use legacy_tx_crypto::{CryptoProvider, PublicKeyBytes, Secp256k1Provider};
