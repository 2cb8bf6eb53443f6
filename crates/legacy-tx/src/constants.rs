pub const DEFAULT_TX_VERSION: u32 = 1;

pub const PREV_TX_HASH_BYTES: usize = 32;

/// Smallest possible encoded input: hash(32) + index(4) + empty script(1) + sequence(4).
pub const MIN_INPUT_BYTES: usize = 41;
/// Smallest possible encoded output: amount(8) + empty script(1).
pub const MIN_OUTPUT_BYTES: usize = 9;

pub const SIGHASH_ALL: u32 = 0x01;

pub const OP_DUP: u8 = 0x76;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_CHECKSIG: u8 = 0xac;
pub const OP_PUSH_20: u8 = 0x14;

pub const P2PKH_SCRIPT_BYTES: usize = 25;
