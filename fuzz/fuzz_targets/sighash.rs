#![no_main]

use libfuzzer_sys::fuzz_target;

use legacy_tx::{signing_preimage, Secp256k1Provider};

// Last 4 bytes pick the signing input; the rest is the transaction.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let (tx_bytes, sel) = data.split_at(data.len() - 4);
    let Ok(tx) = legacy_tx::parse_tx(tx_bytes) else {
        return;
    };
    if tx.inputs.is_empty() {
        return;
    }
    let sel = u32::from_le_bytes([sel[0], sel[1], sel[2], sel[3]]) as usize % tx.inputs.len();

    let provider = Secp256k1Provider::new();
    let r1 = signing_preimage(&tx, sel, &provider);
    let r2 = signing_preimage(&tx, sel, &provider);
    match (&r1, &r2) {
        (Ok(a), Ok(b)) => {
            if a != b {
                panic!("signing_preimage non-deterministic");
            }
        }
        (Err(a), Err(b)) => assert_eq!(a, b),
        _ => panic!("signing_preimage non-deterministic error/ok mismatch"),
    }
});
