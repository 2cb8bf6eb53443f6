#![no_main]

use libfuzzer_sys::fuzz_target;

// Anything that parses is canonical, so re-encoding must give back the input.
fuzz_target!(|data: &[u8]| {
    let Ok(tx) = legacy_tx::parse_tx(data) else {
        return;
    };
    let enc = tx.raw();
    if enc != data {
        panic!("re-encoding differs: {} bytes in, {} bytes out", data.len(), enc.len());
    }
    let again = legacy_tx::parse_tx(&enc).expect("re-parse of encoded tx");
    assert_eq!(again, tx);
});
