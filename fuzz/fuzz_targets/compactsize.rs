#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok((n, nbytes)) = legacy_tx::read_compact_size_bytes(data) else {
        return;
    };
    let prefix = &data[..nbytes];
    let enc = legacy_tx::compact_size_bytes(n);
    if enc != prefix {
        panic!("non-minimal or mismatch: got={enc:02x?} want_prefix={prefix:02x?}");
    }
});
