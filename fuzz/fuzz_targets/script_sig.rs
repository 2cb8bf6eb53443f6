#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(sig) = legacy_tx::parse_script_sig(data) else {
        return;
    };
    let key = sig.public_key.as_bytes();
    let der_len = sig.der_signature.len();
    // Two direct pushes, nothing after.
    assert_eq!(data.len(), 1 + der_len + 1 + 1 + key.len());
    assert_eq!(data[0] as usize, der_len + 1);
    assert_eq!(&data[data.len() - key.len()..], key);
});
