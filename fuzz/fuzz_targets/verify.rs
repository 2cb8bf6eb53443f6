#![no_main]

use libfuzzer_sys::fuzz_target;

use legacy_tx::{verify_with, RecordingObserver, Secp256k1Provider};

fuzz_target!(|data: &[u8]| {
    let Ok(tx) = legacy_tx::parse_tx(data) else {
        return;
    };
    let observer = RecordingObserver::new();
    let res = verify_with(&tx, &Secp256k1Provider::new(), &observer);
    let events = observer.events().len();
    match &res {
        Ok(n) => assert_eq!(*n, events),
        Err(f) => assert_eq!(f.input_id + 1, events),
    }
    assert_eq!(res.is_ok(), tx.verify());
});
