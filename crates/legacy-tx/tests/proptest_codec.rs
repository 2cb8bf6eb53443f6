use proptest::prelude::*;

use legacy_tx::{
    compact_size_bytes, parse_tx, read_compact_size_bytes, signing_preimage, Secp256k1Provider,
    Transaction, TxInput, TxOutput,
};

const SIGNED_SCRIPT_SIG: &str = "47304402201f6e18f4532e14f328bc820cb78c53c57c91b1da9949fecb8cf42318b791fb38022045e78c9e55df1cf3db74bfd52ff2add2b59ba63e068680f0023e6a80ac9f51f401210239a18d586c34e51238a7c9a27a342abfb35e3e4aa5ac6559889db1dab2816e9d";

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    let arb_input = (
        prop::array::uniform32(any::<u8>()),        // prev tx hash
        any::<u32>(),                               // output index
        prop::collection::vec(any::<u8>(), 0..300), // script_sig
        any::<u32>(),                               // sequence
    )
        .prop_map(|(hash, idx, script_sig, seq)| TxInput::new(hash, idx, script_sig, seq));

    let arb_output = (any::<u64>(), prop::collection::vec(any::<u8>(), 0..300))
        .prop_map(|(amount, script)| TxOutput { amount, script });

    (
        any::<u32>(), // version
        prop::collection::vec(arb_input, 0..4),
        prop::collection::vec(arb_output, 1..4),
        any::<u32>(), // locktime
    )
        .prop_filter_map("outputs required", |(version, inputs, outputs, locktime)| {
            Transaction::new(inputs, outputs, locktime, version).ok()
        })
}

proptest! {
    #[test]
    fn compact_size_roundtrip(n in any::<u64>()) {
        let b = compact_size_bytes(n);
        prop_assert_eq!(read_compact_size_bytes(&b).expect("decode"), (n, b.len()));
    }

    #[test]
    fn transaction_roundtrip(tx in arb_transaction()) {
        let raw = tx.raw();
        let back = parse_tx(&raw).expect("parse");
        prop_assert_eq!(&back, &tx);
        prop_assert_eq!(back.raw(), raw);
    }

    #[test]
    fn large_output_script_roundtrip(len in 10_000usize..12_000, fill in any::<u8>()) {
        let tx = Transaction::new(
            vec![TxInput::new([7u8; 32], 0, Vec::new(), u32::MAX)],
            vec![TxOutput { amount: 1, script: vec![fill; len] }],
            0,
            1,
        )
        .expect("build");
        prop_assert_eq!(parse_tx(&tx.raw()).expect("parse"), tx);
    }

    #[test]
    fn parse_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
        if let Ok(tx) = parse_tx(&data) {
            prop_assert_eq!(tx.raw(), data);
        }
    }

    #[test]
    fn preimage_ignores_other_script_sigs(
        tx in arb_transaction(),
        replacement in prop::collection::vec(any::<u8>(), 0..80),
    ) {
        prop_assume!(!tx.inputs.is_empty());
        let mut tx = tx;
        tx.inputs[0].script_sig = hex::decode(SIGNED_SCRIPT_SIG).expect("hex");
        let provider = Secp256k1Provider::new();
        let before = signing_preimage(&tx, 0, &provider).expect("preimage");

        let mut other = tx.clone();
        for input in other.inputs.iter_mut().skip(1) {
            input.script_sig = replacement.clone();
        }
        prop_assert_eq!(signing_preimage(&other, 0, &provider).expect("preimage"), before);
    }

    #[test]
    fn hex_and_bytes_decode_alike(tx in arb_transaction()) {
        let from_hex = Transaction::decode(tx.raw_hex().as_str()).expect("hex");
        let raw = tx.raw();
        let from_bytes = Transaction::decode(&raw).expect("bytes");
        prop_assert_eq!(from_hex, from_bytes);
    }
}
