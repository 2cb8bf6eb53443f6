// Decode, preimage and verification benchmarks over a one-input and a
// four-input P2PKH transaction.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use legacy_tx::{
    signing_preimage, verify_with, NoopObserver, Secp256k1Provider, Transaction,
};

const ONE_INPUT_TX: &str = "0100000001a3919372c9807d92507289d71bdd38f10682a49c47e50dc0136996b43d8aa54e010000006a47304402201f6e18f4532e14f328bc820cb78c53c57c91b1da9949fecb8cf42318b791fb38022045e78c9e55df1cf3db74bfd52ff2add2b59ba63e068680f0023e6a80ac9f51f401210239a18d586c34e51238a7c9a27a342abfb35e3e4aa5ac6559889db1dab2816e9dfeffffff023ef59804000000001976a914af8e14a2cecd715c363b3a72b55b59a31e2acac988ac90940d00000000001976a914f0d34949650af161e7cb3f0325a1a8833075165088acb7740f00";

const FOUR_INPUT_TX: &str = "0100000004be8a976420ef000956142320e79d90dd2ce103dda9cf51efb280468ca7ac121d000000006b483045022100e80841d3a21a12c505e60d2896631edac06e0e0e7359207583cb31dd490a652502204fde02010706097f11acd0547c9dff0399354c065d7e1d1d17eeda031185804c0121029418397b2ad61b6d603fc865eb4ada9c5425952c4dbe948a0e0c75c36d4e740affffffffc4475d1a9a50aae5c608d20c28a1ca78bda39056d22aa3d869aefbdab83aa4b4000000006b483045022100cd986b35450080a2ee9397349d7513cecff5cf56c435cae43d33ca83c69cddb30220259f9460b372025dff475a534c472c3b2b7f558f393aedeb4c2a30fb6156f81c01210316dec74bb3f916cab37a979c076e03b54f347fa5a90bf2fc9f14e435c1a4ecbdffffffffaea58d46919cf6b7641a30a0a027f3318aee9173fc3f8f1f03c39670f7ce5c3a000000006a47304402206b3297db37c68ae172dc0de46cdb165ec79ce491edec7d59ed98c80d82edeffb0220244665fec2da49eae564d4cc78939ae2c04504294bbca76367d2e9ce5802f56d0121035b5ff8a770e99152d210f1d875d0e1c570dc9fbe332eaecfc405254f6df59edcffffffff85778efe6c0347762b404a6b5b00c45e7143861ccb2b4bd7b0927d0db9fee509010000006a473044022045330b90adba441e797350baa8a631c3b0d375598c88d6eaaae74526698a7fdc022066ffb7a61fcd394d8eed953eac5a792eccddb20f7b14f4e8dcbdc4e9207f1d1c0121032ebd92c614095f612a9e0dbcdb0d03e75481f9335c756f17bfc206d0dcddc644ffffffff02ce8fb400000000001976a914377ad7e288e893dc4473aeb28b18b1675067abaf88aca4823e00000000001976a914bfb2eb5487e238c7d34ea12b965ae169fba563ba88ac00000000";

fn bench_decode(c: &mut Criterion) {
    let raw = hex::decode(FOUR_INPUT_TX).expect("hex");
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("bytes", |b| b.iter(|| Transaction::decode(&raw)));
    group.bench_function("hex", |b| b.iter(|| Transaction::decode(FOUR_INPUT_TX)));
    group.finish();
}

fn bench_preimage(c: &mut Criterion) {
    let tx = Transaction::decode(FOUR_INPUT_TX).expect("decode");
    let provider = Secp256k1Provider::new();
    c.bench_function("sighash/preimage_input_2", |b| {
        b.iter(|| signing_preimage(&tx, 2, &provider))
    });
}

fn bench_verify(c: &mut Criterion) {
    let provider = Secp256k1Provider::new();
    let mut group = c.benchmark_group("verify");
    for raw in [ONE_INPUT_TX, FOUR_INPUT_TX] {
        let tx = Transaction::decode(raw).expect("decode");
        group.throughput(Throughput::Elements(tx.inputs.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(tx.inputs.len()), &tx, |b, tx| {
            b.iter(|| verify_with(tx, &provider, &NoopObserver))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_preimage, bench_verify);
criterion_main!(benches);
