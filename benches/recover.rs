//! Timing recovery benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use clock_recovery::channel::{Channel, ChannelParams};
use clock_recovery::pulse_shapes::{shape_symbols, RootRaisedCosine};
use clock_recovery::*;

fn test_stream(num_symbols: usize, sps: usize) -> Vec<IqSample> {
    let symbols: Vec<IqSample> = (0..num_symbols)
        .map(|i| {
            let bits = (i * 7 + i / 3) % 4;
            IqSample::new(
                if bits & 1 == 0 { 1.0 } else { -1.0 },
                if bits & 2 == 0 { 1.0 } else { -1.0 },
            )
        })
        .collect();

    let rrc = RootRaisedCosine::default_for_sps(sps);
    let tx = shape_symbols(&symbols, sps, &rrc);
    let params = ChannelParams::default().with_delay(0.4).with_snr_db(20.0).with_seed(1);
    let rx = Channel::new(params)
        .and_then(|mut channel| channel.apply(&tx))
        .expect("channel parameters are valid");
    rrc.apply(&rx)
}

fn benchmark_recover_1000_symbols(c: &mut Criterion) {
    let samples = test_stream(1000, 8);
    let mut mm = MuellerMuller::new(MmConfig::new(8.0)).expect("default config is valid");

    c.bench_function("mm_recover_1000_symbols_sps8", |b| {
        b.iter(|| {
            mm.reset();
            black_box(mm.recover(&samples))
        })
    });
}

fn benchmark_recover_oversampled(c: &mut Criterion) {
    let samples = test_stream(1000, 32);
    let config = MmConfig::new(32.0);

    c.bench_function("mm_recover_1000_symbols_sps32", |b| {
        b.iter(|| black_box(recover_symbols(&samples, config)))
    });
}

criterion_group!(benches, benchmark_recover_1000_symbols, benchmark_recover_oversampled);
criterion_main!(benches);
