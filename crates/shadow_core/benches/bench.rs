use criterion::{criterion_main, criterion_group, Criterion};

use shadow_core::{sync::SpinWait, sys::yield_current_thread};

fn yield_benchmark(c: &mut Criterion) {
    c.bench_function("yield_current_thread", |b| b.iter(|| {
        yield_current_thread()
    }));

    c.bench_function("yield_current_thread: 100x", |b| b.iter(|| {
        let mut accepted = 0u32;
        for _ in 0..100 {
            accepted += yield_current_thread() as u32;
        }
        accepted
    }));
}

fn spin_wait_benchmark(c: &mut Criterion) {
    c.bench_function("spin_wait: until limit", |b| b.iter(|| {
        let mut spin = SpinWait::new();
        while spin.spin() {}
        spin.iterations()
    }));

    c.bench_function("spin_wait: no yield", |b| b.iter(|| {
        let mut spin = SpinWait::new();
        for _ in 0..SpinWait::SPIN_LIMIT {
            spin.spin_no_yield();
        }
        spin.iterations()
    }));
}

criterion_group!(benches, yield_benchmark, spin_wait_benchmark);
criterion_main!(benches);
