// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_timing::TimerQueue;

fn bench_schedule_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/schedule_drain");

    for len in [4usize, 32, 256] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                TimerQueue::<u32>::new,
                |mut timers| {
                    // Reverse deadlines so every insert lands at the front.
                    for i in 0..len as u64 {
                        timers.schedule(len as u64 - i, i as u32);
                    }
                    black_box(timers.drain_due(u64::MAX).count());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_supersede(c: &mut Criterion) {
    // The paging pattern: cancel the previous timer, schedule a new one.
    c.bench_function("timing/supersede", |b| {
        let mut timers = TimerQueue::new();
        let mut pending = timers.schedule(0, 0_u64);
        let mut now = 0_u64;
        b.iter(|| {
            now += 1;
            timers.cancel(pending);
            pending = timers.schedule_after(now, 1_500, now);
            black_box(timers.next_deadline());
        });
    });
}

criterion_group!(benches, bench_schedule_then_drain, bench_supersede);
criterion_main!(benches);
