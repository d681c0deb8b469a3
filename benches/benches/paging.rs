// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_paging::{PagingConfig, PagingController, SelectionMode};

fn bench_append_and_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("paging/append_settle");

    for len in [16usize, 256, 4_096] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || PagingController::with_pages(0..len),
                |mut pager| {
                    let mut now = 0_u64;
                    for payload in 0..len {
                        pager.append_page(now, payload);
                        now += 100;
                    }
                    black_box(pager.advance(u64::MAX));
                    pager.drain_events().for_each(drop);
                    black_box(pager);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_select_by_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("paging/select_by_identity");

    // Hypothesis: identity lookups stay flat as the page count grows.
    for len in [16usize, 256, 4_096] {
        let mut pager =
            PagingController::new(PagingConfig::with_mode(SelectionMode::Identity), 0..len);
        let ids: Vec<_> = pager.pages().iter().map(|page| page.id()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &ids, |b, ids| {
            let mut cursor = 0;
            b.iter(|| {
                cursor = (cursor + 7) % ids.len();
                black_box(pager.select_by_identity(ids[cursor]).is_ok());
                pager.drain_events().for_each(drop);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_append_and_settle, bench_select_by_identity);
criterion_main!(benches);
