//! Compare the three eviction policies on the same request streams.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use framepool::{EvictionPolicy, FramePool, PageId};

const REQUESTS: usize = 10_000;

/// Hot set of 8 pages with a cold page every fourth request.
fn skewed_stream() -> Vec<PageId> {
    (0..REQUESTS as u32)
        .map(|i| {
            if i % 4 == 3 {
                PageId::new(100 + (i * 7) % 64)
            } else {
                PageId::new(i % 8)
            }
        })
        .collect()
}

/// Loop over more pages than any pool holds.
fn looping_stream(pages: u32) -> Vec<PageId> {
    (0..REQUESTS as u32).map(|i| PageId::new(i % pages)).collect()
}

fn bench_policies(c: &mut Criterion) {
    let streams = [("skewed", skewed_stream()), ("looping", looping_stream(40))];

    for (name, stream) in &streams {
        let mut group = c.benchmark_group(format!("process/{}", name));
        group.throughput(Throughput::Elements(stream.len() as u64));

        for frames in [4usize, 16, 32] {
            for policy in EvictionPolicy::ALL {
                group.bench_with_input(
                    BenchmarkId::new(policy.name(), frames),
                    stream,
                    |b, stream| {
                        b.iter(|| {
                            let mut pool = FramePool::new(frames, policy).unwrap();
                            for &page in stream {
                                black_box(pool.process(page));
                            }
                            pool.stats()
                        })
                    },
                );
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
