// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Feed latency: bounded merge against the naive reference feeds.
//!
//! Each workload gives one reader a number of followees with long timelines,
//! which is where sort-everything and log scans fall behind.

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use chirp::Feed;
use chirp::ItemId;
use chirp::UserId;
use pedagogy::FeedModel;
use pedagogy::ScanFeed;
use pedagogy::SortAllFeed;

/// Users outside the reader's circle, posting noise the scan has to skip.
const STRANGERS: i64 = 200;

const READER: i64 = 0;

/// (author, item) posts in order: followees 1..=followees, strangers above.
fn workload(followees: i64, posts: usize, seed: u64) -> Vec<(i64, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    return (0..posts)
        .map(|item| (rng.gen_range(1..=followees + STRANGERS), item as i64))
        .collect();
}

fn build_chirp(followees: i64, posts: &[(i64, i64)]) -> Feed {
    let mut feed = Feed::new();
    for followee in 1..=followees {
        feed.follow(UserId(READER), UserId(followee));
    }
    for &(author, item) in posts {
        feed.post(UserId(author), ItemId(item));
    }
    return feed;
}

fn build_model<F: FeedModel>(followees: i64, posts: &[(i64, i64)]) -> F {
    let mut feed = F::new();
    for followee in 1..=followees {
        feed.follow(READER, followee);
    }
    for &(author, item) in posts {
        feed.post(author, item);
    }
    return feed;
}

fn bench_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed");

    for &followees in &[4i64, 32, 256] {
        let posts = workload(followees, 50_000, 0x5eed);

        let chirp = build_chirp(followees, &posts);
        group.bench_with_input(BenchmarkId::new("merge", followees), &chirp, |b, feed| {
            b.iter(|| black_box(feed.feed(UserId(READER))));
        });

        let sort_all: SortAllFeed = build_model(followees, &posts);
        group.bench_with_input(BenchmarkId::new(sort_all.name(), followees), &sort_all, |b, feed| {
            b.iter(|| black_box(feed.feed(READER)));
        });

        let scan: ScanFeed = build_model(followees, &posts);
        group.bench_with_input(BenchmarkId::new(scan.name(), followees), &scan, |b, feed| {
            b.iter(|| black_box(feed.feed(READER)));
        });
    }

    group.finish();
}

fn bench_post(c: &mut Criterion) {
    let posts = workload(32, 10_000, 0xfeed);
    c.bench_function("post_10k", |b| {
        b.iter(|| black_box(build_chirp(32, &posts)));
    });
}

criterion_group!(benches, bench_feed, bench_post);
criterion_main!(benches);
