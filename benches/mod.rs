use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    network::http::bench_content_length,
    network::http::bench_chunked,
    network::http::bench_until_close
);
criterion_main!(benches);
