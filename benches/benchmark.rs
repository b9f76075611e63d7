//! Performance benchmarks for content-compare.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Query engine on a small synthetic page for each element
//! - A full batch over a generated temporary tree

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use content_compare::{process_tree, query_html, ElementQuery, Options};
use std::fs;
use tempfile::TempDir;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Page</title>
    <link rel="stylesheet" href="/site.css">
</head>
<body>
    <nav><a href="/">Home</a><a href="/about">About</a></nav>
    <article>
        <h1>Sample Page Title</h1>
        <h2>Section</h2>
        <p>First paragraph with <img src="/a.png" alt="A"> an image.</p>
        <h3>Subsection</h3>
        <p>Second paragraph.</p>
    </article>
    <footer><p>Copyright 2024</p></footer>
</body>
</html>
"#;

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_html");
    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));

    for query in ElementQuery::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, &query| {
            b.iter(|| query_html(black_box(SAMPLE_HTML), query));
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("SourceA");
    let target = temp.path().join("TargetA");
    for i in 0..200 {
        let dir = source.join(format!("section{}", i % 10));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("page{i}.html")), SAMPLE_HTML).unwrap();
    }

    let mut group = c.benchmark_group("process_tree");
    group.sample_size(10);

    for parallel in [false, true] {
        let options = Options {
            parallel,
            ..Options::default()
        };
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter(|| process_tree(ElementQuery::Body, &source, &target, &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_query, bench_batch);
criterion_main!(benches);
