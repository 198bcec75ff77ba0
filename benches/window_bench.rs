use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use swath::{resolve_line, resolve_window, resolve_word, WindowConfig};

/// Generate a buffer of `lines` newline-terminated lines of `width` letters.
fn generate_buffer(lines: usize, width: usize) -> String {
    let mut text = String::with_capacity(lines * (width + 1));
    for i in 0..lines {
        let letter = (b'a' + (i % 26) as u8) as char;
        for _ in 0..width {
            text.push(letter);
        }
        text.push('\n');
    }
    text
}

fn bench_window_resolution(c: &mut Criterion) {
    let text = generate_buffer(10_000, 80);
    let mid = text.len() / 2;

    let mut group = c.benchmark_group("resolve_window");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("default_config_mid_buffer", |b| {
        b.iter(|| resolve_window(black_box(&text), black_box(mid), WindowConfig::default()))
    });

    group.bench_function("large_budget_mid_buffer", |b| {
        let config = WindowConfig {
            line_budget: 1000,
            threshold: 0,
        };
        b.iter(|| resolve_window(black_box(&text), black_box(mid), config))
    });

    group.bench_function("fast_path_small_buffer", |b| {
        let small = generate_buffer(2, 80);
        b.iter(|| resolve_window(black_box(&small), black_box(40), WindowConfig::default()))
    });

    group.finish();
}

fn bench_line_resolution(c: &mut Criterion) {
    let text = generate_buffer(10_000, 80);
    let mid = text.len() / 2;

    c.bench_function("resolve_line_mid_buffer", |b| {
        b.iter(|| resolve_line(black_box(&text), black_box(mid)))
    });
}

fn bench_word_resolution(c: &mut Criterion) {
    // Long unbroken runs are the worst case for the word scan
    let text = "supercalifragilisticexpialidocious ".repeat(1000);
    let mid = text.len() / 2;

    c.bench_function("resolve_word_mid_buffer", |b| {
        b.iter(|| resolve_word(black_box(&text), black_box(mid)))
    });
}

criterion_group!(
    benches,
    bench_window_resolution,
    bench_line_resolution,
    bench_word_resolution
);
criterion_main!(benches);
