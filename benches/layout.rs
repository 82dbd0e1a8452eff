use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use techradar_layout::config::LayoutConfig;
use techradar_layout::ir::{Entry, Moved, Radar};
use techradar_layout::layout::compute_layout;
use techradar_layout::theme::Theme;

fn synthetic_radar(entries: usize) -> Radar {
    let mut radar = Radar::new();
    for i in 0..entries {
        radar.entries.push(Entry {
            name: format!("Tech {i}"),
            quadrant: i % 4,
            ring: (i / 4) % 4,
            active: i % 5 != 0,
            moved: Moved::Unchanged,
            link: None,
        });
    }
    radar
}

fn bench_layout(c: &mut Criterion) {
    let theme = Theme::default();
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("layout");
    for entries in [50usize, 200, 800] {
        let radar = synthetic_radar(entries);
        group.bench_with_input(
            BenchmarkId::new("compute_layout", entries),
            &radar,
            |b, radar| {
                b.iter(|| black_box(compute_layout(black_box(radar), &theme, &config)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
