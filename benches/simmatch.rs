use criterion::{criterion_group, criterion_main, Criterion};
use simmatch::lowlevel::gradient_magnitude;
use simmatch::{ImageBuffer, MatchConfig, Matcher, Metric};
use std::hint::black_box;

fn make_image(width: usize, height: usize, channels: usize) -> ImageBuffer {
    let mut data = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let value = ((x * 13) ^ (y * 7) ^ (x * y) ^ (c * 41)) & 0xFF;
                data.push(value as u8);
            }
        }
    }
    ImageBuffer::new(data, width, height, channels).unwrap()
}

fn bench_matcher(c: &mut Criterion) {
    let image = make_image(320, 240, 3);
    let template = image.view().roi(120, 100, 48, 32).unwrap().to_buffer();

    c.bench_function("gradient_magnitude_320x240", |b| {
        b.iter(|| black_box(gradient_magnitude(image.view()).unwrap()));
    });

    for (name, metric) in [
        ("sq_diff", Metric::SqDiffNormed),
        ("ccorr", Metric::CcorrNormed),
    ] {
        let matcher = Matcher::new(MatchConfig {
            metric,
            parallel: false,
            ..MatchConfig::default()
        });
        c.bench_function(name, |b| {
            b.iter(|| black_box(matcher.match_image(image.view(), template.view()).unwrap()));
        });

        if cfg!(feature = "rayon") {
            let matcher_par = Matcher::new(MatchConfig {
                metric,
                parallel: true,
                ..MatchConfig::default()
            });
            c.bench_function(&format!("{name}_parallel"), |b| {
                b.iter(|| {
                    black_box(
                        matcher_par
                            .match_image(image.view(), template.view())
                            .unwrap(),
                    )
                });
            });
        }
    }
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
