#![cfg(feature = "rayon")]

use simmatch::lowlevel::{
    gradient_magnitude, scan_full, scan_full_par, CcorrNormed, SqDiffNormed, TemplatePlan,
};
use simmatch::{ImageBuffer, MatchConfig, Matcher, Metric};

fn make_image(width: usize, height: usize, channels: usize) -> ImageBuffer {
    let mut data = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let value = ((x * 11) ^ (y * 3) ^ (x * y) ^ (c * 29)) & 0xFF;
                data.push(value as u8);
            }
        }
    }
    ImageBuffer::new(data, width, height, channels).unwrap()
}

#[test]
fn parallel_scan_is_bit_identical() {
    let image = make_image(64, 48, 3);
    let template = image.view().roi(20, 14, 12, 9).unwrap();
    let plan = TemplatePlan::from_view(template);

    let seq = scan_full::<SqDiffNormed>(image.view(), &plan).unwrap();
    let par = scan_full_par::<SqDiffNormed>(image.view(), &plan).unwrap();
    assert_eq!(seq, par);

    let image_grad = gradient_magnitude(image.view()).unwrap();
    let template_grad = gradient_magnitude(template).unwrap();
    let plan = TemplatePlan::from_view(template_grad.view());
    let seq = scan_full::<CcorrNormed>(image_grad.view(), &plan).unwrap();
    let par = scan_full_par::<CcorrNormed>(image_grad.view(), &plan).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn parallel_matcher_matches_sequential() {
    let image = make_image(80, 60, 3);
    let template = image.view().roi(33, 21, 16, 12).unwrap();

    for metric in [Metric::SqDiffNormed, Metric::CcorrNormed] {
        let base_cfg = MatchConfig {
            metric,
            ..MatchConfig::default()
        };
        let seq = Matcher::new(MatchConfig {
            parallel: false,
            ..base_cfg.clone()
        })
        .match_image(image.view(), template)
        .unwrap();
        let par = Matcher::new(MatchConfig {
            parallel: true,
            ..base_cfg
        })
        .match_image(image.view(), template)
        .unwrap();

        assert_eq!(seq, par);
        if metric == Metric::SqDiffNormed {
            assert_eq!(seq.location.x, 33);
            assert_eq!(seq.location.y, 21);
        }
    }
}
