//! Template plan precomputation shared by both normalized metrics.

use crate::image::ImageView;

/// Template samples and energy, computed once per match.
///
/// Samples are stored contiguously, row-major with interleaved channels, so a
/// template row lines up with `width * channels` samples of an image row.
/// The energy is an exact integer sum.
#[derive(Clone, Debug)]
pub struct TemplatePlan {
    width: usize,
    height: usize,
    channels: usize,
    samples: Vec<u8>,
    energy: u64,
}

impl TemplatePlan {
    /// Builds a plan from a template view.
    pub fn from_view(tpl: ImageView<'_>) -> Self {
        let width = tpl.width();
        let height = tpl.height();
        let channels = tpl.channels();

        let mut samples = Vec::with_capacity(width * height * channels);
        let mut energy = 0u64;
        for y in 0..height {
            let Some(row) = tpl.row(y) else {
                break;
            };
            energy += row.iter().map(|&v| v as u64 * v as u64).sum::<u64>();
            samples.extend_from_slice(row);
        }

        Self {
            width,
            height,
            channels,
            samples,
            energy,
        }
    }

    /// Returns the template width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the template height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of interleaved channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the number of samples in one template row.
    pub fn row_len(&self) -> usize {
        self.width * self.channels
    }

    /// Returns the template samples in row-major order.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Returns `sum(T^2)` over all samples.
    pub fn energy(&self) -> u64 {
        self.energy
    }
}

#[cfg(test)]
mod tests {
    use super::TemplatePlan;
    use crate::image::ImageView;

    #[test]
    fn plan_matches_known_energy() {
        let data = [0u8, 1, 2, 3, 4, 5];
        let view = ImageView::from_slice(&data, 2, 1, 3).unwrap();
        let plan = TemplatePlan::from_view(view);
        assert_eq!(plan.width(), 2);
        assert_eq!(plan.height(), 1);
        assert_eq!(plan.row_len(), 6);
        assert_eq!(plan.energy(), 55);
        assert_eq!(plan.samples(), &[0u8, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn plan_skips_row_padding() {
        let data = [1u8, 2, 99, 3, 4, 99];
        let view = ImageView::new(&data, 2, 2, 1, 3).unwrap();
        let plan = TemplatePlan::from_view(view);
        assert_eq!(plan.samples(), &[1u8, 2, 3, 4]);
        assert_eq!(plan.energy(), 30);
    }
}
