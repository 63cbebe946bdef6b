//! Session palette drawn from the master color list.

use crate::rng::RandomSource;
use crate::types::Color;

/// The colors in play for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Draw `size` distinct colors from [`Color::ALL`].
    ///
    /// `size` is clamped to the master list length.
    pub fn draw<R: RandomSource>(size: usize, rng: &mut R) -> Self {
        let size = size.min(Color::ALL.len());
        let colors = rng.sample(&Color::ALL, size).unwrap_or_default();
        Self { colors }
    }

    /// Fixed palette, mostly for tests and replays.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Uniform draw with replacement.
    pub fn random_color<R: RandomSource>(&self, rng: &mut R) -> Option<Color> {
        rng.pick(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_draw_distinct_colors() {
        let mut rng = SimpleRng::new(3);
        let palette = Palette::draw(5, &mut rng);
        assert_eq!(palette.len(), 5);

        let mut colors = palette.colors().to_vec();
        colors.sort_by_key(|c| c.as_str());
        colors.dedup();
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn test_draw_clamps_to_master_list() {
        let mut rng = SimpleRng::new(3);
        assert_eq!(Palette::draw(50, &mut rng).len(), Color::ALL.len());
    }

    #[test]
    fn test_random_color_comes_from_palette() {
        let mut rng = SimpleRng::new(11);
        let palette = Palette::from_colors(vec![Color::Gold, Color::Coral]);
        for _ in 0..50 {
            let c = palette.random_color(&mut rng).unwrap();
            assert!(palette.colors().contains(&c));
        }
        assert_eq!(Palette::from_colors(Vec::new()).random_color(&mut rng), None);
    }
}
