//! Blends a base color with a random one.

use super::Rgb;
use rand::Rng;

/// Result of one mix: the color and the share of it taken from the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mix {
    pub rgb: Rgb,
    pub ratio: f64,
}

impl Mix {
    /// A color shown as-is ("100% Base").
    pub fn solid(rgb: Rgb) -> Self {
        Self { rgb, ratio: 1.0 }
    }

    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }

    pub fn composition(&self) -> String {
        composition(self.ratio)
    }
}

/// Parse a user-supplied base color, falling back to white.
pub fn base_or_white(base: Option<&str>) -> Rgb {
    base.and_then(Rgb::from_hex).unwrap_or(Rgb::WHITE)
}

/// `round(base * ratio + other * (1 - ratio))` per channel.
pub fn blend(base: Rgb, other: [f64; 3], ratio: f64) -> Rgb {
    let mix = |b: u8, o: f64| -> u8 {
        let v = (f64::from(b) * ratio + o * (1.0 - ratio)).round();
        v.clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        mix(base.r, other[0]),
        mix(base.g, other[1]),
        mix(base.b, other[2]),
    )
}

/// Mix `base` with a uniformly random color using a uniformly random ratio.
pub fn generate<R: Rng + ?Sized>(base: Rgb, rng: &mut R) -> Mix {
    let random: [f64; 3] = [
        rng.random_range(0.0..255.0),
        rng.random_range(0.0..255.0),
        rng.random_range(0.0..255.0),
    ];
    let ratio: f64 = rng.random();
    Mix {
        rgb: blend(base, random, ratio),
        ratio,
    }
}

/// `"<P>% Base + <100-P>% Random"`.
pub fn composition(ratio: f64) -> String {
    let base = (ratio * 100.0).round().clamp(0.0, 100.0) as u32;
    format!("{}% Base + {}% Random", base, 100 - base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_blend_full_base() {
        let black = Rgb::new(0, 0, 0);
        assert_eq!(blend(black, [200.0, 100.0, 50.0], 1.0).to_hex(), "#000000");
    }

    #[test]
    fn test_blend_no_base() {
        let rgb = blend(Rgb::WHITE, [10.4, 10.5, 254.9], 0.0);
        assert_eq!(rgb, Rgb::new(10, 11, 255));
    }

    #[test]
    fn test_blend_half() {
        let rgb = blend(Rgb::new(100, 0, 255), [0.0, 100.0, 255.0], 0.5);
        assert_eq!(rgb, Rgb::new(50, 50, 255));
    }

    #[test]
    fn test_generate_ratio_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mix = generate(Rgb::new(0, 0, 0), &mut rng);
            assert!((0.0..1.0).contains(&mix.ratio));
            assert_eq!(mix.hex().len(), 7);
        }
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let a = generate(Rgb::WHITE, &mut StdRng::seed_from_u64(9));
        let b = generate(Rgb::WHITE, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_solid_black_stays_black() {
        let mix = Mix::solid(Rgb::new(0, 0, 0));
        assert_eq!(mix.hex(), "#000000");
        assert_eq!(mix.composition(), "100% Base + 0% Random");
    }

    #[test]
    fn test_composition() {
        assert_eq!(composition(0.5), "50% Base + 50% Random");
        assert_eq!(composition(0.0), "0% Base + 100% Random");
        assert_eq!(composition(0.333), "33% Base + 67% Random");
    }

    #[test]
    fn test_base_or_white() {
        assert_eq!(base_or_white(None), Rgb::WHITE);
        assert_eq!(base_or_white(Some("")), Rgb::WHITE);
        assert_eq!(base_or_white(Some("#zzz")), Rgb::WHITE);
        assert_eq!(base_or_white(Some("#000000")), Rgb::new(0, 0, 0));
    }
}
