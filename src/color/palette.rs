//! Fixed reference palette (Material colors) and lookups over it.

use super::Rgb;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub hex: &'static str,
    pub name: &'static str,
}

impl PaletteEntry {
    const fn new(hex: &'static str, name: &'static str) -> Self {
        Self { hex, name }
    }

    pub fn rgb(&self) -> Rgb {
        // Entries are constants checked by `test_palette_entries_are_valid`.
        Rgb::from_hex(self.hex).unwrap_or(Rgb::WHITE)
    }
}

/// Order matters: lookups break ties by position.
pub const PALETTE: [PaletteEntry; 19] = [
    PaletteEntry::new("#f44336", "Red"),
    PaletteEntry::new("#e91e63", "Pink"),
    PaletteEntry::new("#9c27b0", "Purple"),
    PaletteEntry::new("#673ab7", "Deep Purple"),
    PaletteEntry::new("#3f51b5", "Indigo"),
    PaletteEntry::new("#2196f3", "Blue"),
    PaletteEntry::new("#03a9f4", "Light Blue"),
    PaletteEntry::new("#00bcd4", "Cyan"),
    PaletteEntry::new("#009688", "Teal"),
    PaletteEntry::new("#4caf50", "Green"),
    PaletteEntry::new("#8bc34a", "Light Green"),
    PaletteEntry::new("#cddc39", "Lime"),
    PaletteEntry::new("#ffeb3b", "Yellow"),
    PaletteEntry::new("#ffc107", "Amber"),
    PaletteEntry::new("#ff9800", "Orange"),
    PaletteEntry::new("#ff5722", "Deep Orange"),
    PaletteEntry::new("#795548", "Brown"),
    PaletteEntry::new("#9e9e9e", "Grey"),
    PaletteEntry::new("#607d8b", "Blue Grey"),
];

/// Nearest entry by Euclidean RGB distance; the first entry wins a tie.
pub fn closest(rgb: Rgb) -> &'static PaletteEntry {
    let mut best = &PALETTE[0];
    let mut best_dist = f64::INFINITY;
    for entry in PALETTE.iter() {
        let dist = rgb.distance(entry.rgb());
        if dist < best_dist {
            best_dist = dist;
            best = entry;
        }
    }
    best
}

/// First entry whose name contains `query`, ignoring case.
/// An empty query matches the first entry.
pub fn search(query: &str) -> Option<&'static PaletteEntry> {
    let needle = query.to_lowercase();
    PALETTE
        .iter()
        .find(|entry| entry.name.to_lowercase().contains(&needle))
}

pub fn random_entry<R: Rng + ?Sized>(rng: &mut R) -> &'static PaletteEntry {
    &PALETTE[rng.random_range(0..PALETTE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_palette_entries_are_valid() {
        for entry in PALETTE.iter() {
            assert!(Rgb::from_hex(entry.hex).is_some(), "{}", entry.hex);
            assert_eq!(entry.hex, entry.hex.to_lowercase());
        }
    }

    #[test]
    fn test_closest_matches_self() {
        for entry in PALETTE.iter() {
            assert_eq!(closest(entry.rgb()).name, entry.name);
            assert_eq!(crate::color::closest_color_name(entry.hex), Some(entry.name));
        }
    }

    #[test]
    fn test_closest_near_color() {
        // One step off pure Material blue.
        let rgb = Rgb::new(0x22, 0x96, 0xf3);
        assert_eq!(closest(rgb).name, "Blue");
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        assert_eq!(search("BLUE").map(|e| e.hex), Some("#2196f3"));
        assert_eq!(search("purp").map(|e| e.name), Some("Purple"));
        assert_eq!(search("grey").map(|e| e.name), Some("Grey"));
    }

    #[test]
    fn test_search_empty_matches_first() {
        assert_eq!(search("").map(|e| e.hex), Some(PALETTE[0].hex));
    }

    #[test]
    fn test_search_not_found() {
        assert!(search("nonexistent-xyz").is_none());
    }

    #[test]
    fn test_random_entry_is_from_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let entry = random_entry(&mut rng);
            assert!(PALETTE.contains(entry));
        }
    }
}
