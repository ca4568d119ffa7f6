/// Sticker glyphs offered in the toolbar, fixed ones first then custom ones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickerPalette {
    glyphs: Vec<String>,
}

impl StickerPalette {
    pub fn new(glyphs: impl IntoIterator<Item = String>) -> Self {
        let mut palette = Self::default();
        for glyph in glyphs {
            palette.add(&glyph);
        }
        palette
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.glyphs.iter().any(|g| g == glyph)
    }

    /// Append a glyph. Surrounding whitespace is trimmed; blank input and
    /// duplicates are ignored. Returns the normalized glyph unless blank.
    pub fn add(&mut self, glyph: &str) -> Option<String> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return None;
        }
        if !self.contains(glyph) {
            self.glyphs.push(glyph.to_owned());
        }
        Some(glyph.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_dedups() {
        let mut palette = StickerPalette::new(["🐸".to_owned()]);
        assert_eq!(palette.add("  🌵 "), Some("🌵".to_owned()));
        assert_eq!(palette.add("🐸"), Some("🐸".to_owned()));
        assert_eq!(palette.glyphs(), &["🐸".to_owned(), "🌵".to_owned()]);
    }

    #[test]
    fn test_blank_glyph_is_ignored() {
        let mut palette = StickerPalette::default();
        assert_eq!(palette.add(""), None);
        assert_eq!(palette.add("   "), None);
        assert!(palette.glyphs().is_empty());
    }
}
