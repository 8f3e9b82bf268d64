//! Category → card background color lookup.

use std::collections::HashMap;

use crate::event::Category;

/// Background for categories the palette does not know.
pub const NEUTRAL_COLOR: &str = "#f0f0f0";

/// Built-in colors, one per category.
pub const DEFAULT_COLORS: [(Category, &str); 4] = [
    (Category::Academic, "#e3f2fd"), // light blue
    (Category::Work, "#f3e5f5"),     // light purple
    (Category::Personal, "#fce4ec"), // light pink
    (Category::Social, "#e8f5e9"),   // light green
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<String, String>,
    neutral: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_COLORS
                .iter()
                .map(|(category, color)| (category.to_string(), color.to_string()))
                .collect(),
            neutral: NEUTRAL_COLOR.to_string(),
        }
    }
}

impl Palette {
    /// Start from the built-in colors and apply overrides on top.
    pub fn with_overrides(overrides: &HashMap<String, String>, neutral: Option<&str>) -> Self {
        let mut palette = Palette::default();
        for (name, color) in overrides {
            palette.colors.insert(name.to_lowercase(), color.clone());
        }
        if let Some(neutral) = neutral {
            palette.neutral = neutral.to_string();
        }
        palette
    }

    /// Color for a category name, or the neutral color if unknown.
    pub fn color_for(&self, category: &str) -> &str {
        self.colors
            .get(category)
            .map(String::as_str)
            .unwrap_or(&self.neutral)
    }

    pub fn neutral(&self) -> &str {
        &self.neutral
    }

    /// Entries sorted by category name.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .colors
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }
}

/// Parse `#rrggbb` into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colors_per_category() {
        let palette = Palette::default();
        assert_eq!(palette.color_for("academic"), "#e3f2fd");
        assert_eq!(palette.color_for("work"), "#f3e5f5");
        assert_eq!(palette.color_for("personal"), "#fce4ec");
        assert_eq!(palette.color_for("social"), "#e8f5e9");
    }

    #[test]
    fn unknown_category_falls_back_to_neutral() {
        let palette = Palette::default();
        assert_eq!(palette.color_for("gym"), NEUTRAL_COLOR);
    }

    #[test]
    fn overrides_replace_single_entries() {
        let overrides = HashMap::from([("Work".to_string(), "#ffffff".to_string())]);
        let palette = Palette::with_overrides(&overrides, Some("#000000"));
        assert_eq!(palette.color_for("work"), "#ffffff");
        assert_eq!(palette.color_for("academic"), "#e3f2fd");
        assert_eq!(palette.color_for("unknown"), "#000000");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_rgb("#e3f2fd"), Some((0xe3, 0xf2, 0xfd)));
        assert_eq!(hex_to_rgb("e3f2fd"), None);
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
        assert_eq!(hex_to_rgb("#+f+f+f"), None);
    }
}
