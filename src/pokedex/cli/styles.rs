//! Named terminal styles, applied from templates through the `style` filter.
//!
//! A style name that is not registered renders with a `(!?)` prefix so typos in
//! templates show up in the output instead of silently losing their styling.

use console::Style;
use once_cell::sync::Lazy;
use pokedex::model::PokemonType;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const TITLE: &str = "title";
    pub const HEADER: &str = "header";
    pub const SUMMARY: &str = "summary";
    pub const POSITION: &str = "position";
    pub const NAME: &str = "name";
    pub const NUMBER: &str = "number";
    pub const MUTED: &str = "muted";
    pub const UNKNOWN: &str = "unknown";
    pub const BUTTON: &str = "button";
    pub const CURRENT: &str = "current";
    pub const DISABLED: &str = "disabled";
    pub const BAR: &str = "bar";
    pub const PROMPT: &str = "prompt";
    pub const TYPE_OTHER: &str = "type-other";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styles `text`, or only checks the name when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// Nearest ANSI 256-color palette index for an RGB triplet.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Badge color of each type.
fn type_color(kind: PokemonType) -> (u8, u8, u8) {
    match kind {
        PokemonType::Normal => (168, 168, 120),
        PokemonType::Fighting => (192, 48, 40),
        PokemonType::Flying => (135, 206, 250),
        PokemonType::Poison => (128, 0, 128),
        PokemonType::Ground => (165, 42, 42),
        PokemonType::Rock => (184, 160, 56),
        PokemonType::Bug => (168, 184, 32),
        PokemonType::Ghost => (112, 88, 152),
        PokemonType::Steel => (184, 184, 208),
        PokemonType::Fire => (255, 69, 0),
        PokemonType::Water => (0, 191, 255),
        PokemonType::Grass => (50, 205, 50),
        PokemonType::Electric => (255, 192, 0),
        PokemonType::Psychic => (248, 88, 136),
        PokemonType::Ice => (152, 216, 216),
        PokemonType::Dragon => (112, 56, 248),
        PokemonType::Dark => (112, 88, 72),
        PokemonType::Fairy => (255, 192, 203),
    }
}

/// Style name for a type tag. Types outside the known eighteen share one style.
pub fn type_style(name: &str) -> &'static str {
    match name.parse::<PokemonType>() {
        Ok(kind) => kind.as_str(),
        Err(_) => names::TYPE_OTHER,
    }
}

pub static POKEDEX_THEME: Lazy<Theme> = Lazy::new(|| {
    let grey = rgb_to_ansi256((154, 154, 154));
    let theme = Theme::new()
        .add(names::TITLE, Style::new().bold().underlined())
        .add(names::HEADER, Style::new().bold())
        .add(names::SUMMARY, Style::new().color256(grey))
        .add(names::POSITION, Style::new().yellow())
        .add(names::NAME, Style::new())
        .add(names::NUMBER, Style::new().cyan())
        .add(names::MUTED, Style::new().color256(grey).italic())
        .add(names::UNKNOWN, Style::new().dim())
        .add(names::BUTTON, Style::new())
        .add(names::CURRENT, Style::new().bold().reverse())
        .add(names::DISABLED, Style::new().dim())
        .add(names::BAR, Style::new().green())
        .add(names::PROMPT, Style::new().bold().cyan())
        .add(names::TYPE_OTHER, Style::new().bold());

    PokemonType::ALL.iter().fold(theme, |theme, kind| {
        theme.add(
            kind.as_str(),
            Style::new().bold().color256(rgb_to_ansi256(type_color(*kind))),
        )
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_a_style() {
        for kind in PokemonType::ALL {
            let styled = POKEDEX_THEME.apply(kind.as_str(), "x", false);
            assert_eq!(styled, "x", "missing style for {}", kind);
        }
    }

    #[test]
    fn unknown_types_share_the_fallback_style() {
        assert_eq!(type_style("Fire"), "fire");
        assert_eq!(type_style("stellar"), names::TYPE_OTHER);
        assert_eq!(POKEDEX_THEME.apply(names::TYPE_OTHER, "x", false), "x");
    }

    #[test]
    fn plain_mode_leaves_text_untouched() {
        assert_eq!(POKEDEX_THEME.apply(names::TITLE, "Pikachu", false), "Pikachu");
    }

    #[test]
    fn color_mode_emits_ansi() {
        let styled = POKEDEX_THEME.apply(names::CURRENT, "3", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("3"));
    }

    #[test]
    fn missing_style_is_flagged() {
        assert_eq!(POKEDEX_THEME.apply("nope", "x", false), "(!?) x");
        // Messages are colored by level outside the theme.
        assert_eq!(POKEDEX_THEME.apply("error", "x", false), "(!?) x");
    }

    #[test]
    fn rgb_grayscale_maps_to_gray_ramp() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert!((232..=255).contains(&rgb_to_ansi256((128, 128, 128))));
    }
}
