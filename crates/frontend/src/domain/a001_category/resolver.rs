//! Category visual resolution: icon variant and color palette for a record.
//!
//! Everything here is a pure function of the record, so tiles call it on every
//! render without memoization. Bad input never fails: an unknown color falls back
//! to [`contracts::domain::a001_category::DEFAULT_CATEGORY_COLOR`], an unknown icon
//! kind or builtin name to the builtin tag.

use contracts::domain::a001_category::Category;
use contracts::shared::color::Rgb;

use crate::shared::icons::{has_icon, FALLBACK_ICON};

/// RGB value of [`contracts::domain::a001_category::DEFAULT_CATEGORY_COLOR`]
pub const DEFAULT_RGB: Rgb = Rgb::new(0x63, 0x66, 0xf1);

pub const TILE_BACKGROUND_ALPHA: f64 = 0.1;
pub const TILE_BACKGROUND_HOVER_ALPHA: f64 = 0.2;
pub const TILE_BORDER_ALPHA: f64 = 0.3;
pub const TILE_BORDER_HOVER_ALPHA: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl IconSize {
    pub const fn px(self) -> u16 {
        match self {
            Self::Small => 16,
            Self::Medium => 24,
            Self::Large => 40,
        }
    }
}

/// Renderable icon of a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryIcon {
    /// Name from the builtin SVG catalog
    Builtin { name: String, px: u16 },
    /// Uploaded image reference
    Image { src: String, px: u16 },
    /// Emoji or any text glyph
    Glyph { text: String, px: u16 },
    /// Legacy pre-rendered content, rendered as is
    Legacy(String),
}

/// Colors of one tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPalette {
    pub background: String,
    pub border: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IconKind {
    Builtin,
    Image,
    Glyph,
}

impl IconKind {
    fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "builtin" | "icon" | "lucide" => Some(Self::Builtin),
            "image" | "upload" | "url" => Some(Self::Image),
            "emoji" | "glyph" | "text" => Some(Self::Glyph),
            _ => None,
        }
    }
}

/// Primary color of the record as RGB
pub fn category_rgb(category: &Category) -> Rgb {
    category
        .color()
        .and_then(Rgb::from_hex)
        .unwrap_or(DEFAULT_RGB)
}

pub fn resolve_background(category: &Category, alpha: f64) -> String {
    category_rgb(category).to_rgba(alpha)
}

pub fn resolve_border(category: &Category, alpha: f64) -> String {
    category_rgb(category).to_rgba(alpha)
}

/// Solid `#rrggbb` for labels and hover text
pub fn resolve_text_color(category: &Category) -> String {
    category_rgb(category).to_hex()
}

pub fn resolve_palette(category: &Category, hovered: bool) -> CategoryPalette {
    let (background_alpha, border_alpha) = if hovered {
        (TILE_BACKGROUND_HOVER_ALPHA, TILE_BORDER_HOVER_ALPHA)
    } else {
        (TILE_BACKGROUND_ALPHA, TILE_BORDER_ALPHA)
    };
    let rgb = category_rgb(category);

    CategoryPalette {
        background: rgb.to_rgba(background_alpha),
        border: rgb.to_rgba(border_alpha),
        text: rgb.to_hex(),
    }
}

pub fn resolve_icon(category: &Category, size: IconSize) -> CategoryIcon {
    let current = match category {
        Category::Legacy(legacy) => return CategoryIcon::Legacy(legacy.icon_content.clone()),
        Category::Current(current) => current,
    };

    let px = size.px();
    let (kind, inline_value) = match current.icon_type.split_once(':') {
        Some((kind, value)) => (kind, Some(value.trim()).filter(|v| !v.is_empty())),
        None => (current.icon_type.as_str(), None),
    };
    let value = inline_value
        .map(str::to_string)
        .or_else(|| current.icon_value.clone());

    match (IconKind::parse(kind), value) {
        (Some(IconKind::Builtin), Some(name)) => {
            let name = name.to_ascii_lowercase();
            let name = if has_icon(&name) {
                name
            } else {
                FALLBACK_ICON.to_string()
            };
            CategoryIcon::Builtin { name, px }
        }
        (Some(IconKind::Image), Some(src)) => CategoryIcon::Image { src, px },
        (Some(IconKind::Glyph), Some(text)) => CategoryIcon::Glyph { text, px },
        _ => CategoryIcon::Builtin {
            name: FALLBACK_ICON.to_string(),
            px,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::DEFAULT_CATEGORY_COLOR;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Category {
        Category::from_value(&value).unwrap()
    }

    #[test]
    fn test_default_rgb_matches_default_color() {
        assert_eq!(Rgb::from_hex(DEFAULT_CATEGORY_COLOR), Some(DEFAULT_RGB));
    }

    #[test]
    fn test_red_tint_at_ten_percent() {
        let plomeria = record(json!({
            "id": 1, "Nombre": "Plomería", "TipoIcono": "builtin:wrench",
            "ColorPrimario": "#ff0000", "Activo": true
        }));
        assert_eq!(resolve_background(&plomeria, 0.1), "rgba(255, 0, 0, 0.1)");
        assert_eq!(resolve_border(&plomeria, 0.3), "rgba(255, 0, 0, 0.3)");
        assert_eq!(resolve_text_color(&plomeria), "#ff0000");
    }

    #[test]
    fn test_missing_color_uses_default() {
        let current = record(json!({ "id": 3, "Nombre": "Hotel", "TipoIcono": "emoji:🏨" }));
        let legacy = record(json!({ "id": 2, "Nombre": "Taxi", "Icono": "🚕" }));
        for category in [&current, &legacy] {
            assert_eq!(resolve_background(category, 0.1), "rgba(99, 102, 241, 0.1)");
            assert_eq!(resolve_border(category, 0.25), "rgba(99, 102, 241, 0.25)");
            assert_eq!(resolve_text_color(category), DEFAULT_CATEGORY_COLOR);
        }
    }

    #[test]
    fn test_malformed_color_degrades_to_default() {
        for bad in ["rojo", "#12", "ff0000", "#zzzzzz", "rgb(1,2,3)"] {
            let category = record(json!({
                "id": 4, "Nombre": "Gym", "TipoIcono": "builtin:heart", "ColorPrimario": bad
            }));
            assert_eq!(resolve_background(&category, 0.5), "rgba(99, 102, 241, 0.5)");
            assert_eq!(resolve_text_color(&category), "#6366f1");
        }
    }

    #[test]
    fn test_palette_hover() {
        let category = record(json!({
            "id": 5, "Nombre": "Café", "TipoIcono": "emoji:☕", "ColorPrimario": "#0F0"
        }));
        let idle = resolve_palette(&category, false);
        let hovered = resolve_palette(&category, true);
        assert_eq!(idle.background, "rgba(0, 255, 0, 0.1)");
        assert_eq!(hovered.background, "rgba(0, 255, 0, 0.2)");
        assert_eq!(hovered.border, "rgba(0, 255, 0, 0.6)");
        assert_eq!(idle.text, "#00ff00");
        assert_eq!(idle.text, hovered.text);
    }

    #[test]
    fn test_icon_dispatch() {
        let builtin = record(json!({ "id": 1, "Nombre": "Plomería", "TipoIcono": "builtin:Wrench" }));
        assert_eq!(
            resolve_icon(&builtin, IconSize::Large),
            CategoryIcon::Builtin { name: "wrench".into(), px: 40 }
        );

        let image = record(json!({ "id": 2, "Nombre": "Spa", "TipoIcono": "image:https://cdn.example.com/spa.png" }));
        assert_eq!(
            resolve_icon(&image, IconSize::Small),
            CategoryIcon::Image { src: "https://cdn.example.com/spa.png".into(), px: 16 }
        );

        let glyph = record(json!({ "id": 3, "Nombre": "Pizza", "TipoIcono": "emoji", "Icono": "🍕" }));
        assert_eq!(
            resolve_icon(&glyph, IconSize::Medium),
            CategoryIcon::Glyph { text: "🍕".into(), px: 24 }
        );
    }

    #[test]
    fn test_icon_fallbacks() {
        let unknown_kind = record(json!({ "id": 1, "Nombre": "X", "TipoIcono": "hologram:cat" }));
        let missing_value = record(json!({ "id": 2, "Nombre": "Y", "TipoIcono": "image" }));
        let unknown_builtin = record(json!({ "id": 3, "Nombre": "Z", "TipoIcono": "builtin:unicorn" }));
        for category in [&unknown_kind, &missing_value, &unknown_builtin] {
            assert_eq!(
                resolve_icon(category, IconSize::Medium),
                CategoryIcon::Builtin { name: FALLBACK_ICON.into(), px: 24 }
            );
        }
    }

    #[test]
    fn test_legacy_icon_is_verbatim() {
        let content = r#"<svg class="taxi"><path d="M0 0"/></svg>"#;
        let taxi = record(json!({ "id": 2, "Nombre": "Taxi", "Icono": content }));
        for size in [IconSize::Small, IconSize::Medium, IconSize::Large] {
            assert_eq!(resolve_icon(&taxi, size), CategoryIcon::Legacy(content.into()));
        }
    }
}
