//! Hex color parsing shared by form validation and the category resolver

/// RGB-триплет
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Разбор `#rgb` / `#rrggbb` (регистр не важен, пробелы по краям игнорируются)
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = c.to_digit(16)? as u8;
                    *slot = nibble * 16 + nibble;
                }
                Some(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Нормализованная запись `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)`; alpha зажимается в [0, 1], не-конечное значение даёт 1
    pub fn to_rgba(&self, alpha: f64) -> String {
        let alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            1.0
        };
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

pub fn is_hex_color(value: &str) -> bool {
    Rgb::from_hex(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!(Rgb::from_hex("#ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::from_hex("#6366F1"), Some(Rgb::new(99, 102, 241)));
        assert_eq!(Rgb::from_hex("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::from_hex("  #00ff00 "), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "#", "red", "ff0000", "#ff00", "#gg0000", "#ff00000", "#ññ0"] {
            assert_eq!(Rgb::from_hex(bad), None, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_rgba_formatting() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(red.to_rgba(0.1), "rgba(255, 0, 0, 0.1)");
        assert_eq!(red.to_rgba(1.5), "rgba(255, 0, 0, 1)");
        assert_eq!(red.to_rgba(-0.2), "rgba(255, 0, 0, 0)");
        assert_eq!(red.to_rgba(f64::NAN), "rgba(255, 0, 0, 1)");
        assert_eq!(Rgb::new(0xaa, 0xbb, 0xcc).to_hex(), "#aabbcc");
    }
}
