use serde::{Deserialize, Serialize};

/// Stroke or fill color of a map layer.
///
/// Serialized as a CSS hex string (`#RRGGBB`) since that is what the browser map library accepts.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_hex(&value).ok_or_else(|| format!("invalid color `{value}`"))
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_css()
    }
}

impl Color {
    /// Forest green: `#228B22`
    pub const FOREST_GREEN: Color = Color::from_hex("#228B22");
    /// Lime green: `#32CD32`
    pub const LIME_GREEN: Color = Color::from_hex("#32CD32");
    /// Blue: `#0000FF`
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Constructs color from its RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts the color into a CSS hex string: `#RRGGBB`.
    pub fn to_css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parses a color from a `#RRGGBB` hex string.
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        if hex_string.len() != 7 || !hex_string.starts_with('#') {
            return None;
        }

        let r = u8::from_str_radix(hex_string.get(1..3)?, 16).ok()?;
        let g = u8::from_str_radix(hex_string.get(3..5)?, 16).ok()?;
        let b = u8::from_str_radix(hex_string.get(5..7)?, 16).ok()?;

        Some(Self { r, g, b })
    }

    /// Parses a color from a `#RRGGBB` hex string at compile time.
    ///
    /// # Panics
    ///
    /// Panics if the parsing fails.
    pub const fn from_hex(hex_string: &'static str) -> Self {
        let bytes = hex_string.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' {
            panic!("Invalid color hex string");
        }

        Self {
            r: decode_byte(bytes[1], bytes[2]),
            g: decode_byte(bytes[3], bytes[4]),
            b: decode_byte(bytes[5], bytes[6]),
        }
    }
}

const fn decode_byte(high: u8, low: u8) -> u8 {
    decode_char(high) * 16 + decode_char(low)
}

const fn decode_char(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}
