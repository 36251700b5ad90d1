//! Paint colors: parsing user-supplied color strings and the swatch list.
//!
//! Accepted color strings:
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - Swatch names: `black`, `white`, `red`, `orange`, `yellow`, `green`,
//!   `blue`, `indigo`, `violet`
//! - Any other CSS color (`rgb()`, `hsl()`, named colors, `transparent`)

use image::Rgba;
use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
}

/// The fixed color swatches offered next to the free color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Black,
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
}

impl Swatch {
    /// Swatches in picker order.
    pub const ALL: [Swatch; 9] = [
        Swatch::Black,
        Swatch::White,
        Swatch::Red,
        Swatch::Orange,
        Swatch::Yellow,
        Swatch::Green,
        Swatch::Blue,
        Swatch::Indigo,
        Swatch::Violet,
    ];

    pub fn from_name(name: &str) -> Option<Swatch> {
        Self::ALL.into_iter().find(|s| s.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Swatch::Black => "black",
            Swatch::White => "white",
            Swatch::Red => "red",
            Swatch::Orange => "orange",
            Swatch::Yellow => "yellow",
            Swatch::Green => "green",
            Swatch::Blue => "blue",
            Swatch::Indigo => "indigo",
            Swatch::Violet => "violet",
        }
    }

    /// Opaque color of the swatch.
    pub fn color(self) -> Rgba<u8> {
        let [r, g, b] = match self {
            Swatch::Black => [0, 0, 0],
            Swatch::White => [255, 255, 255],
            Swatch::Red => [255, 0, 0],
            Swatch::Orange => [255, 127, 0],
            Swatch::Yellow => [255, 255, 0],
            Swatch::Green => [0, 255, 0],
            Swatch::Blue => [0, 0, 255],
            Swatch::Indigo => [75, 0, 130],
            Swatch::Violet => [148, 0, 211],
        };
        Rgba([r, g, b, 255])
    }
}

/// Parse a color string into RGBA.
///
/// Swatch names take precedence over CSS named colors, so `orange` is
/// `(255, 127, 0)` rather than the CSS `(255, 165, 0)`.
///
/// # Examples
///
/// ```
/// use pixelsprite::color::parse_color;
///
/// assert_eq!(parse_color("#F00").unwrap(), image::Rgba([255, 0, 0, 255]));
/// assert_eq!(parse_color("#00ff0080").unwrap(), image::Rgba([0, 255, 0, 128]));
/// assert_eq!(parse_color("orange").unwrap(), image::Rgba([255, 127, 0, 255]));
/// assert_eq!(parse_color("rgb(0, 0, 255)").unwrap(), image::Rgba([0, 0, 255, 255]));
/// ```
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(swatch) = Swatch::from_name(s) {
        return Ok(swatch.color());
    }
    parse_css_color(s)
}

fn parse_hex(hex: &str) -> Result<Rgba<u8>, ColorError> {
    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(bad));
    }

    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidHex(c)))
        .collect::<Result<_, _>>()?;

    match digits.len() {
        // Short forms double each digit: #F00 -> #FF0000
        3 | 4 => {
            let mut rgba = [255u8; 4];
            for (channel, d) in rgba.iter_mut().zip(&digits) {
                *channel = d * 17;
            }
            Ok(Rgba(rgba))
        }
        6 | 8 => {
            let mut rgba = [255u8; 4];
            for (channel, pair) in rgba.iter_mut().zip(digits.chunks(2)) {
                *channel = pair[0] * 16 + pair[1];
            }
            Ok(Rgba(rgba))
        }
        len => Err(ColorError::InvalidLength(len)),
    }
}

/// Parse a CSS color using lightningcss (rgb, hsl, hwb, named colors)
fn parse_css_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    use lightningcss::values::color::FloatColor;

    let css = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    let rgb = css.to_rgb().map_err(|_| ColorError::CssParse(format!("cannot convert '{}' to RGB", s)))?;

    match rgb {
        CssColor::RGBA(c) => Ok(Rgba([c.red, c.green, c.blue, c.alpha])),
        CssColor::Float(float) => match float.as_ref() {
            FloatColor::RGB(c) => {
                let to_u8 = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
                Ok(Rgba([to_u8(c.r), to_u8(c.g), to_u8(c.b), to_u8(c.alpha)]))
            }
            _ => Err(ColorError::CssParse("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}
