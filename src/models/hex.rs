//! Model a color as hexadecimal channel strings.

use std::fmt;

use crate::{
    color::Component,
    error::{Error, Result},
    math::clamp,
    models::{Model, Rgb},
    parse::{Fields, Input},
};

/// A color as four hexadecimal channels.
///
/// ```rust
/// use tincture::models::Hex;
/// let hex = Hex::new("f", "80", "0", None).unwrap();
/// assert_eq!(hex.r(), "FF");
/// assert_eq!(hex.to_string(), "#FF8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hex {
    channels: [u8; 4],
}

fn parse_channel(token: &str) -> Result<u8> {
    let valid = matches!(token.len(), 1 | 2) && token.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(Error::HexChannel(token.to_string()));
    }

    let value = u8::from_str_radix(token, 16).map_err(|_| Error::HexChannel(token.to_string()))?;

    // A single digit is repeated, "f" means "ff".
    Ok(if token.len() == 1 { value * 17 } else { value })
}

impl Hex {
    /// Create a record from one or two digit channel tokens. A missing alpha
    /// is fully opaque.
    pub fn new(r: &str, g: &str, b: &str, a: Option<&str>) -> Result<Self> {
        Ok(Self {
            channels: [
                parse_channel(r)?,
                parse_channel(g)?,
                parse_channel(b)?,
                a.map(parse_channel).transpose()?.unwrap_or(u8::MAX),
            ],
        })
    }

    /// Split a run of 6 or 8 hex digits into two digit channel tokens.
    pub fn split(digits: &str) -> Result<Self> {
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(Error::HexDigits(digits.to_string()));
        }

        Self::new(
            &digits[0..2],
            &digits[2..4],
            &digits[4..6],
            digits.get(6..8),
        )
        .map_err(|_| Error::HexDigits(digits.to_string()))
    }

    /// The red channel as two uppercase digits.
    pub fn r(&self) -> String {
        format!("{:02X}", self.channels[0])
    }

    /// The green channel as two uppercase digits.
    pub fn g(&self) -> String {
        format!("{:02X}", self.channels[1])
    }

    /// The blue channel as two uppercase digits.
    pub fn b(&self) -> String {
        format!("{:02X}", self.channels[2])
    }

    /// The alpha channel as two uppercase digits.
    pub fn a(&self) -> String {
        format!("{:02X}", self.channels[3])
    }

    /// Returns true if the alpha channel is not `FF`.
    pub fn has_alpha(&self) -> bool {
        self.channels[3] != u8::MAX
    }

    /// Describe this record as text fields keyed by channel name.
    pub fn to_fields(&self) -> Fields {
        Fields::new()
            .with("r", self.r())
            .with("g", self.g())
            .with("b", self.b())
            .with("a", self.a())
    }
}

impl fmt::Display for Hex {
    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when the color is translucent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}{}{}", self.r(), self.g(), self.b())?;
        if self.has_alpha() {
            f.write_str(&self.a())?;
        }
        Ok(())
    }
}

impl From<Hex> for Input {
    fn from(value: Hex) -> Self {
        Input::Object(value.to_fields())
    }
}

impl Model for Hex {
    fn from_rgb(rgb: &Rgb) -> Self {
        let byte = |v: Component| clamp(0.0, v.round(), 255.0) as u8;

        Self {
            channels: [
                byte(rgb.r),
                byte(rgb.g),
                byte(rgb.b),
                byte(rgb.alpha * 255.0),
            ],
        }
    }

    fn to_rgb(&self) -> Rgb {
        let [r, g, b, a] = self.channels.map(Component::from);
        Rgb::new(r, g, b).with_alpha(a / 255.0)
    }
}
