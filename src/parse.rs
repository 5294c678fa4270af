//! Turn loosely formatted text and structured records into canonical colors.
//!
//! Every notation has a [`Parser`]. Parsers are tried in registration order
//! and the first one that recognizes the [`Input`] wins. A parser that does
//! not recognize an input returns `None`, it never fails.
//!
//! Text input is matched against a per-notation pattern that accepts:
//!
//! - an optional `a` suffix on the function name (`rgb` and `rgba`),
//! - any letter case,
//! - channels separated by commas or whitespace,
//! - an optional alpha channel, separated by `,`, `/` or whitespace,
//! - percentages or absolute values for every channel.
//!
//! Channel values are clamped to the range of their space after parsing and
//! before they are converted to RGB.

use std::{collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};

use crate::{
    color::{Component, Notation},
    math::{adjust_hue, clamp},
    models::{Cmyk, Hex, Hsl, Hsv, Hwb, Lab, Lch, Luv, Model, Rgb, Ryb, Uvw, Xyz, D50},
    names,
};

/// A single value of a structured input.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    /// A numeric channel.
    Number(Component),
    /// A textual channel, as used by hex records.
    Text(String),
}

impl From<Component> for Field {
    fn from(value: Component) -> Self {
        Field::Number(value)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

/// Named fields of a structured input, in insertion order.
///
/// ```rust
/// use tincture::{Color, Fields, Notation};
/// let fields = Fields::new().with("h", 120.0).with("s", 100.0).with("l", 25.0);
/// assert_eq!(Color::new(fields).notation(), Notation::Hsl);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, Field)>,
}

impl Fields {
    /// Create an empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the fields with `key` set to `value`, replacing an existing
    /// value for the same key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Field>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`, replacing an existing value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Field>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// The field stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// The field stored under `key` if it is numeric.
    pub fn number(&self, key: &str) -> Option<Component> {
        match self.get(key) {
            Some(Field::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// The field stored under `key` if it is text.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(Field::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Field>> FromIterator<(K, V)> for Fields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Fields::new(), |fields, (key, value)| fields.with(key, value))
    }
}

impl From<HashMap<String, Component>> for Fields {
    fn from(value: HashMap<String, Component>) -> Self {
        // Sorted so that the result does not depend on the hasher.
        let mut entries = value.into_iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().collect()
    }
}

/// Anything a [`Color`](crate::Color) can be constructed from.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// A textual notation, `"rgb(255, 0, 0)"`, `"#F00"` or `"red"`.
    Text(String),
    /// A structured record, recognized by the names of its fields.
    Object(Fields),
    /// A bare number. No built-in parser recognizes numbers.
    Number(Component),
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&String> for Input {
    fn from(value: &String) -> Self {
        Input::Text(value.clone())
    }
}

impl From<Component> for Input {
    fn from(value: Component) -> Self {
        Input::Number(value)
    }
}

impl From<Fields> for Input {
    fn from(value: Fields) -> Self {
        Input::Object(value)
    }
}

/// Recognize one notation.
pub trait Parser: Send + Sync {
    /// The notation recognized inputs are tagged with.
    fn notation(&self) -> Notation;

    /// Convert the input to RGB, or return `None` if it is not in this
    /// parser's notation.
    fn parse(&self, input: &Input) -> Option<Rgb>;
}

/// The legal range of a single channel and how percentages map onto it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel {
    /// The smallest legal value.
    pub min: Component,
    /// The largest legal value.
    pub max: Component,
    /// The value `100%` maps to.
    pub percent: Component,
    /// Hue channels wrap around instead of clamping and accept `deg`.
    pub hue: bool,
    /// Round the value after a percentage is scaled.
    pub round: bool,
}

impl Channel {
    /// A linear channel where `100%` maps to `percent`.
    pub const fn new(min: Component, max: Component, percent: Component) -> Self {
        Self {
            min,
            max,
            percent,
            hue: false,
            round: false,
        }
    }

    /// A hue channel in degrees.
    pub const fn hue() -> Self {
        Self {
            min: 0.0,
            max: 360.0,
            percent: 359.0,
            hue: true,
            round: false,
        }
    }

    /// A channel in `0..=100`.
    pub const fn percentage() -> Self {
        Self::new(0.0, 100.0, 100.0)
    }

    /// An 8 bit channel in `0..=255`.
    pub const fn byte() -> Self {
        Self::new(0.0, 255.0, 255.0).rounded()
    }

    /// Round values after a percentage is scaled.
    pub const fn rounded(self) -> Self {
        Self {
            round: true,
            ..self
        }
    }

    /// Parse a number with an optional `%` or `deg` unit.
    pub fn parse(&self, token: &str) -> Option<Component> {
        let token = token.trim().to_ascii_lowercase();

        let value = if let Some(number) = token.strip_suffix('%') {
            let value = number.parse::<Component>().ok()? * (self.percent / 100.0);
            if self.round {
                value.round()
            } else {
                value
            }
        } else {
            match token.strip_suffix("deg") {
                Some(number) if self.hue => number.parse().ok()?,
                Some(_) => return None,
                None => token.parse().ok()?,
            }
        };

        // `1e400` matches the number pattern but overflows to infinity.
        Some(value).filter(|v: &Component| v.is_finite())
    }

    /// Bring a value into the legal range of the channel.
    pub fn clamp(&self, value: Component) -> Component {
        if self.hue {
            adjust_hue(value)
        } else {
            clamp(self.min, value, self.max)
        }
    }
}

/// Parse an alpha token, either `0..=1` or a percentage.
fn parse_alpha(token: &str) -> Option<Component> {
    let value = match token.trim().strip_suffix('%') {
        Some(number) => number.parse::<Component>().ok()? / 100.0,
        None => token.trim().parse().ok()?,
    };
    Some(value)
        .filter(|v: &Component| v.is_finite())
        .map(|v| clamp(0.0, v, 1.0))
}

const NUMBER: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:e[-+]?\d+)?";

/// Build the pattern for a function style notation. `head` matches
/// everything up to the first channel, e.g. `rgba?\(`.
fn function_regex(head: &str, count: usize) -> Regex {
    let value = format!(r"({NUMBER}(?:%|deg)?)");
    let channels = vec![value.as_str(); count].join(r"(?:\s*,\s*|\s+)");
    let pattern = format!(r"(?i)^\s*{head}\s*{channels}(?:(?:\s*[,/]\s*|\s+){value})?\s*\)\s*$");

    Regex::new(&pattern).expect("valid notation pattern")
}

/// A notation written as a function of its channels, e.g. `hsl(h, s%, l%)`,
/// or a record with the channel names as fields.
pub struct FunctionNotation {
    notation: Notation,
    pattern: LazyLock<Regex>,
    channels: &'static [Channel],
    keys: &'static [&'static str],
    build: fn(&[Component], Component) -> Rgb,
}

impl FunctionNotation {
    fn from_captures(&self, captures: &Captures) -> Option<Rgb> {
        let values = self
            .channels
            .iter()
            .enumerate()
            .map(|(i, channel)| {
                let token = captures.get(i + 1)?.as_str();
                channel.parse(token).map(|value| channel.clamp(value))
            })
            .collect::<Option<Vec<_>>>()?;

        let alpha = match captures.get(self.channels.len() + 1) {
            Some(token) => parse_alpha(token.as_str())?,
            None => 1.0,
        };

        Some((self.build)(&values, alpha))
    }

    fn from_fields(&self, fields: &Fields) -> Option<Rgb> {
        let values = self
            .channels
            .iter()
            .zip(self.keys)
            .map(|(channel, key)| {
                fields
                    .number(key)
                    .filter(|value| value.is_finite())
                    .map(|value| channel.clamp(value))
            })
            .collect::<Option<Vec<_>>>()?;

        let alpha_keys: &[&str] = if self.keys.contains(&"a") {
            &["alpha"]
        } else {
            &["a", "alpha"]
        };
        let alpha = alpha_keys
            .iter()
            .find_map(|key| fields.number(key))
            .filter(|alpha| alpha.is_finite())
            .map_or(1.0, |alpha| clamp(0.0, alpha, 1.0));

        Some((self.build)(&values, alpha))
    }
}

impl Parser for FunctionNotation {
    fn notation(&self) -> Notation {
        self.notation
    }

    fn parse(&self, input: &Input) -> Option<Rgb> {
        match input {
            Input::Text(text) => self.from_captures(&self.pattern.captures(text)?),
            Input::Object(fields) => self.from_fields(fields),
            Input::Number(_) => None,
        }
    }
}

const BYTE: Channel = Channel::byte();
const HUE: Channel = Channel::hue();
const PERCENTAGE: Channel = Channel::percentage();

/// `rgb(r, g, b)` and `{r, g, b}` with numeric channels.
pub static RGB: FunctionNotation = FunctionNotation {
    notation: Notation::Rgb,
    pattern: LazyLock::new(|| function_regex(r"rgba?\(", 3)),
    channels: &[BYTE, BYTE, BYTE],
    keys: &["r", "g", "b"],
    build: |c, alpha| Rgb::new(c[0], c[1], c[2]).with_alpha(alpha),
};

/// `hsl(h, s%, l%)`
pub static HSL: FunctionNotation = FunctionNotation {
    notation: Notation::Hsl,
    pattern: LazyLock::new(|| function_regex(r"hsla?\(", 3)),
    channels: &[HUE, PERCENTAGE, PERCENTAGE],
    keys: &["h", "s", "l"],
    build: |c, alpha| Hsl::new(c[0], c[1], c[2]).with_alpha(alpha).to_rgb(),
};

/// `hsv(h, s%, v%)`
pub static HSV: FunctionNotation = FunctionNotation {
    notation: Notation::Hsv,
    pattern: LazyLock::new(|| function_regex(r"hsva?\(", 3)),
    channels: &[HUE, PERCENTAGE, PERCENTAGE],
    keys: &["h", "s", "v"],
    build: |c, alpha| Hsv::new(c[0], c[1], c[2]).with_alpha(alpha).to_rgb(),
};

/// `hwb(h, w%, b%)`
pub static HWB: FunctionNotation = FunctionNotation {
    notation: Notation::Hwb,
    pattern: LazyLock::new(|| function_regex(r"hwba?\(", 3)),
    channels: &[HUE, PERCENTAGE, PERCENTAGE],
    keys: &["h", "w", "b"],
    build: |c, alpha| Hwb::new(c[0], c[1], c[2]).with_alpha(alpha).to_rgb(),
};

/// `lab(l%, a, b)`
pub static LAB: FunctionNotation = FunctionNotation {
    notation: Notation::Lab,
    pattern: LazyLock::new(|| function_regex(r"laba?\(", 3)),
    channels: &[
        PERCENTAGE,
        Channel::new(-160.0, 160.0, 160.0),
        Channel::new(-160.0, 160.0, 160.0),
    ],
    keys: &["l", "a", "b"],
    build: |c, alpha| Lab::new(c[0], c[1], c[2]).with_alpha(alpha).to_rgb(),
};

/// `lch(l%, c, h)`
pub static LCH: FunctionNotation = FunctionNotation {
    notation: Notation::Lch,
    pattern: LazyLock::new(|| function_regex(r"lcha?\(", 3)),
    channels: &[PERCENTAGE, Channel::new(0.0, 230.0, 230.0), HUE],
    keys: &["l", "c", "h"],
    build: |c, alpha| Lch::new(c[0], c[1], c[2]).with_alpha(alpha).to_rgb(),
};

/// `color(luv l%, u%, v%)`
pub static LUV: FunctionNotation = FunctionNotation {
    notation: Notation::Luv,
    pattern: LazyLock::new(|| function_regex(r"color\(\s*luva?\s+", 3)),
    channels: &[
        PERCENTAGE,
        Channel::new(-134.0, 224.0, 100.0),
        Channel::new(-140.0, 122.0, 100.0),
    ],
    keys: &["l", "u", "v"],
    build: |c, alpha| Luv::new(c[0], c[1], c[2]).with_alpha(alpha).to_rgb(),
};

/// `color(uvw u, v, w)`
pub static UVW: FunctionNotation = FunctionNotation {
    notation: Notation::Uvw,
    pattern: LazyLock::new(|| function_regex(r"color\(\s*uvwa?\s+", 3)),
    channels: &[
        Channel::new(0.0, 64.281, 64.281),
        Channel::new(0.0, 100.0, 100.0),
        Channel::new(0.0, 143.05, 143.05),
    ],
    keys: &["u", "v", "w"],
    build: |c, alpha| Uvw::new(c[0], c[1], c[2]).with_alpha(alpha).to_rgb(),
};

/// `xyz(x, y, z)`
pub static XYZ: FunctionNotation = FunctionNotation {
    notation: Notation::Xyz,
    pattern: LazyLock::new(|| function_regex(r"xyza?\(", 3)),
    channels: &[
        Channel::new(0.0, D50.0 * 100.0, D50.0 * 100.0),
        Channel::new(0.0, D50.1 * 100.0, D50.1 * 100.0),
        Channel::new(0.0, D50.2 * 100.0, D50.2 * 100.0),
    ],
    keys: &["x", "y", "z"],
    build: |c, alpha| Xyz::new(c[0], c[1], c[2]).with_alpha(alpha).to_rgb(),
};

/// `device-cmyk(c, m, y, k)`
pub static CMYK: FunctionNotation = FunctionNotation {
    notation: Notation::Cmyk,
    pattern: LazyLock::new(|| function_regex(r"(?:device-)?cmyka?\(", 4)),
    channels: &[PERCENTAGE, PERCENTAGE, PERCENTAGE, PERCENTAGE],
    keys: &["c", "m", "y", "k"],
    build: |c, alpha| Cmyk::new(c[0], c[1], c[2], c[3]).with_alpha(alpha).to_rgb(),
};

/// `color(ryb r, y, b)`
pub static RYB: FunctionNotation = FunctionNotation {
    notation: Notation::Ryb,
    pattern: LazyLock::new(|| function_regex(r"color\(\s*ryba?\s+", 3)),
    channels: &[BYTE, BYTE, BYTE],
    keys: &["r", "y", "b"],
    build: |c, alpha| Ryb::new(c[0], c[1], c[2]).with_alpha(alpha).to_rgb(),
};

/// `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, the `#` is optional. Also
/// records with textual `r`, `g` and `b` fields.
pub struct HexParser;

/// The built-in hex parser.
pub static HEX: HexParser = HexParser;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*#?([0-9a-f]{3,4}|[0-9a-f]{6}|[0-9a-f]{8})\s*$")
        .expect("valid hex pattern")
});

impl HexParser {
    fn from_text(text: &str) -> Option<Hex> {
        let digits = HEX_PATTERN.captures(text)?.get(1)?.as_str();

        let hex = if digits.len() <= 4 {
            let mut tokens = digits.split_inclusive(|_| true);
            Hex::new(tokens.next()?, tokens.next()?, tokens.next()?, tokens.next())
        } else {
            Hex::split(digits)
        };

        hex.map_err(|err| log::debug!("hex digits {digits:?} rejected: {err}"))
            .ok()
    }

    fn from_fields(fields: &Fields) -> Option<Hex> {
        Hex::new(
            fields.text("r")?,
            fields.text("g")?,
            fields.text("b")?,
            fields.text("a"),
        )
        .ok()
    }
}

impl Parser for HexParser {
    fn notation(&self) -> Notation {
        Notation::Hex
    }

    fn parse(&self, input: &Input) -> Option<Rgb> {
        let hex = match input {
            Input::Text(text) => Self::from_text(text)?,
            Input::Object(fields) => Self::from_fields(fields)?,
            Input::Number(_) => return None,
        };
        Some(hex.to_rgb())
    }
}

/// CSS color keywords, e.g. `rebeccapurple`.
pub struct NameParser;

/// The built-in color keyword parser.
pub static NAME: NameParser = NameParser;

impl Parser for NameParser {
    fn notation(&self) -> Notation {
        Notation::Name
    }

    fn parse(&self, input: &Input) -> Option<Rgb> {
        match input {
            Input::Text(text) => names::lookup(text.trim()),
            _ => None,
        }
    }
}

/// The built-in parsers in the order they are tried.
pub(crate) fn builtin() -> Vec<&'static dyn Parser> {
    vec![
        &HEX, &RGB, &HSL, &HSV, &HWB, &LAB, &LCH, &LUV, &UVW, &XYZ, &CMYK, &RYB, &NAME,
    ]
}
