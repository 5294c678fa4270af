//! Format colors in any of the supported notations.
//!
//! ```rust
//! use tincture::{Color, Flags, Notation, Options};
//! let c = Color::new("rgb(210, 105, 30, 0.5)");
//! assert_eq!(c.format(Notation::Hex).unwrap(), "#D2691E80");
//! assert_eq!(c.format(Notation::Hsl).unwrap(), "hsla(25, 75%, 47.06%, 0.5)");
//!
//! let options = Options::default().with_flags(Flags::MODERN);
//! assert_eq!(
//!     c.format_with(Notation::Rgb, &options).unwrap(),
//!     "rgb(210 105 30 / 0.5)"
//! );
//! ```

use bitflags::bitflags;

use crate::{
    color::{Color, Component, Notation},
    error::{Error, Result},
    math::round,
    models::{Hex, Model},
    registry,
};

bitflags! {
    /// Flags that change how a color is formatted.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Always emit the alpha channel, even if the color is opaque.
        const ALPHA = 1 << 0;
        /// Separate channels with spaces and alpha with ` / `.
        const MODERN = 1 << 1;
        /// Use lowercase hex digits.
        const LOWERCASE = 1 << 2;
    }
}

/// Options for formatting a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Number of decimal digits every value is rounded to. Negative values
    /// disable rounding.
    pub precision: i32,
    /// Output flags.
    pub flags: Flags,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            precision: 2,
            flags: Flags::empty(),
        }
    }
}

impl Options {
    /// Return the options with a different precision.
    pub fn with_precision(self, precision: i32) -> Self {
        Self { precision, ..self }
    }

    /// Return the options with different flags.
    pub fn with_flags(self, flags: Flags) -> Self {
        Self { flags, ..self }
    }

    fn show_alpha(&self, alpha: Component) -> bool {
        alpha < 1.0 || self.flags.contains(Flags::ALPHA)
    }

    /// Round a value and render it without a trailing `.0`.
    pub fn number(&self, value: Component) -> String {
        let value = round(value, self.precision);
        // Avoid printing "-0".
        let value = if value == 0.0 { 0.0 } else { value };
        format!("{value}")
    }
}

/// Produce the textual form of one notation.
pub trait Formatter: Send + Sync {
    /// The notation this formatter produces.
    fn notation(&self) -> Notation;

    /// Format the color.
    fn format(&self, color: &Color, options: &Options) -> String;
}

/// How a function style notation opens.
#[derive(Clone, Copy, Debug)]
enum Head {
    /// `name(`, e.g. `rgb(`.
    Function(&'static str),
    /// `color(name `, e.g. `color(luv `.
    Color(&'static str),
    /// A function name that never takes the `a` suffix.
    Fixed(&'static str),
}

/// A notation written as a function of its channels.
pub struct FunctionFormatter {
    notation: Notation,
    head: Head,
    units: &'static [&'static str],
    values: fn(&Color) -> Vec<Component>,
}

impl Formatter for FunctionFormatter {
    fn notation(&self) -> Notation {
        self.notation
    }

    fn format(&self, color: &Color, options: &Options) -> String {
        let modern = options.flags.contains(Flags::MODERN);
        let show_alpha = options.show_alpha(color.alpha());
        let suffix = if show_alpha && !modern { "a" } else { "" };

        let mut out = match self.head {
            Head::Function(name) => format!("{name}{suffix}("),
            Head::Color(name) => format!("color({name}{suffix} "),
            Head::Fixed(name) => format!("{name}("),
        };

        let channels = (self.values)(color)
            .into_iter()
            .zip(self.units)
            .map(|(value, unit)| format!("{}{unit}", options.number(value)))
            .collect::<Vec<_>>();
        out.push_str(&channels.join(if modern { " " } else { ", " }));

        if show_alpha {
            out.push_str(if modern { " / " } else { ", " });
            out.push_str(&options.number(color.alpha()));
        }

        out.push(')');
        out
    }
}

/// `rgb(r, g, b)`
pub static RGB: FunctionFormatter = FunctionFormatter {
    notation: Notation::Rgb,
    head: Head::Function("rgb"),
    units: &["", "", ""],
    values: |c| c.to_rgb().channels().to_vec(),
};

/// `hsl(h, s%, l%)`
pub static HSL: FunctionFormatter = FunctionFormatter {
    notation: Notation::Hsl,
    head: Head::Function("hsl"),
    units: &["", "%", "%"],
    values: |c| c.to_hsl().channels().to_vec(),
};

/// `hsv(h, s%, v%)`
pub static HSV: FunctionFormatter = FunctionFormatter {
    notation: Notation::Hsv,
    head: Head::Function("hsv"),
    units: &["", "%", "%"],
    values: |c| c.to_hsv().channels().to_vec(),
};

/// `hwb(h, w%, b%)`
pub static HWB: FunctionFormatter = FunctionFormatter {
    notation: Notation::Hwb,
    head: Head::Function("hwb"),
    units: &["", "%", "%"],
    values: |c| c.to_hwb().channels().to_vec(),
};

/// `lab(l%, a, b)`
pub static LAB: FunctionFormatter = FunctionFormatter {
    notation: Notation::Lab,
    head: Head::Function("lab"),
    units: &["%", "", ""],
    values: |c| c.to_lab().channels().to_vec(),
};

/// `lch(l%, c, h)`
pub static LCH: FunctionFormatter = FunctionFormatter {
    notation: Notation::Lch,
    head: Head::Function("lch"),
    units: &["%", "", ""],
    values: |c| c.to_lch().channels().to_vec(),
};

/// `color(luv l%, u%, v%)`
pub static LUV: FunctionFormatter = FunctionFormatter {
    notation: Notation::Luv,
    head: Head::Color("luv"),
    units: &["%", "%", "%"],
    values: |c| c.to_luv().channels().to_vec(),
};

/// `color(uvw u, v, w)`
pub static UVW: FunctionFormatter = FunctionFormatter {
    notation: Notation::Uvw,
    head: Head::Color("uvw"),
    units: &["", "", ""],
    values: |c| c.to_uvw().channels().to_vec(),
};

/// `xyz(x, y, z)`
pub static XYZ: FunctionFormatter = FunctionFormatter {
    notation: Notation::Xyz,
    head: Head::Function("xyz"),
    units: &["", "", ""],
    values: |c| c.to_xyz().channels().to_vec(),
};

/// `device-cmyk(c, m, y, k)`
pub static CMYK: FunctionFormatter = FunctionFormatter {
    notation: Notation::Cmyk,
    head: Head::Fixed("device-cmyk"),
    units: &["", "", "", ""],
    values: |c| c.to_cmyk().channels().to_vec(),
};

/// `color(ryb r, y, b)`
pub static RYB: FunctionFormatter = FunctionFormatter {
    notation: Notation::Ryb,
    head: Head::Color("ryb"),
    units: &["", "", ""],
    values: |c| c.to_ryb().channels().to_vec(),
};

/// `#RRGGBB` with an `AA` suffix when the color is translucent.
pub struct HexFormatter;

/// The built-in hex formatter.
pub static HEX: HexFormatter = HexFormatter;

impl Formatter for HexFormatter {
    fn notation(&self) -> Notation {
        Notation::Hex
    }

    fn format(&self, color: &Color, options: &Options) -> String {
        let hex = Hex::from_rgb(&color.to_rgb());

        let mut out = hex.to_string();
        if options.flags.contains(Flags::ALPHA) && !hex.has_alpha() {
            out.push_str(&hex.a());
        }

        if options.flags.contains(Flags::LOWERCASE) {
            out.make_ascii_lowercase();
        }
        out
    }
}

/// The nearest CSS color keyword.
pub struct NameFormatter;

/// The built-in keyword formatter.
pub static NAME: NameFormatter = NameFormatter;

impl Formatter for NameFormatter {
    fn notation(&self) -> Notation {
        Notation::Name
    }

    fn format(&self, color: &Color, _options: &Options) -> String {
        color.name().to_string()
    }
}

/// The built-in formatters.
pub(crate) fn builtin() -> Vec<&'static dyn Formatter> {
    vec![
        &HEX, &RGB, &HSL, &HSV, &HWB, &LAB, &LCH, &LUV, &UVW, &XYZ, &CMYK, &RYB, &NAME,
    ]
}

impl Color {
    /// Format the color in the given notation with the default [`Options`].
    pub fn format(&self, notation: Notation) -> Result<String> {
        self.format_with(notation, &Options::default())
    }

    /// Format the color in the given notation.
    ///
    /// Fails with [`Error::NoFormatter`] if nothing is registered for the
    /// notation, which is always the case for [`Notation::Invalid`].
    pub fn format_with(&self, notation: Notation, options: &Options) -> Result<String> {
        let formatter = registry::formatter(notation).ok_or(Error::NoFormatter(notation))?;
        Ok(formatter.format(self, options))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(Notation::Rgb, "rgb(210, 105, 30)")]
    #[test_case(Notation::Hex, "#D2691E")]
    #[test_case(Notation::Hsl, "hsl(25, 75%, 47.06%)")]
    #[test_case(Notation::Hsv, "hsv(25, 85.71%, 82.35%)")]
    #[test_case(Notation::Hwb, "hwb(25, 11.76%, 17.65%)")]
    #[test_case(Notation::Lab, "lab(56.63%, 39.24, 57.55)")]
    #[test_case(Notation::Lch, "lch(56.63%, 69.66, 55.71)")]
    #[test_case(Notation::Luv, "color(luv 56.63%, 87.39%, 35.9%)")]
    #[test_case(Notation::Uvw, "color(uvw 22.49, 24.55, 21.55)")]
    #[test_case(Notation::Xyz, "xyz(33.73, 24.55, 3.2)")]
    #[test_case(Notation::Cmyk, "device-cmyk(0, 50, 85.71, 17.65)")]
    #[test_case(Notation::Ryb, "color(ryb 210, 158.57, 30)")]
    #[test_case(Notation::Name, "chocolate")]
    fn chocolate(notation: Notation, expected: &str) {
        let c = Color::new("rgb(210, 105, 30)");
        assert_eq!(c.format(notation).unwrap(), expected);
    }

    #[test]
    fn alpha_adds_suffix() {
        let c = Color::new("rgba(255, 0, 0, 0.25)");
        assert_eq!(c.format(Notation::Rgb).unwrap(), "rgba(255, 0, 0, 0.25)");
        assert_eq!(c.format(Notation::Hex).unwrap(), "#FF000040");
        assert_eq!(
            c.format(Notation::Luv).unwrap(),
            "color(luva 54.29%, 175.04%, 25.96%, 0.25)"
        );
        assert_eq!(
            c.format(Notation::Cmyk).unwrap(),
            "device-cmyk(0, 100, 100, 0, 0.25)"
        );
    }

    #[test]
    fn flags() {
        let c = Color::new("#0A0B0C");
        let options = Options::default().with_flags(Flags::ALPHA | Flags::LOWERCASE);
        assert_eq!(c.format_with(Notation::Hex, &options).unwrap(), "#0a0b0cff");
        assert_eq!(
            c.format_with(Notation::Rgb, &options).unwrap(),
            "rgba(10, 11, 12, 1)"
        );

        let options = Options::default().with_flags(Flags::MODERN | Flags::ALPHA);
        assert_eq!(
            c.format_with(Notation::Hsl, &options).unwrap(),
            "hsl(210 9.09% 4.31% / 1)"
        );
    }

    #[test]
    fn precision() {
        let c = Color::new("rgb(210, 105, 30)");
        let options = Options::default().with_precision(0);
        assert_eq!(c.format_with(Notation::Hsv, &options).unwrap(), "hsv(25, 86%, 82%)");

        let options = Options::default().with_precision(4);
        assert_eq!(
            c.format_with(Notation::Hsl, &options).unwrap(),
            "hsl(25, 75%, 47.0588%)"
        );
    }

    #[test]
    fn negative_zero_is_printed_as_zero() {
        assert_eq!(Options::default().number(-0.0), "0");
        assert_eq!(Options::default().number(-0.001), "0");
        assert_eq!(Options::default().with_precision(-1).number(1.25), "1.25");
    }

    #[test]
    fn huge_precision_leaves_values_alone() {
        assert_eq!(Options::default().with_precision(400).number(1.25), "1.25");
        assert_eq!(Options::default().with_precision(i32::MAX).number(127.5), "127.5");
    }

    #[test]
    fn invalid_has_no_formatter() {
        assert_eq!(
            Color::invalid().format(Notation::Invalid),
            Err(Error::NoFormatter(Notation::Invalid))
        );
    }
}
