//! A [`Color`] holds the canonical sRGB value that every supported notation
//! is parsed into and formatted from.

use std::{convert::Infallible, fmt, str::FromStr};

use crate::{math::clamp, models::Rgb, parse::Input, registry};

/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// Represent three components of a color, used as the currency of the matrix
/// based conversions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// Identifies the notation a [`Color`] was constructed from. Purely
/// informational, it never affects conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `rgb(r, g, b)`
    Rgb,
    /// `#RRGGBB`
    Hex,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsv(h, s%, v%)`
    Hsv,
    /// `hwb(h, w%, b%)`
    Hwb,
    /// `lab(l%, a, b)`
    Lab,
    /// `lch(l%, c, h)`
    Lch,
    /// `color(luv l%, u%, v%)`
    Luv,
    /// `color(uvw u, v, w)`
    Uvw,
    /// `xyz(x, y, z)`
    Xyz,
    /// `device-cmyk(c, m, y, k)`
    Cmyk,
    /// `color(ryb r, y, b)`
    Ryb,
    /// A CSS color keyword.
    Name,
    /// The input was not recognized by any parser.
    Invalid,
    /// A notation contributed by a registered plugin.
    Extension(&'static str),
}

impl Notation {
    /// The lowercase tag of the notation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Notation::Rgb => "rgb",
            Notation::Hex => "hex",
            Notation::Hsl => "hsl",
            Notation::Hsv => "hsv",
            Notation::Hwb => "hwb",
            Notation::Lab => "lab",
            Notation::Lch => "lch",
            Notation::Luv => "luv",
            Notation::Uvw => "uvw",
            Notation::Xyz => "xyz",
            Notation::Cmyk => "cmyk",
            Notation::Ryb => "ryb",
            Notation::Name => "name",
            Notation::Invalid => "invalid",
            Notation::Extension(name) => name,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A color in the canonical sRGB space.
///
/// The red, green and blue channels are always within `0..=255` and alpha
/// within `0..=1`. Anything that would move a channel outside of its range is
/// clamped.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    red: Component,
    green: Component,
    blue: Component,
    alpha: Component,
    notation: Notation,
}

impl Color {
    /// Create a color from any supported input. The input is offered to every
    /// registered parser in order and the first one that recognizes it wins.
    ///
    /// ```rust
    /// use tincture::{Color, Notation};
    /// let c = Color::new("hsl(0, 100%, 50%)");
    /// assert_eq!(c.notation(), Notation::Hsl);
    /// assert_eq!(c.red(), 255.0);
    ///
    /// let c = Color::new("not a color");
    /// assert!(!c.is_valid());
    /// ```
    pub fn new(input: impl Into<Input>) -> Self {
        let input = input.into();

        match registry::parse(&input) {
            Some((rgb, notation)) => Self::with_notation(&rgb, notation),
            None => {
                log::debug!("no parser recognized {input:?}, falling back to black");
                Self::invalid()
            }
        }
    }

    /// Create a color directly from an RGB record, clamping it into range.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::with_notation(&rgb, Notation::Rgb)
    }

    pub(crate) fn with_notation(rgb: &Rgb, notation: Notation) -> Self {
        let mut color = Self {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            alpha: 1.0,
            notation,
        };
        color.set_rgb(rgb);
        color.set_alpha(rgb.alpha);
        color
    }

    /// Opaque black tagged as [`Notation::Invalid`].
    pub fn invalid() -> Self {
        Self {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            alpha: 1.0,
            notation: Notation::Invalid,
        }
    }

    /// Returns false if the input this color was created from was not
    /// recognized.
    pub fn is_valid(&self) -> bool {
        self.notation != Notation::Invalid
    }

    /// The notation this color was created from.
    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// The red channel, in `0..=255`.
    pub fn red(&self) -> Component {
        self.red
    }

    /// The green channel, in `0..=255`.
    pub fn green(&self) -> Component {
        self.green
    }

    /// The blue channel, in `0..=255`.
    pub fn blue(&self) -> Component {
        self.blue
    }

    /// The alpha channel, in `0..=1`.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// Set the red channel.
    pub fn set_red(&mut self, value: Component) -> &mut Self {
        self.red = clamp(0.0, value, 255.0);
        self
    }

    /// Set the green channel.
    pub fn set_green(&mut self, value: Component) -> &mut Self {
        self.green = clamp(0.0, value, 255.0);
        self
    }

    /// Set the blue channel.
    pub fn set_blue(&mut self, value: Component) -> &mut Self {
        self.blue = clamp(0.0, value, 255.0);
        self
    }

    /// Set the alpha channel.
    pub fn set_alpha(&mut self, value: Component) -> &mut Self {
        self.alpha = clamp(0.0, value, 1.0);
        self
    }

    /// Replace the red, green and blue channels. Alpha is left alone.
    pub(crate) fn set_rgb(&mut self, rgb: &Rgb) -> &mut Self {
        self.set_red(rgb.r).set_green(rgb.g).set_blue(rgb.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::invalid()
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::from_rgb(value)
    }
}

impl FromStr for Color {
    type Err = Infallible;

    /// Parsing never fails, unrecognized input is tagged
    /// [`Notation::Invalid`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for Color {
    /// Formats the color in the notation it was created from, or as `rgb` if
    /// that notation can't be formatted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .format(self.notation)
            .or_else(|_| self.format(Notation::Rgb))
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_clamped_channels() {
        let c = Color::from_rgb(Rgb::new(300.0, -20.0, 127.5).with_alpha(1.5));
        assert_eq!(c.red(), 255.0);
        assert_eq!(c.green(), 0.0);
        assert_eq!(c.blue(), 127.5);
        assert_eq!(c.alpha(), 1.0);
        assert_eq!(c.notation(), Notation::Rgb);
    }

    #[test]
    fn setters_clamp() {
        let mut c = Color::from_rgb(Rgb::new(10.0, 20.0, 30.0));
        c.set_red(-1.0).set_green(256.0).set_blue(64.0).set_alpha(-0.5);
        assert_eq!(c.red(), 0.0);
        assert_eq!(c.green(), 255.0);
        assert_eq!(c.blue(), 64.0);
        assert_eq!(c.alpha(), 0.0);
    }

    #[test]
    fn setters_map_nan_to_the_lower_bound() {
        let mut c = Color::from_rgb(Rgb::new(10.0, 20.0, 30.0));
        c.set_red(Component::NAN)
            .set_green(Component::INFINITY)
            .set_alpha(Component::NAN);
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (0.0, 255.0, 30.0, 0.0));
    }

    #[test]
    fn non_finite_input_never_reaches_the_channels() {
        for text in ["hsl(1e400, 100%, 50%)", "lch(50% 40 1e400)"] {
            assert_eq!(Color::new(text), Color::invalid());
        }

        let mut c = Color::new("red");
        c.hue_by(Component::INFINITY)
            .saturate_by(Component::NAN)
            .alpha_by(Component::NAN);
        for channel in [c.red(), c.green(), c.blue()] {
            assert!((0.0..=255.0).contains(&channel));
        }
        assert!((0.0..=1.0).contains(&c.alpha()));
        assert!(c.is_valid());
    }

    #[test]
    fn default_is_invalid_black() {
        let c = Color::default();
        assert!(!c.is_valid());
        assert_eq!(c.notation(), Notation::Invalid);
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn unrecognized_input_is_invalid_black() {
        for input in [Input::from(42.0), Input::from("rgb(1, 2)"), Input::from("")] {
            let c = Color::new(input);
            assert_eq!(c, Color::invalid());
        }
    }

    #[test]
    fn from_str_never_fails() {
        let c: Color = "maroon".parse().unwrap();
        assert_eq!(c.notation(), Notation::Name);
        assert_eq!((c.red(), c.green(), c.blue()), (128.0, 0.0, 0.0));

        let c: Color = "nope".parse().unwrap();
        assert!(!c.is_valid());
    }

    #[test]
    fn display_uses_source_notation() {
        assert_eq!(Color::new("#FF000080").to_string(), "#FF000080");
        assert_eq!(Color::new("hsl(120, 100%, 25%)").to_string(), "hsl(120, 100%, 25%)");
        assert_eq!(Color::new("garbage").to_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn notation_tags() {
        assert_eq!(Notation::Cmyk.to_string(), "cmyk");
        assert_eq!(Notation::Extension("ansi").to_string(), "ansi");
        assert_eq!(Notation::Invalid.as_str(), "invalid");
    }
}
