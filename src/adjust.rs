//! Mutate a color in place. Hue, saturation and lightness changes go through
//! HSL, alpha is changed directly. None of the mutators change the notation a
//! color was created from.
//!
//! ```rust
//! use tincture::{Color, NamedHue};
//! let mut c = Color::new("hsl(0, 100%, 50%)");
//! c.hue_to(NamedHue::Blue).darker_by(25.0);
//! assert_eq!(c.to_string(), "hsl(240, 100%, 25%)");
//! ```

use std::str::FromStr;

use crate::{
    color::{Color, Component},
    error::Error,
    math::{adjust_hue, clamp, srgb_inverse_compand},
    models::{Hsl, Model},
};

/// The twelve hues of the color wheel, 30 degrees apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedHue {
    /// 0 degrees.
    Red,
    /// 30 degrees.
    Orange,
    /// 60 degrees.
    Yellow,
    /// 90 degrees.
    Lime,
    /// 120 degrees.
    Green,
    /// 150 degrees.
    Spring,
    /// 180 degrees.
    Cyan,
    /// 210 degrees.
    Azure,
    /// 240 degrees.
    Blue,
    /// 270 degrees.
    Violet,
    /// 300 degrees.
    Magenta,
    /// 330 degrees.
    Rose,
}

impl NamedHue {
    const ALL: [NamedHue; 12] = [
        NamedHue::Red,
        NamedHue::Orange,
        NamedHue::Yellow,
        NamedHue::Lime,
        NamedHue::Green,
        NamedHue::Spring,
        NamedHue::Cyan,
        NamedHue::Azure,
        NamedHue::Blue,
        NamedHue::Violet,
        NamedHue::Magenta,
        NamedHue::Rose,
    ];

    /// The hue in degrees.
    pub fn degrees(&self) -> Component {
        Component::from(*self as u8) * 30.0
    }

    /// The lowercase keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamedHue::Red => "red",
            NamedHue::Orange => "orange",
            NamedHue::Yellow => "yellow",
            NamedHue::Lime => "lime",
            NamedHue::Green => "green",
            NamedHue::Spring => "spring",
            NamedHue::Cyan => "cyan",
            NamedHue::Azure => "azure",
            NamedHue::Blue => "blue",
            NamedHue::Violet => "violet",
            NamedHue::Magenta => "magenta",
            NamedHue::Rose => "rose",
        }
    }
}

impl FromStr for NamedHue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|hue| hue.as_str() == keyword)
            .ok_or_else(|| Error::UnknownHue(s.to_string()))
    }
}

/// A hue given either in degrees or as a point on the color wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HueValue {
    /// Degrees, wrapped into `[0, 360)`.
    Degrees(Component),
    /// A named hue.
    Named(NamedHue),
}

impl HueValue {
    /// The hue in degrees.
    pub fn degrees(&self) -> Component {
        match self {
            HueValue::Degrees(degrees) => adjust_hue(*degrees),
            HueValue::Named(hue) => hue.degrees(),
        }
    }
}

impl From<Component> for HueValue {
    fn from(value: Component) -> Self {
        HueValue::Degrees(value)
    }
}

impl From<NamedHue> for HueValue {
    fn from(value: NamedHue) -> Self {
        HueValue::Named(value)
    }
}

impl Color {
    fn update_hsl(&mut self, f: impl FnOnce(&mut Hsl)) -> &mut Self {
        let mut hsl = self.to_hsl();
        f(&mut hsl);
        self.set_rgb(&hsl.to_rgb())
    }

    /// Set the hue, in degrees or as a [`NamedHue`].
    pub fn hue_to(&mut self, hue: impl Into<HueValue>) -> &mut Self {
        let degrees = hue.into().degrees();
        self.update_hsl(|hsl| hsl.h = degrees)
    }

    /// Rotate the hue by `degrees`.
    pub fn hue_by(&mut self, degrees: Component) -> &mut Self {
        self.update_hsl(|hsl| hsl.h = adjust_hue(hsl.h + degrees))
    }

    /// Increase the saturation by `amount` percentage points.
    pub fn saturate_by(&mut self, amount: Component) -> &mut Self {
        self.update_hsl(|hsl| hsl.s = clamp(0.0, hsl.s + amount, 100.0))
    }

    /// Decrease the saturation by `amount` percentage points.
    pub fn desaturate_by(&mut self, amount: Component) -> &mut Self {
        self.saturate_by(-amount)
    }

    /// Increase the lightness by `amount` percentage points.
    pub fn lighter_by(&mut self, amount: Component) -> &mut Self {
        self.update_hsl(|hsl| hsl.l = clamp(0.0, hsl.l + amount, 100.0))
    }

    /// Decrease the lightness by `amount` percentage points.
    pub fn darker_by(&mut self, amount: Component) -> &mut Self {
        self.lighter_by(-amount)
    }

    /// Remove all saturation.
    pub fn grayscale(&mut self) -> &mut Self {
        self.desaturate_by(100.0)
    }

    /// Set the alpha channel.
    pub fn alpha_to(&mut self, alpha: Component) -> &mut Self {
        self.set_alpha(alpha)
    }

    /// Add `delta` to the alpha channel.
    pub fn alpha_by(&mut self, delta: Component) -> &mut Self {
        self.set_alpha(self.alpha() + delta)
    }

    /// Invert the red, green and blue channels, and alpha too if `alpha` is
    /// set.
    pub fn invert(&mut self, alpha: bool) -> &mut Self {
        let (red, green, blue) = (self.red(), self.green(), self.blue());
        self.set_red(255.0 - red)
            .set_green(255.0 - green)
            .set_blue(255.0 - blue);

        if alpha {
            self.set_alpha(1.0 - self.alpha());
        }
        self
    }

    /// The WCAG relative luminance in `0..=1`.
    pub fn luminance(&self) -> Component {
        let linear = |v: Component| srgb_inverse_compand(v / 255.0);
        0.2126 * linear(self.red()) + 0.7152 * linear(self.green()) + 0.0722 * linear(self.blue())
    }

    /// The WCAG contrast ratio between two colors, in `1..=21`.
    pub fn contrast(&self, other: &Color) -> Component {
        let a = self.luminance();
        let b = other.luminance();
        (a.max(b) + 0.05) / (a.min(b) + 0.05)
    }

    /// Returns true if the relative luminance is at least one half.
    pub fn is_light(&self) -> bool {
        self.luminance() >= 0.5
    }

    /// Returns true if the relative luminance is below one half.
    pub fn is_dark(&self) -> bool {
        !self.is_light()
    }
}
