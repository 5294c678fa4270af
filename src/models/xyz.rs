//! Model a color in the CIE-XYZ color space with a D50 white point.

use crate::{
    color::{Component, Components},
    math::{multiply, srgb_compand, srgb_inverse_compand, Matrix},
    models::{Model, Rgb},
};

/// The D50 reference white.
pub const D50: Components = Components(0.96422, 1.0, 0.82521);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const RGB_TO_XYZ_D65: Matrix = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_D65_TO_RGB: Matrix = [
    [ 3.2404542, -1.5371385, -0.4985314],
    [-0.9692660,  1.8760108,  0.0415560],
    [ 0.0556434, -0.2040259,  1.0572252],
];

// Bradford chromatic adaptation.
#[rustfmt::skip]
const D65_TO_D50: Matrix = [
    [ 1.0478112, 0.0228866, -0.0501270],
    [ 0.0295424, 0.9904844, -0.0170491],
    [-0.0092345, 0.0150436,  0.7521316],
];

#[rustfmt::skip]
const D50_TO_D65: Matrix = [
    [ 0.9555766, -0.0230393, 0.0631636],
    [-0.0282895,  1.0099416, 0.0210077],
    [ 0.0122982, -0.0204830, 1.3299098],
];

tincture_macros::gen_model! {
    /// A color in the CIE-XYZ color space adapted to D50, scaled so that the
    /// reference white has a `y` of 100.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl From<Rgb> for Xyz {
    fn from(value: Rgb) -> Self {
        let linear = Components(value.r, value.g, value.b).map(|v| srgb_inverse_compand(v / 255.0));
        let d65 = multiply(&RGB_TO_XYZ_D65, linear);
        let Components(x, y, z) = multiply(&D65_TO_D50, d65).map(|v| v * 100.0);

        Xyz::new(x, y, z).with_alpha(value.alpha)
    }
}

impl From<Xyz> for Rgb {
    fn from(value: Xyz) -> Self {
        let d50 = Components(value.x, value.y, value.z).map(|v| v / 100.0);
        let d65 = multiply(&D50_TO_D65, d50);
        let Components(r, g, b) = multiply(&XYZ_D65_TO_RGB, d65).map(|v| srgb_compand(v) * 255.0);

        Rgb::new(r, g, b).with_alpha(value.alpha)
    }
}

impl Model for Xyz {
    fn from_rgb(rgb: &Rgb) -> Self {
        Xyz::from(*rgb)
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_maps_to_the_reference_white() {
        let xyz = Xyz::from(Rgb::new(255.0, 255.0, 255.0));
        assert_component_eq!(xyz.x, D50.0 * 100.0);
        assert_component_eq!(xyz.y, D50.1 * 100.0);
        assert_component_eq!(xyz.z, D50.2 * 100.0);
    }

    #[test]
    fn black_is_zero() {
        let xyz = Xyz::from(Rgb::new(0.0, 0.0, 0.0).with_alpha(0.5));
        assert_eq!(xyz.channels(), [0.0, 0.0, 0.0]);
        assert_eq!(xyz.alpha, 0.5);
    }

    #[test]
    fn round_trip() {
        for rgb in [
            Rgb::new(210.0, 105.0, 30.0),
            Rgb::new(0.0, 0.0, 128.0),
            Rgb::new(12.0, 250.0, 77.0),
        ] {
            let back = Rgb::from(Xyz::from(rgb));
            approx::assert_abs_diff_eq!(back.r, rgb.r, epsilon = 1e-3);
            approx::assert_abs_diff_eq!(back.g, rgb.g, epsilon = 1e-3);
            approx::assert_abs_diff_eq!(back.b, rgb.b, epsilon = 1e-3);
        }
    }

    #[test]
    fn out_of_range_input_is_extrapolated() {
        let rgb = Rgb::from(Xyz::new(120.0, 120.0, 120.0));
        assert!(rgb.r > 255.0);
    }
}
