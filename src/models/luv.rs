//! Model a color in the CIE-Luv color space, referenced to D50.

use crate::{
    color::Component,
    models::{Model, Rgb, Xyz, D50},
};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

tincture_macros::gen_model! {
    /// A color in the CIE-Luv color space.
    pub struct Luv {
        /// The lightness component, `0..=100`.
        l: Component,
        /// The u component.
        u: Component,
        /// The v component.
        v: Component,
    }
}

/// The `u'` and `v'` chromaticity of the reference white.
fn reference_chromaticity() -> (Component, Component) {
    let denominator = D50.0 + 15.0 * D50.1 + 3.0 * D50.2;
    (4.0 * D50.0 / denominator, 9.0 * D50.1 / denominator)
}

impl From<Xyz> for Luv {
    fn from(value: Xyz) -> Self {
        let (x, y, z) = (value.x / 100.0, value.y / 100.0, value.z / 100.0);
        let (ur, vr) = reference_chromaticity();

        let denominator = x + 15.0 * y + 3.0 * z;
        let (u_prime, v_prime) = if denominator == 0.0 {
            (0.0, 0.0)
        } else {
            (4.0 * x / denominator, 9.0 * y / denominator)
        };

        let yr = y / D50.1;
        let l = if yr > EPSILON {
            116.0 * yr.cbrt() - 16.0
        } else {
            KAPPA * yr
        };

        // Black has no chromaticity.
        let (u, v) = if denominator == 0.0 {
            (0.0, 0.0)
        } else {
            (13.0 * l * (u_prime - ur), 13.0 * l * (v_prime - vr))
        };

        Luv::new(l, u, v).with_alpha(value.alpha)
    }
}

impl From<Luv> for Xyz {
    fn from(value: Luv) -> Self {
        let Luv { l, u, v, alpha } = value;

        if l == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0).with_alpha(alpha);
        }

        let (ur, vr) = reference_chromaticity();
        let u_prime = u / (13.0 * l) + ur;
        let v_prime = v / (13.0 * l) + vr;

        let yr = if l > KAPPA * EPSILON {
            let f = (l + 16.0) / 116.0;
            f * f * f
        } else {
            l / KAPPA
        };
        let y = yr * D50.1;

        let (x, z) = if v_prime == 0.0 {
            (0.0, 0.0)
        } else {
            (
                y * 9.0 * u_prime / (4.0 * v_prime),
                y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime),
            )
        };

        Xyz::new(x * 100.0, y * 100.0, z * 100.0).with_alpha(alpha)
    }
}

impl Model for Luv {
    fn from_rgb(rgb: &Rgb) -> Self {
        Luv::from(Xyz::from(*rgb))
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(Xyz::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn chocolate() {
        let luv = Luv::from(Xyz::new(33.72944, 24.545527, 3.196844));
        assert_component_eq!(luv.l, 56.629899);
        assert_component_eq!(luv.u, 87.389904);
        assert_component_eq!(luv.v, 35.898816);
    }

    #[test]
    fn black_guards_against_division_by_zero() {
        let luv = Luv::from(Xyz::new(0.0, 0.0, 0.0));
        assert_eq!(luv.channels(), [0.0, 0.0, 0.0]);

        let xyz = Xyz::from(Luv::new(0.0, 20.0, -20.0));
        assert_eq!(xyz.channels(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_v_prime_has_no_x_or_z() {
        let (_, vr) = reference_chromaticity();
        let l = 50.0;
        let xyz = Xyz::from(Luv::new(l, 30.0, -13.0 * l * vr));
        assert_eq!(xyz.x, 0.0);
        assert_eq!(xyz.z, 0.0);
        assert!(xyz.y.is_finite());
        assert_component_eq!(xyz.y, 18.418651);
    }

    #[test]
    fn xyz_round_trip() {
        let xyz = Xyz::new(11.400571, 16.783058, 17.512282).with_alpha(0.5);
        let back = Xyz::from(Luv::from(xyz));
        assert_component_eq!(back.x, xyz.x);
        assert_component_eq!(back.y, xyz.y);
        assert_component_eq!(back.z, xyz.z);
        assert_eq!(back.alpha, 0.5);
    }

    #[test]
    fn white_has_no_chroma() {
        let luv = Luv::from(Xyz::new(D50.0 * 100.0, D50.1 * 100.0, D50.2 * 100.0));
        assert_component_eq!(luv.l, 100.0);
        assert_component_eq!(luv.u, 0.0);
        assert_component_eq!(luv.v, 0.0);
    }
}
