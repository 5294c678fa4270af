//! Models for the rectangular and polar forms of the CIE-Lab color space.

use crate::{
    color::{Component, Components},
    math::adjust_hue,
    models::{Model, Rgb, Xyz, D50},
};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

tincture_macros::gen_model! {
    /// A color in the CIE-Lab color space.
    pub struct Lab {
        /// The lightness component, `0..=100`.
        l: Component,
        /// The a component, green to red.
        a: Component,
        /// The b component, blue to yellow.
        b: Component,
    }
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = adjust_hue(self.b.atan2(self.a).to_degrees());

        Lch::new(self.l, chroma, hue).with_alpha(self.alpha)
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let adapted = Components(
            value.x / 100.0 / D50.0,
            value.y / 100.0 / D50.1,
            value.z / 100.0 / D50.2,
        );

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let l = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(l, a, b).with_alpha(value.alpha)
    }
}

impl From<Lab> for Xyz {
    fn from(value: Lab) -> Self {
        // To avoid accessing the values through value all the time.
        let (l, a, b) = (value.l, value.a, value.b);

        let f1 = (l + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if l > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            l / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::new(
            x * D50.0 * 100.0,
            y * D50.1 * 100.0,
            z * D50.2 * 100.0,
        )
        .with_alpha(value.alpha)
    }
}

impl Model for Lab {
    fn from_rgb(rgb: &Rgb) -> Self {
        Lab::from(Xyz::from(*rgb))
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(Xyz::from(*self))
    }
}

tincture_macros::gen_model! {
    /// A color in the cylindrical polar form of CIE-Lab.
    pub struct Lch {
        /// The lightness component, `0..=100`.
        l: Component,
        /// The chroma component.
        c: Component,
        /// The hue component, in degrees.
        h: Component,
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Lab {
        let hue = self.h.to_radians();
        let a = self.c * hue.cos();
        let b = self.c * hue.sin();

        Lab::new(self.l, a, b).with_alpha(self.alpha)
    }
}

impl Model for Lch {
    fn from_rgb(rgb: &Rgb) -> Self {
        Lab::from_rgb(rgb).to_polar()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_rectangular().to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::parse::Field;

    #[test]
    fn lab_uses_alpha_as_the_alpha_key() {
        let fields = Lab::new(50.0, 10.0, -10.0).with_alpha(0.5).to_fields();
        assert_eq!(fields.get("a"), Some(&Field::Number(10.0)));
        assert_eq!(fields.get("alpha"), Some(&Field::Number(0.5)));
    }

    #[test]
    fn polar_round_trip() {
        let lab = Lab::new(56.629899, 39.241464, 57.550931);
        let lch = lab.to_polar();
        assert_component_eq!(lch.c, 69.656314);
        assert_component_eq!(lch.h, 55.711633);

        let back = lch.to_rectangular();
        assert_component_eq!(back.a, lab.a);
        assert_component_eq!(back.b, lab.b);
    }

    #[test]
    fn negative_hue_is_wrapped() {
        let lch = Lab::new(11.334662, 40.970336, -67.203172).to_polar();
        assert_component_eq!(lch.h, 301.368525);
    }

    #[test]
    fn achromatic_hue_is_zero() {
        let lch = Lab::new(50.0, 0.0, 0.0).to_polar();
        assert_eq!(lch.c, 0.0);
        assert_eq!(lch.h, 0.0);
    }

    #[test]
    fn xyz_round_trip() {
        let xyz = Xyz::new(33.72944, 24.545527, 3.196844);
        let back = Xyz::from(Lab::from(xyz));
        assert_component_eq!(back.x, xyz.x);
        assert_component_eq!(back.y, xyz.y);
        assert_component_eq!(back.z, xyz.z);
    }

    #[test]
    fn dark_colors_use_the_linear_branch() {
        let lab = Lab::from(Xyz::new(0.1, 0.1, 0.1));
        assert_component_eq!(lab.l, 0.1 / 100.0 * KAPPA);
        let back = Xyz::from(lab);
        assert_component_eq!(back.y, 0.1);
    }
}
