//! Model a color in the UVW color space.
//!
//! This is the linear mapping of the CIE 1960 UCS (`U = 2X/3`, `V = Y`,
//! `W = (-X + 3Y + Z) / 2`), not the non-linear CIE 1964 U*V*W* space.

use crate::{
    color::{Component, Components},
    math::{multiply, Matrix},
    models::{Model, Rgb, Xyz},
};

#[rustfmt::skip]
const XYZ_TO_UVW: Matrix = [
    [2.0 / 3.0, 0.0, 0.0],
    [0.0,       1.0, 0.0],
    [-0.5,      1.5, 0.5],
];

#[rustfmt::skip]
const UVW_TO_XYZ: Matrix = [
    [1.5,  0.0, 0.0],
    [0.0,  1.0, 0.0],
    [1.5, -3.0, 2.0],
];

tincture_macros::gen_model! {
    /// A color in the UVW color space, on the same scale as [`Xyz`].
    pub struct Uvw {
        /// The U component.
        u: Component,
        /// The V component.
        v: Component,
        /// The W component.
        w: Component,
    }
}

impl From<Xyz> for Uvw {
    fn from(value: Xyz) -> Self {
        let Components(u, v, w) = multiply(&XYZ_TO_UVW, Components(value.x, value.y, value.z));
        Uvw::new(u, v, w).with_alpha(value.alpha)
    }
}

impl From<Uvw> for Xyz {
    fn from(value: Uvw) -> Self {
        let Components(x, y, z) = multiply(&UVW_TO_XYZ, Components(value.u, value.v, value.w));
        Xyz::new(x, y, z).with_alpha(value.alpha)
    }
}

impl Model for Uvw {
    fn from_rgb(rgb: &Rgb) -> Self {
        Uvw::from(Xyz::from(*rgb))
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from(Xyz::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    // The linear mapping, not the published CIE U*V*W* formulas.
    #[test]
    fn linear_mapping_from_xyz() {
        let uvw = Uvw::from(Xyz::new(33.72944, 24.545527, 3.196844));
        assert_component_eq!(uvw.u, 22.486293);
        assert_component_eq!(uvw.v, 24.545527);
        assert_component_eq!(uvw.w, 21.551992);
    }

    #[test]
    fn xyz_round_trip() {
        let xyz = Xyz::new(3.08854, 1.30848, 15.41618);
        let back = Xyz::from(Uvw::from(xyz));
        assert_component_eq!(back.x, xyz.x);
        assert_component_eq!(back.y, xyz.y);
        assert_component_eq!(back.z, xyz.z);
    }
}
