//! Derive any supported space from the canonical RGB channels of a
//! [`Color`]. Nothing is cached, every call recomputes the record from the
//! current channels, so records are never stale after a mutation.
//!
//! ```rust
//! use tincture::{models::Hsl, Color};
//! let c = Color::new("rgb(255, 0, 0)");
//! let mut hsl: Hsl = c.to();
//! hsl.h = 120.0;
//! // The record is a copy, the color is unchanged.
//! assert_eq!(c.to_hsl().h, 0.0);
//! ```

use crate::{
    color::{Color, Component, Notation},
    models::{Cmyk, Hex, Hsl, Hsv, Hwb, Lab, Lch, Luv, Model, Rgb, Ryb, Uvw, Xyz},
};

impl Color {
    /// Convert this color to any [`Model`], alpha included.
    pub fn to<M: Model>(&self) -> M {
        M::from_rgb(&self.to_rgb())
    }

    /// The canonical channels as a record.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(self.red(), self.green(), self.blue()).with_alpha(self.alpha())
    }

    /// Convert to hexadecimal channels.
    pub fn to_hex(&self) -> Hex {
        self.to()
    }

    /// Convert to HSL.
    pub fn to_hsl(&self) -> Hsl {
        self.to()
    }

    /// Convert to HSV.
    pub fn to_hsv(&self) -> Hsv {
        self.to()
    }

    /// Convert to HWB.
    pub fn to_hwb(&self) -> Hwb {
        self.to()
    }

    /// Convert to CIE-XYZ, D50.
    pub fn to_xyz(&self) -> Xyz {
        self.to()
    }

    /// Convert to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        self.to()
    }

    /// Convert to CIE-LCh.
    pub fn to_lch(&self) -> Lch {
        self.to()
    }

    /// Convert to CIE-Luv.
    pub fn to_luv(&self) -> Luv {
        self.to()
    }

    /// Convert to UVW.
    pub fn to_uvw(&self) -> Uvw {
        self.to()
    }

    /// Convert to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to()
    }

    /// Convert to RYB.
    pub fn to_ryb(&self) -> Ryb {
        self.to()
    }

    /// The channels of this color in the space of `notation`, without alpha.
    /// Returns `None` for notations without numeric channels.
    pub fn channels(&self, notation: Notation) -> Option<Vec<Component>> {
        use Notation as N;

        Some(match notation {
            N::Rgb => self.to_rgb().channels().to_vec(),
            N::Hex => self.to_hex().to_rgb().channels().to_vec(),
            N::Hsl => self.to_hsl().channels().to_vec(),
            N::Hsv => self.to_hsv().channels().to_vec(),
            N::Hwb => self.to_hwb().channels().to_vec(),
            N::Lab => self.to_lab().channels().to_vec(),
            N::Lch => self.to_lch().channels().to_vec(),
            N::Luv => self.to_luv().channels().to_vec(),
            N::Uvw => self.to_uvw().channels().to_vec(),
            N::Xyz => self.to_xyz().channels().to_vec(),
            N::Cmyk => self.to_cmyk().channels().to_vec(),
            N::Ryb => self.to_ryb().channels().to_vec(),
            N::Name | N::Invalid | N::Extension(_) => return None,
        })
    }
}
