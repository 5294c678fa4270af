//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 matrix in row-major order, i.e. `m[row][column]`.
pub type Matrix = [[Component; 3]; 3];

type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Return `min` if `value` is below it or NaN, `max` if `value` is above it
/// and `value` otherwise.
pub fn clamp(min: Component, value: Component, max: Component) -> Component {
    if value.is_nan() || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Round `value` to `precision` decimal digits. A negative precision means
/// no rounding at all.
pub fn round(value: Component, precision: i32) -> Component {
    if precision < 0 {
        return value;
    }

    let factor = (10.0 as Component).powi(precision);
    if !factor.is_finite() {
        return value;
    }
    (value * factor).round() / factor
}

/// Wrap a hue in degrees into `[0, 360)`. Non-finite hues become 0.
pub fn adjust_hue(value: Component) -> Component {
    if !value.is_finite() {
        return 0.0;
    }

    let hue = value % 360.0;
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    // -1e-20 % 360 + 360 rounds up to exactly 360.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Encode a linear light value with the sRGB transfer function.
pub fn srgb_compand(value: Component) -> Component {
    if value > 0.0031308 {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * value
    }
}

/// Decode an sRGB encoded value to linear light.
pub fn srgb_inverse_compand(value: Component) -> Component {
    if value > 0.04045 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

/// Multiply the given matrix with the 3 components.
pub fn multiply(matrix: &Matrix, components: Components) -> Components {
    // euclid multiplies row vectors, so the matrix goes in transposed.
    #[rustfmt::skip]
    let transform = Transform::new(
        matrix[0][0], matrix[1][0], matrix[2][0], 0.0,
        matrix[0][1], matrix[1][1], matrix[2][1], 0.0,
        matrix[0][2], matrix[1][2], matrix[2][2], 0.0,
        0.0,          0.0,          0.0,          1.0,
    );

    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Linear interpolation between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}
