use crate::{
    color::{Color, Component},
    math::{clamp, lerp},
    models::{Lch, Model},
};

impl Color {
    /// Mix this color with another in LCh, where `ratio` is the share of
    /// `other` in the result. `ratio` is clamped to `0..=1`; the endpoints
    /// reproduce either color exactly. The notation is left alone.
    pub fn mix(&mut self, other: &Color, ratio: Component) -> &mut Self {
        let t = clamp(0.0, ratio, 1.0);

        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            let alpha = other.alpha();
            return self.set_rgb(&other.to_rgb()).set_alpha(alpha);
        }

        let left = self.to_lch();
        let right = other.to_lch();

        let mixed = Lch::new(
            lerp(left.l, right.l, t),
            lerp(left.c, right.c, t),
            lerp(left.h, right.h, t),
        )
        .with_alpha(lerp(left.alpha, right.alpha, t));

        let alpha = mixed.alpha;
        self.set_rgb(&mixed.to_rgb()).set_alpha(alpha)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_component_eq, color::Notation, Color};

    #[test]
    fn endpoints_are_exact() {
        let a = Color::new("rgba(10, 20, 30, 0.5)");
        let b = Color::new("hsl(300, 80%, 60%)");

        let mut mixed = a.clone();
        mixed.mix(&b, 0.0);
        assert_eq!(mixed, a);

        let mut mixed = a.clone();
        mixed.mix(&b, 1.0);
        assert_eq!(mixed.to_rgb(), b.to_rgb());
        assert_eq!(mixed.notation(), Notation::Rgb);

        let mut mixed = a.clone();
        mixed.mix(&b, 7.0);
        assert_eq!(mixed.to_rgb(), b.to_rgb());

        let mut mixed = a.clone();
        mixed.mix(&b, -1.0);
        assert_eq!(mixed, a);
    }

    #[test]
    fn midpoint_is_interpolated_in_lch() {
        let white = Color::new("white");
        let black = Color::new("rgba(0, 0, 0, 0)");

        let mut mixed = white.clone();
        mixed.mix(&black, 0.5);

        let lch = mixed.to_lch();
        assert_component_eq!(mixed.alpha(), 0.5);
        approx::assert_abs_diff_eq!(lch.l, 50.0, epsilon = 1e-3);
        approx::assert_abs_diff_eq!(mixed.red(), mixed.green(), epsilon = 1e-2);
        approx::assert_abs_diff_eq!(mixed.green(), mixed.blue(), epsilon = 1e-2);
    }
}
