use tincture::{Color, Notation};

pub fn main() {
    let left = Color::new("#FF0000");
    let right = Color::new("#0000FF");

    // Red to blue in 10 steps, interpolated in LCh.
    for step in 0..=10 {
        let mut color = left.clone();
        color.mix(&right, step as f64 / 10.0);

        let hex = color.format(Notation::Hex).unwrap_or_default();
        let lch = color.format(Notation::Lch).unwrap_or_default();
        println!("{hex} {lch}");
    }
}
