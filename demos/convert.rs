use tincture::{Color, Notation};

pub fn main() {
    let color = Color::new("chocolate");

    for notation in [
        Notation::Hex,
        Notation::Rgb,
        Notation::Hsl,
        Notation::Hsv,
        Notation::Hwb,
        Notation::Lab,
        Notation::Lch,
        Notation::Luv,
        Notation::Uvw,
        Notation::Xyz,
        Notation::Cmyk,
        Notation::Ryb,
        Notation::Name,
    ] {
        match color.format(notation) {
            Ok(text) => println!("{notation:>5}: {text}"),
            Err(err) => eprintln!("{notation:>5}: {err}"),
        }
    }
}
