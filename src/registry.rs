//! The process wide list of parsers and formatters.
//!
//! The built-in notations are registered the first time the registry is
//! used. Plugins append their own parsers and formatters with [`extend`].
//! Registration is append only and idempotent: registering the same plugin,
//! parser or formatter twice has no effect.
//!
//! ```rust
//! use tincture::{
//!     extend, models::Rgb, Color, Formatter, Input, Notation, Options, Parser, Plugin,
//! };
//!
//! struct Gray;
//!
//! impl Parser for Gray {
//!     fn notation(&self) -> Notation {
//!         Notation::Extension("gray")
//!     }
//!
//!     fn parse(&self, input: &Input) -> Option<Rgb> {
//!         let Input::Text(text) = input else { return None };
//!         let level = text.strip_prefix("gray ")?.parse().ok()?;
//!         Some(Rgb::new(level, level, level))
//!     }
//! }
//!
//! impl Formatter for Gray {
//!     fn notation(&self) -> Notation {
//!         Notation::Extension("gray")
//!     }
//!
//!     fn format(&self, color: &Color, options: &Options) -> String {
//!         format!("gray {}", options.number(color.red()))
//!     }
//! }
//!
//! static GRAY: Gray = Gray;
//! static PLUGIN: Plugin = Plugin {
//!     name: "gray",
//!     parsers: &[&GRAY],
//!     formatters: &[&GRAY],
//! };
//!
//! extend(&PLUGIN);
//! let c = Color::new("gray 128");
//! assert_eq!(c.notation(), Notation::Extension("gray"));
//! assert_eq!(c.to_string(), "gray 128");
//! ```

use std::sync::LazyLock;

use parking_lot::RwLock;

use crate::{
    color::Notation,
    format::{self, Formatter},
    models::Rgb,
    parse::{self, Input, Parser},
};

/// A bundle of parsers and formatters contributed by a third party.
pub struct Plugin {
    /// A name for diagnostics.
    pub name: &'static str,
    /// Parsers, tried after every parser registered before them.
    pub parsers: &'static [&'static dyn Parser],
    /// Formatters. A formatter overrides any earlier formatter for the same
    /// notation.
    pub formatters: &'static [&'static dyn Formatter],
}

struct Registry {
    parsers: Vec<&'static dyn Parser>,
    formatters: Vec<&'static dyn Formatter>,
    plugins: Vec<&'static Plugin>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            parsers: parse::builtin(),
            formatters: format::builtin(),
            plugins: Vec::new(),
        }
    }
}

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(Default::default);

/// Register a plugin. Registering the same plugin again is a no-op, as is
/// registering a parser or formatter that is already registered.
pub fn extend(plugin: &'static Plugin) {
    let mut registry = REGISTRY.write();

    if registry
        .plugins
        .iter()
        .any(|p| std::ptr::eq(*p, plugin))
    {
        log::debug!("plugin {} is already registered", plugin.name);
        return;
    }

    for parser in plugin.parsers {
        if registry
            .parsers
            .iter()
            .any(|p| std::ptr::addr_eq(*p, *parser))
        {
            log::debug!(
                "parser for {} from plugin {} is already registered",
                parser.notation(),
                plugin.name
            );
            continue;
        }
        registry.parsers.push(*parser);
    }

    for formatter in plugin.formatters {
        if registry
            .formatters
            .iter()
            .any(|f| std::ptr::addr_eq(*f, *formatter))
        {
            log::debug!(
                "formatter for {} from plugin {} is already registered",
                formatter.notation(),
                plugin.name
            );
            continue;
        }
        registry.formatters.push(*formatter);
    }

    registry.plugins.push(plugin);
    log::debug!(
        "registered plugin {} ({} parsers, {} formatters)",
        plugin.name,
        plugin.parsers.len(),
        plugin.formatters.len()
    );
}

/// Offer the input to every parser in order and return the first match.
///
/// Parsers run without the lock held, so a plugin parser may create colors
/// itself.
pub(crate) fn parse(input: &Input) -> Option<(Rgb, Notation)> {
    parsers().into_iter().find_map(|parser| {
        let rgb = parser.parse(input)?;
        log::trace!("{} parser recognized {input:?}", parser.notation());
        Some((rgb, parser.notation()))
    })
}

/// The most recently registered formatter for the notation.
pub(crate) fn formatter(notation: Notation) -> Option<&'static dyn Formatter> {
    REGISTRY
        .read()
        .formatters
        .iter()
        .rev()
        .find(|f| f.notation() == notation)
        .copied()
}

/// The registered parsers in the order they are tried.
pub fn parsers() -> Vec<&'static dyn Parser> {
    REGISTRY.read().parsers.clone()
}

/// The registered plugins in registration order.
pub fn plugins() -> Vec<&'static Plugin> {
    REGISTRY.read().plugins.clone()
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::{color::Color, format::Options};

    #[test]
    #[serial]
    fn builtin_order() {
        let notations = parsers()
            .iter()
            .map(|p| p.notation())
            .take(13)
            .collect::<Vec<_>>();

        use Notation as N;
        assert_eq!(
            notations,
            [
                N::Hex,
                N::Rgb,
                N::Hsl,
                N::Hsv,
                N::Hwb,
                N::Lab,
                N::Lch,
                N::Luv,
                N::Uvw,
                N::Xyz,
                N::Cmyk,
                N::Ryb,
                N::Name
            ]
        );
    }

    struct Never;

    impl Parser for Never {
        fn notation(&self) -> Notation {
            Notation::Extension("never")
        }

        fn parse(&self, _input: &Input) -> Option<Rgb> {
            None
        }
    }

    impl Formatter for Never {
        fn notation(&self) -> Notation {
            Notation::Extension("never")
        }

        fn format(&self, color: &Color, _options: &Options) -> String {
            format!("never {}", color.name())
        }
    }

    static NEVER: Never = Never;

    static FIRST: Plugin = Plugin {
        name: "first",
        parsers: &[&NEVER],
        formatters: &[&NEVER],
    };

    static SECOND: Plugin = Plugin {
        name: "second",
        parsers: &[&NEVER],
        formatters: &[&NEVER],
    };

    #[test]
    #[serial]
    fn registration_is_idempotent() {
        extend(&FIRST);
        let parser_count = parsers().len();
        let plugin_count = plugins().len();

        extend(&FIRST);
        assert_eq!(parsers().len(), parser_count);
        assert_eq!(plugins().len(), plugin_count);

        // A different plugin sharing a parser only adds itself.
        extend(&SECOND);
        assert_eq!(parsers().len(), parser_count);
        assert_eq!(plugins().len(), plugin_count + 1);

        assert!(plugins().iter().any(|p| p.name == "first"));
        assert!(parsers()
            .iter()
            .any(|p| p.notation() == Notation::Extension("never")));
    }

    /// Parses `like <color>` by delegating to the registered parsers.
    struct Like;

    impl Parser for Like {
        fn notation(&self) -> Notation {
            Notation::Extension("like")
        }

        fn parse(&self, input: &Input) -> Option<Rgb> {
            let Input::Text(text) = input else { return None };
            let color = Color::new(text.strip_prefix("like ")?);
            color.is_valid().then(|| color.to_rgb())
        }
    }

    static LIKE: Like = Like;

    static DELEGATING: Plugin = Plugin {
        name: "delegating",
        parsers: &[&LIKE],
        formatters: &[],
    };

    #[test]
    #[serial]
    fn plugin_parsers_may_create_colors() {
        extend(&DELEGATING);

        let writer = std::thread::spawn(|| {
            for _ in 0..200 {
                extend(&FIRST);
                extend(&DELEGATING);
            }
        });

        for _ in 0..200 {
            let c = Color::new("like maroon");
            assert_eq!(c.notation(), Notation::Extension("like"));
            assert_eq!((c.red(), c.green(), c.blue()), (128.0, 0.0, 0.0));
        }

        writer.join().unwrap();
        assert_eq!(Color::new("like notacolor"), Color::invalid());
    }

    #[test]
    #[serial]
    fn plugin_formatters() {
        extend(&FIRST);
        let c = Color::new("maroon");
        assert_eq!(
            c.format(Notation::Extension("never")).unwrap(),
            "never maroon"
        );
        // Nothing parses as "never", so the color keeps its keyword notation.
        assert_eq!(c.to_string(), "maroon");
    }
}
