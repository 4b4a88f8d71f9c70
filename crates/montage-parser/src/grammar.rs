//! Self-description of the expression grammar.
//!
//! Every named production of the parser has a rule here. Rules are quoted in
//! the help text of parse errors and printed by `montage --grammar`.
//!
//! # Example
//!
//! ```
//! use montage_parser::grammar::Grammar;
//!
//! let grammar = Grammar::get();
//! assert_eq!(grammar.describe("pixels"), Some("integer 'px'"));
//! assert!(grammar.describe("no_such_rule").is_none());
//! ```

use std::{fmt, sync::LazyLock};

use indexmap::IndexMap;

/// Production name and rule, leaf productions first.
const RULES: &[(&str, &str)] = &[
    // Values
    ("number", "digit+ ('.' digit+)?"),
    ("integer", "('+' | '-')? digit+"),
    ("degrees", "number 'deg'"),
    ("percent", "number '%'"),
    ("pixels", "integer 'px'"),
    ("boolean", "'true' | 'false'"),
    ("string", "'\"' (char | '\\\"' | '\\\\')* '\"'"),
    // Colors
    ("color", "rgba | rgb | hsla | hsl"),
    ("rgba", "'rgba(' number ',' number ',' number ',' number ')'"),
    ("rgb", "'rgb(' number ',' number ',' number ')'"),
    ("hsla", "'hsla(' number ',' number ',' number ',' number ')'"),
    ("hsl", "'hsl(' number ',' number ',' number ')'"),
    ("color_stop", "color percent"),
    // Composites
    ("font_style", "'normal' | 'bold' | 'italic'"),
    ("font", "pixel_font | percent_font"),
    ("pixel_font", "font_style* pixels? string"),
    ("percent_font", "font_style* percent string"),
    ("length", "number '%w' | number '%h' | percent | pixels"),
    ("horizontal_alignment", "'left' | 'center' | 'right'"),
    ("vertical_alignment", "'top' | 'center' | 'bottom'"),
    (
        "image_position",
        "'centered' | 'cartesian(' percent ',' percent ')' | 'cartesian(' pixels ',' pixels ')'",
    ),
    (
        "image_positions",
        "image_position | '[' image_position (',' image_position)* ']'",
    ),
    (
        "text_fit",
        "'fittedBox(' length ',' length ',' length ')' | 'fitted(' length ',' length ')' | 'fromContent'",
    ),
    (
        "text_option",
        "'bgColor=' color | 'paddingTop=' length | 'paddingRight=' length | 'paddingBottom=' length | 'paddingLeft=' length",
    ),
    ("text_options", "'options=[' (text_option (',' text_option)*)? ']'"),
    // Filters
    (
        "filter",
        "noop | linear | blur | boxblur | colorize | scaleto | scale | zoom | text_positioned | text | grid | pad | round | overlay | mask | cover | fit | frame | fillrect",
    ),
    ("noop", "'noop()'"),
    (
        "linear",
        "'linear(' degrees ',' color_stop (',' color_stop)+ ')'",
    ),
    ("blur", "'blur()'"),
    ("boxblur", "'boxblur(' (pixels | percent) ')'"),
    ("colorize", "'colorize(' color ')'"),
    ("scaleto", "'scaleto(' length ',' length ')'"),
    ("scale", "'scale(' percent ')'"),
    ("zoom", "'zoom(' percent ')'"),
    (
        "text_positioned",
        "'textPositioned(' string ',' font ',' color ',' image_positions ',' horizontal_alignment ',' vertical_alignment ',' text_fit (',' text_options)? ')'",
    ),
    ("text", "'text(' string ',' font ',' color ')'"),
    ("grid", "'grid(' (source (',' source)*)? ')'"),
    (
        "pad",
        "'pad(' pixels (',' pixels ',' pixels ',' pixels)? ')' | 'pad(' percent (',' percent ',' percent ',' percent)? ')'",
    ),
    ("round", "'round(' (pixels | percent) ')'"),
    ("overlay", "'overlay(' source (',' 'fit=' boolean)? ')'"),
    ("mask", "'mask(' source ',' source ')'"),
    ("cover", "'cover(' length ',' length ')'"),
    ("fit", "'fit(' length ',' length ')'"),
    ("frame", "'frame(' length ',' color ')'"),
    (
        "fillrect",
        "'fillrect(' color ',' length ',' length ',' length ',' length ',' horizontal_alignment ',' vertical_alignment ')'",
    ),
    // Layers
    ("source", "'_' | '$' digit+ | string | path"),
    ("path", "(letter+ '://')? path_char+"),
    ("layer", "source ':' filter | filter | source"),
    ("layer_end", "';' | end of input"),
    ("pipeline", "layer (';' layer)*"),
];

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| Grammar::from_rules(RULES));

/// Registry mapping production names to their rules.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: IndexMap<&'static str, &'static str>,
}

impl Grammar {
    /// Returns the grammar of the expression language.
    pub fn get() -> &'static Grammar {
        &GRAMMAR
    }

    fn from_rules(rules: &[(&'static str, &'static str)]) -> Self {
        Self {
            rules: rules.iter().copied().collect(),
        }
    }

    /// Returns the rule of `production`, if it exists.
    pub fn describe(&self, production: &str) -> Option<&'static str> {
        self.rules.get(production).copied()
    }

    pub fn contains(&self, production: &str) -> bool {
        self.rules.contains_key(production)
    }

    /// Production names in declaration order.
    pub fn productions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    /// `(production, rule)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.rules.iter().map(|(name, rule)| (*name, *rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, rule) in self.iter() {
            writeln!(f, "{name} ::= {rule}")?;
        }
        Ok(())
    }
}
