use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub const DEFAULT_PER_LINE: usize = 24;
pub const INDENT: &str = "    ";
pub const DERIVED_PREFIX: &str = "image";

/// Named bundles of the two historical output conventions.
#[derive(EnumIter, EnumString, Display, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    /// `uchar splash[N]`, leading indent, space after each comma
    Splash,
    /// `const uint8_t image<stem>[N]`, indent printed after each wrap
    Image,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayName {
    Splash,
    /// `image` followed by the input's file stem, passed through as-is
    Derived,
    Custom(String),
}

#[derive(EnumIter, EnumString, Display, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum ElementType {
    Uchar,
    #[strum(serialize = "uint8")]
    ConstUint8,
}

impl ElementType {
    pub fn declaration(self) -> &'static str {
        match self {
            ElementType::Uchar => "uchar",
            ElementType::ConstUint8 => "const uint8_t",
        }
    }
}

#[derive(EnumIter, EnumString, Display, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum WrapStyle {
    LeadingIndent,
    TrailingIndent,
}

impl WrapStyle {
    /// Indent written before the first value of body line `line`.
    pub fn indent(self, line: usize) -> &'static str {
        match self {
            WrapStyle::LeadingIndent => INDENT,
            WrapStyle::TrailingIndent if line == 0 => "",
            WrapStyle::TrailingIndent => INDENT,
        }
    }

    pub fn separator(self) -> &'static str {
        match self {
            WrapStyle::LeadingIndent => " ",
            WrapStyle::TrailingIndent => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputStyle {
    pub name: ArrayName,
    pub element_type: ElementType,
    pub wrap: WrapStyle,
    pub per_line: usize,
}

impl OutputStyle {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Splash => Self {
                name: ArrayName::Splash,
                element_type: ElementType::Uchar,
                wrap: WrapStyle::LeadingIndent,
                per_line: DEFAULT_PER_LINE,
            },
            Preset::Image => Self {
                name: ArrayName::Derived,
                element_type: ElementType::ConstUint8,
                wrap: WrapStyle::TrailingIndent,
                per_line: DEFAULT_PER_LINE,
            },
        }
    }
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::from_preset(Preset::Splash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn presets_match_historical_variants() {
        let a = OutputStyle::default();
        assert_eq!(a.name, ArrayName::Splash);
        assert_eq!(a.element_type.declaration(), "uchar");
        assert_eq!(a.wrap, WrapStyle::LeadingIndent);
        assert_eq!(a.per_line, 24);

        let b = OutputStyle::from_preset(Preset::Image);
        assert_eq!(b.name, ArrayName::Derived);
        assert_eq!(b.element_type.declaration(), "const uint8_t");
        assert_eq!(b.wrap, WrapStyle::TrailingIndent);
    }

    #[test]
    fn flag_values_parse_back() {
        for preset in Preset::iter() {
            assert_eq!(Preset::from_str(&preset.to_string()).unwrap(), preset);
        }
        for wrap in WrapStyle::iter() {
            let s: &'static str = wrap.into();
            assert_eq!(WrapStyle::from_str(s).unwrap(), wrap);
        }
        assert_eq!(ElementType::from_str("uint8").unwrap(), ElementType::ConstUint8);
        assert_eq!(ElementType::from_str("uchar").unwrap(), ElementType::Uchar);
        assert_eq!(WrapStyle::from_str("trailing-indent").unwrap(), WrapStyle::TrailingIndent);
        assert!(Preset::from_str("bogus").is_err());
    }

    #[test]
    fn indents() {
        assert_eq!(WrapStyle::LeadingIndent.indent(0), INDENT);
        assert_eq!(WrapStyle::LeadingIndent.indent(3), INDENT);
        assert_eq!(WrapStyle::TrailingIndent.indent(0), "");
        assert_eq!(WrapStyle::TrailingIndent.indent(1), INDENT);
    }
}
