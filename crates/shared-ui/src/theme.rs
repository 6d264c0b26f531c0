/// Accent colour of a dashboard.
///
/// Components read it through a `data-accent` attribute; the colours
/// themselves live in the stylesheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Purple,
    Pink,
    Blue,
}

/// All accents in display order.
pub const ALL_ACCENTS: &[Accent] = &[Accent::Purple, Accent::Pink, Accent::Blue];

impl Accent {
    /// Value of the `data-accent` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Purple => "purple",
            Accent::Pink => "pink",
            Accent::Blue => "blue",
        }
    }

    /// Parse an attribute value, falling back to purple.
    pub fn from_key(s: &str) -> Self {
        match s {
            "pink" => Accent::Pink,
            "blue" => Accent::Blue,
            _ => Accent::Purple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_default_is_purple() {
        assert_eq!(Accent::default(), Accent::Purple);
    }

    #[test]
    fn accent_key_roundtrip() {
        for accent in ALL_ACCENTS {
            assert_eq!(Accent::from_key(accent.as_str()), *accent);
        }
    }

    #[test]
    fn unknown_accent_key_falls_back() {
        assert_eq!(Accent::from_key("green"), Accent::Purple);
        assert_eq!(Accent::from_key(""), Accent::Purple);
    }
}
