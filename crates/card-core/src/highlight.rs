use crate::drag::BoundaryHits;

/// Case border color derived from the hit flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    Gray,
    /// Left/right wall.
    Blue,
    /// Top/bottom wall.
    Green,
    /// Corner: both walls at once.
    Red,
}

impl Highlight {
    pub const ALL: [Highlight; 4] = [
        Highlight::Gray,
        Highlight::Blue,
        Highlight::Green,
        Highlight::Red,
    ];

    pub fn from_hits(hits: BoundaryHits) -> Self {
        match (hits.horizontal, hits.vertical) {
            (true, true) => Highlight::Red,
            (true, false) => Highlight::Blue,
            (false, true) => Highlight::Green,
            (false, false) => Highlight::Gray,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Highlight::Gray => "border-gray-500",
            Highlight::Blue => "border-blue-500",
            Highlight::Green => "border-green-500",
            Highlight::Red => "border-red-500",
        }
    }
}

/// Case/card aspect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "landscape" => Some(Self::Landscape),
            "portrait" => Some(Self::Portrait),
            _ => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_mapping() {
        let h = |horizontal, vertical| {
            Highlight::from_hits(BoundaryHits {
                horizontal,
                vertical,
            })
        };
        assert_eq!(h(false, false), Highlight::Gray);
        assert_eq!(h(true, false), Highlight::Blue);
        assert_eq!(h(false, true), Highlight::Green);
        assert_eq!(h(true, true).css_class(), "border-red-500");
    }
}
