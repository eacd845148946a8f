// Color palettes for the background gradient, particles and hearts.
//
// Colors are authored as sRGB hex and converted to linear RGB because the
// renderer draws into an sRGB surface.

pub type Rgb = [f32; 3];

/// Four gradient endpoints fed to the background shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub colors: [Rgb; 4],
}

pub const DEFAULT_GRADIENT: [&str; 4] = ["#FFE5D9", "#FFCAD4", "#F9DCC4", "#FEC89A"];

/// Body classes that swap in a page-specific gradient. Checked in order;
/// the first class present on `<body>` wins.
pub const THEME_GRADIENTS: [(&str, [&str; 4]); 3] = [
    ("theme-spa", ["#B2AC88", "#FFFDD0", "#FFFDD0", "#E2725B"]),
    ("theme-dayout", ["#87CEEB", "#FFB347", "#F9F9F9", "#87CEEB"]),
    ("theme-packages", ["#008080", "#FF8C94", "#E1E8ED", "#008080"]),
];

pub const ACCENT_AMBER: &str = "#E8A854";
pub const ACCENT_CORAL: &str = "#E8857C";

/// Parse `#RRGGBB` (leading `#` optional) into sRGB components in [0, 1].
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let h = hex.strip_prefix('#').unwrap_or(hex);
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
    Some([
        channel(0)? as f32 / 255.0,
        channel(2)? as f32 / 255.0,
        channel(4)? as f32 / 255.0,
    ])
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Hex to linear RGB. Unparseable input falls back to black.
pub fn linear_from_hex(hex: &str) -> Rgb {
    match parse_hex(hex) {
        Some([r, g, b]) => [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)],
        None => {
            log::warn!("[theme] invalid color {hex:?}");
            [0.0, 0.0, 0.0]
        }
    }
}

impl Palette {
    pub fn from_hex(hex: [&str; 4]) -> Self {
        Self {
            colors: hex.map(linear_from_hex),
        }
    }

    /// Pick the gradient for a page given its body classes.
    pub fn for_body_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let classes: Vec<&str> = classes.into_iter().collect();
        THEME_GRADIENTS
            .iter()
            .find(|(name, _)| classes.contains(name))
            .map(|(_, hex)| Self::from_hex(*hex))
            .unwrap_or_else(|| Self::from_hex(DEFAULT_GRADIENT))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_hex(DEFAULT_GRADIENT)
    }
}
