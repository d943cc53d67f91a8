use colored::Color;

/// Color for languages missing from the table.
pub const DEFAULT_COLOR: Color = Color::TrueColor {
    r: 0x88,
    g: 0x88,
    b: 0x88,
};

// Colors follow GitHub's linguist palette.
const LANGUAGE_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("c", (0x55, 0x55, 0x55)),
    ("c#", (0x17, 0x86, 0x00)),
    ("c++", (0xf3, 0x4b, 0x7d)),
    ("css", (0x56, 0x3d, 0x7c)),
    ("dart", (0x00, 0xb4, 0xab)),
    ("elixir", (0x6e, 0x4a, 0x7e)),
    ("go", (0x00, 0xad, 0xd8)),
    ("haskell", (0x5e, 0x50, 0x86)),
    ("html", (0xe3, 0x4c, 0x26)),
    ("java", (0xb0, 0x72, 0x19)),
    ("javascript", (0xf1, 0xe0, 0x5a)),
    ("kotlin", (0xa9, 0x7b, 0xff)),
    ("lua", (0x00, 0x00, 0x80)),
    ("objective-c", (0x43, 0x8e, 0xff)),
    ("php", (0x4f, 0x5d, 0x95)),
    ("python", (0x35, 0x72, 0xa5)),
    ("ruby", (0x70, 0x15, 0x16)),
    ("rust", (0xde, 0xa5, 0x84)),
    ("scala", (0xc2, 0x2d, 0x40)),
    ("shell", (0x89, 0xe0, 0x51)),
    ("swift", (0xf0, 0x51, 0x38)),
    ("typescript", (0x31, 0x78, 0xc6)),
    ("vue", (0x41, 0xb8, 0x83)),
    ("zig", (0xec, 0x91, 0x5c)),
];

/// Display color for a language name. Lookup ignores case.
pub fn color_for(language: &str) -> Color {
    let language = language.to_lowercase();
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|&(_, (r, g, b))| Color::TrueColor { r, g, b })
        .unwrap_or(DEFAULT_COLOR)
}
