//! Best-effort discovery of a bold sans-serif system font.
//!
//! The glyph on the icons is cosmetic, so font loading is modelled as an
//! explicit optional capability: callers get `Some(font)` or render without
//! text. Only font-specific failures (missing file, unparseable data) select
//! the fallback.

use rusttype::Font;
use std::{fs, path::Path};

/// Probed in order; the first file that reads and parses as a font wins.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

pub fn load_system_font() -> Option<Font<'static>> {
    FONT_CANDIDATES
        .iter()
        .find_map(|candidate| font_from_file(Path::new(candidate)))
}

fn font_from_file(path: &Path) -> Option<Font<'static>> {
    let data = fs::read(path).ok()?;
    Font::try_from_vec(data)
}
