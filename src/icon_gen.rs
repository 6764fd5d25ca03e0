use crate::font;
use anyhow::{Context, Result};
use image::{ImageOutputFormat, Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::{
    fs::{create_dir_all, File},
    path::Path,
};

/// Icon sizes required by a Chromium extension manifest.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Gradient endpoints: #667eea at the top fading to #764ba2 at the bottom.
const COLOR_TOP: [u8; 3] = [102, 126, 234];
const COLOR_BOTTOM: [u8; 3] = [118, 75, 162];

/// Fraction of the icon edge covered by the white circle.
const CIRCLE_RATIO: f32 = 0.7;

/// Letter stamped at the center of every icon, and its font size relative to
/// the icon edge.
const GLYPH: char = 'C';
const GLYPH_RATIO: f32 = 0.5;

pub fn generate_icons(out_dir: &Path) -> Result<()> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    // A missing font is a cosmetic degradation (circle-only icons), never an
    // error.
    let font = font::load_system_font();

    for size in ICON_SIZES {
        let icon = build_icon(size, font.as_ref());
        let path = out_dir.join(format!("icon{size}.png"));
        save_png(&icon, &path)?;
        println!("✓ Generated {}", path.display());
    }

    println!("All {} icons generated", ICON_SIZES.len());
    Ok(())
}

/// Compose a single icon: vertical gradient background, centered white
/// circle, and the letter glyph when a font is available.
pub fn build_icon(size: u32, font: Option<&Font>) -> RgbaImage {
    let mut icon = RgbaImage::from_fn(size, size, |_, y| gradient_color(y, size));

    draw_circle(&mut icon, size);

    if let Some(font) = font {
        draw_glyph(&mut icon, font, size);
    }

    icon
}

/// Linear blend between the endpoint colors at row `y` of a `size`-row icon.
fn gradient_color(y: u32, size: u32) -> Rgba<u8> {
    let t = y as f32 / size as f32;
    let blend = |top: u8, bottom: u8| (top as f32 * (1.0 - t) + bottom as f32 * t) as u8;

    Rgba([
        blend(COLOR_TOP[0], COLOR_BOTTOM[0]),
        blend(COLOR_TOP[1], COLOR_BOTTOM[1]),
        blend(COLOR_TOP[2], COLOR_BOTTOM[2]),
        255,
    ])
}

/// Fill a centered circle spanning `CIRCLE_RATIO` of the icon edge with solid
/// white, no anti-aliasing.
fn draw_circle(icon: &mut RgbaImage, size: u32) {
    let center = size as f32 / 2.0;
    let radius = size as f32 * CIRCLE_RATIO / 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            if dx * dx + dy * dy <= radius * radius {
                icon.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
    }
}

/// Stamp the glyph in the top gradient color, centered on its measured
/// bounding box with a slight upward bias to offset the font's baseline
/// metrics.
fn draw_glyph(icon: &mut RgbaImage, font: &Font, size: u32) {
    let scale = Scale::uniform(size as f32 * GLYPH_RATIO);
    let ascent = font.v_metrics(scale).ascent;
    let glyph = font
        .glyph(GLYPH)
        .scaled(scale)
        .positioned(point(0.0, ascent));

    let bounds = match glyph.pixel_bounding_box() {
        Some(bounds) => bounds,
        // The font has no outline for the glyph, keep the circle-only icon.
        None => return,
    };

    let x0 = (size as i32 - bounds.width()) / 2;
    let y0 = (size as i32 - bounds.height()) / 2 - (size as f32 * 0.05) as i32;
    let ink = COLOR_TOP;

    glyph.draw(|gx, gy, coverage| {
        let x = x0 + gx as i32;
        let y = y0 + gy as i32;
        if x < 0 || y < 0 || x >= size as i32 || y >= size as i32 {
            return;
        }

        let pixel = icon.get_pixel_mut(x as u32, y as u32);
        for channel in 0..3 {
            pixel[channel] =
                (pixel[channel] as f32 * (1.0 - coverage) + ink[channel] as f32 * coverage) as u8;
        }
    });
}

fn save_png(icon: &RgbaImage, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    icon.write_to(&mut file, ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
