//! Local renderer for the site card.
//!
//! Draws a 1200x630 image (the size link unfurlers expect): a solid
//! background, an inset accent frame and an accent bar, then encodes it as PNG.
use std::io::Cursor;

use axum::async_trait;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::og::OgImageGenerator;

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

const MARGIN: u32 = 48;
const FRAME: u32 = 8;
const BAR_HEIGHT: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRenderer {
    background: Rgba<u8>,
    accent: Rgba<u8>,
}

impl CardRenderer {
    pub fn new(background: Rgba<u8>, accent: Rgba<u8>) -> Self {
        CardRenderer { background, accent }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(
            parse_hex_color(&config.og_background)?,
            parse_hex_color(&config.og_accent)?,
        ))
    }

    /// Draw the card into a pixel buffer.
    pub fn draw(&self) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(WIDTH, HEIGHT, self.background);

        // Frame: four strips just inside the margin.
        let (left, top) = (MARGIN, MARGIN);
        let (right, bottom) = (WIDTH - MARGIN, HEIGHT - MARGIN);
        fill_rect(&mut img, left, top, right, top + FRAME, self.accent);
        fill_rect(&mut img, left, bottom - FRAME, right, bottom, self.accent);
        fill_rect(&mut img, left, top, left + FRAME, bottom, self.accent);
        fill_rect(&mut img, right - FRAME, top, right, bottom, self.accent);

        // Bar under where the title sits, a third of the width.
        let bar_left = left + 4 * FRAME;
        let bar_top = HEIGHT / 2 + BAR_HEIGHT;
        let (bar_right, bar_bottom) = (bar_left + WIDTH / 3, bar_top + BAR_HEIGHT);
        fill_rect(&mut img, bar_left, bar_top, bar_right, bar_bottom, self.accent);

        img
    }

    /// Draw and PNG-encode the card.
    pub fn render_png(&self) -> AppResult<Vec<u8>> {
        let img = self.draw();
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        tracing::debug!("Rendered OG card ({} bytes)", buf.len());
        Ok(buf)
    }
}

#[async_trait]
impl OgImageGenerator for CardRenderer {
    async fn generate(&self) -> AppResult<Vec<u8>> {
        let renderer = *self;
        tokio::task::spawn_blocking(move || renderer.render_png()).await?
    }
}

/// Parse `#rrggbb` / `rrggbb` into an opaque colour.
pub fn parse_hex_color(src: &str) -> AppResult<Rgba<u8>> {
    let hex = src.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::Config(format!("invalid colour '{}', expected #rrggbb", src)));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| AppError::Config(format!("invalid colour '{}': {}", src, e)))
    };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}

fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    let x1 = x1.min(img.width());
    let y1 = y1.min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba<u8> = Rgba([0x0f, 0x17, 0x2a, 255]);
    const ACCENT: Rgba<u8> = Rgba([0x38, 0xbd, 0xf8, 255]);

    #[test]
    fn parses_hex_colours() {
        assert_eq!(parse_hex_color("#0f172a").unwrap(), BG);
        assert_eq!(parse_hex_color("38BDF8").unwrap(), ACCENT);
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
    }

    #[test]
    fn card_layout() {
        let img = CardRenderer::new(BG, ACCENT).draw();
        assert_eq!(img.dimensions(), (WIDTH, HEIGHT));
        assert_eq!(*img.get_pixel(0, 0), BG);
        assert_eq!(*img.get_pixel(WIDTH / 2, HEIGHT / 2), BG);
        assert_eq!(*img.get_pixel(MARGIN, MARGIN), ACCENT);
        assert_eq!(*img.get_pixel(WIDTH - MARGIN - 1, HEIGHT - MARGIN - 1), ACCENT);
        assert_eq!(*img.get_pixel(MARGIN + 4 * FRAME, HEIGHT / 2 + BAR_HEIGHT), ACCENT);
    }

    #[tokio::test]
    async fn generates_a_decodable_png() {
        let bytes = CardRenderer::new(BG, ACCENT).generate().await.unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!(decoded.width(), WIDTH);
        assert_eq!(decoded.height(), HEIGHT);
    }
}
