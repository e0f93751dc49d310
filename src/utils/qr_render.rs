use std::io::Cursor;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use qrcode::render::svg;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormatParam {
    #[default]
    Svg,
    Png,
}

impl ImageFormatParam {
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormatParam::Svg => "image/svg+xml",
            ImageFormatParam::Png => "image/png",
        }
    }
}

/// Render `data` as a square QR image at least `pixels` wide.
pub fn render_qr(data: &str, pixels: u32, format: ImageFormatParam) -> Result<Vec<u8>> {
    let qr_code = QrCode::new(data.as_bytes()).context("QR code generation error")?;

    match format {
        ImageFormatParam::Svg => {
            let svg = qr_code
                .render::<svg::Color>()
                .min_dimensions(pixels, pixels)
                .quiet_zone(true)
                .build();
            Ok(svg.into_bytes())
        }
        ImageFormatParam::Png => {
            let luma = qr_code
                .render::<Luma<u8>>()
                .min_dimensions(pixels, pixels)
                .quiet_zone(true)
                .build();
            let mut bytes = Vec::new();
            DynamicImage::ImageLuma8(luma)
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
                .context("PNG encoding error")?;
            Ok(bytes)
        }
    }
}
