//! Client-side image compression run before upload.
//!
//! An image is decoded once, scaled down to fit the configured bounds, and
//! re-encoded. When the payload is still over the size budget the encoder is
//! retried at lower quality, 0.2 at a time, down to a floor of 0.1.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::validation::BYTES_PER_MB;

/// Quality is stepped in whole percent so repeated subtraction cannot drift.
const QUALITY_STEP: u8 = 20;
const QUALITY_FLOOR: u8 = 10;

/// Absorbs float error so an exact fit such as 4000 * 0.48 stays 1920.
const SCALE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionOptions {
    pub max_width: u32,
    pub max_height: u32,
    /// Encoder quality in `(0, 1]`. Only lossy formats honour it.
    pub quality: f64,
    pub max_size_mb: f64,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            max_width: 1920,
            max_height: 1920,
            quality: 0.8,
            max_size_mb: 2.0,
        }
    }
}

impl CompressionOptions {
    pub fn validate(&self) -> Result<(), CompressionError> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(CompressionError::InvalidOptions(
                "max_width and max_height must be positive".into(),
            ));
        }
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(CompressionError::InvalidOptions(format!(
                "quality must be in (0, 1], got {}",
                self.quality
            )));
        }
        if !(self.max_size_mb > 0.0) {
            return Err(CompressionError::InvalidOptions(format!(
                "max_size_mb must be positive, got {}",
                self.max_size_mb
            )));
        }
        Ok(())
    }

    pub fn max_size_bytes(&self) -> f64 {
        self.max_size_mb * BYTES_PER_MB
    }

    fn start_percent(&self) -> u8 {
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("Failed to load image")]
    Decode(#[source] image::ImageError),
    #[error("Failed to compress image")]
    Encode(#[source] image::ImageError),
    #[error("invalid compression options: {0}")]
    InvalidOptions(String),
}

/// Encoding chosen for the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// An unknown type is written as PNG and an empty one as JPEG, the same
    /// fallbacks a canvas encoder applies.
    pub fn for_mime(mime: &str) -> Self {
        match mime.to_ascii_lowercase().as_str() {
            "" | "image/jpeg" | "image/jpg" | "image/pjpeg" => OutputFormat::Jpeg,
            "image/webp" => OutputFormat::WebP,
            _ => OutputFormat::Png,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
        }
    }

    /// WebP is written losslessly, so only JPEG reacts to quality.
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompressedImage {
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
    pub original_width: u32,
    pub original_height: u32,
    pub width: u32,
    pub height: u32,
    /// Quality of the final attempt, in `(0, 1]`.
    pub quality: f64,
    pub attempts: u32,
    /// `false` when even the quality floor could not get under the budget.
    pub within_budget: bool,
}

impl CompressedImage {
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    pub fn data_url(&self) -> String {
        to_data_url(self.mime(), &self.bytes)
    }
}

/// Decode, downscale and re-encode `bytes` until the result fits
/// `opts.max_size_mb` or the quality floor has been tried.
pub fn compress_image(
    bytes: &[u8],
    mime: &str,
    opts: &CompressionOptions,
) -> Result<CompressedImage, CompressionError> {
    opts.validate()?;

    let decoded = image::load_from_memory(bytes).map_err(CompressionError::Decode)?;

    let (original_width, original_height) = (decoded.width(), decoded.height());
    let (width, height) = fit_within(
        original_width,
        original_height,
        opts.max_width,
        opts.max_height,
    );
    let img = if (width, height) == (original_width, original_height) {
        decoded
    } else {
        decoded.resize_exact(width, height, FilterType::Triangle)
    };

    let format = OutputFormat::for_mime(mime);
    let budget = opts.max_size_bytes();
    let mut percent = opts.start_percent();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        let encoded = encode(&img, format, percent)?;
        let over_budget = encoded.len() as f64 > budget;
        debug!(
            attempt = attempts,
            quality = percent,
            bytes = encoded.len(),
            over_budget,
            "compression attempt"
        );

        let exhausted = !format.is_lossy() || percent <= QUALITY_FLOOR;
        if !over_budget || exhausted {
            if over_budget {
                warn!(
                    bytes = encoded.len(),
                    budget_bytes = budget as u64,
                    quality = percent,
                    "image still over size budget at lowest quality"
                );
            }
            return Ok(CompressedImage {
                bytes: encoded,
                format,
                original_width,
                original_height,
                width,
                height,
                quality: f64::from(percent) / 100.0,
                attempts,
                within_budget: !over_budget,
            });
        }

        percent = percent.saturating_sub(QUALITY_STEP).max(QUALITY_FLOOR);
    }
}

/// Scale `(width, height)` proportionally so it fits inside the bounds.
/// Scaled sides are floored, never below one pixel. Images already inside
/// the bounds are returned unchanged.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    let ratio = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let scale = |side: u32, bound: u32| -> u32 {
        ((f64::from(side) * ratio + SCALE_EPSILON).floor() as u32).clamp(1, bound)
    };
    (scale(width, max_width), scale(height, max_height))
}

fn encode(img: &DynamicImage, format: OutputFormat, percent: u8) -> Result<Vec<u8>, CompressionError> {
    let mut buf = Vec::new();
    let (w, h) = (img.width(), img.height());
    match format {
        OutputFormat::Jpeg => {
            let rgb = img.to_rgb8();
            JpegEncoder::new_with_quality(&mut buf, percent)
                .write_image(rgb.as_raw(), w, h, ExtendedColorType::Rgb8)
                .map_err(CompressionError::Encode)?;
        }
        OutputFormat::Png => {
            let rgba = img.to_rgba8();
            PngEncoder::new(&mut buf)
                .write_image(rgba.as_raw(), w, h, ExtendedColorType::Rgba8)
                .map_err(CompressionError::Encode)?;
        }
        OutputFormat::WebP => {
            let rgba = img.to_rgba8();
            WebPEncoder::new_lossless(&mut buf)
                .write_image(rgba.as_raw(), w, h, ExtendedColorType::Rgba8)
                .map_err(CompressionError::Encode)?;
        }
    }
    Ok(buf)
}

/// `data:` URL for `bytes`, used for compressed output and upload previews.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Rough size after compression: typical photos shrink by about 80%.
pub fn estimate_compressed_size(original_size: u64) -> u64 {
    (original_size as f64 * 0.2).round() as u64
}
