use std::path::{Path, PathBuf};

use anyhow::Context;
use bz_core::accept::guess_mime;
use bz_core::compression::{CompressedImage, CompressionOptions, compress_image};
use serde::Serialize;
use tracing::{info, warn};

use super::format_bytes;

#[derive(Debug, Serialize)]
struct Summary<'a> {
    input: &'a str,
    output: &'a str,
    mime: &'a str,
    original_bytes: u64,
    compressed_bytes: u64,
    original_size: [u32; 2],
    size: [u32; 2],
    quality: f64,
    attempts: u32,
    within_budget: bool,
}

/// `photo.jpg` -> `photo.compressed.jpg`, using the output format's extension.
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}.compressed.{extension}"))
}

/// Run the `compress` subcommand.
pub async fn run(
    path: &Path,
    out: Option<&Path>,
    opts: &CompressionOptions,
    json_output: bool,
) -> anyhow::Result<CompressedImage> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = guess_mime(&name);
    info!(file = %name, mime, bytes = bytes.len(), "compressing");

    let compressed = compress_image(&bytes, mime, opts)
        .with_context(|| format!("{} could not be compressed", path.display()))?;
    if !compressed.within_budget {
        warn!(
            file = %name,
            bytes = compressed.byte_len(),
            "result is still larger than the size budget"
        );
    }

    let out_path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(path, compressed.format.extension()));
    tokio::fs::write(&out_path, &compressed.bytes)
        .await
        .with_context(|| format!("cannot write {}", out_path.display()))?;

    let input = path.display().to_string();
    let output = out_path.display().to_string();
    let summary = Summary {
        input: &input,
        output: &output,
        mime: compressed.mime(),
        original_bytes: bytes.len() as u64,
        compressed_bytes: compressed.byte_len() as u64,
        original_size: [compressed.original_width, compressed.original_height],
        size: [compressed.width, compressed.height],
        quality: compressed.quality,
        attempts: compressed.attempts,
        within_budget: compressed.within_budget,
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} -> {}\n  {}x{} -> {}x{}  {} -> {}  quality {:.1} after {} attempt(s){}",
            summary.input,
            summary.output,
            summary.original_size[0],
            summary.original_size[1],
            summary.size[0],
            summary.size[1],
            format_bytes(summary.original_bytes),
            format_bytes(summary.compressed_bytes),
            summary.quality,
            summary.attempts,
            if summary.within_budget { "" } else { "  (over budget)" },
        );
    }

    Ok(compressed)
}
