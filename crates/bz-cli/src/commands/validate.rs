use std::path::Path;

use anyhow::Context;
use bz_core::accept::guess_mime;
use bz_core::validation::{FileMeta, UploadRules};
use tracing::info;

use super::format_bytes;

/// Build the same metadata a browser would hand the upload widget.
pub async fn file_meta(path: &Path) -> anyhow::Result<FileMeta> {
    let meta = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("cannot stat {}", path.display()))?;
    if !meta.is_file() {
        anyhow::bail!("{} is not a file", path.display());
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = guess_mime(&name);
    Ok(FileMeta::new(name, mime, meta.len()))
}

/// Run the `validate` subcommand.
pub async fn run(path: &Path, rules: &UploadRules) -> anyhow::Result<()> {
    let file = file_meta(path).await?;
    info!(file = %file.name, mime = %file.mime, size = file.size, accept = %rules.accept, "validating");

    rules
        .validate(&file)
        .with_context(|| format!("{} rejected", file.name))?;

    let mime = if file.mime.is_empty() { "unknown type" } else { file.mime.as_str() };
    println!("ok: {} ({}, {})", file.name, mime, format_bytes(file.size));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_small_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tiny.png");
        std::fs::write(&path, [0u8; 64]).expect("write");
        run(&path, &UploadRules::default()).await.expect("valid");
    }

    #[tokio::test]
    async fn rejects_wrong_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").expect("write");
        let err = run(&path, &UploadRules::default()).await.expect_err("invalid");
        assert!(format!("{err:#}").contains("Invalid file type"));
    }

    #[tokio::test]
    async fn rejects_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(file_meta(dir.path()).await.is_err());
    }
}
