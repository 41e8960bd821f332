//! Browser `File` glue: metadata, byte reads, previews and compression.

use bz_core::compression::{CompressedImage, CompressionOptions, compress_image, to_data_url};
use bz_core::validation::FileMeta;
use js_sys::Uint8Array;
use send_wrapper::SendWrapper;
use wasm_bindgen_futures::JsFuture;

/// A file chosen in the upload widget. The DOM handle is not `Send`, so it
/// is wrapped to travel through signals and callbacks on the UI thread.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub meta: FileMeta,
    handle: SendWrapper<web_sys::File>,
}

impl PickedFile {
    pub fn new(file: web_sys::File) -> Self {
        Self {
            meta: file_meta(&file),
            handle: SendWrapper::new(file),
        }
    }

    pub fn handle(&self) -> &web_sys::File {
        &self.handle
    }
}

pub fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta::new(file.name(), file.type_(), file.size() as u64)
}

pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// `data:` URL of the untouched file, shown while the user decides.
pub async fn read_preview(file: &web_sys::File) -> Result<String, String> {
    let bytes = read_file_bytes(file).await?;
    Ok(to_data_url(&file.type_(), &bytes))
}

/// Read `file` and run it through [`compress_image`]. Errors are flattened
/// to the message shown in the UI.
pub async fn compress_file(
    file: &web_sys::File,
    opts: &CompressionOptions,
) -> Result<CompressedImage, String> {
    let bytes = read_file_bytes(file).await?;
    compress_image(&bytes, &file.type_(), opts).map_err(|e| e.to_string())
}
