use bz_core::compression::estimate_compressed_size;

use super::format_bytes;

pub fn run(bytes: u64) {
    let estimate = estimate_compressed_size(bytes);
    println!(
        "{} -> ~{} after compression",
        format_bytes(bytes),
        format_bytes(estimate)
    );
}
