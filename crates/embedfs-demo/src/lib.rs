//! Demo of a directory embedded at build time.
//!
//! `build.rs` turns `assets/` into the [`ASSETS`] static; this crate only
//! reads from it.

use std::io::{self, Read};

include!(concat!(env!("OUT_DIR"), "/assets.rs"));

/// Reads a whole embedded asset.
///
/// # Errors
///
/// Returns `NotFound` if `path` is not embedded.
pub fn read_asset(path: &str) -> io::Result<Vec<u8>> {
    let mut file = ASSETS.open(path)?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    file.close()?;
    Ok(contents)
}
