//! Build script embedding `assets/` into the demo.
//!
//! The generated source lands in `OUT_DIR` and is pulled in with `include!`
//! from `src/lib.rs`.

use anyhow::Context;
use embedfs_codegen::{GenerateOptions, generate};
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR is not set")?);
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR is not set")?);
    let assets = manifest_dir.join("assets");

    println!("cargo:rerun-if-changed={}", assets.display());

    let options = GenerateOptions::new("ASSETS", &assets, out_dir.join("assets.rs"));
    let summary = generate(&options)
        .with_context(|| format!("failed to embed {}", assets.display()))?;

    if summary.files == 0 {
        println!("cargo:warning=no files embedded from {}", assets.display());
    }
    Ok(())
}
