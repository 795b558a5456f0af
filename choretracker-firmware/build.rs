//! Build script for choretracker-firmware
//!
//! Puts memory.x on the linker search path.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x"))
        .expect("failed to copy memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
