//! Build script for segclock-simulator
//!
//! On Windows, links against the SDL2 import library in `vendor/sdl2/` at the
//! workspace root and copies `SDL2.dll` next to the built binary. Other
//! platforms use the system SDL2.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Some(vendor_sdl2) = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .and_then(|dir| dir.parent().map(|root| root.join("vendor").join("sdl2")))
    else {
        println!("cargo:warning=CARGO_MANIFEST_DIR not set, skipping SDL2 setup");
        return;
    };
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!("cargo:warning=SDL2 not found at {}", vendor_sdl2.display());
        println!("cargo:warning=Put SDL2.lib and SDL2.dll in vendor/sdl2/ to build on Windows");
        return;
    }

    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    // OUT_DIR is target/<profile>/build/segclock-simulator-<hash>/out
    if let Some(profile_dir) = env::var_os("OUT_DIR").as_deref().map(Path::new).and_then(find_profile_dir) {
        copy_dll(&vendor_sdl2.join("SDL2.dll"), &profile_dir.join("SDL2.dll"));
    }
}

fn find_profile_dir(out_dir: &Path) -> Option<PathBuf> {
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
        .map(Path::to_path_buf)
}

fn copy_dll(
    src: &Path,
    dst: &Path,
) {
    if !src.exists() || dst.exists() {
        return;
    }
    match fs::copy(src, dst) {
        Ok(_) => println!("cargo:warning=Copied SDL2.dll to {}", dst.display()),
        Err(e) => println!("cargo:warning=Failed to copy SDL2.dll: {e}"),
    }
}
