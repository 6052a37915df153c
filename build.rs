//! Build script for joystick-panel.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rustc-check-cfg=cfg(rust_analyzer)");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let target = env::var("TARGET").expect("TARGET is set by cargo");

    // Pick the linker memory map for the board; host builds need none.
    let memory_source = if target.starts_with("thumbv8m") {
        Some("memory-pico2.x")
    } else if target.starts_with("riscv32imac") {
        Some("memory-pico2-riscv.x")
    } else if target.starts_with("thumbv6m") {
        Some("memory-pico1.x")
    } else {
        None
    };

    if let Some(memory_source) = memory_source {
        let memory_x = fs::read_to_string(memory_source)
            .unwrap_or_else(|_| panic!("Failed to read {memory_source}"));
        let dest = out_dir.join("memory.x");
        fs::write(&dest, memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed={memory_source}");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
