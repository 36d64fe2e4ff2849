use std::path::{Path, PathBuf};
use std::{env, fs};

use const_gen::*;
use gib_config::KeyboardTomlConfig;

fn main() {
    // Ensure build.rs is re-run when files change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KEYBOARD_TOML_PATH");

    // Use keyboard.toml next to Cargo.toml unless a path is given
    let toml_path = env::var("KEYBOARD_TOML_PATH").map(PathBuf::from).unwrap_or_else(|_| {
        Path::new(&env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is not set")).join("keyboard.toml")
    });
    println!("cargo:rerun-if-changed={}", toml_path.display());

    let config = match KeyboardTomlConfig::load(&toml_path) {
        Ok(config) => config,
        Err(e) => panic!("❌ Load `keyboard.toml` error: {e}"),
    };

    let constants = get_constants_str(&config);

    // Write to constants.rs file
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is not set");
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, constants).expect("Failed to write constants.rs file");
}

fn get_constants_str(config: &KeyboardTomlConfig) -> String {
    let crate_version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".to_string());
    let version = config.version(&crate_version).to_string();
    let identification = config.identification(&crate_version);

    let constant_strs = vec![
        const_declaration!(pub KEYBOARD_NAME = config.keyboard.name.clone()),
        const_declaration!(pub KEYMAP_NAME = config.keymap.name.clone()),
        const_declaration!(pub FIRMWARE_VERSION = version),
        const_declaration!(pub IDENTIFICATION = identification),
        const_declaration!(pub ROW = config.layout.rows),
        const_declaration!(pub COL = config.layout.cols),
        const_declaration!(pub NUM_LAYER = config.layout.layers),
        const_declaration!(pub RGBLIGHT_SOLID_MODE = config.light.rgb_solid_mode),
    ];

    constant_strs
        .into_iter()
        .map(|s| "#[allow(clippy::redundant_static_lifetimes)]\n".to_owned() + s.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
