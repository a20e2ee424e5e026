use std::env;

// (target_arch, target_feature) pairs on which `ctpop` lowers to a single
// instruction. An empty feature means the base ISA already has it.
#[rustfmt::skip]
static NATIVE: &[(&str, &str)] = &[
    ("x86",     "popcnt"),
    ("x86_64",  "popcnt"),
    ("aarch64", "neon"),
    ("riscv32", "zbb"),
    ("riscv64", "zbb"),
    ("wasm32",  ""),
    ("wasm64",  ""),
];

fn has_instruction(arch: &str, features: &str) -> bool {
    NATIVE.iter().any(|&(a, f)| {
        a == arch && (f.is_empty() || features.split(',').any(|enabled| enabled == f))
    })
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(popcount_native)");

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

    if !has_instruction(&arch, &features) {
        return;
    }
    if env::var_os("CARGO_FEATURE_PORTABLE").is_some() {
        println!(
            "cargo:warning=`portable` is enabled, ignoring the popcount instruction of {}",
            arch
        );
        return;
    }
    println!("cargo:rustc-cfg=popcount_native");
}
