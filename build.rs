use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    if let Some(version) = rustc_version() {
        println!("cargo:rustc-env=CLIDEMO_RUSTC_VERSION={version}");
    }
}

/// "rustc 1.85.0 (4d91de4e4 2025-02-17)" -> "1.85.0"
fn rustc_version() -> Option<String> {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .and_then(|s| s.split_whitespace().nth(1).map(str::to_string))
}
