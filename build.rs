//! Stamps the binaries with the commit they were built from.
//!
//! Release builds outside a checkout can pin the value with `THEMEFLIP_COMMIT`.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=THEMEFLIP_COMMIT");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let commit = std::env::var("THEMEFLIP_COMMIT")
        .ok()
        .or_else(head_commit)
        .unwrap_or_else(|| String::from("unknown"));
    println!("cargo:rustc-env=THEMEFLIP_COMMIT={commit}");
}

fn head_commit() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let commit = String::from_utf8(out.stdout).ok()?.trim().to_owned();
    if commit.is_empty() {
        None
    } else {
        Some(commit)
    }
}
