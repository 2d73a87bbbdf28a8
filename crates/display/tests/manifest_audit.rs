//! Manifest audit tests.
// Audit test file: expect/unwrap/indexing are intentional test mechanisms.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]
//! The driver links into an ESP32 image with no allocator by default. These
//! tests read the manifests and fail when a dependency would drag in `std`
//! or a heap outside the opt-in `jpeg` feature.
//!
//! Run with: cargo test -p display --test manifest_audit

const DISPLAY_TOML: &str = include_str!("../Cargo.toml");
const PLATFORM_TOML: &str = include_str!("../../platform/Cargo.toml");
const WORKSPACE_TOML: &str = include_str!("../../../Cargo.toml");

/// Lines of the `[section]` table, up to the next table header.
fn table<'a>(manifest: &'a str, section: &str) -> Vec<&'a str> {
    let header = format!("[{section}]");
    manifest
        .lines()
        .skip_while(|l| l.trim() != header)
        .skip(1)
        .take_while(|l| !l.trim_start().starts_with('['))
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

fn dep_names<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .filter_map(|l| l.split(['=', '.']).next())
        .map(str::trim)
        .collect()
}

/// Every non-optional driver dependency is a no_std crate.
#[test]
fn display_required_deps_are_no_std() {
    const NO_STD: &[&str] = &[
        "platform",
        "embedded-hal",
        "embedded-io",
        "embedded-graphics",
        "heapless",
        "thiserror-no-std",
    ];
    let deps = table(DISPLAY_TOML, "dependencies");
    for line in deps.iter().filter(|l| !l.contains("optional = true")) {
        let name = line.split('=').next().unwrap().trim();
        assert!(NO_STD.contains(&name), "required dependency `{name}` is not on the no_std list");
    }
}

/// The allocating JPEG backend only comes in through the `jpeg` feature.
#[test]
fn jpeg_backend_is_opt_in() {
    let deps = table(DISPLAY_TOML, "dependencies");
    for name in ["zune-jpeg", "zune-core"] {
        let line = deps.iter().find(|l| l.starts_with(name)).unwrap();
        assert!(line.contains("optional = true"), "{name} must stay optional");
    }
    let features = table(DISPLAY_TOML, "features");
    assert!(features.iter().any(|l| l.starts_with("default = []")));
    assert!(features.iter().any(|l| l.starts_with("jpeg") && l.contains("dep:zune-jpeg")));

    // zune's default features enable std and threads.
    let ws = table(WORKSPACE_TOML, "workspace.dependencies");
    for name in ["zune-jpeg", "zune-core"] {
        let line = ws.iter().find(|l| l.starts_with(name)).unwrap();
        assert!(line.contains("default-features = false"), "{name} must not enable std");
    }
}

/// The platform crate stays free of drawing and decoding crates.
#[test]
fn platform_has_only_hal_deps() {
    let deps = dep_names(&table(PLATFORM_TOML, "dependencies"));
    for name in &deps {
        assert!(
            ["embedded-hal", "embedded-io", "critical-section", "thiserror-no-std"].contains(name),
            "platform depends on `{name}`"
        );
    }
}

/// Library crates share the workspace lint policy.
#[test]
fn lints_are_inherited() {
    for manifest in [DISPLAY_TOML, PLATFORM_TOML] {
        assert!(table(manifest, "lints").contains(&"workspace = true"));
    }
    let clippy = table(WORKSPACE_TOML, "workspace.lints.clippy");
    for lint in ["unwrap_used", "indexing_slicing", "arithmetic_side_effects"] {
        assert!(
            clippy.iter().any(|l| l.starts_with(lint) && l.contains("\"deny\"")),
            "workspace must deny {lint}"
        );
    }
}
