//! Host platform and architecture names
//!
//! Release assets rarely use Rust's target names (`macos`, `x86_64`,
//! `aarch64`). The host is therefore described with the vocabulary most
//! release pipelines publish under: `linux`, `darwin`, `win`, `x64`,
//! `arm64`, `ia32` and so on.

use std::env::consts;

/// Platform name of the running host.
pub fn host_platform() -> &'static str {
    platform_name(consts::OS)
}

/// Architecture name of the running host.
pub fn host_arch() -> &'static str {
    arch_name(consts::ARCH)
}

/// Map a `std::env::consts::OS` value to its release-asset spelling.
pub fn platform_name(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        // Matches "windows", "win64" and "win32" alike
        "windows" => "win",
        other => other,
    }
}

/// Map a `std::env::consts::ARCH` value to its release-asset spelling.
pub fn arch_name(arch: &str) -> &str {
    match arch {
        "x86_64" => "x64",
        "x86" => "ia32",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        "powerpc" => "ppc",
        other => other,
    }
}
