//! Host architecture and platform detection.
//!
//! Detection happens once at startup; the normalized pair is stored in the
//! [`BuildContext`](crate::core::context::BuildContext) and treated as
//! constant for the rest of the process.

use std::fmt;

/// Upstream godot-cpp repository.
pub const CANONICAL_REPO_URL: &str = "https://github.com/godotengine/godot-cpp.git";

/// Fork carrying loongarch64 support that upstream lacks.
pub const LOONGARCH_REPO_URL: &str = "https://github.com/lsyes/godot-cpp.git";

/// Normalized CPU architecture.
///
/// Unrecognized identifiers pass through unchanged as a best-effort value
/// rather than failing; scons receives whatever the host reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arch {
    X86_64,
    Arm64,
    Loongarch64,
    Other(String),
}

impl Arch {
    /// Normalize a raw machine identifier.
    pub fn detect(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "x86_64" | "amd64" => Arch::X86_64,
            "aarch64" | "arm64" => Arch::Arm64,
            "loongarch64" => Arch::Loongarch64,
            other => Arch::Other(other.to_string()),
        }
    }

    /// Detect the host architecture.
    pub fn host() -> Self {
        Self::detect(std::env::consts::ARCH)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::Arm64 => "arm64",
            Arch::Loongarch64 => "loongarch64",
            Arch::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Macos,
    Linux,
}

impl Platform {
    /// Normalize a raw OS identifier. Anything unrecognized falls back to
    /// linux, which matches how the scons platform argument is consumed.
    pub fn detect(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "windows" => Platform::Windows,
            "darwin" | "macos" => Platform::Macos,
            _ => Platform::Linux,
        }
    }

    /// Detect the host platform.
    pub fn host() -> Self {
        Self::detect(std::env::consts::OS)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Macos => "macos",
            Platform::Linux => "linux",
        }
    }

    /// Shared-library extension for artifacts on this platform.
    pub fn lib_extension(&self) -> &'static str {
        match self {
            Platform::Windows => "dll",
            Platform::Macos => "dylib",
            Platform::Linux => "so",
        }
    }

    /// C++ compilers to probe, in preference order.
    pub fn compiler_candidates(&self) -> &'static [&'static str] {
        match self {
            Platform::Windows => &["cl", "g++", "gcc"],
            Platform::Linux => &["g++", "gcc", "clang++", "clang"],
            Platform::Macos => &["clang++", "clang", "g++", "gcc"],
        }
    }

    /// Install guidance shown when no compiler answers.
    pub fn compiler_hint(&self) -> &'static str {
        match self {
            Platform::Windows => "install Visual Studio or MinGW",
            Platform::Macos => "install the Xcode Command Line Tools: xcode-select --install",
            Platform::Linux => "install GCC or Clang: sudo apt install g++",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the godot-cpp source repository for an architecture.
///
/// Pure mapping: loongarch64 builds need the fork, everything else uses
/// upstream.
pub fn repository_url(arch: &Arch) -> &'static str {
    match arch {
        Arch::Loongarch64 => LOONGARCH_REPO_URL,
        _ => CANONICAL_REPO_URL,
    }
}
