//! Download target table and link generation.
//!
//! Every Cursor build is published at a fixed set of six
//! platform/architecture endpoints under a common base URL. The constant
//! table below is the single source of truth for that layout; renderers
//! iterate it in order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base URL every download link starts with.
pub const BASE_URL: &str = "https://downloader.cursor.sh/builds";

/// Target operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    /// Lowercase name, as used in index keys and table cells.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target CPU/package variant within a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Arm64,
    Universal,
}

impl Arch {
    /// Lowercase name, as used in index keys and table cells.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
            Arch::Universal => "universal",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One published (platform, architecture) endpoint and its URL path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadTarget {
    pub platform: Platform,
    pub arch: Arch,
    /// Path appended after the build ID, leading slash included.
    pub suffix: &'static str,
}

impl DownloadTarget {
    /// Build the full download URL for the given build ID.
    ///
    /// Pure substitution: the build ID is interpolated verbatim, even when
    /// the result would not be a well-formed URL.
    pub fn url(&self, build_id: &str) -> String {
        format!("{BASE_URL}/{build_id}{}", self.suffix)
    }
}

/// The six published endpoints, in presentation order.
pub const DOWNLOAD_TARGETS: [DownloadTarget; 6] = [
    DownloadTarget {
        platform: Platform::Windows,
        arch: Arch::X64,
        suffix: "/windows/nsis/x64",
    },
    DownloadTarget {
        platform: Platform::Windows,
        arch: Arch::Arm64,
        suffix: "/windows/nsis/arm64",
    },
    DownloadTarget {
        platform: Platform::Mac,
        arch: Arch::Universal,
        suffix: "/mac/installer/universal",
    },
    DownloadTarget {
        platform: Platform::Mac,
        arch: Arch::Arm64,
        suffix: "/mac/installer/arm64",
    },
    DownloadTarget {
        platform: Platform::Mac,
        arch: Arch::X64,
        suffix: "/mac/installer/x64",
    },
    DownloadTarget {
        platform: Platform::Linux,
        arch: Arch::X64,
        suffix: "/linux/appImage/x64",
    },
];

/// Download links for the Windows endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowsLinks {
    pub x64: String,
    pub arm64: String,
}

/// Download links for the macOS endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacLinks {
    pub universal: String,
    pub arm64: String,
    pub x64: String,
}

/// Download links for the Linux endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxLinks {
    pub x64: String,
}

/// The full platform -> architecture -> URL mapping derived from one build ID.
///
/// The shape is fixed: exactly the six endpoints of [`DOWNLOAD_TARGETS`],
/// identical for every build. Field order mirrors the table, so serializing
/// a `LinkSet` reproduces the published index nesting as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    pub windows: WindowsLinks,
    pub mac: MacLinks,
    pub linux: LinuxLinks,
}

impl LinkSet {
    /// Derive the full link set for a build ID.
    pub fn for_build(build_id: &str) -> Self {
        Self {
            windows: WindowsLinks {
                x64: target(Platform::Windows, Arch::X64).url(build_id),
                arm64: target(Platform::Windows, Arch::Arm64).url(build_id),
            },
            mac: MacLinks {
                universal: target(Platform::Mac, Arch::Universal).url(build_id),
                arm64: target(Platform::Mac, Arch::Arm64).url(build_id),
                x64: target(Platform::Mac, Arch::X64).url(build_id),
            },
            linux: LinuxLinks {
                x64: target(Platform::Linux, Arch::X64).url(build_id),
            },
        }
    }

    /// All six links paired with their targets, in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static DownloadTarget, &str)> + '_ {
        DOWNLOAD_TARGETS.iter().map(move |t| {
            let url = match (t.platform, t.arch) {
                (Platform::Windows, Arch::X64) => self.windows.x64.as_str(),
                (Platform::Windows, Arch::Arm64) => self.windows.arm64.as_str(),
                (Platform::Mac, Arch::Universal) => self.mac.universal.as_str(),
                (Platform::Mac, Arch::Arm64) => self.mac.arm64.as_str(),
                (Platform::Mac, Arch::X64) => self.mac.x64.as_str(),
                (Platform::Linux, Arch::X64) => self.linux.x64.as_str(),
                _ => unreachable!("table holds only the six published pairs"),
            };
            (t, url)
        })
    }

    /// Look up a single link; `None` for pairs that are not published.
    pub fn url_for(&self, platform: Platform, arch: Arch) -> Option<&str> {
        self.entries()
            .find(|(t, _)| t.platform == platform && t.arch == arch)
            .map(|(_, url)| url)
    }
}

fn target(platform: Platform, arch: Arch) -> &'static DownloadTarget {
    DOWNLOAD_TARGETS
        .iter()
        .find(|t| t.platform == platform && t.arch == arch)
        .expect("pair present in the published table")
}
