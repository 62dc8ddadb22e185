use crate::types::Distro;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CUSTOMIZED_WINDOWS_OS_IMAGE: &str = "CustomizedWindowsOSImage";
pub const CUSTOMIZED_IMAGE: &str = "CustomizedImage";
pub const CUSTOMIZED_IMAGE_KATA: &str = "CustomizedImageKata";

/// OS family a catalog-resolved distro belongs to. Each family has its own
/// sub-catalog in a SIG environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFamily {
    Ubuntu,
    Mariner,
    AzureLinux,
    Windows,
    UbuntuEdgeZone,
}

impl OsFamily {
    /// Scan order used when resolving a distro against a SIG environment.
    /// The first family holding the distro wins.
    pub const PRECEDENCE: [OsFamily; 5] = [
        OsFamily::Ubuntu,
        OsFamily::Mariner,
        OsFamily::AzureLinux,
        OsFamily::Windows,
        OsFamily::UbuntuEdgeZone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OsFamily::Ubuntu => "ubuntu",
            OsFamily::Mariner => "mariner",
            OsFamily::AzureLinux => "azure_linux",
            OsFamily::Windows => "windows",
            OsFamily::UbuntuEdgeZone => "ubuntu_edge_zone",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer-supplied image classes. These never go through catalog resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomizedKind {
    Windows,
    Generic,
    ConfidentialComputing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistroKind {
    Customized(CustomizedKind),
    Catalog(OsFamily),
}

impl Distro {
    /// Classify the distro by its well-known name or naming convention.
    pub fn kind(&self) -> DistroKind {
        match self.as_str() {
            CUSTOMIZED_WINDOWS_OS_IMAGE => DistroKind::Customized(CustomizedKind::Windows),
            CUSTOMIZED_IMAGE => DistroKind::Customized(CustomizedKind::Generic),
            CUSTOMIZED_IMAGE_KATA => DistroKind::Customized(CustomizedKind::ConfidentialComputing),
            name if name.starts_with("aks-windows-") => DistroKind::Catalog(OsFamily::Windows),
            name if name.starts_with("aks-cblmariner-") => DistroKind::Catalog(OsFamily::Mariner),
            name if name.starts_with("aks-azurelinux-") => {
                DistroKind::Catalog(OsFamily::AzureLinux)
            }
            name if name.contains("edgezone") => DistroKind::Catalog(OsFamily::UbuntuEdgeZone),
            _ => DistroKind::Catalog(OsFamily::Ubuntu),
        }
    }

    pub fn is_customized(&self) -> bool {
        self.family().is_none()
    }

    pub fn is_windows(&self) -> bool {
        matches!(
            self.kind(),
            DistroKind::Catalog(OsFamily::Windows) | DistroKind::Customized(CustomizedKind::Windows)
        )
    }

    /// Home family of a catalog-resolved distro; `None` for customized images.
    pub fn family(&self) -> Option<OsFamily> {
        match self.kind() {
            DistroKind::Catalog(family) => Some(family),
            DistroKind::Customized(_) => None,
        }
    }
}
