//! Catalog data compiled into the crate, used when no catalog files are
//! configured.

use crate::legacy::LegacyCatalog;
use crate::sig::SigTemplates;
use crate::CatalogError;

pub const BUILTIN_LEGACY_CATALOG: &str = r#"
[AzurePublicCloud."aks-ubuntu-containerd-18.04"]
image_offer = "UbuntuServer"
image_sku = "18.04-LTS"
image_publisher = "Canonical"
image_version = "latest"

[AzurePublicCloud."aks-ubuntu-containerd-22.04-gen2"]
image_offer = "0001-com-ubuntu-server-jammy"
image_sku = "22_04-lts-gen2"
image_publisher = "Canonical"
image_version = "latest"

[AzurePublicCloud."aks-windows-2022-containerd"]
image_offer = "WindowsServer"
image_sku = "2022-datacenter-core-smalldisk"
image_publisher = "MicrosoftWindowsServer"
image_version = "latest"

[AzureChinaCloud."aks-ubuntu-containerd-18.04"]
image_offer = "UbuntuServer"
image_sku = "18.04-LTS"
image_publisher = "Canonical"
image_version = "latest"

[AzureUSGovernmentCloud."aks-ubuntu-containerd-18.04"]
image_offer = "UbuntuServer"
image_sku = "18.04-LTS"
image_publisher = "Canonical"
image_version = "latest"
"#;

pub const BUILTIN_SIG_TEMPLATES: &str = r#"
cloud_name = "AzurePublicCloud"

[[ubuntu]]
distro = "aks-ubuntu-containerd-18.04"
gallery = "AKSUbuntu"
definition = "1804containerd"
version = "2022.10.13"

[[ubuntu]]
distro = "aks-ubuntu-containerd-22.04-gen2"
gallery = "AKSUbuntu"
definition = "2204gen2containerd"
version = "202410.09.0"

[[ubuntu]]
distro = "aks-ubuntu-containerd-24.04-gen2"
gallery = "AKSUbuntu"
definition = "2404gen2containerd"
version = "202410.09.0"

[[mariner]]
distro = "aks-cblmariner-v2-gen2"
gallery = "AKSCBLMariner"
definition = "V2gen2"
version = "202410.09.0"

[[mariner]]
distro = "aks-cblmariner-v2-gen2-tl"
gallery = "AKSCBLMariner"
definition = "V2gen2TL"
version = "202410.09.0"

[[azure_linux]]
distro = "aks-azurelinux-v2-gen2"
gallery = "AKSAzureLinux"
definition = "V2gen2"
version = "202410.09.0"

[[azure_linux]]
distro = "aks-azurelinux-v3-gen2"
gallery = "AKSAzureLinux"
definition = "V3gen2"
version = "202410.09.0"

[[windows]]
distro = "aks-windows-2019-containerd"
gallery = "AKSWindows"
definition = "windows-2019-containerd"
version = "17763.6414.241010"

[[windows]]
distro = "aks-windows-2022-containerd"
gallery = "AKSWindows"
definition = "windows-2022-containerd"
version = "20348.2762.241009"

[[ubuntu_edge_zone]]
distro = "aks-ubuntu-containerd-22.04-gen2-edgezone"
gallery = "AKSUbuntuEdgeZone"
definition = "2204gen2containerd"
version = "202410.09.0"
regions = ["eastus2euap", "westus", "southcentralus"]
"#;

pub fn builtin_legacy_catalog() -> Result<LegacyCatalog, CatalogError> {
    LegacyCatalog::from_toml_str(BUILTIN_LEGACY_CATALOG)
}

pub fn builtin_sig_templates() -> Result<SigTemplates, CatalogError> {
    SigTemplates::from_toml_str(BUILTIN_SIG_TEMPLATES)
}
