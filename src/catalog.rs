//! Catalog of macOS security-update components
//!
//! The catalog is fixed, ordered configuration data for one OS release
//! family: each component names the plist that carries its version and the
//! key to read from it. Nothing here performs I/O.

use crate::domain::UpdateItem;
use std::fmt;

/// The security-update components examined by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityComponent {
    /// XProtect malware signature bundle
    XProtect,
    /// Gatekeeper opaque whitelist
    Gatekeeper,
    /// System Integrity Protection compatibility bundle
    Sip,
    /// Malware Removal Tool
    Mrt,
    /// Intelligent Suggestions assets
    CoreSuggestions,
    /// Incompatible kernel extension exclude list
    IncompatibleKernelExt,
    /// Simplified Chinese input method word list
    ChineseWordList,
    /// Core LSKD kext driver list
    CoreLskd,
}

impl SecurityComponent {
    /// Returns the display name for this component
    pub fn display_name(&self) -> &'static str {
        match self {
            SecurityComponent::XProtect => "XProtect",
            SecurityComponent::Gatekeeper => "Gatekeeper",
            SecurityComponent::Sip => "SIP",
            SecurityComponent::Mrt => "MRT",
            SecurityComponent::CoreSuggestions => "Core Suggestions",
            SecurityComponent::IncompatibleKernelExt => "Incompatible Kernel Ext.",
            SecurityComponent::ChineseWordList => "Chinese Word List",
            SecurityComponent::CoreLskd => "Core LSKD (dkrl)",
        }
    }

    /// Returns the absolute path of the version-bearing metadata file
    pub fn metadata_path(&self) -> &'static str {
        match self {
            SecurityComponent::XProtect => {
                "/System/Library/CoreServices/XProtect.bundle/Contents/Resources/XProtect.meta.plist"
            }
            SecurityComponent::Gatekeeper => {
                "/private/var/db/gkopaque.bundle/Contents/version.plist"
            }
            SecurityComponent::Sip => {
                "/System/Library/Sandbox/Compatibility.bundle/Contents/version.plist"
            }
            SecurityComponent::Mrt => {
                "/System/Library/CoreServices/MRT.app/Contents/version.plist"
            }
            SecurityComponent::CoreSuggestions => {
                "/System/Library/Intelligent Suggestions/Assets.suggestionsassets/Contents/version.plist"
            }
            SecurityComponent::IncompatibleKernelExt => {
                "/System/Library/Extensions/AppleKextExcludeList.kext/Contents/version.plist"
            }
            SecurityComponent::ChineseWordList => {
                "/usr/share/mecabra/updates/com.apple.inputmethod.SCIM.bundle/Contents/version.plist"
            }
            SecurityComponent::CoreLskd => "/usr/share/kdrl.bundle/info.plist",
        }
    }

    /// Returns the key whose value holds this component's version string
    pub fn version_key(&self) -> &'static str {
        match self {
            SecurityComponent::XProtect => "Version",
            SecurityComponent::Gatekeeper
            | SecurityComponent::Sip
            | SecurityComponent::Mrt
            | SecurityComponent::CoreSuggestions
            | SecurityComponent::IncompatibleKernelExt => "CFBundleShortVersionString",
            SecurityComponent::ChineseWordList => "SUVersionString",
            SecurityComponent::CoreLskd => "CFBundleVersion",
        }
    }

    /// Returns all components in report order
    pub fn all() -> &'static [SecurityComponent] {
        &[
            SecurityComponent::XProtect,
            SecurityComponent::Gatekeeper,
            SecurityComponent::Sip,
            SecurityComponent::Mrt,
            SecurityComponent::CoreSuggestions,
            SecurityComponent::IncompatibleKernelExt,
            SecurityComponent::ChineseWordList,
            SecurityComponent::CoreLskd,
        ]
    }
}

impl fmt::Display for SecurityComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Returns the ordered catalog of update items to inspect
pub fn items() -> Vec<UpdateItem> {
    SecurityComponent::all()
        .iter()
        .map(|component| {
            UpdateItem::new(
                component.display_name(),
                component.metadata_path(),
                component.version_key(),
            )
        })
        .collect()
}
