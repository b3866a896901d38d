//! Variant kinds attached to an asset.
//!
//! Every asset carries a mandatory preview image plus up to two restricted
//! source variants: the editor project file (.plp) and the vector data
//! (.xml). Restricted variants go through the access gate; the image never
//! does.

use serde::{Deserialize, Serialize};

/// One of the three file kinds attached to an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    /// Preview image (PNG). Unrestricted.
    Image,
    /// Editor project file (PLP). Restricted.
    ProjectFile,
    /// Vector data (XML). Restricted.
    VectorData,
}

impl VariantKind {
    /// Whether downloads of this variant pass through the access gate.
    pub fn is_restricted(self) -> bool {
        !matches!(self, VariantKind::Image)
    }

    /// Canonical file extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            VariantKind::Image => "png",
            VariantKind::ProjectFile => "plp",
            VariantKind::VectorData => "xml",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VariantKind::Image => "image",
            VariantKind::ProjectFile => "project_file",
            VariantKind::VectorData => "vector_data",
        }
    }
}

/// Build the filename handed to the client for a download.
///
/// Editing tools open project files by extension, so the served name must
/// keep the variant's canonical extension. Whitespace in the title becomes
/// underscores, matching the historical naming.
pub fn download_filename(title: &str, variant: VariantKind) -> String {
    let base: String = title
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    let base = if base.is_empty() {
        "asset".to_string()
    } else {
        base
    };
    format!("{base}.{}", variant.extension())
}
