//! Profile metadata domain — the off-chain metadata document and the update
//! operation.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::Uri;

/// Schema version of the metadata standard this document follows.
pub const METADATA_VERSION: &str = "1.0.0";

/// A profile metadata document.
///
/// The SDK does not upload this anywhere — callers serialize it, pin it to
/// content-addressed storage, and pass the resulting URI to
/// [`client::Metadata::set`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetadata {
    pub version: String,
    /// Unique per document so re-uploads of identical content still get a
    /// fresh content address.
    pub metadata_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub cover_picture: Option<Uri>,
    #[serde(default)]
    pub attributes: Vec<MetadataAttribute>,
    #[serde(default)]
    pub app_id: Option<String>,
}

impl ProfileMetadata {
    pub fn new() -> Self {
        Self {
            version: METADATA_VERSION.to_string(),
            metadata_id: Uuid::new_v4().to_string(),
            name: None,
            bio: None,
            cover_picture: None,
            attributes: Vec::new(),
            app_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn cover_picture(mut self, uri: Uri) -> Self {
        self.cover_picture = Some(uri);
        self
    }

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(MetadataAttribute {
            display_type: None,
            trait_type: None,
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

impl Default for ProfileMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// A free-form key/value attribute on a metadata document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_type: Option<String>,
    pub key: String,
    pub value: String,
}
