use crate::idtypes::{AuthorId, Id};

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// A share in LinkedIn's UGC post format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UgcPost {
    /// URN of the member or organization posting the share.
    pub author: String,
    pub lifecycle_state: LifecycleState,
    pub specific_content: SpecificContent,
    pub visibility: Visibility,
}

impl UgcPost {
    /// A plain text share with the settings the endpoint accepts on
    /// creation: published, no media, visible to everyone.
    #[must_use]
    pub fn text(author: &AuthorId, text: impl Into<String>) -> Self {
        Self {
            author: author.urn(),
            lifecycle_state: LifecycleState::Published,
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary { text: text.into() },
                    share_media_category: ShareMediaCategory::None,
                    media: None,
                },
            },
            visibility: Visibility {
                code: MemberNetworkVisibility::Public,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent {
    pub share_commentary: ShareCommentary,
    pub share_media_category: ShareMediaCategory,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub media: Option<Vec<ShareMedia>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCommentary {
    pub text: String,
}

/// A media attachment of a share.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareMedia {
    /// The processing status, `READY` for externally hosted content.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<ShareCommentary>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub original_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<ShareCommentary>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    /// The only state the endpoint accepts during creation.
    #[default]
    Published,
    Draft,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareMediaCategory {
    #[default]
    None,
    Article,
    Image,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub code: MemberNetworkVisibility,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberNetworkVisibility {
    #[default]
    Public,
    Connections,
}
