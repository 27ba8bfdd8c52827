use serde::{Deserialize, Serialize};

/// The authenticated member's profile, as returned by the `me` endpoint.
///
/// The decoder is lenient: fields LinkedIn does not return are left at
/// their default value, and unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "localizedFirstName", default)]
    pub first_name: String,

    #[serde(rename = "localizedLastName", default)]
    pub last_name: String,
}
