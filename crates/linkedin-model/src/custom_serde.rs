//! Custom serialization methods used throughout the crate.

pub mod duration_second {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Deserialize `chrono::Duration` from seconds (represented as i64).
    pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let duration: i64 = Deserialize::deserialize(d)?;
        Ok(Duration::seconds(duration))
    }

    /// Serialize `chrono::Duration` to seconds (represented as i64).
    pub fn serialize<S>(x: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_i64(x.num_seconds())
    }
}

pub mod separated_scopes {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::HashSet;

    /// Deserialize a scope string. LinkedIn responses separate scopes with
    /// commas, the OAuth2 spec with spaces; both are accepted.
    pub fn deserialize<'de, D>(d: D) -> Result<HashSet<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let scopes: String = Deserialize::deserialize(d)?;
        Ok(scopes
            .split(|c: char| c == ' ' || c == ',')
            .filter(|scope| !scope.is_empty())
            .map(ToOwned::to_owned)
            .collect())
    }

    /// Serialize a scope set into a space separated string.
    pub fn serialize<S>(scopes: &HashSet<String>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let scopes = scopes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        s.serialize_str(&scopes)
    }
}
