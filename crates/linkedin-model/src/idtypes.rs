//! LinkedIn identifies its entities with URNs such as `urn:li:person:abc`.
//! This module provides strongly typed ids for the entity types that can
//! author content, with parsing from and formatting to the URN form.

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// LinkedIn ID or URN parsing error
///
/// See also [`Id`](crate::idtypes::Id) for details.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, Error)]
pub enum IdError {
    /// The URN prefix is not `urn:li:`.
    InvalidPrefix,
    /// The URN can't be split into type and id parts (e.g., it has an
    /// invalid separator).
    InvalidFormat,
    /// The URN has an entity type that does not match the expected one
    /// (e.g. a person id is parsed from an organization URN).
    InvalidType,
    /// The id itself is invalid (empty or contains invalid characters).
    InvalidId,
}

/// The entity types an id can refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Type {
    Person,
    Organization,
}

/// The main interface for an ID.
#[enum_dispatch]
pub trait Id {
    /// Returns the inner LinkedIn object ID, which is guaranteed to be
    /// valid for its type.
    fn id(&self) -> &str;

    /// The entity type of the id.
    fn _type(&self) -> Type;

    /// The URN form of the id, e.g. `urn:li:person:abc123`.
    fn urn(&self) -> String {
        format!("urn:li:{}:{}", self._type(), self.id())
    }
}

macro_rules! define_idtypes {
    ($($type:ident => $name:ident),+) => {
        $(
            #[doc = concat!("An id of type [`Type::", stringify!($type), "`].")]
            #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name(String);

            impl $name {
                /// Initialize the id from a raw LinkedIn id.
                pub fn from_id(id: impl Into<String>) -> Result<Self, IdError> {
                    let id = id.into();
                    if id.is_empty()
                        || !id
                            .chars()
                            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
                    {
                        return Err(IdError::InvalidId);
                    }

                    Ok(Self(id))
                }

                /// Initialize the id from its URN form.
                pub fn from_urn(urn: &str) -> Result<Self, IdError> {
                    let rest = urn.strip_prefix("urn:li:").ok_or(IdError::InvalidPrefix)?;
                    let (tp, id) = rest.split_once(':').ok_or(IdError::InvalidFormat)?;
                    if tp != <&'static str>::from(Type::$type) {
                        return Err(IdError::InvalidType);
                    }

                    Self::from_id(id)
                }
            }

            impl Id for $name {
                fn id(&self) -> &str {
                    &self.0
                }

                fn _type(&self) -> Type {
                    Type::$type
                }
            }
        )+
    };
}

define_idtypes!(Person => PersonId, Organization => OrganizationId);

/// Either of the entity types that can author content.
#[enum_dispatch(Id)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AuthorId {
    Person(PersonId),
    Organization(OrganizationId),
}
