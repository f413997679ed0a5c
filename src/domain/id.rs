//! Restaurant identifier with the NewType pattern
//!
//! The store assigns identifiers, so there is no constructor that invents one.
//! The wrapper implements Display, serde and the SQLx traits so it can travel
//! from the URL path down to a bound query parameter unchanged.

use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Decode, Encode, Sqlite, Type};
use std::fmt;
use utoipa::ToSchema;

/// Store-assigned identifier of a restaurant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RestaurantId(i32);

impl RestaurantId {
    /// Wrap a raw integer identifier
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the inner integer value
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RestaurantId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<RestaurantId> for i32 {
    fn from(id: RestaurantId) -> Self {
        id.0
    }
}

// SQLx trait implementations for database compatibility
impl Type<Sqlite> for RestaurantId {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <i32 as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <i32 as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for RestaurantId {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, BoxDynError> {
        <i32 as Encode<'q, Sqlite>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> Decode<'r, Sqlite> for RestaurantId {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <i32 as Decode<'r, Sqlite>>::decode(value)?;
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_id_display() {
        assert_eq!(RestaurantId::new(7).to_string(), "7");
    }

    #[test]
    fn restaurant_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&RestaurantId::new(12)).unwrap();
        assert_eq!(json, "12");

        let id: RestaurantId = serde_json::from_str("12").unwrap();
        assert_eq!(id, RestaurantId::from(12));
    }
}
