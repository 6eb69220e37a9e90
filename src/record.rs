//! The identity record: the flat, fixed-key result of one generation request.
//!
//! The record is produced wholesale by the adapter and replaced wholesale by
//! the view; nothing patches it field by field. Fields are free-form display
//! strings and are not validated beyond presence — the model is an untrusted
//! data source, so only the *shape* is checked against the expected key set.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{IdentityError, Result};

/// Every wire key the generation prompt requests, in display order.
pub const EXPECTED_KEYS: [&str; 25] = [
    "name",
    "address",
    "phone",
    "email",
    "birthday",
    "age",
    "ssn",
    "mothersMaidenName",
    "geoCoordinates",
    "zodiac",
    "username",
    "password",
    "website",
    "creditCard",
    "creditCardExpires",
    "creditCardCvc",
    "company",
    "occupation",
    "height",
    "weight",
    "bloodType",
    "favoriteColor",
    "vehicle",
    "trackingNumber",
    "guid",
];

/// A labeled group of record fields, matching one card in the UI layout.
#[derive(Debug, Clone, Copy)]
pub struct FieldSection {
    pub title: &'static str,
    pub keys: &'static [&'static str],
}

/// The five display sections. Together they partition [`EXPECTED_KEYS`].
pub const SECTIONS: [FieldSection; 5] = [
    FieldSection {
        title: "Basic Information",
        keys: &["name", "age", "address", "phone", "email"],
    },
    FieldSection {
        title: "Personal Details",
        keys: &["birthday", "zodiac", "ssn", "mothersMaidenName", "geoCoordinates"],
    },
    FieldSection {
        title: "Online Identity",
        keys: &["username", "password", "website"],
    },
    FieldSection {
        title: "Financial & Employment",
        keys: &["creditCard", "creditCardExpires", "creditCardCvc", "company", "occupation"],
    },
    FieldSection {
        title: "Physical Characteristics & Other",
        keys: &[
            "height",
            "weight",
            "bloodType",
            "favoriteColor",
            "vehicle",
            "trackingNumber",
            "guid",
        ],
    },
];

/// One fabricated identity.
///
/// Missing keys deserialize to `None` and are shown as blank rather than
/// synthesized; unknown extra keys in the reply are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentityRecord {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub birthday: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub age: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub ssn: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub mothers_maiden_name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub geo_coordinates: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub zodiac: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub username: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub password: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub credit_card: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub credit_card_expires: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub credit_card_cvc: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub occupation: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub height: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub weight: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub blood_type: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub favorite_color: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub vehicle: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub tracking_number: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub guid: Option<String>,
}

impl IdentityRecord {
    /// Build a record from parsed JSON, rejecting values whose shape is
    /// unusable: anything that is not an object, or an object carrying none
    /// of the expected keys.
    pub fn from_value(value: Value) -> Result<Self> {
        let present = value
            .as_object()
            .map(|map| {
                EXPECTED_KEYS
                    .iter()
                    .filter(|key| map.contains_key(**key))
                    .count()
            })
            .unwrap_or(0);

        if present == 0 {
            return Err(IdentityError::UnusableRecord);
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Look a field up by its wire key.
    pub fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "name" => &self.name,
            "address" => &self.address,
            "phone" => &self.phone,
            "email" => &self.email,
            "birthday" => &self.birthday,
            "age" => &self.age,
            "ssn" => &self.ssn,
            "mothersMaidenName" => &self.mothers_maiden_name,
            "geoCoordinates" => &self.geo_coordinates,
            "zodiac" => &self.zodiac,
            "username" => &self.username,
            "password" => &self.password,
            "website" => &self.website,
            "creditCard" => &self.credit_card,
            "creditCardExpires" => &self.credit_card_expires,
            "creditCardCvc" => &self.credit_card_cvc,
            "company" => &self.company,
            "occupation" => &self.occupation,
            "height" => &self.height,
            "weight" => &self.weight,
            "bloodType" => &self.blood_type,
            "favoriteColor" => &self.favorite_color,
            "vehicle" => &self.vehicle,
            "trackingNumber" => &self.tracking_number,
            "guid" => &self.guid,
            _ => &None,
        };
        value.as_deref()
    }

    /// All fields in display order, blanks included.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        EXPECTED_KEYS.iter().map(|key| (*key, self.field(key)))
    }

    /// Expected keys the model left out.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        EXPECTED_KEYS
            .iter()
            .copied()
            .filter(|key| self.field(key).is_none())
            .collect()
    }
}

/// Tolerant field deserialization.
///
/// Models occasionally emit bare numerics for fields like age or the card
/// CVC; those are display strings here, so scalars are stringified instead
/// of failing the whole record.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            Some(other) => Some(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn full_record_json() -> Value {
        let mut map = serde_json::Map::new();
        for key in EXPECTED_KEYS {
            map.insert(key.to_string(), Value::String(format!("value of {key}")));
        }
        Value::Object(map)
    }

    #[test]
    fn full_record_has_no_missing_keys() {
        let record = IdentityRecord::from_value(full_record_json()).unwrap();
        assert!(record.missing_keys().is_empty());
        assert_eq!(record.field("name"), Some("value of name"));
        assert_eq!(record.field("guid"), Some("value of guid"));
    }

    #[test]
    fn partial_record_reports_blanks_without_failing() {
        let record = IdentityRecord::from_value(json!({
            "name": "Jane A. Doe",
            "age": 34,
        }))
        .unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane A. Doe"));
        assert_eq!(record.age.as_deref(), Some("34"));
        assert_eq!(record.missing_keys().len(), 23);
        assert_eq!(record.field("email"), None);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let record = IdentityRecord::from_value(json!({
            "name": "Jane A. Doe",
            "note": "I made this up",
        }))
        .unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane A. Doe"));
    }

    #[test]
    fn key_free_objects_and_non_objects_are_unusable() {
        assert!(matches!(
            IdentityRecord::from_value(json!({"note": "nothing useful"})),
            Err(IdentityError::UnusableRecord)
        ));
        assert!(matches!(
            IdentityRecord::from_value(json!(["name"])),
            Err(IdentityError::UnusableRecord)
        ));
    }

    #[test]
    fn sections_partition_the_expected_keys() {
        let mut seen = Vec::new();
        for section in SECTIONS {
            seen.extend_from_slice(section.keys);
        }
        assert_eq!(seen.len(), EXPECTED_KEYS.len());
        for key in EXPECTED_KEYS {
            assert_eq!(seen.iter().filter(|k| **k == key).count(), 1, "{key}");
        }
    }

    #[test]
    fn record_serializes_with_wire_keys() {
        let record = IdentityRecord {
            mothers_maiden_name: Some("Smith".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["mothersMaidenName"], "Smith");
        assert!(json["creditCardCvc"].is_null());
    }
}
