//! Generation request parameters: gender, name set, and country.
//!
//! Name sets and countries are closed sets rather than loose strings so an
//! out-of-set label is rejected before it ever reaches a prompt. The wire
//! representation of each member is its UI label (e.g. `"Chechen (Latin)"`,
//! `"England/Wales"`), which keeps request bodies and picker lists aligned.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdentityError;

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in the order the pickers list them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The display label, also used as the wire string.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = IdentityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.label() == s)
                    .ok_or_else(|| IdentityError::UnknownLabel {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                label.parse().map_err(de::Error::custom)
            }
        }
    };
}

closed_set! {
    /// Three-way gender choice; `Random` leaves the pick to the model.
    Gender, "gender", default = Random {
        Male => "male",
        Female => "female",
        Random => "random",
    }
}

closed_set! {
    /// The cultural or fictional naming convention used to bias generated
    /// names.
    NameSet, "name set", default = American {
        American => "American",
        Arabic => "Arabic",
        Australian => "Australian",
        Brazil => "Brazil",
        ChechenLatin => "Chechen (Latin)",
        Chinese => "Chinese",
        ChineseTraditional => "Chinese (Traditional)",
        Croatian => "Croatian",
        Czech => "Czech",
        Danish => "Danish",
        Dutch => "Dutch",
        EnglandWales => "England/Wales",
        Eritrean => "Eritrean",
        Finnish => "Finnish",
        French => "French",
        German => "German",
        Greenland => "Greenland",
        Hispanic => "Hispanic",
        Hobbit => "Hobbit",
        Hungarian => "Hungarian",
        Icelandic => "Icelandic",
        Igbo => "Igbo",
        Italian => "Italian",
        Japanese => "Japanese",
        JapaneseAnglicized => "Japanese (Anglicized)",
        Klingon => "Klingon",
        Ninja => "Ninja",
        Norwegian => "Norwegian",
        Persian => "Persian",
        Polish => "Polish",
        Russian => "Russian",
        RussianCyrillic => "Russian (Cyrillic)",
        Scottish => "Scottish",
        Slovenian => "Slovenian",
        Swedish => "Swedish",
        Thai => "Thai",
        Vietnamese => "Vietnamese",
    }
}

closed_set! {
    /// Country the identity should be anchored to (address, phone format,
    /// coordinates).
    Country, "country", default = UnitedStates {
        Australia => "Australia",
        Austria => "Austria",
        Belgium => "Belgium",
        Brazil => "Brazil",
        Canada => "Canada",
        CyprusAnglicized => "Cyprus (Anglicized)",
        CyprusGreek => "Cyprus (Greek)",
        CzechRepublic => "Czech Republic",
        Denmark => "Denmark",
        Estonia => "Estonia",
        Finland => "Finland",
        France => "France",
        Germany => "Germany",
        Greenland => "Greenland",
        Hungary => "Hungary",
        Iceland => "Iceland",
        Italy => "Italy",
        Netherlands => "Netherlands",
        NewZealand => "New Zealand",
        Norway => "Norway",
        Poland => "Poland",
        Portugal => "Portugal",
        Slovenia => "Slovenia",
        SouthAfrica => "South Africa",
        Spain => "Spain",
        Sweden => "Sweden",
        Switzerland => "Switzerland",
        Tunisia => "Tunisia",
        UnitedKingdom => "United Kingdom",
        UnitedStates => "United States",
        Uruguay => "Uruguay",
    }
}

/// The full input surface of one generation request.
///
/// `Default` matches the neutral preset the UI starts from: a random gender,
/// American names, United States.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    pub gender: Gender,
    pub name_set: NameSet,
    pub country: Country,
}
