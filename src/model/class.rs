//! Static class and talent specialization metadata.
//!
//! The table is read once at startup and never mutated. It is handed to whatever needs it
//! (the roster classifier, the export parser, the client's form) as an explicit value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const SPEC_ICON_BASE_URL: &str = "https://render-eu.worldofwarcraft.com/icons/56";

/// Raid role a specialization fills.
///
/// Unknown role strings are kept as [`Role::Other`] so a single bad entry in the table does
/// not prevent the whole table from loading; players on such a spec are skipped when the
/// roster is classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Tank,
    Heal,
    Dps,
    Other(String),
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tank" => Self::Tank,
            "heal" => Self::Heal,
            "dps" => Self::Dps,
            _ => Self::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Tank => "tank".to_string(),
            Role::Heal => "heal".to_string(),
            Role::Dps => "dps".to_string(),
            Role::Other(other) => other,
        }
    }
}

/// Range category of a damage specialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Range {
    Ranged,
    Melee,
    Other(String),
}

impl From<String> for Range {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ranged" => Self::Ranged,
            "melee" => Self::Melee,
            _ => Self::Other(value),
        }
    }
}

impl From<Range> for String {
    fn from(range: Range) -> Self {
        match range {
            Range::Ranged => "ranged".to_string(),
            Range::Melee => "melee".to_string(),
            Range::Other(other) => other,
        }
    }
}

/// A single talent specialization of a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SpecInfo {
    pub name: String,
    pub icon: String,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "tank"))]
    pub role: Role,
    /// Only present for damage specializations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>, example = "melee"))]
    pub range: Option<Range>,
}

impl SpecInfo {
    /// URL of the 56px spec icon
    pub fn icon_url(&self) -> String {
        format!("{}/{}.jpg", SPEC_ICON_BASE_URL, self.icon)
    }
}

/// A playable class; `specs` is indexed by spec id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ClassInfo {
    pub name: String,
    pub colour: String,
    pub specs: Vec<SpecInfo>,
}

/// Class identifier to class metadata, ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct ClassSpecTable(BTreeMap<String, ClassInfo>);

impl ClassSpecTable {
    /// Parses the table from its JSON file contents.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn class(&self, class: &str) -> Option<&ClassInfo> {
        self.0.get(class)
    }

    /// Looks up `class.specs[spec_id]`, `None` if either the class or the index is unknown.
    pub fn spec(&self, class: &str, spec_id: usize) -> Option<&SpecInfo> {
        self.class(class).and_then(|c| c.specs.get(spec_id))
    }

    /// Finds the index of a spec by its display name, ignoring case.
    pub fn find_spec_by_name(&self, class: &str, spec_name: &str) -> Option<usize> {
        self.class(class)?
            .specs
            .iter()
            .position(|spec| spec.name.eq_ignore_ascii_case(spec_name))
    }

    /// Classes in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ClassInfo)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small table with one class per interesting shape: a hybrid with every role, a pure
    /// damage class split by range, and a spec carrying an unrecognised range.
    pub(crate) fn fixture_table() -> ClassSpecTable {
        ClassSpecTable::from_json(
            r##"{
                "warrior": {
                    "name": "Warrior",
                    "colour": "#C79C6E",
                    "specs": [
                        { "name": "Protection", "icon": "ability_warrior_defensivestance", "role": "tank" },
                        { "name": "Arms", "icon": "ability_warrior_savageblow", "role": "dps", "range": "melee" },
                        { "name": "Fury", "icon": "ability_warrior_innerrage", "role": "dps", "range": "melee" }
                    ]
                },
                "shaman": {
                    "name": "Shaman",
                    "colour": "#0070DE",
                    "specs": [
                        { "name": "Restoration", "icon": "spell_nature_magicimmunity", "role": "heal" },
                        { "name": "Elemental", "icon": "spell_nature_lightning", "role": "dps", "range": "ranged" },
                        { "name": "Enhancement", "icon": "spell_shaman_improvedstormstrike", "role": "dps", "range": "melee" }
                    ]
                },
                "oddity": {
                    "name": "Oddity",
                    "colour": "#FFFFFF",
                    "specs": [
                        { "name": "Hover", "icon": "inv_misc_questionmark", "role": "dps", "range": "hovering" },
                        { "name": "Bard", "icon": "inv_misc_questionmark", "role": "support" },
                        { "name": "Lost", "icon": "inv_misc_questionmark", "role": "dps" }
                    ]
                }
            }"##,
        )
        .unwrap()
    }

    mod from_json {
        use super::*;

        /// Expect known role and range strings to map onto their variants
        #[test]
        fn parses_roles_and_ranges() {
            let table = fixture_table();

            assert_eq!(table.len(), 3);
            assert_eq!(table.spec("warrior", 0).unwrap().role, Role::Tank);
            assert_eq!(table.spec("shaman", 0).unwrap().role, Role::Heal);
            assert_eq!(
                table.spec("shaman", 1).unwrap().range,
                Some(Range::Ranged)
            );
        }

        /// Expect unrecognised roles and ranges to load instead of failing the table
        #[test]
        fn keeps_unknown_roles_and_ranges() {
            let table = fixture_table();

            assert_eq!(
                table.spec("oddity", 0).unwrap().range,
                Some(Range::Other("hovering".to_string()))
            );
            assert_eq!(
                table.spec("oddity", 1).unwrap().role,
                Role::Other("support".to_string())
            );
            assert_eq!(table.spec("oddity", 2).unwrap().range, None);
        }

        /// Expect unknown role strings to serialize back unchanged
        #[test]
        fn round_trips_unknown_role() {
            let json = serde_json::to_string(&Role::Other("support".to_string())).unwrap();

            assert_eq!(json, "\"support\"");
        }
    }

    mod lookup {
        use super::*;

        /// Expect None for unknown classes and out of range spec ids
        #[test]
        fn spec_returns_none_for_unknown() {
            let table = fixture_table();

            assert!(table.spec("paladin", 0).is_none());
            assert!(table.spec("warrior", 3).is_none());
        }

        /// Expect spec names to match regardless of case
        #[test]
        fn finds_spec_by_name_ignoring_case() {
            let table = fixture_table();

            assert_eq!(table.find_spec_by_name("shaman", "elemental"), Some(1));
            assert_eq!(table.find_spec_by_name("shaman", "ENHANCEMENT"), Some(2));
            assert_eq!(table.find_spec_by_name("shaman", "arms"), None);
            assert_eq!(table.find_spec_by_name("druid", "balance"), None);
        }

        /// Expect classes to iterate alphabetically by identifier
        #[test]
        fn iterates_in_identifier_order() {
            let table = fixture_table();

            let keys: Vec<&str> = table.iter().map(|(key, _)| key.as_str()).collect();

            assert_eq!(keys, vec!["oddity", "shaman", "warrior"]);
        }

        /// Expect the icon URL to point at the 56px icon render
        #[test]
        fn builds_icon_url() {
            let table = fixture_table();

            assert_eq!(
                table.spec("warrior", 0).unwrap().icon_url(),
                "https://render-eu.worldofwarcraft.com/icons/56/ability_warrior_defensivestance.jpg"
            );
        }
    }
}
