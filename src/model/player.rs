use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A character signed up for the raid.
///
/// Players are identified by `name`, compared case-insensitively. Uniqueness is not
/// enforced; two entries with the same name are simply both kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlayerEntry {
    pub name: String,
    /// Class identifier, a key of the class/spec table
    pub class: String,
    pub spec: SpecRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>, example = "2"))]
    pub status: Option<InviteStatus>,
}

impl PlayerEntry {
    pub fn new(name: impl Into<String>, class: impl Into<String>, spec_id: usize) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            spec: SpecRef {
                id: spec_id,
                ilvl: None,
            },
            status: None,
        }
    }

    pub fn with_ilvl(mut self, ilvl: u32) -> Self {
        self.spec.ilvl = Some(ilvl);
        self
    }

    pub fn with_status(mut self, status: InviteStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Case-insensitive comparison against the player's name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Characters from another realm carry a `Name-Realm` suffix.
    pub fn is_cross_realm(&self) -> bool {
        self.name.contains('-')
    }
}

/// Reference into the class's spec list plus the character's item level, if known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SpecRef {
    #[serde(deserialize_with = "deserialize_lenient_index")]
    pub id: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ilvl: Option<u32>,
}

/// Accepts either a JSON number or a numeric string.
///
/// Rosters written by older clients store the spec id as a string.
fn deserialize_lenient_index<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n as usize),
        NumberOrString::String(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

/// Calendar invite status code as used by the in-game calendar.
///
/// | code | meaning       |
/// |------|---------------|
/// | 1    | invited       |
/// | 2    | accepted      |
/// | 3    | declined      |
/// | 4    | confirmed     |
/// | 5    | out           |
/// | 6    | standby       |
/// | 7    | signed up     |
/// | 8    | not signed up |
/// | 9    | tentative     |
///
/// Serialized as a string code (`"2"`) and deserialized from either a string or number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InviteStatus(u8);

impl InviteStatus {
    pub const INVITED: Self = Self(1);
    pub const ACCEPTED: Self = Self(2);
    pub const DECLINED: Self = Self(3);
    pub const CONFIRMED: Self = Self(4);
    pub const OUT: Self = Self(5);
    pub const STANDBY: Self = Self(6);
    pub const SIGNED_UP: Self = Self(7);
    pub const NOT_SIGNED_UP: Self = Self(8);
    pub const TENTATIVE: Self = Self(9);

    pub fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn code(&self) -> u8 {
        self.0
    }

    /// Folds a code onto the representative of its display group, `None` for unknown codes.
    pub fn normalize(&self) -> Option<Self> {
        match self.0 {
            1 | 8 => Some(Self::INVITED),
            2 | 4 | 7 => Some(Self::ACCEPTED),
            6 | 9 => Some(Self::TENTATIVE),
            3 | 5 => Some(Self::DECLINED),
            _ => None,
        }
    }

    pub fn colour(&self) -> Option<StatusColour> {
        match self.0 {
            1 | 8 => Some(StatusColour::Gray),
            2 | 4 | 7 => Some(StatusColour::Green),
            6 | 9 => Some(StatusColour::Orange),
            3 | 5 => Some(StatusColour::Red),
            _ => None,
        }
    }
}

impl Default for InviteStatus {
    fn default() -> Self {
        Self::ACCEPTED
    }
}

impl fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for InviteStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for InviteStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => u8::try_from(n).map_err(de::Error::custom)?,
            NumberOrString::String(s) => s.trim().parse().map_err(de::Error::custom)?,
        };

        Ok(Self(code))
    }
}

/// Display group of an invite status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColour {
    Gray,
    Green,
    Orange,
    Red,
}

impl StatusColour {
    /// CSS class used by the roster page
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}
