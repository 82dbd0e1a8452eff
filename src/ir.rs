use serde::{Deserialize, Serialize};

/// Movement indicator for a radar entry since the previous edition.
///
/// Purely a rendering concern (symbol choice); the layout algorithm
/// never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Moved {
    Down,
    #[default]
    Unchanged,
    Up,
    New,
}

impl Moved {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::Down),
            0 => Some(Self::Unchanged),
            1 => Some(Self::Up),
            2 => Some(Self::New),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Down => -1,
            Self::Unchanged => 0,
            Self::Up => 1,
            Self::New => 2,
        }
    }
}

impl Serialize for Moved {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for Moved {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Moved::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!("moved indicator out of range: {code}"))
        })
    }
}

/// One item to place on the radar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub quadrant: usize,
    pub ring: usize,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub moved: Moved,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

fn default_active() -> bool {
    true
}

/// A radar edition as supplied by an external data source:
/// an "as of" date plus the entry list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Radar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub entries: Vec<Entry>,
}

impl Radar {
    pub fn new() -> Self {
        Self::default()
    }
}
