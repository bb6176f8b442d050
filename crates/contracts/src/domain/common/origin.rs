use serde::{Deserialize, Serialize};

/// Where an aggregate's data originates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Created inside this system
    #[serde(rename = "self")]
    Self_,
    /// Migrated from the retired Node/Mongo administration app
    Legacy,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Self_ => "self",
            Origin::Legacy => "legacy",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
