use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Activity name -> details, in the order the server sent them.
pub type Directory = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Advisory only, the server decides capacity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

pub fn parse_directory(body: &str) -> Result<Directory, serde_json::Error> {
    serde_json::from_str(body)
}
