use serde::{Deserialize, Serialize};

/// Domain event container (reserved for a later event-sourcing pass)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventStore {
    _placeholder: (),
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }
}
