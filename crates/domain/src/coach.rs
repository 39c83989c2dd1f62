use crate::shared::entity::{Entity, ID};

/// A `Coach` owns `Player`s and schedules `Session`s with them. The coach
/// is the sender identity of session reminders and the `assigned_by` of
/// auto-created watch records.
#[derive(Debug, Clone, PartialEq)]
pub struct Coach {
    pub id: ID,
    pub name: String,
    pub phone: Option<String>,
}

impl Coach {
    pub fn new(name: &str) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
            phone: None,
        }
    }
}

impl Entity for Coach {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
