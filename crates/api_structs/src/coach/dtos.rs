use peakform_domain::{Coach, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CoachDTO {
    pub id: ID,
    pub name: String,
    pub phone: Option<String>,
}

impl CoachDTO {
    pub fn new(coach: Coach) -> Self {
        Self {
            id: coach.id,
            name: coach.name,
            phone: coach.phone,
        }
    }
}
