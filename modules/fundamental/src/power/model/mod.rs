use herodex_entity::power;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod details;
mod summary;

pub use details::*;
pub use summary::*;

/// A named ability with a descriptive text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct PowerHead {
    /// The generated ID of the power.
    pub id: i32,

    /// The name of the power.
    pub name: String,

    /// What the power does. Always at least 20 characters.
    pub description: String,
}

impl PowerHead {
    pub fn from_entity(power: &power::Model) -> Self {
        Self {
            id: power.id,
            name: power.name.clone(),
            description: power.description.clone(),
        }
    }
}

/// Request body for updating a power's description.
#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct UpdatePower {
    pub description: Option<String>,
}
