use crate::power::model::PowerHead;
use herodex_entity::power;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The reduced form of a power: flat scalar fields only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct PowerSummary {
    #[serde(flatten)]
    pub head: PowerHead,
}

impl PowerSummary {
    pub fn from_entity(power: &power::Model) -> Self {
        Self {
            head: PowerHead::from_entity(power),
        }
    }

    pub fn from_entities(powers: &[power::Model]) -> Vec<Self> {
        powers.iter().map(Self::from_entity).collect()
    }
}
