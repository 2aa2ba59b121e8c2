use herodex_entity::{hero_power, strength::Strength};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod details;

pub use details::*;

/// A grant of one power to one hero, with a strength rating on the edge.
/// Scalar fields only; the related rows appear as IDs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HeroPowerHead {
    /// The generated ID of the grant.
    pub id: i32,

    /// How strongly the hero wields the power.
    pub strength: Strength,

    /// The hero holding the power.
    pub hero_id: i32,

    /// The power being held.
    pub power_id: i32,
}

impl HeroPowerHead {
    pub fn from_entity(hero_power: &hero_power::Model) -> Self {
        Self {
            id: hero_power.id,
            strength: hero_power.strength,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
        }
    }

    pub fn from_entities(hero_powers: &[hero_power::Model]) -> Vec<Self> {
        hero_powers.iter().map(Self::from_entity).collect()
    }
}

/// Request body for creating a grant. The strength arrives as free text and
/// is validated against the [`Strength`] set on the way in.
#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct CreateHeroPower {
    pub strength: String,
    pub power_id: i32,
    pub hero_id: i32,
}
