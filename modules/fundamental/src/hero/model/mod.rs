use herodex_entity::hero;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod details;
mod summary;

pub use details::*;
pub use summary::*;

/// A named character who may wield zero or more powers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HeroHead {
    /// The generated ID of the hero.
    pub id: i32,

    /// The civilian name of the hero.
    pub name: String,

    /// The name the hero goes by in costume.
    pub super_name: String,
}

impl HeroHead {
    pub fn from_entity(hero: &hero::Model) -> Self {
        Self {
            id: hero.id,
            name: hero.name.clone(),
            super_name: hero.super_name.clone(),
        }
    }
}
