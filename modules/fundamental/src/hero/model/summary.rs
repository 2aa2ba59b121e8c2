use crate::hero::model::HeroHead;
use herodex_entity::hero;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The reduced form of a hero: flat scalar fields only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct HeroSummary {
    #[serde(flatten)]
    pub head: HeroHead,
}

impl HeroSummary {
    pub fn from_entity(hero: &hero::Model) -> Self {
        Self {
            head: HeroHead::from_entity(hero),
        }
    }

    pub fn from_entities(heroes: &[hero::Model]) -> Vec<Self> {
        heroes.iter().map(Self::from_entity).collect()
    }
}
