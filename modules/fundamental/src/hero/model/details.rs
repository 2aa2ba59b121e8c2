use crate::{hero::model::HeroHead, hero_power::model::HeroPowerHead, Error};
use herodex_entity::{hero, hero_power};
use sea_orm::{ConnectionTrait, ModelTrait};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The full form of a hero: scalar fields plus its power grants. The grants
/// carry only scalar fields themselves, keeping the serialization acyclic.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HeroDetails {
    #[serde(flatten)]
    pub head: HeroHead,

    /// Powers granted to the hero, one row per grant.
    pub hero_powers: Vec<HeroPowerHead>,
}

impl HeroDetails {
    pub async fn from_entity<C: ConnectionTrait>(
        hero: &hero::Model,
        connection: &C,
    ) -> Result<Self, Error> {
        let hero_powers = hero.find_related(hero_power::Entity).all(connection).await?;

        Ok(Self {
            head: HeroHead::from_entity(hero),
            hero_powers: HeroPowerHead::from_entities(&hero_powers),
        })
    }
}
