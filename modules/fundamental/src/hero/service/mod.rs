use crate::{
    hero::model::{HeroDetails, HeroHead, HeroSummary},
    Error,
};
use herodex_entity::hero;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

#[derive(Default)]
pub struct HeroService {}

impl HeroService {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn fetch_heroes<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<HeroSummary>, Error> {
        let heroes = hero::Entity::find().all(connection).await?;

        Ok(HeroSummary::from_entities(&heroes))
    }

    pub async fn fetch_hero<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<Option<HeroDetails>, Error> {
        if let Some(hero) = hero::Entity::find_by_id(id).one(connection).await? {
            Ok(Some(HeroDetails::from_entity(&hero, connection).await?))
        } else {
            Ok(None)
        }
    }

    pub async fn create_hero<C: ConnectionTrait>(
        &self,
        name: &str,
        super_name: &str,
        connection: &C,
    ) -> Result<HeroHead, Error> {
        let hero = hero::ActiveModel {
            name: Set(name.to_string()),
            super_name: Set(super_name.to_string()),
            ..Default::default()
        }
        .insert(connection)
        .await?;

        Ok(HeroHead::from_entity(&hero))
    }

    /// Delete a hero; its power grants go with it.
    pub async fn delete_hero<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<bool, Error> {
        let result = hero::Entity::delete_by_id(id).exec(connection).await?;

        Ok(result.rows_affected > 0)
    }
}
