#![allow(clippy::expect_used)]

pub mod call;

use herodex_common::{config, db::Database};
use herodex_entity::{hero, hero_power, power, strength::Strength};
use sea_orm::{ActiveModelTrait, Set};
use tempfile::TempDir;
use test_context::AsyncTestContext;

/// A fresh, migrated, file-backed database for one test.
pub struct HerodexContext {
    pub db: Database,
    _store_dir: TempDir,
}

impl HerodexContext {
    pub async fn seed_hero(&self, name: &str, super_name: &str) -> Result<hero::Model, anyhow::Error> {
        Ok(hero::ActiveModel {
            name: Set(name.to_string()),
            super_name: Set(super_name.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn seed_power(
        &self,
        name: &str,
        description: &str,
    ) -> Result<power::Model, anyhow::Error> {
        Ok(power::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn seed_hero_power(
        &self,
        hero: &hero::Model,
        power: &power::Model,
        strength: Strength,
    ) -> Result<hero_power::Model, anyhow::Error> {
        Ok(hero_power::ActiveModel {
            strength: Set(strength),
            hero_id: Set(hero.id),
            power_id: Set(power.id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?)
    }
}

impl AsyncTestContext for HerodexContext {
    async fn setup() -> HerodexContext {
        let store_dir = TempDir::new().expect("create a store directory");
        let uri = format!(
            "sqlite://{}?mode=rwc",
            store_dir.path().join("herodex.db").display()
        );

        let db = Database::bootstrap(&config::Database { uri })
            .await
            .expect("set up the test database");

        HerodexContext {
            db,
            _store_dir: store_dir,
        }
    }

    async fn teardown(self) {
        if let Err(err) = self.db.close().await {
            log::error!("closing the test database: {err}");
        }
    }
}
