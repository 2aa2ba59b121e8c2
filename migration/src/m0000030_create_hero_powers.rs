use crate::m0000010_create_heroes::Heroes;
use crate::m0000020_create_powers::Powers;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroPowers::Table)
                    .col(
                        ColumnDef::new(HeroPowers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HeroPowers::Strength).string().not_null())
                    .col(ColumnDef::new(HeroPowers::HeroId).integer().not_null())
                    .col(ColumnDef::new(HeroPowers::PowerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_powers_hero_id_heroes")
                            .from(HeroPowers::Table, HeroPowers::HeroId)
                            .to(Heroes::Table, Heroes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_powers_power_id_powers")
                            .from(HeroPowers::Table, HeroPowers::PowerId)
                            .to(Powers::Table, Powers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeroPowers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HeroPowers {
    Table,
    Id,
    Strength,
    HeroId,
    PowerId,
}
