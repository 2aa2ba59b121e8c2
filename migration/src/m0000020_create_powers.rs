use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Powers::Table)
                    .col(
                        ColumnDef::new(Powers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Powers::Name).string().not_null())
                    .col(ColumnDef::new(Powers::Description).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Powers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Powers {
    Table,
    Id,
    Name,
    Description,
}
