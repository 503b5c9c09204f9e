use sea_orm_migration::{prelude::*, schema::*};

static IDX_DISCOVERER_NAME: &str = "idx_discoverer_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Discoverer::Table)
                    .if_not_exists()
                    .col(pk_auto(Discoverer::Id))
                    .col(string(Discoverer::Name))
                    .col(string_null(Discoverer::Nationality))
                    .col(integer_null(Discoverer::BirthYear))
                    .col(text_null(Discoverer::Bio))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISCOVERER_NAME)
                    .table(Discoverer::Table)
                    .col(Discoverer::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DISCOVERER_NAME)
                    .table(Discoverer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Discoverer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Discoverer {
    Table,
    Id,
    Name,
    Nationality,
    BirthYear,
    Bio,
}
