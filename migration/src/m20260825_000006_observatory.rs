use sea_orm_migration::{prelude::*, schema::*};

static IDX_OBSERVATORY_NAME: &str = "idx_observatory_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Observatory::Table)
                    .if_not_exists()
                    .col(pk_auto(Observatory::Id))
                    .col(string(Observatory::Name))
                    .col(string_null(Observatory::Location))
                    .col(string_null(Observatory::Country))
                    .col(integer_null(Observatory::EstablishedYear))
                    .col(string_null(Observatory::Coordinates))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OBSERVATORY_NAME)
                    .table(Observatory::Table)
                    .col(Observatory::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OBSERVATORY_NAME)
                    .table(Observatory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Observatory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Observatory {
    Table,
    Id,
    Name,
    Location,
    Country,
    EstablishedYear,
    Coordinates,
}
