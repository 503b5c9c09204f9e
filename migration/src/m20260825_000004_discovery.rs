use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260825_000001_astronomical_object::AstronomicalObject;

static IDX_DISCOVERY_OBJECT_ID: &str = "idx_discovery_object_id";
static IDX_DISCOVERY_DATE: &str = "idx_discovery_date";
static FK_DISCOVERY_OBJECT_ID: &str = "fk_discovery_object_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Discovery::Table)
                    .if_not_exists()
                    .col(pk_auto(Discovery::Id))
                    .col(integer(Discovery::ObjectId))
                    .col(date_null(Discovery::DiscoveryDate))
                    .col(string_null(Discovery::DiscoveryMethod))
                    .col(text_null(Discovery::Notes))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISCOVERY_OBJECT_ID)
                    .table(Discovery::Table)
                    .col(Discovery::ObjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISCOVERY_DATE)
                    .table(Discovery::Table)
                    .col(Discovery::DiscoveryDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DISCOVERY_OBJECT_ID)
                    .from_tbl(Discovery::Table)
                    .from_col(Discovery::ObjectId)
                    .to_tbl(AstronomicalObject::Table)
                    .to_col(AstronomicalObject::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DISCOVERY_OBJECT_ID)
                    .table(Discovery::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DISCOVERY_DATE)
                    .table(Discovery::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DISCOVERY_OBJECT_ID)
                    .table(Discovery::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Discovery::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Discovery {
    Table,
    Id,
    ObjectId,
    DiscoveryDate,
    DiscoveryMethod,
    Notes,
}
