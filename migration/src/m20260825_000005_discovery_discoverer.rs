use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260825_000003_discoverer::Discoverer, m20260825_000004_discovery::Discovery,
};

static IDX_DISCOVERY_DISCOVERER_DISCOVERY_ID: &str = "idx_discovery_discoverer_discovery_id";
static IDX_DISCOVERY_DISCOVERER_DISCOVERER_ID: &str = "idx_discovery_discoverer_discoverer_id";
static FK_DISCOVERY_DISCOVERER_DISCOVERY_ID: &str = "fk_discovery_discoverer_discovery_id";
static FK_DISCOVERY_DISCOVERER_DISCOVERER_ID: &str = "fk_discovery_discoverer_discoverer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscoveryDiscoverer::Table)
                    .if_not_exists()
                    .col(pk_auto(DiscoveryDiscoverer::Id))
                    .col(integer(DiscoveryDiscoverer::DiscoveryId))
                    .col(integer(DiscoveryDiscoverer::DiscovererId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISCOVERY_DISCOVERER_DISCOVERY_ID)
                    .table(DiscoveryDiscoverer::Table)
                    .col(DiscoveryDiscoverer::DiscoveryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DISCOVERY_DISCOVERER_DISCOVERER_ID)
                    .table(DiscoveryDiscoverer::Table)
                    .col(DiscoveryDiscoverer::DiscovererId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DISCOVERY_DISCOVERER_DISCOVERY_ID)
                    .from_tbl(DiscoveryDiscoverer::Table)
                    .from_col(DiscoveryDiscoverer::DiscoveryId)
                    .to_tbl(Discovery::Table)
                    .to_col(Discovery::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DISCOVERY_DISCOVERER_DISCOVERER_ID)
                    .from_tbl(DiscoveryDiscoverer::Table)
                    .from_col(DiscoveryDiscoverer::DiscovererId)
                    .to_tbl(Discoverer::Table)
                    .to_col(Discoverer::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DISCOVERY_DISCOVERER_DISCOVERER_ID)
                    .table(DiscoveryDiscoverer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DISCOVERY_DISCOVERER_DISCOVERY_ID)
                    .table(DiscoveryDiscoverer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DISCOVERY_DISCOVERER_DISCOVERER_ID)
                    .table(DiscoveryDiscoverer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DISCOVERY_DISCOVERER_DISCOVERY_ID)
                    .table(DiscoveryDiscoverer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DiscoveryDiscoverer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DiscoveryDiscoverer {
    Table,
    Id,
    DiscoveryId,
    DiscovererId,
}
