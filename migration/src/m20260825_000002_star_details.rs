use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260825_000001_astronomical_object::AstronomicalObject;

static IDX_STAR_DETAILS_OBJECT_ID: &str = "idx_star_details_object_id";
static FK_STAR_DETAILS_OBJECT_ID: &str = "fk_star_details_object_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(StarDetails::Id))
                    .col(integer_uniq(StarDetails::ObjectId))
                    .col(string_null(StarDetails::SpectralClass))
                    .col(double_null(StarDetails::Luminosity))
                    .col(double_null(StarDetails::RadiusSolar))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STAR_DETAILS_OBJECT_ID)
                    .table(StarDetails::Table)
                    .col(StarDetails::ObjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STAR_DETAILS_OBJECT_ID)
                    .from_tbl(StarDetails::Table)
                    .from_col(StarDetails::ObjectId)
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
                    .name(FK_STAR_DETAILS_OBJECT_ID)
                    .table(StarDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STAR_DETAILS_OBJECT_ID)
                    .table(StarDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StarDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StarDetails {
    Table,
    Id,
    ObjectId,
    SpectralClass,
    Luminosity,
    RadiusSolar,
}
