use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260825_000001_astronomical_object::AstronomicalObject;

static IDX_PHOTO_OBJECT_ID: &str = "idx_photo_object_id";
static FK_PHOTO_OBJECT_ID: &str = "fk_photo_object_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(pk_auto(Photo::Id))
                    .col(integer(Photo::ObjectId))
                    .col(string(Photo::Url))
                    .col(string_null(Photo::Caption))
                    .col(date_null(Photo::TakenDate))
                    .col(string_null(Photo::Telescope))
                    .col(string_null(Photo::Instrument))
                    .col(string_null(Photo::WavelengthFilter))
                    .col(boolean(Photo::IsPrimary))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PHOTO_OBJECT_ID)
                    .table(Photo::Table)
                    .col(Photo::ObjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PHOTO_OBJECT_ID)
                    .from_tbl(Photo::Table)
                    .from_col(Photo::ObjectId)
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
                    .name(FK_PHOTO_OBJECT_ID)
                    .table(Photo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PHOTO_OBJECT_ID)
                    .table(Photo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Photo {
    Table,
    Id,
    ObjectId,
    Url,
    Caption,
    TakenDate,
    Telescope,
    Instrument,
    WavelengthFilter,
    IsPrimary,
}
