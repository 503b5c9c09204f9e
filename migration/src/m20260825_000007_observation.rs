use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260825_000001_astronomical_object::AstronomicalObject,
    m20260825_000006_observatory::Observatory,
};

static IDX_OBSERVATION_OBJECT_ID: &str = "idx_observation_object_id";
static IDX_OBSERVATION_OBSERVATORY_ID: &str = "idx_observation_observatory_id";
static FK_OBSERVATION_OBJECT_ID: &str = "fk_observation_object_id";
static FK_OBSERVATION_OBSERVATORY_ID: &str = "fk_observation_observatory_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Observation::Table)
                    .if_not_exists()
                    .col(pk_auto(Observation::Id))
                    .col(integer(Observation::ObjectId))
                    .col(integer(Observation::ObservatoryId))
                    .col(timestamp_null(Observation::ObservationDate))
                    .col(string_null(Observation::Instrument))
                    .col(string_null(Observation::Wavelength))
                    .col(double_null(Observation::ExposureTime))
                    .col(text_null(Observation::Notes))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OBSERVATION_OBJECT_ID)
                    .table(Observation::Table)
                    .col(Observation::ObjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OBSERVATION_OBSERVATORY_ID)
                    .table(Observation::Table)
                    .col(Observation::ObservatoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OBSERVATION_OBJECT_ID)
                    .from_tbl(Observation::Table)
                    .from_col(Observation::ObjectId)
                    .to_tbl(AstronomicalObject::Table)
                    .to_col(AstronomicalObject::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OBSERVATION_OBSERVATORY_ID)
                    .from_tbl(Observation::Table)
                    .from_col(Observation::ObservatoryId)
                    .to_tbl(Observatory::Table)
                    .to_col(Observatory::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_OBSERVATION_OBSERVATORY_ID)
                    .table(Observation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_OBSERVATION_OBJECT_ID)
                    .table(Observation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OBSERVATION_OBSERVATORY_ID)
                    .table(Observation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OBSERVATION_OBJECT_ID)
                    .table(Observation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Observation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Observation {
    Table,
    Id,
    ObjectId,
    ObservatoryId,
    ObservationDate,
    Instrument,
    Wavelength,
    ExposureTime,
    Notes,
}
