use sea_orm_migration::{prelude::*, schema::*};

static IDX_ASTRONOMICAL_OBJECT_NAME: &str = "idx_astronomical_object_name";
static IDX_ASTRONOMICAL_OBJECT_TYPE: &str = "idx_astronomical_object_type";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AstronomicalObject::Table)
                    .if_not_exists()
                    .col(pk_auto(AstronomicalObject::Id))
                    .col(string(AstronomicalObject::Name))
                    .col(string(AstronomicalObject::ObjectType))
                    .col(double_null(AstronomicalObject::Magnitude))
                    .col(double_null(AstronomicalObject::TemperatureKelvin))
                    .col(double_null(AstronomicalObject::DistanceLightYears))
                    .col(double_null(AstronomicalObject::SolarMass))
                    .col(boolean(AstronomicalObject::IsHabitable))
                    .col(timestamp(AstronomicalObject::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASTRONOMICAL_OBJECT_NAME)
                    .table(AstronomicalObject::Table)
                    .col(AstronomicalObject::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASTRONOMICAL_OBJECT_TYPE)
                    .table(AstronomicalObject::Table)
                    .col(AstronomicalObject::ObjectType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASTRONOMICAL_OBJECT_TYPE)
                    .table(AstronomicalObject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASTRONOMICAL_OBJECT_NAME)
                    .table(AstronomicalObject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AstronomicalObject::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AstronomicalObject {
    Table,
    Id,
    Name,
    ObjectType,
    Magnitude,
    TemperatureKelvin,
    DistanceLightYears,
    SolarMass,
    IsHabitable,
    CreatedAt,
}
