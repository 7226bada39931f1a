use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20260101_000001_create_sensor_records_table::Migration,
        )]
    }
}

mod m20260101_000001_create_sensor_records_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20260101_000001_create_sensor_records_table"
        }
    }

    #[allow(elided_lifetimes_in_paths)]
    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SensorRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SensorRecords::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SensorRecords::SensorModel)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SensorRecords::MeasureUnit)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SensorRecords::Device).string().not_null())
                        .col(ColumnDef::new(SensorRecords::Location).string().not_null())
                        .col(ColumnDef::new(SensorRecords::DataType).string().not_null())
                        .col(ColumnDef::new(SensorRecords::Data).double().not_null())
                        .col(
                            ColumnDef::new(SensorRecords::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SensorRecords::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            // Location and model are the common lookup axes
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_sensor_records_location")
                        .table(SensorRecords::Table)
                        .col(SensorRecords::Location)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_sensor_records_sensor_model")
                        .table(SensorRecords::Table)
                        .col(SensorRecords::SensorModel)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SensorRecords::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SensorRecords {
        Table,
        Id,
        SensorModel,
        MeasureUnit,
        Device,
        Location,
        DataType,
        Data,
        CreatedAt,
        UpdatedAt,
    }
}
