use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::Id))
                    .col(string(Invoice::Client))
                    .col(double(Invoice::Amount))
                    .col(timestamp_with_time_zone(Invoice::Date))
                    .col(timestamp_with_time_zone(Invoice::DueDate))
                    .col(string(Invoice::Status))
                    .col(string(Invoice::Service))
                    .col(integer_null(Invoice::ClientId))
                    .col(timestamp_with_time_zone(Invoice::CreatedAt))
                    .col(timestamp_with_time_zone(Invoice::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invoice_date")
                    .table(Invoice::Table)
                    .col(Invoice::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invoice {
    Table,
    Id,
    Client,
    Amount,
    Date,
    DueDate,
    Status,
    Service,
    ClientId,
    CreatedAt,
    UpdatedAt,
}
