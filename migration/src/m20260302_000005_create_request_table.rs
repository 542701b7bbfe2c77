use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Request::Table)
                    .if_not_exists()
                    .col(pk_auto(Request::Id))
                    .col(string(Request::Name))
                    .col(string(Request::Email))
                    .col(string(Request::Phone))
                    .col(string(Request::Service))
                    .col(string(Request::Description))
                    .col(string(Request::Status))
                    .col(string_null(Request::FoundUs))
                    .col(timestamp_with_time_zone(Request::Date))
                    .col(timestamp_with_time_zone(Request::CreatedAt))
                    .col(timestamp_with_time_zone(Request::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_request_date")
                    .table(Request::Table)
                    .col(Request::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Request::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Request {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Service,
    Description,
    Status,
    FoundUs,
    Date,
    CreatedAt,
    UpdatedAt,
}
