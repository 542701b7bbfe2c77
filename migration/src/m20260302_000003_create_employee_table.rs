use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `department` is deliberately a plain string column; departments are
        // matched by name at query time.
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string(Employee::Name))
                    .col(string_uniq(Employee::Email))
                    .col(string(Employee::Phone))
                    .col(string(Employee::Position))
                    .col(string(Employee::Department))
                    .col(timestamp_with_time_zone(Employee::HireDate))
                    .col(double(Employee::Salary))
                    .col(string(Employee::Status))
                    .col(timestamp_with_time_zone(Employee::CreatedAt))
                    .col(timestamp_with_time_zone(Employee::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Position,
    Department,
    HireDate,
    Salary,
    Status,
    CreatedAt,
    UpdatedAt,
}
