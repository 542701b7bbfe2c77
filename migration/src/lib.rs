pub use sea_orm_migration::prelude::*;

mod m20260302_000001_create_client_table;
mod m20260302_000002_create_department_table;
mod m20260302_000003_create_employee_table;
mod m20260302_000004_create_invoice_table;
mod m20260302_000005_create_request_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260302_000001_create_client_table::Migration),
            Box::new(m20260302_000002_create_department_table::Migration),
            Box::new(m20260302_000003_create_employee_table::Migration),
            Box::new(m20260302_000004_create_invoice_table::Migration),
            Box::new(m20260302_000005_create_request_table::Migration),
        ]
    }
}
