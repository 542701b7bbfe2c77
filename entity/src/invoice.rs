use sea_orm::entity::prelude::*;

/// Invoice record. `client_id` is a weak reference to a client row: no
/// foreign key, no cascade on client deletion.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client: String,
    pub amount: f64,
    pub date: DateTimeUtc,
    pub due_date: DateTimeUtc,
    pub status: String,
    pub service: String,
    pub client_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
