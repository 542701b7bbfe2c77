use crate::server::{
    data::client::ClientRepository,
    error::AppError,
    model::client::{ClientPatch, CreateClientParams},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod save;
