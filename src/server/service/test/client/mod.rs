use crate::{
    model::client::{CreateClientDto, UpdateClientDto},
    server::{error::AppError, service::client::ClientService},
};
use test_utils::{builder::TestBuilder, factory};

mod write;
