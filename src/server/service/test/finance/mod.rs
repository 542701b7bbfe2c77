use crate::{
    model::invoice::{CreateInvoiceDto, UpdateInvoiceDto},
    server::{
        error::AppError, model::invoice::InvoiceStatus, service::finance::FinanceService,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{helpers::utc_date, invoice::InvoiceFactory},
};

mod invoice;
