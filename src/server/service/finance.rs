use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::invoice::{CreateInvoiceDto, UpdateInvoiceDto},
    server::{
        data::invoice::InvoiceRepository,
        error::AppError,
        model::{
            invoice::{CreateInvoiceParams, Invoice, InvoicePatch, InvoiceStatus},
            stats::FinanceStats,
        },
        service::{
            aggregate,
            validation::{Rule, Validator},
        },
    },
};

pub struct FinanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FinanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_invoice(&self, dto: CreateInvoiceDto) -> Result<Invoice, AppError> {
        Validator::new()
            .text("client", dto.client.as_deref(), &[Rule::Required])
            .number("amount", dto.amount, &[Rule::Required, Rule::NonNegative])
            .text("date", dto.date.as_deref(), &[Rule::Date])
            .text("dueDate", dto.due_date.as_deref(), &[Rule::Date])
            .text(
                "status",
                dto.status.as_deref(),
                &[Rule::OneOf(InvoiceStatus::LABELS)],
            )
            .text("service", dto.service.as_deref(), &[Rule::Required])
            .finish()?;

        InvoiceRepository::new(self.db)
            .create(CreateInvoiceParams::from_dto(dto))
            .await
    }

    pub async fn get_invoices(&self) -> Result<Vec<Invoice>, AppError> {
        InvoiceRepository::new(self.db).get_all().await
    }

    /// Merges the supplied fields into an existing invoice
    /// Returns None if the invoice doesn't exist
    pub async fn update_invoice(
        &self,
        id: i32,
        dto: UpdateInvoiceDto,
    ) -> Result<Option<Invoice>, AppError> {
        Validator::new()
            .text("client", dto.client.as_deref(), &[Rule::NotBlank])
            .number("amount", dto.amount, &[Rule::NonNegative])
            .text("date", dto.date.as_deref(), &[Rule::Date])
            .text("dueDate", dto.due_date.as_deref(), &[Rule::Date])
            .text(
                "status",
                dto.status.as_deref(),
                &[Rule::OneOf(InvoiceStatus::LABELS)],
            )
            .text("service", dto.service.as_deref(), &[Rule::NotBlank])
            .finish()?;

        let repo = InvoiceRepository::new(self.db);

        let Some(mut invoice) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        invoice.apply(InvoicePatch::from_dto(dto));

        repo.save(invoice).await
    }

    pub async fn delete_invoice(&self, id: i32) -> Result<bool, AppError> {
        let deleted = InvoiceRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted invoice {}", id);
        }

        Ok(deleted)
    }

    /// Computes revenue statistics with month buckets for the current UTC year
    pub async fn stats(&self) -> Result<FinanceStats, AppError> {
        self.stats_for_year(Utc::now().year()).await
    }

    /// Computes revenue statistics with month buckets for `year`
    pub async fn stats_for_year(&self, year: i32) -> Result<FinanceStats, AppError> {
        let invoices = InvoiceRepository::new(self.db).get_all().await?;

        Ok(aggregate::finance_stats(&invoices, year))
    }
}
