use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::Money;
use crate::types::ProductId;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("rental period is required")]
    MissingPeriod,

    #[error("product name must not be empty")]
    EmptyProductName,

    #[error("client name must not be empty")]
    EmptyClientName,

    #[error("invalid quantity: {quantity}")]
    InvalidQuantity {
        quantity: i64,
    },

    #[error("invalid price: {price}")]
    InvalidPrice {
        price: Money,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("rental must contain at least one item")]
    NoItemsSelected,

    #[error("invalid installment count: {count}")]
    InvalidInstallmentCount {
        count: u32,
    },

    #[error("paid installments {paid} exceed total installments {total}")]
    PaidExceedsTotal {
        paid: u32,
        total: u32,
    },

    #[error("product {id} is referenced by one or more rentals")]
    ProductInUse {
        id: ProductId,
    },

    #[error("invalid document: {message}")]
    InvalidDocument {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, RentalError>;
