//! Printable receipt data.
//!
//! Receipt line amounts multiply the per-day unit price by quantity and by
//! the rental's inclusive day count, unlike the list-view aggregator which
//! omits the day multiplier. The paid amount here is the sum of the explicit
//! payment log, not the installment-derived approximation.

use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::snapshot::{ProductIndex, Rental};
use crate::types::{DateRange, PaymentInfo, ProductId};

/// letterhead block printed at the top of every receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// one charged line on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub product_id: ProductId,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Money,
    /// unit price times quantity times rental days
    pub line_total: Money,
}

/// complete receipt for one rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub company: CompanyProfile,
    pub client: String,
    pub address: Option<String>,
    pub period: DateRange,
    pub days: i64,
    pub issued_on: NaiveDate,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub discount: Money,
    pub machine_fee: Money,
    pub final_price: Money,
    /// sum of the explicit payment log
    pub total_paid: Money,
    /// final price minus logged payments, never negative
    pub remaining_balance: Money,
    pub payment_info: PaymentInfo,
    pub installment_value: Money,
}

impl Receipt {
    /// build a receipt for a rental; item ids that no longer resolve are
    /// dropped from the line listing and contribute nothing
    pub fn build(
        rental: &Rental,
        index: &ProductIndex,
        company: &CompanyProfile,
        time_provider: &SafeTimeProvider,
    ) -> Self {
        let days = rental.period.days();

        let mut lines = Vec::new();
        let mut subtotal = Money::ZERO;
        for (product_id, quantity) in &rental.items {
            if let Some(product) = index.get(product_id) {
                let line_total = product.price * *quantity * Decimal::from(days);
                subtotal += line_total;
                lines.push(ReceiptLine {
                    product_id: product_id.clone(),
                    description: product.name.clone(),
                    quantity: *quantity,
                    unit_price: product.price,
                    line_total,
                });
            }
        }

        let final_price = (subtotal - rental.discount + rental.machine_fee).max(Money::ZERO);
        let total_paid = rental.logged_payments();
        let remaining_balance = (final_price - total_paid).max(Money::ZERO);

        let installment_value = if final_price.is_positive() {
            final_price / Decimal::from(rental.payment_info.total_installments)
        } else {
            Money::ZERO
        };

        Receipt {
            company: company.clone(),
            client: rental.client.clone(),
            address: rental.address.clone(),
            period: rental.period,
            days,
            issued_on: time_provider.now().date_naive(),
            lines,
            subtotal,
            discount: rental.discount,
            machine_fee: rental.machine_fee,
            final_price,
            total_paid,
            remaining_balance,
            payment_info: rental.payment_info,
            installment_value,
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
