//! Financial aggregator for list and summary views.
//!
//! Subtotals here use the per-day unit price without a day multiplier; the
//! receipt module applies the day multiplier for printed documents. The two
//! totals are distinct on purpose and must not be confused.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::snapshot::{ProductIndex, Rental, Snapshot};
use crate::types::RentalStatus;

/// per-rental financial breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalFinancials {
    /// unit price times quantity across the item mapping
    pub subtotal: Money,
    /// subtotal minus discount plus machine fee, never negative
    pub final_price: Money,
    /// final price split evenly across installments, zero when nothing is owed
    pub installment_value: Money,
    /// installment value times paid installments
    pub total_paid: Money,
    /// final price minus total paid, clamped to zero within one cent
    pub remaining_balance: Money,
}

/// compute the financial breakdown for one rental.
///
/// Item ids that do not resolve in the index contribute zero to the subtotal;
/// a stale reference degrades the numbers instead of failing the whole view.
pub fn rental_financials(rental: &Rental, index: &ProductIndex) -> RentalFinancials {
    let subtotal: Money = rental
        .items
        .iter()
        .map(|(product_id, quantity)| {
            index
                .get(product_id)
                .map(|product| product.price * *quantity)
                .unwrap_or(Money::ZERO)
        })
        .sum();

    let final_price = (subtotal - rental.discount + rental.machine_fee).max(Money::ZERO);

    let installment_value = if final_price.is_positive() {
        final_price / Decimal::from(rental.payment_info.total_installments)
    } else {
        Money::ZERO
    };

    let total_paid = installment_value * rental.payment_info.paid_installments;

    // one-cent epsilon absorbs the rounding drift of uneven installment
    // splits; a fully marked plan always reports zero, whatever the drift
    let raw_remaining = final_price - total_paid;
    let remaining_balance = if rental.payment_info.is_fully_paid() || raw_remaining <= Money::CENT {
        Money::ZERO
    } else {
        raw_remaining
    };

    RentalFinancials {
        subtotal,
        final_price,
        installment_value,
        total_paid,
        remaining_balance,
    }
}

/// payment status as shown in list views: fully paid when every installment
/// is marked, or when the final price is effectively zero
pub fn rental_status(rental: &Rental, index: &ProductIndex) -> RentalStatus {
    let financials = rental_financials(rental, index);
    if rental.payment_info.is_fully_paid() || financials.final_price < Money::CENT {
        RentalStatus::FullyPaid
    } else {
        RentalStatus::Outstanding
    }
}

/// aggregate position across the full rental set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FinancialSummary {
    /// sum of each rental's paid-to-date amount
    pub total_revenue: Money,
    /// sum of each rental's remaining balance above half a cent
    pub total_receivable: Money,
}

/// compute revenue and receivable across every rental in the snapshot
pub fn financial_summary(snapshot: &Snapshot) -> FinancialSummary {
    let index = snapshot.product_index();
    let mut summary = FinancialSummary::default();

    for rental in snapshot.rentals() {
        let financials = rental_financials(rental, &index);
        summary.total_revenue += financials.total_paid;
        // half-cent floor keeps rounding noise out of the receivable display
        if financials.remaining_balance.as_decimal() > dec!(0.005) {
            summary.total_receivable += financials.remaining_balance;
        }
    }

    summary
}
