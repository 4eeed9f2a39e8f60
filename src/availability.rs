//! Availability engine: remaining stock for a product over a candidate period.

use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;
use crate::types::{DateRange, ProductId, RentalId};

/// remaining stock for a product given a candidate rental period.
///
/// Unknown products yield zero. With no candidate period the product's raw
/// quantity is returned and no rentals are considered — the caller has not
/// picked dates yet. Otherwise the reserved quantities of every overlapping,
/// non-excluded rental are subtracted. The result may be negative when the
/// product is over-booked; it is deliberately not clamped so callers can
/// surface the anomaly.
///
/// Pure function of the snapshot and arguments; cheap enough to run on every
/// form-input change.
pub fn available_stock(
    snapshot: &Snapshot,
    product_id: &ProductId,
    period: Option<DateRange>,
    exclude: Option<&RentalId>,
) -> i64 {
    let Some(product) = snapshot.product(product_id) else {
        return 0;
    };

    let reserved = match period {
        Some(period) => reserved_in_period(snapshot, product_id, period, exclude),
        None => 0,
    };

    product.quantity as i64 - reserved
}

/// total quantity of a product reserved by rentals overlapping the period,
/// optionally excluding one rental (the self-edit case)
pub fn reserved_in_period(
    snapshot: &Snapshot,
    product_id: &ProductId,
    period: DateRange,
    exclude: Option<&RentalId>,
) -> i64 {
    snapshot
        .rentals()
        .iter()
        .filter(|rental| Some(&rental.id) != exclude)
        .filter(|rental| rental.period.overlaps(&period))
        .map(|rental| rental.reserved_quantity(product_id) as i64)
        .sum()
}

/// availability broken out for callers that want the anomaly spelled out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    /// total owned stock, zero for unknown products
    pub total: i64,
    /// quantity reserved by overlapping rentals in the period
    pub reserved: i64,
    /// `total - reserved`; negative when over-booked
    pub available: i64,
    pub is_overbooked: bool,
}

/// compute a full availability report for one product
pub fn check(
    snapshot: &Snapshot,
    product_id: &ProductId,
    period: Option<DateRange>,
    exclude: Option<&RentalId>,
) -> AvailabilityReport {
    let total = snapshot
        .product(product_id)
        .map(|p| p.quantity as i64)
        .unwrap_or(0);
    let reserved = match (snapshot.product(product_id), period) {
        (Some(_), Some(period)) => reserved_in_period(snapshot, product_id, period, exclude),
        _ => 0,
    };
    let available = total - reserved;

    AvailabilityReport {
        total,
        reserved,
        available,
        is_overbooked: available < 0,
    }
}
