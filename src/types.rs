use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{RentalError, Result};

/// opaque identifier for a product, assigned by the external store
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    /// generate a client-side id for records created before the store echoes one
    pub fn generate() -> Self {
        ProductId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId(s.to_string())
    }
}

/// opaque identifier for a rental, assigned by the external store
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RentalId(String);

impl RentalId {
    pub fn new(id: impl Into<String>) -> Self {
        RentalId(id.into())
    }

    pub fn generate() -> Self {
        RentalId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RentalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RentalId {
    fn from(s: &str) -> Self {
        RentalId(s.to_string())
    }
}

/// inclusive date interval at day granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// create a range, rejecting inverted bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(RentalError::InvalidDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// build a range from possibly-absent form input; returns None when either
    /// date is missing or the pair is inverted, so availability falls back to
    /// the product's raw quantity
    pub fn from_optional(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(s), Some(e)) if s <= e => Some(DateRange { start: s, end: e }),
            _ => None,
        }
    }

    /// inclusive overlap test: two ranges share at least one day
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    /// check whether a single day falls within the range
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// inclusive day count, so a same-day rental bills one day
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// installment payment tracking for a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub total_installments: u32,
    pub paid_installments: u32,
}

impl PaymentInfo {
    /// create payment info, validating the installment invariants
    pub fn new(total_installments: u32, paid_installments: u32) -> Result<Self> {
        if total_installments < 1 {
            return Err(RentalError::InvalidInstallmentCount {
                count: total_installments,
            });
        }
        if paid_installments > total_installments {
            return Err(RentalError::PaidExceedsTotal {
                paid: paid_installments,
                total: total_installments,
            });
        }
        Ok(PaymentInfo {
            total_installments,
            paid_installments,
        })
    }

    /// single unpaid installment, the default for a new rental
    pub fn single() -> Self {
        PaymentInfo {
            total_installments: 1,
            paid_installments: 0,
        }
    }

    pub fn is_fully_paid(&self) -> bool {
        self.paid_installments >= self.total_installments
    }
}

impl Default for PaymentInfo {
    fn default() -> Self {
        PaymentInfo::single()
    }
}

/// one logged payment event against a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub amount: Money,
}

impl PaymentEntry {
    pub fn new(amount: Money) -> Self {
        PaymentEntry { amount }
    }
}

/// payment status of a rental as shown in list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalStatus {
    /// all installments paid, or nothing owed
    FullyPaid,
    /// at least one installment outstanding
    Outstanding,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(DateRange::new(date(2024, 1, 5), date(2024, 1, 1)).is_err());
        assert!(DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn test_from_optional_fallback() {
        assert!(DateRange::from_optional(None, Some(date(2024, 1, 5))).is_none());
        assert!(DateRange::from_optional(Some(date(2024, 1, 5)), None).is_none());
        // inverted input also degrades to None instead of erroring
        assert!(DateRange::from_optional(Some(date(2024, 1, 5)), Some(date(2024, 1, 1))).is_none());
        assert!(DateRange::from_optional(Some(date(2024, 1, 1)), Some(date(2024, 1, 5))).is_some());
    }

    #[test]
    fn test_overlap_is_inclusive_of_endpoints() {
        let a = DateRange::new(date(2024, 1, 1), date(2024, 1, 5)).unwrap();
        let b = DateRange::new(date(2024, 1, 5), date(2024, 1, 10)).unwrap();
        let c = DateRange::new(date(2024, 1, 6), date(2024, 1, 10)).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_contained_range_overlaps() {
        let outer = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        let inner = DateRange::new(date(2024, 1, 10), date(2024, 1, 12)).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_inclusive_day_count() {
        let same_day = DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(same_day.days(), 1);

        let five_days = DateRange::new(date(2024, 1, 1), date(2024, 1, 5)).unwrap();
        assert_eq!(five_days.days(), 5);
    }

    #[test]
    fn test_payment_info_invariants() {
        assert!(PaymentInfo::new(0, 0).is_err());
        assert!(PaymentInfo::new(4, 5).is_err());

        let info = PaymentInfo::new(4, 4).unwrap();
        assert!(info.is_fully_paid());

        let info = PaymentInfo::new(4, 3).unwrap();
        assert!(!info.is_fully_paid());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(ProductId::generate(), ProductId::generate());
        assert_ne!(RentalId::generate(), RentalId::generate());
    }
}
