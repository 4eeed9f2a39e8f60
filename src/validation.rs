//! Validation of operator input before it is staged for the external store.
//!
//! Drafts carry raw form values; `validate` either produces a well-formed
//! domain record or reports the first violated rule. The pure computations
//! elsewhere assume records passed this gate.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::decimal::Money;
use crate::errors::{RentalError, Result};
use crate::snapshot::{Product, Rental};
use crate::types::{DateRange, PaymentInfo, ProductId, RentalId};

/// raw product form input
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i64,
    pub price: Money,
}

impl ProductDraft {
    /// validate and produce a product with a freshly generated id
    pub fn validate(&self) -> Result<Product> {
        self.validate_with_id(ProductId::generate())
    }

    /// validate and produce a product under an existing id (edit flow)
    pub fn validate_with_id(&self, id: ProductId) -> Result<Product> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RentalError::EmptyProductName);
        }
        if self.quantity <= 0 {
            return Err(RentalError::InvalidQuantity {
                quantity: self.quantity,
            });
        }
        if !self.price.is_positive() {
            return Err(RentalError::InvalidPrice { price: self.price });
        }

        Ok(Product {
            id,
            name: name.to_string(),
            quantity: self.quantity as u32,
            price: self.price,
        })
    }
}

/// raw rental form input
#[derive(Debug, Clone, Default)]
pub struct RentalDraft {
    pub client: String,
    pub address: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub items: BTreeMap<ProductId, u32>,
    pub discount: Money,
    pub machine_fee: Money,
    pub total_installments: u32,
}

impl RentalDraft {
    /// validate and produce a new rental with nothing paid yet
    pub fn validate(&self) -> Result<Rental> {
        self.build(RentalId::generate(), 0)
    }

    /// validate an edit of an existing rental, carrying its payment progress
    /// forward; paid installments are capped at the new total so the
    /// contiguous-prefix invariant survives a reduced installment count
    pub fn validate_update(&self, existing: &Rental) -> Result<Rental> {
        let carried_paid = existing
            .payment_info
            .paid_installments
            .min(self.total_installments);
        let mut rental = self.build(existing.id.clone(), carried_paid)?;
        rental.payments = existing.payments.clone();
        Ok(rental)
    }

    fn build(&self, id: RentalId, paid_installments: u32) -> Result<Rental> {
        let client = self.client.trim();
        if client.is_empty() {
            return Err(RentalError::EmptyClientName);
        }

        let period = match (self.start, self.end) {
            (Some(start), Some(end)) => DateRange::new(start, end)?,
            _ => return Err(RentalError::MissingPeriod),
        };

        if self.items.is_empty() {
            return Err(RentalError::NoItemsSelected);
        }
        for quantity in self.items.values() {
            if *quantity < 1 {
                return Err(RentalError::InvalidQuantity {
                    quantity: *quantity as i64,
                });
            }
        }

        if self.discount.is_negative() {
            return Err(RentalError::InvalidAmount {
                amount: self.discount,
            });
        }
        if self.machine_fee.is_negative() {
            return Err(RentalError::InvalidAmount {
                amount: self.machine_fee,
            });
        }

        let payment_info = PaymentInfo::new(self.total_installments, paid_installments)?;

        let address = self
            .address
            .as_ref()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        Ok(Rental {
            id,
            client: client.to_string(),
            address,
            period,
            items: self.items.clone(),
            discount: self.discount,
            machine_fee: self.machine_fee,
            payment_info,
            payments: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_rental_draft() -> RentalDraft {
        RentalDraft {
            client: "  Maria Silva  ".to_string(),
            address: Some("Rua das Flores 45".to_string()),
            start: Some(date(2024, 5, 1)),
            end: Some(date(2024, 5, 3)),
            items: BTreeMap::from([(ProductId::new("p1"), 2)]),
            discount: Money::ZERO,
            machine_fee: Money::ZERO,
            total_installments: 3,
        }
    }

    #[test]
    fn test_product_draft_rules() {
        let draft = ProductDraft {
            name: "  Scaffold ".to_string(),
            quantity: 10,
            price: Money::from_major(50),
        };
        let product = draft.validate().unwrap();
        assert_eq!(product.name, "Scaffold");
        assert_eq!(product.quantity, 10);

        assert!(matches!(
            ProductDraft { name: "  ".to_string(), ..draft.clone() }.validate(),
            Err(RentalError::EmptyProductName)
        ));
        assert!(matches!(
            ProductDraft { quantity: 0, ..draft.clone() }.validate(),
            Err(RentalError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            ProductDraft { price: Money::ZERO, ..draft }.validate(),
            Err(RentalError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_rental_draft_accepts_valid_input() {
        let rental = valid_rental_draft().validate().unwrap();
        assert_eq!(rental.client, "Maria Silva");
        assert_eq!(rental.payment_info.total_installments, 3);
        assert_eq!(rental.payment_info.paid_installments, 0);
        assert_eq!(rental.period.days(), 3);
    }

    #[test]
    fn test_rental_draft_requires_period() {
        let mut draft = valid_rental_draft();
        draft.end = None;
        assert!(matches!(draft.validate(), Err(RentalError::MissingPeriod)));

        let mut draft = valid_rental_draft();
        draft.start = Some(date(2024, 5, 9));
        assert!(matches!(
            draft.validate(),
            Err(RentalError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_rental_draft_requires_items() {
        let mut draft = valid_rental_draft();
        draft.items.clear();
        assert!(matches!(draft.validate(), Err(RentalError::NoItemsSelected)));

        let mut draft = valid_rental_draft();
        draft.items.insert(ProductId::new("p2"), 0);
        assert!(matches!(
            draft.validate(),
            Err(RentalError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_rental_draft_rejects_negative_adjustments() {
        let mut draft = valid_rental_draft();
        draft.discount = Money::from_major(-5);
        assert!(matches!(draft.validate(), Err(RentalError::InvalidAmount { .. })));

        let mut draft = valid_rental_draft();
        draft.machine_fee = Money::from_major(-1);
        assert!(matches!(draft.validate(), Err(RentalError::InvalidAmount { .. })));
    }

    #[test]
    fn test_update_carries_payment_progress() {
        let mut existing = valid_rental_draft().validate().unwrap();
        existing.payment_info = PaymentInfo::new(3, 2).unwrap();

        let updated = valid_rental_draft().validate_update(&existing).unwrap();
        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.payment_info.paid_installments, 2);
    }

    #[test]
    fn test_update_caps_paid_at_new_total() {
        let mut existing = valid_rental_draft().validate().unwrap();
        existing.payment_info = PaymentInfo::new(3, 3).unwrap();

        let mut draft = valid_rental_draft();
        draft.total_installments = 2;

        let updated = draft.validate_update(&existing).unwrap();
        assert_eq!(updated.payment_info.total_installments, 2);
        assert_eq!(updated.payment_info.paid_installments, 2);
    }

    #[test]
    fn test_blank_address_becomes_none() {
        let mut draft = valid_rental_draft();
        draft.address = Some("   ".to_string());
        let rental = draft.validate().unwrap();
        assert!(rental.address.is_none());
    }
}
