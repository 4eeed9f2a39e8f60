//! Wire-shaped models of the external store's documents.
//!
//! The managed document store delivers camelCase JSON with loosely typed
//! numbers and optional fields. Decoding is tolerant: missing adjustments
//! default to zero, a missing payment block means a single unpaid
//! installment, and out-of-range numerics are clamped rather than rejected.
//! Only malformed dates fail a document outright.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::decimal::Money;
use crate::errors::{RentalError, Result};
use crate::snapshot::{Product, Rental};
use crate::types::{DateRange, PaymentEntry, PaymentInfo, ProductId, RentalId};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// product document as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub price: f64,
}

impl ProductDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RentalError::InvalidDocument {
            message: e.to_string(),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RentalError::InvalidDocument {
            message: e.to_string(),
        })
    }

    /// decode into a domain product under the store-assigned id
    pub fn decode(&self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name.clone(),
            quantity: if self.quantity.is_finite() && self.quantity > 0.0 {
                self.quantity as u32
            } else {
                0
            },
            price: Money::from_f64(self.price).max(Money::ZERO),
        }
    }

    pub fn encode(product: &Product) -> Self {
        use rust_decimal::prelude::ToPrimitive;
        ProductDocument {
            name: product.name.clone(),
            quantity: product.quantity as f64,
            price: product.price.as_decimal().to_f64().unwrap_or(0.0),
        }
    }
}

/// nested installment block on a rental document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfoDocument {
    #[serde(default = "default_total_installments")]
    pub total_installments: i64,
    #[serde(default)]
    pub paid_installments: i64,
}

fn default_total_installments() -> i64 {
    1
}

impl Default for PaymentInfoDocument {
    fn default() -> Self {
        PaymentInfoDocument {
            total_installments: 1,
            paid_installments: 0,
        }
    }
}

/// one entry of the explicit payment log
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEntryDocument {
    #[serde(default)]
    pub amount: f64,
}

/// rental document as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RentalDocument {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub address: Option<String>,
    pub date: String,
    pub return_date: String,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub machine_fee: f64,
    #[serde(default)]
    pub items: BTreeMap<String, i64>,
    #[serde(default)]
    pub payment_info: PaymentInfoDocument,
    #[serde(default)]
    pub payments: Vec<PaymentEntryDocument>,
}

impl RentalDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RentalError::InvalidDocument {
            message: e.to_string(),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RentalError::InvalidDocument {
            message: e.to_string(),
        })
    }

    /// decode into a domain rental under the store-assigned id
    pub fn decode(&self, id: RentalId) -> Result<Rental> {
        let start = parse_date(&self.date)?;
        let end = parse_date(&self.return_date)?;
        let period = DateRange::new(start, end)?;

        // zero and negative quantities carry no reservation
        let items: BTreeMap<ProductId, u32> = self
            .items
            .iter()
            .filter(|(_, quantity)| **quantity >= 1)
            .map(|(product_id, quantity)| (ProductId::new(product_id.clone()), *quantity as u32))
            .collect();

        let total = self.payment_info.total_installments.max(1) as u32;
        let paid = self.payment_info.paid_installments.clamp(0, total as i64) as u32;

        Ok(Rental {
            id,
            client: self.client.clone(),
            address: self.address.clone(),
            period,
            items,
            discount: Money::from_f64(self.discount).max(Money::ZERO),
            machine_fee: Money::from_f64(self.machine_fee).max(Money::ZERO),
            payment_info: PaymentInfo::new(total, paid)?,
            payments: self
                .payments
                .iter()
                .map(|p| PaymentEntry::new(Money::from_f64(p.amount).max(Money::ZERO)))
                .collect(),
        })
    }

    pub fn encode(rental: &Rental) -> Self {
        use rust_decimal::prelude::ToPrimitive;
        RentalDocument {
            client: rental.client.clone(),
            address: rental.address.clone(),
            date: rental.period.start.format(DATE_FORMAT).to_string(),
            return_date: rental.period.end.format(DATE_FORMAT).to_string(),
            discount: rental.discount.as_decimal().to_f64().unwrap_or(0.0),
            machine_fee: rental.machine_fee.as_decimal().to_f64().unwrap_or(0.0),
            items: rental
                .items
                .iter()
                .map(|(product_id, quantity)| (product_id.as_str().to_string(), *quantity as i64))
                .collect(),
            payment_info: PaymentInfoDocument {
                total_installments: rental.payment_info.total_installments as i64,
                paid_installments: rental.payment_info.paid_installments as i64,
            },
            payments: rental
                .payments
                .iter()
                .map(|p| PaymentEntryDocument {
                    amount: p.amount.as_decimal().to_f64().unwrap_or(0.0),
                })
                .collect(),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| RentalError::InvalidDocument {
        message: format!("unparseable date: {value:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_rental_document() {
        let json = r#"{
            "client": "Maria Silva",
            "address": "Rua das Flores 45",
            "date": "2024-01-01",
            "returnDate": "2024-01-05",
            "discount": 200.0,
            "machineFee": 50.0,
            "items": { "scaffold": 4, "mixer": 1 },
            "paymentInfo": { "totalInstallments": 4, "paidInstallments": 2 },
            "payments": [ { "amount": 212.5 } ]
        }"#;

        let doc = RentalDocument::from_json(json).unwrap();
        let rental = doc.decode(RentalId::new("r1")).unwrap();

        assert_eq!(rental.client, "Maria Silva");
        assert_eq!(rental.period.days(), 5);
        assert_eq!(rental.reserved_quantity(&ProductId::new("scaffold")), 4);
        assert_eq!(rental.discount, Money::from_major(200));
        assert_eq!(rental.machine_fee, Money::from_major(50));
        assert_eq!(rental.payment_info.total_installments, 4);
        assert_eq!(rental.payment_info.paid_installments, 2);
        assert_eq!(rental.logged_payments(), Money::from_str_exact("212.50").unwrap());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let json = r#"{
            "client": "João",
            "date": "2024-02-10",
            "returnDate": "2024-02-11",
            "items": { "ladder": 1 }
        }"#;

        let rental = RentalDocument::from_json(json)
            .unwrap()
            .decode(RentalId::new("r1"))
            .unwrap();

        assert_eq!(rental.discount, Money::ZERO);
        assert_eq!(rental.machine_fee, Money::ZERO);
        assert_eq!(rental.payment_info, PaymentInfo::single());
        assert!(rental.payments.is_empty());
        assert!(rental.address.is_none());
    }

    #[test]
    fn test_bad_date_fails_the_document() {
        let json = r#"{
            "client": "João",
            "date": "01/02/2024",
            "returnDate": "2024-02-11",
            "items": {}
        }"#;

        let result = RentalDocument::from_json(json)
            .unwrap()
            .decode(RentalId::new("r1"));
        assert!(matches!(result, Err(RentalError::InvalidDocument { .. })));
    }

    #[test]
    fn test_out_of_range_numbers_are_clamped() {
        let json = r#"{
            "client": "João",
            "date": "2024-02-10",
            "returnDate": "2024-02-11",
            "items": { "ladder": 2, "broken": 0, "negative": -3 },
            "paymentInfo": { "totalInstallments": 0, "paidInstallments": 9 }
        }"#;

        let rental = RentalDocument::from_json(json)
            .unwrap()
            .decode(RentalId::new("r1"))
            .unwrap();

        assert_eq!(rental.items.len(), 1);
        assert_eq!(rental.payment_info.total_installments, 1);
        assert_eq!(rental.payment_info.paid_installments, 1);
    }

    #[test]
    fn test_product_document_round_trip() {
        let product = Product {
            id: ProductId::new("p1"),
            name: "Scaffold tower".to_string(),
            quantity: 10,
            price: Money::from_str_exact("50.50").unwrap(),
        };

        let doc = ProductDocument::encode(&product);
        let back = doc.decode(ProductId::new("p1"));
        assert_eq!(back, product);
    }

    #[test]
    fn test_negative_product_numbers_degrade_to_zero() {
        let doc = ProductDocument {
            name: "Ladder".to_string(),
            quantity: -4.0,
            price: -10.0,
        };
        let product = doc.decode(ProductId::new("p1"));
        assert_eq!(product.quantity, 0);
        assert_eq!(product.price, Money::ZERO);
    }

    #[test]
    fn test_rental_document_round_trip() {
        let json = r#"{
            "client": "Maria",
            "date": "2024-01-01",
            "returnDate": "2024-01-05",
            "discount": 10.0,
            "items": { "scaffold": 2 },
            "paymentInfo": { "totalInstallments": 2, "paidInstallments": 1 }
        }"#;

        let rental = RentalDocument::from_json(json)
            .unwrap()
            .decode(RentalId::new("r1"))
            .unwrap();
        let doc = RentalDocument::encode(&rental);
        let back = doc.decode(RentalId::new("r1")).unwrap();
        assert_eq!(back, rental);
    }
}
