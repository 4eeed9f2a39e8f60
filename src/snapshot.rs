use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::decimal::Money;
use crate::errors::{RentalError, Result};
use crate::types::{DateRange, PaymentEntry, PaymentInfo, ProductId, RentalId};

/// product in the operator's inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// total owned stock
    pub quantity: u32,
    /// unit price per day
    pub price: Money,
}

/// rental of one or more products by a client over a date interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: RentalId,
    pub client: String,
    pub address: Option<String>,
    pub period: DateRange,
    /// product id to reserved quantity; ordered so views render deterministically
    pub items: BTreeMap<ProductId, u32>,
    pub discount: Money,
    pub machine_fee: Money,
    pub payment_info: PaymentInfo,
    /// explicit payment log, consumed by receipt generation
    pub payments: Vec<PaymentEntry>,
}

impl Rental {
    /// quantity of a product reserved by this rental, zero when absent
    pub fn reserved_quantity(&self, product_id: &ProductId) -> u32 {
        self.items.get(product_id).copied().unwrap_or(0)
    }

    pub fn contains_product(&self, product_id: &ProductId) -> bool {
        self.items.contains_key(product_id)
    }

    /// sum of the explicit payment log
    pub fn logged_payments(&self) -> Money {
        self.payments.iter().map(|p| p.amount).sum()
    }
}

/// index over products for id lookups during financial computation
#[derive(Debug, Clone, Default)]
pub struct ProductIndex {
    by_id: BTreeMap<ProductId, Product>,
}

impl ProductIndex {
    pub fn from_products(products: &[Product]) -> Self {
        ProductIndex {
            by_id: products
                .iter()
                .map(|p| (p.id.clone(), p.clone()))
                .collect(),
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// complete, internally consistent view of both collections at a point in time.
///
/// The external store delivers the full product and rental sets on every
/// change; each delivery replaces the previous collection wholesale, so a
/// reader never observes a partially applied update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    products: Vec<Product>,
    rentals: Vec<Rental>,
}

impl Snapshot {
    pub fn new(products: Vec<Product>, rentals: Vec<Rental>) -> Self {
        Snapshot { products, rentals }
    }

    pub fn empty() -> Self {
        Snapshot::default()
    }

    /// replace the product collection with a fresh delivery
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// replace the rental collection with a fresh delivery
    pub fn replace_rentals(&mut self, rentals: Vec<Rental>) {
        self.rentals = rentals;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn rental(&self, id: &RentalId) -> Option<&Rental> {
        self.rentals.iter().find(|r| &r.id == id)
    }

    pub fn product_index(&self) -> ProductIndex {
        ProductIndex::from_products(&self.products)
    }

    /// whether any rental references the product
    pub fn product_in_use(&self, id: &ProductId) -> bool {
        self.rentals.iter().any(|r| r.contains_product(id))
    }

    /// deletion policy: a product referenced by any rental may not be removed
    pub fn ensure_product_deletable(&self, id: &ProductId) -> Result<()> {
        if self.product_in_use(id) {
            return Err(RentalError::ProductInUse { id: id.clone() });
        }
        Ok(())
    }

    /// filter rentals by client-name substring or formatted start date;
    /// an empty term matches everything
    pub fn search_rentals(&self, term: &str) -> Vec<&Rental> {
        let needle = term.trim().to_lowercase();
        self.rentals
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.client.to_lowercase().contains(&needle)
                    || r.period.start.format("%d/%m/%Y").to_string().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn product(id: &str, quantity: u32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product {id}"),
            quantity,
            price: Money::from_major(price),
        }
    }

    fn rental(id: &str, client: &str, items: &[(&str, u32)]) -> Rental {
        Rental {
            id: RentalId::new(id),
            client: client.to_string(),
            address: None,
            period: DateRange::new(date(2024, 3, 10), date(2024, 3, 12)).unwrap(),
            items: items
                .iter()
                .map(|(pid, qty)| (ProductId::new(*pid), *qty))
                .collect(),
            discount: Money::ZERO,
            machine_fee: Money::ZERO,
            payment_info: PaymentInfo::single(),
            payments: Vec::new(),
        }
    }

    #[test]
    fn test_wholesale_replacement() {
        let mut snapshot = Snapshot::empty();
        snapshot.replace_products(vec![product("p1", 5, 10)]);
        snapshot.replace_products(vec![product("p2", 3, 20), product("p3", 1, 5)]);

        // second delivery fully supersedes the first
        assert_eq!(snapshot.products().len(), 2);
        assert!(snapshot.product(&ProductId::new("p1")).is_none());
    }

    #[test]
    fn test_product_index_lookup() {
        let snapshot = Snapshot::new(vec![product("p1", 5, 10)], Vec::new());
        let index = snapshot.product_index();
        assert!(index.contains(&ProductId::new("p1")));
        assert!(index.get(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_deletion_policy() {
        let snapshot = Snapshot::new(
            vec![product("p1", 5, 10), product("p2", 2, 15)],
            vec![rental("r1", "Ana", &[("p1", 2)])],
        );

        assert!(snapshot.ensure_product_deletable(&ProductId::new("p1")).is_err());
        assert!(snapshot.ensure_product_deletable(&ProductId::new("p2")).is_ok());
    }

    #[test]
    fn test_search_by_client_and_date() {
        let snapshot = Snapshot::new(
            Vec::new(),
            vec![
                rental("r1", "Maria Silva", &[("p1", 1)]),
                rental("r2", "João Souza", &[("p1", 1)]),
            ],
        );

        assert_eq!(snapshot.search_rentals("maria").len(), 1);
        assert_eq!(snapshot.search_rentals("10/03/2024").len(), 2);
        assert_eq!(snapshot.search_rentals("").len(), 2);
        assert_eq!(snapshot.search_rentals("nobody").len(), 0);
    }

    #[test]
    fn test_reserved_quantity_defaults_to_zero() {
        let r = rental("r1", "Ana", &[("p1", 4)]);
        assert_eq!(r.reserved_quantity(&ProductId::new("p1")), 4);
        assert_eq!(r.reserved_quantity(&ProductId::new("p9")), 0);
    }
}
