/// receipt - day-multiplied line amounts and the explicit payment log
use rental_ledger::chrono::NaiveDate;
use rental_ledger::{
    CompanyProfile, DateRange, Money, PaymentEntry, PaymentInfo, Product, ProductId, Receipt,
    Rental, RentalId, SafeTimeProvider, Snapshot, TimeSource,
};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scaffold_id = ProductId::new("scaffold");
    let snapshot = Snapshot::new(
        vec![Product {
            id: scaffold_id.clone(),
            name: "Scaffold tower".to_string(),
            quantity: 10,
            price: Money::from_major(50),
        }],
        Vec::new(),
    );

    let rental = Rental {
        id: RentalId::new("r1"),
        client: "Maria Silva".to_string(),
        address: Some("Rua das Flores 45".to_string()),
        period: DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )?,
        items: BTreeMap::from([(scaffold_id, 2)]),
        discount: Money::from_major(50),
        machine_fee: Money::ZERO,
        payment_info: PaymentInfo::new(2, 1)?,
        payments: vec![PaymentEntry::new(Money::from_major(225))],
    };

    let company = CompanyProfile {
        name: "Riverside Rentals".to_string(),
        address: "12 Harbor Road".to_string(),
        phone: "(16) 99999-0000".to_string(),
    };

    let time = SafeTimeProvider::new(TimeSource::System);

    let receipt = Receipt::build(&rental, &snapshot.product_index(), &company, &time);
    println!("{}", receipt.to_json_pretty()?);

    Ok(())
}
