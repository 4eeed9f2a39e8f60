/// quick start - minimal example to get started
use rental_ledger::chrono::NaiveDate;
use rental_ledger::{
    available_stock, rental_financials, DateRange, Money, ProductDraft, RentalDraft, Snapshot,
};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // register a product
    let scaffold = ProductDraft {
        name: "Scaffold tower".to_string(),
        quantity: 10,
        price: Money::from_major(50),
    }
    .validate()?;

    // book 4 of them for the first week of january
    let rental = RentalDraft {
        client: "Maria Silva".to_string(),
        address: None,
        start: NaiveDate::from_ymd_opt(2024, 1, 1),
        end: NaiveDate::from_ymd_opt(2024, 1, 5),
        items: BTreeMap::from([(scaffold.id.clone(), 4)]),
        discount: Money::ZERO,
        machine_fee: Money::ZERO,
        total_installments: 2,
    }
    .validate()?;

    let snapshot = Snapshot::new(vec![scaffold.clone()], vec![rental.clone()]);

    // how many are left for an overlapping candidate period?
    let candidate = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
    )?;
    let available = available_stock(&snapshot, &scaffold.id, Some(candidate), None);
    println!("available {candidate}: {available}");

    // what does the rental cost?
    let financials = rental_financials(&rental, &snapshot.product_index());
    println!("total: {}", financials.final_price);
    println!("per installment: {}", financials.installment_value);

    Ok(())
}
