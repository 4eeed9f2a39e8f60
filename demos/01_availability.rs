/// availability - candidate periods, self-exclusion on edit, over-booking
use rental_ledger::chrono::NaiveDate;
use rental_ledger::{availability, DateRange, Money, Product, ProductId, Snapshot};
use rental_ledger::{PaymentInfo, Rental, RentalId};
use std::collections::BTreeMap;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mixer_id = ProductId::new("mixer");
    let mixer = Product {
        id: mixer_id.clone(),
        name: "Concrete mixer".to_string(),
        quantity: 3,
        price: Money::from_major(80),
    };

    let booked = Rental {
        id: RentalId::new("r1"),
        client: "Construtora Horizonte".to_string(),
        address: None,
        period: DateRange::new(date(2024, 2, 1), date(2024, 2, 10))?,
        items: BTreeMap::from([(mixer_id.clone(), 2)]),
        discount: Money::ZERO,
        machine_fee: Money::ZERO,
        payment_info: PaymentInfo::single(),
        payments: Vec::new(),
    };

    let snapshot = Snapshot::new(vec![mixer], vec![booked]);

    // no dates picked yet: raw stock
    let raw = availability::available_stock(&snapshot, &mixer_id, None, None);
    println!("no dates selected: {raw}");

    // overlapping candidate
    let candidate = DateRange::new(date(2024, 2, 5), date(2024, 2, 12))?;
    let overlapping = availability::available_stock(&snapshot, &mixer_id, Some(candidate), None);
    println!("overlapping {candidate}: {overlapping}");

    // editing r1 itself: its own reservation does not count
    let editing = availability::available_stock(
        &snapshot,
        &mixer_id,
        Some(candidate),
        Some(&RentalId::new("r1")),
    );
    println!("editing r1: {editing}");

    // full report, including the over-booked case
    let report = availability::check(&snapshot, &mixer_id, Some(candidate), None);
    println!(
        "total {} reserved {} available {} overbooked {}",
        report.total, report.reserved, report.available, report.is_overbooked
    );

    Ok(())
}
