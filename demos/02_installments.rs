/// installments - boundary-only toggling with emitted events
use rental_ledger::billing::installments;
use rental_ledger::chrono::NaiveDate;
use rental_ledger::{DateRange, EventStore, Money, PaymentInfo, ProductId, Rental, RentalId};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rental = Rental {
        id: RentalId::new("r1"),
        client: "Maria Silva".to_string(),
        address: None,
        period: DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        )?,
        items: BTreeMap::from([(ProductId::new("scaffold"), 2)]),
        discount: Money::ZERO,
        machine_fee: Money::ZERO,
        payment_info: PaymentInfo::new(4, 1)?,
        payments: Vec::new(),
    };

    let mut events = EventStore::new();

    // paying installment 2 advances the prefix
    if let Some(info) = installments::apply_click(&rental, 2, &mut events) {
        println!("paid installments now {}", info.paid_installments);
    }

    // installment 4 is not adjacent, so the click is ignored
    if installments::apply_click(&rental, 4, &mut events).is_none() {
        println!("click on installment 4 ignored");
    }

    // undoing installment 1 retreats the prefix
    if let Some(info) = installments::apply_click(&rental, 1, &mut events) {
        println!("paid installments now {}", info.paid_installments);
    }

    for event in events.take_events() {
        println!("event: {event:?}");
    }

    Ok(())
}
