/// json documents - decoding store deliveries into a snapshot
use rental_ledger::{
    financial_summary, ProductDocument, ProductId, RentalDocument, RentalId, Snapshot,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let product_json = r#"{ "name": "Scaffold tower", "quantity": 10, "price": 50.0 }"#;
    let rental_json = r#"{
        "client": "Maria Silva",
        "date": "2024-01-01",
        "returnDate": "2024-01-05",
        "discount": 200.0,
        "machineFee": 50.0,
        "items": { "scaffold-1": 10 },
        "paymentInfo": { "totalInstallments": 4, "paidInstallments": 2 }
    }"#;

    let product = ProductDocument::from_json(product_json)?.decode(ProductId::new("scaffold-1"));
    let rental = RentalDocument::from_json(rental_json)?.decode(RentalId::new("rental-1"))?;

    let mut snapshot = Snapshot::empty();
    snapshot.replace_products(vec![product]);
    snapshot.replace_rentals(vec![rental]);

    let summary = financial_summary(&snapshot);
    println!("revenue: {}", summary.total_revenue);
    println!("receivable: {}", summary.total_receivable);

    // encode back to the wire shape
    let doc = RentalDocument::encode(snapshot.rentals().first().unwrap());
    println!("{}", doc.to_json_pretty()?);

    Ok(())
}
