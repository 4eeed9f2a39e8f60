pub mod availability;
pub mod billing;
pub mod decimal;
pub mod documents;
pub mod errors;
pub mod events;
pub mod snapshot;
pub mod types;
pub mod validation;

// re-export key types
pub use availability::{available_stock, AvailabilityReport};
pub use billing::{
    financial_summary, rental_financials, rental_status, CompanyProfile, FinancialSummary,
    InstallmentPlan, Receipt, ReceiptLine, RentalFinancials, ToggleAction,
};
pub use decimal::Money;
pub use documents::{ProductDocument, RentalDocument};
pub use errors::{RentalError, Result};
pub use events::{Event, EventStore};
pub use snapshot::{Product, ProductIndex, Rental, Snapshot};
pub use types::{
    DateRange, PaymentEntry, PaymentInfo, ProductId, RentalId, RentalStatus,
};
pub use validation::{ProductDraft, RentalDraft};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
