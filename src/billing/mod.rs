pub mod financials;
pub mod installments;
pub mod receipt;

pub use financials::{
    financial_summary, rental_financials, rental_status, FinancialSummary, RentalFinancials,
};
pub use installments::{apply_click, InstallmentPlan, ToggleAction};
pub use receipt::{CompanyProfile, Receipt, ReceiptLine};
