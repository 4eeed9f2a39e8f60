//! Installment toggle state machine.
//!
//! Paid installments form a contiguous prefix: only the next unpaid
//! installment can be marked paid, and only the most recent payment can be
//! undone. Clicks anywhere else are ignored, which keeps the history gap-free.

use serde::{Deserialize, Serialize};

use crate::events::{Event, EventStore};
use crate::snapshot::Rental;
use crate::types::PaymentInfo;

/// outcome of clicking an installment circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleAction {
    /// mark installment `installment` paid, advancing the prefix
    Pay { installment: u32 },
    /// undo the payment of installment `installment`, retreating the prefix
    Undo { installment: u32 },
    /// non-adjacent index, no state change
    Ignored,
}

/// installment progression for one rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    info: PaymentInfo,
}

impl InstallmentPlan {
    pub fn new(info: PaymentInfo) -> Self {
        InstallmentPlan { info }
    }

    pub fn info(&self) -> PaymentInfo {
        self.info
    }

    pub fn total_installments(&self) -> u32 {
        self.info.total_installments
    }

    pub fn paid_installments(&self) -> u32 {
        self.info.paid_installments
    }

    /// whether a click on `installment` (1-based) would change state;
    /// the rendering layer disables every other circle
    pub fn is_clickable(&self, installment: u32) -> bool {
        !matches!(self.click(installment), ToggleAction::Ignored)
    }

    /// resolve a click on `installment` (1-based) without applying it
    pub fn click(&self, installment: u32) -> ToggleAction {
        if installment < 1 || installment > self.info.total_installments {
            return ToggleAction::Ignored;
        }
        if installment == self.info.paid_installments + 1 {
            ToggleAction::Pay { installment }
        } else if installment == self.info.paid_installments {
            ToggleAction::Undo { installment }
        } else {
            ToggleAction::Ignored
        }
    }

    /// apply an action, returning the resulting payment info
    pub fn apply(&mut self, action: ToggleAction) -> PaymentInfo {
        match action {
            ToggleAction::Pay { installment } => {
                self.info.paid_installments = installment;
            }
            ToggleAction::Undo { installment } => {
                self.info.paid_installments = installment - 1;
            }
            ToggleAction::Ignored => {}
        }
        self.info
    }
}

/// resolve and apply a click against a rental's payment state.
///
/// Returns the payment info the host should write back to the store, or
/// `None` when the click was a no-op. The matching event is emitted so the
/// host can forward the change.
pub fn apply_click(rental: &Rental, installment: u32, events: &mut EventStore) -> Option<PaymentInfo> {
    let mut plan = InstallmentPlan::new(rental.payment_info);
    let action = plan.click(installment);

    match action {
        ToggleAction::Ignored => None,
        ToggleAction::Pay { installment } => {
            let info = plan.apply(action);
            events.emit(Event::InstallmentPaid {
                rental_id: rental.id.clone(),
                installment,
                paid_installments: info.paid_installments,
            });
            Some(info)
        }
        ToggleAction::Undo { installment } => {
            let info = plan.apply(action);
            events.emit(Event::InstallmentReverted {
                rental_id: rental.id.clone(),
                installment,
                paid_installments: info.paid_installments,
            });
            Some(info)
        }
    }
}
