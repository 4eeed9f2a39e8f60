use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{ProductId, RentalId};

/// domain events describing the writes staged against the external store.
///
/// The core performs no I/O; operations record what happened here and the
/// host drains the store and forwards each event to the managed backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // product lifecycle
    ProductAdded {
        product_id: ProductId,
        name: String,
    },
    ProductUpdated {
        product_id: ProductId,
    },
    ProductDeleted {
        product_id: ProductId,
    },

    // rental lifecycle
    RentalCreated {
        rental_id: RentalId,
        client: String,
    },
    RentalUpdated {
        rental_id: RentalId,
    },
    RentalDeleted {
        rental_id: RentalId,
    },

    // installment progression
    InstallmentPaid {
        rental_id: RentalId,
        installment: u32,
        paid_installments: u32,
    },
    InstallmentReverted {
        rental_id: RentalId,
        installment: u32,
        paid_installments: u32,
    },

    // explicit payment log
    PaymentLogged {
        rental_id: RentalId,
        amount: Money,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
