//! Customer identity record

use std::fmt;

use serde::Serialize;

/// A registered customer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    customer_id: u32,
    customer_name: String,
}

impl Customer {
    pub fn new(customer_id: u32, customer_name: impl Into<String>) -> Self {
        Self {
            customer_id,
            customer_name: customer_name.into(),
        }
    }

    pub fn customer_id(&self) -> u32 {
        self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| {} | {} |", self.customer_id, self.customer_name)
    }
}
