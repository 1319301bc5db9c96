//! Payment domain models.
//!
//! Payments are modeled for reservation bookkeeping only; the payment
//! workflow itself lives outside this core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    BankTransfer,
    InAppWallet,
    Cash,
}

/// A payment recorded against a reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Payment {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub method: PaymentMethod,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}
