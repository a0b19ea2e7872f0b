//! Delivery receipt reported back by the messaging service.
//!
//! The messaging service consumes confirmation-code dispatches from its
//! queue, sends the SMS, and emits one of these receipts to this service's
//! queue. Field names on the wire keep the historical camelCase keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Correlation metadata carried through the messaging round-trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceiptExtras {
    /// Identifier of the confirmation code the SMS carried
    #[serde(rename = "confirmationCodeID")]
    pub confirmation_code_id: Uuid,
}

/// Asynchronous delivery outcome for a dispatched confirmation code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Correlation metadata echoed back by the messaging service
    pub extras: DeliveryReceiptExtras,

    /// Message identifier assigned by the messaging provider
    #[serde(rename = "messageID")]
    pub message_id: String,

    /// When the SMS was sent
    #[serde(rename = "timeSent")]
    pub time_sent: DateTime<Utc>,

    /// Whether the SMS was actually sent
    #[serde(rename = "messageSent")]
    pub message_sent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_round_trip() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"extras":{{"confirmationCodeID":"{}"}},"messageID":"m-1","timeSent":"2024-03-01T09:30:00Z","messageSent":true}}"#,
            id
        );

        let receipt: DeliveryReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt.extras.confirmation_code_id, id);
        assert_eq!(receipt.message_id, "m-1");
        assert!(receipt.message_sent);

        let back = serde_json::to_string(&receipt).unwrap();
        assert!(back.contains("confirmationCodeID"));
        assert!(back.contains("messageID"));
        assert!(back.contains("timeSent"));
    }
}
