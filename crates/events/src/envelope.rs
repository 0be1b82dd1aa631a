use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drinkstock_core::InventoryId;

/// Journal entry wrapping one applied event.
///
/// `sequence_number` starts at 1 and increases by one per entry within an
/// inventory's journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    aggregate_id: InventoryId,
    aggregate_type: String,
    sequence_number: u64,
    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(
        event_id: Uuid,
        aggregate_id: InventoryId,
        aggregate_type: impl Into<String>,
        sequence_number: u64,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            aggregate_id,
            aggregate_type: aggregate_type.into(),
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn aggregate_id(&self) -> InventoryId {
        self.aggregate_id
    }

    pub fn aggregate_type(&self) -> &str {
        &self.aggregate_type
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_metadata_alongside_payload() {
        let id = InventoryId::from_uuid(Uuid::from_u128(1));
        let env = EventEnvelope::new(Uuid::from_u128(2), id, "inventory", 3, "payload".to_string());

        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(env.event_id(), Uuid::from_u128(2));
        assert_eq!(env.aggregate_id(), id);
        assert_eq!(json["aggregate_type"], "inventory");
        assert_eq!(json["sequence_number"], 3);
        assert_eq!(json["payload"], "payload");

        let back: EventEnvelope<String> = serde_json::from_value(json).unwrap();
        assert_eq!(back, env);
    }
}
