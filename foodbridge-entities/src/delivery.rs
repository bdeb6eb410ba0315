use strum::{Display, EnumIter, EnumString};

use crate::{id::Id, time::Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DeliveryType {
    Donation,
    Distribution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PickupLocationType {
    Restaurant,
    Warehouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DropoffLocationType {
    Warehouse,
    Community,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DeliveryStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Terminal states are never left again. Staying in the
    /// current state is always allowed.
    pub fn can_transition_to(self, next: Self) -> bool {
        use DeliveryStatus::*;
        if self == next {
            return true;
        }
        match (self, next) {
            (Pending, InTransit) | (Pending, Delivered) | (InTransit, Delivered) => true,
            (from, Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

/// A tracked transport leg from a pickup to a dropoff location.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub id                    : Id,
    pub delivery_type         : DeliveryType,
    pub pickup_location_type  : PickupLocationType,
    pub dropoff_location_type : DropoffLocationType,
    pub pickup_time           : Timestamp,
    pub dropoff_time          : Timestamp,
    pub status                : DeliveryStatus,
    pub notes                 : String,
    pub delivered_quantity    : Option<u32>,
    pub request_item_id       : Option<Id>,
    pub warehouse_id          : Option<Id>,
    pub staff_user_id         : Option<Id>,
    pub donation_id           : Option<Id>,
    pub community_id          : Option<Id>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use DeliveryStatus::*;

    #[test]
    fn parse_snake_case_status() {
        assert_eq!(DeliveryStatus::from_str("in_transit").unwrap(), InTransit);
        assert_eq!("in_transit", InTransit.to_string());
        assert!(DeliveryStatus::from_str("lost").is_err());
    }

    #[test]
    fn forward_transitions() {
        assert!(Pending.can_transition_to(InTransit));
        assert!(Pending.can_transition_to(Delivered));
        assert!(InTransit.can_transition_to(Delivered));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(InTransit.can_transition_to(Cancelled));
        assert!(!InTransit.can_transition_to(Pending));
    }

    #[test]
    fn terminal_states_are_final() {
        for next in DeliveryStatus::iter() {
            assert_eq!(next == Delivered, Delivered.can_transition_to(next));
            assert_eq!(next == Cancelled, Cancelled.can_transition_to(next));
        }
    }
}
