use crate::entities::{Delivery, Warehouse};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Trims the string and drops it if nothing remains.
pub fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

#[derive(Debug, Error)]
pub enum WarehouseInvalidation {
    #[error("The address must not be empty")]
    Address,
    #[error("The capacity must not be negative")]
    Capacity,
    #[error("The expiry date is before the stored date")]
    ExpiryBeforeStored,
}

impl Validate for Warehouse {
    type Error = WarehouseInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_blank(&self.address) {
            return Err(Self::Error::Address);
        }
        if self.capacity.is_nan() || self.capacity < 0.0 {
            return Err(Self::Error::Capacity);
        }
        if self.expiry_date < self.stored_date {
            return Err(Self::Error::ExpiryBeforeStored);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum DeliveryInvalidation {
    #[error("The dropoff time is before the pickup time")]
    DropoffBeforePickup,
}

impl Validate for Delivery {
    type Error = DeliveryInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.dropoff_time < self.pickup_time {
            return Err(Self::Error::DropoffBeforePickup);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodbridge_entities::builders::*;

    #[test]
    fn blank_strings() {
        assert!(is_blank(" \t"));
        assert!(!is_blank(" x "));
        assert_eq!(None, non_blank(Some("  ".into())));
        assert_eq!(Some("x".to_string()), non_blank(Some(" x ".into())));
    }

    #[test]
    fn negative_capacity() {
        let w = Warehouse::build().address("Dock 1").capacity(-1.0).finish();
        assert!(matches!(w.validate(), Err(WarehouseInvalidation::Capacity)));
        let w = Warehouse::build().address("Dock 1").capacity(10.0).finish();
        assert!(w.validate().is_ok());
    }

    #[test]
    fn dropoff_before_pickup() {
        let mut d = Delivery::build().finish();
        assert!(d.validate().is_ok());
        d.dropoff_time = d.pickup_time.checked_add(time::Duration::hours(-1)).unwrap();
        assert!(d.validate().is_err());
    }
}
