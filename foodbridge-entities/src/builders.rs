pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{delivery_builder::*, donation_builder::*, warehouse_builder::*};

pub mod donation_builder {

    use super::*;
    use crate::{donation::*, id::*, time::*};

    #[derive(Debug)]
    pub struct DonationBuild {
        donation: Donation,
    }

    impl DonationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.donation.id = id.into();
            self
        }
        pub fn restaurant(mut self, restaurant_id: &str) -> Self {
            self.donation.restaurant_id = restaurant_id.into();
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.donation.description = description.into();
            self
        }
        pub fn quantity(mut self, quantity: u32) -> Self {
            self.donation.quantity = quantity;
            self
        }
        pub fn donated_at(mut self, rfc3339: &str) -> Self {
            self.donation.donated_at = Timestamp::parse_rfc3339(rfc3339).unwrap();
            self
        }
        pub fn status(mut self, status: bool) -> Self {
            self.donation.status = status;
            self
        }
        pub fn finish(self) -> Donation {
            self.donation
        }
    }

    impl Builder for Donation {
        type Build = DonationBuild;
        fn build() -> DonationBuild {
            DonationBuild {
                donation: Donation {
                    id: Id::new_short(),
                    restaurant_id: "".into(),
                    description: "".into(),
                    quantity: 1,
                    donated_at: Timestamp::now(),
                    status: false,
                },
            }
        }
    }
}

pub mod warehouse_builder {

    use super::*;
    use crate::{id::*, time::*, warehouse::*};

    #[derive(Debug)]
    pub struct WarehouseBuild {
        warehouse: Warehouse,
    }

    impl WarehouseBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.warehouse.id = id.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.warehouse.address = address.into();
            self
        }
        pub fn capacity(mut self, capacity: f64) -> Self {
            self.warehouse.capacity = capacity;
            self
        }
        pub fn finish(self) -> Warehouse {
            self.warehouse
        }
    }

    impl Builder for Warehouse {
        type Build = WarehouseBuild;
        fn build() -> Self::Build {
            let today = today();
            WarehouseBuild {
                warehouse: Warehouse {
                    id: Id::new_short(),
                    address: "".into(),
                    capacity: 0.0,
                    stored_date: today,
                    expiry_date: today,
                },
            }
        }
    }
}

pub mod delivery_builder {

    use super::*;
    use crate::{delivery::*, id::*, time::*};

    #[derive(Debug)]
    pub struct DeliveryBuild {
        delivery: Delivery,
    }

    impl DeliveryBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.delivery.id = id.into();
            self
        }
        pub fn status(mut self, status: DeliveryStatus) -> Self {
            self.delivery.status = status;
            self
        }
        pub fn request_item(mut self, id: &str) -> Self {
            self.delivery.request_item_id = Some(id.into());
            self
        }
        pub fn warehouse(mut self, id: &str) -> Self {
            self.delivery.warehouse_id = Some(id.into());
            self
        }
        pub fn community(mut self, id: &str) -> Self {
            self.delivery.community_id = Some(id.into());
            self
        }
        pub fn donation(mut self, id: &str) -> Self {
            self.delivery.donation_id = Some(id.into());
            self
        }
        pub fn finish(self) -> Delivery {
            self.delivery
        }
    }

    impl Builder for Delivery {
        type Build = DeliveryBuild;
        fn build() -> Self::Build {
            let now = Timestamp::now();
            DeliveryBuild {
                delivery: Delivery {
                    id: Id::new_short(),
                    delivery_type: DeliveryType::Distribution,
                    pickup_location_type: PickupLocationType::Warehouse,
                    dropoff_location_type: DropoffLocationType::Community,
                    pickup_time: now,
                    dropoff_time: now,
                    status: DeliveryStatus::default(),
                    notes: "".into(),
                    delivered_quantity: None,
                    request_item_id: None,
                    warehouse_id: None,
                    staff_user_id: None,
                    donation_id: None,
                    community_id: None,
                },
            }
        }
    }

    #[test]
    fn new_deliveries_are_pending() {
        let delivery = Delivery::build().finish();
        assert_eq!(DeliveryStatus::Pending, delivery.status);
        assert!(delivery.pickup_time <= delivery.dropoff_time);
    }
}
