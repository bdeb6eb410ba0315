pub mod prelude {

    pub fn default_new_donation_request(community_name: &str) -> usecases::NewDonationRequest {
        usecases::NewDonationRequest {
            title: "Food for families".into(),
            community_id: None,
            community_name: Some(community_name.into()),
            recipient_address: "123 Main St".into(),
            expected_delivery: Timestamp::now(),
            people_count: 50,
            contact_phone: None,
            notes: None,
            status: false,
            items: vec![usecases::NewRequestItem {
                need_id: None,
                item: "Rice".into(),
                quantity: 20,
                urgency: Urgency::Normal,
            }],
        }
    }

    pub fn default_new_delivery() -> usecases::NewDelivery {
        let now = Timestamp::now();
        usecases::NewDelivery {
            delivery_type: DeliveryType::Distribution,
            pickup_location_type: PickupLocationType::Warehouse,
            dropoff_location_type: DropoffLocationType::Community,
            pickup_time: now,
            dropoff_time: now,
            status: None,
            notes: None,
            delivered_quantity: None,
            request_item: None,
            warehouse: None,
            staff_user: None,
            donation: None,
            community: None,
        }
    }

    pub use foodbridge_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub defaults: usecases::ResolutionDefaults,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            foodbridge_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                defaults: Default::default(),
            }
        }

        pub fn create_donation_request(
            &self,
            new_request: usecases::NewDonationRequest,
            user_id: Option<&str>,
        ) -> DonationRequest {
            flows::create_donation_request(&self.db_connections, &self.defaults, new_request, user_id)
                .unwrap()
        }

        pub fn create_user(&self, id: &str, role: Role) -> User {
            flows::create_user(
                &self.db_connections,
                usecases::NewUser {
                    user_id: Some(id.into()),
                    name: format!("User {id}"),
                    role,
                },
            )
            .unwrap()
        }

        pub fn create_restaurant(&self, id: &str) -> Restaurant {
            flows::create_restaurant(
                &self.db_connections,
                usecases::NewRestaurant {
                    restaurant_id: Some(id.into()),
                    name: format!("Restaurant {id}"),
                    address: "Market Square".into(),
                    contact_phone: None,
                },
            )
            .unwrap()
        }
    }
}
