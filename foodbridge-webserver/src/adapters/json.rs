pub use foodbridge_boundary::*;

use crate::core::{entities as e, usecases};

type Result<T> = std::result::Result<T, usecases::Error>;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    fn timestamp(field: &'static str, s: &str) -> Result<e::Timestamp> {
        e::Timestamp::parse_rfc3339(s).map_err(|_| usecases::Error::invalid_field(field, s))
    }

    fn date(field: &'static str, s: &str) -> Result<e::Date> {
        e::parse_date(s).map_err(|_| usecases::Error::invalid_field(field, s))
    }

    fn count(field: &'static str, n: i64) -> Result<u32> {
        u32::try_from(n).map_err(|_| usecases::Error::invalid_field(field, n.to_string()))
    }

    pub fn try_new_request_item(from: NewRequestItem) -> Result<usecases::NewRequestItem> {
        let NewRequestItem {
            need_id,
            item,
            quantity,
            urgency,
        } = from;
        Ok(usecases::NewRequestItem {
            need_id,
            item,
            quantity: count("quantity", quantity)?,
            urgency: urgency.map(Into::into).unwrap_or_default(),
        })
    }

    fn try_request_items(items: Vec<NewRequestItem>) -> Result<Vec<usecases::NewRequestItem>> {
        items.into_iter().map(try_new_request_item).collect()
    }

    pub fn try_new_donation_request(
        from: NewDonationRequest,
    ) -> Result<usecases::NewDonationRequest> {
        let NewDonationRequest {
            title,
            community_id,
            community_name,
            recipient_address,
            expected_delivery,
            people_count,
            contact_phone,
            notes,
            status,
            items,
        } = from;
        Ok(usecases::NewDonationRequest {
            title,
            community_id,
            community_name,
            recipient_address,
            expected_delivery: timestamp("expected_delivery", &expected_delivery)?,
            people_count: count("people_count", people_count)?,
            contact_phone,
            notes,
            status,
            items: try_request_items(items)?,
        })
    }

    pub fn try_donation_request_patch(
        from: DonationRequestPatch,
    ) -> Result<usecases::DonationRequestPatch> {
        let DonationRequestPatch {
            title,
            community_id,
            community_name,
            recipient_address,
            expected_delivery,
            people_count,
            contact_phone,
            notes,
            status,
            items,
        } = from;
        Ok(usecases::DonationRequestPatch {
            title,
            community_id,
            community_name,
            recipient_address,
            expected_delivery: expected_delivery
                .map(|t| timestamp("expected_delivery", &t))
                .transpose()?,
            people_count: people_count
                .map(|n| count("people_count", n))
                .transpose()?,
            contact_phone,
            notes,
            status,
            items: items.map(try_request_items).transpose()?,
        })
    }

    pub fn new_restaurant(from: NewRestaurant) -> usecases::NewRestaurant {
        let NewRestaurant {
            restaurant_id,
            name,
            address,
            contact_phone,
        } = from;
        usecases::NewRestaurant {
            restaurant_id,
            name,
            address,
            contact_phone,
        }
    }

    pub fn try_new_donation(from: NewDonation) -> Result<usecases::NewDonation> {
        let NewDonation {
            donation_id,
            restaurant,
            description,
            quantity,
            donated_at,
            status,
        } = from;
        Ok(usecases::NewDonation {
            donation_id,
            restaurant,
            description,
            quantity: count("quantity", quantity)?,
            donated_at: donated_at
                .map(|t| timestamp("donated_at", &t))
                .transpose()?,
            status,
        })
    }

    pub fn try_donation_patch(from: DonationPatch) -> Result<usecases::DonationPatch> {
        let DonationPatch {
            donation_id,
            restaurant,
            description,
            quantity,
            donated_at,
            status,
        } = from;
        Ok(usecases::DonationPatch {
            donation_id,
            restaurant,
            description,
            quantity: quantity.map(|n| count("quantity", n)).transpose()?,
            donated_at: donated_at
                .map(|t| timestamp("donated_at", &t))
                .transpose()?,
            status,
        })
    }

    pub fn try_new_warehouse(from: NewWarehouse) -> Result<usecases::NewWarehouse> {
        let NewWarehouse {
            address,
            capacity,
            stored_date,
            expiry_date,
        } = from;
        Ok(usecases::NewWarehouse {
            address,
            capacity,
            stored_date: stored_date
                .map(|d| date("stored_date", &d))
                .transpose()?,
            expiry_date: date("expiry_date", &expiry_date)?,
        })
    }

    pub fn try_new_delivery(from: NewDelivery) -> Result<usecases::NewDelivery> {
        let NewDelivery {
            delivery_type,
            pickup_location_type,
            dropoff_location_type,
            pickup_time,
            dropoff_time,
            status,
            notes,
            delivered_quantity,
            request_item,
            warehouse,
            staff_user,
            donation,
            community,
        } = from;
        Ok(usecases::NewDelivery {
            delivery_type: delivery_type.into(),
            pickup_location_type: pickup_location_type.into(),
            dropoff_location_type: dropoff_location_type.into(),
            pickup_time: timestamp("pickup_time", &pickup_time)?,
            dropoff_time: timestamp("dropoff_time", &dropoff_time)?,
            status: status.map(Into::into),
            notes,
            delivered_quantity: delivered_quantity
                .map(|n| count("delivered_quantity", n))
                .transpose()?,
            request_item,
            warehouse,
            staff_user,
            donation,
            community,
        })
    }

    pub fn try_delivery_patch(from: DeliveryPatch) -> Result<usecases::DeliveryPatch> {
        let DeliveryPatch {
            pickup_time,
            dropoff_time,
            status,
            notes,
            delivered_quantity,
            request_item,
            warehouse,
            staff_user,
            donation,
            community,
        } = from;
        Ok(usecases::DeliveryPatch {
            pickup_time: pickup_time
                .map(|t| timestamp("pickup_time", &t))
                .transpose()?,
            dropoff_time: dropoff_time
                .map(|t| timestamp("dropoff_time", &t))
                .transpose()?,
            status: status.map(Into::into),
            notes,
            delivered_quantity: delivered_quantity
                .map(|n| count("delivered_quantity", n))
                .transpose()?,
            request_item,
            warehouse,
            staff_user,
            donation,
            community,
        })
    }

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            user_id,
            name,
            role,
        } = from;
        usecases::NewUser {
            user_id,
            name,
            role: role.into(),
        }
    }

}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn donation_requests(from: Vec<e::DonationRequest>) -> Vec<DonationRequest> {
        from.into_iter().map(Into::into).collect()
    }

    pub fn donations(from: Vec<e::Donation>) -> Vec<Donation> {
        from.into_iter().map(Into::into).collect()
    }

    pub fn deliveries(from: Vec<e::Delivery>) -> Vec<Delivery> {
        from.into_iter().map(Into::into).collect()
    }
}
