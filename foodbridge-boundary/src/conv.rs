use super::*;
use foodbridge_entities as e;

impl From<e::donation_request::DonationRequest> for DonationRequest {
    fn from(from: e::donation_request::DonationRequest) -> Self {
        let e::donation_request::DonationRequest {
            id,
            title,
            community_name,
            recipient_address,
            expected_delivery,
            people_count,
            contact_phone,
            notes,
            created_at,
            created_by,
            status,
            community_id,
            items,
        } = from;
        Self {
            request_id: id.into(),
            title,
            community: community_id.into(),
            community_name,
            recipient_address,
            expected_delivery: expected_delivery.to_rfc3339(),
            people_count,
            contact_phone,
            notes,
            created_at: created_at.to_rfc3339(),
            created_by_user_id: created_by.map(Into::into),
            status,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::donation_request::RequestItem> for RequestItem {
    fn from(from: e::donation_request::RequestItem) -> Self {
        let e::donation_request::RequestItem {
            id,
            item,
            quantity,
            urgency,
        } = from;
        Self {
            need_id: id.into(),
            item,
            quantity,
            urgency: urgency.into(),
        }
    }
}

impl From<e::donation_request::Urgency> for Urgency {
    fn from(from: e::donation_request::Urgency) -> Self {
        use e::donation_request::Urgency as E;
        match from {
            E::Normal => Self::Normal,
            E::High => Self::High,
            E::Critical => Self::Critical,
        }
    }
}

impl From<Urgency> for e::donation_request::Urgency {
    fn from(from: Urgency) -> Self {
        match from {
            Urgency::Normal => Self::Normal,
            Urgency::High => Self::High,
            Urgency::Critical => Self::Critical,
        }
    }
}

impl From<e::restaurant::Restaurant> for Restaurant {
    fn from(from: e::restaurant::Restaurant) -> Self {
        let e::restaurant::Restaurant {
            id,
            name,
            address,
            contact_phone,
        } = from;
        Self {
            restaurant_id: id.into(),
            name,
            address,
            contact_phone,
        }
    }
}

impl From<e::donation::Donation> for Donation {
    fn from(from: e::donation::Donation) -> Self {
        let e::donation::Donation {
            id,
            restaurant_id,
            description,
            quantity,
            donated_at,
            status,
        } = from;
        Self {
            donation_id: id.into(),
            restaurant: restaurant_id.into(),
            description,
            quantity,
            donated_at: donated_at.to_rfc3339(),
            status,
        }
    }
}

impl From<e::community::Community> for Community {
    fn from(from: e::community::Community) -> Self {
        let e::community::Community {
            id,
            name,
            address,
            population,
            received_at,
            warehouse_id,
        } = from;
        Self {
            community_id: id.into(),
            name,
            address,
            population,
            received_at: received_at.to_rfc3339(),
            warehouse: warehouse_id.into(),
        }
    }
}

impl From<e::warehouse::Warehouse> for Warehouse {
    fn from(from: e::warehouse::Warehouse) -> Self {
        let e::warehouse::Warehouse {
            id,
            address,
            capacity,
            stored_date,
            expiry_date,
        } = from;
        Self {
            warehouse_id: id.into(),
            address,
            capacity,
            stored_date: e::time::format_date(stored_date),
            expiry_date: e::time::format_date(expiry_date),
        }
    }
}

impl From<e::delivery::Delivery> for Delivery {
    fn from(from: e::delivery::Delivery) -> Self {
        let e::delivery::Delivery {
            id,
            delivery_type,
            pickup_location_type,
            dropoff_location_type,
            pickup_time,
            dropoff_time,
            status,
            notes,
            delivered_quantity,
            request_item_id,
            warehouse_id,
            staff_user_id,
            donation_id,
            community_id,
        } = from;
        Self {
            delivery_id: id.into(),
            delivery_type: delivery_type.into(),
            pickup_location_type: pickup_location_type.into(),
            dropoff_location_type: dropoff_location_type.into(),
            pickup_time: pickup_time.to_rfc3339(),
            dropoff_time: dropoff_time.to_rfc3339(),
            status: status.into(),
            notes,
            delivered_quantity,
            request_item: request_item_id.map(Into::into),
            warehouse: warehouse_id.map(Into::into),
            staff_user: staff_user_id.map(Into::into),
            donation: donation_id.map(Into::into),
            community: community_id.map(Into::into),
        }
    }
}

impl From<e::delivery::DeliveryType> for DeliveryType {
    fn from(from: e::delivery::DeliveryType) -> Self {
        use e::delivery::DeliveryType as E;
        match from {
            E::Donation => Self::Donation,
            E::Distribution => Self::Distribution,
        }
    }
}

impl From<DeliveryType> for e::delivery::DeliveryType {
    fn from(from: DeliveryType) -> Self {
        match from {
            DeliveryType::Donation => Self::Donation,
            DeliveryType::Distribution => Self::Distribution,
        }
    }
}

impl From<e::delivery::PickupLocationType> for PickupLocationType {
    fn from(from: e::delivery::PickupLocationType) -> Self {
        use e::delivery::PickupLocationType as E;
        match from {
            E::Restaurant => Self::Restaurant,
            E::Warehouse => Self::Warehouse,
        }
    }
}

impl From<PickupLocationType> for e::delivery::PickupLocationType {
    fn from(from: PickupLocationType) -> Self {
        match from {
            PickupLocationType::Restaurant => Self::Restaurant,
            PickupLocationType::Warehouse => Self::Warehouse,
        }
    }
}

impl From<e::delivery::DropoffLocationType> for DropoffLocationType {
    fn from(from: e::delivery::DropoffLocationType) -> Self {
        use e::delivery::DropoffLocationType as E;
        match from {
            E::Warehouse => Self::Warehouse,
            E::Community => Self::Community,
        }
    }
}

impl From<DropoffLocationType> for e::delivery::DropoffLocationType {
    fn from(from: DropoffLocationType) -> Self {
        match from {
            DropoffLocationType::Warehouse => Self::Warehouse,
            DropoffLocationType::Community => Self::Community,
        }
    }
}

impl From<e::delivery::DeliveryStatus> for DeliveryStatus {
    fn from(from: e::delivery::DeliveryStatus) -> Self {
        use e::delivery::DeliveryStatus as E;
        match from {
            E::Pending => Self::Pending,
            E::InTransit => Self::InTransit,
            E::Delivered => Self::Delivered,
            E::Cancelled => Self::Cancelled,
        }
    }
}

impl From<DeliveryStatus> for e::delivery::DeliveryStatus {
    fn from(from: DeliveryStatus) -> Self {
        match from {
            DeliveryStatus::Pending => Self::Pending,
            DeliveryStatus::InTransit => Self::InTransit,
            DeliveryStatus::Delivered => Self::Delivered,
            DeliveryStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User { id, name, role } = from;
        Self {
            user_id: id.into(),
            name,
            role: role.into(),
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role as E;
        match from {
            E::Community => Self::Community,
            E::Restaurant => Self::Restaurant,
            E::DeliveryStaff => Self::DeliveryStaff,
            E::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        match from {
            UserRole::Community => Self::Community,
            UserRole::Restaurant => Self::Restaurant,
            UserRole::DeliveryStaff => Self::DeliveryStaff,
            UserRole::Admin => Self::Admin,
        }
    }
}
