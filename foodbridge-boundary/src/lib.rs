use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Error response body of failed requests.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
    /// The name of the offending input field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Error response body of rejected modifications.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Detail {
    pub detail: String,
}

// ---   donation requests   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DonationRequest {
    pub request_id         : String,
    pub title              : String,
    pub community          : String,
    pub community_name     : String,
    pub recipient_address  : String,
    pub expected_delivery  : String,
    pub people_count       : u32,
    pub contact_phone      : Option<String>,
    pub notes              : String,
    pub created_at         : String,
    pub created_by_user_id : Option<String>,
    pub status             : bool,
    pub items              : Vec<RequestItem>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RequestItem {
    pub need_id  : String,
    pub item     : String,
    pub quantity : u32,
    pub urgency  : Urgency,
}

/// Payload for creating or replacing a donation request.
///
/// Either `community_id` or `community_name` is needed to
/// resolve the receiving community.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewDonationRequest {
    pub title             : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_id      : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_name    : Option<String>,
    pub recipient_address : String,
    pub expected_delivery : String,
    pub people_count      : i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes             : Option<String>,
    #[serde(default)]
    pub status            : bool,
    #[serde(default)]
    pub items             : Vec<NewRequestItem>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DonationRequestPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NewRequestItem>>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewRequestItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_id: Option<String>,
    pub item: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
pub enum Urgency {
    Normal,
    High,
    Critical,
}

// ---   restaurants & donations   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Restaurant {
    pub restaurant_id : String,
    pub name          : String,
    pub address       : String,
    pub contact_phone : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewRestaurant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Donation {
    pub donation_id : String,
    pub restaurant  : String,
    pub description : String,
    pub quantity    : u32,
    pub donated_at  : String,
    pub status      : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewDonation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donation_id: Option<String>,
    pub restaurant: String,
    #[serde(default)]
    pub description: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donated_at: Option<String>,
    #[serde(default)]
    pub status: bool,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DonationPatch {
    /// `Some(None)` if the key is present with a `null` value.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub donation_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

// ---   communities & warehouses   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Community {
    pub community_id : String,
    pub name         : String,
    pub address      : String,
    pub population   : u32,
    pub received_at  : String,
    pub warehouse    : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Warehouse {
    pub warehouse_id : String,
    pub address      : String,
    pub capacity     : f64,
    pub stored_date  : String,
    pub expiry_date  : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewWarehouse {
    pub address: String,
    pub capacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_date: Option<String>,
    pub expiry_date: String,
}

// ---   deliveries   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Delivery {
    pub delivery_id           : String,
    pub delivery_type         : DeliveryType,
    pub pickup_location_type  : PickupLocationType,
    pub dropoff_location_type : DropoffLocationType,
    pub pickup_time           : String,
    pub dropoff_time          : String,
    pub status                : DeliveryStatus,
    pub notes                 : String,
    pub delivered_quantity    : Option<u32>,
    pub request_item          : Option<String>,
    pub warehouse             : Option<String>,
    pub staff_user            : Option<String>,
    pub donation              : Option<String>,
    pub community             : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewDelivery {
    pub delivery_type: DeliveryType,
    pub pickup_location_type: PickupLocationType,
    pub dropoff_location_type: DropoffLocationType,
    pub pickup_time: String,
    pub dropoff_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliveryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DeliveryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliveryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    Donation,
    Distribution,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum PickupLocationType {
    Restaurant,
    Warehouse,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum DropoffLocationType {
    Warehouse,
    Community,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

// ---   users   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Community,
    Restaurant,
    DeliveryStaff,
    Admin,
}

// Only invoked for present keys, missing keys fall back to `None`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omit_missing_error_field() {
        let err = Error {
            http_status: 404,
            message: "Not found".into(),
            field: None,
        };
        assert_eq!(
            r#"{"http_status":404,"message":"Not found"}"#,
            serde_json::to_string(&err).unwrap()
        );
    }

    #[test]
    fn delivery_status_in_snake_case() {
        assert_eq!(
            r#""in_transit""#,
            serde_json::to_string(&DeliveryStatus::InTransit).unwrap()
        );
        assert_eq!(
            r#""delivery_staff""#,
            serde_json::to_string(&UserRole::DeliveryStaff).unwrap()
        );
    }

    #[test]
    fn request_items_are_optional() {
        let json = r#"{
            "title": "Weekly need",
            "community_name": "Community Alpha",
            "recipient_address": "123 Main St",
            "expected_delivery": "2025-01-10T12:00:00Z",
            "people_count": 40
        }"#;
        let req: NewDonationRequest = serde_json::from_str(json).unwrap();
        assert!(req.items.is_empty());
        assert!(req.community_id.is_none());
        assert!(!req.status);
    }

    #[test]
    fn patch_without_items_keeps_them_untouched() {
        let patch: DonationRequestPatch = serde_json::from_str(r#"{"title":"new"}"#).unwrap();
        assert!(patch.items.is_none());
        let patch: DonationRequestPatch = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert_eq!(Some(0), patch.items.map(|items| items.len()));
    }

    #[test]
    fn distinguish_null_from_missing_donation_identity() {
        let patch: DonationPatch = serde_json::from_str(r#"{"quantity":3}"#).unwrap();
        assert!(patch.restaurant.is_none());
        assert!(patch.donation_id.is_none());
        let patch: DonationPatch =
            serde_json::from_str(r#"{"restaurant":null,"donation_id":null}"#).unwrap();
        assert_eq!(Some(None), patch.restaurant);
        assert_eq!(Some(None), patch.donation_id);
        let patch: DonationPatch = serde_json::from_str(r#"{"restaurant":"R1"}"#).unwrap();
        assert_eq!(Some(Some("R1".to_string())), patch.restaurant);
    }
}
