#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix as well as
// `expected_delivery`, `pickup_time` and `dropoff_time`
// are stored as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub role: i16,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub role: i16,
}

#[derive(Insertable)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub address: &'a str,
    pub contact_phone: Option<&'a str>,
}

#[derive(Queryable)]
pub struct RestaurantEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub address: String,
    pub contact_phone: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = donations)]
pub struct NewDonation<'a> {
    pub id: &'a str,
    pub restaurant_id: &'a str,
    pub description: &'a str,
    pub quantity: i64,
    pub donated_at: i64,
    pub status: bool,
}

#[derive(Queryable)]
pub struct DonationEntity {
    pub rowid: i64,
    pub id: String,
    pub restaurant_id: String,
    pub description: String,
    pub quantity: i64,
    pub donated_at: i64,
    pub status: bool,
}

#[derive(Insertable)]
#[diesel(table_name = warehouses)]
pub struct NewWarehouse<'a> {
    pub id: &'a str,
    pub address: &'a str,
    pub capacity: f64,
    pub stored_date: String,
    pub expiry_date: String,
}

#[derive(Queryable)]
pub struct WarehouseEntity {
    pub rowid: i64,
    pub id: String,
    pub address: String,
    pub capacity: f64,
    pub stored_date: String,
    pub expiry_date: String,
}

#[derive(Insertable)]
#[diesel(table_name = communities)]
pub struct NewCommunity<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub name_key: String,
    pub address: &'a str,
    pub population: i64,
    pub received_at: i64,
    pub warehouse_id: &'a str,
}

#[derive(Queryable)]
pub struct CommunityEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub name_key: String,
    pub address: String,
    pub population: i64,
    pub received_at: i64,
    pub warehouse_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = donation_requests)]
pub struct NewDonationRequest<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub community_name: &'a str,
    pub recipient_address: &'a str,
    pub expected_delivery: i64,
    pub people_count: i64,
    pub contact_phone: Option<&'a str>,
    pub notes: &'a str,
    pub created_at: i64,
    pub created_by: Option<&'a str>,
    pub status: bool,
    pub community_id: &'a str,
}

// The identity, creation time and author are never changed
#[derive(AsChangeset)]
#[diesel(table_name = donation_requests, treat_none_as_null = true)]
pub struct DonationRequestChangeset<'a> {
    pub title: &'a str,
    pub community_name: &'a str,
    pub recipient_address: &'a str,
    pub expected_delivery: i64,
    pub people_count: i64,
    pub contact_phone: Option<&'a str>,
    pub notes: &'a str,
    pub status: bool,
    pub community_id: &'a str,
}

#[derive(Queryable)]
pub struct DonationRequestEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub community_name: String,
    pub recipient_address: String,
    pub expected_delivery: i64,
    pub people_count: i64,
    pub contact_phone: Option<String>,
    pub notes: String,
    pub created_at: i64,
    pub created_by: Option<String>,
    pub status: bool,
    pub community_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = request_items)]
pub struct NewRequestItem<'a> {
    pub id: &'a str,
    pub request_id: &'a str,
    pub item: &'a str,
    pub quantity: i64,
    pub urgency: String,
}

#[derive(Queryable)]
pub struct RequestItemEntity {
    pub rowid: i64,
    pub id: String,
    pub request_id: String,
    pub item: String,
    pub quantity: i64,
    pub urgency: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = deliveries, treat_none_as_null = true)]
pub struct NewDelivery<'a> {
    pub id: &'a str,
    pub delivery_type: String,
    pub pickup_location_type: String,
    pub dropoff_location_type: String,
    pub pickup_time: i64,
    pub dropoff_time: i64,
    pub status: String,
    pub notes: &'a str,
    pub delivered_quantity: Option<i64>,
    pub request_item_id: Option<&'a str>,
    pub warehouse_id: Option<&'a str>,
    pub staff_user_id: Option<&'a str>,
    pub donation_id: Option<&'a str>,
    pub community_id: Option<&'a str>,
}

#[derive(Queryable)]
pub struct DeliveryEntity {
    pub rowid: i64,
    pub id: String,
    pub delivery_type: String,
    pub pickup_location_type: String,
    pub dropoff_location_type: String,
    pub pickup_time: i64,
    pub dropoff_time: i64,
    pub status: String,
    pub notes: String,
    pub delivered_quantity: Option<i64>,
    pub request_item_id: Option<String>,
    pub warehouse_id: Option<String>,
    pub staff_user_id: Option<String>,
    pub donation_id: Option<String>,
    pub community_id: Option<String>,
}
