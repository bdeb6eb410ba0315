///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        role -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Restaurants and their donations
///////////////////////////////////////////////////////////////////////

table! {
    restaurants (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        address -> Text,
        contact_phone -> Nullable<Text>,
    }
}

table! {
    donations (rowid) {
        rowid -> BigInt,
        id -> Text,
        restaurant_id -> Text,
        description -> Text,
        quantity -> BigInt,
        donated_at -> BigInt,
        status -> Bool,
    }
}

///////////////////////////////////////////////////////////////////////
// Warehouses and communities
///////////////////////////////////////////////////////////////////////

table! {
    warehouses (rowid) {
        rowid -> BigInt,
        id -> Text,
        address -> Text,
        capacity -> Double,
        // YYYY-MM-DD
        stored_date -> Text,
        // YYYY-MM-DD
        expiry_date -> Text,
    }
}

table! {
    communities (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        name_key -> Text,
        address -> Text,
        population -> BigInt,
        received_at -> BigInt,
        warehouse_id -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Donation requests
///////////////////////////////////////////////////////////////////////

table! {
    donation_requests (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        community_name -> Text,
        recipient_address -> Text,
        expected_delivery -> BigInt,
        people_count -> BigInt,
        contact_phone -> Nullable<Text>,
        notes -> Text,
        created_at -> BigInt,
        created_by -> Nullable<Text>,
        status -> Bool,
        community_id -> Text,
    }
}

table! {
    request_items (rowid) {
        rowid -> BigInt,
        id -> Text,
        request_id -> Text,
        item -> Text,
        quantity -> BigInt,
        urgency -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Deliveries
///////////////////////////////////////////////////////////////////////

table! {
    deliveries (rowid) {
        rowid -> BigInt,
        id -> Text,
        delivery_type -> Text,
        pickup_location_type -> Text,
        dropoff_location_type -> Text,
        pickup_time -> BigInt,
        dropoff_time -> BigInt,
        status -> Text,
        notes -> Text,
        delivered_quantity -> Nullable<BigInt>,
        request_item_id -> Nullable<Text>,
        warehouse_id -> Nullable<Text>,
        staff_user_id -> Nullable<Text>,
        donation_id -> Nullable<Text>,
        community_id -> Nullable<Text>,
    }
}

allow_tables_to_appear_in_same_query!(
    users,
    restaurants,
    donations,
    warehouses,
    communities,
    donation_requests,
    request_items,
    deliveries,
);
