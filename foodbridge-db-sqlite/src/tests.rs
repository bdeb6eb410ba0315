use super::*;
use foodbridge_core::{entities::*, repositories::*};

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn warehouse(id: &str) -> Warehouse {
    let stored_date = today();
    Warehouse {
        id: id.into(),
        address: format!("Warehouse {id}"),
        capacity: 100.0,
        stored_date,
        expiry_date: stored_date,
    }
}

fn community(id: &str, name: &str, warehouse_id: &str) -> Community {
    Community {
        id: id.into(),
        name: name.into(),
        address: "Main St".into(),
        population: 100,
        received_at: Timestamp::now(),
        warehouse_id: warehouse_id.into(),
    }
}

fn request(id: &str, community_id: &str, item_ids: &[&str]) -> DonationRequest {
    DonationRequest {
        id: id.into(),
        title: "Winter supplies".into(),
        community_name: "Alpha".into(),
        recipient_address: "Main St".into(),
        expected_delivery: Timestamp::now(),
        people_count: 12,
        contact_phone: Some("+49 123".into()),
        notes: "".into(),
        created_at: Timestamp::now(),
        created_by: None,
        status: false,
        community_id: community_id.into(),
        items: item_ids
            .iter()
            .map(|id| RequestItem {
                id: (*id).into(),
                item: format!("Item {id}"),
                quantity: 3,
                urgency: Urgency::Critical,
            })
            .collect(),
    }
}

fn delivery(id: &str) -> Delivery {
    let now = Timestamp::now();
    Delivery {
        id: id.into(),
        delivery_type: DeliveryType::Distribution,
        pickup_location_type: PickupLocationType::Warehouse,
        dropoff_location_type: DropoffLocationType::Community,
        pickup_time: now,
        dropoff_time: now,
        status: DeliveryStatus::InTransit,
        notes: "".into(),
        delivered_quantity: Some(5),
        request_item_id: None,
        warehouse_id: None,
        staff_user_id: None,
        donation_id: None,
        community_id: None,
    }
}

#[test]
fn first_warehouse_in_insertion_order() {
    let connections = setup();
    assert!(connections.shared().unwrap().first_warehouse().unwrap().is_none());
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_warehouse(&warehouse("w2"))?;
            conn.create_warehouse(&warehouse("w1"))
        })
        .unwrap();
    let db = connections.shared().unwrap();
    assert_eq!("w2", db.first_warehouse().unwrap().unwrap().id.as_str());
    assert_eq!(2, db.count_warehouses().unwrap());
    assert_eq!(warehouse("w1"), db.get_warehouse("w1").unwrap());
}

#[test]
fn find_community_by_name_ignoring_case() {
    let connections = setup();
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_warehouse(&warehouse("w1"))?;
            conn.create_community(&community("c1", "Community Alpha", "w1"))
        })
        .unwrap();
    let db = connections.shared().unwrap();
    let found = db.find_community_by_name("community ALPHA").unwrap().unwrap();
    assert_eq!("c1", found.id.as_str());
    assert_eq!("Community Alpha", found.name);
    assert!(db.find_community_by_name("Community Beta").unwrap().is_none());
}

#[test]
fn find_community_by_name_with_non_ascii_letters() {
    let connections = setup();
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_warehouse(&warehouse("w1"))?;
            conn.create_community(&community("c1", "Ärzte École", "w1"))
        })
        .unwrap();
    let db = connections.shared().unwrap();
    let found = db.find_community_by_name(" ärzte école ").unwrap().unwrap();
    assert_eq!("c1", found.id.as_str());
    assert_eq!("Ärzte École", found.name);
    assert!(db.find_community_by_name("Arzte Ecole").unwrap().is_none());
}

#[test]
fn rollback_failed_transactions() {
    let connections = setup();
    let res = connections.exclusive().unwrap().transaction(|conn| {
        conn.create_warehouse(&warehouse("w1"))?;
        // Unknown warehouse
        conn.create_community(&community("c1", "Alpha", "w2"))
    });
    assert!(res.is_err());
    let db = connections.shared().unwrap();
    assert_eq!(0, db.count_warehouses().unwrap());
    assert_eq!(0, db.count_communities().unwrap());
}

#[test]
fn store_and_load_donation_request_with_items() {
    let connections = setup();
    let req = request("REQ1", "c1", &["A", "B"]);
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_warehouse(&warehouse("w1"))?;
            conn.create_community(&community("c1", "Alpha", "w1"))?;
            conn.create_donation_request(&req)
        })
        .unwrap();
    let db = connections.shared().unwrap();
    assert_eq!(req, db.get_donation_request("REQ1").unwrap());
    assert_eq!(Urgency::Critical, db.get_request_item("B").unwrap().urgency);
}

#[test]
fn replace_items_and_unlink_deliveries() {
    let connections = setup();
    let req = request("REQ1", "c1", &["A", "B"]);
    let mut d = delivery("D1");
    d.request_item_id = Some("A".into());
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_warehouse(&warehouse("w1"))?;
            conn.create_community(&community("c1", "Alpha", "w1"))?;
            conn.create_donation_request(&req)?;
            conn.create_delivery(&d)
        })
        .unwrap();
    let new_items = request("_", "_", &["C"]).items;
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.replace_request_items("REQ1", &new_items))
        .unwrap();
    let db = connections.shared().unwrap();
    assert_eq!(new_items, db.get_donation_request("REQ1").unwrap().items);
    assert!(matches!(db.get_request_item("A"), Err(Error::NotFound)));
    assert_eq!(None, db.get_delivery("D1").unwrap().request_item_id);
}

#[test]
fn delete_request_with_items() {
    let connections = setup();
    let req = request("REQ1", "c1", &["A"]);
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_warehouse(&warehouse("w1"))?;
            conn.create_community(&community("c1", "Alpha", "w1"))?;
            conn.create_donation_request(&req)
        })
        .unwrap();
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.delete_donation_request("REQ1"))
        .unwrap();
    let db = connections.shared().unwrap();
    assert!(matches!(db.get_donation_request("REQ1"), Err(Error::NotFound)));
    assert!(matches!(db.get_request_item("A"), Err(Error::NotFound)));
}

#[test]
fn referenced_warehouses_cannot_be_deleted() {
    let connections = setup();
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_warehouse(&warehouse("w1"))?;
            conn.create_warehouse(&warehouse("w2"))?;
            conn.create_community(&community("c1", "Alpha", "w1"))
        })
        .unwrap();
    let err = connections
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.delete_warehouse("w1"))
        .unwrap_err();
    assert!(matches!(
        err,
        foodbridge_core::usecases::Error::Repo(Error::InUse)
    ));
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.delete_warehouse("w2"))
        .unwrap();
    assert_eq!(1, connections.shared().unwrap().count_warehouses().unwrap());
}

#[test]
fn query_donations_newest_first() {
    let connections = setup();
    let restaurant = Restaurant {
        id: "r1".into(),
        name: "Deli".into(),
        address: "Market".into(),
        contact_phone: None,
    };
    let donations = [
        ("d1", "2025-01-01T00:00:00Z", true),
        ("d2", "2025-01-31T23:59:59.999Z", false),
        ("d3", "2025-02-01T00:00:00Z", true),
    ];
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_restaurant(&restaurant)?;
            for (id, donated_at, status) in donations {
                conn.create_donation(&Donation {
                    id: id.into(),
                    restaurant_id: "r1".into(),
                    description: "Bread".into(),
                    quantity: 2,
                    donated_at: Timestamp::parse_rfc3339(donated_at).unwrap(),
                    status,
                })?;
            }
            Ok::<_, Error>(())
        })
        .unwrap();
    let db = connections.shared().unwrap();
    let all: Vec<_> = db
        .query_donations(&DonationFilter::default())
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(vec![Id::from("d3"), "d2".into(), "d1".into()], all);
    let filter = DonationFilter {
        restaurant_id: Some("r1".into()),
        status: Some(false),
        donated_from: Some(Timestamp::start_of_day(parse_date("2025-01-01").unwrap())),
        donated_until: Some(Timestamp::end_of_day(parse_date("2025-01-31").unwrap())),
    };
    let filtered = db.query_donations(&filter).unwrap();
    assert_eq!(1, filtered.len());
    assert_eq!("d2", filtered[0].id.as_str());
    drop(db);
    let err = connections
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.delete_restaurant("r1"))
        .unwrap_err();
    assert!(matches!(
        err,
        foodbridge_core::usecases::Error::Repo(Error::InUse)
    ));
}

#[test]
fn update_delivery_and_load_users_by_role() {
    let connections = setup();
    let staff = User {
        id: "u1".into(),
        name: "Dana".into(),
        role: Role::DeliveryStaff,
    };
    let mut d = delivery("D1");
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| {
            conn.create_user(&staff)?;
            conn.create_user(&User {
                id: "u2".into(),
                name: "Alex".into(),
                role: Role::Admin,
            })?;
            conn.create_delivery(&d)
        })
        .unwrap();
    d.status = DeliveryStatus::Delivered;
    d.staff_user_id = Some("u1".into());
    d.delivered_quantity = None;
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.update_delivery(&d))
        .unwrap();
    let db = connections.shared().unwrap();
    assert_eq!(d, db.get_delivery("D1").unwrap());
    assert_eq!(vec![staff], db.users_with_role(Role::DeliveryStaff).unwrap());
    assert!(matches!(db.create_user(&another_user()), Err(Error::Other(_))));
}

fn another_user() -> User {
    User {
        id: "u3".into(),
        name: "Sam".into(),
        role: Role::Community,
    }
}
