
pub mod prelude {

    use crate::web::{api, guards::Connections};

    pub use crate::{
        adapters::json,
        web::tests::prelude::{LocalResponse as Response, *},
    };

    pub fn setup() -> (Client, Connections) {
        rocket_test_setup(vec![("/api", api::routes())])
    }

    pub fn post_json<'c>(client: &'c Client, uri: &str, body: &str) -> Response<'c> {
        client
            .post(uri.to_owned())
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
    }

    pub fn patch_json<'c>(client: &'c Client, uri: &str, body: &str) -> Response<'c> {
        client
            .patch(uri.to_owned())
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn create_user(client: &Client, id: &str, role: &str) {
        let body = format!(r#"{{"user_id":"{id}","name":"{id}","role":"{role}"}}"#);
        let res = post_json(client, "/api/users/", &body);
        assert_eq!(Status::Created, res.status());
    }

    pub fn create_restaurant(client: &Client, id: &str) {
        let body = format!(r#"{{"restaurant_id":"{id}","name":"{id}","address":"Main St 1"}}"#);
        let res = post_json(client, "/api/restaurants/", &body);
        assert_eq!(Status::Created, res.status());
    }

    pub fn create_donation(client: &Client, id: &str, restaurant: &str, donated_at: &str) {
        let body = format!(
            r#"{{"donation_id":"{id}","restaurant":"{restaurant}","description":"Bread","quantity":10,"donated_at":"{donated_at}"}}"#
        );
        let res = post_json(client, "/api/donations/", &body);
        assert_eq!(Status::Created, res.status());
    }

    pub fn error_field(res: Response) -> Option<String> {
        res.into_json::<json::Error>().and_then(|err| err.field)
    }
}

use self::prelude::*;

#[test]
fn get_version() {
    let (client, _) = setup();
    let res = client.get("/api/server/version").dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(Some(DUMMY_VERSION.to_string()), res.into_string());
}

#[test]
fn create_and_get_user() {
    let (client, _) = setup();
    create_user(&client, "U1", "delivery_staff");
    create_user(&client, "U2", "restaurant");
    let res = client.get("/api/users/U1/").dispatch();
    assert_eq!(Status::Ok, res.status());
    test_json(&res);
    let user: json::User = res.into_json().unwrap();
    assert_eq!(json::UserRole::DeliveryStaff, user.role);

    let staff: Vec<json::User> = client
        .get("/api/users/delivery-staff/")
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(1, staff.len());
    assert_eq!("U1", staff[0].user_id);

    let res = client.get("/api/users/U3/").dispatch();
    assert_eq!(Status::NotFound, res.status());
}

#[test]
fn create_warehouse_with_invalid_dates() {
    let (client, _) = setup();
    let res = post_json(
        &client,
        "/api/warehouses/",
        r#"{"address":"Depot","capacity":50.0,"stored_date":"2025-02-01","expiry_date":"2025-01-01"}"#,
    );
    assert_eq!(Status::BadRequest, res.status());
    assert_eq!(Some("expiry_date".into()), error_field(res));

    let res = post_json(
        &client,
        "/api/warehouses/",
        r#"{"address":"Depot","capacity":50.0,"expiry_date":"01.01.2030"}"#,
    );
    assert_eq!(Status::BadRequest, res.status());
    assert_eq!(Some("expiry_date".into()), error_field(res));
}

#[test]
fn delete_unreferenced_warehouse() {
    let (client, _) = setup();
    let res = post_json(
        &client,
        "/api/warehouses/",
        r#"{"address":"Depot","capacity":50.0,"expiry_date":"2030-01-01"}"#,
    );
    assert_eq!(Status::Created, res.status());
    let warehouse: json::Warehouse = res.into_json().unwrap();
    let uri = format!("/api/warehouses/{}/", warehouse.warehouse_id);
    assert_eq!(Status::NoContent, client.delete(uri.clone()).dispatch().status());
    assert_eq!(Status::NotFound, client.get(uri).dispatch().status());
}

#[test]
fn delete_restaurant_with_donations() {
    let (client, _) = setup();
    create_restaurant(&client, "R1");
    create_donation(&client, "D1", "R1", "2025-01-15T12:00:00Z");
    let res = client.delete("/api/restaurants/R1/").dispatch();
    assert_eq!(Status::Conflict, res.status());
    let res = client.get("/api/restaurants/R1/").dispatch();
    assert_eq!(Status::Ok, res.status());
}

#[test]
fn create_duplicate_restaurant() {
    let (client, _) = setup();
    create_restaurant(&client, "R1");
    let res = post_json(
        &client,
        "/api/restaurants/",
        r#"{"restaurant_id":"R1","name":"Again","address":"Main St 2"}"#,
    );
    assert_eq!(Status::Conflict, res.status());
}

#[test]
fn resolve_paths_with_and_without_trailing_slash() {
    let (client, _) = setup();
    create_restaurant(&client, "R1");
    for uri in ["/api/restaurants/R1/", "/api/restaurants/R1"] {
        let res = client.get(uri).dispatch();
        assert_eq!(Status::Ok, res.status());
        let restaurant: json::Restaurant = res.into_json().unwrap();
        assert_eq!("R1", restaurant.restaurant_id);
    }
    let res = client
        .get("/api/restaurants/donations/?status=true")
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let res = client.get("/api/server/version/").dispatch();
    assert_eq!(Some(DUMMY_VERSION.to_string()), res.into_string());
}
