use std::{fmt::Display, result};

use foodbridge_boundary::{Detail, Error as JsonErrorResponse};
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    patch, post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
};
use foodbridge_application::prelude as flows;

mod communities;
mod deliveries;
mod donation_requests;
mod donations;
mod error;
mod restaurants;
mod users;
mod util;
mod warehouses;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type CreatedResult<T> = result::Result<(Status, Json<T>), ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   donation requests   --- //
        donation_requests::post_donation_request,
        donation_requests::get_donation_requests,
        donation_requests::get_donation_request,
        donation_requests::put_donation_request,
        donation_requests::patch_donation_request,
        donation_requests::delete_donation_request,
        // ---   restaurants   --- //
        restaurants::get_restaurants,
        restaurants::post_restaurant,
        restaurants::get_restaurant,
        restaurants::delete_restaurant,
        restaurants::get_restaurant_donations,
        // ---   donations   --- //
        donations::get_donations,
        donations::post_donation,
        donations::get_donation,
        donations::put_donation,
        donations::patch_donation,
        donations::delete_donation,
        // ---   communities   --- //
        communities::get_communities,
        communities::get_community,
        // ---   warehouses   --- //
        warehouses::get_warehouses,
        warehouses::post_warehouse,
        warehouses::get_warehouse,
        warehouses::delete_warehouse,
        // ---   deliveries   --- //
        deliveries::get_deliveries,
        deliveries::post_delivery,
        deliveries::get_delivery,
        deliveries::patch_delivery,
        deliveries::delete_delivery,
        // ---   users   --- //
        users::post_user,
        users::get_delivery_staff,
        users::get_user,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    field: Option<&str>,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
        field: field.map(ToOwned::to_owned),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

fn json_detail_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let detail = Detail {
        detail: err.to_string(),
    };
    Json(detail).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
