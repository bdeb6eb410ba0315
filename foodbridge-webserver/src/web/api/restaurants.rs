use super::*;

#[get("/restaurants")]
pub fn get_restaurants(connections: Connections) -> Result<Vec<json::Restaurant>> {
    let restaurants = usecases::list_restaurants(&connections.shared()?)?;
    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}

#[post("/restaurants", format = "application/json", data = "<new_restaurant>")]
pub fn post_restaurant(
    connections: Connections,
    new_restaurant: JsonResult<json::NewRestaurant>,
) -> CreatedResult<json::Restaurant> {
    let new_restaurant = from_json::new_restaurant(new_restaurant?.into_inner());
    let restaurant = flows::create_restaurant(&connections, new_restaurant)?;
    Ok((Status::Created, Json(restaurant.into())))
}

#[get("/restaurants/<id>")]
pub fn get_restaurant(connections: Connections, id: &str) -> Result<json::Restaurant> {
    let restaurant = usecases::get_restaurant(&connections.shared()?, id)?;
    Ok(Json(restaurant.into()))
}

#[delete("/restaurants/<id>")]
pub fn delete_restaurant(connections: Connections, id: &str) -> StatusResult {
    flows::delete_restaurant(&connections, id)?;
    Ok(Status::NoContent)
}

#[get("/restaurants/donations?<restaurant_id>&<status>&<date_from>&<date_to>")]
pub fn get_restaurant_donations(
    connections: Connections,
    restaurant_id: Option<String>,
    status: Option<String>,
    date_from: Option<String>,
    date_to: Option<String>,
) -> Result<Vec<json::Donation>> {
    let query = usecases::DonationQuery {
        restaurant_id,
        status,
        date_from,
        date_to,
    };
    let donations = usecases::query_donations(&connections.shared()?, &query)?;
    Ok(Json(to_json::donations(donations)))
}
