use super::*;

#[get("/donations?<restaurant_id>&<status>&<date_from>&<date_to>")]
pub fn get_donations(
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

#[post("/donations", format = "application/json", data = "<new_donation>")]
pub fn post_donation(
    connections: Connections,
    new_donation: JsonResult<json::NewDonation>,
) -> CreatedResult<json::Donation> {
    let new_donation = from_json::try_new_donation(new_donation?.into_inner())?;
    let donation = flows::create_donation(&connections, new_donation)?;
    Ok((Status::Created, Json(donation.into())))
}

#[get("/donations/<id>")]
pub fn get_donation(connections: Connections, id: &str) -> Result<json::Donation> {
    let donation = usecases::get_donation(&connections.shared()?, id)?;
    Ok(Json(donation.into()))
}

#[put("/donations/<id>", format = "application/json", data = "<donation>")]
pub fn put_donation(
    connections: Connections,
    id: &str,
    donation: JsonResult<json::NewDonation>,
) -> Result<json::Donation> {
    let donation = from_json::try_new_donation(donation?.into_inner())?;
    let donation = flows::update_donation(&connections, id, donation.into())?;
    Ok(Json(donation.into()))
}

#[patch("/donations/<id>", format = "application/json", data = "<patch>")]
pub fn patch_donation(
    connections: Connections,
    id: &str,
    patch: JsonResult<json::DonationPatch>,
) -> Result<json::Donation> {
    let patch = from_json::try_donation_patch(patch?.into_inner())?;
    let donation = flows::update_donation(&connections, id, patch)?;
    Ok(Json(donation.into()))
}

#[delete("/donations/<id>")]
pub fn delete_donation(connections: Connections, id: &str) -> StatusResult {
    flows::delete_donation(&connections, id)?;
    Ok(Status::NoContent)
}
