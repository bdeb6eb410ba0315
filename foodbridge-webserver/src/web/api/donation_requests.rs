use super::*;

#[post("/donation-requests", format = "application/json", data = "<new_request>")]
pub fn post_donation_request(
    connections: Connections,
    defaults: &State<usecases::ResolutionDefaults>,
    identity: Identity,
    new_request: JsonResult<json::NewDonationRequest>,
) -> CreatedResult<json::DonationRequest> {
    let new_request = from_json::try_new_donation_request(new_request?.into_inner())?;
    let request = flows::create_donation_request(
        &connections,
        defaults,
        new_request,
        identity.user_id(),
    )?;
    Ok((Status::Created, Json(request.into())))
}

#[get("/donation-requests")]
pub fn get_donation_requests(connections: Connections) -> Result<Vec<json::DonationRequest>> {
    let requests = usecases::list_donation_requests(&connections.shared()?)?;
    Ok(Json(to_json::donation_requests(requests)))
}

#[get("/donation-requests/<id>")]
pub fn get_donation_request(connections: Connections, id: &str) -> Result<json::DonationRequest> {
    let request = usecases::get_donation_request(&connections.shared()?, id)?;
    Ok(Json(request.into()))
}

/// Replaces all properties except the id, the creation
/// time and the creator.
#[put("/donation-requests/<id>", format = "application/json", data = "<request>")]
pub fn put_donation_request(
    connections: Connections,
    defaults: &State<usecases::ResolutionDefaults>,
    id: &str,
    request: JsonResult<json::NewDonationRequest>,
) -> Result<json::DonationRequest> {
    let request = from_json::try_new_donation_request(request?.into_inner())?;
    let request = flows::update_donation_request(&connections, defaults, id, request.into())?;
    Ok(Json(request.into()))
}

#[patch("/donation-requests/<id>", format = "application/json", data = "<patch>")]
pub fn patch_donation_request(
    connections: Connections,
    defaults: &State<usecases::ResolutionDefaults>,
    id: &str,
    patch: JsonResult<json::DonationRequestPatch>,
) -> Result<json::DonationRequest> {
    let patch = from_json::try_donation_request_patch(patch?.into_inner())?;
    let request = flows::update_donation_request(&connections, defaults, id, patch)?;
    Ok(Json(request.into()))
}

#[delete("/donation-requests/<id>")]
pub fn delete_donation_request(connections: Connections, id: &str) -> StatusResult {
    flows::delete_donation_request(&connections, id)?;
    Ok(Status::NoContent)
}
