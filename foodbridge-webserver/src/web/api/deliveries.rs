use super::*;

#[get("/deliveries?<status>")]
pub fn get_deliveries(
    connections: Connections,
    status: Option<&str>,
) -> Result<Vec<json::Delivery>> {
    let status = status
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<DeliveryStatus>()
                .map_err(|_| usecases::Error::invalid_field("status", s))
        })
        .transpose()?;
    let deliveries = usecases::list_deliveries(&connections.shared()?, status)?;
    Ok(Json(to_json::deliveries(deliveries)))
}

#[post("/deliveries", format = "application/json", data = "<new_delivery>")]
pub fn post_delivery(
    connections: Connections,
    new_delivery: JsonResult<json::NewDelivery>,
) -> CreatedResult<json::Delivery> {
    let new_delivery = from_json::try_new_delivery(new_delivery?.into_inner())?;
    let delivery = flows::create_delivery(&connections, new_delivery)?;
    Ok((Status::Created, Json(delivery.into())))
}

#[get("/deliveries/<id>")]
pub fn get_delivery(connections: Connections, id: &str) -> Result<json::Delivery> {
    let delivery = usecases::get_delivery(&connections.shared()?, id)?;
    Ok(Json(delivery.into()))
}

#[patch("/deliveries/<id>", format = "application/json", data = "<patch>")]
pub fn patch_delivery(
    connections: Connections,
    id: &str,
    patch: JsonResult<json::DeliveryPatch>,
) -> Result<json::Delivery> {
    let patch = from_json::try_delivery_patch(patch?.into_inner())?;
    let delivery = flows::update_delivery(&connections, id, patch)?;
    Ok(Json(delivery.into()))
}

#[delete("/deliveries/<id>")]
pub fn delete_delivery(connections: Connections, id: &str) -> StatusResult {
    flows::delete_delivery(&connections, id)?;
    Ok(Status::NoContent)
}
