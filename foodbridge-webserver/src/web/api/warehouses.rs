use super::*;

#[get("/warehouses")]
pub fn get_warehouses(connections: Connections) -> Result<Vec<json::Warehouse>> {
    let warehouses = usecases::list_warehouses(&connections.shared()?)?;
    Ok(Json(warehouses.into_iter().map(Into::into).collect()))
}

#[post("/warehouses", format = "application/json", data = "<new_warehouse>")]
pub fn post_warehouse(
    connections: Connections,
    new_warehouse: JsonResult<json::NewWarehouse>,
) -> CreatedResult<json::Warehouse> {
    let new_warehouse = from_json::try_new_warehouse(new_warehouse?.into_inner())?;
    let warehouse = flows::create_warehouse(&connections, new_warehouse)?;
    Ok((Status::Created, Json(warehouse.into())))
}

#[get("/warehouses/<id>")]
pub fn get_warehouse(connections: Connections, id: &str) -> Result<json::Warehouse> {
    let warehouse = usecases::get_warehouse(&connections.shared()?, id)?;
    Ok(Json(warehouse.into()))
}

/// Fails with 409 while a community or delivery refers to it.
#[delete("/warehouses/<id>")]
pub fn delete_warehouse(connections: Connections, id: &str) -> StatusResult {
    flows::delete_warehouse(&connections, id)?;
    Ok(Status::NoContent)
}
