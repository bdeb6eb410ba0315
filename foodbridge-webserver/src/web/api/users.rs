use super::*;

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    connections: Connections,
    new_user: JsonResult<json::NewUser>,
) -> CreatedResult<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::create_user(&connections, new_user)?;
    Ok((Status::Created, Json(user.into())))
}

#[get("/users/delivery-staff")]
pub fn get_delivery_staff(connections: Connections) -> Result<Vec<json::User>> {
    let staff = usecases::delivery_staff(&connections.shared()?)?;
    Ok(Json(staff.into_iter().map(Into::into).collect()))
}

#[get("/users/<id>")]
pub fn get_user(connections: Connections, id: &str) -> Result<json::User> {
    let user = usecases::get_user(&connections.shared()?, id)?;
    Ok(Json(user.into()))
}
