use super::*;

pub fn create_user(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_user(conn, new_user).map_err(|err| {
            warn!("Failed to create new user: {}", err);
            err
        })
    })?)
}
