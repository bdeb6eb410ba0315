use super::*;

pub fn create_restaurant(
    connections: &sqlite::Connections,
    new_restaurant: usecases::NewRestaurant,
) -> Result<Restaurant> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_restaurant(conn, new_restaurant).map_err(|err| {
            warn!("Failed to store new restaurant: {}", err);
            err
        })
    })?)
}

pub fn delete_restaurant(connections: &sqlite::Connections, id: &str) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_restaurant(conn, id))?)
}
