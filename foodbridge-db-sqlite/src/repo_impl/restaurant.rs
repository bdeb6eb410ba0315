use super::*;

impl RestaurantRepo for DbReadOnly<'_> {
    fn create_restaurant(&self, _restaurant: &Restaurant) -> Result<()> {
        read_only_violation()
    }
    fn get_restaurant(&self, id: &str) -> Result<Restaurant> {
        get_restaurant(&mut self.conn.borrow_mut(), id)
    }
    fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        all_restaurants(&mut self.conn.borrow_mut())
    }
    fn delete_restaurant(&self, _id: &str) -> Result<()> {
        read_only_violation()
    }
}

impl RestaurantRepo for DbConnection<'_> {
    fn create_restaurant(&self, restaurant: &Restaurant) -> Result<()> {
        create_restaurant(&mut self.conn.borrow_mut(), restaurant)
    }
    fn get_restaurant(&self, id: &str) -> Result<Restaurant> {
        get_restaurant(&mut self.conn.borrow_mut(), id)
    }
    fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        all_restaurants(&mut self.conn.borrow_mut())
    }
    fn delete_restaurant(&self, id: &str) -> Result<()> {
        delete_restaurant(&mut self.conn.borrow_mut(), id)
    }
}

fn create_restaurant(conn: &mut SqliteConnection, r: &Restaurant) -> Result<()> {
    let new_restaurant = models::NewRestaurant {
        id: r.id.as_str(),
        name: &r.name,
        address: &r.address,
        contact_phone: r.contact_phone.as_deref(),
    };
    diesel::insert_into(schema::restaurants::table)
        .values(&new_restaurant)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_restaurant(conn: &mut SqliteConnection, id: &str) -> Result<Restaurant> {
    use schema::restaurants::dsl;
    Ok(dsl::restaurants
        .filter(dsl::id.eq(id))
        .first::<models::RestaurantEntity>(conn)
        .map(load_restaurant)
        .map_err(from_diesel_err)?)
}

fn all_restaurants(conn: &mut SqliteConnection) -> Result<Vec<Restaurant>> {
    use schema::restaurants::dsl;
    Ok(dsl::restaurants
        .order_by(dsl::rowid)
        .load::<models::RestaurantEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_restaurant)
        .collect())
}

fn delete_restaurant(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::restaurants::dsl;
    let count = diesel::delete(dsl::restaurants.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_delete_err)?;
    expect_deleted(count)
}
