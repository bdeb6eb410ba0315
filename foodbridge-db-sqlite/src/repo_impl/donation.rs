use super::*;

impl DonationRepo for DbReadOnly<'_> {
    fn create_donation(&self, _donation: &Donation) -> Result<()> {
        read_only_violation()
    }
    fn update_donation(&self, _donation: &Donation) -> Result<()> {
        read_only_violation()
    }
    fn get_donation(&self, id: &str) -> Result<Donation> {
        get_donation(&mut self.conn.borrow_mut(), id)
    }
    fn delete_donation(&self, _id: &str) -> Result<()> {
        read_only_violation()
    }
    fn query_donations(&self, filter: &DonationFilter) -> Result<Vec<Donation>> {
        query_donations(&mut self.conn.borrow_mut(), filter)
    }
}

impl DonationRepo for DbConnection<'_> {
    fn create_donation(&self, donation: &Donation) -> Result<()> {
        create_donation(&mut self.conn.borrow_mut(), donation)
    }
    fn update_donation(&self, donation: &Donation) -> Result<()> {
        update_donation(&mut self.conn.borrow_mut(), donation)
    }
    fn get_donation(&self, id: &str) -> Result<Donation> {
        get_donation(&mut self.conn.borrow_mut(), id)
    }
    fn delete_donation(&self, id: &str) -> Result<()> {
        delete_donation(&mut self.conn.borrow_mut(), id)
    }
    fn query_donations(&self, filter: &DonationFilter) -> Result<Vec<Donation>> {
        query_donations(&mut self.conn.borrow_mut(), filter)
    }
}

fn new_donation(d: &Donation) -> models::NewDonation<'_> {
    models::NewDonation {
        id: d.id.as_str(),
        restaurant_id: d.restaurant_id.as_str(),
        description: &d.description,
        quantity: d.quantity.into(),
        donated_at: d.donated_at.as_millis(),
        status: d.status,
    }
}

fn create_donation(conn: &mut SqliteConnection, d: &Donation) -> Result<()> {
    diesel::insert_into(schema::donations::table)
        .values(&new_donation(d))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_donation(conn: &mut SqliteConnection, d: &Donation) -> Result<()> {
    use schema::donations::dsl;
    let count = diesel::update(dsl::donations.filter(dsl::id.eq(d.id.as_str())))
        .set(&new_donation(d))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_updated(count)
}

fn get_donation(conn: &mut SqliteConnection, id: &str) -> Result<Donation> {
    use schema::donations::dsl;
    let donation = dsl::donations
        .filter(dsl::id.eq(id))
        .first::<models::DonationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_donation(donation)
}

fn delete_donation(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::donations::dsl;
    let count = diesel::delete(dsl::donations.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_delete_err)?;
    expect_deleted(count)
}

fn query_donations(conn: &mut SqliteConnection, filter: &DonationFilter) -> Result<Vec<Donation>> {
    use schema::donations::dsl;
    let DonationFilter {
        restaurant_id,
        status,
        donated_from,
        donated_until,
    } = filter;
    let mut query = dsl::donations.into_boxed();
    if let Some(restaurant_id) = restaurant_id {
        query = query.filter(dsl::restaurant_id.eq(restaurant_id.as_str()));
    }
    if let Some(status) = status {
        query = query.filter(dsl::status.eq(*status));
    }
    if let Some(from) = donated_from {
        query = query.filter(dsl::donated_at.ge(from.as_millis()));
    }
    if let Some(until) = donated_until {
        query = query.filter(dsl::donated_at.le(until.as_millis()));
    }
    query
        .order_by((dsl::donated_at.desc(), dsl::rowid.desc()))
        .load::<models::DonationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_donation)
        .collect()
}
