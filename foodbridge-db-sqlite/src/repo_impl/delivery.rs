use super::*;

impl DeliveryRepo for DbReadOnly<'_> {
    fn create_delivery(&self, _delivery: &Delivery) -> Result<()> {
        read_only_violation()
    }
    fn update_delivery(&self, _delivery: &Delivery) -> Result<()> {
        read_only_violation()
    }
    fn get_delivery(&self, id: &str) -> Result<Delivery> {
        get_delivery(&mut self.conn.borrow_mut(), id)
    }
    fn all_deliveries(&self) -> Result<Vec<Delivery>> {
        all_deliveries(&mut self.conn.borrow_mut())
    }
    fn delete_delivery(&self, _id: &str) -> Result<()> {
        read_only_violation()
    }
}

impl DeliveryRepo for DbConnection<'_> {
    fn create_delivery(&self, delivery: &Delivery) -> Result<()> {
        create_delivery(&mut self.conn.borrow_mut(), delivery)
    }
    fn update_delivery(&self, delivery: &Delivery) -> Result<()> {
        update_delivery(&mut self.conn.borrow_mut(), delivery)
    }
    fn get_delivery(&self, id: &str) -> Result<Delivery> {
        get_delivery(&mut self.conn.borrow_mut(), id)
    }
    fn all_deliveries(&self) -> Result<Vec<Delivery>> {
        all_deliveries(&mut self.conn.borrow_mut())
    }
    fn delete_delivery(&self, id: &str) -> Result<()> {
        delete_delivery(&mut self.conn.borrow_mut(), id)
    }
}

fn new_delivery(d: &Delivery) -> models::NewDelivery<'_> {
    models::NewDelivery {
        id: d.id.as_str(),
        delivery_type: d.delivery_type.to_string(),
        pickup_location_type: d.pickup_location_type.to_string(),
        dropoff_location_type: d.dropoff_location_type.to_string(),
        pickup_time: d.pickup_time.as_millis(),
        dropoff_time: d.dropoff_time.as_millis(),
        status: d.status.to_string(),
        notes: &d.notes,
        delivered_quantity: d.delivered_quantity.map(Into::into),
        request_item_id: d.request_item_id.as_ref().map(Id::as_str),
        warehouse_id: d.warehouse_id.as_ref().map(Id::as_str),
        staff_user_id: d.staff_user_id.as_ref().map(Id::as_str),
        donation_id: d.donation_id.as_ref().map(Id::as_str),
        community_id: d.community_id.as_ref().map(Id::as_str),
    }
}

fn create_delivery(conn: &mut SqliteConnection, d: &Delivery) -> Result<()> {
    diesel::insert_into(schema::deliveries::table)
        .values(&new_delivery(d))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_delivery(conn: &mut SqliteConnection, d: &Delivery) -> Result<()> {
    use schema::deliveries::dsl;
    let count = diesel::update(dsl::deliveries.filter(dsl::id.eq(d.id.as_str())))
        .set(&new_delivery(d))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_updated(count)
}

fn get_delivery(conn: &mut SqliteConnection, id: &str) -> Result<Delivery> {
    use schema::deliveries::dsl;
    let delivery = dsl::deliveries
        .filter(dsl::id.eq(id))
        .first::<models::DeliveryEntity>(conn)
        .map_err(from_diesel_err)?;
    load_delivery(delivery)
}

fn all_deliveries(conn: &mut SqliteConnection) -> Result<Vec<Delivery>> {
    use schema::deliveries::dsl;
    dsl::deliveries
        .order_by(dsl::rowid)
        .load::<models::DeliveryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_delivery)
        .collect()
}

fn delete_delivery(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::deliveries::dsl;
    let count = diesel::delete(dsl::deliveries.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_delete_err)?;
    expect_deleted(count)
}
