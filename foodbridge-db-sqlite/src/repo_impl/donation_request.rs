use super::*;

impl DonationRequestRepo for DbReadOnly<'_> {
    fn create_donation_request(&self, _request: &DonationRequest) -> Result<()> {
        read_only_violation()
    }
    fn update_donation_request(&self, _request: &DonationRequest) -> Result<()> {
        read_only_violation()
    }
    fn replace_request_items(&self, _request_id: &str, _items: &[RequestItem]) -> Result<()> {
        read_only_violation()
    }
    fn get_donation_request(&self, id: &str) -> Result<DonationRequest> {
        get_donation_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_donation_requests(&self) -> Result<Vec<DonationRequest>> {
        all_donation_requests(&mut self.conn.borrow_mut())
    }
    fn delete_donation_request(&self, _id: &str) -> Result<()> {
        read_only_violation()
    }
    fn get_request_item(&self, id: &str) -> Result<RequestItem> {
        get_request_item(&mut self.conn.borrow_mut(), id)
    }
}

impl DonationRequestRepo for DbConnection<'_> {
    fn create_donation_request(&self, request: &DonationRequest) -> Result<()> {
        create_donation_request(&mut self.conn.borrow_mut(), request)
    }
    fn update_donation_request(&self, request: &DonationRequest) -> Result<()> {
        update_donation_request(&mut self.conn.borrow_mut(), request)
    }
    fn replace_request_items(&self, request_id: &str, items: &[RequestItem]) -> Result<()> {
        replace_request_items(&mut self.conn.borrow_mut(), request_id, items)
    }
    fn get_donation_request(&self, id: &str) -> Result<DonationRequest> {
        get_donation_request(&mut self.conn.borrow_mut(), id)
    }
    fn all_donation_requests(&self) -> Result<Vec<DonationRequest>> {
        all_donation_requests(&mut self.conn.borrow_mut())
    }
    fn delete_donation_request(&self, id: &str) -> Result<()> {
        delete_donation_request(&mut self.conn.borrow_mut(), id)
    }
    fn get_request_item(&self, id: &str) -> Result<RequestItem> {
        get_request_item(&mut self.conn.borrow_mut(), id)
    }
}

fn create_donation_request(conn: &mut SqliteConnection, r: &DonationRequest) -> Result<()> {
    let new_request = models::NewDonationRequest {
        id: r.id.as_str(),
        title: &r.title,
        community_name: &r.community_name,
        recipient_address: &r.recipient_address,
        expected_delivery: r.expected_delivery.as_millis(),
        people_count: r.people_count.into(),
        contact_phone: r.contact_phone.as_deref(),
        notes: &r.notes,
        created_at: r.created_at.as_millis(),
        created_by: r.created_by.as_ref().map(Id::as_str),
        status: r.status,
        community_id: r.community_id.as_str(),
    };
    diesel::insert_into(schema::donation_requests::table)
        .values(&new_request)
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_request_items(conn, r.id.as_str(), &r.items)
}

fn update_donation_request(conn: &mut SqliteConnection, r: &DonationRequest) -> Result<()> {
    use schema::donation_requests::dsl;
    let changeset = models::DonationRequestChangeset {
        title: &r.title,
        community_name: &r.community_name,
        recipient_address: &r.recipient_address,
        expected_delivery: r.expected_delivery.as_millis(),
        people_count: r.people_count.into(),
        contact_phone: r.contact_phone.as_deref(),
        notes: &r.notes,
        status: r.status,
        community_id: r.community_id.as_str(),
    };
    let count = diesel::update(dsl::donation_requests.filter(dsl::id.eq(r.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_updated(count)
}

fn insert_request_items(
    conn: &mut SqliteConnection,
    request_id: &str,
    items: &[RequestItem],
) -> Result<()> {
    let new_items: Vec<_> = items
        .iter()
        .map(|item| models::NewRequestItem {
            id: item.id.as_str(),
            request_id,
            item: &item.item,
            quantity: item.quantity.into(),
            urgency: item.urgency.to_string(),
        })
        .collect();
    if new_items.is_empty() {
        return Ok(());
    }
    diesel::insert_into(schema::request_items::table)
        .values(&new_items)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

// References from deliveries to the deleted items are
// set to NULL by the database.
fn replace_request_items(
    conn: &mut SqliteConnection,
    request_id: &str,
    items: &[RequestItem],
) -> Result<()> {
    use schema::request_items::dsl;
    let deleted = diesel::delete(dsl::request_items.filter(dsl::request_id.eq(request_id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    log::debug!(
        "Deleted {deleted} item(s) of donation request {request_id} before inserting {} new item(s)",
        items.len()
    );
    insert_request_items(conn, request_id, items)
}

fn load_items_of_request(conn: &mut SqliteConnection, request_id: &str) -> Result<Vec<RequestItem>> {
    use schema::request_items::dsl;
    dsl::request_items
        .filter(dsl::request_id.eq(request_id))
        .order_by(dsl::rowid)
        .load::<models::RequestItemEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_request_item)
        .collect()
}

fn load_donation_request(
    conn: &mut SqliteConnection,
    request: models::DonationRequestEntity,
) -> Result<DonationRequest> {
    let models::DonationRequestEntity {
        rowid: _,
        id,
        title,
        community_name,
        recipient_address,
        expected_delivery,
        people_count,
        contact_phone,
        notes,
        created_at,
        created_by,
        status,
        community_id,
    } = request;
    let items = load_items_of_request(conn, &id)?;
    Ok(DonationRequest {
        id: id.into(),
        title,
        community_name,
        recipient_address,
        expected_delivery: load_timestamp(expected_delivery)?,
        people_count: load_count(people_count)?,
        contact_phone,
        notes,
        created_at: load_timestamp(created_at)?,
        created_by: created_by.map(Into::into),
        status,
        community_id: community_id.into(),
        items,
    })
}

fn get_donation_request(conn: &mut SqliteConnection, id: &str) -> Result<DonationRequest> {
    use schema::donation_requests::dsl;
    let request = dsl::donation_requests
        .filter(dsl::id.eq(id))
        .first::<models::DonationRequestEntity>(conn)
        .map_err(from_diesel_err)?;
    load_donation_request(conn, request)
}

fn all_donation_requests(conn: &mut SqliteConnection) -> Result<Vec<DonationRequest>> {
    use schema::donation_requests::dsl;
    let requests = dsl::donation_requests
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::DonationRequestEntity>(conn)
        .map_err(from_diesel_err)?;
    requests
        .into_iter()
        .map(|r| load_donation_request(conn, r))
        .collect()
}

// Items are deleted by the database
fn delete_donation_request(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::donation_requests::dsl;
    let count = diesel::delete(dsl::donation_requests.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_delete_err)?;
    expect_deleted(count)
}

fn get_request_item(conn: &mut SqliteConnection, id: &str) -> Result<RequestItem> {
    use schema::request_items::dsl;
    let item = dsl::request_items
        .filter(dsl::id.eq(id))
        .first::<models::RequestItemEntity>(conn)
        .map_err(from_diesel_err)?;
    load_request_item(item)
}
