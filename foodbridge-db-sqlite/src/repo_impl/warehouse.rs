use super::*;

impl WarehouseRepo for DbReadOnly<'_> {
    fn create_warehouse(&self, _warehouse: &Warehouse) -> Result<()> {
        read_only_violation()
    }
    fn get_warehouse(&self, id: &str) -> Result<Warehouse> {
        get_warehouse(&mut self.conn.borrow_mut(), id)
    }
    fn first_warehouse(&self) -> Result<Option<Warehouse>> {
        first_warehouse(&mut self.conn.borrow_mut())
    }
    fn all_warehouses(&self) -> Result<Vec<Warehouse>> {
        all_warehouses(&mut self.conn.borrow_mut())
    }
    fn count_warehouses(&self) -> Result<usize> {
        count_warehouses(&mut self.conn.borrow_mut())
    }
    fn delete_warehouse(&self, _id: &str) -> Result<()> {
        read_only_violation()
    }
}

impl WarehouseRepo for DbConnection<'_> {
    fn create_warehouse(&self, warehouse: &Warehouse) -> Result<()> {
        create_warehouse(&mut self.conn.borrow_mut(), warehouse)
    }
    fn get_warehouse(&self, id: &str) -> Result<Warehouse> {
        get_warehouse(&mut self.conn.borrow_mut(), id)
    }
    fn first_warehouse(&self) -> Result<Option<Warehouse>> {
        first_warehouse(&mut self.conn.borrow_mut())
    }
    fn all_warehouses(&self) -> Result<Vec<Warehouse>> {
        all_warehouses(&mut self.conn.borrow_mut())
    }
    fn count_warehouses(&self) -> Result<usize> {
        count_warehouses(&mut self.conn.borrow_mut())
    }
    fn delete_warehouse(&self, id: &str) -> Result<()> {
        delete_warehouse(&mut self.conn.borrow_mut(), id)
    }
}

fn create_warehouse(conn: &mut SqliteConnection, w: &Warehouse) -> Result<()> {
    let new_warehouse = models::NewWarehouse {
        id: w.id.as_str(),
        address: &w.address,
        capacity: w.capacity,
        stored_date: format_date(w.stored_date),
        expiry_date: format_date(w.expiry_date),
    };
    diesel::insert_into(schema::warehouses::table)
        .values(&new_warehouse)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_warehouse(conn: &mut SqliteConnection, id: &str) -> Result<Warehouse> {
    use schema::warehouses::dsl;
    let warehouse = dsl::warehouses
        .filter(dsl::id.eq(id))
        .first::<models::WarehouseEntity>(conn)
        .map_err(from_diesel_err)?;
    load_warehouse(warehouse)
}

fn first_warehouse(conn: &mut SqliteConnection) -> Result<Option<Warehouse>> {
    use schema::warehouses::dsl;
    dsl::warehouses
        .order_by(dsl::rowid)
        .first::<models::WarehouseEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_warehouse)
        .transpose()
}

fn all_warehouses(conn: &mut SqliteConnection) -> Result<Vec<Warehouse>> {
    use schema::warehouses::dsl;
    dsl::warehouses
        .order_by(dsl::rowid)
        .load::<models::WarehouseEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_warehouse)
        .collect()
}

fn count_warehouses(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::warehouses::dsl;
    Ok(dsl::warehouses
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn delete_warehouse(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::warehouses::dsl;
    let count = diesel::delete(dsl::warehouses.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_delete_err)?;
    expect_deleted(count)
}
