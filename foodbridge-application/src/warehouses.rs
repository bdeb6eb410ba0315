use super::*;

pub fn create_warehouse(
    connections: &sqlite::Connections,
    new_warehouse: usecases::NewWarehouse,
) -> Result<Warehouse> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_warehouse(conn, new_warehouse).map_err(|err| {
            warn!("Failed to store new warehouse: {}", err);
            err
        })
    })?)
}

pub fn delete_warehouse(connections: &sqlite::Connections, id: &str) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_warehouse(conn, id))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn referenced_warehouse_cannot_be_deleted() {
        let fixture = BackendFixture::new();
        let request = fixture.create_donation_request(default_new_donation_request("Alpha"), None);
        let db = fixture.db_connections.shared().unwrap();
        let community = db.get_community(request.community_id.as_str()).unwrap();
        drop(db);
        let err = flows::delete_warehouse(&fixture.db_connections, community.warehouse_id.as_str())
            .unwrap_err();
        assert!(matches!(err, AppError::Business(BError::Repo(RepoError::InUse))));
        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(1, db.count_warehouses().unwrap());
    }
}
