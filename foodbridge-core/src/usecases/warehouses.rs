use super::prelude::*;
use crate::util::validate::Validate;

#[derive(Debug, Clone, PartialEq)]
pub struct NewWarehouse {
    pub address: String,
    pub capacity: f64,
    /// Defaults to today
    pub stored_date: Option<Date>,
    pub expiry_date: Date,
}

pub fn create_warehouse<R: WarehouseRepo>(repo: &R, new_warehouse: NewWarehouse) -> Result<Warehouse> {
    let NewWarehouse {
        address,
        capacity,
        stored_date,
        expiry_date,
    } = new_warehouse;
    let warehouse = Warehouse {
        id: Id::new(),
        address: address.trim().to_owned(),
        capacity,
        stored_date: stored_date.unwrap_or_else(today),
        expiry_date,
    };
    warehouse.validate()?;
    log::debug!("Creating warehouse {} at '{}'", warehouse.id, warehouse.address);
    repo.create_warehouse(&warehouse)?;
    Ok(warehouse)
}

pub fn get_warehouse<R: WarehouseRepo>(repo: &R, id: &str) -> Result<Warehouse> {
    Ok(repo.get_warehouse(id)?)
}

pub fn list_warehouses<R: WarehouseRepo>(repo: &R) -> Result<Vec<Warehouse>> {
    Ok(repo.all_warehouses()?)
}

/// Warehouses that still supply a community or are
/// part of a delivery cannot be deleted.
pub fn delete_warehouse<R: WarehouseRepo>(repo: &R, id: &str) -> Result<()> {
    repo.delete_warehouse(id).map_err(|err| {
        if matches!(err, RepoError::InUse) {
            log::info!("Refusing to delete warehouse {id} that is still in use");
        }
        Error::Repo(err)
    })
}
