use super::*;
use usecases::{DeliveryPatch, NewDelivery};

pub fn create_delivery(connections: &sqlite::Connections, new_delivery: NewDelivery) -> Result<Delivery> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_delivery(conn, new_delivery).map_err(|err| {
            warn!("Failed to store new delivery: {}", err);
            err
        })
    })?)
}

pub fn update_delivery(
    connections: &sqlite::Connections,
    id: &str,
    patch: DeliveryPatch,
) -> Result<Delivery> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_delivery(conn, id, patch).map_err(|err| {
            warn!("Failed to update delivery {}: {}", id, err);
            err
        })
    })?)
}

pub fn delete_delivery(connections: &sqlite::Connections, id: &str) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_delivery(conn, id))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn set_status(fixture: &BackendFixture, id: &str, status: DeliveryStatus) -> super::Result<Delivery> {
        let patch = usecases::DeliveryPatch {
            status: Some(status),
            ..Default::default()
        };
        flows::update_delivery(&fixture.db_connections, id, patch)
    }

    #[test]
    fn reject_leaving_a_terminal_state() {
        let fixture = BackendFixture::new();
        let delivery = flows::create_delivery(&fixture.db_connections, default_new_delivery()).unwrap();
        let id = delivery.id.as_str();
        assert!(set_status(&fixture, id, DeliveryStatus::InTransit).is_ok());
        assert!(set_status(&fixture, id, DeliveryStatus::Delivered).is_ok());
        let err = set_status(&fixture, id, DeliveryStatus::InTransit).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::StatusTransition { .. }))
        ));
        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(DeliveryStatus::Delivered, db.get_delivery(id).unwrap().status);
    }

    #[test]
    fn assign_delivery_staff() {
        let fixture = BackendFixture::new();
        fixture.create_user("driver", Role::DeliveryStaff);
        let delivery = flows::create_delivery(&fixture.db_connections, default_new_delivery()).unwrap();
        let patch = usecases::DeliveryPatch {
            staff_user: Some("driver".into()),
            ..Default::default()
        };
        let updated = flows::update_delivery(&fixture.db_connections, delivery.id.as_str(), patch).unwrap();
        assert_eq!(Some(Id::from("driver")), updated.staff_user_id);
        let patch = usecases::DeliveryPatch {
            staff_user: Some("nobody".into()),
            ..Default::default()
        };
        assert!(flows::update_delivery(&fixture.db_connections, delivery.id.as_str(), patch).is_err());
    }
}
