use super::*;
use usecases::{DonationPatch, NewDonation};

pub fn create_donation(connections: &sqlite::Connections, new_donation: NewDonation) -> Result<Donation> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_donation(conn, new_donation).map_err(|err| {
            warn!("Failed to store new donation: {}", err);
            err
        })
    })?)
}

/// Updates a donation, the restaurant and the id cannot be changed.
pub fn update_donation(
    connections: &sqlite::Connections,
    id: &str,
    patch: DonationPatch,
) -> Result<Donation> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_donation(conn, id, patch).map_err(|err| {
            warn!("Failed to update donation {}: {}", id, err);
            err
        })
    })?)
}

pub fn delete_donation(connections: &sqlite::Connections, id: &str) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_donation(conn, id))?)
}
