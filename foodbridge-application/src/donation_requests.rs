use super::*;
use usecases::{DonationRequestPatch, NewDonationRequest, ResolutionDefaults, ResolvedCommunity};

fn log_resolved_community(request: &DonationRequest, resolved: &ResolvedCommunity) {
    if let ResolvedCommunity::Created {
        community,
        warehouse,
    } = resolved
    {
        let warehouse = match warehouse {
            usecases::ResolvedWarehouse::Existing(w) => format!("existing warehouse {}", w.id),
            usecases::ResolvedWarehouse::Created(w) => format!("new warehouse {}", w.id),
        };
        info!(
            "Created community '{}' ({}) supplied by {warehouse} for donation request {}",
            community.name, community.id, request.id
        );
    }
}

/// Creates a new donation request and all implicitly
/// needed records within a single transaction.
pub fn create_donation_request(
    connections: &sqlite::Connections,
    defaults: &ResolutionDefaults,
    new_request: NewDonationRequest,
    user_id: Option<&str>,
) -> Result<DonationRequest> {
    let (request, resolved) = connections.exclusive()?.transaction(|conn| {
        let created_by = usecases::resolve_creator(conn, user_id)?;
        usecases::create_donation_request(conn, defaults, new_request, created_by).map_err(|err| {
            warn!("Failed to store new donation request: {}", err);
            err
        })
    })?;
    log_resolved_community(&request, &resolved);
    Ok(request)
}

pub fn update_donation_request(
    connections: &sqlite::Connections,
    defaults: &ResolutionDefaults,
    id: &str,
    patch: DonationRequestPatch,
) -> Result<DonationRequest> {
    let (request, resolved) = connections.exclusive()?.transaction(|conn| {
        usecases::update_donation_request(conn, defaults, id, patch).map_err(|err| {
            warn!("Failed to update donation request {}: {}", id, err);
            err
        })
    })?;
    if let Some(resolved) = resolved {
        log_resolved_community(&request, &resolved);
    }
    Ok(request)
}

pub fn delete_donation_request(connections: &sqlite::Connections, id: &str) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_donation_request(conn, id))?)
}
