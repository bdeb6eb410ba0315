use super::{donation_requests::check_request_item, error::map_unknown_reference, prelude::*};
use crate::util::validate::Validate;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDelivery {
    pub delivery_type         : DeliveryType,
    pub pickup_location_type  : PickupLocationType,
    pub dropoff_location_type : DropoffLocationType,
    pub pickup_time           : Timestamp,
    pub dropoff_time          : Timestamp,
    pub status                : Option<DeliveryStatus>,
    pub notes                 : Option<String>,
    pub delivered_quantity    : Option<u32>,
    pub request_item          : Option<String>,
    pub warehouse             : Option<String>,
    pub staff_user            : Option<String>,
    pub donation              : Option<String>,
    pub community             : Option<String>,
}

/// Modifications of an existing delivery.
///
/// `None` leaves the corresponding property untouched.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryPatch {
    pub pickup_time        : Option<Timestamp>,
    pub dropoff_time       : Option<Timestamp>,
    pub status             : Option<DeliveryStatus>,
    pub notes              : Option<String>,
    pub delivered_quantity : Option<u32>,
    pub request_item       : Option<String>,
    pub warehouse          : Option<String>,
    pub staff_user         : Option<String>,
    pub donation           : Option<String>,
    pub community          : Option<String>,
}

/// All references of a delivery must point to existing objects.
fn check_references<R>(repo: &R, delivery: &Delivery) -> Result<()>
where
    R: DonationRequestRepo + WarehouseRepo + UserRepo + DonationRepo + CommunityRepo,
{
    if let Some(id) = &delivery.request_item_id {
        check_request_item(repo, id.as_str())?;
    }
    if let Some(id) = &delivery.warehouse_id {
        repo.get_warehouse(id.as_str())
            .map_err(map_unknown_reference("warehouse", id.as_str()))?;
    }
    if let Some(id) = &delivery.staff_user_id {
        repo.get_user(id.as_str())
            .map_err(map_unknown_reference("staff_user", id.as_str()))?;
    }
    if let Some(id) = &delivery.donation_id {
        repo.get_donation(id.as_str())
            .map_err(map_unknown_reference("donation", id.as_str()))?;
    }
    if let Some(id) = &delivery.community_id {
        repo.get_community(id.as_str())
            .map_err(map_unknown_reference("community", id.as_str()))?;
    }
    Ok(())
}

fn reference(id: Option<String>) -> Option<Id> {
    id.map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .map(Id::from)
}

pub fn create_delivery<R>(repo: &R, new_delivery: NewDelivery) -> Result<Delivery>
where
    R: DeliveryRepo + DonationRequestRepo + WarehouseRepo + UserRepo + DonationRepo + CommunityRepo,
{
    let NewDelivery {
        delivery_type,
        pickup_location_type,
        dropoff_location_type,
        pickup_time,
        dropoff_time,
        status,
        notes,
        delivered_quantity,
        request_item,
        warehouse,
        staff_user,
        donation,
        community,
    } = new_delivery;
    let delivery = Delivery {
        id: Id::new_short(),
        delivery_type,
        pickup_location_type,
        dropoff_location_type,
        pickup_time,
        dropoff_time,
        status: status.unwrap_or_default(),
        notes: notes.unwrap_or_default(),
        delivered_quantity,
        request_item_id: reference(request_item),
        warehouse_id: reference(warehouse),
        staff_user_id: reference(staff_user),
        donation_id: reference(donation),
        community_id: reference(community),
    };
    delivery.validate()?;
    check_references(repo, &delivery)?;
    log::debug!("Creating delivery {} ({})", delivery.id, delivery.status);
    repo.create_delivery(&delivery)?;
    Ok(delivery)
}

pub fn update_delivery<R>(repo: &R, id: &str, patch: DeliveryPatch) -> Result<Delivery>
where
    R: DeliveryRepo + DonationRequestRepo + WarehouseRepo + UserRepo + DonationRepo + CommunityRepo,
{
    let mut delivery = repo.get_delivery(id)?;
    let DeliveryPatch {
        pickup_time,
        dropoff_time,
        status,
        notes,
        delivered_quantity,
        request_item,
        warehouse,
        staff_user,
        donation,
        community,
    } = patch;
    if let Some(status) = status {
        if !delivery.status.can_transition_to(status) {
            return Err(Error::StatusTransition {
                from: delivery.status,
                to: status,
            });
        }
        if status != delivery.status {
            log::info!(
                "Delivery {} changes its status from {} to {}",
                delivery.id,
                delivery.status,
                status
            );
        }
        delivery.status = status;
    }
    if let Some(pickup_time) = pickup_time {
        delivery.pickup_time = pickup_time;
    }
    if let Some(dropoff_time) = dropoff_time {
        delivery.dropoff_time = dropoff_time;
    }
    if let Some(notes) = notes {
        delivery.notes = notes;
    }
    if delivered_quantity.is_some() {
        delivery.delivered_quantity = delivered_quantity;
    }
    if let Some(id) = request_item {
        delivery.request_item_id = reference(Some(id));
    }
    if let Some(id) = warehouse {
        delivery.warehouse_id = reference(Some(id));
    }
    if let Some(id) = staff_user {
        delivery.staff_user_id = reference(Some(id));
    }
    if let Some(id) = donation {
        delivery.donation_id = reference(Some(id));
    }
    if let Some(id) = community {
        delivery.community_id = reference(Some(id));
    }
    delivery.validate()?;
    check_references(repo, &delivery)?;
    repo.update_delivery(&delivery)?;
    Ok(delivery)
}

pub fn get_delivery<R: DeliveryRepo>(repo: &R, id: &str) -> Result<Delivery> {
    Ok(repo.get_delivery(id)?)
}

pub fn list_deliveries<R: DeliveryRepo>(
    repo: &R,
    status: Option<DeliveryStatus>,
) -> Result<Vec<Delivery>> {
    let mut deliveries = repo.all_deliveries()?;
    if let Some(status) = status {
        deliveries.retain(|d| d.status == status);
    }
    Ok(deliveries)
}

pub fn delete_delivery<R: DeliveryRepo>(repo: &R, id: &str) -> Result<()> {
    Ok(repo.delete_delivery(id)?)
}
