// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The object is still referenced by other objects")]
    InUse,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        match self.get_user(id) {
            Ok(user) => Ok(Some(user)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
    fn all_users(&self) -> Result<Vec<User>>;
    fn users_with_role(&self, role: Role) -> Result<Vec<User>> {
        Ok(self
            .all_users()?
            .into_iter()
            .filter(|u| u.role == role)
            .collect())
    }
}

pub trait RestaurantRepo {
    fn create_restaurant(&self, restaurant: &Restaurant) -> Result<()>;
    fn get_restaurant(&self, id: &str) -> Result<Restaurant>;
    fn all_restaurants(&self) -> Result<Vec<Restaurant>>;
    fn delete_restaurant(&self, id: &str) -> Result<()>;
}

/// Constraints for selecting donations.
///
/// `None` omits the corresponding constraint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DonationFilter {
    pub restaurant_id: Option<Id>,
    pub status: Option<bool>,
    /// Inclusive lower bound of `donated_at`
    pub donated_from: Option<Timestamp>,
    /// Inclusive upper bound of `donated_at`
    pub donated_until: Option<Timestamp>,
}

impl DonationFilter {
    pub fn matches(&self, donation: &Donation) -> bool {
        self.restaurant_id
            .as_ref()
            .map_or(true, |id| *id == donation.restaurant_id)
            && self.status.map_or(true, |s| s == donation.status)
            && self
                .donated_from
                .map_or(true, |from| donation.donated_at >= from)
            && self
                .donated_until
                .map_or(true, |until| donation.donated_at <= until)
    }
}

pub trait DonationRepo {
    fn create_donation(&self, donation: &Donation) -> Result<()>;
    fn update_donation(&self, donation: &Donation) -> Result<()>;
    fn get_donation(&self, id: &str) -> Result<Donation>;
    fn delete_donation(&self, id: &str) -> Result<()>;
    // Most recent donations first
    fn query_donations(&self, filter: &DonationFilter) -> Result<Vec<Donation>>;
}

pub trait WarehouseRepo {
    fn create_warehouse(&self, warehouse: &Warehouse) -> Result<()>;
    fn get_warehouse(&self, id: &str) -> Result<Warehouse>;
    // The first warehouse in creation order
    fn first_warehouse(&self) -> Result<Option<Warehouse>>;
    fn all_warehouses(&self) -> Result<Vec<Warehouse>>;
    fn count_warehouses(&self) -> Result<usize>;
    fn delete_warehouse(&self, id: &str) -> Result<()>;
}

pub trait CommunityRepo {
    fn create_community(&self, community: &Community) -> Result<()>;
    fn get_community(&self, id: &str) -> Result<Community>;
    // Names are matched case-insensitively
    fn find_community_by_name(&self, name: &str) -> Result<Option<Community>>;
    fn all_communities(&self) -> Result<Vec<Community>>;
    fn count_communities(&self) -> Result<usize>;
}

pub trait DonationRequestRepo {
    // Stores the request together with all of its items
    fn create_donation_request(&self, request: &DonationRequest) -> Result<()>;
    // Only updates the request itself, not its items
    fn update_donation_request(&self, request: &DonationRequest) -> Result<()>;
    // Deletes all existing items of the request before inserting the new ones
    fn replace_request_items(&self, request_id: &str, items: &[RequestItem]) -> Result<()>;
    fn get_donation_request(&self, id: &str) -> Result<DonationRequest>;
    // Most recent requests first
    fn all_donation_requests(&self) -> Result<Vec<DonationRequest>>;
    // Also deletes all items of the request
    fn delete_donation_request(&self, id: &str) -> Result<()>;
    fn get_request_item(&self, id: &str) -> Result<RequestItem>;
}

pub trait DeliveryRepo {
    fn create_delivery(&self, delivery: &Delivery) -> Result<()>;
    fn update_delivery(&self, delivery: &Delivery) -> Result<()>;
    fn get_delivery(&self, id: &str) -> Result<Delivery>;
    fn all_deliveries(&self) -> Result<Vec<Delivery>>;
    fn delete_delivery(&self, id: &str) -> Result<()>;
}
