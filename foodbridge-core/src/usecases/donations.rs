use super::{error::map_unknown_reference, prelude::*};
use crate::util::{
    parse::{parse_lower_time_bound, parse_status_param, parse_upper_time_bound, StatusParam},
    validate::is_blank,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonation {
    /// Generated if missing
    pub donation_id: Option<String>,
    pub restaurant: String,
    pub description: String,
    pub quantity: u32,
    /// Defaults to the current time
    pub donated_at: Option<Timestamp>,
    pub status: bool,
}

/// Modifications of an existing donation.
///
/// Both `donation_id` and `restaurant` are only accepted
/// if they don't differ from the current values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationPatch {
    /// `Some(None)` asks to remove the id, which is never accepted.
    pub donation_id: Option<Option<String>>,
    pub restaurant: Option<Option<String>>,
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub donated_at: Option<Timestamp>,
    pub status: Option<bool>,
}

impl From<NewDonation> for DonationPatch {
    fn from(from: NewDonation) -> Self {
        let NewDonation {
            donation_id,
            restaurant,
            description,
            quantity,
            donated_at,
            status,
        } = from;
        Self {
            donation_id: donation_id.map(Some),
            restaurant: Some(Some(restaurant)),
            description: Some(description),
            quantity: Some(quantity),
            donated_at,
            status: Some(status),
        }
    }
}

/// Unparsed query parameters for selecting donations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationQuery {
    pub restaurant_id: Option<String>,
    pub status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl DonationQuery {
    /// Returns `None` if no donation could ever match.
    pub fn to_filter(&self) -> Result<Option<DonationFilter>> {
        let status = match parse_status_param(self.status.as_deref()) {
            StatusParam::Any => None,
            StatusParam::Is(status) => Some(status),
            StatusParam::Unmatchable => return Ok(None),
        };
        let restaurant_id = self
            .restaurant_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(Id::from);
        let donated_from = parse_time_param("date_from", self.date_from.as_deref(), parse_lower_time_bound)?;
        let donated_until = parse_time_param("date_to", self.date_to.as_deref(), parse_upper_time_bound)?;
        Ok(Some(DonationFilter {
            restaurant_id,
            status,
            donated_from,
            donated_until,
        }))
    }
}

fn parse_time_param(
    field: &'static str,
    param: Option<&str>,
    parse: impl FnOnce(&str) -> Option<Timestamp>,
) -> Result<Option<Timestamp>> {
    let Some(param) = param.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    parse(param)
        .map(Some)
        .ok_or_else(|| Error::invalid_field(field, param))
}

pub fn query_donations<R: DonationRepo>(repo: &R, query: &DonationQuery) -> Result<Vec<Donation>> {
    let Some(filter) = query.to_filter()? else {
        log::debug!("Unrecognized status filter: {:?}", query.status);
        return Ok(vec![]);
    };
    Ok(repo.query_donations(&filter)?)
}

pub fn create_donation<R>(repo: &R, new_donation: NewDonation) -> Result<Donation>
where
    R: DonationRepo + RestaurantRepo,
{
    let NewDonation {
        donation_id,
        restaurant,
        description,
        quantity,
        donated_at,
        status,
    } = new_donation;
    if is_blank(&description) {
        return Err(Error::EmptyField("description"));
    }
    let restaurant = restaurant.trim();
    repo.get_restaurant(restaurant)
        .map_err(map_unknown_reference("restaurant", restaurant))?;
    let id = donation_id
        .map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .map(Id::from)
        .unwrap_or_else(Id::new_short);
    let donation = Donation {
        id,
        restaurant_id: restaurant.into(),
        description,
        quantity,
        donated_at: donated_at.unwrap_or_else(Timestamp::now),
        status,
    };
    log::debug!(
        "Creating donation {} of restaurant {}",
        donation.id,
        donation.restaurant_id
    );
    repo.create_donation(&donation)?;
    Ok(donation)
}

/// Updates a donation while protecting its identity
/// and its restaurant.
pub fn update_donation<R: DonationRepo>(repo: &R, id: &str, patch: DonationPatch) -> Result<Donation> {
    let mut donation = repo.get_donation(id)?;
    let DonationPatch {
        donation_id,
        restaurant,
        description,
        quantity,
        donated_at,
        status,
    } = patch;
    if changes_identity(restaurant, &donation.restaurant_id) {
        return Err(Error::RestaurantImmutable);
    }
    if changes_identity(donation_id, &donation.id) {
        return Err(Error::DonationIdImmutable);
    }
    if let Some(description) = description {
        if is_blank(&description) {
            return Err(Error::EmptyField("description"));
        }
        donation.description = description;
    }
    if let Some(quantity) = quantity {
        donation.quantity = quantity;
    }
    if let Some(donated_at) = donated_at {
        donation.donated_at = donated_at;
    }
    if let Some(status) = status {
        donation.status = status;
    }
    repo.update_donation(&donation)?;
    Ok(donation)
}

fn changes_identity(requested: Option<Option<String>>, current: &Id) -> bool {
    requested.is_some_and(|id| id.as_deref().map(str::trim) != Some(current.as_str()))
}

pub fn get_donation<R: DonationRepo>(repo: &R, id: &str) -> Result<Donation> {
    Ok(repo.get_donation(id)?)
}

pub fn delete_donation<R: DonationRepo>(repo: &R, id: &str) -> Result<()> {
    Ok(repo.delete_donation(id)?)
}
