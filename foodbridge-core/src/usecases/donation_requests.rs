use super::{error::map_unknown_reference, prelude::*, resolve_community::*};
use crate::util::validate::{is_blank, non_blank};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequestItem {
    /// Generated if missing
    pub need_id: Option<String>,
    pub item: String,
    pub quantity: u32,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonationRequest {
    pub title: String,
    pub community_id: Option<String>,
    pub community_name: Option<String>,
    pub recipient_address: String,
    pub expected_delivery: Timestamp,
    pub people_count: u32,
    pub contact_phone: Option<String>,
    pub notes: Option<String>,
    pub status: bool,
    pub items: Vec<NewRequestItem>,
}

/// Modifications of an existing donation request.
///
/// `None` leaves the corresponding property untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationRequestPatch {
    pub title: Option<String>,
    pub community_id: Option<String>,
    pub community_name: Option<String>,
    pub recipient_address: Option<String>,
    pub expected_delivery: Option<Timestamp>,
    pub people_count: Option<u32>,
    pub contact_phone: Option<String>,
    pub notes: Option<String>,
    pub status: Option<bool>,
    pub items: Option<Vec<NewRequestItem>>,
}

/// A full replacement: omitted optional properties are cleared.
impl From<NewDonationRequest> for DonationRequestPatch {
    fn from(from: NewDonationRequest) -> Self {
        let NewDonationRequest {
            title,
            community_id,
            community_name,
            recipient_address,
            expected_delivery,
            people_count,
            contact_phone,
            notes,
            status,
            items,
        } = from;
        Self {
            title: Some(title),
            community_id,
            community_name,
            recipient_address: Some(recipient_address),
            expected_delivery: Some(expected_delivery),
            people_count: Some(people_count),
            contact_phone: Some(contact_phone.unwrap_or_default()),
            notes: Some(notes.unwrap_or_default()),
            status: Some(status),
            items: Some(items),
        }
    }
}

fn request_items(new_items: Vec<NewRequestItem>) -> Result<Vec<RequestItem>> {
    new_items
        .into_iter()
        .map(|new_item| {
            let NewRequestItem {
                need_id,
                item,
                quantity,
                urgency,
            } = new_item;
            if is_blank(&item) {
                return Err(Error::EmptyField("item"));
            }
            let id = non_blank(need_id).map(Id::from).unwrap_or_else(Id::new_short);
            Ok(RequestItem {
                id,
                item: item.trim().to_owned(),
                quantity,
                urgency,
            })
        })
        .collect()
}

fn require_non_blank(field: &'static str, value: String) -> Result<String> {
    if is_blank(&value) {
        return Err(Error::EmptyField(field));
    }
    Ok(value.trim().to_owned())
}

/// Creates a new donation request together with all its items.
///
/// The community is resolved and created on demand.
pub fn create_donation_request<R>(
    repo: &R,
    defaults: &ResolutionDefaults,
    new_request: NewDonationRequest,
    created_by: Option<Id>,
) -> Result<(DonationRequest, ResolvedCommunity)>
where
    R: DonationRequestRepo + CommunityRepo + WarehouseRepo,
{
    let NewDonationRequest {
        title,
        community_id,
        community_name,
        recipient_address,
        expected_delivery,
        people_count,
        contact_phone,
        notes,
        status,
        items,
    } = new_request;
    let title = require_non_blank("title", title)?;
    let recipient_address = require_non_blank("recipient_address", recipient_address)?;
    let items = request_items(items)?;
    let community_name = community_name.map(|name| name.trim().to_owned());
    let resolved = resolve_community(
        repo,
        defaults,
        CommunityHint {
            id: community_id.as_deref(),
            name: community_name.as_deref(),
            address: Some(&recipient_address),
            population: Some(people_count),
        },
    )?;
    let community = resolved.community();
    let request = DonationRequest {
        id: Id::new_short(),
        title,
        community_name: community_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| community.name.clone()),
        recipient_address,
        expected_delivery,
        people_count,
        contact_phone: non_blank(contact_phone),
        notes: notes.unwrap_or_default(),
        created_at: Timestamp::now(),
        created_by,
        status,
        community_id: community.id.clone(),
        items,
    };
    log::debug!(
        "Creating donation request {} with {} item(s) for community {}",
        request.id,
        request.items.len(),
        request.community_id
    );
    repo.create_donation_request(&request)?;
    Ok((request, resolved))
}

/// Applies the patch to an existing donation request.
///
/// The community is only reassigned if the patch contains a
/// community name or reference. A patched item list replaces
/// all existing items.
pub fn update_donation_request<R>(
    repo: &R,
    defaults: &ResolutionDefaults,
    id: &str,
    patch: DonationRequestPatch,
) -> Result<(DonationRequest, Option<ResolvedCommunity>)>
where
    R: DonationRequestRepo + CommunityRepo + WarehouseRepo,
{
    let mut request = repo.get_donation_request(id)?;
    let DonationRequestPatch {
        title,
        community_id,
        community_name,
        recipient_address,
        expected_delivery,
        people_count,
        contact_phone,
        notes,
        status,
        items,
    } = patch;
    if let Some(title) = title {
        request.title = require_non_blank("title", title)?;
    }
    if let Some(recipient_address) = recipient_address {
        request.recipient_address = require_non_blank("recipient_address", recipient_address)?;
    }
    if let Some(expected_delivery) = expected_delivery {
        request.expected_delivery = expected_delivery;
    }
    if let Some(people_count) = people_count {
        request.people_count = people_count;
    }
    if let Some(contact_phone) = contact_phone {
        request.contact_phone = non_blank(Some(contact_phone));
    }
    if let Some(notes) = notes {
        request.notes = notes;
    }
    if let Some(status) = status {
        request.status = status;
    }
    let items = items.map(request_items).transpose()?;
    let community_name = community_name.map(|name| name.trim().to_owned());
    let resolved = if community_id.is_some() || community_name.is_some() {
        let resolved = resolve_community(
            repo,
            defaults,
            CommunityHint {
                id: community_id.as_deref(),
                name: community_name.as_deref(),
                address: Some(&request.recipient_address),
                population: Some(request.people_count),
            },
        )?;
        let community = resolved.community();
        request.community_id = community.id.clone();
        request.community_name = community_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| community.name.clone());
        Some(resolved)
    } else {
        None
    };
    log::debug!("Updating donation request {}", request.id);
    repo.update_donation_request(&request)?;
    if let Some(items) = items {
        log::debug!(
            "Replacing {} item(s) of donation request {} with {} new item(s)",
            request.items.len(),
            request.id,
            items.len()
        );
        repo.replace_request_items(request.id.as_str(), &items)?;
        request.items = items;
    }
    Ok((request, resolved))
}

pub fn get_donation_request<R: DonationRequestRepo>(repo: &R, id: &str) -> Result<DonationRequest> {
    Ok(repo.get_donation_request(id)?)
}

pub fn list_donation_requests<R: DonationRequestRepo>(repo: &R) -> Result<Vec<DonationRequest>> {
    Ok(repo.all_donation_requests()?)
}

pub fn delete_donation_request<R: DonationRequestRepo>(repo: &R, id: &str) -> Result<()> {
    log::debug!("Deleting donation request {id}");
    Ok(repo.delete_donation_request(id)?)
}

/// Looks up the author of a request.
///
/// Unknown or blank user ids are ignored.
pub fn resolve_creator<R: UserRepo>(repo: &R, user_id: Option<&str>) -> Result<Option<Id>> {
    let Some(user_id) = user_id.map(str::trim).filter(|id| !id.is_empty()) else {
        return Ok(None);
    };
    let user = repo.try_get_user(user_id)?;
    if user.is_none() {
        log::debug!("Ignoring unknown creator {user_id}");
    }
    Ok(user.map(|u| u.id))
}

/// Verifies that the referenced item exists.
pub(crate) fn check_request_item<R: DonationRequestRepo>(repo: &R, id: &str) -> Result<()> {
    repo.get_request_item(id)
        .map(|_| ())
        .map_err(map_unknown_reference("request_item", id))
}
