use strum::{Display, EnumIter, EnumString};

use crate::{id::Id, time::Timestamp};

/// A community's solicited need for food items.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationRequest {
    pub id                : Id,
    pub title             : String,
    pub community_name    : String,
    pub recipient_address : String,
    pub expected_delivery : Timestamp,
    pub people_count      : u32,
    pub contact_phone     : Option<String>,
    pub notes             : String,
    // Set once on creation
    pub created_at        : Timestamp,
    pub created_by        : Option<Id>,
    // `true` if the request has been fulfilled
    pub status            : bool,
    pub community_id      : Id,
    pub items             : Vec<RequestItem>,
}

/// A single line-item need within a donation request.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestItem {
    pub id       : Id,
    pub item     : String,
    pub quantity : u32,
    pub urgency  : Urgency,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Urgency {
    #[default]
    Normal,
    High,
    Critical,
}
