use crate::{id::Id, time::Timestamp};

/// Food handed over by a restaurant.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donation {
    pub id            : Id,
    /// The donating restaurant (immutable after creation)
    pub restaurant_id : Id,
    pub description   : String,
    pub quantity      : u32,
    pub donated_at    : Timestamp,
    // `true` if the donation has been accepted for pickup
    pub status        : bool,
}
