use crate::{
    repositories,
    util::validate::{DeliveryInvalidation, WarehouseInvalidation},
};
use foodbridge_entities::delivery::DeliveryStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Community name is required.")]
    CommunityNameRequired,
    #[error("The field '{0}' must not be empty")]
    EmptyField(&'static str),
    #[error("Invalid value of field '{field}': {value}")]
    InvalidField { field: &'static str, value: String },
    #[error("There is no object with the id '{id}' (field '{field}')")]
    UnknownReference { field: &'static str, id: String },
    #[error("Cannot change restaurant of donation.")]
    RestaurantImmutable,
    #[error("Cannot change donation_id.")]
    DonationIdImmutable,
    #[error("A delivery cannot change its status from {from} to {to}")]
    StatusTransition {
        from: DeliveryStatus,
        to: DeliveryStatus,
    },
    #[error("The user already exists")]
    UserExists,
    #[error(transparent)]
    Warehouse(#[from] WarehouseInvalidation),
    #[error(transparent)]
    Delivery(#[from] DeliveryInvalidation),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }

    pub fn unknown_reference(field: &'static str, id: impl Into<String>) -> Self {
        Self::UnknownReference {
            field,
            id: id.into(),
        }
    }

    /// The name of the offending input field, if any.
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::CommunityNameRequired => Some("community_name"),
            Self::EmptyField(field)
            | Self::InvalidField { field, .. }
            | Self::UnknownReference { field, .. } => Some(*field),
            Self::RestaurantImmutable => Some("restaurant"),
            Self::DonationIdImmutable => Some("donation_id"),
            Self::StatusTransition { .. } => Some("status"),
            Self::UserExists => Some("user_id"),
            Self::Warehouse(w) => match w {
                WarehouseInvalidation::Address => Some("address"),
                WarehouseInvalidation::Capacity => Some("capacity"),
                WarehouseInvalidation::ExpiryBeforeStored => Some("expiry_date"),
            },
            Self::Delivery(DeliveryInvalidation::DropoffBeforePickup) => Some("dropoff_time"),
            Self::Repo(_) => None,
        }
    }

    /// Errors that prevent modifying immutable properties.
    pub const fn is_immutability_violation(&self) -> bool {
        matches!(self, Self::RestaurantImmutable | Self::DonationIdImmutable)
    }
}

/// Maps a missing referenced object to a validation error of the given field.
pub(crate) fn map_unknown_reference<'a>(
    field: &'static str,
    id: &'a str,
) -> impl FnOnce(repositories::Error) -> Error + 'a {
    move |err| match err {
        repositories::Error::NotFound => Error::unknown_reference(field, id),
        err => Error::Repo(err),
    }
}
