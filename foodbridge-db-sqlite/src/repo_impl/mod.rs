// NOTE:
// All timestamps are stored as unix timestamp
// in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use std::{fmt::Display, str::FromStr};

use foodbridge_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod community;
mod delivery;
mod donation;
mod donation_request;
mod restaurant;
mod user;
mod warehouse;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

// Deleting a row that is still referenced by a restricting
// foreign key fails immediately.
fn from_diesel_delete_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            repo::Error::InUse
        }
        DieselError::DatabaseError(_, ref info)
            if info.message().contains("FOREIGN KEY constraint failed") =>
        {
            repo::Error::InUse
        }
        _ => from_diesel_err(err),
    }
}

fn expect_deleted(count: usize) -> Result<()> {
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn expect_updated(count: usize) -> Result<()> {
    expect_deleted(count)
}

fn load_timestamp(millis: i64) -> Result<Timestamp> {
    Timestamp::try_from_millis(millis)
        .ok_or_else(|| anyhow!("Invalid timestamp: {millis}").into())
}

fn load_date(date: &str) -> Result<Date> {
    parse_date(date).map_err(|err| anyhow!(err).into())
}

fn load_count(count: i64) -> Result<u32> {
    u32::try_from(count).map_err(|_| anyhow!("Invalid count: {count}").into())
}

fn load_enum<T>(s: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    s.parse()
        .map_err(|err| anyhow!("Failed to load '{s}': {err}").into())
}

fn load_user(user: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        rowid: _,
        id,
        name,
        role,
    } = user;
    let role = Role::try_from(role).map_err(anyhow::Error::from)?;
    Ok(User {
        id: id.into(),
        name,
        role,
    })
}

fn load_restaurant(restaurant: models::RestaurantEntity) -> Restaurant {
    let models::RestaurantEntity {
        rowid: _,
        id,
        name,
        address,
        contact_phone,
    } = restaurant;
    Restaurant {
        id: id.into(),
        name,
        address,
        contact_phone,
    }
}

fn load_donation(donation: models::DonationEntity) -> Result<Donation> {
    let models::DonationEntity {
        rowid: _,
        id,
        restaurant_id,
        description,
        quantity,
        donated_at,
        status,
    } = donation;
    Ok(Donation {
        id: id.into(),
        restaurant_id: restaurant_id.into(),
        description,
        quantity: load_count(quantity)?,
        donated_at: load_timestamp(donated_at)?,
        status,
    })
}

fn load_warehouse(warehouse: models::WarehouseEntity) -> Result<Warehouse> {
    let models::WarehouseEntity {
        rowid: _,
        id,
        address,
        capacity,
        stored_date,
        expiry_date,
    } = warehouse;
    Ok(Warehouse {
        id: id.into(),
        address,
        capacity,
        stored_date: load_date(&stored_date)?,
        expiry_date: load_date(&expiry_date)?,
    })
}

fn load_community(community: models::CommunityEntity) -> Result<Community> {
    let models::CommunityEntity {
        rowid: _,
        id,
        name,
        name_key: _,
        address,
        population,
        received_at,
        warehouse_id,
    } = community;
    Ok(Community {
        id: id.into(),
        name,
        address,
        population: load_count(population)?,
        received_at: load_timestamp(received_at)?,
        warehouse_id: warehouse_id.into(),
    })
}

fn load_request_item(item: models::RequestItemEntity) -> Result<RequestItem> {
    let models::RequestItemEntity {
        rowid: _,
        id,
        request_id: _,
        item,
        quantity,
        urgency,
    } = item;
    Ok(RequestItem {
        id: id.into(),
        item,
        quantity: load_count(quantity)?,
        urgency: load_enum(&urgency)?,
    })
}

fn load_delivery(delivery: models::DeliveryEntity) -> Result<Delivery> {
    let models::DeliveryEntity {
        rowid: _,
        id,
        delivery_type,
        pickup_location_type,
        dropoff_location_type,
        pickup_time,
        dropoff_time,
        status,
        notes,
        delivered_quantity,
        request_item_id,
        warehouse_id,
        staff_user_id,
        donation_id,
        community_id,
    } = delivery;
    Ok(Delivery {
        id: id.into(),
        delivery_type: load_enum(&delivery_type)?,
        pickup_location_type: load_enum(&pickup_location_type)?,
        dropoff_location_type: load_enum(&dropoff_location_type)?,
        pickup_time: load_timestamp(pickup_time)?,
        dropoff_time: load_timestamp(dropoff_time)?,
        status: load_enum(&status)?,
        notes,
        delivered_quantity: delivered_quantity.map(load_count).transpose()?,
        request_item_id: request_item_id.map(Into::into),
        warehouse_id: warehouse_id.map(Into::into),
        staff_user_id: staff_user_id.map(Into::into),
        donation_id: donation_id.map(Into::into),
        community_id: community_id.map(Into::into),
    })
}

fn read_only_violation<T>() -> Result<T> {
    Err(anyhow!("Write access on a read-only connection").into())
}
