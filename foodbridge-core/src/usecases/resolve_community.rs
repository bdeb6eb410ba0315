use super::{error::map_unknown_reference, prelude::*};
use crate::util::validate::non_blank;
use time::Duration;

/// Values used for records that are created implicitly
/// while resolving a community.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionDefaults {
    pub population: u32,
    pub warehouse_address: String,
    pub warehouse_capacity: f64,
    pub warehouse_shelf_life: Duration,
}

impl Default for ResolutionDefaults {
    fn default() -> Self {
        Self {
            population: 100,
            warehouse_address: "Default Warehouse".into(),
            warehouse_capacity: 1000.0,
            warehouse_shelf_life: Duration::days(365),
        }
    }
}

/// What is known about the community of a donation request.
#[derive(Debug, Clone, Default)]
pub struct CommunityHint<'a> {
    pub id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub address: Option<&'a str>,
    pub population: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedWarehouse {
    Existing(Warehouse),
    Created(Warehouse),
}

impl ResolvedWarehouse {
    pub const fn warehouse(&self) -> &Warehouse {
        match self {
            Self::Existing(w) | Self::Created(w) => w,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedCommunity {
    /// Explicitly referenced by id
    Referenced(Community),
    /// Matched by name
    Found(Community),
    Created {
        community: Community,
        warehouse: ResolvedWarehouse,
    },
}

impl ResolvedCommunity {
    pub const fn community(&self) -> &Community {
        match self {
            Self::Referenced(c) | Self::Found(c) | Self::Created { community: c, .. } => c,
        }
    }

    pub fn into_community(self) -> Community {
        match self {
            Self::Referenced(c) | Self::Found(c) | Self::Created { community: c, .. } => c,
        }
    }
}

/// Resolves exactly one community, creating it (and a warehouse
/// that supplies it) if it doesn't exist yet.
pub fn resolve_community<R>(
    repo: &R,
    defaults: &ResolutionDefaults,
    hint: CommunityHint,
) -> Result<ResolvedCommunity>
where
    R: CommunityRepo + WarehouseRepo,
{
    if let Some(id) = hint.id {
        let community = repo
            .get_community(id)
            .map_err(map_unknown_reference("community_id", id))?;
        return Ok(ResolvedCommunity::Referenced(community));
    }
    let name = hint
        .name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(Error::CommunityNameRequired)?;
    if let Some(community) = repo.find_community_by_name(name)? {
        return Ok(ResolvedCommunity::Found(community));
    }
    let warehouse = resolve_warehouse(repo, defaults)?;
    let community = Community {
        id: Id::new(),
        name: name.to_owned(),
        address: non_blank(hint.address.map(ToOwned::to_owned)).unwrap_or_else(|| name.to_owned()),
        population: hint.population.unwrap_or(defaults.population),
        received_at: Timestamp::now(),
        warehouse_id: warehouse.warehouse().id.clone(),
    };
    log::info!(
        "Creating new community '{}' supplied by warehouse {}",
        community.name,
        community.warehouse_id
    );
    repo.create_community(&community)?;
    Ok(ResolvedCommunity::Created {
        community,
        warehouse,
    })
}

fn resolve_warehouse<R: WarehouseRepo>(
    repo: &R,
    defaults: &ResolutionDefaults,
) -> Result<ResolvedWarehouse> {
    if let Some(warehouse) = repo.first_warehouse()? {
        return Ok(ResolvedWarehouse::Existing(warehouse));
    }
    let warehouse = fallback_warehouse(defaults);
    log::info!(
        "Creating fallback warehouse {} at '{}'",
        warehouse.id,
        warehouse.address
    );
    repo.create_warehouse(&warehouse)?;
    Ok(ResolvedWarehouse::Created(warehouse))
}

fn fallback_warehouse(defaults: &ResolutionDefaults) -> Warehouse {
    let stored_date = today();
    let expiry_date = stored_date
        .checked_add(defaults.warehouse_shelf_life)
        .unwrap_or(Date::MAX);
    Warehouse {
        id: Id::new(),
        address: defaults.warehouse_address.clone(),
        capacity: defaults.warehouse_capacity,
        stored_date,
        expiry_date,
    }
}
