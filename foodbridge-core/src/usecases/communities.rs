use super::prelude::*;

pub fn get_community<R: CommunityRepo>(repo: &R, id: &str) -> Result<Community> {
    Ok(repo.get_community(id)?)
}

pub fn list_communities<R: CommunityRepo>(repo: &R) -> Result<Vec<Community>> {
    Ok(repo.all_communities()?)
}
