use super::*;

#[get("/communities")]
pub fn get_communities(connections: Connections) -> Result<Vec<json::Community>> {
    let communities = usecases::list_communities(&connections.shared()?)?;
    Ok(Json(communities.into_iter().map(Into::into).collect()))
}

#[get("/communities/<id>")]
pub fn get_community(connections: Connections, id: &str) -> Result<json::Community> {
    let community = usecases::get_community(&connections.shared()?, id)?;
    Ok(Json(community.into()))
}
