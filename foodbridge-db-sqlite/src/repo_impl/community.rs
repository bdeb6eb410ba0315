use super::*;

impl CommunityRepo for DbReadOnly<'_> {
    fn create_community(&self, _community: &Community) -> Result<()> {
        read_only_violation()
    }
    fn get_community(&self, id: &str) -> Result<Community> {
        get_community(&mut self.conn.borrow_mut(), id)
    }
    fn find_community_by_name(&self, name: &str) -> Result<Option<Community>> {
        find_community_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_communities(&self) -> Result<Vec<Community>> {
        all_communities(&mut self.conn.borrow_mut())
    }
    fn count_communities(&self) -> Result<usize> {
        count_communities(&mut self.conn.borrow_mut())
    }
}

impl CommunityRepo for DbConnection<'_> {
    fn create_community(&self, community: &Community) -> Result<()> {
        create_community(&mut self.conn.borrow_mut(), community)
    }
    fn get_community(&self, id: &str) -> Result<Community> {
        get_community(&mut self.conn.borrow_mut(), id)
    }
    fn find_community_by_name(&self, name: &str) -> Result<Option<Community>> {
        find_community_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_communities(&self) -> Result<Vec<Community>> {
        all_communities(&mut self.conn.borrow_mut())
    }
    fn count_communities(&self) -> Result<usize> {
        count_communities(&mut self.conn.borrow_mut())
    }
}

fn create_community(conn: &mut SqliteConnection, c: &Community) -> Result<()> {
    let new_community = models::NewCommunity {
        id: c.id.as_str(),
        name: &c.name,
        name_key: name_key(&c.name),
        address: &c.address,
        population: c.population.into(),
        received_at: c.received_at.as_millis(),
        warehouse_id: c.warehouse_id.as_str(),
    };
    diesel::insert_into(schema::communities::table)
        .values(&new_community)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_community(conn: &mut SqliteConnection, id: &str) -> Result<Community> {
    use schema::communities::dsl;
    let community = dsl::communities
        .filter(dsl::id.eq(id))
        .first::<models::CommunityEntity>(conn)
        .map_err(from_diesel_err)?;
    load_community(community)
}

fn find_community_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<Community>> {
    use schema::communities::dsl;
    dsl::communities
        .filter(dsl::name_key.eq(name_key(name)))
        .order_by(dsl::rowid)
        .first::<models::CommunityEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_community)
        .transpose()
}

fn all_communities(conn: &mut SqliteConnection) -> Result<Vec<Community>> {
    use schema::communities::dsl;
    dsl::communities
        .order_by(dsl::rowid)
        .load::<models::CommunityEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_community)
        .collect()
}

fn count_communities(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::communities::dsl;
    Ok(dsl::communities
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
