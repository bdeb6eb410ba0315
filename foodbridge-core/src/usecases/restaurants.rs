use super::prelude::*;
use crate::util::validate::{is_blank, non_blank};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    /// Generated if missing
    pub restaurant_id: Option<String>,
    pub name: String,
    pub address: String,
    pub contact_phone: Option<String>,
}

pub fn create_restaurant<R: RestaurantRepo>(repo: &R, new_restaurant: NewRestaurant) -> Result<Restaurant> {
    let NewRestaurant {
        restaurant_id,
        name,
        address,
        contact_phone,
    } = new_restaurant;
    if is_blank(&name) {
        return Err(Error::EmptyField("name"));
    }
    if is_blank(&address) {
        return Err(Error::EmptyField("address"));
    }
    let restaurant = Restaurant {
        id: non_blank(restaurant_id)
            .map(Id::from)
            .unwrap_or_else(Id::new_short),
        name: name.trim().to_owned(),
        address: address.trim().to_owned(),
        contact_phone: non_blank(contact_phone),
    };
    log::debug!("Creating restaurant {} ({})", restaurant.id, restaurant.name);
    repo.create_restaurant(&restaurant)?;
    Ok(restaurant)
}

pub fn get_restaurant<R: RestaurantRepo>(repo: &R, id: &str) -> Result<Restaurant> {
    Ok(repo.get_restaurant(id)?)
}

pub fn list_restaurants<R: RestaurantRepo>(repo: &R) -> Result<Vec<Restaurant>> {
    Ok(repo.all_restaurants()?)
}

pub fn delete_restaurant<R: RestaurantRepo>(repo: &R, id: &str) -> Result<()> {
    Ok(repo.delete_restaurant(id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_restaurant(id: Option<&str>, name: &str) -> NewRestaurant {
        NewRestaurant {
            restaurant_id: id.map(Into::into),
            name: name.into(),
            address: "Market Square 1".into(),
            contact_phone: Some(" ".into()),
        }
    }

    #[test]
    fn create_and_list_restaurants() {
        let db = MockDb::default();
        let r = create_restaurant(&db, new_restaurant(Some("R1"), " Deli ")).unwrap();
        assert_eq!("R1", r.id.as_str());
        assert_eq!("Deli", r.name);
        assert_eq!(None, r.contact_phone);
        create_restaurant(&db, new_restaurant(None, "Bistro")).unwrap();
        assert_eq!(2, list_restaurants(&db).unwrap().len());
    }

    #[test]
    fn duplicate_restaurant_id() {
        let db = MockDb::default();
        create_restaurant(&db, new_restaurant(Some("R1"), "Deli")).unwrap();
        let err = create_restaurant(&db, new_restaurant(Some("R1"), "Bistro")).unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::AlreadyExists)));
    }

    #[test]
    fn name_is_required() {
        let db = MockDb::default();
        let err = create_restaurant(&db, new_restaurant(None, "")).unwrap_err();
        assert_eq!(Some("name"), err.field());
    }
}
