
pub use self::builders::*;
pub use foodbridge_entities::builders::*;

use super::prelude::*;
use std::cell::RefCell;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub restaurants: RefCell<Vec<Restaurant>>,
    pub donations: RefCell<Vec<Donation>>,
    pub warehouses: RefCell<Vec<Warehouse>>,
    pub communities: RefCell<Vec<Community>>,
    // Requests are stored without their items
    pub donation_requests: RefCell<Vec<DonationRequest>>,
    // (request id, item)
    pub request_items: RefCell<Vec<(Id, RequestItem)>>,
    pub deliveries: RefCell<Vec<Delivery>>,
}

fn get<T: Clone>(objects: &[T], id_of: impl Fn(&T) -> &Id, id: &str) -> RepoResult<T> {
    objects
        .iter()
        .find(|x| id_of(x).as_str() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn create<T: Clone>(objects: &mut Vec<T>, id_of: impl Fn(&T) -> &Id, x: &T) -> RepoResult<()> {
    if objects.iter().any(|o| id_of(o) == id_of(x)) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(x.clone());
    Ok(())
}

fn update<T: Clone>(objects: &mut [T], id_of: impl Fn(&T) -> &Id, x: &T) -> RepoResult<()> {
    let o = objects
        .iter_mut()
        .find(|o| id_of(o) == id_of(x))
        .ok_or(RepoError::NotFound)?;
    *o = x.clone();
    Ok(())
}

fn delete<T>(objects: &mut Vec<T>, id_of: impl Fn(&T) -> &Id, id: &str) -> RepoResult<()> {
    let pos = objects
        .iter()
        .position(|o| id_of(o).as_str() == id)
        .ok_or(RepoError::NotFound)?;
    objects.remove(pos);
    Ok(())
}

impl MockDb {
    fn items_of(&self, request_id: &Id) -> Vec<RequestItem> {
        self.request_items
            .borrow()
            .iter()
            .filter(|(r, _)| r == request_id)
            .map(|(_, item)| item.clone())
            .collect()
    }

    fn with_items(&self, mut request: DonationRequest) -> DonationRequest {
        request.items = self.items_of(&request.id);
        request
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), |u| &u.id, user)
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), |u| &u.id, id)
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
}

impl RestaurantRepo for MockDb {
    fn create_restaurant(&self, restaurant: &Restaurant) -> RepoResult<()> {
        create(&mut self.restaurants.borrow_mut(), |r| &r.id, restaurant)
    }
    fn get_restaurant(&self, id: &str) -> RepoResult<Restaurant> {
        get(&self.restaurants.borrow(), |r| &r.id, id)
    }
    fn all_restaurants(&self) -> RepoResult<Vec<Restaurant>> {
        Ok(self.restaurants.borrow().clone())
    }
    fn delete_restaurant(&self, id: &str) -> RepoResult<()> {
        if self
            .donations
            .borrow()
            .iter()
            .any(|d| d.restaurant_id.as_str() == id)
        {
            return Err(RepoError::InUse);
        }
        delete(&mut self.restaurants.borrow_mut(), |r| &r.id, id)
    }
}

impl DonationRepo for MockDb {
    fn create_donation(&self, donation: &Donation) -> RepoResult<()> {
        create(&mut self.donations.borrow_mut(), |d| &d.id, donation)
    }
    fn update_donation(&self, donation: &Donation) -> RepoResult<()> {
        update(&mut self.donations.borrow_mut(), |d| &d.id, donation)
    }
    fn get_donation(&self, id: &str) -> RepoResult<Donation> {
        get(&self.donations.borrow(), |d| &d.id, id)
    }
    fn delete_donation(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.donations.borrow_mut(), |d| &d.id, id)?;
        for d in self.deliveries.borrow_mut().iter_mut() {
            if d.donation_id.as_ref().is_some_and(|x| x.as_str() == id) {
                d.donation_id = None;
            }
        }
        Ok(())
    }
    fn query_donations(&self, filter: &DonationFilter) -> RepoResult<Vec<Donation>> {
        let mut donations: Vec<_> = self
            .donations
            .borrow()
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect();
        donations.sort_by(|a, b| b.donated_at.cmp(&a.donated_at));
        Ok(donations)
    }
}

impl WarehouseRepo for MockDb {
    fn create_warehouse(&self, warehouse: &Warehouse) -> RepoResult<()> {
        create(&mut self.warehouses.borrow_mut(), |w| &w.id, warehouse)
    }
    fn get_warehouse(&self, id: &str) -> RepoResult<Warehouse> {
        get(&self.warehouses.borrow(), |w| &w.id, id)
    }
    fn first_warehouse(&self) -> RepoResult<Option<Warehouse>> {
        Ok(self.warehouses.borrow().first().cloned())
    }
    fn all_warehouses(&self) -> RepoResult<Vec<Warehouse>> {
        Ok(self.warehouses.borrow().clone())
    }
    fn count_warehouses(&self) -> RepoResult<usize> {
        Ok(self.warehouses.borrow().len())
    }
    fn delete_warehouse(&self, id: &str) -> RepoResult<()> {
        let supplies_community = self
            .communities
            .borrow()
            .iter()
            .any(|c| c.warehouse_id.as_str() == id);
        let has_deliveries = self
            .deliveries
            .borrow()
            .iter()
            .any(|d| d.warehouse_id.as_ref().is_some_and(|w| w.as_str() == id));
        if supplies_community || has_deliveries {
            return Err(RepoError::InUse);
        }
        delete(&mut self.warehouses.borrow_mut(), |w| &w.id, id)
    }
}

impl CommunityRepo for MockDb {
    fn create_community(&self, community: &Community) -> RepoResult<()> {
        create(&mut self.communities.borrow_mut(), |c| &c.id, community)
    }
    fn get_community(&self, id: &str) -> RepoResult<Community> {
        get(&self.communities.borrow(), |c| &c.id, id)
    }
    fn find_community_by_name(&self, name: &str) -> RepoResult<Option<Community>> {
        Ok(self
            .communities
            .borrow()
            .iter()
            .find(|c| c.is_named(name))
            .cloned())
    }
    fn all_communities(&self) -> RepoResult<Vec<Community>> {
        Ok(self.communities.borrow().clone())
    }
    fn count_communities(&self) -> RepoResult<usize> {
        Ok(self.communities.borrow().len())
    }
}

impl DonationRequestRepo for MockDb {
    fn create_donation_request(&self, request: &DonationRequest) -> RepoResult<()> {
        let mut stored = request.clone();
        stored.items.clear();
        create(&mut self.donation_requests.borrow_mut(), |r| &r.id, &stored)?;
        self.replace_request_items(request.id.as_str(), &request.items)
    }
    fn update_donation_request(&self, request: &DonationRequest) -> RepoResult<()> {
        let mut stored = request.clone();
        stored.items.clear();
        update(&mut self.donation_requests.borrow_mut(), |r| &r.id, &stored)
    }
    fn replace_request_items(&self, request_id: &str, items: &[RequestItem]) -> RepoResult<()> {
        let mut request_items = self.request_items.borrow_mut();
        request_items.retain(|(r, _)| r.as_str() != request_id);
        for item in items {
            if request_items.iter().any(|(_, i)| i.id == item.id) {
                return Err(RepoError::AlreadyExists);
            }
            request_items.push((request_id.into(), item.clone()));
        }
        Ok(())
    }
    fn get_donation_request(&self, id: &str) -> RepoResult<DonationRequest> {
        let request = get(&self.donation_requests.borrow(), |r| &r.id, id)?;
        Ok(self.with_items(request))
    }
    fn all_donation_requests(&self) -> RepoResult<Vec<DonationRequest>> {
        let mut requests: Vec<_> = self
            .donation_requests
            .borrow()
            .iter()
            .cloned()
            .map(|r| self.with_items(r))
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }
    fn delete_donation_request(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.donation_requests.borrow_mut(), |r| &r.id, id)?;
        let mut deleted_items = vec![];
        self.request_items.borrow_mut().retain(|(r, item)| {
            let keep = r.as_str() != id;
            if !keep {
                deleted_items.push(item.id.clone());
            }
            keep
        });
        for d in self.deliveries.borrow_mut().iter_mut() {
            if d
                .request_item_id
                .as_ref()
                .is_some_and(|i| deleted_items.contains(i))
            {
                d.request_item_id = None;
            }
        }
        Ok(())
    }
    fn get_request_item(&self, id: &str) -> RepoResult<RequestItem> {
        self.request_items
            .borrow()
            .iter()
            .find(|(_, item)| item.id.as_str() == id)
            .map(|(_, item)| item.clone())
            .ok_or(RepoError::NotFound)
    }
}

impl DeliveryRepo for MockDb {
    fn create_delivery(&self, delivery: &Delivery) -> RepoResult<()> {
        create(&mut self.deliveries.borrow_mut(), |d| &d.id, delivery)
    }
    fn update_delivery(&self, delivery: &Delivery) -> RepoResult<()> {
        update(&mut self.deliveries.borrow_mut(), |d| &d.id, delivery)
    }
    fn get_delivery(&self, id: &str) -> RepoResult<Delivery> {
        get(&self.deliveries.borrow(), |d| &d.id, id)
    }
    fn all_deliveries(&self) -> RepoResult<Vec<Delivery>> {
        Ok(self.deliveries.borrow().clone())
    }
    fn delete_delivery(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.deliveries.borrow_mut(), |d| &d.id, id)
    }
}

#[test]
fn deleting_a_request_unlinks_its_deliveries() {
    let db = MockDb::default();
    let request = DonationRequest {
        id: "REQ".into(),
        title: "Need".into(),
        community_name: "Alpha".into(),
        recipient_address: "".into(),
        expected_delivery: Timestamp::now(),
        people_count: 1,
        contact_phone: None,
        notes: "".into(),
        created_at: Timestamp::now(),
        created_by: None,
        status: false,
        community_id: "c1".into(),
        items: vec![RequestItem {
            id: "N1".into(),
            item: "Rice".into(),
            quantity: 1,
            urgency: Urgency::High,
        }],
    };
    db.create_donation_request(&request).unwrap();
    db.create_delivery(&Delivery::build().id("D1").request_item("N1").finish())
        .unwrap();
    db.delete_donation_request("REQ").unwrap();
    assert_eq!(None, db.get_delivery("D1").unwrap().request_item_id);
}
