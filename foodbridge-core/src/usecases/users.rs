use super::prelude::*;
use crate::util::validate::{is_blank, non_blank};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Generated if missing
    pub user_id: Option<String>,
    pub name: String,
    pub role: Role,
}

pub fn create_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser {
        user_id,
        name,
        role,
    } = new_user;
    if is_blank(&name) {
        return Err(Error::EmptyField("name"));
    }
    let id = non_blank(user_id).map(Id::from).unwrap_or_else(Id::new);
    if repo.try_get_user(id.as_str())?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id,
        name: name.trim().to_owned(),
        role,
    };
    log::debug!("Creating new user {} ({})", user.id, user.role);
    repo.create_user(&user)?;
    Ok(user)
}

pub fn get_user<R: UserRepo>(repo: &R, id: &str) -> Result<User> {
    Ok(repo.get_user(id)?)
}

pub fn delivery_staff<R: UserRepo>(repo: &R) -> Result<Vec<User>> {
    Ok(repo.users_with_role(Role::DeliveryStaff)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_user(id: &str, role: Role) -> NewUser {
        NewUser {
            user_id: Some(id.into()),
            name: format!("User {id}"),
            role,
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        create_user(&db, new_user("u1", Role::Admin)).unwrap();
        create_user(&db, new_user("u2", Role::DeliveryStaff)).unwrap();
        assert_eq!(Role::Admin, get_user(&db, "u1").unwrap().role);
        assert!(get_user(&db, "u3").is_err());
    }

    #[test]
    fn create_user_with_existing_id() {
        let db = MockDb::default();
        create_user(&db, new_user("u1", Role::Admin)).unwrap();
        match create_user(&db, new_user("u1", Role::Restaurant)).err().unwrap() {
            Error::UserExists => {
                // ok
            }
            _ => panic!("invalid error"),
        }
    }

    #[test]
    fn list_delivery_staff() {
        let db = MockDb::default();
        create_user(&db, new_user("u1", Role::Admin)).unwrap();
        create_user(&db, new_user("u2", Role::DeliveryStaff)).unwrap();
        create_user(&db, new_user("u3", Role::DeliveryStaff)).unwrap();
        let staff = delivery_staff(&db).unwrap();
        assert_eq!(2, staff.len());
        assert!(staff.iter().all(|u| u.role == Role::DeliveryStaff));
    }
}
