use std::collections::HashMap;

use super::FixtureError;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub struct UserId(pub u32);

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

/// The users of a catalog in fixture order, indexed by id.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct UsersTable {
    users: Vec<User>,
    index: HashMap<UserId, usize>,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        User { id: UserId(id), name: name.into(), sex }
    }
}

impl UsersTable {
    /// Indexes the given users. Fails if two users share an id.
    pub fn from_users(users: Vec<User>) -> Result<Self, FixtureError> {
        let mut index = HashMap::with_capacity(users.len());
        for (position, user) in users.iter().enumerate() {
            if index.insert(user.id, position).is_some() {
                return Err(FixtureError::DuplicateUser(user.id));
            }
        }
        Ok(UsersTable { users, index })
    }

    pub fn position(&self, id: UserId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn as_slice(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}
