//! Registered user of the exercise tracker.

/// A registered user. Usernames are unique; records are immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// Input data for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: String,
    pub username: String,
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        Self {
            id: new_user.id,
            username: new_user.username,
        }
    }
}
