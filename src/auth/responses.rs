use serde::Serialize;

use crate::models::users::UserData;

#[derive(Serialize)]
pub struct UserResponse<T> {
    pub status: &'static str,
    pub user: T,
}

#[derive(Serialize)]
pub struct UserItem {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<UserData> for UserItem {
    fn from(data: UserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
        }
    }
}

#[derive(Serialize)]
pub struct LoginItem {
    #[serde(flatten)]
    pub user: UserItem,
    pub is_provider: bool,
    pub provider_id: Option<i32>,
}
