use serde::Deserialize;

use crate::{
    database::accounts::NewAccount,
    error::{ApiError, ApiResult},
};

#[derive(Deserialize, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl RegisterRequest {
    pub fn validate(self) -> ApiResult<NewAccount> {
        let username = self.username.trim().to_string();
        if username.is_empty() || self.password.is_empty() {
            return Err(ApiError::validation("Username and password required"));
        }
        Ok(NewAccount {
            username,
            password: self.password,
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
        })
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> ApiResult<(String, String)> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ApiError::validation("Username and password required"));
        }
        Ok((self.username, self.password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_requires_username_and_password() {
        let req = RegisterRequest {
            username: "   ".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        };
        assert!(matches!(req.validate(), Err(ApiError::Validation(_))));

        let req = RegisterRequest {
            username: " ana ".to_string(),
            password: "pw".to_string(),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap().username, "ana");
    }
}
