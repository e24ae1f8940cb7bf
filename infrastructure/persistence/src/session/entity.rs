use serde::{Deserialize, Serialize};

use business::domain::session::model::SessionUser;
use business::domain::shared::value_objects::UserId;

/// Signed-in user as written under the `userInfo` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "customer".to_string()
}

impl StoredUser {
    pub fn from_domain(user: &SessionUser) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }

    pub fn into_domain(self) -> SessionUser {
        SessionUser {
            id: UserId::new(self.id),
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}
