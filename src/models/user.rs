use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::status::{UserRole, UserStatus};
use crate::table::{CellValue, Record, RowId};

/// A dashboard user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RowId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_login: NaiveDateTime,
    pub department: String,
}

impl Record for User {
    fn id(&self) -> RowId {
        self.id
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "department" => Some(self.department.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "lastLogin" => Some(self.last_login.format("%Y-%m-%d %H:%M").to_string().into()),
            _ => None,
        }
    }
}
