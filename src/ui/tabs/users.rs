//! Users page

use tokio::sync::RwLock;

use super::Resource;
use crate::app::state::AppState;
use crate::data::{Dataset, ResourceKind};
use crate::models::{User, UserRole, UserStatus};
use crate::table::{BadgeVariant, CellContent, Column};
use crate::ui::dialogs::details::DetailSection;

pub type UsersTab = super::resource::ResourcePage<User>;

fn status_cell(user: &User) -> CellContent {
    let variant = match user.status {
        UserStatus::Active => BadgeVariant::Success,
        UserStatus::Inactive => BadgeVariant::Secondary,
    };
    CellContent::badge(if user.status == UserStatus::Active { "Active" } else { "Inactive" }, variant)
}

impl Resource for User {
    const KIND: ResourceKind = ResourceKind::Users;
    const TITLE: &'static str = "Users";
    const NOUN: &'static str = "User";
    const SEARCH_HINT: &'static str = "Search name, email or department...";
    const CATEGORY: &'static str = "Role";

    fn dataset(state: &AppState) -> &RwLock<Dataset<Self>> {
        &state.users
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::plain("name", "Name").sortable(),
            Column::plain("email", "Email").sortable(),
            Column::custom("role", "Role", |u: &User| CellContent::plain(u.role.title()))
                .sortable()
                .width(9),
            Column::plain("department", "Department").sortable().width(12),
            Column::custom("status", "Status", status_cell).sortable().width(10),
            Column::plain("lastLogin", "Last Login")
                .sortable()
                .compare_with(|a: &User, b: &User| a.last_login.cmp(&b.last_login))
                .width(17),
        ]
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.department.as_str()]
    }

    fn category(&self) -> &str {
        self.role.as_str()
    }

    fn categories(_rows: &[Self]) -> Vec<String> {
        UserRole::all().iter().map(|r| r.as_str().to_string()).collect()
    }

    fn detail_sections(&self) -> Vec<DetailSection> {
        vec![DetailSection::new("Account")
            .field("Role", self.role.title())
            .field("Last login", self.last_login.format("%Y-%m-%d %H:%M").to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;

    #[test]
    fn role_is_capitalized() {
        let users = mock::users();
        let role = &User::columns()[2];
        for user in &users {
            let text = role.render(user).text;
            assert!(text.chars().next().is_some_and(|c| c.is_uppercase()));
        }
    }

    #[test]
    fn inactive_users_use_secondary_badge() {
        let users = mock::users();
        for user in users.iter().filter(|u| u.status == UserStatus::Inactive) {
            assert_eq!(status_cell(user).text, "Inactive");
        }
    }
}
