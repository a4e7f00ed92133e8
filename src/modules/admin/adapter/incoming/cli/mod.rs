pub mod link_employee;
pub mod list_users;
pub mod reset_password;
