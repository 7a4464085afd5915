pub mod data_table;
pub mod footer;
pub mod header;
pub mod login_modal;
pub mod mail_login;
pub mod mobile_drawer;
pub mod pagination;
pub mod toast;
