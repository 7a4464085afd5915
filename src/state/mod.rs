pub mod locale;
pub mod login;
pub mod nav;
pub mod session;
pub mod table;
pub mod theme;
pub mod toast;
