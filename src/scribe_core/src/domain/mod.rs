pub mod account;
pub mod email;
pub mod password;
pub mod role;
pub mod session;
