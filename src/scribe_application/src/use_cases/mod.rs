pub mod confirm_reset;
pub mod login;
pub mod logout;
pub mod register;
pub mod request_reset;
pub mod update_email;
