pub mod password_hasher;
pub mod reset_token_codec;
pub mod session_manager;
