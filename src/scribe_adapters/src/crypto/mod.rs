pub mod argon2_password_hasher;
pub mod jwt_reset_codec;
