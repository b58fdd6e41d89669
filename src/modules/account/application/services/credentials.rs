use rand::{distributions::Alphanumeric, Rng};

pub const INITIAL_PASSWORD_LENGTH: usize = 24;
pub const TOKEN_KEY_BYTES: usize = 20;

/// Random alphanumeric password assigned at signup; the account owner replaces it
/// through a password reset.
pub fn generate_initial_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(INITIAL_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}

/// 40 lowercase hex characters
pub fn generate_token_key() -> String {
    let bytes: [u8; TOKEN_KEY_BYTES] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
