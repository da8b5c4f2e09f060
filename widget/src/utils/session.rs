//! # Session Identifier Generation
//!
//! Client-generated opaque tokens correlating turns server-side. Not
//! cryptographically meaningful.

use rand::Rng;

/// Fixed prefix shared by all widget sessions
const SESSION_PREFIX: &str = "user_";

/// Length of the random token after the prefix
const TOKEN_LEN: usize = 9;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a session identifier: the fixed prefix plus a short random
/// base-36 token. Generated once per widget construction.
pub fn generate_session_id(rng: &mut impl Rng) -> String {
    let token: String = (0..TOKEN_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{}{}", SESSION_PREFIX, token)
}
