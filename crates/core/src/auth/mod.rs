mod error;
mod functions;

pub use error::AuthError;
pub use functions::{bearer_token, user_id_from_token};
