pub mod scan;
pub mod token;

#[cfg(test)]
mod proptests;

pub use scan::{first_token, last_token, token_matches};
pub use token::{resolve, TokenMatch, Vocabulary};
