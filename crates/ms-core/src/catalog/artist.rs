use serde::{Deserialize, Serialize};

/// Artist record decoded from a lookup-by-id call.
///
/// A lookup may return zero or more artists for one id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Artist kind as reported by the API (e.g. `Artist`, `Movie Artist`).
    pub kind: String,
    pub name: String,
    /// Link to the artist page in the remote catalog.
    pub link: String,
    pub genre: Option<String>,
}
