use serde::Deserialize;

/// A member record as read back from `members` output. Only `login` is
/// needed; other fields are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct Member {
    pub login: String,
}
