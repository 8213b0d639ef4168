//! Volunteer factory for creating `volunteer/` response entries.

use serde_json::{json, Value};

/// Factory for creating test volunteers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::volunteer::VolunteerFactory;
///
/// let volunteer = VolunteerFactory::new(1, "user").gamma(1234).build();
/// ```
pub struct VolunteerFactory {
    id: u64,
    username: String,
    gamma: u64,
    date_joined: String,
    accepted_coc: bool,
}

impl VolunteerFactory {
    /// Creates a new VolunteerFactory with default values.
    ///
    /// Defaults:
    /// - gamma: `0`
    /// - date_joined: `2021-01-01T00:00:00Z`
    /// - accepted_coc: `true`
    ///
    /// # Arguments
    /// - `id` - Blossom ID of the volunteer
    /// - `username` - Reddit username of the volunteer
    pub fn new(id: u64, username: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
            gamma: 0,
            date_joined: "2021-01-01T00:00:00Z".to_string(),
            accepted_coc: true,
        }
    }

    pub fn gamma(mut self, gamma: u64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the join date as RFC 3339 string.
    pub fn date_joined(mut self, date_joined: &str) -> Self {
        self.date_joined = date_joined.to_string();
        self
    }

    pub fn accepted_coc(mut self, accepted_coc: bool) -> Self {
        self.accepted_coc = accepted_coc;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "username": self.username,
            "gamma": self.gamma,
            "date_joined": self.date_joined,
            "last_login": null,
            "last_update_time": self.date_joined,
            "accepted_coc": self.accepted_coc,
            "blacklisted": false,
        })
    }
}

/// Creates a volunteer with default values.
pub fn create_volunteer(id: u64, username: &str) -> Value {
    VolunteerFactory::new(id, username).build()
}
