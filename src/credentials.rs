use serde::{Deserialize, Serialize};

/// Connection identity for the remote document store.
///
/// Created once after a successful credential check and immutable for the
/// session. Every remote call requires all five fields; an incomplete set
/// fails at the transport boundary before any request is issued.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub app_id: String,
    pub database: String,
    pub collection: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(
        app_id: impl Into<String>,
        database: impl Into<String>,
        collection: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            database: database.into(),
            collection: collection.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !(self.app_id.is_empty()
            || self.database.is_empty()
            || self.collection.is_empty()
            || self.email.is_empty()
            || self.password.is_empty())
    }
}

// Manual Debug: the password must never land in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
