use secrecy::{ExposeSecret, SecretString};

/// Credentials for authenticating with the configuration API.
///
/// Each variant carries the secret material needed for its auth flow.
/// The client attaches them to every request; there is no session.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// HTTP basic auth with a root or topology administrator DN/username.
    Basic {
        username: String,
        password: SecretString,
    },

    /// OAuth bearer token issued by an external authorization server.
    Bearer { token: SecretString },
}

impl Credentials {
    /// Attach these credentials to an outgoing request.
    pub(crate) fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::Bearer { token } => builder.bearer_auth(token.expose_secret()),
        }
    }

    /// Short label for logging. Never includes secret material.
    pub fn describe(&self) -> String {
        match self {
            Self::Basic { username, .. } => format!("basic ({username})"),
            Self::Bearer { .. } => "bearer token".into(),
        }
    }
}
