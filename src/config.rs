//! Account and bulb address, read from the environment
use std::{env, fmt};

pub const EMAIL_VAR: &str = "TAPO_EMAIL";
pub const PASSWORD_VAR: &str = "TAPO_PASSWORD";
pub const ADDRESS_VAR: &str = "BULB_IP";

#[derive(Clone)]
pub struct Config {
    pub email: String,
    pub password: String,
    pub address: String,
}

impl Config {
    pub fn new(email: &str, password: &str, address: &str) -> Self {
        Self {
            email: String::from(email),
            password: String::from(password),
            address: String::from(address),
        }
    }

    /// Load `.env` if present, then read the three variables.
    ///
    /// Nothing is validated here. An unset variable is read as an empty
    /// string and the login fails later with the device's own error.
    pub fn from_env() -> Self {
        if dotenv::dotenv().is_err() {
            debug!("no .env file loaded");
        }

        Self {
            email: env::var(EMAIL_VAR).unwrap_or_default(),
            password: env::var(PASSWORD_VAR).unwrap_or_default(),
            address: env::var(ADDRESS_VAR).unwrap_or_default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Config")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("address", &self.address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_password() {
        let config = Config::new("me@example.com", "hunter2", "192.168.1.18");

        let debug = format!("{:?}", config);

        assert!(debug.contains("me@example.com"));
        assert!(debug.contains("192.168.1.18"));
        assert!(!debug.contains("hunter2"));
    }
}
