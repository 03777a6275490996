use crate::error::AppError;
use std::env;

pub const DEFAULT_ROUTING: &str = "na1";

#[derive(Debug, Clone)]
pub struct Config {
    pub routing: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let routing = env::var("RIOT_ROUTING").unwrap_or_else(|_| DEFAULT_ROUTING.to_string());
        Self::new(routing)
    }

    /// Builds a config around an explicit routing value. Only blank values
    /// are refused; whether a host exists is up to the dispatcher.
    pub fn new(routing: String) -> Result<Self, AppError> {
        let routing = routing.trim().to_lowercase();
        if routing.is_empty() {
            return Err(AppError::ConfigError(
                "RIOT_ROUTING is set but empty".to_string(),
            ));
        }

        Ok(Config { routing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_platform_and_region_values() {
        assert_eq!(Config::new("EUW1".to_string()).unwrap().routing, "euw1");
        assert_eq!(Config::new("europe".to_string()).unwrap().routing, "europe");
        assert_eq!(Config::new("eu".to_string()).unwrap().routing, "eu");
    }

    #[test]
    fn passes_values_outside_the_enums_through() {
        assert_eq!(Config::new("pbe1".to_string()).unwrap().routing, "pbe1");
        assert_eq!(Config::new(" esports ".to_string()).unwrap().routing, "esports");
    }

    #[test]
    fn default_routing_is_accepted() {
        assert_eq!(
            Config::new(DEFAULT_ROUTING.to_string()).unwrap().routing,
            DEFAULT_ROUTING
        );
    }

    #[test]
    fn rejects_blank_values() {
        assert!(matches!(
            Config::new("  ".to_string()),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            Config::new(String::new()),
            Err(AppError::ConfigError(_))
        ));
    }
}
