use super::invert_session::InvertSession;
use invert_core::config::RootConfig;
use invert_core::{InverseDrawer, Result};

/// Factory for creating sessions from the loaded configuration.
#[derive(Debug, Clone)]
pub struct SessionFactory {
    config: RootConfig,
}

impl SessionFactory {
    /// Creates a new SessionFactory.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if `config` fails validation.
    pub fn new(config: RootConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RootConfig {
        &self.config
    }

    /// Creates a session with an empty board.
    ///
    /// Draws are reproducible when the configuration carries a seed and
    /// seeded from entropy otherwise.
    pub fn create_session(&self) -> InvertSession {
        let drawer = match self.config.draw.seed {
            Some(seed) => InverseDrawer::seeded(seed),
            None => InverseDrawer::from_entropy(),
        };
        InvertSession::new(self.config.rules, drawer, self.config.draw.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = RootConfig::default();
        config.draw.count = 0;
        assert!(SessionFactory::new(config).unwrap_err().is_config());
    }

    #[test]
    fn test_seeded_sessions_repeat() {
        let mut config = RootConfig::default();
        config.draw.seed = Some(45);
        let factory = SessionFactory::new(config).unwrap();

        let mut first = factory.create_session();
        let mut second = factory.create_session();
        first.toggle(0, 7).unwrap();
        second.toggle(0, 7).unwrap();

        assert_eq!(first.generate().unwrap(), second.generate().unwrap());
    }

    #[test]
    fn test_session_uses_configured_rules() {
        let mut config = RootConfig::default();
        config.rules.games = 2;
        config.draw.count = 1;
        let factory = SessionFactory::new(config).unwrap();

        let mut session = factory.create_session();

        assert!(session.toggle(2, 1).unwrap_err().is_invalid_argument());
        assert_eq!(session.generate().unwrap().recommendations.len(), 1);
    }
}
