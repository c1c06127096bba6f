use {
    crate::Error,
    config::{Config, Environment, File},
    std::path::Path,
};

pub struct ConfigParser;

impl ConfigParser {
    /// Load a configuration file, then apply overrides from environment
    /// variables. Nested keys are separated by `__` in variable names, e.g.
    /// `CONSENSUS__TIMEOUT` overrides `consensus.timeout`.
    pub fn parse<D, P>(path: P) -> Result<D, Error>
    where
        D: serde::de::DeserializeOwned,
        P: AsRef<Path>,
    {
        let env_override = Environment::default().separator("__");

        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_override)
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
