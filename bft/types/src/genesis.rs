use {
    crate::{PublicKey, StdError, StdResult, Validator},
    serde::{Deserialize, Serialize},
    std::collections::BTreeSet,
};

/// A validator as it appears in the genesis configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenesisValidator {
    pub pub_key: PublicKey,
    pub power: u64,
    /// Human-readable label; not part of the validator's identity.
    #[serde(default)]
    pub name: Option<String>,
}

/// The part of the genesis configuration that defines the initial validator
/// set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenesisConfig {
    pub chain_id: String,
    pub validators: Vec<GenesisValidator>,
}

impl GenesisConfig {
    /// Admit the genesis validators, in the order they are listed.
    ///
    /// Errors if two entries derive the same address.
    pub fn validators(&self) -> StdResult<Vec<Validator>> {
        let mut seen = BTreeSet::new();

        self.validators
            .iter()
            .map(|genesis| {
                let validator = Validator::from_public_key(genesis.pub_key, genesis.power);

                if !seen.insert(validator.address()) {
                    return Err(StdError::duplicate_data::<Validator, _>(validator.address()));
                }

                #[cfg(feature = "tracing")]
                tracing::info!(
                    chain_id = self.chain_id.as_str(),
                    address = %validator.address(),
                    name = genesis.name.as_deref(),
                    voting_power = validator.voting_power(),
                    "Admitted genesis validator"
                );

                Ok(validator)
            })
            .collect()
    }
}

// ----------------------------------- tests -----------------------------------
