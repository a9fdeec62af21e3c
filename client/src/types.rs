use crate::utils::{parse_address, parse_secret_key};
use crate::{
    ConfigError, AUCTION_MANAGER_ADDRESS, DEFAULT_COMPILER_VERSION, DEFAULT_NETWORK,
    DEFAULT_OPTIMIZER_RUNS, FUJI_CHAIN_ID, FUJI_URL, NFT_ADDRESS,
};
use alto_auction::instruction::Address;

use log::debug;
use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// A hex-encoded signing key. Never printed in full.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn secret_key(&self) -> Result<[u8; 32], String> {
        parse_secret_key(&self.0)
    }

    /// Last four hex digits of the key, enough to tell keys apart.
    pub fn fingerprint(&self) -> String {
        let digits: Vec<char> = self.0.trim().chars().collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("****{}", tail)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.fingerprint())
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fingerprint())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    pub optimizer: OptimizerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidityConfig {
    pub version: String,
    pub settings: CompilerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    pub url: String,
    pub chain_id: u64,
    #[serde(default)]
    pub accounts: Vec<Credential>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAddresses {
    pub nft: String,
    pub auction_manager: String,
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            nft: NFT_ADDRESS.to_owned(),
            auction_manager: AUCTION_MANAGER_ADDRESS.to_owned(),
        }
    }
}

impl ContractAddresses {
    pub fn nft_address(&self) -> Result<Address, ConfigError> {
        parse_address(&self.nft)
    }

    pub fn auction_manager_address(&self) -> Result<Address, ConfigError> {
        parse_address(&self.auction_manager)
    }
}

/// Compiler target and network profiles of the auction contracts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub solidity: SolidityConfig,
    pub networks: BTreeMap<String, NetworkProfile>,
    #[serde(default)]
    pub contracts: ContractAddresses,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            DEFAULT_NETWORK.to_owned(),
            NetworkProfile {
                url: FUJI_URL.to_owned(),
                chain_id: FUJI_CHAIN_ID,
                accounts: Vec::new(),
            },
        );
        Self {
            solidity: SolidityConfig {
                version: DEFAULT_COMPILER_VERSION.to_owned(),
                settings: CompilerSettings {
                    optimizer: OptimizerSettings {
                        enabled: true,
                        runs: DEFAULT_OPTIMIZER_RUNS,
                    },
                },
            },
            networks,
            contracts: ContractAddresses::default(),
        }
    }
}

impl NetworkConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading network configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn network(&self, name: &str) -> Result<&NetworkProfile, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_owned()))
    }

    /// Checks every value an external build tool would reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_semver(&self.solidity.version) {
            return Err(ConfigError::InvalidCompilerVersion(
                self.solidity.version.clone(),
            ));
        }
        for (name, profile) in self.networks.iter() {
            if !(profile.url.starts_with("http://") || profile.url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    network: name.clone(),
                    url: profile.url.clone(),
                });
            }
            if profile.chain_id == 0 {
                return Err(ConfigError::InvalidChainId(name.clone()));
            }
            for (index, credential) in profile.accounts.iter().enumerate() {
                credential
                    .secret_key()
                    .map_err(|reason| ConfigError::InvalidCredential {
                        network: name.clone(),
                        index,
                        reason,
                    })?;
            }
        }
        self.contracts.nft_address()?;
        self.contracts.auction_manager_address()?;
        Ok(())
    }
}

fn is_semver(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit()))
}

#[test]
fn semver_test() {
    assert!(is_semver("0.8.17"));
    assert!(!is_semver("0.8"));
    assert!(!is_semver("0.8.x"));
    assert!(!is_semver("0..17"));
}

#[test]
fn fingerprint_test() {
    let credential = Credential::new("abcdef0123");
    assert_eq!(credential.fingerprint(), "****0123");
    assert_eq!(Credential::new("ab").fingerprint(), "****ab");
}
