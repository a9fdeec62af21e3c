use alto_client::*;

// This file includes the following tests:
//
// Valid use cases:
//   - Defaults describe the fuji test network profile
//   - A full document loads and validates
//   - The contracts section may be omitted
//
// Invalid use cases:
//   - Malformed json, versions, urls, chain ids, credentials and addresses

const TEST_KEY: &str = "1111111111111111111111111111111111111111111111111111111111111111";

fn document(version: &str, url: &str, chain_id: u64, account: &str) -> String {
    format!(
        r#"{{
            "solidity": {{
                "version": "{}",
                "settings": {{ "optimizer": {{ "enabled": true, "runs": 200 }} }}
            }},
            "networks": {{
                "fuji": {{
                    "url": "{}",
                    "chainId": {},
                    "accounts": ["{}"]
                }}
            }},
            "contracts": {{
                "nft": "0xB9e76f90838CaaFEcb601754fbd2B112D513869a",
                "auctionManager": "0x0cc272d5EeE3997834A177921135A962d2d00b71"
            }}
        }}"#,
        version, url, chain_id, account
    )
}

#[test]
fn defaults_match_fuji() {
    let config = NetworkConfig::default();
    assert_eq!(config.solidity.version, "0.8.17");
    assert!(config.solidity.settings.optimizer.enabled);
    assert_eq!(config.solidity.settings.optimizer.runs, 200);
    let fuji = config.network(DEFAULT_NETWORK).unwrap();
    assert_eq!(fuji.url, "https://api.avax-test.network/ext/bc/C/rpc");
    assert_eq!(fuji.chain_id, 43113);
    assert!(fuji.accounts.is_empty());
    assert_eq!(config.contracts, ContractAddresses::default());
    config.validate().unwrap();
}

#[test]
fn loads_full_document() {
    let json = document("0.8.17", FUJI_URL, FUJI_CHAIN_ID, TEST_KEY);
    let config = NetworkConfig::from_json_str(&json).unwrap();
    config.validate().unwrap();
    let fuji = config.network("fuji").unwrap();
    assert_eq!(fuji.accounts.len(), 1);
    assert_eq!(fuji.accounts[0].secret_key().unwrap(), [0x11; 32]);
    assert_eq!(config.contracts.nft_address().unwrap()[0], 0xb9);
    assert_eq!(config.contracts.auction_manager_address().unwrap()[0], 0x0c);

    let reloaded = NetworkConfig::from_json_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn loads_from_file() {
    let path = std::env::temp_dir().join(format!("alto-config-{}.json", std::process::id()));
    std::fs::write(&path, document("0.8.17", FUJI_URL, FUJI_CHAIN_ID, TEST_KEY)).unwrap();
    let config = NetworkConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.network("fuji").unwrap().chain_id, FUJI_CHAIN_ID);

    assert!(matches!(
        NetworkConfig::load(&path),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn contracts_section_is_optional() {
    let json = r#"{
        "solidity": { "version": "0.8.17", "settings": { "optimizer": { "enabled": false, "runs": 1 } } },
        "networks": { "local": { "url": "http://localhost:8545", "chainId": 31337 } }
    }"#;
    let config = NetworkConfig::from_json_str(json).unwrap();
    config.validate().unwrap();
    assert_eq!(config.contracts, ContractAddresses::default());
    assert!(config.network("local").unwrap().accounts.is_empty());
    assert!(matches!(
        config.network("fuji"),
        Err(ConfigError::UnknownNetwork(_))
    ));
}

#[test]
fn rejects_invalid_documents() {
    assert!(matches!(
        NetworkConfig::from_json_str("{ not json"),
        Err(ConfigError::Json(_))
    ));

    let config = NetworkConfig::from_json_str(&document("0.8", FUJI_URL, 1, TEST_KEY)).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidCompilerVersion(_))
    ));

    let config =
        NetworkConfig::from_json_str(&document("0.8.17", "ws://localhost", 1, TEST_KEY)).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidUrl { .. })
    ));

    let config = NetworkConfig::from_json_str(&document("0.8.17", FUJI_URL, 0, TEST_KEY)).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidChainId(_))
    ));

    let config = NetworkConfig::from_json_str(&document("0.8.17", FUJI_URL, 1, "beef")).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidCredential { index: 0, .. })
    ));

    let mut config = NetworkConfig::default();
    config.contracts.nft = "0x1234".to_owned();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidAddress { .. })
    ));
}

#[test]
fn credentials_are_redacted() {
    let json = document("0.8.17", FUJI_URL, FUJI_CHAIN_ID, TEST_KEY);
    let config = NetworkConfig::from_json_str(&json).unwrap();
    let debug = format!("{:?}", config);
    assert!(!debug.contains(TEST_KEY));
    assert!(debug.contains("****1111"));
    assert_eq!(config.network("fuji").unwrap().accounts[0].to_string(), "****1111");
}
