use std::collections::HashMap;
use std::io::Write;

use airdrop_signer::config::{resolve_env_ref, AppConfig, PRIVATE_KEY_ENV};

const KEY: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn loads_file_with_defaults() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        r#"
[signer]
private_key = "{KEY}"
"#
    )
    .unwrap();

    let cfg = AppConfig::from_toml(f.path()).unwrap();
    assert_eq!(cfg.amount.per_unit, 1);
    assert!(cfg.resolver.profiles_path.is_none());
    assert_eq!(cfg.amount_policy().per_unit, 1);
}

#[test]
fn resolves_env_refs() {
    let raw = r#"
[signer]
private_key = "env:SIGNER_KEY"

[amount]
per_unit = 1000

[resolver]
profiles_path = "profiles.json"
"#;
    let cfg = AppConfig::from_toml_str(raw, env_of(&[("SIGNER_KEY", KEY)])).unwrap();
    assert_eq!(cfg.signer.private_key, KEY);
    assert_eq!(cfg.amount_policy().per_unit, 1000);
    assert_eq!(cfg.resolver.profiles_path.unwrap().to_str(), Some("profiles.json"));
}

#[test]
fn explicit_env_overrides_file() {
    let raw = r#"
[signer]
private_key = "0xdeadbeef"
"#;
    let cfg = AppConfig::from_toml_str(raw, env_of(&[(PRIVATE_KEY_ENV, KEY)])).unwrap();
    assert_eq!(cfg.signer.private_key, KEY);

    let blank = AppConfig::from_toml_str(raw, env_of(&[(PRIVATE_KEY_ENV, "  ")])).unwrap();
    assert_eq!(blank.signer.private_key, "0xdeadbeef");
}

#[test]
fn rejects_invalid_config() {
    let no_key = "[signer]\n";
    assert!(AppConfig::from_toml_str(no_key, env_of(&[])).is_err());

    let missing_var = "[signer]\nprivate_key = \"env:NOPE\"\n";
    assert!(AppConfig::from_toml_str(missing_var, env_of(&[])).is_err());

    let zero_rate = format!("[signer]\nprivate_key = \"{KEY}\"\n[amount]\nper_unit = 0\n");
    assert!(AppConfig::from_toml_str(&zero_rate, env_of(&[])).is_err());

    assert!(AppConfig::from_toml_str("not toml at all = = =", env_of(&[])).is_err());
}

#[test]
fn debug_redacts_private_key() {
    let raw = format!("[signer]\nprivate_key = \"{KEY}\"\n");
    let cfg = AppConfig::from_toml_str(&raw, env_of(&[])).unwrap();
    let shown = format!("{cfg:?}");
    assert!(shown.contains("<redacted>"));
    assert!(!shown.contains(KEY));
}

#[test]
fn env_ref_passthrough_and_errors() {
    assert_eq!(resolve_env_ref("plain", env_of(&[])).unwrap(), "plain");
    assert!(resolve_env_ref("env:", env_of(&[])).is_err());
    assert!(resolve_env_ref("env:   ", env_of(&[])).is_err());
}
