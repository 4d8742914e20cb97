mod common;

use std::io::Write;

use common::init_logger;
use seqfeatures::config::CONFIG_ENV_VAR;
use seqfeatures::prelude::*;

#[test]
fn global_config_falls_back_on_invalid_file() -> anyhow::Result<()> {
    init_logger();
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{"reparent": "sometimes"}}"#)?;
    std::env::set_var(CONFIG_ENV_VAR, file.path());

    assert!(FeatureConfig::from_env().is_err());
    assert_eq!(FeatureConfig::global(), &FeatureConfig::default());
    assert!(Qualifier::new("db_xref", "GO:0005515")?.is_db_xref());

    std::env::set_var(CONFIG_ENV_VAR, file.path().with_extension("missing"));
    assert!(FeatureConfig::from_env().is_err());
    Ok(())
}
