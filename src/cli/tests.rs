use super::*;

#[test]
fn test_cli_parses_commands() {
    let cli = Cli::try_parse_from(["composer-manifest", "show"]).unwrap();
    assert!(matches!(cli.command, Commands::Show(_)));

    let cli = Cli::try_parse_from(["composer-manifest", "require", "acme/blog", "^1.0", "--dev"]).unwrap();
    assert!(matches!(cli.command, Commands::Require(_)));

    let cli = Cli::try_parse_from([
        "composer-manifest",
        "init",
        "acme/blog",
        "--description",
        "A small blogging engine",
        "--project",
    ])
    .unwrap();
    assert!(matches!(cli.command, Commands::Init(_)));
}

#[test]
fn test_init_requires_description() {
    assert!(Cli::try_parse_from(["composer-manifest", "init", "acme/blog"]).is_err());
}

#[test]
fn test_build_config_log_levels() {
    let cli = Cli::try_parse_from(["composer-manifest", "show"]).unwrap();
    assert_eq!(cli.build_config(), CliConfig::new());

    let cli = Cli::try_parse_from(["composer-manifest", "--verbose", "show"]).unwrap();
    assert_eq!(cli.build_config(), CliConfig::new().with_log_level("debug"));

    let cli = Cli::try_parse_from(["composer-manifest", "validate", "-q"]).unwrap();
    assert_eq!(cli.build_config(), CliConfig::new().with_log_level("error"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    assert!(Cli::try_parse_from(["composer-manifest", "-v", "-q", "show"]).is_err());
}
