use mktpulse_core::{derive_all, sample::sample_tables, RawField};

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["mktpulse-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.dataset.is_none());
}

#[test]
fn parses_tables_defaults() {
    let cli = Cli::try_parse_from(["mktpulse-cli", "tables"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Tables {
            domain: None,
            ref platforms,
            metric: None,
            json: false
        }) if platforms.is_empty()
    ));
}

#[test]
fn parses_tables_domain_and_json() {
    let cli =
        Cli::try_parse_from(["mktpulse-cli", "tables", "--domain", "brand-pulse", "--json"])
            .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Tables {
            domain: Some(Domain::BrandPulse),
            json: true,
            ..
        })
    ));
}

#[test]
fn parses_repeated_platform_filter() {
    let cli = Cli::try_parse_from([
        "mktpulse-cli",
        "tables",
        "--platform",
        "tiktok",
        "--platform",
        "Instagram",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Tables { ref platforms, .. })
            if platforms == &vec![Platform::TikTok, Platform::Instagram]
    ));
}

#[test]
fn parses_metric_filter() {
    let cli = Cli::try_parse_from([
        "mktpulse-cli",
        "tables",
        "--metric",
        "purchase-consideration",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Tables {
            metric: Some(BrandMetric::PurchaseConsideration),
            ..
        })
    ));
}

#[test]
fn rejects_unknown_platform() {
    let result = Cli::try_parse_from(["mktpulse-cli", "tables", "--platform", "myspace"]);
    assert!(result.is_err());
}

#[test]
fn dataset_flag_is_global() {
    let cli =
        Cli::try_parse_from(["mktpulse-cli", "kpis", "--dataset", "data/q2.yaml", "--json"])
            .unwrap();
    assert_eq!(cli.dataset, Some(PathBuf::from("data/q2.yaml")));
    assert!(matches!(cli.command, Some(Commands::Kpis { json: true })));
}

#[test]
fn parses_report_and_validate() {
    let report = Cli::try_parse_from(["mktpulse-cli", "report"]).unwrap();
    assert!(matches!(report.command, Some(Commands::Report)));
    let validate = Cli::try_parse_from(["mktpulse-cli", "validate"]).unwrap();
    assert!(matches!(validate.command, Some(Commands::Validate)));
}

#[test]
fn select_filters_platforms_and_metric() {
    let derived = derive_all(&sample_tables());
    let selection = output::Selection {
        domain: None,
        platforms: vec![Platform::LinkedIn],
        metric: Some(BrandMetric::UnaidedAwareness),
    };
    let selected = output::select(&derived, &selection);
    assert_eq!(selected.monitoring.len(), 6);
    assert!(selected
        .monitoring
        .iter()
        .all(|r| r.record.platform == Platform::LinkedIn));
    assert_eq!(selected.brand_pulse.len(), 12);
    assert_eq!(selected.social, derived.social);
}

#[test]
fn select_without_filters_keeps_everything() {
    let derived = derive_all(&sample_tables());
    let selected = output::select(&derived, &output::Selection::default());
    assert_eq!(selected, derived);
}

#[test]
fn opt_formats_missing_as_dash() {
    assert_eq!(output::opt(None, 2), "-");
    assert_eq!(output::opt(Some(1.23456), 2), "1.23");
}

#[test]
fn validate_passes_on_sample() {
    assert!(run_validate(&sample_tables()).is_ok());
}

#[test]
fn validate_fails_on_unparseable_field() {
    let mut raw = sample_tables();
    raw.monitoring[4].engagement_rate_raw = RawField::from("four percent");
    let err = run_validate(&raw).unwrap_err();
    assert!(err.to_string().contains("1 field(s)"), "{err}");
}

#[test]
fn derive_respects_strict_parsing() {
    let mut raw = sample_tables();
    raw.social[0].spend_raw = RawField::from("n/a");
    let lenient = AppConfig {
        env: mktpulse_core::Environment::Test,
        log_level: "info".to_string(),
        dataset_path: None,
        strict_parsing: false,
    };
    let strict = AppConfig {
        strict_parsing: true,
        ..lenient.clone()
    };
    assert!(derive(&raw, &lenient).is_ok());
    assert!(derive(&raw, &strict).is_err());
}

#[test]
fn help_is_handled_by_clap() {
    let err = Cli::try_parse_from(["mktpulse-cli", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
