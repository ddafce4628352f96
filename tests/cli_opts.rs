use clap::{CommandFactory, Parser};
use datastore_client::{ClientConfig, Target, DEFAULT_ENDPOINT};
use datastore_seed::{Cli, ConnectionOpts, SeedError, SeedOpts};
use std::time::Duration;

fn seed_opts(project_name: &str, namespace: &str, kind: &str) -> SeedOpts {
    SeedOpts {
        project_name: project_name.to_string(),
        namespace: namespace.to_string(),
        kind: kind.to_string(),
    }
}

fn default_of(id: &str) -> Vec<String> {
    let command = Cli::command();
    let arg = command
        .get_arguments()
        .find(|a| a.get_id() == id)
        .unwrap_or_else(|| panic!("no argument {id}"));
    arg.get_default_values()
        .iter()
        .map(|v| v.to_string_lossy().into_owned())
        .collect()
}

fn env_of(id: &str) -> Option<String> {
    let command = Cli::command();
    let env = command
        .get_arguments()
        .find(|a| a.get_id() == id)
        .and_then(|a| a.get_env())
        .map(|v| v.to_string_lossy().into_owned());
    env
}

#[test]
fn test_default_flags() {
    let cli = Cli::try_parse_from(["datastore-seed"]).unwrap();

    assert_eq!(cli.seed.project_name, "my_project");
    assert_eq!(cli.seed.namespace, "my_namespace");
    assert_eq!(cli.seed.kind, "item_kind");
    assert!(cli.connection.request_timeout_secs.is_none());
}

#[test]
fn test_seed_flags_ignore_environment() {
    for id in ["project_name", "namespace", "kind"] {
        assert_eq!(env_of(id), None, "{id}");
    }
    assert_eq!(default_of("project_name"), vec!["my_project"]);
    assert_eq!(default_of("namespace"), vec!["my_namespace"]);
    assert_eq!(default_of("kind"), vec!["item_kind"]);
}

#[test]
fn test_connection_flag_defaults_and_env() {
    assert_eq!(default_of("endpoint"), vec![DEFAULT_ENDPOINT]);
    assert_eq!(env_of("endpoint").as_deref(), Some("DATASTORE_ENDPOINT"));
    assert_eq!(
        env_of("emulator_host").as_deref(),
        Some("DATASTORE_EMULATOR_HOST")
    );
    assert_eq!(
        env_of("access_token").as_deref(),
        Some("DATASTORE_ACCESS_TOKEN")
    );
    assert_eq!(env_of("request_timeout_secs"), None);
}

#[test]
fn test_underscore_flag_names() {
    let cli = Cli::try_parse_from([
        "datastore-seed",
        "--project_name",
        "demo",
        "--namespace",
        "tenant_a",
        "--kind",
        "users",
    ])
    .unwrap();

    assert_eq!(cli.seed.project_name, "demo");
    assert_eq!(cli.seed.namespace, "tenant_a");
    assert_eq!(cli.seed.kind, "users");
    assert!(cli.seed.validate().is_ok());
}

#[test]
fn test_empty_flags_are_rejected() {
    let cases = [
        (seed_opts("", "ns", "kind"), "project_name is empty"),
        (seed_opts("p", "", "kind"), "namespace is empty"),
        (seed_opts("p", "ns", ""), "kind is empty"),
    ];

    for (opts, expected) in cases {
        match opts.validate() {
            Err(SeedError::Config(message)) => assert_eq!(message, expected),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}

#[test]
fn test_empty_kind_parses_then_fails_validation() {
    let cli = Cli::try_parse_from(["datastore-seed", "--kind", ""]).unwrap();
    assert!(matches!(cli.seed.validate(), Err(SeedError::Config(_))));
}

#[test]
fn test_emulator_host_takes_precedence() {
    let opts = ConnectionOpts {
        emulator_host: Some("localhost:8081".to_string()),
        endpoint: DEFAULT_ENDPOINT.to_string(),
        access_token: Some("token".to_string()),
        request_timeout_secs: Some(30),
    };

    assert_eq!(
        opts.client_config("my_project"),
        ClientConfig {
            project_id: "my_project".to_string(),
            target: Target::Emulator {
                host: "localhost:8081".to_string()
            },
            request_timeout: Some(Duration::from_secs(30)),
        }
    );
}

#[test]
fn test_empty_emulator_host_uses_endpoint() {
    let opts = ConnectionOpts {
        emulator_host: Some(String::new()),
        endpoint: "https://example.test".to_string(),
        access_token: Some("token".to_string()),
        request_timeout_secs: None,
    };

    assert_eq!(
        opts.client_config("p").target,
        Target::Cloud {
            endpoint: "https://example.test".to_string(),
            access_token: Some("token".to_string()),
        }
    );
}
