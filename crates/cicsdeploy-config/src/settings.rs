//! Settings file parsing.
//!
//! Server profiles are stored in a KDL document:
//!
//! ```kdl
//! server "prod" {
//!     username "alice"
//!     password "secret"
//!     configuration {
//!         url "https://cics.example.com:9080/"
//!         cicsplex "PLXA"
//!         region "REGA"
//!     }
//! }
//! ```

use crate::{ConfigError, ConfigResult};
use cicsdeploy_core::{ConfigNode, ProfileBlob, ProfileId, ProfileStore, ServerProfile};
use kdl::{KdlDocument, KdlNode, KdlValue};
use std::path::Path;

/// Server profiles read from a settings file.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    servers: Vec<ServerProfile>,
}

impl Settings {
    /// Read and parse a settings file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        parse_settings(&content)
    }

    /// Like [`Settings::load`], but a file that does not exist gives empty settings.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => parse_settings(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn servers(&self) -> &[ServerProfile] {
        &self.servers
    }

    pub fn server(&self, id: &ProfileId) -> Option<&ServerProfile> {
        self.servers.iter().find(|s| &s.id == id)
    }
}

impl ProfileStore for Settings {
    fn lookup(&self, id: &ProfileId) -> Option<ServerProfile> {
        self.server(id).cloned()
    }
}

/// Parse settings from KDL text.
pub fn parse_settings(kdl: &str) -> ConfigResult<Settings> {
    let doc: KdlDocument = kdl.parse()?;
    let mut servers: Vec<ServerProfile> = Vec::new();

    for node in doc.nodes() {
        if node.name().value() != "server" {
            continue;
        }

        let server = parse_server(node)?;
        if servers.iter().any(|s| s.id == server.id) {
            return Err(ConfigError::Duplicate(format!("server '{}'", server.id)));
        }
        servers.push(server);
    }

    Ok(Settings { servers })
}

fn parse_server(node: &KdlNode) -> ConfigResult<ServerProfile> {
    let id = get_first_string_arg(node).ok_or_else(|| ConfigError::InvalidValue {
        field: "server".to_string(),
        message: "missing server id".to_string(),
    })?;

    let mut server = ServerProfile::new(id);

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "username" => server.username = first_arg_text(child),
                "password" => server.password = first_arg_text(child),
                "private-key" | "private_key" => server.private_key = first_arg_text(child),
                "passphrase" => server.passphrase = first_arg_text(child),
                "configuration" => server.configuration = Some(parse_configuration(child)),
                _ => {}
            }
        }
    }

    Ok(server)
}

fn parse_configuration(node: &KdlNode) -> ProfileBlob {
    match node.children() {
        Some(children) => ProfileBlob::Tree(children.nodes().iter().map(to_config_node).collect()),
        None => match first_arg_text(node) {
            Some(value) => ProfileBlob::Scalar(value),
            None => ProfileBlob::Tree(Vec::new()),
        },
    }
}

fn to_config_node(node: &KdlNode) -> ConfigNode {
    ConfigNode {
        name: node.name().value().to_string(),
        value: first_arg_text(node),
        children: node
            .children()
            .map(|doc| doc.nodes().iter().map(to_config_node).collect())
            .unwrap_or_default(),
    }
}

// Helper functions for extracting values from KDL nodes

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

fn first_arg_text(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| value_text(e.value()))
}

fn value_text(value: &KdlValue) -> Option<String> {
    if let Some(s) = value.as_string() {
        return Some(s.to_string());
    }
    if let Some(i) = value.as_integer() {
        return Some(i.to_string());
    }
    value.as_bool().map(|b| b.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server() {
        let kdl = r#"
            server "prod" {
                username "alice"
                password "secret"
                private-key "/home/alice/.ssh/id_rsa"
                passphrase "pp"
                configuration {
                    url "https://cics.example.com:9080/"
                    cicsplex "PLXA"
                    region "REGA"
                }
            }
        "#;

        let settings = parse_settings(kdl).unwrap();
        assert_eq!(settings.servers().len(), 1);

        let server = settings.server(&ProfileId::from("prod")).unwrap();
        assert_eq!(server.username.as_deref(), Some("alice"));
        assert_eq!(server.password.as_deref(), Some("secret"));
        assert_eq!(server.private_key.as_deref(), Some("/home/alice/.ssh/id_rsa"));
        assert_eq!(server.passphrase.as_deref(), Some("pp"));

        let Some(ProfileBlob::Tree(nodes)) = &server.configuration else {
            panic!("expected a configuration tree");
        };
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[1].name, "cicsplex");
        assert_eq!(nodes[1].value.as_deref(), Some("PLXA"));
    }

    #[test]
    fn test_parse_multiple_servers() {
        let kdl = r#"
            server "dev" {
                configuration {
                    region "DEV1"
                }
            }
            server "prod"
            mirror "ignored"
        "#;

        let settings = parse_settings(kdl).unwrap();
        let ids: Vec<&str> = settings.servers().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["dev", "prod"]);
        assert!(settings.server(&ProfileId::from("prod")).unwrap().configuration.is_none());
    }

    #[test]
    fn test_scalar_configuration() {
        let kdl = r#"
            server "odd" {
                configuration "url=https://cics.example.com"
            }
        "#;

        let settings = parse_settings(kdl).unwrap();
        let server = settings.server(&ProfileId::from("odd")).unwrap();
        assert_eq!(
            server.configuration,
            Some(ProfileBlob::Scalar("url=https://cics.example.com".to_string()))
        );
    }

    #[test]
    fn test_non_string_credentials_are_kept() {
        let kdl = r#"
            server "prod" {
                username "alice"
                password 123456
                passphrase #true
                configuration {
                    url "https://h/a"
                    cicsplex "PLXA"
                    region 42
                }
            }
        "#;

        let settings = parse_settings(kdl).unwrap();
        let server = settings.server(&ProfileId::from("prod")).unwrap();
        assert_eq!(server.password.as_deref(), Some("123456"));
        assert_eq!(server.passphrase.as_deref(), Some("true"));

        let Some(ProfileBlob::Tree(nodes)) = &server.configuration else {
            panic!("expected a configuration tree");
        };
        assert_eq!(nodes[2].value.as_deref(), Some("42"));
    }

    #[test]
    fn test_duplicate_server() {
        let kdl = r#"
            server "prod"
            server "prod"
        "#;

        let result = parse_settings(kdl);
        assert!(matches!(result.unwrap_err(), ConfigError::Duplicate(_)));
    }

    #[test]
    fn test_server_without_id() {
        let kdl = r#"
            server {
                username "alice"
            }
        "#;

        let result = parse_settings(kdl);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_lookup() {
        let settings = parse_settings(r#"server "prod""#).unwrap();
        assert!(settings.lookup(&ProfileId::from("prod")).is_some());
        assert!(settings.lookup(&ProfileId::from("dev")).is_none());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join("settings.kdl")).unwrap();
        assert!(settings.servers().is_empty());

        let result = Settings::load(&dir.path().join("settings.kdl"));
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.kdl");
        std::fs::write(&path, "server \"prod\" {\n    username \"alice\"\n}\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(
            settings.server(&ProfileId::from("prod")).unwrap().username.as_deref(),
            Some("alice")
        );
    }
}
