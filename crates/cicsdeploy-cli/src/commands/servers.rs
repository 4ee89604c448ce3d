//! Server profile commands.

use cicsdeploy_config::{Settings, extract_fields};

/// Print the server profiles in the settings file.
pub fn list(settings: &Settings) {
    if settings.servers().is_empty() {
        println!("No servers configured");
        return;
    }

    for server in settings.servers() {
        match extract_fields(server) {
            Ok(fields) => println!(
                "{}\t{}",
                server.id,
                fields.url.as_deref().unwrap_or("(no url)")
            ),
            Err(e) => println!("{}\t({})", server.id, e),
        }
    }
}
