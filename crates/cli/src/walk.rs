use crate::WalkArgs;
use nodescope_core::{discover_files, DiscoveredUri, DiscoveryConfig};
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "URI")]
    uri: String,
    #[tabled(rename = "RESOLVED URI")]
    resolved_uri: String,
}

impl From<&DiscoveredUri> for Row {
    fn from(location: &DiscoveredUri) -> Self {
        Self {
            uri: location.uri.display().to_string(),
            resolved_uri: location.resolved_uri.display().to_string(),
        }
    }
}

pub fn run(args: WalkArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Reuse the config layer so extension normalization matches `discover`.
    let config = DiscoveryConfig::new(args.paths, args.extensions, args.follow_symlinks);
    let uris = discover_files(
        &config.search_paths,
        &config.allowed_extensions,
        config.follow_symlinks,
    );
    info!("Walked {} qualifying files", uris.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&uris)?);
        return Ok(());
    }

    if uris.is_empty() {
        println!("No qualifying files found");
        return Ok(());
    }

    let rows: Vec<Row> = uris.iter().map(Row::from).collect();
    println!("{}", Table::new(rows));
    Ok(())
}
