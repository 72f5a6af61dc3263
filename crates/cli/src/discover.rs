use crate::WalkArgs;
use nodescope_core::{discover_nodes, DiscoveryConfig, DiscoveryResult};
use tabled::{Table, Tabled};
use tracing::info;

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "IDENTIFIER")]
    identifier: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "FAMILY")]
    family: String,
    #[tabled(rename = "VERSION")]
    version: String,
    #[tabled(rename = "URI")]
    uri: String,
}

impl From<&DiscoveryResult> for Row {
    fn from(result: &DiscoveryResult) -> Self {
        Self {
            identifier: result.identifier.clone(),
            name: result.name.clone(),
            family: result.family.clone(),
            version: result.version.to_string(),
            uri: result.uri.display().to_string(),
        }
    }
}

pub fn run(args: WalkArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = DiscoveryConfig::new(args.paths, args.extensions, args.follow_symlinks);
    let results = discover_nodes(&config);
    info!("Discovered {} nodes", results.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No nodes discovered");
        return Ok(());
    }

    let rows: Vec<Row> = results.iter().map(Row::from).collect();
    println!("{}", Table::new(rows));
    Ok(())
}
