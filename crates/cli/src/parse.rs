use nodescope_core::{split_node_identifier, NodescopeError};

pub fn run(identifier: &str) -> Result<(), Box<dyn std::error::Error>> {
    let split = split_node_identifier(identifier)
        .ok_or_else(|| NodescopeError::Identifier(identifier.to_string()))?;

    println!("family:  {}", split.family);
    println!("name:    {}", split.name);
    println!("version: {}", split.version);
    Ok(())
}
