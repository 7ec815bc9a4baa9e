pub fn run() -> anyhow::Result<()> {
    println!("docsift {}", env!("CARGO_PKG_VERSION"));
    println!("Keyword extraction and relevance ranking for document search");
    Ok(())
}
