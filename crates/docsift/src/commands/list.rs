use super::Context;

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let corpus = ctx.corpus()?;

    println!("{} documents", corpus.len());
    println!("{}", "=".repeat(40));
    for doc in &corpus {
        let date = if doc.last_modified.is_empty() {
            "-"
        } else {
            doc.last_modified.as_str()
        };
        println!("{:<10} {:<16} {}", doc.id, date, doc.title);
    }
    Ok(())
}
