use super::render::format_document;
use super::Context;

pub fn run(ctx: &Context, id: &str, json: bool) -> anyhow::Result<()> {
    let corpus = ctx.corpus()?;
    let doc = corpus.require(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(doc)?);
    } else {
        print!("{}", format_document(doc));
    }
    Ok(())
}
