use super::Context;

pub fn run(ctx: &Context, text: &str, json: bool) -> anyhow::Result<()> {
    let engine = ctx.engine()?;
    let terms = engine.tokenizer().tokenize(text);

    if json {
        println!("{}", serde_json::to_string(&terms)?);
    } else {
        for term in &terms {
            println!("{}", term);
        }
    }
    Ok(())
}
