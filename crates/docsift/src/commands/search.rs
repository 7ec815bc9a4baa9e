use super::render::format_result;
use super::Context;
use docsift_core::SearchOutcome;
use std::io::Write;

pub fn run(ctx: &Context, query: &str, json: bool, limit: Option<usize>) -> anyhow::Result<()> {
    let corpus = ctx.corpus()?;
    let engine = ctx.engine()?;
    let mut outcome = engine.search(corpus.documents(), query);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        if let Some(limit) = limit {
            outcome.results.truncate(limit);
        }
        serde_json::to_writer_pretty(&mut out, &outcome)?;
        writeln!(out)?;
    } else {
        write_outcome(&mut out, &outcome, limit)?;
    }
    Ok(())
}

/// Human-readable listing; the header always reports the full match count
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &SearchOutcome,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    if outcome.is_no_search() {
        writeln!(out, "No search terms in query.")?;
        return Ok(());
    }

    let count = outcome.results.len();
    let shown = limit.map_or(count, |limit| limit.min(count));
    write!(
        out,
        "Found {} document{} for: {}",
        count,
        if count == 1 { "" } else { "s" },
        outcome.terms.joined()
    )?;
    if shown < count {
        write!(out, " (showing {})", shown)?;
    }
    writeln!(out)?;
    for (idx, result) in outcome.results.iter().take(shown).enumerate() {
        writeln!(out)?;
        write!(out, "{}", format_result(idx + 1, result))?;
    }
    Ok(())
}
