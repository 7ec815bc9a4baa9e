use super::render::format_result;
use super::Context;
use docsift_core::{ChatSession, Document, SearchEngine};
use std::io::{BufRead, Write};

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let corpus = ctx.corpus()?;
    let engine = ctx.engine()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let turns = converse(&engine, corpus.documents(), stdin.lock(), stdout.lock())?;
    tracing::debug!(turns, "chat ended");
    Ok(())
}

/// Answer each input line until EOF or `exit`; returns the number of turns
pub fn converse<R: BufRead, W: Write>(
    engine: &SearchEngine,
    corpus: &[Document],
    input: R,
    mut out: W,
) -> anyhow::Result<usize> {
    let mut session = ChatSession::new();
    if let Some(welcome) = session.messages().first() {
        writeln!(out, "{}", welcome.content)?;
    }

    let mut turns = 0;
    for line in input.lines() {
        let line = line?;
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        let Some(reply) = session.send(engine, corpus, &line) else {
            continue;
        };
        turns += 1;

        writeln!(out, "{}", reply.content)?;
        if let Some(results) = &reply.results {
            for (idx, result) in results.iter().enumerate() {
                write!(out, "{}", format_result(idx + 1, result))?;
            }
        }
        out.flush()?;
    }
    Ok(turns)
}
