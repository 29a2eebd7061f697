use std::{io, time::Instant};

use console::Term;
use echosummarize_core::{
    RevealConfig, Typewriter,
    render::{CURSOR_GLYPH, cursor_lit},
    reveal::animate,
};

/// Write `summary` to `term`, typed out one char at a time when the reveal is
/// enabled and `term` is an actual terminal.
pub async fn print_summary(term: &Term, summary: &str, reveal: &RevealConfig) -> io::Result<()> {
    let mut typewriter = Typewriter::new(summary);

    if !reveal.enabled || !term.is_term() {
        typewriter.finish();
        return term.write_str(&typewriter.render().to_plain());
    }

    term.write_str(&cursor(true))?;

    let started = Instant::now();
    let mut write_error = None;
    let interrupted = tokio::select! {
        _ = animate(&mut typewriter, reveal.speed, |tw| {
            if write_error.is_none() {
                write_error = write_frame(term, tw, cursor_lit(started.elapsed())).err();
            }
        }) => false,
        _ = tokio::signal::ctrl_c() => true,
    };

    if let Some(e) = write_error {
        return Err(e);
    }
    if interrupted {
        // Erase the cursor left behind by the cancelled reveal.
        term.write_str(" \n")?;
    }
    Ok(())
}

/// Cursor glyph (or a blank while it is dark), then step back over it.
fn cursor(lit: bool) -> String {
    let glyph = if lit { CURSOR_GLYPH } else { ' ' };
    format!("{}\x08", glyph)
}

/// Draw the char revealed by the last tick over the cursor, then redraw the
/// cursor after it unless the text is complete.
fn write_frame(term: &Term, typewriter: &Typewriter, lit: bool) -> io::Result<()> {
    let Some(last) = typewriter.revealed().chars().last() else {
        return Ok(());
    };

    if last == '\n' {
        term.write_str(" \n")?;
    } else {
        term.write_str(last.encode_utf8(&mut [0; 4]))?;
    }

    if typewriter.is_complete() {
        term.write_str("\n")
    } else {
        term.write_str(&cursor(lit))
    }
}
