//! Line-oriented menu loop over a [`Session`].
//!
//! Session errors are reported and the loop continues; only I/O failures on
//! the input or output stream end it early.  End of input behaves like `q`.

use std::io::{BufRead, Write};

use anyhow::Result;

use cg_graph::{Eccentricity, EngineKind};
use cg_session::Session;

const MENU: &str = "\
1) select region
2) farthest facility (Dijkstra)
3) farthest facility (Bellman-Ford)
4) place new facility
5) compare engines
6) set threshold
q) quit";

/// Human-readable summary of a farthest-facility search.
pub fn describe_eccentricity(session: &Session, ecc: &Eccentricity) -> String {
    let describe = |id| match session.store().get(id) {
        Some(f) => f.to_string(),
        None => id.to_string(),
    };
    match ecc.farthest {
        Some(far) => format!(
            "source:   {}\nfarthest: {} ({:.3} km)",
            describe(ecc.source),
            describe(far),
            ecc.distance_km
        ),
        None => format!("source:   {}\nfarthest: none reachable", describe(ecc.source)),
    }
}

pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut out: W) -> Result<()> {
    loop {
        writeln!(out, "\n{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut out, "> ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(raw) = prompt(&mut input, &mut out, "region: ")? else {
                    break;
                };
                match session.select_region(&raw) {
                    Ok(g) => writeln!(
                        out,
                        "{} facilities, {} links",
                        g.node_count(),
                        g.edge_count()
                    )?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            "2" | "3" => {
                let kind = if choice == "2" { EngineKind::Dijkstra } else { EngineKind::BellmanFord };
                match session.farthest(kind) {
                    Ok(ecc) => writeln!(out, "{}", describe_eccentricity(session, &ecc))?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            "4" => match session.place_new_facility(session.config().engine) {
                Ok(placed) => writeln!(out, "placed {placed}")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "5" => match session.compare_engines() {
                Ok(cmp) => {
                    writeln!(out, "{}", describe_eccentricity(session, &cmp.dijkstra))?;
                    writeln!(out, "engines agree: {}", cmp.agree)?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            "6" => {
                let Some(raw) = prompt(&mut input, &mut out, "threshold km: ")? else {
                    break;
                };
                let result = raw
                    .parse::<f64>()
                    .map_err(anyhow::Error::from)
                    .and_then(|km| Ok(session.set_threshold(km)?));
                match result {
                    Ok(()) => writeln!(out, "threshold {} km", session.config().threshold_km)?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            "q" | "Q" | "quit" => break,
            "" => {}
            other => writeln!(out, "unknown option {other:?}")?,
        }
    }
    Ok(())
}

/// Print `label`, read one line, and return it trimmed; `None` at end of
/// input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
