//! Save a session

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use toolish::core::models::DayId;
use toolish::intake;
use toolish::output::{OutputMode, SaveResult};

use super::context::Context;

/// Read a session for `day` from `input` (stdin if absent or `-`) and save it
///
/// Exercises of the day missing from the input are saved too, without any
/// completed set, so only a session covering the whole day completes it.
pub fn save(
    day: DayId,
    input: Option<&Path>,
    data_dir: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let json = read_input(input)?;
    let inputs = intake::parse(&json).context("invalid session input")?;

    let mut ctx = Context::open(data_dir)?;
    let mut sessions = intake::resolve(day, inputs, &ctx.catalog)?;
    if !sessions.is_empty() {
        sessions = intake::fill_day(day, sessions, &ctx.catalog, &ctx.store.state().history)?;
    }
    let summary = ctx.store.record_session(day, &sessions)?;

    SaveResult::from(&summary).render(mode);
    Ok(())
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            Ok(buf)
        },
    }
}
