//! Win/loss history formatting

use crate::api::RiotApi;
use crate::error::ApiResult;
use crate::match_view::MatchId;
use chrono::{DateTime, Utc};
use std::io::Write;

/// `_` for a win, `X` for a loss, `?` when the outcome is unknown
pub fn outcome_symbol(result: Option<bool>) -> &'static str {
    match result {
        Some(true) => "_",
        Some(false) => "X",
        None => "?",
    }
}

/// Symbols for `name`'s outcome in each of `match_ids`, in order
///
/// Missing match records count as unknown.
pub fn outcomes(
    api: &mut RiotApi<'_>,
    name: &str,
    match_ids: &[MatchId],
) -> ApiResult<Vec<&'static str>> {
    let mut symbols = Vec::with_capacity(match_ids.len());
    for &match_id in match_ids {
        let result = api
            .get_match_detail(match_id)?
            .and_then(|record| record.view().is_winner(name));
        symbols.push(outcome_symbol(result));
    }
    Ok(symbols)
}

/// Space-joined outcomes of `name`'s matches before `since`, most recent first
pub fn history_line(api: &mut RiotApi<'_>, name: &str, since: Option<i64>) -> ApiResult<String> {
    let match_ids = api.matches_for_name(name, None, since)?;
    Ok(outcomes(api, name, &match_ids)?.join(" "))
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown time".to_string())
}

/// Print every recent match of `name` with each teammate's prior form
///
/// Output is written and flushed match by match so long lookups show
/// progress.
pub fn write_report<W: Write>(api: &mut RiotApi<'_>, name: &str, out: &mut W) -> ApiResult<()> {
    writeln!(out, "Name: {}", name)?;

    for match_id in api.matches_for_name(name, None, None)? {
        let Some(record) = api.get_match_detail(match_id)? else {
            log::warn!("Match {} disappeared, skipping", match_id);
            continue;
        };
        let view = record.view();

        writeln!(
            out,
            "Match: {} -> {} <- at {} ({})",
            match_id,
            outcome_symbol(view.is_winner(name)),
            format_timestamp(view.timestamp()),
            view.timestamp()
        )?;
        writeln!(out, "Teammates:")?;

        let mates = view.team_members_account_ids(name).unwrap_or_default();
        for mate_account_id in mates {
            let mate = view.account_name(mate_account_id).unwrap_or(mate_account_id);
            write!(out, "{:>20}: ", mate)?;
            out.flush()?;

            // Names change between seasons; fall back to the account id seen
            // in this match when the name no longer resolves.
            let since = Some(view.timestamp());
            let mate_matches = match api.resolve_account(mate)? {
                Some(account_id) => api.list_recent_matches(&account_id, None, since)?,
                None => api.list_recent_matches(mate_account_id, None, since)?,
            };

            for mate_match_id in mate_matches {
                let result = api
                    .get_match_detail(mate_match_id)?
                    .and_then(|mate_record| mate_record.view().is_winner(mate));
                write!(out, "{} ", outcome_symbol(result))?;
                out.flush()?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
