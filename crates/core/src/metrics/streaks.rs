use chrono::NaiveDate;

use super::aggregation::sorted_by_date;
use super::{StreakKind, StreakRun, StreakSummary};
use crate::journal::JournalEntry;

struct Run {
    length: u32,
    start: NaiveDate,
    end: NaiveDate,
}

impl Run {
    fn to_streak(&self, kind: StreakKind) -> StreakRun {
        StreakRun {
            kind,
            length: self.length,
            start: self.start,
            end: self.end,
        }
    }
}

/// Single forward pass over the journal.
///
/// Non-trading days are skipped. A win extends the win run and resets the
/// loss run, a loss does the opposite. Any other status, including an unset
/// one, leaves both runs untouched. The longest run is replaced whenever the
/// current run reaches it, so on ties the most recent run is reported.
pub fn compute_streaks(entries: &[JournalEntry]) -> StreakSummary {
    let mut summary = StreakSummary::default();
    let mut win: Option<Run> = None;
    let mut loss: Option<Run> = None;

    for entry in sorted_by_date(entries) {
        if entry.is_non_trading() {
            continue;
        }
        let kind = match entry.status.as_ref() {
            Some(status) if status.is_win() => StreakKind::Win,
            Some(status) if status.is_loss() => StreakKind::Loss,
            _ => continue,
        };

        let (current, other) = match kind {
            StreakKind::Win => (&mut win, &mut loss),
            StreakKind::Loss => (&mut loss, &mut win),
        };
        match current {
            Some(run) if summary.last_outcome == Some(kind) => {
                run.length += 1;
                run.end = entry.date;
            }
            _ => {
                *current = Some(Run {
                    length: 1,
                    start: entry.date,
                    end: entry.date,
                });
                *other = None;
            }
        }
        summary.last_outcome = Some(kind);

        let Some(run) = current.as_ref() else {
            continue;
        };
        let longest = match kind {
            StreakKind::Win => &mut summary.longest_win,
            StreakKind::Loss => &mut summary.longest_loss,
        };
        if longest.as_ref().map_or(true, |best| run.length >= best.length) {
            *longest = Some(run.to_streak(kind));
        }
    }

    summary.current_win_streak = win.as_ref().map_or(0, |run| run.length);
    summary.current_loss_streak = loss.as_ref().map_or(0, |run| run.length);
    summary
}
