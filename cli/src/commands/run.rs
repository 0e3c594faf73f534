use std::time::{Duration, Instant};

use colored::*;
use tour_common::{config::Config, success, warn};
use tour_core::tour::{self, ChapterRun, Selection};
use tracing::debug;

use crate::terminal::{colors, print};
use crate::tprint;

pub fn run(selection: Selection, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let runs: Vec<ChapterRun> = tour::perform_tour(&selection, cfg)?;

    print::banner(cfg);

    print_runs(&runs, cfg);
    print_summary(runs.len(), start_time.elapsed(), cfg);
    Ok(())
}

fn print_runs(runs: &[ChapterRun], cfg: &Config) {
    for (idx, run) in runs.iter().enumerate() {
        debug!(chapter = run.chapter.slug, "took {}", print::elapsed(run.elapsed));
        if run.transcript.is_empty() {
            warn!("chapter {} said nothing", run.chapter.slug);
        }

        if !cfg.shows_transcripts() {
            continue;
        }
        print::header(&format!("{}. {}", run.chapter.number, run.chapter.title), cfg);
        for line in run.transcript.lines() {
            print::transcript_line(line);
        }
        if idx + 1 != runs.len() {
            tprint!();
        }
    }
}

fn print_summary(chapters: usize, total_time: Duration, cfg: &Config) {
    let noun: &str = if chapters == 1 { "chapter" } else { "chapters" };
    let chapters: ColoredString = format!("{chapters} {noun}").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString =
        &format!("Tour Complete: {chapters} in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
        }
        _ => {
            tprint!();
            success!("{}", output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::logging::{self, capture::output_through};

    fn only(keys: &[&str]) -> Selection {
        Selection::Only(keys.iter().map(|k| k.to_string()).collect())
    }

    #[test]
    fn unknown_chapter_fails_before_any_output() {
        let cfg = Config::default();
        let (result, output) = output_through(logging::filter(&cfg, None).unwrap(), || {
            run(only(&["8", "nope"]), &cfg)
        });

        assert!(result.is_err());
        assert!(output.is_empty(), "printed before failing: {output:?}");
    }

    #[test]
    fn banner_precedes_the_transcripts() {
        let cfg = Config::default();
        let (result, output) = output_through(logging::filter(&cfg, None).unwrap(), || {
            run(only(&["8"]), &cfg)
        });

        assert!(result.is_ok());
        let banner = output.find("TOUR v").expect("banner is printed");
        let header = output.find("ENUMERATIONS").expect("chapter header is printed");
        assert!(banner < header);
    }
}
