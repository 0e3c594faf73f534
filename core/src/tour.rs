//! Plays a selection of chapters one after another.
//!
//! Each chapter runs to completion on the calling thread with its own
//! [`Context`]. The random seed of a chapter is derived from the base seed
//! and the chapter number, so replaying a single chapter with the same base
//! seed gives the same transcript as it had inside a full tour.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tour_common::config::Config;
use tour_common::{Result, TourError, Transcript};
use tracing::{debug, info_span};

use crate::chapters::{self, Chapter};
use crate::context::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    /// Chapter keys, numbers or slugs, in the order they should run.
    Only(Vec<String>),
}

impl Selection {
    pub fn from_keys(keys: Vec<String>) -> Self {
        if keys.is_empty() {
            Selection::All
        } else {
            Selection::Only(keys)
        }
    }
}

#[derive(Debug)]
pub struct ChapterRun {
    pub chapter: &'static Chapter,
    pub transcript: Transcript,
    pub elapsed: Duration,
}

/// Turns a selection into chapters, keeping the requested order and
/// dropping repeats.
pub fn resolve(selection: &Selection) -> Result<Vec<&'static Chapter>> {
    match selection {
        Selection::All => Ok(chapters::all().iter().collect()),
        Selection::Only(keys) if keys.is_empty() => Err(TourError::EmptySelection),
        Selection::Only(keys) => {
            let mut seen: HashSet<u8> = HashSet::new();
            let mut resolved: Vec<&'static Chapter> = Vec::with_capacity(keys.len());
            for key in keys {
                let chapter = chapters::find(key)?;
                if seen.insert(chapter.number) {
                    resolved.push(chapter);
                }
            }
            Ok(resolved)
        }
    }
}

/// Base seed for a run: the configured one, or a fresh random one.
pub fn base_seed(cfg: &Config) -> u64 {
    match cfg.seed {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::random();
            debug!(seed, "drew a fresh tour seed");
            seed
        }
    }
}

pub fn chapter_seed(base: u64, chapter: &Chapter) -> u64 {
    base.wrapping_add(u64::from(chapter.number))
}

/// Runs one chapter's entry operation against a fresh context.
pub fn run_chapter(chapter: &'static Chapter, base: u64) -> Result<ChapterRun> {
    let span = info_span!("chapter", number = chapter.number, slug = chapter.slug);
    let _guard = span.enter();

    debug!("starting");
    let start_time: Instant = Instant::now();
    let mut ctx = Context::new(chapter_seed(base, chapter));
    (chapter.run)(&mut ctx)?;
    let elapsed = start_time.elapsed();

    let transcript = ctx.finish();
    debug!(lines = transcript.len(), ?elapsed, "finished");

    Ok(ChapterRun {
        chapter,
        transcript,
        elapsed,
    })
}

/// Executes the selected chapters in order and collects their transcripts.
///
/// Stops at the first chapter that fails.
pub fn perform_tour(selection: &Selection, cfg: &Config) -> Result<Vec<ChapterRun>> {
    let chapters: Vec<&'static Chapter> = resolve(selection)?;
    let base: u64 = base_seed(cfg);

    chapters
        .into_iter()
        .map(|chapter| run_chapter(chapter, base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[&str]) -> Selection {
        Selection::Only(raw.iter().map(|k| k.to_string()).collect())
    }

    #[test]
    fn all_resolves_every_chapter_in_order() {
        let resolved = resolve(&Selection::All).unwrap();
        assert_eq!(resolved.len(), chapters::all().len());
        assert_eq!(resolved[0].slug, "basics");
        assert_eq!(resolved.last().unwrap().slug, "generics");
    }

    #[test]
    fn only_keeps_requested_order_and_drops_repeats() {
        let resolved = resolve(&keys(&["generics", "12", "subscripts", "1"])).unwrap();
        let numbers: Vec<u8> = resolved.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![23, 12, 1]);
    }

    #[test]
    fn unknown_key_fails_the_whole_selection() {
        let err = resolve(&keys(&["1", "nope"])).unwrap_err();
        assert_eq!(err, TourError::UnknownChapter("nope".to_string()));
    }

    #[test]
    fn empty_only_selection_is_rejected() {
        assert_eq!(
            resolve(&Selection::Only(Vec::new())).unwrap_err(),
            TourError::EmptySelection
        );
        assert_eq!(Selection::from_keys(Vec::new()), Selection::All);
    }

    #[test]
    fn configured_seed_is_used_verbatim() {
        let cfg = Config {
            seed: Some(42),
            ..Config::default()
        };
        assert_eq!(base_seed(&cfg), 42);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let chapter = chapters::find("error_handling").unwrap();
        let first = run_chapter(chapter, 7).unwrap();
        let second = run_chapter(chapter, 7).unwrap();
        assert_eq!(first.transcript, second.transcript);
    }

    #[test]
    fn perform_tour_runs_the_selection() {
        let cfg = Config {
            seed: Some(1),
            ..Config::default()
        };
        let runs = perform_tour(&keys(&["subscripts", "generics"]), &cfg).unwrap();
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|run| !run.transcript.is_empty()));
    }
}
