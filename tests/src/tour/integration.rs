#![cfg(test)]
use tour_common::config::Config;
use tour_common::TourError;
use tour_core::chapters;
use tour_core::tour::{self, ChapterRun, Selection};

fn seeded(seed: u64) -> Config {
    Config {
        no_banner: true,
        seed: Some(seed),
        ..Config::default()
    }
}

fn keys(raw: &[&str]) -> Selection {
    Selection::Only(raw.iter().map(|key| key.to_string()).collect())
}

/// A full tour plays every registered chapter, in registry order, and each
/// one has something to say.
#[test]
fn full_tour_runs_every_chapter() -> anyhow::Result<()> {
    let runs: Vec<ChapterRun> = tour::perform_tour(&Selection::All, &seeded(2024))?;

    assert_eq!(runs.len(), 23);
    let numbers: Vec<u8> = runs.iter().map(|run| run.chapter.number).collect();
    let expected: Vec<u8> = (1..=23).collect();
    assert_eq!(numbers, expected);

    for run in &runs {
        assert!(
            !run.transcript.is_empty(),
            "chapter {} produced an empty transcript",
            run.chapter.slug
        );
    }
    Ok(())
}

/// Named chapters run in the order given, repeats collapse.
#[test]
fn selection_keeps_order() -> anyhow::Result<()> {
    let runs = tour::perform_tour(&keys(&["generics", "12", "GENERICS", "optional-chaining"]), &seeded(1))?;
    let slugs: Vec<&str> = runs.iter().map(|run| run.chapter.slug).collect();
    assert_eq!(slugs, vec!["generics", "subscripts", "optional_chaining"]);
    Ok(())
}

/// An unknown key stops the tour before any chapter runs.
#[test]
fn unknown_chapter_is_an_error() {
    let result = tour::perform_tour(&keys(&["1", "closures", "24"]), &seeded(1));
    match result {
        Err(TourError::UnknownChapter(key)) => assert_eq!(key, "24"),
        other => panic!("expected an unknown chapter error, got {other:?}"),
    }
}

/// The same base seed replays the same transcript, even when the chapter is
/// run on its own instead of inside a full tour.
#[test]
fn seeded_chapter_replays_identically() -> anyhow::Result<()> {
    let full = tour::perform_tour(&Selection::All, &seeded(77))?;
    let alone = tour::perform_tour(&keys(&["error_handling"]), &seeded(77))?;

    let from_full = full
        .iter()
        .find(|run| run.chapter.slug == "error_handling")
        .expect("error_handling is part of the full tour");
    assert_eq!(from_full.transcript, alone[0].transcript);
    Ok(())
}

/// Every key `list` shows, and every chapter number, selects exactly that
/// chapter for `run`.
#[test]
fn listed_keys_select_their_chapter() -> anyhow::Result<()> {
    for chapter in chapters::all() {
        let by_number = chapter.number.to_string();
        let dashed = chapter.slug.replace('_', "-").to_uppercase();

        for key in [chapter.slug, by_number.as_str(), dashed.as_str()] {
            let resolved = tour::resolve(&keys(&[key]))?;
            assert_eq!(resolved.len(), 1, "key {key:?}");
            assert_eq!(resolved[0].slug, chapter.slug, "key {key:?}");
        }
    }
    Ok(())
}
