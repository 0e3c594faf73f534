//! The chapter **registry**.
//!
//! Every topic lives in its own submodule and exposes one entry operation,
//! `run(&mut Context)`. The registry fixes the order in which a full tour
//! plays them and maps user-facing keys (a number or a slug) to chapters.

use tour_common::{Result, TourError};

use crate::context::Context;

pub mod basic_operators;
pub mod basics;
pub mod closures;
pub mod collections;
pub mod control_flow;
pub mod deinitialization;
pub mod enumerations;
pub mod error_handling;
pub mod extensions;
pub mod functions;
pub mod generics;
pub mod inheritance;
pub mod initialization;
pub mod methods;
pub mod nested_types;
pub mod optional_chaining;
pub mod properties;
pub mod protocols;
pub mod reference_counting;
pub mod strings;
pub mod structs_and_classes;
pub mod subscripts;
pub mod type_casting;

pub type EntryOperation = fn(&mut Context) -> Result<()>;

#[derive(Clone, Copy)]
pub struct Chapter {
    pub number: u8,
    pub slug: &'static str,
    pub title: &'static str,
    pub run: EntryOperation,
}

impl std::fmt::Debug for Chapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chapter")
            .field("number", &self.number)
            .field("slug", &self.slug)
            .finish()
    }
}

impl PartialEq for Chapter {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

macro_rules! chapter {
    ($number:expr, $module:ident, $title:expr) => {
        Chapter {
            number: $number,
            slug: stringify!($module),
            title: $title,
            run: $module::run,
        }
    };
}

static CHAPTERS: &[Chapter] = &[
    chapter!(1, basics, "The Basics"),
    chapter!(2, basic_operators, "Basic Operators"),
    chapter!(3, strings, "Strings and Characters"),
    chapter!(4, collections, "Collection Types"),
    chapter!(5, control_flow, "Control Flow"),
    chapter!(6, functions, "Functions"),
    chapter!(7, closures, "Closures"),
    chapter!(8, enumerations, "Enumerations"),
    chapter!(9, structs_and_classes, "Structures and Shared References"),
    chapter!(10, properties, "Properties"),
    chapter!(11, methods, "Methods"),
    chapter!(12, subscripts, "Subscripts"),
    chapter!(13, inheritance, "Inheritance"),
    chapter!(14, initialization, "Initialization"),
    chapter!(15, deinitialization, "Deinitialization"),
    chapter!(16, reference_counting, "Reference Counting"),
    chapter!(17, optional_chaining, "Optional Chaining"),
    chapter!(18, error_handling, "Error Handling"),
    chapter!(19, type_casting, "Type Casting"),
    chapter!(20, nested_types, "Nested Types"),
    chapter!(21, extensions, "Extensions"),
    chapter!(22, protocols, "Protocols"),
    chapter!(23, generics, "Generics"),
];

/// All chapters in tour order.
pub fn all() -> &'static [Chapter] {
    CHAPTERS
}

/// Looks a chapter up by number (`"12"`) or slug (`"subscripts"`).
///
/// Slugs are matched case-insensitively and accept `-` in place of `_`.
pub fn find(key: &str) -> Result<&'static Chapter> {
    let key = key.trim();

    if let Ok(number) = key.parse::<u8>() {
        return CHAPTERS
            .iter()
            .find(|chapter| chapter.number == number)
            .ok_or_else(|| TourError::UnknownChapter(key.to_string()));
    }

    let normalized = key.to_ascii_lowercase().replace('-', "_");
    CHAPTERS
        .iter()
        .find(|chapter| chapter.slug == normalized)
        .ok_or_else(|| TourError::UnknownChapter(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapters_are_numbered_in_order() {
        for (idx, chapter) in all().iter().enumerate() {
            assert_eq!(chapter.number as usize, idx + 1, "{chapter:?}");
        }
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<&str> = all().iter().map(|c| c.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), all().len());
    }

    #[test]
    fn find_by_number_and_slug() {
        assert_eq!(find("12").map(|c| c.slug), Ok("subscripts"));
        assert_eq!(find("Generics").map(|c| c.number), Ok(23));
        assert_eq!(find("optional-chaining").map(|c| c.number), Ok(17));
        assert_eq!(find(" 1 ").map(|c| c.slug), Ok("basics"));
    }

    #[test]
    fn find_rejects_unknown_keys() {
        assert_eq!(
            find("24"),
            Err(TourError::UnknownChapter("24".to_string()))
        );
        assert!(matches!(find("0"), Err(TourError::UnknownChapter(_))));
        assert!(matches!(find("monads"), Err(TourError::UnknownChapter(_))));
    }
}
