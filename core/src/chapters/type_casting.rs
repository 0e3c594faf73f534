//! Checking and recovering concrete types behind trait objects and `Any`.

use std::any::Any;

use tour_common::{Result, say};

use crate::context::Context;

pub trait Media: Any {
    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub name: String,
    pub director: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub name: String,
    pub artist: String,
}

impl Movie {
    pub fn new(name: &str, director: &str) -> Self {
        Self {
            name: name.to_string(),
            director: director.to_string(),
        }
    }
}

impl Song {
    pub fn new(name: &str, artist: &str) -> Self {
        Self {
            name: name.to_string(),
            artist: artist.to_string(),
        }
    }
}

impl Media for Movie {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Media for Song {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn library() -> Vec<Box<dyn Media>> {
    vec![
        Box::new(Movie::new("Casablanca", "Michael Curtiz")),
        Box::new(Song::new("Blue Suede Shoes", "Elvis Presley")),
        Box::new(Movie::new("Citizen Kane", "Orson Welles")),
        Box::new(Song::new("The One And Only", "Chesney Hawkes")),
        Box::new(Song::new("Never Gonna Give You Up", "Rick Astley")),
    ]
}

/// Number of movies and songs in `library`.
pub fn count_by_kind(library: &[Box<dyn Media>]) -> (usize, usize) {
    library.iter().fold((0, 0), |(movies, songs), item| {
        if item.as_any().is::<Movie>() {
            (movies + 1, songs)
        } else if item.as_any().is::<Song>() {
            (movies, songs + 1)
        } else {
            (movies, songs)
        }
    })
}

pub fn describe_media(item: &dyn Media) -> String {
    if let Some(movie) = item.as_any().downcast_ref::<Movie>() {
        format!("Movie: {}, dir. {}", movie.name, movie.director)
    } else if let Some(song) = item.as_any().downcast_ref::<Song>() {
        format!("Song: {}, by {}", song.name, song.artist)
    } else {
        format!("Something called {}", item.name())
    }
}

type Greeter = Box<dyn Fn(&str) -> String>;

/// Matches on the concrete type first, then on the value.
pub fn describe_thing(thing: &dyn Any) -> String {
    if let Some(&int) = thing.downcast_ref::<i64>() {
        return match int {
            0 => "zero as an i64".to_string(),
            n => format!("an integer value of {n}"),
        };
    }
    if let Some(&double) = thing.downcast_ref::<f64>() {
        return match double {
            d if d == 0.0 => "zero as an f64".to_string(),
            d if d > 0.0 => format!("a positive f64 value of {d}"),
            _ => "some other f64 value that I don't want to print".to_string(),
        };
    }
    if let Some(text) = thing.downcast_ref::<String>() {
        return format!("a string value of \"{text}\"");
    }
    if let Some((x, y)) = thing.downcast_ref::<(f64, f64)>() {
        return format!("an (x, y) point at {x}, {y}");
    }
    if let Some(movie) = thing.downcast_ref::<Movie>() {
        return format!("a movie called {}, dir. {}", movie.name, movie.director);
    }
    if let Some(greet) = thing.downcast_ref::<Greeter>() {
        return greet("Michael");
    }
    "something else".to_string()
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let library = library();
    let (movies, songs) = count_by_kind(&library);
    say!(ctx, "Media library contains {movies} movies and {songs} songs");

    for item in &library {
        say!(ctx, "{}", describe_media(&**item));
    }

    let greeter: Greeter = Box::new(|name| format!("Hello, {name}"));
    let things: Vec<Box<dyn Any>> = vec![
        Box::new(0_i64),
        Box::new(0.0_f64),
        Box::new(42_i64),
        Box::new(3.25_f64),
        Box::new(-0.25_f64),
        Box::new("hello".to_string()),
        Box::new((3.0_f64, 5.0_f64)),
        Box::new(Movie::new("Ghostbusters", "Ivan Reitman")),
        Box::new(greeter),
        Box::new('?'),
    ];
    for thing in &things {
        say!(ctx, "{}", describe_thing(&**thing));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_library_by_type() {
        assert_eq!(count_by_kind(&library()), (2, 3));
    }

    #[test]
    fn downcasts_media() {
        let movie = Movie::new("Casablanca", "Michael Curtiz");
        assert_eq!(describe_media(&movie), "Movie: Casablanca, dir. Michael Curtiz");
        let song = Song::new("Blue Suede Shoes", "Elvis Presley");
        assert_eq!(describe_media(&song), "Song: Blue Suede Shoes, by Elvis Presley");
    }

    #[test]
    fn any_values_match_by_type_and_guard() {
        assert_eq!(describe_thing(&0_i64), "zero as an i64");
        assert_eq!(describe_thing(&0.0_f64), "zero as an f64");
        assert_eq!(describe_thing(&3.5_f64), "a positive f64 value of 3.5");
        assert_eq!(
            describe_thing(&-1.0_f64),
            "some other f64 value that I don't want to print"
        );
        assert_eq!(describe_thing(&(3.0_f64, 5.0_f64)), "an (x, y) point at 3, 5");
        assert_eq!(describe_thing(&7_u8), "something else");

        let greeter: Greeter = Box::new(|name| format!("Hello, {name}"));
        assert_eq!(describe_thing(&greeter), "Hello, Michael");
    }
}
