use colored::*;
use tour_common::config::Config;
use tour_core::chapters;

use crate::terminal::print;

pub fn list(cfg: &Config) {
    print::banner(cfg);
    print::header("chapters", cfg);

    for chapter in chapters::all() {
        if cfg.quiet > 0 {
            print::print(chapter.slug);
            continue;
        }
        print::tree_head(usize::from(chapter.number), chapter.title);
        print::as_tree_one_level(vec![("Key".to_string(), chapter.slug.normal())]);
    }
}
