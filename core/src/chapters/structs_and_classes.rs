//! Value types are copied on assignment; shared references alias one value.
//!
//! `Resolution` is `Copy`, so every binding owns its own pixels. `VideoMode`
//! lives behind `Rc<RefCell<_>>`, so cloning the handle shares the mode.

use std::cell::RefCell;
use std::rc::Rc;

use tour_common::{Result, say};

use crate::context::Context;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoMode {
    pub resolution: Resolution,
    pub interlaced: bool,
    pub frame_rate: f64,
    pub name: Option<String>,
}

pub type SharedVideoMode = Rc<RefCell<VideoMode>>;

pub fn run(ctx: &mut Context) -> Result<()> {
    let some_resolution = Resolution::default();
    let some_video_mode = VideoMode::default();
    say!(ctx, "The width of some_resolution is {}", some_resolution.width);
    say!(
        ctx,
        "The width of some_video_mode is {}",
        some_video_mode.resolution.width
    );

    let hd = Resolution {
        width: 1920,
        height: 1080,
    };
    let mut cinema = hd;
    cinema.width = 2048;
    say!(ctx, "cinema is now {} pixels wide", cinema.width);
    say!(ctx, "hd is still {} pixels wide", hd.width);

    let ten_eighty: SharedVideoMode = Rc::new(RefCell::new(VideoMode {
        resolution: hd,
        interlaced: true,
        name: Some("1080i".to_string()),
        frame_rate: 25.0,
    }));
    let also_ten_eighty = Rc::clone(&ten_eighty);
    also_ten_eighty.borrow_mut().frame_rate = 30.0;
    say!(
        ctx,
        "The frame_rate of also_ten_eighty is now {:.1}",
        also_ten_eighty.borrow().frame_rate
    );
    say!(
        ctx,
        "The frame_rate of ten_eighty is now {:.1}",
        ten_eighty.borrow().frame_rate
    );

    if Rc::ptr_eq(&ten_eighty, &also_ten_eighty) {
        say!(ctx, "ten_eighty and also_ten_eighty refer to the same VideoMode instance.");
    }

    let copy_of_mode: VideoMode = ten_eighty.borrow().clone();
    let copied = Rc::new(RefCell::new(copy_of_mode));
    say!(
        ctx,
        "a deep copy is equal: {}, identical: {}",
        *copied.borrow() == *ten_eighty.borrow(),
        Rc::ptr_eq(&copied, &ten_eighty)
    );

    Ok(())
}
