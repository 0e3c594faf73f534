//! Stored, lazy, computed, and observed properties, plus type-level values.

use std::cell::OnceCell;
use std::fmt;

use tour_common::{Result, say};

use crate::context::Context;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLengthRange {
    pub first_value: i32,
    length: i32,
}

impl FixedLengthRange {
    pub fn new(first_value: i32, length: i32) -> Self {
        Self {
            first_value,
            length,
        }
    }

    /// `length` is fixed once the range exists; only `first_value` moves.
    pub fn length(&self) -> i32 {
        self.length
    }
}

#[derive(Debug)]
pub struct DataImporter {
    pub file_name: String,
}

impl DataImporter {
    fn new() -> Self {
        Self {
            file_name: "data.txt".to_string(),
        }
    }
}

/// The importer is expensive, so it is built on first access only.
#[derive(Debug, Default)]
pub struct DataManager {
    importer: OnceCell<DataImporter>,
    pub data: Vec<String>,
}

impl DataManager {
    pub fn importer(&self) -> &DataImporter {
        self.importer.get_or_init(DataImporter::new)
    }

    pub fn importer_created(&self) -> bool {
        self.importer.get().is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }

    /// Moves the origin so that the rectangle is centred on `center`.
    pub fn set_center(&mut self, center: Point) {
        self.origin.x = center.x - self.size.width / 2.0;
        self.origin.y = center.y - self.size.height / 2.0;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cuboid {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Cuboid {
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    WillSet(u32),
    Added(u32),
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepEvent::WillSet(new_total) => write!(f, "About to set total_steps to {new_total}"),
            StepEvent::Added(steps) => write!(f, "Added {steps} steps"),
        }
    }
}

/// A counter whose setter reports before and after every write.
#[derive(Debug, Default)]
pub struct StepCounter {
    total_steps: u32,
}

impl StepCounter {
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn set_total_steps(&mut self, new_total: u32) -> Vec<StepEvent> {
        let mut events = vec![StepEvent::WillSet(new_total)];
        let old_value = std::mem::replace(&mut self.total_steps, new_total);
        if self.total_steps > old_value {
            events.push(StepEvent::Added(self.total_steps - old_value));
        }
        events
    }
}

pub struct SomeStructure;

impl SomeStructure {
    pub const STORED_TYPE_PROPERTY: &'static str = "Some value.";

    pub fn computed_type_property() -> i32 {
        1
    }
}

pub enum SomeEnumeration {}

impl SomeEnumeration {
    pub const STORED_TYPE_PROPERTY: &'static str = "Some value.";

    pub fn computed_type_property() -> i32 {
        6
    }
}

/// Audio channels share one ceiling, owned by the mixer rather than a global.
#[derive(Debug, Default)]
pub struct Mixer {
    max_input_level: u32,
    channels: Vec<u32>,
}

impl Mixer {
    pub const THRESHOLD_LEVEL: u32 = 10;

    pub fn add_channel(&mut self) -> usize {
        self.channels.push(0);
        self.channels.len() - 1
    }

    pub fn set_level(&mut self, channel: usize, level: u32) {
        let level = level.min(Self::THRESHOLD_LEVEL);
        if let Some(slot) = self.channels.get_mut(channel) {
            *slot = level;
            self.max_input_level = self.max_input_level.max(level);
        }
    }

    pub fn level(&self, channel: usize) -> Option<u32> {
        self.channels.get(channel).copied()
    }

    pub fn max_input_level(&self) -> u32 {
        self.max_input_level
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let mut range_of_three = FixedLengthRange::new(0, 3);
    range_of_three.first_value = 6;
    say!(
        ctx,
        "range starts at {} and spans {} items",
        range_of_three.first_value,
        range_of_three.length()
    );

    let mut manager = DataManager::default();
    manager.data.push("Some data".to_string());
    manager.data.push("Some more data".to_string());
    say!(ctx, "importer created before access: {}", manager.importer_created());
    say!(ctx, "{}", manager.importer().file_name);
    say!(ctx, "importer created after access: {}", manager.importer_created());

    let mut square = Rect {
        origin: Point { x: 0.0, y: 0.0 },
        size: Size {
            width: 10.0,
            height: 10.0,
        },
    };
    let center = square.center();
    say!(ctx, "square.center is at ({:.1}, {:.1})", center.x, center.y);
    square.set_center(Point { x: 15.0, y: 15.0 });
    say!(
        ctx,
        "square.origin is now at ({:.1}, {:.1})",
        square.origin.x,
        square.origin.y
    );

    let four_by_five_by_two = Cuboid {
        width: 4.0,
        height: 5.0,
        depth: 2.0,
    };
    say!(ctx, "the volume of four_by_five_by_two is {:.1}", four_by_five_by_two.volume());

    let mut step_counter = StepCounter::default();
    for total in [200, 360, 896, 896] {
        for event in step_counter.set_total_steps(total) {
            say!(ctx, "{event}");
        }
    }

    say!(ctx, "{}", SomeStructure::STORED_TYPE_PROPERTY);
    say!(ctx, "{}", SomeEnumeration::STORED_TYPE_PROPERTY);
    say!(ctx, "{}", SomeStructure::computed_type_property());
    say!(ctx, "{}", SomeEnumeration::computed_type_property());

    let mut mixer = Mixer::default();
    let left = mixer.add_channel();
    let right = mixer.add_channel();
    mixer.set_level(left, 7);
    say!(ctx, "left = {:?}, max = {}", mixer.level(left), mixer.max_input_level());
    mixer.set_level(right, 11);
    say!(ctx, "right = {:?}, max = {}", mixer.level(right), mixer.max_input_level());

    Ok(())
}
