//! Indexing with `Index`/`IndexMut`, including a two-dimensional matrix.

use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use tour_common::{Result, say};

use crate::context::Context;

/// A fixed-size grid stored row by row in one flat vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    grid: Vec<f64>,
}

impl Matrix {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            grid: vec![0.0; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn index_is_valid(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Checked read; `None` outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.index_is_valid(row, column)
            .then(|| self.grid[self.offset(row, column)])
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(self.index_is_valid(row, column), "Index out of range");
        &self.grid[self.offset(row, column)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f64 {
        assert!(self.index_is_valid(row, column), "Index out of range");
        let offset = self.offset(row, column);
        &mut self.grid[offset]
    }
}

/// Read-only lookup; the value is computed, so it is a method rather than
/// an `Index` impl, which must hand out a reference.
#[derive(Debug, Clone, Copy)]
pub struct TimesTable {
    pub multiplier: u32,
}

impl TimesTable {
    pub fn at(&self, index: u32) -> u32 {
        self.multiplier * index
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let three_times_table = TimesTable { multiplier: 3 };
    say!(ctx, "six times three is {}", three_times_table.at(6));

    let mut number_of_legs = BTreeMap::from([("spider", 8), ("ant", 6), ("cat", 4)]);
    number_of_legs.insert("bird", 2);
    say!(ctx, "a bird has {} legs", number_of_legs["bird"]);

    let mut matrix = Matrix::new(4, 4);
    matrix[(3, 3)] = 10.0;
    matrix[(0, 0)] = 1.0;
    say!(
        ctx,
        "0.0 = {:.1}, 3.3 = {:.1}, 1.2 = {:.1}",
        matrix[(0, 0)],
        matrix[(3, 3)],
        matrix[(1, 2)]
    );

    for row in 0..matrix.rows() {
        let cells: Vec<String> = (0..matrix.columns())
            .map(|column| format!("{:>4.1}", matrix[(row, column)]))
            .collect();
        say!(ctx, "[{}]", cells.join(" "));
    }

    match matrix.get(4, 0) {
        Some(value) => say!(ctx, "matrix[4, 0] = {value}"),
        None => say!(ctx, "matrix[4, 0] is out of range"),
    }

    Ok(())
}
