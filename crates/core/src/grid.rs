//! Grid module - a resizable 2D state store
//!
//! The grid covers the rectangle `[0, width) x [0, height)`. Every coordinate inside the
//! rectangle holds exactly one state; nothing outside it does. Reads outside the rectangle
//! return the caller-supplied invalid sentinel and writes outside it are ignored, so scanning
//! code can walk past the edges without special-casing them.
//!
//! Cells are stored in a flat array, row-major by width (`y * width + x`), for cache
//! locality. The public linear index (see [`GridModel::index_for`]) is a separate addressing
//! convention that uses the grid's *height* as its stride.

use std::collections::HashMap;
use std::hash::Hash;

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{coerce_dimension, GridConfig};
use crate::error::GridError;
use crate::session::Session;
use crate::types::{
    Coordinate, Direction, DirectionProfile, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    INVALID_INDEX,
};

/// A generic grid of states with sentinel-based bounds handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridModelRepr<S>")]
pub struct GridModel<S> {
    width: i32,
    height: i32,
    state_default: S,
    state_empty: S,
    state_invalid: S,
    states_possible_random: Vec<S>,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<S>,
    session: Session,
}

/// Unchecked mirror of [`GridModel`] used to validate deserialized input
#[derive(Deserialize)]
struct GridModelRepr<S> {
    width: i32,
    height: i32,
    state_default: S,
    state_empty: S,
    state_invalid: S,
    states_possible_random: Vec<S>,
    cells: Vec<S>,
    #[serde(default)]
    session: Session,
}

impl<S> TryFrom<GridModelRepr<S>> for GridModel<S> {
    type Error = GridError;

    fn try_from(repr: GridModelRepr<S>) -> Result<Self, Self::Error> {
        let width = coerce_dimension(repr.width, DEFAULT_GRID_WIDTH);
        let height = coerce_dimension(repr.height, DEFAULT_GRID_HEIGHT);
        let expected = width as usize * height as usize;
        if repr.cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                width,
                height,
                expected,
                actual: repr.cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            state_default: repr.state_default,
            state_empty: repr.state_empty,
            state_invalid: repr.state_invalid,
            states_possible_random: repr.states_possible_random,
            cells: repr.cells,
            session: repr.session,
        })
    }
}

/// Uniform draw from the random-state universe
fn draw<'a, S, R: Rng + ?Sized>(pool: &'a [S], rng: &mut R) -> Result<&'a S, GridError> {
    pool.choose(rng).ok_or(GridError::EmptyRandomStates)
}

impl<S: Clone + Eq + Hash> GridModel<S> {
    /// Create a grid where `state_empty` and the random universe both default to
    /// `state_default`
    ///
    /// # Examples
    ///
    /// ```
    /// use gridstate_core::GridModel;
    ///
    /// let mut grid = GridModel::new(8, 8, -1, i32::MIN);
    /// grid.set_state_at_index(9, 3);
    /// assert_eq!(grid.state_at_xy(1, 1), &3);
    /// assert_eq!(grid.state_at_xy(8, 0), &i32::MIN);
    /// ```
    pub fn new(width: i32, height: i32, state_default: S, state_invalid: S) -> Self {
        Self::from_config(GridConfig::new(state_default, state_invalid).with_size(width, height))
    }

    /// Create a fully populated grid from a config
    pub fn from_config(config: GridConfig<S>) -> Self {
        let width = coerce_dimension(config.width, DEFAULT_GRID_WIDTH);
        let height = coerce_dimension(config.height, DEFAULT_GRID_HEIGHT);
        let state_empty = config
            .state_empty
            .unwrap_or_else(|| config.state_default.clone());
        let states_possible_random = config
            .states_possible_random
            .unwrap_or_else(|| vec![config.state_default.clone()]);

        Self {
            width,
            height,
            cells: vec![config.state_default.clone(); width as usize * height as usize],
            state_default: config.state_default,
            state_empty,
            state_invalid: config.state_invalid,
            states_possible_random,
            session: Session::new(),
        }
    }

    // ============== Dimensions ==============

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of addressable cells (`width * height`)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Set the width, preserving overlapping state. Values below 1 reset to the default.
    pub fn set_width(&mut self, width: i32) {
        self.resize(width, self.height);
    }

    /// Set the height, preserving overlapping state. Values below 1 reset to the default.
    pub fn set_height(&mut self, height: i32) {
        self.resize(self.width, height);
    }

    /// Rebuild the cell store for a new rectangle
    ///
    /// Coordinates present in both rectangles keep their state; new coordinates receive
    /// `state_default`. Runs in time proportional to the larger of the old and new cell
    /// counts.
    pub fn resize(&mut self, width: i32, height: i32) {
        let width = coerce_dimension(width, DEFAULT_GRID_WIDTH);
        let height = coerce_dimension(height, DEFAULT_GRID_HEIGHT);
        if width == self.width && height == self.height {
            return;
        }

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let state = match self.offset(Coordinate::new(x, y)) {
                    Some(idx) => self.cells[idx].clone(),
                    None => self.state_default.clone(),
                };
                cells.push(state);
            }
        }

        self.width = width;
        self.height = height;
        self.cells = cells;
    }

    // ============== Sentinels ==============

    pub fn state_default(&self) -> &S {
        &self.state_default
    }

    pub fn state_empty(&self) -> &S {
        &self.state_empty
    }

    pub fn state_invalid(&self) -> &S {
        &self.state_invalid
    }

    pub fn states_possible_random(&self) -> &[S] {
        &self.states_possible_random
    }

    /// Affects cells created by later resizes only
    pub fn set_state_default(&mut self, state: S) {
        self.state_default = state;
    }

    pub fn set_state_empty(&mut self, state: S) {
        self.state_empty = state;
    }

    pub fn set_state_invalid(&mut self, state: S) {
        self.state_invalid = state;
    }

    /// Replace the random universe; an empty list makes random draws fail
    pub fn set_states_possible_random(&mut self, states: Vec<S>) {
        self.states_possible_random = states;
    }

    // ============== Addressing ==============

    /// Offset into the flat cell array, `None` when out of bounds
    #[inline(always)]
    fn offset(&self, c: Coordinate) -> Option<usize> {
        if !self.is_valid_coordinate(c) {
            return None;
        }
        Some(c.y as usize * self.width as usize + c.x as usize)
    }

    /// True iff `0 <= x < width` and `0 <= y < height`
    pub fn is_valid_coordinate(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    pub fn is_valid_xy(&self, x: i32, y: i32) -> bool {
        self.is_valid_coordinate(Coordinate::new(x, y))
    }

    /// Linear index of a coordinate, [`INVALID_INDEX`] when out of bounds
    ///
    /// The stride is the grid's **height**: `index = y * height + x`. Encoding and
    /// [`coordinate_for`](Self::coordinate_for) decoding agree, so the mapping is a bijection
    /// on square grids. On non-square grids distinct coordinates can share an index.
    ///
    /// The product is computed in `i64`; a result that does not fit in `i32` (tall grids
    /// with more than about 46k rows) is also reported as [`INVALID_INDEX`].
    pub fn index_for(&self, c: Coordinate) -> i32 {
        if !self.is_valid_coordinate(c) {
            return INVALID_INDEX;
        }
        let index = i64::from(c.y) * i64::from(self.height) + i64::from(c.x);
        i32::try_from(index).unwrap_or(INVALID_INDEX)
    }

    /// Coordinate for a linear index, [`Coordinate::INVALID`] when the index is negative or
    /// at least `width * height`
    ///
    /// Decodes with the height stride: `x = index % height`, `y = index / height`.
    pub fn coordinate_for(&self, index: i32) -> Coordinate {
        if index < 0 || index as usize >= self.cell_count() {
            return Coordinate::INVALID;
        }
        Coordinate::new(index % self.height, index / self.height)
    }

    /// Every addressable coordinate, row by row
    pub fn all_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }

    // ============== Reads ==============

    /// State at a coordinate, `state_invalid` when out of bounds
    pub fn state_at(&self, c: Coordinate) -> &S {
        match self.offset(c) {
            Some(idx) => &self.cells[idx],
            None => &self.state_invalid,
        }
    }

    pub fn state_at_xy(&self, x: i32, y: i32) -> &S {
        self.state_at(Coordinate::new(x, y))
    }

    pub fn state_at_index(&self, index: i32) -> &S {
        self.state_at(self.coordinate_for(index))
    }

    /// True iff the cell exists and holds `state_empty`
    pub fn is_empty_at(&self, c: Coordinate) -> bool {
        self.offset(c)
            .map_or(false, |idx| self.cells[idx] == self.state_empty)
    }

    pub fn is_empty_at_xy(&self, x: i32, y: i32) -> bool {
        self.is_empty_at(Coordinate::new(x, y))
    }

    pub fn is_empty_at_index(&self, index: i32) -> bool {
        self.is_empty_at(self.coordinate_for(index))
    }

    /// True iff the cell exists and does not hold `state_invalid`
    pub fn is_valid_at(&self, c: Coordinate) -> bool {
        self.offset(c)
            .map_or(false, |idx| self.cells[idx] != self.state_invalid)
    }

    pub fn is_valid_at_xy(&self, x: i32, y: i32) -> bool {
        self.is_valid_at(Coordinate::new(x, y))
    }

    pub fn is_valid_at_index(&self, index: i32) -> bool {
        self.is_valid_at(self.coordinate_for(index))
    }

    /// Every cell with its coordinate, row by row
    pub fn states(&self) -> impl Iterator<Item = (Coordinate, &S)> + '_ {
        self.all_coordinates().zip(self.cells.iter())
    }

    /// Number of cells holding `state`
    pub fn count_of(&self, state: &S) -> usize {
        self.cells.iter().filter(|s| *s == state).count()
    }

    /// Number of cells per distinct state
    pub fn state_histogram(&self) -> HashMap<S, usize> {
        let mut counts = HashMap::new();
        for state in &self.cells {
            *counts.entry(state.clone()).or_insert(0) += 1;
        }
        counts
    }

    // ============== Writes ==============

    /// Set a cell; ignored when out of bounds
    pub fn set_state(&mut self, c: Coordinate, state: S) {
        if let Some(idx) = self.offset(c) {
            self.cells[idx] = state;
        }
    }

    pub fn set_state_xy(&mut self, x: i32, y: i32, state: S) {
        self.set_state(Coordinate::new(x, y), state);
    }

    pub fn set_state_at_index(&mut self, index: i32, state: S) {
        self.set_state(self.coordinate_for(index), state);
    }

    /// Set every listed coordinate; out-of-bounds members are ignored
    ///
    /// This is how a tetromino is stamped onto a grid:
    ///
    /// ```
    /// use gridstate_core::{GridModel, TetrominoGeometry};
    /// use gridstate_core::types::{Coordinate, Shape};
    ///
    /// let mut grid = GridModel::new(10, 10, 0, -1);
    /// let piece = TetrominoGeometry::new(Shape::O).translated(Coordinate::new(3, 0));
    /// grid.set_states_at(piece.cells().iter().copied(), 7);
    /// assert_eq!(grid.count_of(&7), 4);
    /// ```
    pub fn set_states_at<I>(&mut self, coordinates: I, state: S)
    where
        I: IntoIterator<Item = Coordinate>,
    {
        for c in coordinates {
            self.set_state(c, state.clone());
        }
    }

    /// True iff every coordinate is in bounds and empty
    pub fn can_place<I>(&self, coordinates: I) -> bool
    where
        I: IntoIterator<Item = Coordinate>,
    {
        coordinates.into_iter().all(|c| self.is_empty_at(c))
    }

    /// Overwrite every cell
    pub fn set_all_states(&mut self, state: S) {
        for cell in &mut self.cells {
            *cell = state.clone();
        }
    }

    /// Set every cell to `state_empty`
    pub fn clear(&mut self) {
        let empty = self.state_empty.clone();
        self.set_all_states(empty);
    }

    // ============== Randomization ==============

    /// Assign every cell a uniform draw from the random universe (thread-local generator)
    pub fn randomize_states(&mut self) -> Result<(), GridError> {
        self.randomize_states_with(&mut rand::thread_rng())
    }

    /// Assign every cell a uniform draw from the random universe
    pub fn randomize_states_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GridError> {
        for cell in &mut self.cells {
            *cell = draw(&self.states_possible_random, rng)?.clone();
        }
        Ok(())
    }

    /// Randomize one cell (thread-local generator)
    ///
    /// An empty universe fails even when `c` is out of bounds.
    pub fn randomize_state(&mut self, c: Coordinate) -> Result<(), GridError> {
        self.randomize_state_with(c, &mut rand::thread_rng())
    }

    pub fn randomize_state_with<R: Rng + ?Sized>(
        &mut self,
        c: Coordinate,
        rng: &mut R,
    ) -> Result<(), GridError> {
        let state = draw(&self.states_possible_random, rng)?.clone();
        self.set_state(c, state);
        Ok(())
    }

    pub fn randomize_state_xy(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        self.randomize_state(Coordinate::new(x, y))
    }

    pub fn randomize_state_at_index(&mut self, index: i32) -> Result<(), GridError> {
        self.randomize_state(self.coordinate_for(index))
    }

    // ============== Neighbors ==============

    /// Coordinate one step from `from` in `direction`, `None` past the `i32` range
    ///
    /// Direction offsets are authored with +y up; pass `positive_y_is_down = true` when
    /// row 0 is the top of the grid.
    pub fn neighbor_coordinate(
        &self,
        from: Coordinate,
        direction: Direction,
        positive_y_is_down: bool,
    ) -> Option<Coordinate> {
        let offset = if positive_y_is_down {
            direction.offset().reversing_y()
        } else {
            direction.offset()
        };
        from.checked_add(offset)
    }

    /// State of the neighbor in `direction`, `state_invalid` when it is out of bounds
    pub fn state_in_direction(
        &self,
        direction: Direction,
        from: Coordinate,
        positive_y_is_down: bool,
    ) -> &S {
        match self.neighbor_coordinate(from, direction, positive_y_is_down) {
            Some(c) => self.state_at(c),
            None => &self.state_invalid,
        }
    }

    /// In-bounds neighbors of `from` for the given profile, in profile order
    pub fn neighbor_states(
        &self,
        from: Coordinate,
        profile: DirectionProfile,
        positive_y_is_down: bool,
    ) -> ArrayVec<(Direction, S), 8> {
        profile
            .directions()
            .iter()
            .filter_map(|&direction| {
                let c = self.neighbor_coordinate(from, direction, positive_y_is_down)?;
                self.offset(c)
                    .map(|idx| (direction, self.cells[idx].clone()))
            })
            .collect()
    }

    // ============== Session ==============

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn is_paused(&self) -> bool {
        self.session.is_paused()
    }

    pub fn set_over(&mut self, over: bool) {
        self.session.set_over(over);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.session.set_paused(paused);
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.session.toggle_pause()
    }

    /// Advance session time; ignored while paused or over
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.session.tick(elapsed_ms)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.session.elapsed_ms()
    }

    /// Reset the session and fill every cell with `state_default`
    pub fn restart(&mut self) {
        self.session.reset();
        let default = self.state_default.clone();
        self.set_all_states(default);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_storage_offset_is_width_stride() {
        let grid = GridModel::new(5, 3, 0u8, 255);
        assert_eq!(grid.offset(Coordinate::new(0, 0)), Some(0));
        assert_eq!(grid.offset(Coordinate::new(4, 0)), Some(4));
        assert_eq!(grid.offset(Coordinate::new(0, 1)), Some(5));
        assert_eq!(grid.offset(Coordinate::new(4, 2)), Some(14));
        assert_eq!(grid.offset(Coordinate::new(5, 0)), None);
        assert_eq!(grid.offset(Coordinate::new(0, 3)), None);
        assert_eq!(grid.offset(Coordinate::new(-1, 0)), None);
    }

    #[test]
    fn test_cell_buffer_tracks_rectangle() {
        let mut grid = GridModel::new(8, 8, 'x', '!');
        assert_eq!(grid.cells.len(), 64);
        grid.resize(40, 4);
        assert_eq!(grid.cells.len(), 160);
        grid.set_height(0);
        assert_eq!(grid.height(), DEFAULT_GRID_HEIGHT);
        assert_eq!(grid.cells.len(), 40 * 8);
    }

    #[test]
    fn test_neighbors_at_i32_edge_resolve_to_invalid() {
        let grid = GridModel::new(8, 8, 0u8, 255);
        let edge = Coordinate::new(i32::MAX, 0);
        assert_eq!(grid.neighbor_coordinate(edge, Direction::East, true), None);
        assert_eq!(grid.state_in_direction(Direction::East, edge, true), &255);
        assert_eq!(
            grid.state_in_direction(Direction::South, Coordinate::new(0, i32::MAX), true),
            &255
        );
        assert_eq!(
            grid.state_in_direction(Direction::South, Coordinate::new(0, i32::MIN), false),
            &255
        );
        assert!(grid
            .neighbor_states(edge, DirectionProfile::EightWay, true)
            .is_empty());
    }

    #[test]
    fn test_index_beyond_i32_range_is_invalid() {
        let grid = GridModel::new(1, 50_000, 0u8, 255);
        assert_eq!(grid.index_for(Coordinate::new(0, 0)), 0);
        assert_eq!(grid.index_for(Coordinate::new(0, 42_000)), 2_100_000_000);
        assert_eq!(grid.index_for(Coordinate::new(0, 49_999)), INVALID_INDEX);
        assert_eq!(grid.coordinate_for(49_999), Coordinate::new(49_999, 0));
    }

    #[test]
    fn test_random_draw_fails_on_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: [u8; 0] = [];
        assert_eq!(draw(&empty, &mut rng), Err(GridError::EmptyRandomStates));
        assert_eq!(draw(&[9u8], &mut rng), Ok(&9));
    }

    #[test]
    fn test_deserialize_rejects_short_cell_buffer() {
        let json = r#"{
            "width": 2, "height": 2,
            "state_default": 0, "state_empty": 0, "state_invalid": -1,
            "states_possible_random": [0],
            "cells": [0, 0, 0]
        }"#;
        let err = serde_json::from_str::<GridModel<i32>>(json).unwrap_err();
        assert!(err.to_string().contains("needs 4"), "{err}");
    }
}
