//! Grid construction parameters
//!
//! [`GridConfig`] carries every construction parameter of a [`GridModel`](crate::GridModel).
//! Optional fields fall back to `state_default`, so a serialized config only needs the
//! two mandatory sentinels:
//!
//! ```
//! use gridstate_core::{GridConfig, GridModel};
//!
//! let config: GridConfig<i32> =
//!     serde_json::from_str(r#"{"state_default": 0, "state_invalid": -1}"#).unwrap();
//! let grid = GridModel::from_config(config);
//! assert_eq!((grid.width(), grid.height()), (8, 8));
//! assert_eq!(grid.state_empty(), &0);
//! assert_eq!(grid.states_possible_random(), &[0]);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig<S> {
    /// Values below 1 become [`DEFAULT_GRID_WIDTH`]
    #[serde(default = "default_width")]
    pub width: i32,
    /// Values below 1 become [`DEFAULT_GRID_HEIGHT`]
    #[serde(default = "default_height")]
    pub height: i32,
    /// Assigned to every newly created cell
    pub state_default: S,
    /// Defaults to `state_default`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_empty: Option<S>,
    /// Returned for out-of-bounds reads
    pub state_invalid: S,
    /// Defaults to `[state_default]`. An explicitly empty list is accepted here and
    /// rejected at the first random draw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states_possible_random: Option<Vec<S>>,
}

fn default_width() -> i32 {
    DEFAULT_GRID_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_GRID_HEIGHT
}

impl<S> GridConfig<S> {
    pub fn new(state_default: S, state_invalid: S) -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            state_default,
            state_empty: None,
            state_invalid,
            states_possible_random: None,
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_state_empty(mut self, state_empty: S) -> Self {
        self.state_empty = Some(state_empty);
        self
    }

    pub fn with_states_possible_random(mut self, states: Vec<S>) -> Self {
        self.states_possible_random = Some(states);
        self
    }
}

/// Coerce a requested dimension: anything below 1 resets to `default`
pub(crate) fn coerce_dimension(value: i32, default: i32) -> i32 {
    if value < 1 {
        default
    } else {
        value
    }
}
