//! Input record types.
//!
//! Field names follow the column headers of the record files
//! (`shortName`, `longName`, `x1`, …), so the types deserialize straight
//! from a TSV row.

use serde::{Deserialize, Serialize};

use cp_core::Point;

/// A named building at a map coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "shortName")]
    pub short_name: String,
    #[serde(rename = "longName")]
    pub long_name:  String,
    pub x:          f64,
    pub y:          f64,
}

impl LocationRecord {
    pub fn new(short_name: impl Into<String>, long_name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            short_name: short_name.into(),
            long_name:  long_name.into(),
            x,
            y,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Reject records that cannot be placed on the map.
    pub fn check(&self) -> Result<(), String> {
        if self.short_name.is_empty() {
            return Err("empty short name".into());
        }
        if self.long_name.is_empty() {
            return Err(format!("empty long name for {:?}", self.short_name));
        }
        if !self.point().is_finite() {
            return Err(format!("non-finite position for {:?}", self.short_name));
        }
        Ok(())
    }
}

/// A walkable segment between two coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub x1:       f64,
    pub y1:       f64,
    pub x2:       f64,
    pub y2:       f64,
    pub distance: f64,
}

impl ConnectionRecord {
    pub fn new(start: Point, end: Point, distance: f64) -> Self {
        Self { x1: start.x, y1: start.y, x2: end.x, y2: end.y, distance }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Reject records that cannot be placed on the map.  The search engine
    /// requires non-negative weights, so negative, NaN, and infinite
    /// distances are refused here.
    pub fn check(&self) -> Result<(), String> {
        if !self.start().is_finite() || !self.end().is_finite() {
            return Err("non-finite endpoint".into());
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(format!("distance {} is not a finite non-negative number", self.distance));
        }
        Ok(())
    }
}
