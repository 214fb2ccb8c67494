//! Tour Files
//!
//! Authored flythrough tours persisted as JSON: a name plus an ordered
//! waypoint list. JSON keeps the files hand-editable, which matters because
//! tours are captured by walking the scene and printing poses (U key in the
//! viewer), then touched up by hand.
//!
//! The built-in park flythrough is embedded at compile time so the viewer
//! always has a presentation to play.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::path::Waypoint;

/// Minimum number of waypoints a tour needs to produce any motion.
const MIN_WAYPOINTS: usize = 2;

/// A named, ordered list of flythrough waypoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    /// Display name of the tour (e.g. "park-flythrough").
    pub name: String,
    /// Ordered waypoints; the animator consumes them front to back.
    pub waypoints: Vec<Waypoint>,
}

/// Errors produced when loading a tour file.
#[derive(Debug)]
pub enum TourError {
    /// Reading the file failed.
    Io(std::io::Error),
    /// The file is not valid tour JSON.
    Json(serde_json::Error),
    /// The tour has fewer waypoints than playback needs.
    TooShort {
        /// Number of waypoints actually present.
        count: usize,
    },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourError::Io(e) => write!(f, "failed to read tour file: {e}"),
            TourError::Json(e) => write!(f, "invalid tour JSON: {e}"),
            TourError::TooShort { count } => write!(
                f,
                "tour has {count} waypoint(s); at least {MIN_WAYPOINTS} are needed for playback"
            ),
        }
    }
}

impl std::error::Error for TourError {}

impl From<std::io::Error> for TourError {
    fn from(e: std::io::Error) -> Self {
        TourError::Io(e)
    }
}

impl From<serde_json::Error> for TourError {
    fn from(e: serde_json::Error) -> Self {
        TourError::Json(e)
    }
}

impl Tour {
    /// Parse a tour from a JSON string.
    ///
    /// Rejects tours with fewer than two waypoints: the animator would
    /// silently produce no motion, and for an authored file that is a
    /// mistake worth reporting.
    pub fn from_json(json: &str) -> Result<Self, TourError> {
        let tour: Tour = serde_json::from_str(json)?;
        if tour.waypoints.len() < MIN_WAYPOINTS {
            return Err(TourError::TooShort {
                count: tour.waypoints.len(),
            });
        }
        Ok(tour)
    }

    /// Load a tour from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TourError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the tour to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, TourError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The built-in park flythrough: 28 authored waypoints circling the
    /// park, with a fog bank rolling in behind the house and clearing again.
    pub fn park_flythrough() -> Self {
        Self::from_json(include_str!("../../../assets/tours/park.json"))
            .expect("built-in park tour is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_park_flythrough_loads() {
        let tour = Tour::park_flythrough();
        assert_eq!(tour.name, "park-flythrough");
        assert_eq!(tour.waypoints.len(), 28);
    }

    #[test]
    fn test_park_flythrough_matches_authored_endpoints() {
        let tour = Tour::park_flythrough();
        let first = &tour.waypoints[0];
        assert!((first.position.x - (-5.803)).abs() < 1e-4);
        assert!((first.target.z - 14.302).abs() < 1e-4);
        assert_eq!(first.fog, 0.0);

        let last = tour.waypoints.last().unwrap();
        assert!((last.position.z - 19.017).abs() < 1e-4);
        assert!((last.pitch - (-5.4)).abs() < 1e-4);
    }

    #[test]
    fn test_park_flythrough_fog_bank() {
        // The authored fog bank sits on waypoints 9 and 10
        let tour = Tour::park_flythrough();
        assert_eq!(tour.waypoints[8].fog, 0.05);
        assert_eq!(tour.waypoints[9].fog, 0.05);
        assert_eq!(tour.waypoints[10].fog, 0.0);
    }

    #[test]
    fn test_from_json_round_trip() {
        let tour = Tour::park_flythrough();
        let json = tour.to_json().unwrap();
        let back = Tour::from_json(&json).unwrap();
        assert_eq!(back.waypoints.len(), tour.waypoints.len());
        assert_eq!(back.waypoints[5], tour.waypoints[5]);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            Tour::from_json("not json at all"),
            Err(TourError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_short_tours() {
        let json = r#"{"name": "stub", "waypoints": [
            {"position": [0.0, 0.0, 0.0], "target": [0.0, 0.0, -1.0]}
        ]}"#;
        assert!(matches!(
            Tour::from_json(json),
            Err(TourError::TooShort { count: 1 })
        ));
    }

    #[test]
    fn test_waypoint_optional_fields_default() {
        let json = r#"{"name": "stub", "waypoints": [
            {"position": [0.0, 0.0, 0.0], "target": [0.0, 0.0, -1.0]},
            {"position": [1.0, 0.0, 0.0], "target": [1.0, 0.0, -1.0]}
        ]}"#;
        let tour = Tour::from_json(json).unwrap();
        assert_eq!(tour.waypoints[0].fog, 0.0);
        assert_eq!(tour.waypoints[0].yaw, 0.0);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            Tour::load("does/not/exist.json"),
            Err(TourError::Io(_))
        ));
    }
}
