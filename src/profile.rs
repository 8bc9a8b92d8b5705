//! Player profiles: display names and marker colors.
//!
//! Profiles are mutated in place by rename/recolor and do not
//! participate in move history or history scrubbing.

use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// Default color for marker X.
pub const DEFAULT_X_COLOR: &str = "blue";

/// Default color for marker O.
pub const DEFAULT_O_COLOR: &str = "red";

/// Display settings for one player.
///
/// Neither field is validated: the name may be empty (display falls
/// back to the marker letter) and the color is any string, forwarded
/// verbatim to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    name: String,
    color: String,
}

impl PlayerProfile {
    /// Creates a profile with an empty name and the given color.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            color: color.into(),
        }
    }

    /// The raw display name, possibly empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The marker color, forwarded verbatim to the view.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The name to display for this player: the stored name when
    /// non-empty, otherwise the literal marker letter.
    pub fn resolved_name(&self, marker: Marker) -> &str {
        if self.name.is_empty() {
            marker.letter()
        } else {
            &self.name
        }
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}

/// The two player profiles, keyed by marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profiles {
    x: PlayerProfile,
    o: PlayerProfile,
}

impl Profiles {
    /// Creates the default profile table: empty names, X blue, O red.
    pub fn new() -> Self {
        Self {
            x: PlayerProfile::new(DEFAULT_X_COLOR),
            o: PlayerProfile::new(DEFAULT_O_COLOR),
        }
    }

    /// Gets the profile for a marker.
    pub fn get(&self, marker: Marker) -> &PlayerProfile {
        match marker {
            Marker::X => &self.x,
            Marker::O => &self.o,
        }
    }

    pub(crate) fn get_mut(&mut self, marker: Marker) -> &mut PlayerProfile {
        match marker {
            Marker::X => &mut self.x,
            Marker::O => &mut self.o,
        }
    }
}

impl Default for Profiles {
    fn default() -> Self {
        Self::new()
    }
}
