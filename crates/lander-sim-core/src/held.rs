use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrustDirection {
    Left,
    Right,
    Up,
}

impl ThrustDirection {
    /// Order in which held directions win when several are pressed together.
    /// Only one direction thrusts per tick.
    pub const PRIORITY: [Self; 3] = [Self::Right, Self::Left, Self::Up];
}

/// Level-triggered record of which control axes are currently pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldDirections {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl HeldDirections {
    pub fn is_held(&self, direction: ThrustDirection) -> bool {
        match direction {
            ThrustDirection::Left => self.left,
            ThrustDirection::Right => self.right,
            ThrustDirection::Up => self.up,
        }
    }

    pub fn set(&mut self, direction: ThrustDirection, held: bool) {
        match direction {
            ThrustDirection::Left => self.left = held,
            ThrustDirection::Right => self.right = held,
            ThrustDirection::Up => self.up = held,
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.up
    }

    /// Highest-priority held direction, if any.
    pub fn dominant(&self) -> Option<ThrustDirection> {
        ThrustDirection::PRIORITY
            .into_iter()
            .find(|direction| self.is_held(*direction))
    }
}

/// Anything the simulation loop can read held directions from once per tick.
pub trait HeldDirectionSource {
    fn held_directions(&self) -> HeldDirections;
}

impl HeldDirectionSource for HeldDirections {
    fn held_directions(&self) -> HeldDirections {
        *self
    }
}
