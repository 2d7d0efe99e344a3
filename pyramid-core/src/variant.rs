/// The three progressively richer pyramid programs
use std::fmt;
use std::str::FromStr;

use crate::error::SceneError;
use crate::rotation::WrapMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Static indexed geometry. The angle still advances, but the shader has
    /// no `theta` input so nothing moves.
    Indexed,
    /// The angle is pushed to the `theta` uniform every frame.
    Animated,
    /// Adds a look-at view matrix and a perspective projection; the angle wraps.
    Camera,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Indexed, Variant::Animated, Variant::Camera];

    pub fn wrap_mode(self) -> WrapMode {
        match self {
            Variant::Indexed | Variant::Animated => WrapMode::Unbounded,
            Variant::Camera => WrapMode::SingleSubtraction,
        }
    }

    pub fn uses_camera(self) -> bool {
        self == Variant::Camera
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Indexed => "indexed",
            Variant::Animated => "animated",
            Variant::Camera => "camera",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indexed" | "1" => Ok(Variant::Indexed),
            "animated" | "2" => Ok(Variant::Animated),
            "camera" | "3" => Ok(Variant::Camera),
            _ => Err(SceneError::UnknownVariant(s.to_string())),
        }
    }
}
