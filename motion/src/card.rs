//! 3D card that tilts toward the pointer and glints as it turns.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::config::MotionConfig;
use crate::consts::{SHINE_ANGLE_PER_YAW, SHINE_BASE_ANGLE_DEG};
use crate::damp::Damped2;
use crate::geom::{Point, Rect};
use crate::hover::{HoverRegion, TiltMapping};

/// Rotation of the card for one frame, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    /// rotateX
    pub pitch: f64,
    /// rotateY
    pub yaw: f64,
}

impl CardPose {
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("rotateY({}deg) rotateX({}deg)", self.yaw, self.pitch)
    }

    /// Background for the shine overlay. The highlight sweeps with yaw and
    /// brightens the further the card is turned.
    #[must_use]
    pub fn shine_css(&self) -> String {
        let angle = SHINE_BASE_ANGLE_DEG + self.yaw * SHINE_ANGLE_PER_YAW;
        let intensity = self.yaw.abs() / 40.0;
        let edge = 0.02 + intensity * 0.08;
        let peak = 0.04 + intensity * 0.12;
        format!(
            "linear-gradient({angle}deg, transparent 35%, rgba(255,255,255,{edge}) 45%, \
             rgba(255,255,255,{peak}) 50%, rgba(255,255,255,{edge}) 55%, transparent 65%)"
        )
    }
}

/// Hover-driven tilt state for the card scene.
#[derive(Debug, Clone)]
pub struct CardTilt {
    region: HoverRegion<TiltMapping>,
    rotation: Damped2,
}

impl Default for CardTilt {
    fn default() -> Self {
        Self::from_config(&MotionConfig::default())
    }
}

impl CardTilt {
    #[must_use]
    pub fn from_config(cfg: &MotionConfig) -> Self {
        let rest = Point::new(cfg.card_rest_pitch_deg, cfg.card_rest_yaw_deg);
        let mapping = TiltMapping {
            yaw_range_deg: cfg.card_yaw_range_deg,
            pitch_range_deg: cfg.card_pitch_range_deg,
        };
        Self {
            region: HoverRegion::new(mapping, rest),
            rotation: Damped2::at_rest(rest, cfg.card_damping),
        }
    }

    pub fn enter(&mut self) {
        self.region.enter();
    }

    pub fn leave(&mut self) {
        let rest = self.region.leave();
        self.rotation.set_target(rest);
    }

    pub fn pointer_move(&mut self, rect: Rect, pointer: Point) {
        if let Some(target) = self.region.pointer_move(rect, pointer) {
            self.rotation.set_target(target);
        }
    }

    #[must_use]
    pub fn target(&self) -> CardPose {
        let t = self.rotation.target();
        CardPose { pitch: t.x, yaw: t.y }
    }

    #[must_use]
    pub fn pose(&self) -> CardPose {
        let c = self.rotation.current();
        CardPose { pitch: c.x, yaw: c.y }
    }

    /// Advance one frame.
    pub fn frame(&mut self) -> CardPose {
        let c = self.rotation.step();
        CardPose { pitch: c.x, yaw: c.y }
    }
}
