//! Abilities domain: collision gate on slam re-use.

use bevy::prelude::*;

use crate::movement::{KinematicBody, SurfaceCategory};

/// Secondary slam readiness, cleared while touching the designated surface.
///
/// Contacts are counted so that leaving one of two overlapping colliders of
/// the category keeps slam blocked.
#[derive(Component, Debug, Clone)]
pub struct CollisionGate {
    surface: SurfaceCategory,
    contacts: u32,
}

impl CollisionGate {
    pub fn new(surface: SurfaceCategory) -> Self {
        Self {
            surface,
            contacts: 0,
        }
    }

    pub fn surface(&self) -> SurfaceCategory {
        self.surface
    }

    pub fn slam_ready(&self) -> bool {
        self.contacts == 0
    }

    /// Returns true when the contact matched and the body was stopped.
    pub fn contact_begin(
        &mut self,
        category: SurfaceCategory,
        body: &mut dyn KinematicBody,
    ) -> bool {
        if category != self.surface {
            return false;
        }
        body.set_velocity(Vec2::ZERO);
        self.contacts += 1;
        true
    }

    /// Returns true when the contact matched.
    pub fn contact_end(&mut self, category: SurfaceCategory) -> bool {
        if category != self.surface {
            return false;
        }
        self.contacts = self.contacts.saturating_sub(1);
        true
    }
}
