//! Resolution of overlapping objects.
//!
//! Several objects may light the same point. [`Composite`] keeps every object's contribution
//! per point and derives the color the LED should actually show:
//!
//! - If any [`Overwrite`](ClippingBehavior::Overwrite) contribution exists, the most recently lit
//!   one is shown.
//! - Otherwise all [`Add`](ClippingBehavior::Add) contributions are mixed.
//!
//! Removing a contribution recomputes the color from the remaining ones, so an object that was
//! hidden by an overwriting one never darkens it when it goes away.

use super::RenderSink;
use crate::{
    color::Color1b,
    pattern::DisplayRouting,
    scene::{ClippingBehavior, Instruction, ObjectId, Render, RenderedPoint},
    Vector3,
};
use alloc::collections::BTreeMap;
use core::convert::Infallible;

#[derive(Debug, Clone, Copy)]
struct Contribution {
    color: Color1b,
    clipping: ClippingBehavior,
    /// Ordering of the turn-on instruction, across the whole composite.
    lit_at: u64,
}

#[derive(Debug, Clone)]
struct Slot {
    pos: Vector3,
    normal: Vector3,
    contributions: BTreeMap<ObjectId, Contribution>,
}

impl Slot {
    fn color(&self) -> Color1b {
        let overwrite = self
            .contributions
            .values()
            .filter(|c| c.clipping == ClippingBehavior::Overwrite)
            .max_by_key(|c| c.lit_at);

        match overwrite {
            Some(c) => c.color,
            None => self
                .contributions
                .values()
                .fold(Color1b::OFF, |acc, c| acc.add(c.color)),
        }
    }
}

/// Resolved state of a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositePoint {
    pub routing: DisplayRouting,
    pub pos: Vector3,
    pub normal: Vector3,
    pub color: Color1b,
}

/// Accumulated display state, built by applying renders in order.
#[derive(Debug, Clone, Default)]
pub struct Composite {
    slots: BTreeMap<DisplayRouting, Slot>,
    sequence: u64,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single instruction.
    pub fn apply_point(&mut self, p: &RenderedPoint) {
        match p.instruction {
            Instruction::On => {
                let lit_at = self.sequence;
                self.sequence += 1;

                let slot = self.slots.entry(p.routing).or_insert_with(|| Slot {
                    pos: p.pos,
                    normal: p.normal,
                    contributions: BTreeMap::new(),
                });

                slot.contributions.insert(
                    p.object_id,
                    Contribution {
                        color: p.color,
                        clipping: p.clipping,
                        lit_at,
                    },
                );
            }
            Instruction::Off => {
                if let Some(slot) = self.slots.get_mut(&p.routing) {
                    slot.contributions.remove(&p.object_id);
                    if slot.contributions.is_empty() {
                        self.slots.remove(&p.routing);
                    }
                }
            }
        }
    }

    pub fn apply(&mut self, render: &Render) {
        for p in &render.points {
            self.apply_point(p);
        }
    }

    /// Effective color of a point. Points nobody claims are off.
    pub fn color_at(&self, routing: &DisplayRouting) -> Color1b {
        self.slots
            .get(routing)
            .map(Slot::color)
            .unwrap_or(Color1b::OFF)
    }

    /// Every claimed point with its effective color.
    ///
    /// A claimed point may still be off, when dithering turned all its channels off.
    pub fn points(&self) -> impl Iterator<Item = CompositePoint> + '_ {
        self.slots.iter().map(|(routing, slot)| CompositePoint {
            routing: *routing,
            pos: slot.pos,
            normal: slot.normal,
            color: slot.color(),
        })
    }

    /// Claimed points that show any color.
    pub fn lit_points(&self) -> impl Iterator<Item = CompositePoint> + '_ {
        self.points().filter(|p| !p.color.is_off())
    }

    /// Number of claimed points.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl RenderSink for Composite {
    type Error = Infallible;

    fn publish(&mut self, render: &Render) -> Result<(), Self::Error> {
        self.apply(render);
        Ok(())
    }
}
