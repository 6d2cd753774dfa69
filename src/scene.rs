//! Object management and incremental rendering.
//!
//! A [`Scene`] owns the update pattern grid and every live [`Object`]. Objects are mutated
//! through id based setters which only mark them dirty. [`Scene::render`] then rasterizes the
//! dirty objects and diffs each one against the points it lit before, producing a [`Render`]
//! with explicit turn-on and turn-off instructions.
//!
//! Diffing is done per object. Two objects may light the same physical point, and how their
//! colors combine is left to the display layer (see [`ClippingBehavior`] and
//! [`Composite`](crate::extra::composite::Composite)).

use crate::{
    color::Color1b,
    config::SceneConfig,
    dithering::{Dithering, OrderedDither},
    error::{Error, Result},
    geometry::{Geometry, Transformation},
    grid::Grid,
    pattern::{DisplayRouting, UpdatePatternPoint},
    raster::{PointStyle, Rasterizer},
    Vector3,
};
use alloc::{collections::BTreeMap, vec::Vec};

pub type ObjectId = u32;

/// How an object's color combines with other objects lighting the same point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClippingBehavior {
    /// Mix additively with every other object at the point.
    #[default]
    Add,
    /// Replace whatever else is lit at the point.
    Overwrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    On,
    Off,
}

/// One update pattern point claimed (or released) by an object.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedPoint {
    pub object_id: ObjectId,
    pub routing: DisplayRouting,
    pub pos: Vector3,
    pub normal: Vector3,
    /// Dithered color, always [`Color1b::OFF`] for turn-off instructions.
    pub color: Color1b,
    pub clipping: ClippingBehavior,
    pub instruction: Instruction,
}

impl RenderedPoint {
    pub fn is_on(&self) -> bool {
        self.instruction == Instruction::On
    }

    /// Turn-off instruction for the same point and owner.
    pub fn turned_off(&self) -> Self {
        Self {
            color: Color1b::OFF,
            instruction: Instruction::Off,
            ..*self
        }
    }
}

/// Output of a single [`Scene::render`] call.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Render {
    pub points: Vec<RenderedPoint>,
}

impl Render {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn turned_on(&self) -> impl Iterator<Item = &RenderedPoint> {
        self.points.iter().filter(|p| p.is_on())
    }

    pub fn turned_off(&self) -> impl Iterator<Item = &RenderedPoint> {
        self.points.iter().filter(|p| !p.is_on())
    }
}

/// A scene object.
#[derive(Debug, Clone)]
pub struct Object {
    id: ObjectId,
    geometry: Geometry,
    transformation: Transformation,
    color: Vector3,
    clipping: ClippingBehavior,
    dirty: bool,
}

impl Object {
    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    pub fn color(&self) -> Vector3 {
        self.color
    }

    pub fn clipping(&self) -> ClippingBehavior {
        self.clipping
    }

    /// Whether the object changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Geometry in world space. Meshes and text are left in object space.
    pub fn transformed_geometry(&self) -> Geometry {
        self.geometry.transformed(&self.transformation)
    }
}

/// Points an object currently lights, keyed by routing.
type Footprint = BTreeMap<DisplayRouting, RenderedPoint>;

/// Volumetric scene.
pub struct Scene<D = OrderedDither> {
    grid: Grid,
    dithering: D,
    objects: BTreeMap<ObjectId, Object>,
    next_id: ObjectId,
    /// Objects removed since the last render.
    removed: Vec<ObjectId>,
    footprints: BTreeMap<ObjectId, Footprint>,
}

impl Scene {
    /// Builds a scene over an update pattern, with ordered dithering.
    pub fn new(points: Vec<UpdatePatternPoint>, config: &SceneConfig) -> Result<Self> {
        config.validate()?;
        let dithering = OrderedDither::new(config.dither_order)?;
        Self::with_dithering(points, config, dithering)
    }
}

impl<D: Dithering> Scene<D> {
    pub fn with_dithering(
        points: Vec<UpdatePatternPoint>,
        config: &SceneConfig,
        dithering: D,
    ) -> Result<Self> {
        config.validate()?;
        let grid = Grid::build(points, config.points_per_cell)?;

        Ok(Self {
            grid,
            dithering,
            objects: BTreeMap::new(),
            next_id: 0,
            removed: Vec::new(),
            footprints: BTreeMap::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Adds an object with additive clipping.
    pub fn create_object(
        &mut self,
        geometry: impl Into<Geometry>,
        color: Vector3,
    ) -> Result<ObjectId> {
        self.create_object_with(geometry, color, ClippingBehavior::Add)
    }

    /// Adds an object and returns its id.
    ///
    /// Ids are never reused. Fails with [`Error::ObjectIdsExhausted`] once the id space is used up.
    pub fn create_object_with(
        &mut self,
        geometry: impl Into<Geometry>,
        color: Vector3,
        clipping: ClippingBehavior,
    ) -> Result<ObjectId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(Error::ObjectIdsExhausted)?;

        self.objects.insert(
            id,
            Object {
                id,
                geometry: geometry.into(),
                transformation: Transformation::default(),
                color,
                clipping,
                dirty: true,
            },
        );

        Ok(id)
    }

    pub fn object(&self, id: ObjectId) -> Result<&Object> {
        self.objects.get(&id).ok_or(Error::UnknownObject(id))
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.values()
    }

    /// Points the object lit as of the last render.
    pub fn footprint(&self, id: ObjectId) -> Result<impl Iterator<Item = &RenderedPoint>> {
        self.object(id)?;
        Ok(self.footprints.get(&id).into_iter().flat_map(|f| f.values()))
    }

    fn update(&mut self, id: ObjectId, f: impl FnOnce(&mut Object)) -> Result<()> {
        let obj = self.objects.get_mut(&id).ok_or(Error::UnknownObject(id))?;
        f(obj);
        obj.dirty = true;
        Ok(())
    }

    pub fn set_object_geometry(&mut self, id: ObjectId, geometry: impl Into<Geometry>) -> Result<()> {
        let geometry = geometry.into();
        self.update(id, |o| o.geometry = geometry)
    }

    pub fn set_object_color(&mut self, id: ObjectId, color: Vector3) -> Result<()> {
        self.update(id, |o| o.color = color)
    }

    pub fn set_object_clipping(&mut self, id: ObjectId, clipping: ClippingBehavior) -> Result<()> {
        self.update(id, |o| o.clipping = clipping)
    }

    pub fn set_object_transformation(
        &mut self,
        id: ObjectId,
        transformation: Transformation,
    ) -> Result<()> {
        self.update(id, |o| o.transformation = transformation)
    }

    pub fn set_object_translation(&mut self, id: ObjectId, translation: Vector3) -> Result<()> {
        self.update(id, |o| o.transformation.translation = translation)
    }

    /// Sets Euler XYZ rotation, in radians.
    pub fn set_object_rotation(&mut self, id: ObjectId, rotation: Vector3) -> Result<()> {
        self.update(id, |o| o.transformation.rotation = rotation)
    }

    pub fn set_object_scale(&mut self, id: ObjectId, scale: Vector3) -> Result<()> {
        self.update(id, |o| o.transformation.scale = scale)
    }

    pub fn set_object_pivot(&mut self, id: ObjectId, pivot: Vector3) -> Result<()> {
        self.update(id, |o| o.transformation.pivot = pivot)
    }

    /// Removes an object. Its points are turned off on the next render.
    pub fn remove_object(&mut self, id: ObjectId) -> Result<()> {
        self.objects.remove(&id).ok_or(Error::UnknownObject(id))?;
        self.removed.push(id);
        Ok(())
    }

    /// Forces every object to be redrawn on the next render.
    pub fn mark_all_dirty(&mut self) {
        for obj in self.objects.values_mut() {
            obj.dirty = true;
        }
    }

    /// Rasterizes changed objects and returns the resulting instructions.
    ///
    /// Removed objects turn off every point they lit. For each dirty object, points it no
    /// longer covers are turned off, and points that are new or changed color are turned on.
    /// Clean objects contribute nothing.
    pub fn render(&mut self) -> Render {
        let mut points = Vec::new();

        for id in core::mem::take(&mut self.removed) {
            if let Some(footprint) = self.footprints.remove(&id) {
                log::debug!("object {id} removed, turning off {} points", footprint.len());
                points.extend(footprint.values().map(RenderedPoint::turned_off));
            }
        }

        let rasterizer = Rasterizer::new(&self.grid, &self.dithering);
        let mut fresh = Vec::new();

        for obj in self.objects.values_mut().filter(|o| o.dirty) {
            let style = PointStyle {
                object_id: obj.id,
                color: obj.color,
                clipping: obj.clipping,
            };

            fresh.clear();
            rasterizer.draw(
                &obj.transformed_geometry(),
                &obj.transformation,
                &style,
                &mut fresh,
            );

            // Composite shapes may hit a point more than once, the first hit wins.
            let mut next = Footprint::new();
            for p in fresh.drain(..) {
                next.entry(p.routing).or_insert(p);
            }

            let prev = self.footprints.remove(&obj.id).unwrap_or_default();
            let start = points.len();

            points.extend(
                prev.values()
                    .filter(|p| !next.contains_key(&p.routing))
                    .map(RenderedPoint::turned_off),
            );

            let off = points.len() - start;

            points.extend(
                next.values()
                    .filter(|p| {
                        prev.get(&p.routing)
                            .map_or(true, |old| old.color != p.color || old.clipping != p.clipping)
                    })
                    .copied(),
            );

            log::debug!(
                "object {}: {} points lit, {} turned on, {off} turned off",
                obj.id,
                next.len(),
                points.len() - start - off,
            );

            self.footprints.insert(obj.id, next);
            obj.dirty = false;
        }

        log::trace!("render produced {} instructions", points.len());

        Render { points }
    }
}
