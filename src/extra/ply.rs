//! ASCII PLY point cloud output, for inspecting frames offline.

use super::{
    composite::{Composite, CompositePoint},
    RenderSink,
};
use crate::{color::Color1b, scene::Render};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

fn channel(on: bool) -> u8 {
    if on {
        255
    } else {
        0
    }
}

/// Writes points as an ASCII PLY document with positions, normals and colors.
pub fn write_ply<W: Write>(
    out: &mut W,
    points: impl ExactSizeIterator<Item = CompositePoint>,
) -> io::Result<()> {
    write!(
        out,
        "ply\n\
         format ascii 1.0\n\
         element vertex {}\n\
         property float x\n\
         property float y\n\
         property float z\n\
         property float nx\n\
         property float ny\n\
         property float nz\n\
         property uchar red\n\
         property uchar green\n\
         property uchar blue\n\
         end_header\n",
        points.len()
    )?;

    for CompositePoint {
        pos, normal, color, ..
    } in points
    {
        let Color1b { r, g, b } = color;
        writeln!(
            out,
            "{} {} {} {} {} {} {} {} {}",
            pos.x,
            pos.y,
            pos.z,
            normal.x,
            normal.y,
            normal.z,
            channel(r),
            channel(g),
            channel(b),
        )?;
    }

    Ok(())
}

/// Writes the lit points of a render's turn-on instructions.
pub fn write_render_ply<W: Write>(out: &mut W, render: &Render) -> io::Result<()> {
    let points: Vec<_> = render
        .turned_on()
        .map(|p| CompositePoint {
            routing: p.routing,
            pos: p.pos,
            normal: p.normal,
            color: p.color,
        })
        .collect();

    write_ply(out, points.into_iter())
}

/// Sink that tracks the full display state and dumps it to a numbered file per frame.
pub struct PlyWriter {
    dir: PathBuf,
    prefix: String,
    frame: usize,
    state: Composite,
}

impl PlyWriter {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            frame: 0,
            state: Composite::new(),
        }
    }

    /// Path the next frame is written to.
    pub fn next_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}{:05}.ply", self.prefix, self.frame))
    }

    pub fn state(&self) -> &Composite {
        &self.state
    }
}

impl RenderSink for PlyWriter {
    type Error = io::Error;

    fn publish(&mut self, render: &Render) -> Result<(), Self::Error> {
        self.state.apply(render);

        let path = self.next_path();
        let mut out = BufWriter::new(File::create(&path)?);
        let lit: Vec<_> = self.state.lit_points().collect();
        write_ply(&mut out, lit.into_iter())?;
        out.flush()?;

        log::debug!("wrote {}", path.display());
        self.frame += 1;

        Ok(())
    }
}
