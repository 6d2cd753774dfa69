use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    style, terminal, QueueableCommand,
};
use std::io::{stdout, Write};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};
use voxrend::{
    color,
    extra::{composite::Composite, ply::PlyWriter, preview::Preview, RenderSink},
    geometry::*,
    pattern::{DisplayRouting, UpdatePatternPoint},
    Scene, SceneConfig, Vector3,
};

const SLICES: u16 = 180;
const COLUMNS: u16 = 24;
const ROWS: u16 = 32;
const SPACING: f32 = 0.5;

/// Update pattern of a two sided LED panel spinning around the z axis.
///
/// Each side of the panel sweeps half of the cylinder, the `flags` bit telling them apart.
fn spinning_panel() -> Vec<UpdatePatternPoint> {
    let mut pts = Vec::new();

    for slice in 0..SLICES {
        let angle = slice as f32 / SLICES as f32 * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();

        for side in 0..2u8 {
            let dir = if side == 0 { 1.0 } else { -1.0 };
            let normal = Vector3::new(-sin, cos, 0.0) * dir;

            for column in 0..COLUMNS {
                let r = (column as f32 + 0.5) * SPACING * dir;

                for row in 0..ROWS {
                    let z = (row as f32 - ROWS as f32 / 2.0) * SPACING;

                    pts.push(UpdatePatternPoint::new(
                        DisplayRouting {
                            slice,
                            column,
                            row,
                            flags: side,
                        },
                        Vector3::new(r * cos, r * sin, z),
                        normal,
                    ));
                }
            }
        }
    }

    pts
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let pattern = spinning_panel();
    let extent = COLUMNS as f32 * SPACING;
    let pattern_len = pattern.len();

    let mut scene = Scene::new(pattern, &SceneConfig::default())?;

    let ball = scene.create_object(
        Sphere {
            pos: Vector3::zeros(),
            radius: 4.0,
            thickness: 0.6,
        },
        color::hsl(0.0, 100.0, 50.0),
    )?;

    let frame_box = scene.create_object(
        Cuboid {
            v1: Vector3::repeat(-5.0),
            v2: Vector3::repeat(5.0),
            thickness: 0.35,
            is_wireframe: true,
        },
        color::Color1b::CYAN.as_vec(),
    )?;

    let label = scene.create_object_with(
        Text {
            text: "VOX".into(),
            anchor: Vector3::new(4.0, -6.0, 6.0),
            glyph_size: 2.0,
            thickness: 0.3,
            orientation: TextOrientation::PosZ,
        },
        color::Color1b::YELLOW.as_vec(),
        voxrend::ClippingBehavior::Overwrite,
    )?;

    let mut composite = Composite::new();

    // Dump every frame as a point cloud, when asked to.
    let mut ply = match std::env::var_os("VOXREND_PLY_DIR") {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            Some(PlyWriter::new(dir, "frame_"))
        }
        None => None,
    };

    let mut stdout = stdout();
    stdout.queue(cursor::Hide)?;

    // In case we get an outside sigterm/sigint, we want to gracefully shutdown without leaving the
    // terminal in raw mode.
    let stop = Arc::new(AtomicBool::new(false));

    signal_hook::flag::register(signal_hook::consts::SIGTERM, stop.clone())?;
    signal_hook::flag::register(signal_hook::consts::SIGINT, stop.clone())?;

    terminal::enable_raw_mode()?;

    let (tx, rx) = std::sync::mpsc::channel();
    let _ = std::thread::spawn(move || {
        while let Ok(e) = event::read() {
            if tx.send(e).is_err() {
                break;
            }
        }
    });

    let mut preview = Preview::new(0, 0);
    let mut frame = 0;
    let time = Instant::now();

    const Y_OFF: u16 = 2;

    'main: while !stop.load(Ordering::SeqCst) {
        let start = time.elapsed();
        let t = start.as_secs_f32();

        while let Ok(e) = rx.try_recv() {
            if let Event::Key(KeyEvent {
                code, modifiers, ..
            }) = e
            {
                let ctrl_c =
                    code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || code == KeyCode::Char('q') || code == KeyCode::Esc {
                    break 'main;
                }
            }
        }

        // Animate: the ball pulses and shifts hue, the box tumbles, the label bobs.
        scene.set_object_scale(ball, Vector3::repeat(1.0 + 0.25 * (t * 2.0).sin()))?;
        scene.set_object_color(ball, color::hsl((t as f64 * 40.0) % 360.0, 100.0, 50.0))?;
        scene.set_object_rotation(frame_box, Vector3::new(t * 0.3, t * 0.5, 0.0))?;
        scene.set_object_translation(label, Vector3::new(0.0, 0.0, (t * 1.5).sin() * 1.5))?;

        let render = scene.render();
        let rendered = time.elapsed();

        composite.publish(&render)?;

        if let Some(ply) = &mut ply {
            ply.publish(&render)?;
        }

        let (w, h) = terminal::size()?;
        let (w, h) = (w as usize, h.saturating_sub(Y_OFF) as usize);
        if preview.width() != w || preview.height() != h {
            preview.resize(w, h);
        } else {
            preview.clear();
        }

        preview.project(
            composite.lit_points().map(|p| (p.pos, p.color)),
            &Vector3::new(-extent, -extent, -extent),
            &Vector3::new(extent, extent, extent),
        );

        stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        preview.queue(&mut stdout, 0, Y_OFF)?;

        stdout.queue(cursor::MoveTo(0, 0))?;
        stdout.queue(style::SetForegroundColor(style::Color::White))?;

        let v = format!(
            "{frame} {:.02}ms render, {} instructions, {} lit of {pattern_len} points",
            (rendered - start).as_secs_f32() * 1000.0,
            render.len(),
            composite.lit_points().count(),
        );
        stdout.queue(style::Print(v))?;

        stdout.flush()?;

        let drawn_delta = time.elapsed() - start;
        let frametime_target = Duration::from_millis(33);

        if drawn_delta < frametime_target {
            std::thread::sleep(frametime_target - drawn_delta);
        }

        frame += 1;
    }

    terminal::disable_raw_mode()?;

    stdout.queue(style::ResetColor)?;
    stdout.queue(cursor::Show)?;
    stdout.flush()?;

    Ok(())
}
