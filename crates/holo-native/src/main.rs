mod synthetic;

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;
use holo_core::{
    constants::DEFAULT_PARTICLE_COUNT, ControlMode, CursorAdapter, HandTracker, InteractionBus,
    ParticleSimulator, ShapeKind, SimParams, TargetLibrary, TracerParams,
};
use synthetic::{cursor_sample, HandScript};

const FRAME_DT: Duration = Duration::from_millis(16);
const TRACKER_INTERVAL: Duration = Duration::from_millis(33);
const SHAPE_HOLD_FRAMES: u32 = 240;
const STATS_EVERY: u32 = 60;
const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

struct Settings {
    particles: usize,
    shape: ShapeKind,
    frames: u32,
    seed: u64,
    source: ControlMode,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring unparsable {key}={raw}");
            default
        }),
        Err(_) => default,
    }
}

impl Settings {
    fn from_env() -> Self {
        let shape = std::env::var("HOLO_SHAPE")
            .map(|name| ShapeKind::from_name_or_free(&name))
            .unwrap_or(ShapeKind::Sphere);
        let source = match std::env::var("HOLO_INPUT").as_deref() {
            Ok("cursor") => ControlMode::Cursor,
            Ok("gesture") | Err(_) => ControlMode::Gesture,
            Ok(other) => {
                log::warn!("unknown HOLO_INPUT={other}, using gesture");
                ControlMode::Gesture
            }
        };
        Self {
            particles: env_or("HOLO_PARTICLES", DEFAULT_PARTICLE_COUNT),
            shape,
            frames: env_or("HOLO_FRAMES", 1200),
            seed: env_or("HOLO_SEED", 42),
            source,
        }
    }
}

/// Spawn the input thread. It publishes to the bus at tracker cadence until
/// `running` is cleared.
fn spawn_input(
    source: ControlMode,
    bus: InteractionBus,
    running: Arc<AtomicBool>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("input-feed".into())
        .spawn(move || {
            let start = Instant::now();
            let script = HandScript::new(2000);
            let mut tracker = HandTracker::new(TracerParams::default());
            let mut cursor = CursorAdapter::default();
            let mut was_held = false;
            while running.load(Ordering::Relaxed) {
                let now_ms = start.elapsed().as_millis() as u64;
                match source {
                    ControlMode::Gesture => {
                        let frame = script.frame(now_ms);
                        tracker.process_and_publish(&frame, now_ms, &bus);
                    }
                    ControlMode::Cursor => {
                        let (px, held) = cursor_sample(now_ms, VIEWPORT);
                        let mut vector = cursor.pointer_move(px, VIEWPORT);
                        if held != was_held {
                            vector = cursor.button(held);
                            was_held = held;
                        }
                        bus.publish(ControlMode::Cursor, vector);
                    }
                }
                thread::sleep(TRACKER_INTERVAL);
            }
        })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();
    let params = SimParams {
        particle_count: settings.particles,
        ..SimParams::default()
    };
    let mut sim = ParticleSimulator::with_shape(params, settings.shape, settings.seed)?;
    let mut library = TargetLibrary::new();
    log::info!(
        "{} particles forming {} ({} frames, {:?} input)",
        sim.len(),
        settings.shape,
        settings.frames,
        settings.source
    );

    let bus = InteractionBus::new(settings.source);
    let running = Arc::new(AtomicBool::new(true));
    let feed = spawn_input(settings.source, bus.clone(), Arc::clone(&running))?;

    let rotation: Vec<ShapeKind> = ShapeKind::ALL_PRESETS
        .iter()
        .copied()
        .chain([ShapeKind::Letter('H')])
        .collect();
    let mut next_preset = rotation
        .iter()
        .position(|s| *s == settings.shape)
        .map_or(0, |i| i + 1);

    let mut construction_applied = false;
    let mut last_sequence = 0u64;
    let started = Instant::now();
    for frame in 1..=settings.frames {
        let snapshot = bus.snapshot();
        match snapshot.construction.as_ref() {
            Some(c) if c.is_locked() && !construction_applied => {
                let name = format!("construction-{}", library.len() + 1);
                library.save_construction(&name, c, sim.len())?;
                if let Some(set) = library.get(&name) {
                    sim.set_targets(set.clone())?;
                }
                log::info!("locked construction saved as {name} ({} points)", c.path.len());
                construction_applied = true;
            }
            Some(_) => {}
            None => construction_applied = false,
        }
        let mut vector = snapshot.vector;
        if snapshot.sequence == last_sequence {
            // rotation deltas apply once per published sample
            vector.rotation = None;
        }
        last_sequence = snapshot.sequence;
        sim.set_interaction(vector);
        sim.tick(FRAME_DT);

        if frame % SHAPE_HOLD_FRAMES == 0 {
            let next = rotation[next_preset % rotation.len()];
            next_preset += 1;
            log::info!("switching formation to {next}");
            sim.set_shape(next)?;
        }
        if frame % STATS_EVERY == 0 {
            log::info!(
                "frame {frame}: error {:.4}, morphing {}, compression {:.2}, yaw {:.2}, pitch {:.2}",
                sim.mean_target_error(),
                sim.is_morphing(),
                sim.compression(),
                sim.orientation.yaw(),
                sim.orientation.pitch(),
            );
        }
        thread::sleep(FRAME_DT.saturating_sub(Duration::from_micros(500)));
    }

    running.store(false, Ordering::Relaxed);
    if feed.join().is_err() {
        log::error!("input thread panicked");
    }
    log::info!(
        "done in {:.1}s, {} saved formations, first particle at {:?}",
        started.elapsed().as_secs_f32(),
        library.len(),
        sim.positions().first()
    );
    Ok(())
}
