use hitplane::core::prelude::*;
use hitplane::info_every_seconds;
use hitplane::util::setup_log;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;
use std::time::Duration;

const USAGE: &str = "usage: hitplane [EXPERIMENT] [--seed N] [--ticks N] [--verbose]
experiments: aabb, left-right, point-in-rect, circle, corridor, sat, gjk, all (default)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Experiment {
    One(Algorithm),
    All,
}

impl Experiment {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Experiment::One(algorithm) => vec![algorithm],
            Experiment::All => Algorithm::ALL.to_vec(),
        }
    }
}

impl FromStr for Experiment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            Ok(Experiment::All)
        } else {
            Ok(Experiment::One(s.parse()?))
        }
    }
}

#[derive(Debug)]
struct Args {
    experiment: Experiment,
    seed: u64,
    ticks: usize,
    verbose: bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut rv = Self {
            experiment: Experiment::All,
            seed: 0,
            ticks: 1500,
            verbose: false,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().context("--seed needs a value")?;
                    rv.seed = value
                        .parse()
                        .with_context(|| format!("bad --seed: {value:?}"))?;
                }
                "--ticks" => {
                    let value = args.next().context("--ticks needs a value")?;
                    rv.ticks = value
                        .parse()
                        .with_context(|| format!("bad --ticks: {value:?}"))?;
                }
                "--verbose" | "-v" => rv.verbose = true,
                "--help" | "-h" => bail!("{USAGE}"),
                other => rv.experiment = other.parse().context(USAGE)?,
            }
        }
        Ok(rv)
    }
}

/// The fixed colliders the user plane wanders between, in world space.
struct Scene {
    /// The user's parent; the user's transform is relative to it.
    stage: Plane,
    box_collider: Plane,
    tilted_collider: Plane,
    trapezoid: Shape,
    hexagon: Shape,
    track: Annulus,
    corridor: Corridor,
}

impl Scene {
    fn new() -> Result<Self> {
        let trapezoid = Shape::polygon(
            &Transform::with_centre(Vec2 { x: -6.0, y: 5.0 }),
            &[
                Vec2 { x: -2.0, y: -1.0 },
                Vec2 { x: -1.0, y: 1.0 },
                Vec2 { x: 1.0, y: 1.0 },
                Vec2 { x: 2.0, y: -1.0 },
            ],
        )
        .context("building trapezoid")?;
        let hexagon_markers = (0..6)
            .map(|i| Vec2::right().rotated(-(i as f32) * std::f32::consts::TAU / 6.0))
            .collect_vec();
        let hexagon = Shape::polygon(
            &Transform {
                centre: Vec2 { x: 0.0, y: -6.0 },
                rotation: 0.0,
                scale: Vec2::splat(2.0),
            },
            &hexagon_markers,
        )
        .context("building hexagon")?;
        let corridor = Corridor::from_markers(&[
            Vec2 { x: -12.0, y: 3.0 },
            Vec2 { x: 0.0, y: 4.0 },
            Vec2 { x: 12.0, y: 3.0 },
            Vec2 { x: -12.0, y: -3.0 },
            Vec2 { x: 0.0, y: -4.0 },
            Vec2 { x: 12.0, y: -3.0 },
        ])
        .context("building corridor")?;
        Ok(Self {
            stage: Plane::new(Vec2::zero(), Vec2::splat(20.0)).with_scale(Vec2::splat(2.0)),
            box_collider: Plane::new(Vec2 { x: -6.0, y: -2.0 }, Vec2::splat(2.0)),
            tilted_collider: Plane::new(Vec2 { x: 6.0, y: 5.0 }, Vec2 { x: 3.0, y: 1.0 })
                .with_rotation(0.4),
            trapezoid,
            hexagon,
            track: Annulus::new(
                Circle::new(Vec2::zero(), 9.0),
                Circle::new(Vec2::zero(), 3.0),
            ),
            corridor,
        })
    }

    /// Whether `user` is in the state the experiment flags: touching the collider, or off the
    /// track for the track-shaped experiments.
    fn evaluate(&self, algorithm: Algorithm, user: &Plane) -> bool {
        let upright = ShapeBuilder::new(user).with_parent(&self.stage).build();
        let rotated = ShapeBuilder::new(user)
            .with_parent(&self.stage)
            .rotated()
            .build();
        check_eq!(rotated.vertices().len(), 4);
        match algorithm {
            Algorithm::Aabb => {
                aabb_overlap(&upright, &ShapeBuilder::new(&self.box_collider).build())
            }
            Algorithm::LeftRight => shapes_overlap(&self.trapezoid, &rotated),
            Algorithm::PointInRect => rects_overlap_by_dot(
                &rotated,
                &ShapeBuilder::new(&self.tilted_collider).rotated().build(),
            ),
            Algorithm::Circle => !self.track.contains_rect(&rotated),
            Algorithm::Corridor => !self.corridor.contains(&rotated),
            Algorithm::Sat => sat_overlap(&self.hexagon, &rotated),
            Algorithm::Gjk => gjk_overlap(&self.hexagon, &rotated),
        }
    }
}

/// One algorithm watching the user, evaluated at its own cadence.
struct Probe {
    algorithm: Algorithm,
    poll: Option<IntervalPoll>,
    monitor: Monitor<bool>,
    evaluations: usize,
    changes: usize,
}

impl Probe {
    fn new(algorithm: Algorithm) -> Result<Self> {
        Ok(Self {
            algorithm,
            poll: algorithm
                .cadence()
                .to_poll()
                .with_context(|| format!("scheduling {algorithm}"))?,
            monitor: Monitor::new(),
            evaluations: 0,
            changes: 0,
        })
    }

    fn tick(&mut self, dt: Duration, scene: &Scene, user: &Plane, tick: usize) {
        let algorithm = self.algorithm;
        let value = match self.poll.as_mut() {
            Some(poll) => poll.advance(dt, || scene.evaluate(algorithm, user)),
            None => Some(scene.evaluate(algorithm, user)),
        };
        let Some(value) = value else {
            return;
        };
        self.evaluations += 1;
        if let Some(hit) = self.monitor.update(value) {
            self.changes += 1;
            info!(
                "[{algorithm}] tick {tick}: {} (user at {:.2})",
                if hit { "HIT" } else { "clear" },
                user.transform.centre
            );
        }
    }
}

/// Random walk of the user plane, bouncing off the edges of its parent.
struct Wander {
    rng: StdRng,
    velocity: Vec2,
    spin: f32,
}

impl Wander {
    const MAX_SPEED: f32 = 4.0;
    const BOUND: f32 = 5.0;

    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            velocity: Vec2::zero(),
            spin: 0.0,
        }
    }

    fn step(&mut self, user: &mut Plane, dt: Duration) {
        let dt = dt.as_secs_f32();
        let jitter = Vec2 {
            x: self.rng.gen_range(-1.0..1.0),
            y: self.rng.gen_range(-1.0..1.0),
        };
        self.velocity += jitter * 8.0 * dt;
        if self.velocity.len() > Self::MAX_SPEED {
            self.velocity = self.velocity.normed() * Self::MAX_SPEED;
        }
        self.spin = (self.spin + self.rng.gen_range(-0.5..0.5) * dt).clamp(-1.0, 1.0);

        let mut centre = user.transform.centre + self.velocity * dt;
        if centre.x.abs() > Self::BOUND {
            centre.x = centre.x.clamp(-Self::BOUND, Self::BOUND);
            self.velocity.x = -self.velocity.x;
        }
        if centre.y.abs() > Self::BOUND {
            centre.y = centre.y.clamp(-Self::BOUND, Self::BOUND);
            self.velocity.y = -self.velocity.y;
        }
        user.transform.centre = centre;
        user.transform.rotation += self.spin * dt;
    }
}

fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    setup_log(args.verbose)?;
    info!(
        "running {:?} for {} ticks of {:?}, seed {}",
        args.experiment, args.ticks, DEFAULT_TICK_INTERVAL, args.seed
    );

    let scene = Scene::new()?;
    let mut probes: Vec<Probe> = args
        .experiment
        .algorithms()
        .into_iter()
        .map(Probe::new)
        .collect::<Result<_>>()?;
    let mut user = Plane::new(Vec2 { x: 3.0, y: 0.0 }, Vec2::one());
    let mut wander = Wander::new(args.seed);

    for tick in 0..args.ticks {
        wander.step(&mut user, DEFAULT_TICK_INTERVAL);
        for probe in &mut probes {
            probe.tick(DEFAULT_TICK_INTERVAL, &scene, &user, tick);
        }
        info_every_seconds!(1, "tick {}: user at {:.2}", tick, user.transform.centre);
    }

    for probe in &probes {
        info!(
            "[{}] {} evaluations, {} state changes",
            probe.algorithm, probe.evaluations, probe.changes
        );
    }
    Ok(())
}
