use game_core::render::Surface2d;
use game_core::*;
use glam::Vec2;
use rand::Rng;

/// Surface that only remembers the last HUD text
#[derive(Default)]
struct HudSurface {
    frames: u32,
    last_text: String,
}

impl Surface2d for HudSurface {
    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
        self.frames += 1;
    }
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: &str) {}
    fn stroke_dashed_line(&mut self, _a: Vec2, _b: Vec2, _dash: &[f32], _w: f32, _c: &str) {}
    fn fill_text(&mut self, text: &str, _x: f32, _y: f32, _font: &str, _color: &str) {
        self.last_text = text.to_string();
    }
}

#[derive(Default)]
struct Overlay {
    visible: bool,
    text: String,
}

impl GameOverPanel for Overlay {
    fn show(&mut self, score_text: &str) {
        self.visible = true;
        self.text = score_text.to_string();
    }
    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Stand-in for requestAnimationFrame: counts outstanding frame requests
#[derive(Default)]
struct FrameQueue {
    pending: u32,
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> bool {
        self.pending += 1;
        true
    }
}

/// Run scheduled ticks until the loop stops or `max` ticks have run
fn run_loop(
    engine: &mut GameEngine,
    surface: &mut HudSurface,
    overlay: &mut Overlay,
    queue: &mut FrameQueue,
    max: u32,
) -> u32 {
    let mut ticks = 0;
    while queue.pending > 0 && ticks < max {
        queue.pending -= 1;
        engine.tick(surface, overlay, queue);
        ticks += 1;
    }
    ticks
}

fn quiet_config() -> Config {
    // No random traffic, so only hand-placed obstacles exist
    let mut config = Config::new();
    config.spawn_interval_initial = 1_000_000;
    config
}

#[test]
fn test_held_right_reaches_edge() {
    let config = Config::new();
    let mut world = World::new(&config);
    world.player.body.pos.x = 0.0;
    let input = InputState {
        move_left: false,
        move_right: true,
    };
    let mut rng = GameRng::new(3);
    let mut events = Events::new();

    for n in 1..=100u32 {
        step(&mut world, &input, &config, &mut rng, &mut events);
        if !world.is_running() {
            break;
        }
        let expected = (5.0 * n as f32).min(config.field_width - config.player_width);
        assert_eq!(world.player.x(), expected, "tick {n}");
    }
}

#[test]
fn test_obstacle_dodged_after_expected_ticks() {
    let config = quiet_config();
    let mut world = World::new(&config);
    let mut rng = GameRng::new(3);
    let mut events = Events::new();
    let input = InputState::new();

    let height = 61.0;
    world
        .obstacles
        .push(Obstacle::above_field(0.0, 40.0, height, 3.0));

    let ticks = ((config.field_height + height) / 3.0).ceil() as u32;
    for _ in 0..ticks - 1 {
        step(&mut world, &input, &config, &mut rng, &mut events);
    }
    assert_eq!(world.obstacles.len(), 1, "Still on the field one tick early");
    let before = world.score.points;

    step(&mut world, &input, &config, &mut rng, &mut events);

    assert!(world.obstacles.is_empty());
    assert_eq!(events.dodged, 1);
    // The final tick may also land on a survival bonus tick
    let bonus = if events.survival_bonus { 1 } else { 0 };
    assert_eq!(world.score.points, before + 10 + bonus);
}

#[test]
fn test_obstacle_landing_exactly_on_bottom_edge_needs_one_more_tick() {
    let config = quiet_config();
    let mut world = World::new(&config);
    let mut rng = GameRng::new(3);
    let mut events = Events::new();
    let input = InputState::new();

    // (600 + 60) / 3 = 220: after 220 ticks the top edge sits exactly on
    // the bottom of the field, which is still on the field
    world
        .obstacles
        .push(Obstacle::above_field(0.0, 40.0, 60.0, 3.0));

    for _ in 0..220 {
        step(&mut world, &input, &config, &mut rng, &mut events);
    }
    assert_eq!(world.obstacles.len(), 1);
    assert_eq!(world.obstacles[0].body.top(), config.field_height);

    step(&mut world, &input, &config, &mut rng, &mut events);
    assert!(world.obstacles.is_empty(), "Removed on tick 221");
    assert_eq!(events.dodged, 1);
}

#[test]
fn test_invariants_hold_under_random_input() {
    let config = Config::new();
    let mut engine = GameEngine::new(config.clone(), 77).unwrap();
    let mut steer = GameRng::new(78);
    let mut last_score = 0;
    let mut last_interval = engine.world().spawn.interval;

    for _ in 0..20_000 {
        if !engine.is_running() {
            break;
        }
        let input = engine.input_mut();
        input.move_left = steer.0.gen_bool(0.4);
        input.move_right = steer.0.gen_bool(0.4);

        engine.update();
        let world = engine.world();

        assert!(world.player.x() >= 0.0);
        assert!(world.player.x() <= config.field_width - config.player_width);
        assert!(world.score.points >= last_score, "Score never decreases");
        assert!(world.spawn.interval <= last_interval, "Ramp never relaxes");
        assert!(world.spawn.interval >= 45);
        assert!(world
            .obstacles
            .iter()
            .all(|o| !o.is_off_field(config.field_height)));

        last_score = world.score.points;
        last_interval = world.spawn.interval;
    }
}

#[test]
fn test_long_survival_bottoms_out_spawn_interval() {
    let config = Config::new();
    let mut world = World::new(&config);
    let mut rng = GameRng::new(11);
    let mut events = Events::new();

    // Keep the player alive by clearing traffic before it can reach the car
    for _ in 0..10_000 {
        step(&mut world, &InputState::new(), &config, &mut rng, &mut events);
        world.obstacles.retain(|o| o.body.top() < 100.0);
    }

    assert!(world.is_running());
    assert_eq!(world.spawn.interval, 45);
}

#[test]
fn test_collision_freezes_world() {
    let config = quiet_config();
    let mut world = World::new(&config);
    let mut rng = GameRng::new(3);
    let mut events = Events::new();
    let player = world.player.body;

    // Older obstacle about to be dodged; newer one about to hit
    let mut leaving = Obstacle::above_field(0.0, 40.0, 60.0, 4.0);
    leaving.body.pos.y = config.field_height - 1.0;
    world.obstacles.push(leaving);
    let mut hit = Obstacle::above_field(player.left(), 40.0, 60.0, 4.0);
    hit.body.pos.y = player.top() - 58.0;
    world.obstacles.push(hit);

    step(&mut world, &InputState::new(), &config, &mut rng, &mut events);

    assert!(events.collided);
    assert!(!world.is_running());
    assert_eq!(world.obstacles.len(), 2, "Leaving obstacle was never reached");
    assert_eq!(world.score.points, 0);
    assert_eq!(world.frame_count, 0, "Frame counter skipped on the crash tick");

    let frozen = world.clone();
    let steer = InputState {
        move_left: true,
        move_right: false,
    };
    for _ in 0..120 {
        step(&mut world, &steer, &config, &mut rng, &mut events);
    }
    assert_eq!(world, frozen, "Updates are no-ops once ended");
    assert_eq!(events, Events::new());
}

#[test]
fn test_game_over_then_restart() {
    let mut engine = GameEngine::new(Config::new(), 2026).unwrap();
    let mut surface = HudSurface::default();
    let mut overlay = Overlay::default();
    let mut queue = FrameQueue::default();

    engine.start(&mut queue);
    let ticks = run_loop(&mut engine, &mut surface, &mut overlay, &mut queue, 100_000);

    // Nobody steers, so traffic eventually lands on the car
    assert!(ticks < 100_000);
    assert_eq!(engine.phase(), Phase::Ended);
    assert_eq!(queue.pending, 0, "Loop stopped rescheduling");
    assert_eq!(surface.frames, ticks, "Final frame still rendered");
    assert!(overlay.visible);
    let final_score = engine.world().score.points;
    assert_eq!(overlay.text, format!("Score: {final_score}"));
    assert_eq!(surface.last_text, overlay.text);

    engine.key_down("ArrowLeft");
    engine.reset(&mut overlay, &mut queue);

    let config = engine.config().clone();
    let world = engine.world();
    assert!(world.is_running());
    assert_eq!(world.score.points, 0);
    assert!(world.obstacles.is_empty());
    assert_eq!(world.frame_count, 0);
    assert_eq!(world.spawn.interval, config.spawn_interval_initial);
    assert_eq!(world.player.x(), config.player_start_x());
    assert_eq!(*engine.input(), InputState::new());
    assert!(!overlay.visible);
    assert_eq!(queue.pending, 1, "Reset resumes the loop");

    let more = run_loop(&mut engine, &mut surface, &mut overlay, &mut queue, 10);
    assert_eq!(more, 10);
    assert!(engine.is_running());
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut engine = GameEngine::new(Config::new(), seed).unwrap();
        let mut queue = FrameQueue::default();
        engine.start(&mut queue);
        run_loop(
            &mut engine,
            &mut HudSurface::default(),
            &mut Overlay::default(),
            &mut queue,
            100_000,
        );
        engine.world().clone()
    };
    assert_eq!(play(42), play(42));
}
