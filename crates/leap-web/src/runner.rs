use leap_engine::{
    build_draw_list, DrawBuffer, FrameClock, HorizontalIntent, Intent, Level, LevelError, World,
};

/// DOM `keyCode` values the runner listens for.
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const LEFT: u32 = 37;
    pub const RIGHT: u32 = 39;
}

/// Keys currently held down. Movement follows held state, not key events.
#[derive(Debug, Default, Clone, Copy)]
struct HeldKeys {
    left: bool,
    right: bool,
    jump: bool,
}

impl HeldKeys {
    fn set(&mut self, key_code: u32, down: bool) {
        match key_code {
            keys::LEFT => self.left = down,
            keys::RIGHT => self.right = down,
            keys::SPACE => self.jump = down,
            _ => {}
        }
    }

    /// Left wins when both directions are held.
    fn horizontal(&self) -> HorizontalIntent {
        if self.left {
            HorizontalIntent::Left
        } else if self.right {
            HorizontalIntent::Right
        } else {
            HorizontalIntent::None
        }
    }
}

/// Drives a [`World`] from browser frame callbacks.
///
/// Each simulated frame samples the held keys, feeds them to the tracked
/// entity, then steps the world. The draw list is rebuilt once per tick.
pub struct PlatformerRunner {
    world: World,
    clock: FrameClock,
    keys: HeldKeys,
    draw: DrawBuffer,
}

impl PlatformerRunner {
    pub fn new(world: World) -> Self {
        let config = world.config();
        let clock = FrameClock::new(config.fixed_dt, config.max_catch_up_steps);
        let mut runner = Self {
            world,
            clock,
            keys: HeldKeys::default(),
            draw: DrawBuffer::new(),
        };
        build_draw_list(&runner.world, &mut runner.draw);
        runner
    }

    pub fn from_level_json(json: &str) -> Result<Self, LevelError> {
        let level = Level::from_json(json)?;
        Ok(Self::new(World::from_level(&level)?))
    }

    pub fn demo() -> Result<Self, LevelError> {
        Ok(Self::new(World::from_level(&Level::demo())?))
    }

    pub fn key_down(&mut self, key_code: u32) {
        self.keys.set(key_code, true);
    }

    pub fn key_up(&mut self, key_code: u32) {
        self.keys.set(key_code, false);
    }

    /// Advance by `dt` seconds of host time. Returns the frames simulated.
    pub fn tick(&mut self, dt: f32) -> u32 {
        let frames = self.clock.accumulate(dt);
        for _ in 0..frames {
            self.apply_held_keys();
            self.world.step();
        }
        build_draw_list(&self.world, &mut self.draw);
        frames
    }

    fn apply_held_keys(&mut self) {
        let Some(id) = self.world.tracked() else {
            return;
        };
        self.world
            .apply_intent(id, Intent::Horizontal(self.keys.horizontal()));
        if self.keys.jump {
            self.world.apply_intent(id, Intent::Jump);
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    // ---- Accessors for host reads ----

    pub fn draw_ptr(&self) -> *const f32 {
        self.draw.instances_ptr()
    }

    pub fn draw_count(&self) -> u32 {
        self.draw.instance_count()
    }

    pub fn draw_entity_start(&self) -> u32 {
        self.draw.entity_start
    }

    pub fn camera_x(&self) -> f32 {
        self.world.camera.offset().x
    }

    pub fn camera_y(&self) -> f32 {
        self.world.camera.offset().y
    }

    pub fn world_width(&self) -> f32 {
        self.world.config().world_width
    }

    pub fn world_height(&self) -> f32 {
        self.world.config().world_height
    }

    pub fn viewport_width(&self) -> f32 {
        self.world.config().viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.world.config().viewport_height
    }

    pub fn player_grounded(&self) -> bool {
        self.world.tracked_entity().is_some_and(|e| e.grounded)
    }

    /// Frames simulated since the runner started.
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    /// Leftover fraction of a frame, for host-side interpolation.
    pub fn frame_alpha(&self) -> f32 {
        self.clock.alpha()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn settled_runner() -> PlatformerRunner {
        let mut runner = PlatformerRunner::demo().unwrap();
        for _ in 0..100 {
            runner.tick(FRAME);
        }
        assert!(runner.player_grounded());
        runner
    }

    fn player_x(runner: &PlatformerRunner) -> f32 {
        runner.world().tracked_entity().unwrap().pos.x
    }

    #[test]
    fn tick_runs_whole_frames_only() {
        let mut runner = PlatformerRunner::demo().unwrap();
        assert_eq!(runner.tick(FRAME * 0.5), 0);
        assert_eq!(runner.world().frame(), 0);
        assert!(runner.frame_alpha() > 0.4);
        assert_eq!(runner.tick(FRAME * 0.6), 1);
        assert_eq!(runner.world().frame(), 1);
        assert_eq!(runner.frame(), runner.world().frame());
        assert!(runner.frame_alpha() < 0.2);
    }

    #[test]
    fn held_right_moves_player() {
        let mut runner = settled_runner();
        let start = player_x(&runner);
        runner.key_down(keys::RIGHT);
        runner.tick(FRAME);
        runner.tick(FRAME);
        assert_eq!(player_x(&runner), start + 10.0);

        runner.key_up(keys::RIGHT);
        runner.tick(FRAME);
        assert_eq!(player_x(&runner), start + 10.0);
    }

    #[test]
    fn left_wins_over_right() {
        let mut runner = settled_runner();
        let start = player_x(&runner);
        runner.key_down(keys::RIGHT);
        runner.key_down(keys::LEFT);
        runner.tick(FRAME);
        assert_eq!(player_x(&runner), start - 5.0);
    }

    #[test]
    fn space_jumps_from_ground() {
        let mut runner = settled_runner();
        runner.key_down(keys::SPACE);
        runner.tick(FRAME);
        let player = runner.world().tracked_entity().unwrap();
        assert!(!player.grounded);
        assert!(player.vel.y < 0.0);
    }

    #[test]
    fn draw_list_is_built_on_creation() {
        let runner = PlatformerRunner::demo().unwrap();
        assert!(runner.draw_count() > 0);
        assert!(runner.draw_entity_start() < runner.draw_count());
    }

    #[test]
    fn bad_level_json_is_reported() {
        assert!(matches!(
            PlatformerRunner::from_level_json("not json"),
            Err(LevelError::Json(_))
        ));
    }
}
