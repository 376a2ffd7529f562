/// Turns variable host frame time into whole simulation frames.
///
/// The physics advances by one discrete frame per step, so the host must call
/// it at a steady rate; this clock hands out that rate.
pub struct FrameClock {
    frame_dt: f32,
    max_catch_up: u32,
    accumulator: f32,
    frame: u64,
}

impl FrameClock {
    pub fn new(frame_dt: f32, max_catch_up: u32) -> Self {
        Self {
            frame_dt,
            max_catch_up: max_catch_up.max(1),
            accumulator: 0.0,
            frame: 0,
        }
    }

    /// Add elapsed host time. Returns how many frames to simulate now.
    /// Backlog beyond `max_catch_up` frames is dropped.
    pub fn accumulate(&mut self, elapsed: f32) -> u32 {
        let cap = self.frame_dt * self.max_catch_up as f32;
        self.accumulator = (self.accumulator + elapsed.max(0.0)).min(cap);
        let frames = (self.accumulator / self.frame_dt) as u32;
        self.accumulator -= frames as f32 * self.frame_dt;
        self.frame += frames as u64;
        frames
    }

    /// Fraction of a frame left over, for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.frame_dt
    }

    /// Total frames handed out so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
