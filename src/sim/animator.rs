//! Sprite animation cursor

#[derive(Debug, Clone)]
pub struct Animator {
    /// Timer increment per update
    pub play_speed: f32,
    /// Timer value at which the next frame is shown
    pub show_time: f32,
    frame_count: usize,
    timer: f32,
    index: usize,
}

impl Animator {
    pub fn new(play_speed: f32, show_time: f32, frame_count: usize) -> Self {
        Self {
            play_speed,
            show_time,
            frame_count,
            timer: 0.0,
            index: 0,
        }
    }

    /// Advance the timer, stepping to the next frame when it expires
    pub fn update(&mut self) {
        self.timer += self.play_speed;
        if self.timer >= self.show_time {
            self.timer = 0.0;
            if self.frame_count > 0 {
                self.index = (self.index + 1) % self.frame_count;
            }
        }
    }

    /// Index of the frame currently shown
    pub fn current_frame(&self) -> usize {
        self.index
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Back to the first frame. The timer keeps running.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
