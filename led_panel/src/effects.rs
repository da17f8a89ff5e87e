// effects.rs - Panel animations as frame generators
//
// Each call to `next_frame` draws one complete frame and returns how long
// it should stay up. `None` means the animation is over and nothing was
// drawn. Timing belongs to whoever calls `next_frame`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::driver::MatrixDriver;
use crate::panel::LedPanel;

pub const FRAME_HOLD: Duration = Duration::from_millis(100);
pub const FLASH_HOLD: Duration = Duration::from_millis(200);
pub const SPOT_HOLD: Duration = Duration::from_millis(10);

/// Inverts per flash: on and off, three times.
const FLASH_TOGGLES: u8 = 6;

pub trait Effect: Send {
    fn name(&self) -> &'static str;

    fn next_frame(&mut self, panel: &LedPanel, driver: &mut dyn MatrixDriver) -> Option<Duration>;

    /// Rewind to the first frame.
    fn reset(&mut self);
}

/// Rectangle outline that shrinks to the centre, or grows out past the
/// edges, one pixel per side per frame.
#[derive(Clone, Debug)]
pub struct Spiral {
    inward: bool,
    width: i32,
    height: i32,
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

impl Spiral {
    pub fn new(panel: &LedPanel, inward: bool) -> Self {
        let mut spiral = Self {
            inward,
            width: panel.width(),
            height: panel.height(),
            left: 0,
            right: 0,
            top: 0,
            bottom: 0,
        };
        spiral.reset();
        spiral
    }

    fn in_bounds(&self) -> bool {
        if self.inward {
            self.left <= self.right && self.top <= self.bottom
        } else {
            // Stops one pixel past every edge.
            self.left >= -1
                && self.right < self.width + 1
                && self.top >= -1
                && self.bottom < self.height + 1
        }
    }
}

impl Effect for Spiral {
    fn name(&self) -> &'static str {
        if self.inward { "spiral-in" } else { "spiral-out" }
    }

    fn next_frame(&mut self, panel: &LedPanel, driver: &mut dyn MatrixDriver) -> Option<Duration> {
        if !self.in_bounds() {
            return None;
        }
        let (left, right, top, bottom) = (self.left, self.right, self.top, self.bottom);
        let (first_row, last_row) = if self.inward { (top, bottom) } else { (bottom, top) };
        let (first_col, last_col) = if self.inward { (right, left) } else { (left, right) };

        driver.clear();
        for x in left..=right {
            panel.draw_point(driver, x, first_row, true);
        }
        for y in top..=bottom {
            panel.draw_point(driver, first_col, y, true);
        }
        for x in (left..=right).rev() {
            panel.draw_point(driver, x, last_row, true);
        }
        for y in (top..=bottom).rev() {
            panel.draw_point(driver, last_col, y, true);
        }

        let step = if self.inward { 1 } else { -1 };
        self.left += step;
        self.right -= step;
        self.top += step;
        self.bottom -= step;
        Some(FRAME_HOLD)
    }

    fn reset(&mut self) {
        self.left = 0;
        self.right = self.width - 1;
        self.top = 0;
        self.bottom = self.height - 1;
    }
}

/// Ring of pixels at a growing distance from the panel centre.
#[derive(Clone, Debug, Default)]
pub struct Wave {
    radius: i32,
}

impl Wave {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for Wave {
    fn name(&self) -> &'static str {
        "wave"
    }

    fn next_frame(&mut self, panel: &LedPanel, driver: &mut dyn MatrixDriver) -> Option<Duration> {
        let (width, height) = (panel.width(), panel.height());
        if self.radius > width.max(height) {
            return None;
        }
        let (center_x, center_y) = (width / 2, height / 2);

        driver.clear();
        for y in 0..height {
            for x in 0..width {
                let (dx, dy) = (x - center_x, y - center_y);
                let distance = ((dx * dx + dy * dy) as f64).sqrt() as i32;
                panel.draw_point(driver, x, y, distance == self.radius);
            }
        }

        self.radius += 1;
        Some(FRAME_HOLD)
    }

    fn reset(&mut self) {
        self.radius = 0;
    }
}

/// Blinks whatever is on the display by inverting it.
#[derive(Clone, Debug, Default)]
pub struct Flash {
    toggles: u8,
}

impl Flash {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for Flash {
    fn name(&self) -> &'static str {
        "flash"
    }

    fn next_frame(&mut self, _panel: &LedPanel, driver: &mut dyn MatrixDriver) -> Option<Duration> {
        if self.toggles >= FLASH_TOGGLES {
            return None;
        }
        driver.invert();
        self.toggles += 1;
        Some(FLASH_HOLD)
    }

    fn reset(&mut self) {
        self.toggles = 0;
    }
}

/// Walks a single lit pixel across the panel in reading order.
#[derive(Clone, Debug, Default)]
pub struct SpotRun {
    index: i32,
}

impl SpotRun {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for SpotRun {
    fn name(&self) -> &'static str {
        "spot-run"
    }

    fn next_frame(&mut self, panel: &LedPanel, driver: &mut dyn MatrixDriver) -> Option<Duration> {
        let width = panel.width();
        let total = width * panel.height();
        if self.index > total {
            return None;
        }
        if self.index == 0 {
            driver.clear();
        } else {
            let previous = self.index - 1;
            panel.draw_point(driver, previous % width, previous / width, false);
        }
        if self.index == total {
            self.index += 1;
            return None;
        }
        panel.draw_point(driver, self.index % width, self.index / width, true);
        self.index += 1;
        Some(SPOT_HOLD)
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}

/// The animations played when a game ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectKind {
    SpiralIn,
    SpiralOut,
    Wave,
    Flash,
}

impl EffectKind {
    pub const ALL: [EffectKind; 4] = [
        EffectKind::SpiralIn,
        EffectKind::SpiralOut,
        EffectKind::Wave,
        EffectKind::Flash,
    ];

    pub fn build(self, panel: &LedPanel) -> Box<dyn Effect> {
        match self {
            EffectKind::SpiralIn => Box::new(Spiral::new(panel, true)),
            EffectKind::SpiralOut => Box::new(Spiral::new(panel, false)),
            EffectKind::Wave => Box::new(Wave::new()),
            EffectKind::Flash => Box::new(Flash::new()),
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EffectKind::SpiralIn => "spiral-in",
            EffectKind::SpiralOut => "spiral-out",
            EffectKind::Wave => "wave",
            EffectKind::Flash => "flash",
        };
        f.write_str(name)
    }
}

/// Play `effect` to the end on the calling thread, sleeping between frames.
/// Returns the number of frames shown.
pub fn play_blocking(effect: &mut dyn Effect, panel: &LedPanel, driver: &mut dyn MatrixDriver) -> usize {
    let mut frames = 0;
    while let Some(hold) = effect.next_frame(panel, driver) {
        frames += 1;
        std::thread::sleep(hold);
    }
    debug!(effect = effect.name(), frames, "effect finished");
    frames
}
