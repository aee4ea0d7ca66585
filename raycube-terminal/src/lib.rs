/// Terminal front end: clears the console, draws each frame and paces the run
use crossterm::{
    cursor, execute, queue,
    terminal::{self, ClearType},
};
use log::{debug, info};
use raycube_core::{Frame, Hit, Mode, Sample, Scenario};
use std::io::{self, stdout, Stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Pause between sweep frames
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

pub const HIT_MESSAGE: &str = "Ray intersects cube.";
pub const MISS_MESSAGE: &str = "Ray does not intersect the cube.";

/// Line printed for one spin frame
pub fn spin_message(hit: Option<&Hit>) -> &'static str {
    match hit {
        Some(_) => HIT_MESSAGE,
        None => MISS_MESSAGE,
    }
}

/// Runs a scenario to completion, writing every frame to `out`
pub struct TerminalApp<W: Write> {
    scenario: Scenario,
    renderer: AsciiRenderer,
    out: W,
    frame_delay: Duration,
}

impl TerminalApp<Stdout> {
    pub fn stdout(scenario: Scenario, frame_delay: Duration) -> Self {
        Self::new(stdout(), scenario, frame_delay)
    }
}

impl<W: Write> TerminalApp<W> {
    pub fn new(out: W, scenario: Scenario, frame_delay: Duration) -> Self {
        Self {
            scenario,
            renderer: AsciiRenderer::new(0, 0),
            out,
            frame_delay,
        }
    }

    /// Play every frame and return how many were shown
    pub fn run(&mut self) -> io::Result<u32> {
        let mode = self.scenario.mode();
        if mode == Mode::Sweep {
            execute!(self.out, cursor::Hide)?;
        }

        let result = self.main_loop();

        // Cleanup
        if mode == Mode::Sweep {
            execute!(self.out, cursor::Show)?;
        }

        result
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn main_loop(&mut self) -> io::Result<u32> {
        let start = Instant::now();
        let mut shown = 0;

        while let Some(frame) = self.scenario.next() {
            self.present(&frame)?;
            shown += 1;

            // Only the sweep is paced, the spin prints as fast as it samples
            if matches!(frame.sample, Sample::Grid(_)) && !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }
        }

        info!("{} frames in {:?}", shown, start.elapsed());
        Ok(shown)
    }

    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        match &frame.sample {
            Sample::Grid(grid) => {
                queue!(
                    self.out,
                    terminal::Clear(ClearType::All),
                    cursor::MoveTo(0, 0)
                )?;
                self.renderer.rasterize(grid);
                self.renderer.draw(&mut self.out)?;
            }
            Sample::Single(hit) => {
                debug!("frame {}: {}", frame.state.index, spin_message(hit.as_ref()));
                writeln!(self.out, "{}", spin_message(hit.as_ref()))?;
            }
        }
        self.out.flush()
    }
}
