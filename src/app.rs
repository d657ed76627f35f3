use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::confetti::Burst;
use crate::verdict::{Assessment, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    AwaitingInput,
    ShowingResult,
}

pub struct App {
    pub view: View,

    // What's typed into the name box
    pub input_buffer: String,

    // Result of the last submission (None while awaiting input)
    pub assessment: Option<Assessment>,

    // When the current view appeared, drives the reveal transitions
    pub view_entered: Instant,

    // Running confetti, if any
    pub burst: Option<Burst>,
    confetti_colors: Vec<Color>,
    last_frame: Option<Instant>,

    pub config: AppConfig,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, confetti_colors: Vec<Color>) -> Self {
        Self {
            view: View::AwaitingInput,
            input_buffer: String::new(),
            assessment: None,
            view_entered: Instant::now(),
            burst: None,
            confetti_colors,
            last_frame: None,
            config,
            should_quit: false,
        }
    }

    /// Name shown on the result screen
    pub fn name(&self) -> Option<&str> {
        self.assessment.as_ref().map(|a| a.name.as_str())
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.assessment.as_ref().map(|a| a.verdict)
    }

    pub fn is_r_name(&self) -> bool {
        self.assessment.as_ref().map(|a| a.is_r_name).unwrap_or(false)
    }

    /// Time since the current view appeared
    pub fn view_elapsed(&self) -> Duration {
        self.view_entered.elapsed()
    }

    /// True while confetti still needs frames
    pub fn is_animating(&self) -> bool {
        self.burst.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('u') if self.view == View::AwaitingInput => self.input_buffer.clear(),
                _ => {}
            }
            return;
        }

        match self.view {
            View::AwaitingInput => self.handle_input_key(key),
            View::ShowingResult => self.handle_result_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !c.is_control() => self.input_buffer.push(c),
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            // "Try Another Name"
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Backspace => {
                self.reset()
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Submit the typed name. Blank input is ignored.
    /// Returns whether the view changed.
    pub fn submit(&mut self) -> bool {
        let Some(assessment) = Assessment::of(&self.input_buffer) else {
            return false;
        };

        tracing::debug!(
            "Assessed {:?}: {:?} ({:?})",
            assessment.name,
            assessment.verdict,
            assessment.variant
        );

        if assessment.verdict == Verdict::Yes && self.config.confetti {
            self.burst = Some(Burst::start(
                Instant::now(),
                self.config.confetti_duration(),
                self.confetti_colors.clone(),
            ));
            self.last_frame = None;
        }

        if self.config.notifications {
            crate::notify::announce(&assessment);
        }

        self.assessment = Some(assessment);
        self.view = View::ShowingResult;
        self.view_entered = Instant::now();
        true
    }

    /// Back to the name box with everything cleared.
    /// Running confetti is left to finish on its own.
    pub fn reset(&mut self) {
        tracing::debug!("Resetting after {:?} (r name: {})", self.name(), self.is_r_name());
        self.input_buffer.clear();
        self.assessment = None;
        self.view = View::AwaitingInput;
        self.view_entered = Instant::now();
    }

    /// Advance animations by one frame
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance animations if a frame interval has passed since the last frame.
    /// Extra calls in between (e.g. after key presses) are no-ops.
    pub fn tick_at(&mut self, now: Instant) {
        let Some(burst) = self.burst.as_mut() else {
            return;
        };

        if let Some(last) = self.last_frame {
            if now.saturating_duration_since(last) < self.config.frame_interval() {
                return;
            }
        }
        self.last_frame = Some(now);

        burst.frame(now);
        if burst.is_finished(now) {
            self.burst = None;
            self.last_frame = None;
        }
    }
}
