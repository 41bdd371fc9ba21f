//! TUI module for amscope
//!
//! Six charts in three rows (carrier, information, modulated) and two columns
//! (time domain, magnitude spectrum), with an editable parameter bar on top.

mod params;
pub mod state;
mod spectrum;
mod waveform;

use am_scope::{form, AmAnalysis, ModulationParams};
use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    DefaultTerminal, Frame,
};
use std::time::Duration;
use tracing::{debug, info};

use params::{render_params, render_status};
use spectrum::render_spectrum;
use state::{Field, Mode, Status};
use waveform::render_waveform;

/// UI application state
pub struct UiApp {
    /// Parses and bounds every parameter change
    form: form::ModulationForm,
    /// Analysis shown on start, restored by reset
    initial: AmAnalysis,
    /// Analysis currently on screen
    analysis: AmAnalysis,
    selected: Field,
    mode: Mode,
    status: Status,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    /// Create a new UI application around an already computed analysis
    pub fn new(form: form::ModulationForm, analysis: AmAnalysis) -> Self {
        Self {
            form,
            initial: analysis.clone(),
            analysis,
            selected: Field::CarrierFreq,
            mode: Mode::Browse,
            status: Status::default(),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match &mut self.mode {
            Mode::Edit(buffer) => match key {
                KeyCode::Enter => {
                    let text = std::mem::take(buffer);
                    self.mode = Mode::Browse;
                    self.submit_text(&text);
                }
                KeyCode::Esc => {
                    self.mode = Mode::Browse;
                    self.status = Status::default();
                }
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) => buffer.push(c),
                _ => {}
            },
            Mode::Browse => match key {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Tab | KeyCode::Down => self.selected = self.selected.next(),
                KeyCode::BackTab | KeyCode::Up => self.selected = self.selected.prev(),
                KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => self.nudge(true),
                KeyCode::Left | KeyCode::Char('-') => self.nudge(false),
                KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
                    self.status = Status::default();
                    self.mode = Mode::Edit(String::new());
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.analysis = self.initial.clone();
                    self.status = Status::info("reset");
                }
                _ => {}
            },
        }
    }

    fn nudge(&mut self, up: bool) {
        let params = &self.analysis.params;
        let value = self.selected.nudge(self.selected.get(params), up);
        let candidate = self.selected.with(params, value);
        self.apply(candidate);
    }

    /// Parse typed text through the form layer, then recompute.
    fn submit_text(&mut self, text: &str) {
        match form::parse_field(self.selected.form_name(), text) {
            Ok(value) => {
                let candidate = self.selected.with(&self.analysis.params, value);
                self.apply(candidate);
            }
            Err(err) => {
                debug!(%err, "rejected edit");
                self.status = Status::error(err.to_string());
            }
        }
    }

    /// Recompute for `candidate`; on failure keep the current analysis.
    fn apply(&mut self, candidate: ModulationParams) {
        match self.form.run(&candidate) {
            Ok(analysis) => {
                info!(samples = analysis.len(), "recomputed");
                self.analysis = analysis;
                self.status = Status::default();
            }
            Err(err) => {
                debug!(%err, "rejected parameters");
                self.status = Status::error(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let a = &self.analysis;

        // Parameter bar, three chart rows, status line
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Length(1),
            ])
            .split(area);

        render_params(
            frame,
            chunks[0],
            &a.params,
            a.len(),
            self.selected,
            &self.mode,
        );

        let rows = [
            ("Carrier", Color::Cyan, &a.carrier, &a.carrier_spectrum),
            ("Information", Color::Green, &a.info, &a.info_spectrum),
            ("Modulated", Color::Magenta, &a.modulated, &a.modulated_spectrum),
        ];
        for (row, (name, color, samples, spectrum)) in rows.into_iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[row + 1]);

            render_waveform(
                frame,
                columns[0],
                name,
                color,
                &a.t,
                samples,
                a.params.duration,
            );
            render_spectrum(
                frame,
                columns[1],
                &format!("{name} spectrum"),
                color,
                &a.freqs,
                spectrum,
                a.params.sample_rate,
            );
        }

        render_status(frame, chunks[4], &self.status, &self.mode);
    }
}
