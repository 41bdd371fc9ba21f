//! AmScope - application builder and runner

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing::info;

use am_scope::{form::ModulationForm, ModulationParams};

use super::ui::UiApp;

/// Main application builder
pub struct AmScope {
    params: ModulationParams,
    form: ModulationForm,
}

impl AmScope {
    /// Create a new scope with the default parameters
    pub fn new() -> Self {
        Self {
            params: ModulationParams::default(),
            form: ModulationForm::new(),
        }
    }

    /// Set the parameters shown on start
    pub fn params(mut self, params: ModulationParams) -> Self {
        self.params = params;
        self
    }

    /// Cap the sample count of every recomputation (`None` for no cap)
    pub fn max_samples(mut self, limit: Option<usize>) -> Self {
        self.form = self.form.max_samples(limit);
        self
    }

    /// Run the application (takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        // Fail before touching the terminal so the error prints normally
        let analysis = self
            .form
            .run(&self.params)
            .wrap_err("initial parameters rejected")?;
        info!(samples = analysis.len(), "starting scope");

        let mut terminal = ratatui::init();
        let res = UiApp::new(self.form, analysis).run(&mut terminal);
        ratatui::restore();
        res
    }
}

impl Default for AmScope {
    fn default() -> Self {
        Self::new()
    }
}
