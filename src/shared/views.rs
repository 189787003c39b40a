// Template rendering over a views directory.

use std::path::Path;
use std::sync::RwLock;

use tera::{Context, Tera};

/// Wraps the engine so handlers render by template name only. With
/// `watch` enabled the directory is re-read before every render, which is
/// the dev-time equivalent of the original engine's file watching.
pub struct ViewEngine {
    tera: RwLock<Tera>,
    watch: bool,
}

impl ViewEngine {
    pub fn new(views_dir: &Path, watch: bool) -> Result<Self, tera::Error> {
        let glob = format!("{}/**/*.html", views_dir.display());
        let tera = Tera::new(&glob)?;
        Ok(Self {
            tera: RwLock::new(tera),
            watch,
        })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<String, tera::Error> {
        if self.watch {
            self.tera
                .write()
                .expect("view engine lock poisoned")
                .full_reload()?;
        }
        self.tera
            .read()
            .expect("view engine lock poisoned")
            .render(template, context)
    }
}
