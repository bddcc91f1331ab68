//! Tera rendering engine — [`TemplateEngine`] and [`Renderer`].
//!
//! # Template loading
//!
//! | Kind            | Example                      | Loaded                        |
//! |-----------------|------------------------------|-------------------------------|
//! | Page template   | `01.html` … `42.html`        | lazily, when the page renders |
//! | Helper template | `base.html`, `_nav.tera`     | eagerly, at construction      |
//!
//! Helpers are loaded up front so pages can `extends` / `include` them. Pages
//! are loaded one at a time, so a missing page is only reported when the run
//! reaches it.
//!
//! # Site functions
//!
//! Pages render with an empty context. The engine exposes site-level data
//! through registered functions instead:
//!
//! - `page_url(index=N)` → `"NN.html"`
//! - `page_title(name="NN.html")` → configured title or file stem
//! - `toc()` → `[{ index, name, title }, …]` for every page in the range

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use tera::{Tera, Value};

use folio_core::{Page, PageIndex, SiteConfig};

use crate::context::LayoutContext;
use crate::error::RenderError;

const HELPER_EXTENSIONS: &[&str] = &["html", "htm", "tera"];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

/// Every helper template under `dir`. Top-level `NN.html` files are pages,
/// whether or not they fall inside the configured range, and are skipped.
fn load_helper_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.is_dir() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    files.sort();

    let mut templates = Vec::new();
    for path in files {
        let is_helper = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| HELPER_EXTENSIONS.contains(&ext));
        if !is_helper {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        if PageIndex::from_file_name(&name).is_some() {
            continue;
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn missing_arg(function: &str, arg: &str) -> tera::Error {
    tera::Error::msg(format!("{function}: missing or invalid `{arg}` argument"))
}

fn stem_of(name: &str) -> String {
    name.strip_suffix(".html").unwrap_or(name).to_string()
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine bound to one template directory.
///
/// The two operations a run needs are [`TemplateEngine::load`] (acquire a
/// template by name) and [`TemplateEngine::render`] (render it with a context).
pub struct TemplateEngine {
    tera: Tera,
    template_dir: PathBuf,
    loaded: HashSet<String>,
}

impl TemplateEngine {
    /// Construct an engine over `template_dir`, eagerly loading every helper
    /// template. Page templates are left for [`TemplateEngine::load`].
    pub fn new(template_dir: &Path) -> Result<Self, RenderError> {
        let helpers = load_helper_templates(template_dir)?;
        let loaded: HashSet<String> = helpers.iter().map(|(name, _)| name.clone()).collect();

        let mut tera = Tera::default();
        if !helpers.is_empty() {
            let names: Vec<String> = helpers.iter().map(|(n, _)| n.clone()).collect();
            tera.add_raw_templates(helpers).map_err(|source| RenderError::Template {
                name: names.join(", "),
                source,
            })?;
            tracing::debug!("loaded {} helper template(s) from {}", names.len(), template_dir.display());
        }

        Ok(TemplateEngine {
            tera,
            template_dir: template_dir.to_path_buf(),
            loaded,
        })
    }

    /// Acquire template `name` from the template directory.
    ///
    /// Returns `RenderError::TemplateNotFound` if no such file exists and
    /// `RenderError::Template` if tera cannot parse it or resolve its
    /// `extends`/`import` targets. A failed load leaves the engine unchanged.
    /// Loading an already loaded template is a no-op.
    pub fn load(&mut self, name: &str) -> Result<(), RenderError> {
        if self.loaded.contains(name) {
            return Ok(());
        }
        let path = self.template_dir.join(name);
        if !path.is_file() {
            return Err(RenderError::TemplateNotFound {
                name: name.to_string(),
                dir: self.template_dir.clone(),
            });
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        // tera keeps a template registered even when its inheritance chain
        // fails to build, so stage it on a copy.
        let mut staged = self.tera.clone();
        staged
            .add_raw_template(name, &contents)
            .map_err(|source| RenderError::Template {
                name: name.to_string(),
                source,
            })?;
        self.tera = staged;
        self.loaded.insert(name.to_string());
        tracing::debug!("loaded template: {}", path.display());
        Ok(())
    }

    /// Render a loaded template with `ctx`.
    pub fn render(&self, name: &str, ctx: &tera::Context) -> Result<String, RenderError> {
        if !self.loaded.contains(name) {
            return Err(RenderError::TemplateNotFound {
                name: name.to_string(),
                dir: self.template_dir.clone(),
            });
        }
        self.tera
            .render(name, ctx)
            .map_err(|source| RenderError::Template {
                name: name.to_string(),
                source,
            })
    }

    /// Register `page_url`, `page_title` and `toc` for the pages of `config`.
    pub fn register_site_functions(&mut self, config: &SiteConfig) -> Result<(), RenderError> {
        let toc = tera::to_value(config.pages())?;
        self.tera
            .register_function("toc", move |_args: &HashMap<String, Value>| -> tera::Result<Value> {
                Ok(toc.clone())
            });

        self.tera
            .register_function("page_url", |args: &HashMap<String, Value>| -> tera::Result<Value> {
                let index = args
                    .get("index")
                    .and_then(Value::as_u64)
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| missing_arg("page_url", "index"))?;
                Ok(Value::String(PageIndex(index).file_name()))
            });

        let titles: BTreeMap<String, String> = config.titles.clone();
        self.tera
            .register_function("page_title", move |args: &HashMap<String, Value>| -> tera::Result<Value> {
                let name = args
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| missing_arg("page_title", "name"))?;
                let title = titles.get(name).cloned().unwrap_or_else(|| stem_of(name));
                Ok(Value::String(title))
            });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders the pages of one site: page template first, then the optional layout.
///
/// Create once per run with [`Renderer::new`] and feed it pages in order.
pub struct Renderer {
    engine: TemplateEngine,
    config: SiteConfig,
}

impl Renderer {
    /// Construct a [`Renderer`] for `config`.
    ///
    /// A configured layout that does not exist fails here, before any page is
    /// rendered.
    pub fn new(config: &SiteConfig) -> Result<Self, RenderError> {
        let mut engine = TemplateEngine::new(&config.template_dir)?;
        engine.register_site_functions(config)?;
        if let Some(layout) = config.layout.as_deref() {
            engine.load(layout)?;
        }
        Ok(Renderer {
            engine,
            config: config.clone(),
        })
    }

    /// Load and render one page. The page body always sees an empty context.
    pub fn render_page(&mut self, page: &Page) -> Result<String, RenderError> {
        self.engine.load(&page.name)?;
        let body = self.engine.render(&page.name, &tera::Context::new())?;

        let Some(layout) = self.config.layout.as_deref() else {
            return Ok(body);
        };
        let ctx = LayoutContext::for_page(&self.config.range(), page, body);
        self.engine.render(layout, &ctx.to_tera_context()?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
