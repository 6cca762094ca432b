use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use bookfind::{render, Error, ErrorKind, ResultsArea, View};

use log::{info, trace};

/// Where the results are shown.
#[derive(Debug)]
pub enum OutputArea {
    /// Results are printed to stdout.
    ///
    /// Printed output cannot be taken back, so the loading indicator is only logged and each
    /// finished search is printed once.
    Stdout { page: bool },
    /// Results are written to a file which is overwritten on every change.
    File { path: PathBuf, page: bool },
}

impl OutputArea {
    #[must_use]
    pub fn new(path: Option<PathBuf>, page: bool) -> Self {
        match path {
            Some(path) => Self::File { path, page },
            None => Self::Stdout { page },
        }
    }
}

impl ResultsArea for OutputArea {
    fn show(&mut self, view: &View) -> Result<(), Error> {
        match self {
            Self::Stdout { page } => {
                if matches!(view, View::Loading) {
                    info!("Searching books...");
                    return Ok(());
                }

                let html = render_view(view, *page);
                writeln!(io::stdout().lock(), "{html}")
                    .map_err(|e| Error::wrap(ErrorKind::Output, e))
            }
            Self::File { path, page } => {
                trace!("Writing results to '{}'", path.display());
                fs::write(path.as_path(), render_view(view, *page)).map_err(|e| {
                    Error::new(
                        ErrorKind::Output,
                        format!("Cannot write results to '{}': {e}", path.display()),
                    )
                })
            }
        }
    }
}

fn render_view(view: &View, page: bool) -> String {
    if page {
        render::page(view)
    } else {
        render::render(view)
    }
}
