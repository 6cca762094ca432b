#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{path::PathBuf, process};

mod area;
mod interact;

use area::OutputArea;

use bookfind::{api::open_library::OPEN_LIBRARY_URL, HttpClient, SearchClient, Submission, View};

use clap::{Args, Parser};
use eyre::{eyre, Result};
use log::trace;

fn main() {
    match try_main() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    }
}

fn try_main() -> Result<i32> {
    let Cli {
        query,
        global_opts:
            GlobalOpts {
                output,
                page,
                base_url,
                interact,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(usize::from(verbosity), quiet)?;

    let area = OutputArea::new(output, page);
    let base_url = base_url.unwrap_or_else(|| OPEN_LIBRARY_URL.to_owned());
    trace!("Using search API at '{base_url}'");

    let mut client: SearchClient<HttpClient, _> = SearchClient::with_base_url(area, base_url);

    if interact {
        trace!("Interact mode enabled");
        if let Some(query) = query {
            client.submit_query(&query)?;
        }
        interact::search_until_end_of_input(&mut client)?;
        return Ok(0);
    }

    let query = query.ok_or_else(|| eyre!("A query is required unless --interact is used"))?;

    match client.submit_query(&query)? {
        Submission::Shown(View::Failed(_)) => Ok(1),
        Submission::Ignored => {
            trace!("Nothing to search for");
            Ok(0)
        }
        _ => Ok(0),
    }
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "bookfind")]
#[clap(about = "Search the Open Library catalogue and render the matching books as HTML")]
#[clap(version, author)]
#[clap(arg_required_else_help = true)]
struct Cli {
    /// The text to search for, such as a title or an author
    query: Option<String>,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Write the results to this file instead of stdout
    ///
    /// The file is overwritten every time the results change, starting with a loading indicator
    /// while the request is in flight.
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Render a complete HTML page instead of only the results
    #[clap(long)]
    page: bool,

    /// Base URL of the search API
    #[clap(long, value_name = "URL")]
    base_url: Option<String>,

    /// Keep asking for queries until the end of input
    ///
    /// Each line entered is submitted as a new search, blank lines are ignored.
    #[clap(short, long)]
    interact: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only log errors, ignoring any use of --verbosity.
    #[clap(short, long)]
    quiet: bool,
}
