use std::io::{self, BufRead, IsTerminal};

use bookfind::{api::Client, ResultsArea, SearchClient};

use dialoguer::Input;
use eyre::{Context, Result};
use log::trace;

/// Submits every line of input as a search until the input ends.
///
/// A terminal gets a prompt where pressing Enter submits the query, piped input is read one
/// query per line.
pub fn search_until_end_of_input<C, A>(client: &mut SearchClient<C, A>) -> Result<()>
where
    C: Client,
    A: ResultsArea,
{
    if io::stdin().is_terminal() {
        while let Some(input) = user_input("Search books")? {
            client.submit_query(&input)?;
        }
    } else {
        for line in io::stdin().lock().lines() {
            let line = line.wrap_err("Cannot read query from stdin")?;
            client.submit_query(&line)?;
        }
    }

    trace!("End of input reached");
    Ok(())
}

fn user_input(prompt: &str) -> Result<Option<String>> {
    match Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
    {
        Ok(input) => Ok(Some(input)),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(err) => Err(err).wrap_err("User input cancelled"),
    }
}
