//! Command implementations for the COVID-19 dashboard CLI.
//!
//! Every subcommand drives the same controller as the web app, with the
//! state kept in a `RefCell` and the terminal standing in for the browser.
//! Each command prints the notification it leaves behind and fails when
//! that notification is an error.

use clap::{Subcommand, ValueEnum};
use covid_api::HttpBackend;
use covid_state::{Controller, UiState};
use std::cell::RefCell;
use std::rc::Rc;

pub mod export;
pub mod manage;
pub mod query;
pub mod render;
pub mod terminal;

use terminal::TerminalShell;

pub type CliController = Controller<HttpBackend, Rc<RefCell<UiState>>, TerminalShell>;

#[derive(Subcommand)]
pub enum Command {
    /// List the states that have data
    Regions,

    /// List the municipalities of one state
    Subregions {
        /// State code, e.g. SP
        region: String,
    },

    /// Query case records and print one page of them
    Query {
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// State code
        #[arg(short = 'r', long)]
        region: Option<String>,

        /// Municipality name
        #[arg(short = 's', long)]
        subregion: Option<String>,

        /// Page to print
        #[arg(short = 'p', long, default_value_t = 1)]
        page: usize,

        /// Also write every matching record to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Print daily or cumulative case and death series as CSV
    Plot {
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// State code
        #[arg(short = 'r', long)]
        region: Option<String>,

        /// Municipality name
        #[arg(short = 's', long)]
        subregion: Option<String>,

        /// Daily counts or running totals
        #[arg(short = 'k', long, value_enum, default_value_t = ChartArg::Daily)]
        kind: ChartArg,

        /// One series per state or per municipality
        #[arg(short = 'g', long, value_enum, default_value_t = GroupArg::None)]
        aggregation: GroupArg,
    },

    /// Import a new dataset on the server
    Import {
        /// Source file on the server side
        #[arg(short = 'f', long)]
        file: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Re-read the existing dataset
    Refresh {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete every stored record. Irreversible.
    Purge {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartArg {
    Daily,
    Cumulative,
}

impl From<ChartArg> for covid_data::ChartKind {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::Daily => covid_data::ChartKind::Daily,
            ChartArg::Cumulative => covid_data::ChartKind::Cumulative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupArg {
    None,
    State,
    City,
}

impl From<GroupArg> for covid_data::Aggregation {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::None => covid_data::Aggregation::None,
            GroupArg::State => covid_data::Aggregation::State,
            GroupArg::City => covid_data::Aggregation::City,
        }
    }
}

fn controller(base_url: &str, assume_yes: bool) -> CliController {
    Controller::new(
        HttpBackend::new(base_url),
        Rc::new(RefCell::new(UiState::new())),
        TerminalShell::new(assume_yes),
    )
}

pub async fn run(command: Command, base_url: &str) -> anyhow::Result<()> {
    match command {
        Command::Regions => query::run_regions(&controller(base_url, false)).await,
        Command::Subregions { region } => {
            query::run_subregions(&controller(base_url, false), &region).await
        }
        Command::Query {
            from,
            to,
            region,
            subregion,
            page,
            csv,
        } => {
            let args = query::QueryArgs {
                from: from.unwrap_or_default(),
                to: to.unwrap_or_default(),
                region: region.unwrap_or_default(),
                subregion: subregion.unwrap_or_default(),
                page,
                csv,
            };
            query::run_query(&controller(base_url, false), &args).await
        }
        Command::Plot {
            from,
            to,
            region,
            subregion,
            kind,
            aggregation,
        } => {
            let args = query::QueryArgs {
                from: from.unwrap_or_default(),
                to: to.unwrap_or_default(),
                region: region.unwrap_or_default(),
                subregion: subregion.unwrap_or_default(),
                page: 1,
                csv: None,
            };
            query::run_plot(
                &controller(base_url, false),
                &args,
                kind.into(),
                aggregation.into(),
            )
            .await
        }
        Command::Import { file, yes } => {
            manage::run_import(&controller(base_url, yes), file).await
        }
        Command::Refresh { yes } => {
            manage::run_operation(&controller(base_url, yes), covid_data::Operation::Refresh).await
        }
        Command::Purge { yes } => {
            manage::run_operation(&controller(base_url, yes), covid_data::Operation::Purge).await
        }
    }
}
