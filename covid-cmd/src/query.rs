//! Query-side commands: region lists, case records and chart series.

use crate::render;
use crate::terminal::{notice_line, report};
use crate::{export, CliController};
use anyhow::Context;
use covid_data::{Aggregation, ChartKind, FilterCriteria, PlotRequest};
use covid_state::{NoticeRegion, Outcome};
use log::info;

/// Print every state as `CODE<TAB>Name`.
pub async fn run_regions(controller: &CliController) -> anyhow::Result<()> {
    controller.load_regions().await;
    let ui = controller.state().borrow();
    report(&ui, NoticeRegion::Query)?;
    for option in ui.regions.options().iter().filter(|o| !o.value.is_empty()) {
        println!("{}\t{}", option.value, option.label);
    }
    Ok(())
}

/// Print the municipalities of `region`, one per line.
pub async fn run_subregions(controller: &CliController, region: &str) -> anyhow::Result<()> {
    if region.trim().is_empty() {
        anyhow::bail!("A state code is required");
    }
    controller.change_region(region).await;
    let ui = controller.state().borrow();
    report(&ui, NoticeRegion::Query)?;
    for option in ui.subregions.options().iter().filter(|o| !o.value.is_empty()) {
        println!("{}", option.label);
    }
    Ok(())
}

/// Raw filter values as typed on the command line. Empty means absent.
#[derive(Debug, Clone, Default)]
pub struct QueryArgs {
    pub from: String,
    pub to: String,
    pub region: String,
    pub subregion: String,
    pub page: usize,
    pub csv: Option<String>,
}

impl QueryArgs {
    pub fn criteria(&self) -> anyhow::Result<FilterCriteria> {
        Ok(FilterCriteria::from_form(
            &self.from,
            &self.to,
            &self.region,
            &self.subregion,
        )?)
    }
}

/// Fetch matching records, print page `args.page` and the pagination strip.
pub async fn run_query(controller: &CliController, args: &QueryArgs) -> anyhow::Result<()> {
    let criteria = args.criteria()?;
    let outcome = controller.submit_query(criteria).await;

    if outcome == Outcome::Succeeded && args.page != 1 && !controller.select_page(args.page) {
        let total = controller.state().borrow().query.total_pages();
        anyhow::bail!("Page {} does not exist (1 to {})", args.page, total.max(1));
    }

    let ui = controller.state().borrow();
    if outcome == Outcome::Succeeded {
        println!("{}", render::table(&ui.query.table()));
        let strip = render::pagination(&ui.query.pagination_controls());
        if !strip.is_empty() {
            println!("\n{}", strip);
        }
        println!();
    }
    report(&ui, NoticeRegion::Query)?;

    if let Some(path) = &args.csv {
        export::write_records_to_path(path, ui.query.results())
            .with_context(|| format!("Failed to write {}", path))?;
        info!("Wrote {} records to {}", ui.query.results().len(), path);
    }
    Ok(())
}

/// Fetch the chart series for `args` and print them as CSV on stdout.
/// The notice goes to stderr so the output can be piped.
pub async fn run_plot(
    controller: &CliController,
    args: &QueryArgs,
    chart: ChartKind,
    aggregation: Aggregation,
) -> anyhow::Result<()> {
    let request = PlotRequest {
        criteria: args.criteria()?,
        chart,
        aggregation,
    };
    controller.submit_plot(request).await;

    let ui = controller.state().borrow();
    if let Some(line) = notice_line(&ui, NoticeRegion::Query)? {
        eprintln!("{}", line);
    }
    if let Some(data) = ui.plot.data() {
        export::write_plot(std::io::stdout().lock(), data)?;
        info!("Wrote {} dates of {} series", data.dates.len(), data.series.len());
    }
    Ok(())
}
