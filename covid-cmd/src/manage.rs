//! Dataset management commands.

use crate::terminal::report;
use crate::CliController;
use covid_data::{Operation, OperationRequest};
use covid_state::{NoticeRegion, Outcome};

pub async fn run_import(controller: &CliController, file: Option<String>) -> anyhow::Result<()> {
    let request = OperationRequest { file_path: file };
    finish(
        controller,
        controller.run_operation_with(Operation::Import, request).await,
    )
}

pub async fn run_operation(controller: &CliController, operation: Operation) -> anyhow::Result<()> {
    finish(controller, controller.run_operation(operation).await)
}

fn finish(controller: &CliController, outcome: Outcome) -> anyhow::Result<()> {
    if outcome == Outcome::Skipped {
        println!("Operação cancelada.");
        return Ok(());
    }
    report(&controller.state().borrow(), NoticeRegion::Management)
}
