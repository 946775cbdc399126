//! Async operations of the dashboard.
//!
//! Each operation reads what it needs from the state, awaits the backend,
//! and applies the outcome back to the state in one synchronous update.
//! No state borrow is held across an `.await`, so the single-threaded
//! ordering of the event loop is the only ordering there is.

use crate::messages;
use crate::notification::{DismissTicket, NoticeRegion, Severity};
use crate::plot::ResultView;
use crate::section::Section;
use crate::state::UiState;
use covid_api::Backend;
use covid_data::{FilterCriteria, Operation, OperationRequest, PlotRequest};
use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared, mutable access to the [`UiState`].
pub trait StateCell {
    fn update<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R;
}

impl StateCell for Rc<RefCell<UiState>> {
    fn update<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T: StateCell> StateCell for &T {
    fn update<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        (**self).update(f)
    }
}

/// The host environment: user prompts and timers.
pub trait Shell {
    /// Ask the user to accept `prompt`. `false` cancels the operation.
    fn confirm(&self, prompt: &str) -> bool;

    /// Arrange for `ticket` to be applied to the state's notifications
    /// once the notification timeout has elapsed.
    fn schedule_dismiss(&self, ticket: DismissTicket);
}

impl<T: Shell> Shell for &T {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }

    fn schedule_dismiss(&self, ticket: DismissTicket) {
        (**self).schedule_dismiss(ticket)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    /// Nothing was applied: the user declined, no request was needed, or a
    /// newer request superseded this one.
    Skipped,
}

#[derive(Clone)]
pub struct Controller<B, S, H> {
    backend: B,
    state: S,
    shell: H,
}

impl<B: Backend, S: StateCell, H: Shell> Controller<B, S, H> {
    pub fn new(backend: B, state: S, shell: H) -> Self {
        Self {
            backend,
            state,
            shell,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    fn notify(&self, region: NoticeRegion, message: impl Into<String>, severity: Severity) {
        let ticket = self
            .state
            .update(|s| s.notifications.notify(region, message, severity));
        self.shell.schedule_dismiss(ticket);
    }

    pub fn show_section(&self, section: Section) {
        self.state.update(|s| s.section.show(section));
    }

    /// Fill the region selector. On failure the selector keeps its options.
    pub async fn load_regions(&self) -> Outcome {
        match self.backend.regions().await {
            Ok(regions) => {
                info!("Loaded {} regions", regions.len());
                self.state.update(|s| s.regions.replace(&regions));
                Outcome::Succeeded
            }
            Err(e) => {
                error!("Failed to load regions: {}", e);
                self.notify(NoticeRegion::Query, messages::REGIONS_ERROR, Severity::Error);
                Outcome::Failed
            }
        }
    }

    /// Select a region and reload the dependent sub-region list.
    pub async fn change_region(&self, code: &str) -> Outcome {
        self.state.update(|s| s.regions.select(code));
        self.load_subregions(code).await
    }

    /// Reset the sub-region selector, then load the list for `code`.
    ///
    /// The reset happens before the first await; an empty `code` stops
    /// there with the selector disabled and no request sent.
    pub async fn load_subregions(&self, code: &str) -> Outcome {
        let generation = self.state.update(|s| s.subregions.reset());
        if code.is_empty() {
            return Outcome::Skipped;
        }

        match self.backend.subregions(code).await {
            Ok(names) => {
                let count = names.len();
                if self
                    .state
                    .update(|s| s.subregions.populate(generation, names))
                {
                    info!("Loaded {} sub-regions for {}", count, code);
                    Outcome::Succeeded
                } else {
                    debug!("Dropping outdated sub-region list for {}", code);
                    Outcome::Skipped
                }
            }
            Err(e) => {
                if !self.state.update(|s| s.subregions.is_current(generation)) {
                    debug!("Ignoring outdated sub-region failure for {}: {}", code, e);
                    return Outcome::Skipped;
                }
                error!("Failed to load sub-regions for {}: {}", code, e);
                self.notify(NoticeRegion::Query, messages::SUBREGIONS_ERROR, Severity::Error);
                Outcome::Failed
            }
        }
    }

    pub fn select_subregion(&self, name: &str) {
        self.state.update(|s| s.subregions.select(name));
    }

    /// Build criteria from the form and submit them.
    pub async fn submit_form(&self) -> Outcome {
        match self.state.update(|s| s.criteria()) {
            Ok(criteria) => self.submit_query(criteria).await,
            Err(e) => {
                warn!("Rejected filter form: {}", e);
                self.notify(NoticeRegion::Query, e.to_string(), Severity::Error);
                Outcome::Failed
            }
        }
    }

    /// Run one query and replace the result set on success.
    ///
    /// Only the latest submission applies its outcome; an earlier one that
    /// resolves afterwards is dropped, loading indicator included.
    pub async fn submit_query(&self, criteria: FilterCriteria) -> Outcome {
        let ticket = self.state.update(|s| {
            s.notifications.hide(NoticeRegion::Query);
            s.view = ResultView::Table;
            s.query.begin()
        });

        match self.backend.query_records(&criteria).await {
            Ok(set) => {
                let count = set.records.len();
                let total = set.total();
                let truncated = set.is_truncated();
                if !self.state.update(|s| s.query.accept(ticket, set.records)) {
                    debug!("Dropping superseded query result ({} records)", count);
                    return Outcome::Skipped;
                }
                info!("Query returned {} records", count);
                if truncated {
                    self.notify(
                        NoticeRegion::Query,
                        messages::query_truncated(count, total),
                        Severity::Success,
                    );
                } else if count == 0 {
                    self.notify(NoticeRegion::Query, messages::QUERY_EMPTY, Severity::Info);
                } else {
                    self.notify(
                        NoticeRegion::Query,
                        messages::query_success(count),
                        Severity::Success,
                    );
                }
                Outcome::Succeeded
            }
            Err(e) => {
                if !self.state.update(|s| s.query.reject(ticket)) {
                    debug!("Ignoring superseded query failure: {}", e);
                    return Outcome::Skipped;
                }
                error!("Query failed: {}", e);
                self.notify(NoticeRegion::Query, messages::QUERY_ERROR, Severity::Error);
                Outcome::Failed
            }
        }
    }

    /// Build a chart request from the form and the chart options, then
    /// submit it.
    pub async fn submit_plot_form(&self) -> Outcome {
        match self.state.update(|s| s.plot_request()) {
            Ok(request) => self.submit_plot(request).await,
            Err(e) => {
                warn!("Rejected filter form: {}", e);
                self.notify(NoticeRegion::Query, e.to_string(), Severity::Error);
                Outcome::Failed
            }
        }
    }

    /// Fetch the chart series for `request`.
    ///
    /// Follows the query's latest-wins rule. A new chart switches the
    /// results area to the chart view.
    pub async fn submit_plot(&self, request: PlotRequest) -> Outcome {
        let ticket = self.state.update(|s| {
            s.notifications.hide(NoticeRegion::Query);
            s.plot.begin()
        });

        match self.backend.plot_data(&request).await {
            Ok(data) => {
                let empty = data.is_empty();
                let series = data.series.len();
                let applied = self.state.update(|s| {
                    let applied = s.plot.accept(ticket, data);
                    if applied {
                        s.view = ResultView::Chart;
                    }
                    applied
                });
                if !applied {
                    debug!("Dropping superseded chart ({} series)", series);
                    return Outcome::Skipped;
                }
                info!("Chart returned {} series", series);
                if empty {
                    self.notify(NoticeRegion::Query, messages::PLOT_EMPTY, Severity::Info);
                } else {
                    self.notify(NoticeRegion::Query, messages::PLOT_SUCCESS, Severity::Success);
                }
                Outcome::Succeeded
            }
            Err(e) => {
                if !self.state.update(|s| s.plot.reject(ticket)) {
                    debug!("Ignoring superseded chart failure: {}", e);
                    return Outcome::Skipped;
                }
                error!("Chart request failed: {}", e);
                self.notify(NoticeRegion::Query, messages::PLOT_ERROR, Severity::Error);
                Outcome::Failed
            }
        }
    }

    pub fn show_view(&self, view: ResultView) {
        self.state.update(|s| s.view = view);
    }

    /// Show another page of the stored result set. No request is made.
    pub fn select_page(&self, page: usize) -> bool {
        self.state.update(|s| s.query.select_page(page))
    }

    pub async fn run_operation(&self, operation: Operation) -> Outcome {
        self.run_operation_with(operation, OperationRequest::default())
            .await
    }

    /// Confirm, then run a dataset operation and report its outcome in the
    /// management notification area.
    pub async fn run_operation_with(
        &self,
        operation: Operation,
        request: OperationRequest,
    ) -> Outcome {
        if !self.shell.confirm(operation.confirmation_prompt()) {
            info!("{:?} declined by user", operation);
            return Outcome::Skipped;
        }

        self.notify(
            NoticeRegion::Management,
            operation.progress_message(),
            Severity::Info,
        );

        match self.backend.run_operation(operation, &request).await {
            Ok(message) => {
                info!("{:?} succeeded: {}", operation, message);
                if operation == Operation::Purge {
                    self.state.update(|s| s.query.clear_results());
                }
                self.notify(NoticeRegion::Management, message, Severity::Success);
                Outcome::Succeeded
            }
            Err(e) => {
                error!("{:?} failed: {}", operation, e);
                let detail = e.user_message(operation.error_fallback());
                self.notify(
                    NoticeRegion::Management,
                    messages::operation_error(detail),
                    Severity::Error,
                );
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Notice;
    use crate::pagination::ControlKind;
    use crate::table::{TableBody, NO_DATA_MESSAGE};
    use covid_api::{ApiError, Result};
    use covid_data::{FieldValue, PlotData, PlotSeries, Record, RecordSet, Region};
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    struct FakeBackend {
        calls: RefCell<Vec<String>>,
        regions: Option<Vec<Region>>,
        subregions: Option<Vec<String>>,
        records: Option<RecordSet>,
        plot: Option<PlotData>,
        operation: std::result::Result<String, Option<String>>,
    }

    impl FakeBackend {
        fn healthy() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                regions: Some(vec![
                    Region::new("SP", "São Paulo"),
                    Region::new("AM", "Amazonas"),
                ]),
                subregions: Some(vec!["Campinas".into(), "Santos".into()]),
                records: Some(RecordSet::complete(records(23))),
                plot: Some(chart(3)),
                operation: Ok("Base de dados limpa com sucesso.".into()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    fn failure(message: Option<String>) -> ApiError {
        ApiError::Status {
            status: 500,
            message,
        }
    }

    impl Backend for FakeBackend {
        async fn regions(&self) -> Result<Vec<Region>> {
            self.calls.borrow_mut().push("regions".into());
            self.regions.clone().ok_or_else(|| failure(None))
        }

        async fn subregions(&self, region_code: &str) -> Result<Vec<String>> {
            self.calls
                .borrow_mut()
                .push(format!("subregions {}", region_code));
            self.subregions.clone().ok_or_else(|| failure(None))
        }

        async fn query_records(&self, criteria: &FilterCriteria) -> Result<RecordSet> {
            self.calls
                .borrow_mut()
                .push(format!("query {:?}", criteria.query_pairs()));
            self.records.clone().ok_or_else(|| failure(None))
        }

        async fn plot_data(&self, request: &PlotRequest) -> Result<PlotData> {
            self.calls
                .borrow_mut()
                .push(format!("plot {:?}", request.query_pairs()));
            self.plot.clone().ok_or_else(|| failure(None))
        }

        async fn run_operation(
            &self,
            operation: Operation,
            request: &OperationRequest,
        ) -> Result<String> {
            self.calls
                .borrow_mut()
                .push(format!("{:?} {:?}", operation, request.file_path));
            self.operation.clone().map_err(failure)
        }
    }

    struct ScriptedShell {
        answer: bool,
        prompts: RefCell<Vec<String>>,
        scheduled: RefCell<Vec<DismissTicket>>,
    }

    impl ScriptedShell {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                prompts: RefCell::new(Vec::new()),
                scheduled: RefCell::new(Vec::new()),
            }
        }
    }

    impl Shell for ScriptedShell {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer
        }

        fn schedule_dismiss(&self, ticket: DismissTicket) {
            self.scheduled.borrow_mut().push(ticket);
        }
    }

    fn records(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| Record {
                date: Some("2020-07-01".into()),
                state: Some("SP".into()),
                city: Some(format!("city-{i}").into()),
                confirmed_cases: Some(FieldValue::Integer(i as i64 * 10)),
                deaths: Some(FieldValue::Integer(0)),
                new_cases: Some(FieldValue::Integer(i as i64)),
                new_deaths: None,
            })
            .collect()
    }

    fn chart(days: usize) -> PlotData {
        PlotData {
            dates: (1..=days).map(|d| format!("2020-07-{d:02}")).collect(),
            series: vec![PlotSeries {
                label: "Total".into(),
                cases: (0..days).map(|d| Some(d as f64 * 100.0)).collect(),
                deaths: (0..days).map(|d| Some(d as f64)).collect(),
            }],
        }
    }

    type TestController<'a> =
        Controller<&'a FakeBackend, Rc<RefCell<UiState>>, &'a ScriptedShell>;

    fn controller<'a>(
        backend: &'a FakeBackend,
        shell: &'a ScriptedShell,
    ) -> (TestController<'a>, Rc<RefCell<UiState>>) {
        let state = Rc::new(RefCell::new(UiState::new()));
        (Controller::new(backend, state.clone(), shell), state)
    }

    fn notice(state: &Rc<RefCell<UiState>>, region: NoticeRegion) -> Option<Notice> {
        state.borrow().notifications.current(region).cloned()
    }

    #[tokio::test]
    async fn test_load_regions_fills_selector() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        assert_eq!(ctrl.load_regions().await, Outcome::Succeeded);
        let values: Vec<_> = state
            .borrow()
            .regions
            .options()
            .iter()
            .map(|o| o.value.clone())
            .collect();
        assert_eq!(values, vec!["", "SP", "AM"]);
        assert!(notice(&state, NoticeRegion::Query).is_none());
    }

    #[tokio::test]
    async fn test_load_regions_failure_keeps_options() {
        let backend = FakeBackend {
            regions: None,
            ..FakeBackend::healthy()
        };
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        assert_eq!(ctrl.load_regions().await, Outcome::Failed);
        assert_eq!(state.borrow().regions.options().len(), 1);
        let shown = notice(&state, NoticeRegion::Query).unwrap();
        assert_eq!(shown.severity, Severity::Error);
        assert_eq!(shown.message, messages::REGIONS_ERROR);
        assert!(notice(&state, NoticeRegion::Management).is_none());
    }

    #[tokio::test]
    async fn test_empty_region_disables_subregions_without_request() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        assert_eq!(ctrl.change_region("SP").await, Outcome::Succeeded);
        assert!(state.borrow().subregions.is_enabled());

        assert_eq!(ctrl.change_region("").await, Outcome::Skipped);
        let ui = state.borrow();
        assert!(!ui.subregions.is_enabled());
        assert_eq!(ui.subregions.options().len(), 1);
        assert_eq!(backend.calls(), vec!["subregions SP"]);
    }

    #[tokio::test]
    async fn test_subregion_failure_leaves_selector_disabled() {
        let backend = FakeBackend {
            subregions: None,
            ..FakeBackend::healthy()
        };
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        assert_eq!(ctrl.change_region("AM").await, Outcome::Failed);
        assert!(!state.borrow().subregions.is_enabled());
        assert_eq!(
            notice(&state, NoticeRegion::Query).unwrap().message,
            messages::SUBREGIONS_ERROR
        );
    }

    #[tokio::test]
    async fn test_query_renders_first_page_and_count() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        assert_eq!(
            ctrl.submit_query(FilterCriteria::default()).await,
            Outcome::Succeeded
        );

        let ui = state.borrow();
        assert!(!ui.query.is_loading());
        let TableBody::Rows(rows) = ui.query.table() else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].cells[2], "city-1");
        assert_eq!(rows[9].cells[2], "city-10");
        assert_eq!(rows[0].cells[4], "0");
        assert_eq!(rows[0].cells[6], "N/A");

        let controls = ui.query.pagination_controls();
        let labels: Vec<_> = controls.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Anterior", "1", "2", "3", "Próxima"]);
        assert!(controls[0].disabled);
        assert!(controls[1].active);
        assert!(!controls[4].disabled);

        let shown = ui.notifications.current(NoticeRegion::Query).unwrap();
        assert_eq!(shown.severity, Severity::Success);
        assert_eq!(
            shown.message,
            "Consulta realizada com sucesso! Foram encontrados 23 registros."
        );
    }

    #[tokio::test]
    async fn test_empty_query_shows_placeholder_and_info() {
        let backend = FakeBackend {
            records: Some(RecordSet::complete(Vec::new())),
            ..FakeBackend::healthy()
        };
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        ctrl.submit_query(FilterCriteria::default()).await;

        let ui = state.borrow();
        assert_eq!(
            ui.query.table(),
            TableBody::Placeholder {
                message: NO_DATA_MESSAGE,
                colspan: 7
            }
        );
        assert!(ui.query.pagination_controls().is_empty());
        let shown = ui.notifications.current(NoticeRegion::Query).unwrap();
        assert_eq!(shown.severity, Severity::Info);
        assert_eq!(shown.message, messages::QUERY_EMPTY);
    }

    #[tokio::test]
    async fn test_partial_page_reports_server_total() {
        let backend = FakeBackend {
            records: Some(RecordSet {
                records: records(20),
                total_records: Some(5000),
            }),
            ..FakeBackend::healthy()
        };
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        assert_eq!(
            ctrl.submit_query(FilterCriteria::default()).await,
            Outcome::Succeeded
        );
        let ui = state.borrow();
        assert_eq!(ui.query.results().len(), 20);
        assert_eq!(
            ui.notifications.current(NoticeRegion::Query).unwrap().message,
            "Consulta realizada com sucesso! Exibindo 20 de 5000 registros encontrados."
        );
    }

    #[tokio::test]
    async fn test_query_failure_preserves_previous_results() {
        let mut backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let state = Rc::new(RefCell::new(UiState::new()));
        {
            let ctrl = Controller::new(&backend, state.clone(), &shell);
            ctrl.submit_query(FilterCriteria::default()).await;
            assert!(ctrl.select_page(2));
        }

        backend.records = None;
        let ctrl = Controller::new(&backend, state.clone(), &shell);
        assert_eq!(
            ctrl.submit_query(FilterCriteria::default()).await,
            Outcome::Failed
        );

        let ui = state.borrow();
        assert!(!ui.query.is_loading());
        assert_eq!(ui.query.results().len(), 23);
        assert_eq!(ui.query.current_page(), 2);
        assert_eq!(ui.query.table(), TableBody::Cleared);
        let shown = ui.notifications.current(NoticeRegion::Query).unwrap();
        assert_eq!(shown.severity, Severity::Error);
        assert_eq!(shown.message, messages::QUERY_ERROR);
    }

    #[tokio::test]
    async fn test_query_sends_only_present_filters() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        state.borrow_mut().form.start_date = "2020-05-01".into();
        state.borrow_mut().regions.select("SP");
        assert_eq!(ctrl.submit_form().await, Outcome::Succeeded);
        assert_eq!(
            backend.calls(),
            vec![r#"query [("data_inicial", "2020-05-01"), ("estado", "SP")]"#]
        );
    }

    #[tokio::test]
    async fn test_bad_date_sends_nothing() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        state.borrow_mut().form.start_date = "01/05/2020".into();
        assert_eq!(ctrl.submit_form().await, Outcome::Failed);
        assert!(backend.calls().is_empty());
        assert_eq!(
            notice(&state, NoticeRegion::Query).unwrap().severity,
            Severity::Error
        );
    }

    #[tokio::test]
    async fn test_page_change_is_local() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        ctrl.submit_query(FilterCriteria::default()).await;
        assert!(ctrl.select_page(3));
        assert!(!ctrl.select_page(4));

        let ui = state.borrow();
        assert_eq!(ui.query.table().row_count(), 3);
        let next = ui.query.pagination_controls().pop().unwrap();
        assert_eq!(next.kind, ControlKind::Next);
        assert!(next.disabled);
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_purge_clears_result_set() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        ctrl.submit_query(FilterCriteria::default()).await;
        ctrl.select_page(2);
        assert_eq!(ctrl.run_operation(Operation::Purge).await, Outcome::Succeeded);

        let ui = state.borrow();
        assert!(ui.query.results().is_empty());
        assert_eq!(ui.query.current_page(), 1);
        assert_eq!(ui.query.table().row_count(), 1);
        assert!(ui.query.pagination_controls().is_empty());
        let shown = ui.notifications.current(NoticeRegion::Management).unwrap();
        assert_eq!(shown.severity, Severity::Success);
        assert_eq!(shown.message, "Base de dados limpa com sucesso.");
        assert_eq!(
            *shell.prompts.borrow(),
            vec![Operation::Purge.confirmation_prompt().to_string()]
        );
    }

    #[tokio::test]
    async fn test_declined_operation_is_noop() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(false);
        let (ctrl, state) = controller(&backend, &shell);

        let before = state.borrow().notifications.clone();
        for operation in Operation::ALL {
            assert_eq!(ctrl.run_operation(operation).await, Outcome::Skipped);
        }
        assert!(backend.calls().is_empty());
        assert_eq!(state.borrow().notifications, before);
        assert!(shell.scheduled.borrow().is_empty());
        assert_eq!(shell.prompts.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_purge_reports_server_message_and_keeps_data() {
        let backend = FakeBackend {
            operation: Err(Some("database is locked".into())),
            ..FakeBackend::healthy()
        };
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        ctrl.submit_query(FilterCriteria::default()).await;
        assert_eq!(ctrl.run_operation(Operation::Purge).await, Outcome::Failed);

        let ui = state.borrow();
        assert_eq!(ui.query.results().len(), 23);
        let shown = ui.notifications.current(NoticeRegion::Management).unwrap();
        assert_eq!(shown.severity, Severity::Error);
        assert_eq!(shown.message, "Erro: database is locked");
    }

    #[tokio::test]
    async fn test_failed_refresh_without_message_uses_fallback() {
        let backend = FakeBackend {
            operation: Err(None),
            ..FakeBackend::healthy()
        };
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        ctrl.run_operation(Operation::Refresh).await;
        assert_eq!(
            notice(&state, NoticeRegion::Management).unwrap().message,
            "Erro: Erro ao atualizar dados."
        );
    }

    #[tokio::test]
    async fn test_import_forwards_file_path() {
        let backend = FakeBackend {
            operation: Ok("Dataset importado com sucesso de x.csv.".into()),
            ..FakeBackend::healthy()
        };
        let shell = ScriptedShell::answering(true);
        let (ctrl, _) = controller(&backend, &shell);

        let request = OperationRequest {
            file_path: Some("x.csv".into()),
        };
        assert_eq!(
            ctrl.run_operation_with(Operation::Import, request).await,
            Outcome::Succeeded
        );
        assert_eq!(backend.calls(), vec![r#"Import Some("x.csv")"#]);
    }

    #[tokio::test]
    async fn test_notifications_are_scheduled_for_dismissal() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        ctrl.run_operation(Operation::Refresh).await;
        let tickets = shell.scheduled.borrow().clone();
        // In-progress notice, then the result.
        assert_eq!(tickets.len(), 2);

        let mut ui = state.borrow_mut();
        assert!(!ui.notifications.dismiss(tickets[0]));
        assert!(ui.notifications.is_visible(NoticeRegion::Management));
        assert!(ui.notifications.dismiss(tickets[1]));
        assert!(!ui.notifications.is_visible(NoticeRegion::Management));
    }

    #[tokio::test]
    async fn test_show_section() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        ctrl.show_section(Section::Management);
        assert!(state.borrow().section.is_visible(Section::Management));
        assert!(!state.borrow().section.is_visible(Section::Query));
    }

    #[tokio::test]
    async fn test_plot_switches_to_chart_view() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        state.borrow_mut().regions.select("SP");
        state.borrow_mut().plot.chart = covid_data::ChartKind::Cumulative;
        assert_eq!(ctrl.submit_plot_form().await, Outcome::Succeeded);

        let ui = state.borrow();
        assert_eq!(ui.view, ResultView::Chart);
        assert!(!ui.plot.is_loading());
        assert_eq!(ui.plot.data().map(|d| d.dates.len()), Some(3));
        let shown = ui.notifications.current(NoticeRegion::Query).unwrap();
        assert_eq!(shown.severity, Severity::Success);
        assert_eq!(shown.message, messages::PLOT_SUCCESS);
        assert_eq!(
            backend.calls(),
            vec![
                r#"plot [("estado", "SP"), ("chart_type", "Casos Acumulados vs. Óbitos Acumulados"), ("aggregation", "Nenhum")]"#
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_plot_is_info() {
        let backend = FakeBackend {
            plot: Some(PlotData::default()),
            ..FakeBackend::healthy()
        };
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        assert_eq!(ctrl.submit_plot_form().await, Outcome::Succeeded);
        let shown = notice(&state, NoticeRegion::Query).unwrap();
        assert_eq!(shown.severity, Severity::Info);
        assert_eq!(shown.message, messages::PLOT_EMPTY);
    }

    #[tokio::test]
    async fn test_plot_failure_keeps_table_view() {
        let backend = FakeBackend {
            plot: None,
            ..FakeBackend::healthy()
        };
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        ctrl.submit_query(FilterCriteria::default()).await;
        assert_eq!(ctrl.submit_plot_form().await, Outcome::Failed);

        let ui = state.borrow();
        assert_eq!(ui.view, ResultView::Table);
        assert!(!ui.plot.is_loading());
        assert!(ui.plot.data().is_none());
        assert_eq!(ui.query.results().len(), 23);
        let shown = ui.notifications.current(NoticeRegion::Query).unwrap();
        assert_eq!(shown.severity, Severity::Error);
        assert_eq!(shown.message, messages::PLOT_ERROR);
    }

    #[tokio::test]
    async fn test_new_query_returns_to_table_view() {
        let backend = FakeBackend::healthy();
        let shell = ScriptedShell::answering(true);
        let (ctrl, state) = controller(&backend, &shell);

        ctrl.submit_plot_form().await;
        assert_eq!(state.borrow().view, ResultView::Chart);
        ctrl.show_view(ResultView::Table);
        assert_eq!(state.borrow().view, ResultView::Table);
        ctrl.show_view(ResultView::Chart);

        ctrl.submit_query(FilterCriteria::default()).await;
        assert_eq!(state.borrow().view, ResultView::Table);
    }

    /// Replies are held until the test releases them, in any order.
    struct GatedBackend {
        queries: RefCell<VecDeque<oneshot::Receiver<Option<RecordSet>>>>,
        subregions: RefCell<VecDeque<oneshot::Receiver<Option<Vec<String>>>>>,
    }

    impl GatedBackend {
        fn new() -> Self {
            Self {
                queries: RefCell::new(VecDeque::new()),
                subregions: RefCell::new(VecDeque::new()),
            }
        }

        fn gate_query(&self) -> oneshot::Sender<Option<RecordSet>> {
            let (tx, rx) = oneshot::channel();
            self.queries.borrow_mut().push_back(rx);
            tx
        }

        fn gate_subregions(&self) -> oneshot::Sender<Option<Vec<String>>> {
            let (tx, rx) = oneshot::channel();
            self.subregions.borrow_mut().push_back(rx);
            tx
        }
    }

    impl Backend for GatedBackend {
        async fn regions(&self) -> Result<Vec<Region>> {
            Ok(Vec::new())
        }

        async fn subregions(&self, _region_code: &str) -> Result<Vec<String>> {
            let gate = self.subregions.borrow_mut().pop_front();
            match gate {
                Some(rx) => rx.await.ok().flatten().ok_or_else(|| failure(None)),
                None => Err(failure(None)),
            }
        }

        async fn query_records(&self, _criteria: &FilterCriteria) -> Result<RecordSet> {
            let gate = self.queries.borrow_mut().pop_front();
            match gate {
                Some(rx) => rx.await.ok().flatten().ok_or_else(|| failure(None)),
                None => Err(failure(None)),
            }
        }

        async fn plot_data(&self, _request: &PlotRequest) -> Result<PlotData> {
            Ok(PlotData::default())
        }

        async fn run_operation(
            &self,
            _operation: Operation,
            _request: &OperationRequest,
        ) -> Result<String> {
            Ok(String::new())
        }
    }

    /// Give every branch of a `join!` a few polls.
    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    fn sorted(mut outcomes: Vec<Outcome>) -> Vec<Outcome> {
        outcomes.sort_by_key(|o| *o as u8);
        outcomes
    }

    #[tokio::test]
    async fn test_older_query_reply_after_newer_is_dropped() {
        let backend = GatedBackend::new();
        let older = backend.gate_query();
        let newer = backend.gate_query();
        let shell = ScriptedShell::answering(true);
        let state = Rc::new(RefCell::new(UiState::new()));
        let ctrl = Controller::new(&backend, state.clone(), &shell);

        let release = async {
            settle().await;
            let _ = newer.send(Some(RecordSet::complete(records(3))));
            settle().await;
            {
                let ui = state.borrow();
                assert_eq!(ui.query.results().len(), 3);
                assert!(!ui.query.is_loading());
            }
            let _ = older.send(Some(RecordSet::complete(records(30))));
        };
        let (a, b, ()) = tokio::join!(
            ctrl.submit_query(FilterCriteria::default()),
            ctrl.submit_query(FilterCriteria::default()),
            release
        );

        assert_eq!(sorted(vec![a, b]), vec![Outcome::Succeeded, Outcome::Skipped]);
        let ui = state.borrow();
        assert_eq!(ui.query.results().len(), 3);
        assert!(!ui.query.is_loading());
        assert_eq!(
            ui.notifications.current(NoticeRegion::Query).unwrap().message,
            messages::query_success(3)
        );
        // Only the applied reply scheduled a dismissal.
        assert_eq!(shell.scheduled.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_older_query_reply_first_keeps_loading() {
        let backend = GatedBackend::new();
        let older = backend.gate_query();
        let newer = backend.gate_query();
        let shell = ScriptedShell::answering(true);
        let state = Rc::new(RefCell::new(UiState::new()));
        let ctrl = Controller::new(&backend, state.clone(), &shell);

        let release = async {
            settle().await;
            let _ = older.send(Some(RecordSet::complete(records(30))));
            settle().await;
            {
                let ui = state.borrow();
                assert!(ui.query.is_loading());
                assert!(ui.query.results().is_empty());
                assert!(ui.notifications.current(NoticeRegion::Query).is_none());
            }
            let _ = newer.send(Some(RecordSet::complete(Vec::new())));
        };
        let (a, b, ()) = tokio::join!(
            ctrl.submit_query(FilterCriteria::default()),
            ctrl.submit_query(FilterCriteria::default()),
            release
        );

        assert_eq!(sorted(vec![a, b]), vec![Outcome::Succeeded, Outcome::Skipped]);
        let ui = state.borrow();
        assert!(!ui.query.is_loading());
        assert!(ui.query.results().is_empty());
        let shown = ui.notifications.current(NoticeRegion::Query).unwrap();
        assert_eq!(shown.severity, Severity::Info);
        assert_eq!(shown.message, messages::QUERY_EMPTY);
    }

    #[tokio::test]
    async fn test_older_query_failure_is_silent() {
        let backend = GatedBackend::new();
        let older = backend.gate_query();
        let newer = backend.gate_query();
        let shell = ScriptedShell::answering(true);
        let state = Rc::new(RefCell::new(UiState::new()));
        let ctrl = Controller::new(&backend, state.clone(), &shell);

        let release = async {
            settle().await;
            let _ = newer.send(Some(RecordSet::complete(records(12))));
            settle().await;
            let _ = older.send(None);
        };
        let (a, b, ()) = tokio::join!(
            ctrl.submit_query(FilterCriteria::default()),
            ctrl.submit_query(FilterCriteria::default()),
            release
        );

        assert_eq!(sorted(vec![a, b]), vec![Outcome::Succeeded, Outcome::Skipped]);
        let ui = state.borrow();
        assert_eq!(ui.query.results().len(), 12);
        let shown = ui.notifications.current(NoticeRegion::Query).unwrap();
        assert_eq!(shown.severity, Severity::Success);
        assert_eq!(shown.message, messages::query_success(12));
    }

    #[tokio::test]
    async fn test_older_subregion_list_is_dropped() {
        let backend = GatedBackend::new();
        let for_sp = backend.gate_subregions();
        let for_am = backend.gate_subregions();
        let shell = ScriptedShell::answering(true);
        let state = Rc::new(RefCell::new(UiState::new()));
        let ctrl = Controller::new(&backend, state.clone(), &shell);

        let release = async {
            settle().await;
            let _ = for_am.send(Some(vec!["Manaus".into()]));
            settle().await;
            let _ = for_sp.send(None);
        };
        let (sp, am, ()) = tokio::join!(ctrl.change_region("SP"), ctrl.change_region("AM"), release);

        assert_eq!(sorted(vec![sp, am]), vec![Outcome::Succeeded, Outcome::Skipped]);
        let ui = state.borrow();
        let values: Vec<_> = ui.subregions.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "Manaus"]);
        assert!(ui.subregions.is_enabled());
        assert!(ui.notifications.current(NoticeRegion::Query).is_none());
    }
}
