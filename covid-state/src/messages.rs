//! User-facing texts.

pub const REGIONS_ERROR: &str = "Erro ao carregar estados. Tente novamente.";
pub const SUBREGIONS_ERROR: &str = "Erro ao carregar municípios. Tente novamente.";
pub const QUERY_ERROR: &str = "Erro ao consultar dados. Verifique os filtros e tente novamente.";
pub const QUERY_EMPTY: &str = "Nenhum dado encontrado para os filtros selecionados.";

pub fn query_success(count: usize) -> String {
    format!(
        "Consulta realizada com sucesso! Foram encontrados {} registros.",
        count
    )
}

/// Success line when a paging backend sent only part of the matches.
pub fn query_truncated(shown: usize, total: usize) -> String {
    format!(
        "Consulta realizada com sucesso! Exibindo {} de {} registros encontrados.",
        shown, total
    )
}

pub const PLOT_SUCCESS: &str = "Gráfico gerado com sucesso.";
pub const PLOT_EMPTY: &str = "Nenhum dado encontrado para o gráfico.";
pub const PLOT_ERROR: &str = "Erro ao gerar gráfico. Verifique os filtros e tente novamente.";

/// Error line for a failed management operation.
pub fn operation_error(detail: &str) -> String {
    format!("Erro: {}", detail)
}
