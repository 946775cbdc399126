//! Paths of the backend endpoints, relative to the API host.

pub const REGIONS: &str = "/api/estados";
pub const SUBREGIONS: &str = "/api/municipios";
pub const QUERY: &str = "/api/consulta_dados";
pub const PLOT: &str = "/api/covid_data_for_plot";
pub const IMPORT: &str = "/api/importar_dataset";
pub const REFRESH: &str = "/api/atualizar_dados";
pub const PURGE: &str = "/api/limpar_base";

/// Query parameter carrying the region code on [`SUBREGIONS`].
pub const SUBREGION_REGION_PARAM: &str = "estado";

/// Join a base URL and an endpoint path without doubling the slash.
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_strips_trailing_slash() {
        assert_eq!(
            join("http://localhost:5000/", REGIONS),
            "http://localhost:5000/api/estados"
        );
        assert_eq!(
            join("http://localhost:5000", PURGE),
            "http://localhost:5000/api/limpar_base"
        );
    }
}
