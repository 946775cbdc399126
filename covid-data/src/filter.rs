use crate::dates;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while turning raw form values into [`FilterCriteria`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Data inválida em {field}: '{value}'. Use AAAA-MM-DD.")]
    InvalidDate { field: &'static str, value: String },
}

/// Query constraints. `None` means "no constraint on that dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub region_code: Option<String>,
    pub subregion_name: Option<String>,
}

fn present(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn present_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, FormError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    dates::parse_date(value)
        .map(Some)
        .map_err(|_| FormError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

impl FilterCriteria {
    /// Build criteria from the raw values of the filter form.
    ///
    /// Empty inputs are dropped. Region and sub-region are kept verbatim.
    pub fn from_form(
        start_date: &str,
        end_date: &str,
        region_code: &str,
        subregion_name: &str,
    ) -> Result<Self, FormError> {
        Ok(Self {
            start_date: present_date("data_inicial", start_date)?,
            end_date: present_date("data_final", end_date)?,
            region_code: present(region_code),
            subregion_name: present(subregion_name),
        })
    }

    /// Query parameters for the present fields only, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(date) = &self.start_date {
            pairs.push(("data_inicial", dates::format_date(date)));
        }
        if let Some(date) = &self.end_date {
            pairs.push(("data_final", dates::format_date(date)));
        }
        if let Some(code) = self.region_code.as_ref().filter(|c| !c.is_empty()) {
            pairs.push(("estado", code.clone()));
        }
        if let Some(name) = self.subregion_name.as_ref().filter(|n| !n.is_empty()) {
            pairs.push(("municipio", name.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_has_no_constraints() {
        let criteria = FilterCriteria::from_form("", "", "", "").unwrap();
        assert_eq!(criteria, FilterCriteria::default());
        assert!(criteria.query_pairs().is_empty());
    }

    #[test]
    fn test_full_form_builds_all_pairs_in_order() {
        let criteria =
            FilterCriteria::from_form("2020-03-01", "2020-03-31", "SP", "São Paulo").unwrap();
        assert_eq!(
            criteria.query_pairs(),
            vec![
                ("data_inicial", "2020-03-01".to_string()),
                ("data_final", "2020-03-31".to_string()),
                ("estado", "SP".to_string()),
                ("municipio", "São Paulo".to_string()),
            ]
        );
    }

    #[test]
    fn test_partial_form_skips_absent_fields() {
        let criteria = FilterCriteria::from_form("", "2021-12-31", "RJ", "").unwrap();
        assert_eq!(
            criteria.query_pairs(),
            vec![
                ("data_final", "2021-12-31".to_string()),
                ("estado", "RJ".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_date_is_reported() {
        let err = FilterCriteria::from_form("31/12/2021", "", "", "").unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidDate {
                field: "data_inicial",
                value: "31/12/2021".to_string()
            }
        );
    }

    #[test]
    fn test_empty_strings_set_directly_are_skipped() {
        let criteria = FilterCriteria {
            region_code: Some(String::new()),
            subregion_name: Some(String::new()),
            ..Default::default()
        };
        assert!(criteria.query_pairs().is_empty());
    }
}
