//! Region and dependent sub-region dropdowns.

use covid_data::Region;

pub const REGION_PLACEHOLDER: &str = "Selecione um Estado";
pub const SUBREGION_PLACEHOLDER: &str = "Selecione um Município";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// State dropdown. Always starts with the "unselected" placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSelector {
    options: Vec<SelectOption>,
    selected: String,
}

impl Default for RegionSelector {
    fn default() -> Self {
        Self {
            options: vec![SelectOption::placeholder(REGION_PLACEHOLDER)],
            selected: String::new(),
        }
    }
}

impl RegionSelector {
    /// Replace every option with the placeholder plus one entry per region.
    /// The selection falls back to the placeholder.
    pub fn replace(&mut self, regions: &[Region]) {
        self.options = std::iter::once(SelectOption::placeholder(REGION_PLACEHOLDER))
            .chain(regions.iter().map(|r| SelectOption {
                value: r.code.clone(),
                label: r.name.clone(),
            }))
            .collect();
        self.selected.clear();
    }

    pub fn select(&mut self, code: &str) {
        self.selected = code.to_string();
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }
}

/// Municipality dropdown, gated on a region being selected.
///
/// Each reset bumps a generation so a list that arrives for an earlier
/// region selection can be recognised and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubregionSelector {
    options: Vec<SelectOption>,
    selected: String,
    enabled: bool,
    generation: u64,
}

impl Default for SubregionSelector {
    fn default() -> Self {
        Self {
            options: vec![SelectOption::placeholder(SUBREGION_PLACEHOLDER)],
            selected: String::new(),
            enabled: false,
            generation: 0,
        }
    }
}

impl SubregionSelector {
    /// Back to a lone placeholder, disabled. Returns the generation a
    /// subsequent load must present to [`SubregionSelector::populate`].
    pub fn reset(&mut self) -> u64 {
        self.options = vec![SelectOption::placeholder(SUBREGION_PLACEHOLDER)];
        self.selected.clear();
        self.enabled = false;
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Fill in the loaded names and enable the control. A list from an
    /// outdated generation is ignored and `false` returned.
    pub fn populate(&mut self, generation: u64, names: Vec<String>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.options.extend(names.into_iter().map(|name| SelectOption {
            label: name.clone(),
            value: name,
        }));
        self.enabled = true;
        true
    }

    pub fn select(&mut self, name: &str) {
        if self.enabled {
            self.selected = name.to_string();
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
