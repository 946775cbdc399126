//! The two mutually exclusive views of the page.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Query,
    Management,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Query, Section::Management];

    pub fn label(self) -> &'static str {
        match self {
            Section::Query => "Consulta de Dados",
            Section::Management => "Gerenciamento do Dataset",
        }
    }

    /// DOM id of the section container.
    pub fn dom_id(self) -> &'static str {
        match self {
            Section::Query => "consulta-dados",
            Section::Management => "gerenciamento-dataset",
        }
    }
}

/// Tracks which section is shown. The navigation control of the visible
/// section is the active one, so a single field covers both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionRouter {
    active: Section,
}

impl SectionRouter {
    pub fn show(&mut self, section: Section) {
        self.active = section;
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.active == section
    }
}
