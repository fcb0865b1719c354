//! District/municipality filter selection.

use samu_risk::TerritoryRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// An applied filter: optional district and optional municipality.
///
/// Both narrow the set; `None` means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub district: Option<String>,
    pub municipality: Option<String>,
}

impl FilterSelection {
    pub fn new(district: Option<String>, municipality: Option<String>) -> Self {
        Self {
            district: non_empty(district),
            municipality: non_empty(municipality),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.district.is_none() && self.municipality.is_none()
    }

    pub fn matches(&self, territory: &TerritoryRecord) -> bool {
        self.district
            .as_deref()
            .is_none_or(|d| territory.district == d)
            && self
                .municipality
                .as_deref()
                .is_none_or(|m| territory.municipality_name == m)
    }

    /// Territories matching the selection, in input order.
    pub fn apply(&self, territories: &[TerritoryRecord]) -> Vec<TerritoryRecord> {
        territories
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }

    /// Human-readable description. The municipality wins over the district.
    pub fn label(&self) -> String {
        match (&self.district, &self.municipality) {
            (_, Some(m)) => format!("Municipality: {}", m),
            (Some(d), None) => format!("District: {}", d),
            (None, None) => "Entire region".to_string(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn sorted_unique<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Holds the draft filter selection and the dropdown options it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterController {
    districts: Vec<String>,
    all_municipalities: Vec<String>,
    municipality_options: Vec<String>,
    selection: FilterSelection,
}

impl FilterController {
    pub fn new(territories: &[TerritoryRecord]) -> Self {
        let districts = sorted_unique(territories.iter().map(|t| t.district.as_str()));
        let all_municipalities =
            sorted_unique(territories.iter().map(|t| t.municipality_name.as_str()));
        Self {
            districts,
            municipality_options: all_municipalities.clone(),
            all_municipalities,
            selection: FilterSelection::default(),
        }
    }

    /// Select a district (or clear it with `None`).
    ///
    /// Resets the municipality and narrows the municipality options to
    /// those appearing in the district's territories.
    pub fn select_district(&mut self, territories: &[TerritoryRecord], district: Option<String>) {
        self.selection.district = non_empty(district);
        self.selection.municipality = None;
        self.municipality_options = match &self.selection.district {
            Some(d) => sorted_unique(
                territories
                    .iter()
                    .filter(|t| &t.district == d)
                    .map(|t| t.municipality_name.as_str()),
            ),
            None => self.all_municipalities.clone(),
        };
    }

    /// Select a municipality (or clear it with `None`).
    ///
    /// The value is not checked against the current options; a municipality
    /// outside the selected district simply yields an empty filtered set.
    pub fn select_municipality(&mut self, municipality: Option<String>) {
        self.selection.municipality = non_empty(municipality);
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    pub fn municipality_options(&self) -> &[String] {
        &self.municipality_options
    }
}
