use url::Url;

use super::common::{Query, QueryCommon};

/// Column the catalog's `criteria` parameter matches the search value against.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Criteria {
    /// Match against the product-number column. This is the default.
    #[default]
    FormNumber,
    /// Match against the title column.
    Title,
}

impl std::fmt::Display for Criteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Criteria::FormNumber => "formNumber",
                Criteria::Title => "title",
            }
        )?;
        Ok(())
    }
}

/// Query builder for the prior-year revision listing.
///
/// The listing is always requested sorted by revision date; direction and
/// pagination come from the common fields.
#[derive(Default)]
pub struct RevisionQuery {
    pub common: QueryCommon,
    pub value: String,
    pub criteria: Criteria,
}

impl RevisionQuery {
    /// Query matching a form identifier (e.g. "Form W-2") against the
    /// product-number column.
    pub fn form_number(value: &str) -> Self {
        RevisionQuery {
            value: value.to_string(),
            criteria: Criteria::FormNumber,
            ..Default::default()
        }
    }

    /// Query matching the search value against the title column.
    pub fn title(value: &str) -> Self {
        RevisionQuery {
            value: value.to_string(),
            criteria: Criteria::Title,
            ..Default::default()
        }
    }
}

impl Query for RevisionQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("sortColumn", "currentYearRevDate");
        url.query_pairs_mut()
            .append_pair("value", self.value.as_str());
        url.query_pairs_mut()
            .append_pair("criteria", self.criteria.to_string().as_str());
        url.query_pairs_mut()
            .append_pair("isDescending", self.common.sort_direction.is_descending());
        url
    }
}
