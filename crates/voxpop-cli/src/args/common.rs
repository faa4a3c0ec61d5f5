use chrono::NaiveDate;
use clap::Args;

use voxpop_types::FilterCriteria;

use super::enums::SortOrder;

/// Filter flags shared by the view-producing commands.
#[derive(Debug, Clone, Args)]
pub struct CriteriaArgs {
    /// Substring match against name, email and message
    #[arg(long)]
    pub query: Option<String>,

    /// Keep only records in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Earliest local date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest local date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Row order
    #[arg(long, default_value = "newest")]
    pub sort: SortOrder,
}

impl CriteriaArgs {
    pub fn resolve(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new().sort(self.sort.into());
        if let Some(query) = &self.query {
            criteria = criteria.query(query.clone());
        }
        if let Some(category) = &self.category {
            criteria = criteria.category(category.clone());
        }
        if let Some(from) = self.from {
            criteria = criteria.since(from);
        }
        if let Some(to) = self.to {
            criteria = criteria.until(to);
        }
        criteria
    }
}
