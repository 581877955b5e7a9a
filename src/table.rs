use crate::{Category, Station};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const COLUMNS: [&str; 5] = ["站点名称", "链接", "类型", "备注", "最后可用时间"];
const PLACEHOLDER: &str = "-";

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortPolicy {
    /// Free first, then newest first
    #[default]
    Category,

    /// Ascending `order`, unranked last, then newest first
    Rank,
}

/// Orders two stations under `policy`. Ties compare equal so a stable sort keeps
/// input order.
pub fn compare(policy: SortPolicy, a: &Station, b: &Station) -> Ordering {
    let primary = match policy {
        SortPolicy::Category => b.is_free.cmp(&a.is_free),
        SortPolicy::Rank => rank(a).cmp(&rank(b)),
    };

    primary.then_with(|| b.created_at.cmp(&a.created_at))
}

fn rank(station: &Station) -> i64 {
    station.order.unwrap_or(i64::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,

    pub link: String,

    pub category: &'static str,

    pub description: String,

    pub last_available_time: String,
}

impl From<&Station> for Row {
    fn from(station: &Station) -> Self {
        Row {
            name: station.name.clone(),
            link: format!("[{}]({})", station.clean_url(), station.url),
            category: station.category().label(),
            description: station.description().unwrap_or(PLACEHOLDER).to_string(),
            last_available_time: station
                .last_available_time()
                .unwrap_or(PLACEHOLDER)
                .to_string(),
        }
    }
}

impl Row {
    fn cells(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.link.as_str(),
            self.category,
            self.description.as_str(),
            self.last_available_time.as_str(),
        ]
    }
}

pub fn rows(stations: &[Station], filter: Option<Category>, policy: SortPolicy) -> Vec<Row> {
    let mut selected = stations
        .iter()
        .filter(|station| filter.map_or(true, |category| station.category() == category))
        .collect::<Vec<&Station>>();

    selected.sort_by(|a, b| compare(policy, a, b));

    selected.into_iter().map(Row::from).collect()
}

// NOTE: Cells are written as-is, a `|` inside a value is not escaped.
pub fn render_table(stations: &[Station], filter: Option<Category>, policy: SortPolicy) -> String {
    let mut lines = vec![line(COLUMNS), line([":---"; 5])];
    for row in rows(stations, filter, policy) {
        lines.push(line(row.cells()));
    }
    lines.join("\n")
}

fn line(cells: [&str; 5]) -> String {
    format!("| {} |", cells.join(" | "))
}
