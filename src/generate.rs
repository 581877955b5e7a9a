use crate::marker::{splice, splice_verbatim};
use crate::table::render_table;
use crate::{render_html, Category, Error, Generator, Layout, MarkerPair, Station};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Loaded,
    TablesRendered,
    ReadmeUpdated,
    HtmlRendered,
    TemplateUpdated,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Stage::Start => "start",
            Stage::Loaded => "loaded",
            Stage::TablesRendered => "tables rendered",
            Stage::ReadmeUpdated => "readme updated",
            Stage::HtmlRendered => "html rendered",
            Stage::TemplateUpdated => "template updated",
            Stage::Done => "done",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stations: usize,

    pub quarantined: usize,

    pub readme_bytes: usize,

    pub html_bytes: usize,
}

impl Generator {
    /// Loads the stations, rewrites the README tables and splices the rendered
    /// README into the HTML template.
    ///
    /// The README is written only after every table region was found, so a
    /// missing README marker leaves it untouched. A missing template marker
    /// stops the run after the README has already been written.
    pub fn generate(&self) -> Result<Report, Error> {
        let mut stage = Stage::Start;
        match self.run(&mut stage) {
            Ok(report) => Ok(report),
            Err(err) => {
                tracing::error!(after = %stage, "{}", err);
                Err(err)
            }
        }
    }

    fn run(&self, stage: &mut Stage) -> Result<Report, Error> {
        let dataset = self.load_stations()?;
        advance(stage, Stage::Loaded);
        tracing::info!(
            stations = dataset.stations.len(),
            quarantined = dataset.quarantined,
            "Read stations from {}",
            self.config.data.display()
        );

        let tables = self.render_tables(&dataset.stations);
        advance(stage, Stage::TablesRendered);

        let readme_path = &self.config.readme;
        let readme = self.read(readme_path)?;
        let readme = self.update_readme(&readme_path.display().to_string(), &readme, &tables)?;
        self.write(readme_path, &readme)?;
        advance(stage, Stage::ReadmeUpdated);

        let html = render_html(&readme);
        advance(stage, Stage::HtmlRendered);

        let template_path = &self.config.template;
        let template = self.read(template_path)?;
        let page = splice_verbatim(
            &template_path.display().to_string(),
            &template,
            &MarkerPair::README,
            &html,
        )?;
        self.write(template_path, &page)?;
        advance(stage, Stage::TemplateUpdated);

        advance(stage, Stage::Done);
        Ok(Report {
            stations: dataset.stations.len(),
            quarantined: dataset.quarantined,
            readme_bytes: readme.len(),
            html_bytes: html.len(),
        })
    }

    pub fn render_tables(&self, stations: &[Station]) -> Vec<(MarkerPair, String)> {
        let regions = match self.config.layout {
            Layout::Single => vec![(MarkerPair::LIST, None)],
            Layout::Split => vec![
                (MarkerPair::LIST_FREE, Some(Category::Free)),
                (MarkerPair::LIST_TOLL, Some(Category::Toll)),
            ],
        };

        regions
            .into_iter()
            .map(|(pair, filter)| (pair, render_table(stations, filter, self.config.sort)))
            .collect()
    }

    pub fn update_readme(
        &self,
        name: &str,
        readme: &str,
        tables: &[(MarkerPair, String)],
    ) -> Result<String, Error> {
        let mut updated = readme.to_string();
        for (pair, table) in tables {
            updated = splice(name, &updated, pair, table)?;
        }
        Ok(updated)
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    tracing::info!(from = %stage, to = %next, "Stage");
    *stage = next;
}
