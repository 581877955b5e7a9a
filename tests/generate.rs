use stationlist::{Config, Error, Generator, Layout, SortPolicy};
use std::fs;
use std::path::Path;

const LIST: &str = r#"{
  "stations": [
    {"name": "B", "url": "https://x.test/b", "is_free": false, "created_at": "2024-06-01"},
    {"name": "A", "url": "https://x.test/a?k=1", "is_free": true, "created_at": "2024-01-01"}
  ]
}"#;

const README: &str = "# Stations\n\nSee \"below\".\n\n<!-- LISTSTART -->\nstale\n<!-- LISTEND -->\n\nFooter\n";

const TEMPLATE: &str = "<html><body>\n<!-- READMESTART -->old<!-- READMEEND -->\n</body></html>\n";

fn site(dir: &Path, list: &str, readme: &str, template: &str) -> Config {
    fs::write(dir.join("list.json"), list).unwrap();
    fs::write(dir.join("README.MD"), readme).unwrap();
    fs::write(dir.join("index.html"), template).unwrap();
    Config::default().within(dir)
}

#[test]
fn test_single_layout_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = site(dir.path(), LIST, README, TEMPLATE);
    let report = Generator::new(config.clone()).generate().unwrap();
    assert_eq!(report.stations, 2);
    assert_eq!(report.quarantined, 0);

    let readme = fs::read_to_string(&config.readme).unwrap();
    assert_eq!(
        readme,
        "# Stations\n\nSee \"below\".\n\n<!-- LISTSTART -->\n\n\
         | 站点名称 | 链接 | 类型 | 备注 | 最后可用时间 |\n\
         | :--- | :--- | :--- | :--- | :--- |\n\
         | A | [https://x.test/a](https://x.test/a?k=1) | 免费 | - | - |\n\
         | B | [https://x.test/b](https://x.test/b) | 收费 | - | - |\n\n\
         <!-- LISTEND -->\n\nFooter\n"
    );
    assert_eq!(report.readme_bytes, readme.len());

    let page = fs::read_to_string(&config.template).unwrap();
    assert!(page.starts_with("<html><body>\n<!-- READMESTART --><h1>Stations</h1>"));
    assert!(page.ends_with("<!-- READMEEND -->\n</body></html>\n"));
    assert!(page.contains("<table>"));
    assert!(page.contains("href=\"https://x.test/a?k=1\""));
    assert!(page.contains("\u{201c}below\u{201d}"));
    assert!(page.contains("<p>Footer</p>"));
    assert!(!page.contains("old"));
}

#[test]
fn test_regeneration_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let config = site(dir.path(), LIST, README, TEMPLATE);
    let generator = Generator::new(config.clone());

    generator.generate().unwrap();
    let readme = fs::read_to_string(&config.readme).unwrap();
    let page = fs::read_to_string(&config.template).unwrap();

    generator.generate().unwrap();
    assert_eq!(fs::read_to_string(&config.readme).unwrap(), readme);
    assert_eq!(fs::read_to_string(&config.template).unwrap(), page);
}

#[test]
fn test_split_layout() {
    let dir = tempfile::tempdir().unwrap();
    let readme = "## Free\n<!-- LISTFREESTART --><!-- LISTFREEEND -->\n\
                  ## Toll\n<!-- LISTTOLLSTART --><!-- LISTTOLLEND -->\n";
    let config = Config {
        layout: Layout::Split,
        sort: SortPolicy::Rank,
        ..site(dir.path(), LIST, readme, TEMPLATE)
    };
    Generator::new(config.clone()).generate().unwrap();

    let readme = fs::read_to_string(&config.readme).unwrap();
    let (free, toll) = readme.split_at(readme.find("## Toll").unwrap());
    assert!(free.contains("| A |"));
    assert!(!free.contains("| B |"));
    assert!(toll.contains("| B |"));
    assert!(!toll.contains("| A |"));
}

#[test]
fn test_missing_readme_marker_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let readme = "# Stations\n<!-- LISTSTART -->\nhand edit\n";
    let config = site(dir.path(), LIST, readme, TEMPLATE);

    let err = Generator::new(config.clone()).generate().unwrap_err();
    assert!(matches!(err, Error::MarkerNotFound { ref marker, .. } if marker == "<!-- LISTEND -->"));
    assert_eq!(fs::read_to_string(&config.readme).unwrap(), readme);
    assert_eq!(fs::read_to_string(&config.template).unwrap(), TEMPLATE);
}

#[test]
fn test_missing_template_marker_after_readme_written() {
    let dir = tempfile::tempdir().unwrap();
    let template = "<html><!-- READMESTART --></html>";
    let config = site(dir.path(), LIST, README, template);

    let err = Generator::new(config.clone()).generate().unwrap_err();
    assert!(matches!(err, Error::MarkerNotFound { ref marker, .. } if marker == "<!-- READMEEND -->"));
    assert_ne!(fs::read_to_string(&config.readme).unwrap(), README);
    assert_eq!(fs::read_to_string(&config.template).unwrap(), template);
}

#[test]
fn test_missing_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = site(dir.path(), LIST, README, TEMPLATE);
    fs::remove_file(&config.data).unwrap();

    let err = Generator::new(config.clone()).generate().unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
    assert_eq!(fs::read_to_string(&config.readme).unwrap(), README);
}

#[test]
fn test_invalid_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = site(dir.path(), "{\"stations\": [", README, TEMPLATE);

    let err = Generator::new(config).generate().unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        dry_run: true,
        ..site(dir.path(), LIST, README, TEMPLATE)
    };

    let report = Generator::new(config.clone()).generate().unwrap();
    assert_eq!(report.stations, 2);
    assert_eq!(fs::read_to_string(&config.readme).unwrap(), README);
    assert_eq!(fs::read_to_string(&config.template).unwrap(), TEMPLATE);
}

#[test]
fn test_empty_station_list() {
    let dir = tempfile::tempdir().unwrap();
    let config = site(dir.path(), "{}", README, TEMPLATE);

    let report = Generator::new(config.clone()).generate().unwrap();
    assert_eq!(report.stations, 0);
    let readme = fs::read_to_string(&config.readme).unwrap();
    assert!(readme.contains("| :--- | :--- | :--- | :--- | :--- |\n\n<!-- LISTEND -->"));
}
