//! HTML views.
//!
//! Pages are askama templates under `templates/`; each template struct lists the
//! values the markup binds to.

use crate::core::dashboard::DashboardData;
use crate::errors::Result;
use askama::Template;
use axum::response::Html;

/// Status line shown when the dashboard has a sensor to chart.
pub const STATUS_LOADED: &str = "Chart loaded.";

/// Status line shown when the dashboard has no sensors.
pub const STATUS_NO_SENSORS: &str = "No sensors found in the database.";

/// One entry of the dashboard's sensor selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorOption {
    /// Sensor id, used as both option value and label
    pub id: i32,
    /// Whether the option starts out selected
    pub selected: bool,
}

/// Dashboard page with sensor selector and chart.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// Selector options, ascending by id
    pub options: Vec<SensorOption>,
    /// Status line text
    pub status: &'static str,
    /// Initial chart data as JSON, `null` when there is no sensor
    pub initial_json: String,
}

impl DashboardTemplate {
    /// Binds dashboard data to the template. The initial series' sensor is preselected.
    pub fn new(data: &DashboardData) -> Result<Self> {
        let selected = data.initial.as_ref().map(|series| series.sensor_id);
        let options = data
            .sensor_ids
            .iter()
            .map(|&id| SensorOption {
                id,
                selected: selected == Some(id),
            })
            .collect();

        let status = if data.sensor_ids.is_empty() {
            STATUS_NO_SENSORS
        } else {
            STATUS_LOADED
        };

        // Keeps the payload from closing the surrounding <script> element.
        let initial_json = serde_json::to_string(&data.initial)?.replace("</", "<\\/");

        Ok(Self {
            options,
            status,
            initial_json,
        })
    }
}

/// Simple greeting page.
#[derive(Template)]
#[template(path = "pagina.html")]
pub struct PageTemplate {
    /// Name to greet
    pub user: String,
}

/// Renders a template into an HTML response.
pub fn render<T: Template>(template: &T) -> Result<Html<String>> {
    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::reading::SensorSeries;

    #[test]
    fn test_empty_dashboard() {
        let template = DashboardTemplate::new(&DashboardData::default()).unwrap();
        assert!(template.options.is_empty());
        assert_eq!(template.status, STATUS_NO_SENSORS);
        assert_eq!(template.initial_json, "null");

        let html = template.render().unwrap();
        assert!(html.contains(STATUS_NO_SENSORS));
        assert!(!html.contains("Sensor ID:"));
    }

    #[test]
    fn test_dashboard_bindings() {
        let data = DashboardData {
            sensor_ids: vec![1, 4],
            initial: Some(SensorSeries {
                sensor_id: 1,
                values: vec![2.5],
                timestamps: vec!["2024-01-01 10:00:00".to_string()],
            }),
        };

        let template = DashboardTemplate::new(&data).unwrap();
        assert_eq!(
            template.options,
            vec![
                SensorOption {
                    id: 1,
                    selected: true
                },
                SensorOption {
                    id: 4,
                    selected: false
                },
            ]
        );
        assert_eq!(template.status, STATUS_LOADED);

        let html = template.render().unwrap();
        assert!(html.contains(r#"<option value="1" selected>Sensor ID: 1</option>"#));
        assert!(html.contains(r#"<option value="4">Sensor ID: 4</option>"#));
        assert!(html.contains(
            r#"{"sensor_id":1,"values":[2.5],"timestamps":["2024-01-01 10:00:00"]}"#
        ));
    }

    #[test]
    fn test_page_escapes_user() {
        let html = PageTemplate {
            user: "<b>Ana</b>".to_string(),
        }
        .render()
        .unwrap();
        assert!(html.contains("&lt;b&gt;Ana"));
        assert!(!html.contains("<b>Ana"));
    }
}
