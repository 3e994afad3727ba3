use std::sync::Arc;

use contracts::domain::pft::{CategoryDataset, CategoryRecord, CellText};
use url::Url;

use crate::shared::asset_locator::map_url;
use crate::shared::config::WidgetConfig;

pub const NO_PARAMETERS: &str = "(no parameters found)";
pub const DEFAULT_MAP_ALT: &str = "Selected PFT distribution map";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamRow {
    pub name: String,
    pub value: String,
}

/// Contents of the parameter table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ParamTable {
    /// Nothing rendered yet
    #[default]
    Blank,
    /// The selected PFT has no parameters
    Placeholder,
    Rows(Vec<ParamRow>),
}

impl ParamTable {
    fn for_record(record: &CategoryRecord) -> Self {
        if record.parameters.is_empty() {
            return ParamTable::Placeholder;
        }
        ParamTable::Rows(
            record
                .parameters
                .iter()
                .map(|p| ParamRow {
                    name: p.name.clone(),
                    value: p.value.cell_text(),
                })
                .collect(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapView {
    pub src: Option<String>,
    pub alt: String,
    pub visible: bool,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            src: None,
            alt: DEFAULT_MAP_ALT.to_string(),
            visible: true,
        }
    }
}

/// Everything the PFT browser shows, independent of the DOM.
///
/// Options are fixed at construction; only [`BrowserState::render`] and
/// [`BrowserState::image_failed`] change what is displayed.
#[derive(Clone, Debug)]
pub struct BrowserState {
    dataset: Arc<CategoryDataset>,
    base: Url,
    config: WidgetConfig,
    options: Vec<String>,
    selected: Option<String>,
    phenology_label: String,
    table: ParamTable,
    map: MapView,
}

impl BrowserState {
    /// Build the state and render the alphabetically first PFT, if any
    pub fn new(dataset: Arc<CategoryDataset>, base: Url, config: WidgetConfig) -> Self {
        let options = dataset.names();
        let first = dataset.first_name().map(str::to_string);
        let mut state = Self {
            dataset,
            base,
            config,
            options,
            selected: None,
            phenology_label: String::new(),
            table: ParamTable::default(),
            map: MapView::default(),
        };
        if let Some(name) = first {
            state.render(&name);
        }
        state
    }

    /// Show PFT `name`. Unknown names leave everything untouched.
    ///
    /// Returns whether anything was rendered.
    pub fn render(&mut self, name: &str) -> bool {
        let Some(record) = self.dataset.get(name) else {
            return false;
        };

        self.table = ParamTable::for_record(record);
        self.phenology_label = format!("Phenology: {}", record.phenology);
        self.map = MapView {
            src: Some(map_url(&self.base, name, &self.config)),
            alt: format!("{} distribution map", name),
            visible: true,
        };
        self.selected = Some(name.to_string());
        true
    }

    /// The map image at `src` failed to load: hide it.
    ///
    /// Failures of an image that is no longer shown are ignored.
    pub fn image_failed(&mut self, src: &str) -> bool {
        if self.map.src.as_deref() != Some(src) {
            return false;
        }
        self.map.visible = false;
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dataset.contains(name)
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn phenology_label(&self) -> &str {
        &self.phenology_label
    }

    pub fn table(&self) -> &ParamTable {
        &self.table
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OAK_FERN: &str =
        r#"{"Oak":{"phenology":2,"parameters":{"height_m":30}},"Fern":{"phenology":3,"parameters":{}}}"#;

    fn state_for(json: &str) -> BrowserState {
        let dataset = CategoryDataset::from_json_str(json).unwrap();
        let base = Url::parse("https://docs.example.org/assets/pfts/").unwrap();
        BrowserState::new(Arc::new(dataset), base, WidgetConfig::DEFAULT)
    }

    fn rows(state: &BrowserState) -> Vec<(String, String)> {
        match state.table() {
            ParamTable::Rows(rows) => rows.iter().map(|r| (r.name.clone(), r.value.clone())).collect(),
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_options_are_sorted_keys() {
        let state = state_for(r#"{"b":{},"C":{},"a":{},"B":{}}"#);
        assert_eq!(state.options(), ["B", "C", "a", "b"]);
    }

    #[test]
    fn test_initial_render_targets_first_name() {
        let state = state_for(r#"{"Pine":{"phenology":1},"Birch":{"phenology":2}}"#);
        assert_eq!(state.selected(), Some("Birch"));
        assert_eq!(state.phenology_label(), "Phenology: Deciduous");
    }

    #[test]
    fn test_empty_dataset_renders_nothing() {
        let state = state_for("{}");
        assert!(state.options().is_empty());
        assert_eq!(state.selected(), None);
        assert_eq!(state.table(), &ParamTable::Blank);
        assert_eq!(state.phenology_label(), "");
        assert_eq!(state.map(), &MapView::default());
    }

    #[test]
    fn test_missing_or_empty_parameters_show_placeholder() {
        let mut state = state_for(r#"{"A":{"phenology":1},"B":{"phenology":1,"parameters":{}}}"#);
        assert_eq!(state.table(), &ParamTable::Placeholder);
        assert!(state.render("B"));
        assert_eq!(state.table(), &ParamTable::Placeholder);
    }

    #[test]
    fn test_rows_follow_key_order() {
        let state = state_for(r#"{"A":{"phenology":1,"parameters":{"b":"x","a":1}}}"#);
        assert_eq!(
            rows(&state),
            vec![("b".into(), "x".into()), ("a".into(), "1".into())]
        );
    }

    #[test]
    fn test_structured_values_render_as_json() {
        let state = state_for(r#"{"A":{"parameters":{"range":[-5,30],"flag":true}}}"#);
        assert_eq!(
            rows(&state),
            vec![("range".into(), "[-5,30]".into()), ("flag".into(), "true".into())]
        );
    }

    #[test]
    fn test_phenology_labels() {
        let mut state = state_for(
            r#"{"a":{"phenology":1},"b":{"phenology":2},"c":{"phenology":3},"d":{"phenology":99},"e":{}}"#,
        );
        let expected = [
            ("a", "Phenology: Evergreen"),
            ("b", "Phenology: Deciduous"),
            ("c", "Phenology: Grass"),
            ("d", "Phenology: 99"),
            ("e", "Phenology: undefined"),
        ];
        for (name, label) in expected {
            assert!(state.render(name));
            assert_eq!(state.phenology_label(), label);
        }
    }

    #[test]
    fn test_unknown_name_is_noop() {
        let mut state = state_for(OAK_FERN);
        state.render("Oak");
        let before = (
            state.selected().map(str::to_string),
            state.phenology_label().to_string(),
            state.table().clone(),
            state.map().clone(),
        );
        assert!(!state.render("nonexistent"));
        let after = (
            state.selected().map(str::to_string),
            state.phenology_label().to_string(),
            state.table().clone(),
            state.map().clone(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_oak_fern_end_to_end() {
        let mut state = state_for(OAK_FERN);
        assert_eq!(state.options(), ["Fern", "Oak"]);
        assert_eq!(state.selected(), Some("Fern"));
        assert_eq!(state.table(), &ParamTable::Placeholder);
        assert_eq!(state.phenology_label(), "Phenology: Grass");
        assert!(state.map().src.as_deref().unwrap().ends_with("maps/Fern.png"));
        assert_eq!(state.map().alt, "Fern distribution map");

        assert!(state.render("Oak"));
        assert_eq!(rows(&state), vec![("height_m".into(), "30".into())]);
        assert_eq!(state.phenology_label(), "Phenology: Deciduous");
        assert!(state.map().src.as_deref().unwrap().ends_with("maps/Oak.png"));
    }

    #[test]
    fn test_image_failure_hides_map_only() {
        let mut state = state_for(OAK_FERN);
        state.render("Oak");
        let src = state.map().src.clone().unwrap();
        let label = state.phenology_label().to_string();
        let table = state.table().clone();

        assert!(state.image_failed(&src));
        assert!(!state.map().visible);
        assert_eq!(state.phenology_label(), label);
        assert_eq!(state.table(), &table);
    }

    #[test]
    fn test_render_shows_map_again() {
        let mut state = state_for(OAK_FERN);
        let fern_src = state.map().src.clone().unwrap();
        state.image_failed(&fern_src);
        assert!(!state.map().visible);

        state.render("Oak");
        assert!(state.map().visible);
    }

    #[test]
    fn test_stale_image_failure_ignored() {
        let mut state = state_for(OAK_FERN);
        let fern_src = state.map().src.clone().unwrap();
        state.render("Oak");
        assert!(!state.image_failed(&fern_src));
        assert!(state.map().visible);
    }

    #[test]
    fn test_map_src_is_escaped() {
        let state = state_for(r#"{"C3 grass":{"phenology":3}}"#);
        assert_eq!(
            state.map().src.as_deref(),
            Some("https://docs.example.org/assets/pfts/maps/C3%20grass.png")
        );
    }
}
