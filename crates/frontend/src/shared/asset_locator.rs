//! Assets base resolution
//!
//! Finds the folder holding `data.json` and `maps/`, without relying on
//! `document.currentScript` (null for module scripts and injected tags).

use url::Url;
use wasm_bindgen::JsCast;

use super::config::WidgetConfig;
use super::error::WidgetError;

/// What the locator needs to know about one `<script>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptTag {
    /// Absolute source URL, empty for inline scripts
    pub src: String,
    /// Value of the base hint attribute, `None` when the attribute is absent
    pub base_hint: Option<String>,
}

/// Resolve the assets base URL.
///
/// Order, first success wins:
/// 1. the first script carrying the hint attribute: hint (`.` when empty)
///    resolved against that script's source;
/// 2. the first script whose source ends with the widget's own suffix:
///    its containing folder;
/// 3. the fallback assets path resolved against the page URL.
///
/// The result always ends with `/`.
pub fn resolve_assets_base(
    scripts: &[ScriptTag],
    page_url: &str,
    config: &WidgetConfig,
) -> Result<Url, WidgetError> {
    if let Some(base) = from_hint(scripts) {
        return Ok(as_folder(base));
    }
    if let Some(base) = from_script_name(scripts, config.script_suffix) {
        return Ok(as_folder(base));
    }

    Url::parse(page_url)
        .and_then(|page| page.join(config.fallback_assets_path))
        .map(as_folder)
        .map_err(|e| WidgetError::Locate {
            page_url: page_url.to_string(),
            reason: e.to_string(),
        })
}

fn from_hint(scripts: &[ScriptTag]) -> Option<Url> {
    let script = scripts.iter().find(|s| s.base_hint.is_some())?;
    if script.src.is_empty() {
        return None;
    }
    let hint = match script.base_hint.as_deref() {
        Some("") | None => ".",
        Some(h) => h,
    };
    Url::parse(&script.src).and_then(|src| src.join(hint)).ok()
}

fn from_script_name(scripts: &[ScriptTag], suffix: &str) -> Option<Url> {
    let script = scripts
        .iter()
        .find(|s| !s.src.is_empty() && s.src.ends_with(suffix))?;
    Url::parse(&script.src).and_then(|src| src.join("./")).ok()
}

fn as_folder(mut url: Url) -> Url {
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// URL of the data file under `base`
pub fn data_url(base: &Url, config: &WidgetConfig) -> String {
    format!("{}{}", base, config.data_file)
}

/// URL of the map image for PFT `name` under `base`
pub fn map_url(base: &Url, name: &str, config: &WidgetConfig) -> String {
    format!(
        "{}{}/{}.png",
        base,
        config.maps_dir,
        urlencoding::encode(name)
    )
}

/// Collect every `<script>` element of the document
pub fn collect_scripts(document: &web_sys::Document, config: &WidgetConfig) -> Vec<ScriptTag> {
    let scripts = document.scripts();
    (0..scripts.length())
        .filter_map(|i| scripts.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok())
        .map(|script| ScriptTag {
            src: script.src(),
            base_hint: script.get_attribute(config.base_hint_attr),
        })
        .collect()
}

/// Resolve the assets base for the current page
pub fn locate_assets_base(config: &WidgetConfig) -> Result<Url, WidgetError> {
    let window = web_sys::window().ok_or_else(|| WidgetError::Locate {
        page_url: String::new(),
        reason: "no window".to_string(),
    })?;
    let page_url = window.location().href().unwrap_or_default();
    let scripts = window
        .document()
        .map(|doc| collect_scripts(&doc, config))
        .unwrap_or_default();
    resolve_assets_base(&scripts, &page_url, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://docs.example.org/guide/pfts.html?tab=1";

    fn script(src: &str) -> ScriptTag {
        ScriptTag {
            src: src.to_string(),
            base_hint: None,
        }
    }

    fn hinted(src: &str, hint: &str) -> ScriptTag {
        ScriptTag {
            src: src.to_string(),
            base_hint: Some(hint.to_string()),
        }
    }

    fn resolve(scripts: &[ScriptTag]) -> String {
        resolve_assets_base(scripts, PAGE, &WidgetConfig::DEFAULT)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_hint_resolves_against_script() {
        let scripts = [
            script("https://cdn.example.org/assets/pfts/pft_browser.js"),
            hinted("https://docs.example.org/js/loader.js", "../data/pfts"),
        ];
        assert_eq!(resolve(&scripts), "https://docs.example.org/data/pfts/");
    }

    #[test]
    fn test_empty_hint_means_script_folder() {
        let scripts = [hinted("https://docs.example.org/static/w/loader.js?v=3", "")];
        assert_eq!(resolve(&scripts), "https://docs.example.org/static/w/");
    }

    #[test]
    fn test_hint_without_src_is_skipped() {
        let scripts = [
            hinted("", "somewhere"),
            script("https://docs.example.org/site/assets/pfts/pft_browser.js"),
        ];
        assert_eq!(resolve(&scripts), "https://docs.example.org/site/assets/pfts/");
    }

    #[test]
    fn test_script_name_scan() {
        let scripts = [
            script("https://docs.example.org/js/search.js"),
            script(""),
            script("https://docs.example.org/v2/assets/pfts/pft_browser.js"),
        ];
        assert_eq!(resolve(&scripts), "https://docs.example.org/v2/assets/pfts/");
    }

    #[test]
    fn test_page_fallback() {
        let scripts = [script("https://docs.example.org/js/search.js")];
        assert_eq!(resolve(&scripts), "https://docs.example.org/guide/assets/pfts/");
        assert_eq!(resolve(&[]), "https://docs.example.org/guide/assets/pfts/");
    }

    #[test]
    fn test_unparseable_page_url() {
        let err = resolve_assets_base(&[], "not a url", &WidgetConfig::DEFAULT).unwrap_err();
        assert!(matches!(err, WidgetError::Locate { .. }));
    }

    #[test]
    fn test_asset_urls() {
        let base = Url::parse("https://docs.example.org/assets/pfts/").unwrap();
        let config = WidgetConfig::DEFAULT;
        assert_eq!(
            data_url(&base, &config),
            "https://docs.example.org/assets/pfts/data.json"
        );
        assert_eq!(
            map_url(&base, "Fern", &config),
            "https://docs.example.org/assets/pfts/maps/Fern.png"
        );
        assert_eq!(
            map_url(&base, "C3 grass/tundra", &config),
            "https://docs.example.org/assets/pfts/maps/C3%20grass%2Ftundra.png"
        );
    }
}
