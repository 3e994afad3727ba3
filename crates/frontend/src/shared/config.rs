//! Well-known names shared by the widget and the page that hosts it

/// Widget configuration.
///
/// Everything is compiled in; the host page can only override the assets
/// base through the `data-pft-base` attribute on a script tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Id of the element the widget mounts into
    pub container_id: &'static str,
    /// Script attribute holding an explicit assets base, relative to the script
    pub base_hint_attr: &'static str,
    /// Path suffix identifying the widget's own script tag
    pub script_suffix: &'static str,
    /// Assets folder relative to the page, used when no script matches
    pub fallback_assets_path: &'static str,
    /// Data file name under the assets base
    pub data_file: &'static str,
    /// Folder of per-PFT map images under the assets base
    pub maps_dir: &'static str,
    /// Property set on `window` once the widget has started on this page
    pub init_marker: &'static str,
}

impl WidgetConfig {
    pub const DEFAULT: WidgetConfig = WidgetConfig {
        container_id: "pft-app",
        base_hint_attr: "data-pft-base",
        script_suffix: "/assets/pfts/pft_browser.js",
        fallback_assets_path: "assets/pfts/",
        data_file: "data.json",
        maps_dir: "maps",
        init_marker: "__PFT_APP_INITIALIZED__",
    };
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
