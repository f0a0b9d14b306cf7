//! Site configuration module.
//!
//! A content directory carries at most one `config.toml`. It is parsed
//! straight into [`SiteConfig`]; every section falls back to its stock
//! values, so the file only needs the keys that differ. The result is then
//! validated.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml              # Site config (optional)
//! ├── events.toml
//! └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"        # Copied verbatim to the output root
//!
//! [site]
//! name = "Proscenium"
//! tagline = "Where stories come alive"
//! quote = "All the world's a stage, and all the men and women merely players"
//! blurb = "Bringing stories to life through the magic of theatre."
//! # copyright_year = 2024
//!
//! [contact]
//! email = ""
//! phone = ""
//! address = []
//! # map_embed = "https://www.google.com/maps/embed?pb=..."
//!
//! [home]
//! intro_curtain = true         # Curtain-rise intro on the first visit of a session
//! # hero_video = "/hero-background.mp4"
//! highlights = 4               # Upcoming events in the home carousel
//! gallery_preview = 6          # Gallery entries previewed on the home page
//!
//! [videos]
//! # channel = "mytroupe"       # Provider channel for the showcase embed
//!
//! [[social]]                   # Footer links, repeat as needed
//! label = "Instagram"
//! url = "https://instagram.com/..."
//!
//! [colors]
//! background = "#000000"
//! surface = "#1a1a1a"
//! text = "#f5f5f5"
//! text_muted = "#9ca3af"
//! accent = "#d4af37"
//! border = "#374151"
//!
//! [processing]
//! max_processes = 4            # Max parallel render workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [site]
//! name = "Manchtantra"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the content root) copied verbatim to the output.
    pub assets_dir: String,
    /// Collective name and copy used across every page.
    pub site: SiteInfo,
    /// Contact details shown in the contact section and footer.
    pub contact: ContactConfig,
    /// Home page sections.
    pub home: HomeConfig,
    /// Video provider settings.
    pub videos: VideosConfig,
    /// Footer social links.
    pub social: Vec<SocialLink>,
    /// Color palette.
    pub colors: ColorConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            site: SiteInfo::default(),
            contact: ContactConfig::default(),
            home: HomeConfig::default(),
            videos: VideosConfig::default(),
            social: Vec::new(),
            colors: ColorConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if self.home.highlights == 0 {
            return Err(ConfigError::Validation(
                "home.highlights must be at least 1".into(),
            ));
        }
        if !self.contact.email.is_empty() && !self.contact.email.contains('@') {
            return Err(ConfigError::Validation(format!(
                "contact.email '{}' is not an email address",
                self.contact.email
            )));
        }
        if self.assets_dir.trim().is_empty() {
            return Err(ConfigError::Validation("assets_dir must not be empty".into()));
        }
        for link in &self.social {
            if link.label.trim().is_empty() || link.url.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "social links need both a label and a url".into(),
                ));
            }
        }
        for (key, value) in self.colors.entries() {
            if !is_css_color(value) {
                return Err(ConfigError::Validation(format!(
                    "colors.{key} '{value}' is not a CSS color"
                )));
            }
        }
        Ok(())
    }
}

/// Colors are written unescaped into the page's `<style>`, so only these
/// shapes are accepted:
///
/// - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
/// - `rgb(...)`, `rgba(...)`, `hsl(...)`, `hsla(...)` with numeric arguments
/// - a bare keyword such as `goldenrod` or `transparent`
fn is_css_color(value: &str) -> bool {
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let function = ["rgba(", "rgb(", "hsla(", "hsl("]
        .iter()
        .find_map(|prefix| value.strip_prefix(prefix));
    if let Some(rest) = function {
        return rest.strip_suffix(')').is_some_and(|args| {
            !args.trim().is_empty()
                && args
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || " ,.%/+-".contains(c))
        });
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// Collective name and recurring copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub name: String,
    /// Short line under the name on the intro curtain.
    pub tagline: String,
    /// Hero quote.
    pub quote: String,
    /// One or two sentences for the footer.
    pub blurb: String,
    /// Shown in the footer when set.
    pub copyright_year: Option<u32>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Proscenium".to_string(),
            tagline: "Where stories come alive".to_string(),
            quote: "All the world's a stage, and all the men and women merely players"
                .to_string(),
            blurb: "Bringing stories to life through the magic of theatre.".to_string(),
            copyright_year: None,
        }
    }
}

/// Contact details. Empty values are omitted from the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    /// Postal address, one entry per line.
    pub address: Vec<String>,
    /// Map iframe URL.
    pub map_embed: Option<String>,
}

/// Home page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomeConfig {
    /// Show the curtain-rise intro on the first home page visit of a session.
    pub intro_curtain: bool,
    /// Background video for the hero section.
    pub hero_video: Option<String>,
    /// Maximum number of upcoming events in the highlights carousel.
    pub highlights: usize,
    /// Number of gallery entries previewed on the home page.
    pub gallery_preview: usize,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            intro_curtain: true,
            hero_video: None,
            highlights: 4,
            gallery_preview: 6,
        }
    }
}

/// Video provider settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideosConfig {
    /// Provider channel handle. Enables the channel showcase embed.
    pub channel: Option<String>,
}

/// A footer link to a social profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel render workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

/// Site palette. The site is dark-first, so there is a single scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Page background.
    pub background: String,
    /// Cards, overlays, and the footer.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (dates, captions, inactive filter buttons).
    pub text_muted: String,
    /// Headings, active filters, and links.
    pub accent: String,
    /// Borders of inactive controls.
    pub border: String,
}

impl ColorConfig {
    /// Every color with its config key, in file order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("background", &self.background),
            ("surface", &self.surface),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("accent", &self.accent),
            ("border", &self.border),
        ]
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#000000".to_string(),
            surface: "#1a1a1a".to_string(),
            text: "#f5f5f5".to_string(),
            text_muted: "#9ca3af".to_string(),
            accent: "#d4af37".to_string(),
            border: "#374151".to_string(),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Name of the one config file, at the root of the content directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Read `config.toml` from the content directory.
///
/// The file is optional: without it every section keeps its stock value.
pub fn load_config(source: &Path) -> Result<SiteConfig, ConfigError> {
    let path = source.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(SiteConfig::default());
    }
    parse_config(&fs::read_to_string(&path)?)
}

/// Parse and validate config text.
///
/// Every section is `#[serde(default)]`, so a table or key left out of the
/// file keeps its stock value while arrays given in the file (`address`,
/// `[[social]]`) replace the stock ones outright.
pub fn parse_config(text: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Proscenium Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory (relative to the content root) copied verbatim to the output root.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# The collective
# ---------------------------------------------------------------------------
[site]
name = "Proscenium"

# Shown under the name on the intro curtain.
tagline = "Where stories come alive"

# Hero quote on the home page.
quote = "All the world's a stage, and all the men and women merely players"

# Footer blurb.
blurb = "Bringing stories to life through the magic of theatre."

# Footer copyright year. Omit to leave the year out.
# copyright_year = 2024

# ---------------------------------------------------------------------------
# Contact details (empty values are not shown)
# ---------------------------------------------------------------------------
[contact]
email = ""
phone = ""
# One entry per line of the postal address.
address = []
# map_embed = "https://www.google.com/maps/embed?pb=..."

# ---------------------------------------------------------------------------
# Home page
# ---------------------------------------------------------------------------
[home]
# Curtain-rise intro, shown once per browser session.
intro_curtain = true

# Background video for the hero section.
# hero_video = "/hero-background.mp4"

# Upcoming events shown in the highlights carousel.
highlights = 4

# Gallery entries previewed on the home page.
gallery_preview = 6

# ---------------------------------------------------------------------------
# Featured performances
# ---------------------------------------------------------------------------
[videos]
# Provider channel handle; enables the channel showcase on the events page.
# channel = "mytroupe"

# ---------------------------------------------------------------------------
# Footer social links (repeat the table for each link)
# ---------------------------------------------------------------------------
# [[social]]
# label = "Instagram"
# url = "https://instagram.com/mytroupe"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#000000"
surface = "#1a1a1a"
text = "#f5f5f5"
text_muted = "#9ca3af"   # Dates, captions, inactive filters
accent = "#d4af37"       # Headings, active filters, links
border = "#374151"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {bg};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-accent: {accent};
    --color-border: {border};
}}"#,
        bg = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        accent = colors.accent,
        border = colors.border,
    )
}
