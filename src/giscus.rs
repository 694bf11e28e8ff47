//! Settings for the giscus comment widget embedded under blog posts.
//!
//! `GISCUS` is a compile-time constant; UI code reads it through [`giscus`]
//! or fetches it as JSON from `/giscus.json`. Field names serialize in the
//! camelCase form the widget expects.
use serde::Serialize;

const CLIENT_SCRIPT: &str = "https://giscus.app/client.js";

/// How a page is matched to its discussion thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mapping {
    #[serde(rename = "pathname")]
    Pathname,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "og:title")]
    OgTitle,
    #[serde(rename = "specific")]
    Specific,
    #[serde(rename = "number")]
    Number,
}

/// A widget flag, sent over the wire as `"0"` or `"1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Toggle {
    #[serde(rename = "0")]
    Off,
    #[serde(rename = "1")]
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Loading {
    Lazy,
    Eager,
}

impl Mapping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mapping::Pathname => "pathname",
            Mapping::Url => "url",
            Mapping::Title => "title",
            Mapping::OgTitle => "og:title",
            Mapping::Specific => "specific",
            Mapping::Number => "number",
        }
    }
}

impl Toggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Toggle::Off => "0",
            Toggle::On => "1",
        }
    }
}

impl InputPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputPosition::Top => "top",
            InputPosition::Bottom => "bottom",
        }
    }
}

impl Loading {
    pub fn as_str(&self) -> &'static str {
        match self {
            Loading::Lazy => "lazy",
            Loading::Eager => "eager",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiscusConfig {
    pub repo: &'static str,
    pub repo_id: &'static str,
    pub category: &'static str,
    pub category_id: &'static str,
    pub mapping: Mapping,
    pub reactions_enabled: Toggle,
    pub emit_metadata: Toggle,
    pub input_position: InputPosition,
    pub lang: &'static str,
    pub loading: Loading,
}

pub const GISCUS: GiscusConfig = GiscusConfig {
    repo: "pogor-dev/pogor.dev",
    repo_id: "R_kgDOLxGKaQ",
    category: "💬 Blog comments",
    category_id: "DIC_kwDOLxGKac4CoZ5Z",
    mapping: Mapping::Pathname,
    reactions_enabled: Toggle::On,
    emit_metadata: Toggle::Off,
    input_position: InputPosition::Bottom,
    lang: "en",
    loading: Loading::Lazy,
};

static SHARED: GiscusConfig = GISCUS;

/// The site's widget settings. Always the same value for the process lifetime.
pub fn giscus() -> &'static GiscusConfig {
    &SHARED
}

impl GiscusConfig {
    /// `data-*` attributes read by the widget's `client.js`, in embed order.
    pub fn data_attributes(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("data-repo", self.repo),
            ("data-repo-id", self.repo_id),
            ("data-category", self.category),
            ("data-category-id", self.category_id),
            ("data-mapping", self.mapping.as_str()),
            ("data-reactions-enabled", self.reactions_enabled.as_str()),
            ("data-emit-metadata", self.emit_metadata.as_str()),
            ("data-input-position", self.input_position.as_str()),
            ("data-lang", self.lang),
            ("data-loading", self.loading.as_str()),
        ]
    }

    /// Render the `<script>` tag that mounts the widget.
    pub fn script_tag(&self) -> String {
        let mut tag = format!("<script src=\"{}\"", CLIENT_SCRIPT);
        for (name, value) in self.data_attributes() {
            tag.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
        }
        tag.push_str(" crossorigin=\"anonymous\" async></script>");
        tag
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_are_stable() {
        let first = giscus();
        let second = giscus();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
        assert_eq!(*first, GISCUS);
    }

    #[test]
    fn mapping_and_reactions() {
        for _ in 0..3 {
            assert_eq!(giscus().mapping.as_str(), "pathname");
            assert_eq!(giscus().reactions_enabled.as_str(), "1");
        }
    }

    #[test]
    fn serializes_with_widget_field_names() {
        let value = serde_json::to_value(giscus()).unwrap();
        assert_eq!(
            value,
            json!({
                "repo": "pogor-dev/pogor.dev",
                "repoId": "R_kgDOLxGKaQ",
                "category": "💬 Blog comments",
                "categoryId": "DIC_kwDOLxGKac4CoZ5Z",
                "mapping": "pathname",
                "reactionsEnabled": "1",
                "emitMetadata": "0",
                "inputPosition": "bottom",
                "lang": "en",
                "loading": "lazy",
            })
        );
    }

    #[test]
    fn og_title_mapping_keeps_colon() {
        assert_eq!(serde_json::to_value(Mapping::OgTitle).unwrap(), json!("og:title"));
    }

    #[test]
    fn script_tag_carries_every_attribute() {
        let tag = giscus().script_tag();
        assert!(tag.starts_with("<script src=\"https://giscus.app/client.js\""));
        assert!(tag.contains(" data-repo=\"pogor-dev/pogor.dev\""));
        assert!(tag.contains(" data-category=\"💬 Blog comments\""));
        assert!(tag.contains(" data-emit-metadata=\"0\""));
        assert!(tag.ends_with(" crossorigin=\"anonymous\" async></script>"));
        assert_eq!(tag.matches(" data-").count(), 10);
    }

    #[test]
    fn attribute_values_are_escaped() {
        assert_eq!(escape_attr("a\"<b>&c"), "a&quot;&lt;b&gt;&amp;c");
    }
}
