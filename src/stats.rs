//! Research statistics counters fed by a static JSON document.

use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

use crate::{animate, api, dom};

/// Values shown when the live statistics document cannot be loaded.
pub const FALLBACK_STATS: ResearchStats = ResearchStats {
    research_articles: 10,
    research_chapters: 2,
    citations: 98,
    h_index: 5,
};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchStats {
    pub research_articles: u32,
    pub research_chapters: u32,
    pub citations: u32,
    #[serde(rename = "h-index")]
    pub h_index: u32,
}

impl ResearchStats {
    /// Display element id and value for each counter, in page order.
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("articles-count", self.research_articles),
            ("chapters-count", self.research_chapters),
            ("citations-count", self.citations),
            ("h-index", self.h_index),
        ]
    }
}

/// Fetches the statistics document and fills the four counters. Any failure
/// is logged and replaced by [`FALLBACK_STATS`]; the number animation only
/// runs over live data.
pub(crate) fn load_research_statistics() {
    spawn_local(async {
        match api::get_research_stats().await {
            Ok(stats) => {
                apply(&stats);
                animate::animate_numbers(&dom::document());
            }
            Err(err) => {
                log::error!("error loading research statistics: {err}");
                apply(&FALLBACK_STATS);
            }
        }
    });
}

fn apply(stats: &ResearchStats) {
    let document = dom::document();
    for (id, value) in stats.entries() {
        if let Some(element) = document.get_element_by_id(id) {
            element.set_text_content(Some(&value.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_and_hyphenated_fields() {
        let stats: ResearchStats = serde_json::from_str(
            r#"{"researchArticles":10,"researchChapters":2,"citations":98,"h-index":5}"#,
        )
        .unwrap();
        assert_eq!(stats, FALLBACK_STATS);
    }

    #[test]
    fn entries_follow_display_order() {
        let texts = FALLBACK_STATS
            .entries()
            .map(|(_, value)| value.to_string());
        assert_eq!(texts, ["10", "2", "98", "5"]);
    }

    #[test]
    fn entries_name_the_display_elements() {
        let ids = FALLBACK_STATS.entries().map(|(id, _)| id);
        assert_eq!(
            ids,
            ["articles-count", "chapters-count", "citations-count", "h-index"],
        );
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let result = serde_json::from_str::<ResearchStats>(
            r#"{"researchArticles":"ten","researchChapters":2,"citations":98,"h-index":5}"#,
        );
        assert!(result.is_err());
    }
}
