//! Site-level counter extraction.
//!
//! Forums expose labeled counters ("1,234 posts", "56 members online")
//! in headers and sidebars. This is plain numeric-regex extraction, run
//! over stat containers first and then the whole page text; the first
//! occurrence of each label wins.

use crate::dom::{self, Document};
use crate::patterns;
use crate::record::ForumStats;

/// Extract labeled counters from a page document.
#[must_use]
pub fn extract_stats_from_document(doc: &Document) -> ForumStats {
    let mut stats = ForumStats::default();

    for css in patterns::STAT_CONTAINER_SELECTORS {
        let containers = doc.select(css);
        if containers.exists() {
            fill_from_text(&mut stats, &dom::text_content(&containers));
        }
    }

    fill_from_text(&mut stats, &dom::text_content(&doc.select("body")));
    stats
}

/// Fill any still-empty slots with counters found in `text`.
fn fill_from_text(stats: &mut ForumStats, text: &str) {
    for caps in patterns::STAT_COUNTER.captures_iter(text) {
        let Ok(value) = caps[1].replace(',', "").parse::<u64>() else {
            continue;
        };
        let label = caps[2].to_lowercase();

        let slot = match label.trim_end_matches('s') {
            "post" | "topic" | "thread" => &mut stats.posts,
            "member" | "user" => &mut stats.members,
            "comment" | "replie" | "reply" => &mut stats.comments,
            "online" => &mut stats.online,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
}
