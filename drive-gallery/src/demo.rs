//! Fixed, non-network fallback gallery

use crate::models::Category;
use crate::view::{GalleryItem, GallerySource, GalleryView};

/// Subtitle of every demo cell
pub const DEMO_SUBTITLE: &str = "AI & ML Club Event";

const DEMO_TITLES: [&str; 12] = [
    "AI Hackathon 2025",
    "Deep Learning Workshop",
    "ML Bootcamp Session",
    "Team Building Event",
    "Industry Expert Talk",
    "Project Showcase",
    "Club Inauguration",
    "Coding Competition",
    "Research Presentation",
    "Networking Session",
    "Tech Talk Series",
    "Innovation Summit",
];

/// The demo gallery: 12 entries, categories cycling events/workshops/team.
///
/// Deterministic, so repeated fallbacks render identically.
pub fn demo_view(notice: Option<String>) -> GalleryView {
    let items = DEMO_TITLES
        .iter()
        .enumerate()
        .map(|(index, title)| {
            let src = format!("https://picsum.photos/seed/{}/800/600", index + 100);
            GalleryItem {
                index,
                id: format!("demo-{}", index + 100),
                title: title.to_string(),
                subtitle: DEMO_SUBTITLE.to_string(),
                thumbnail_url: src.clone(),
                full_size_url: src,
                caption: title.to_string(),
                category: Category::ALL[index % Category::ALL.len()],
            }
        })
        .collect();

    GalleryView {
        source: GallerySource::Demo,
        items,
        notice,
    }
}
