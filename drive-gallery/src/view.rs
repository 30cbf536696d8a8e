use crate::demo::demo_view;
use crate::format::{format_date, format_image_name, strip_extension};
use crate::models::{Category, GalleryImage};

/// Where the images on screen came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallerySource {
    Cache,
    Fresh,
    Demo,
}

/// One grid cell, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Position in the full (unfiltered) set, used to open the lightbox
    pub index: usize,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub thumbnail_url: String,
    pub full_size_url: String,
    /// Lightbox caption
    pub caption: String,
    pub category: Category,
}

/// Rendered gallery: always a single source, never a mixture
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub source: GallerySource,
    pub items: Vec<GalleryItem>,
    /// Explanation shown above the grid (e.g. why demo images are displayed)
    pub notice: Option<String>,
}

impl GalleryView {
    /// Build the grid from an image set, capped at `max_images`.
    ///
    /// An empty set renders the demo gallery instead.
    pub fn from_images(images: &[GalleryImage], source: GallerySource, max_images: usize) -> Self {
        if images.is_empty() {
            return demo_view(Some("No images found in the gallery folder.".to_string()));
        }

        let items = images
            .iter()
            .take(max_images)
            .enumerate()
            .map(|(index, image)| GalleryItem {
                index,
                id: image.id.clone(),
                title: format_image_name(&image.name),
                subtitle: format_date(image.created_at),
                thumbnail_url: image.thumbnail_url.clone(),
                full_size_url: image.full_size_url.clone(),
                caption: strip_extension(&image.name).to_string(),
                category: image.category,
            })
            .collect();

        Self {
            source,
            items,
            notice: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pull a possibly out-of-range index back into the set.
    ///
    /// A refresh can shrink the set while the lightbox is open.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.len().saturating_sub(1))
    }

    /// Next lightbox position, wrapping from the last item to the first
    pub fn next_index(&self, index: usize) -> usize {
        match self.len() {
            0 => 0,
            len => (self.clamp_index(index) + 1) % len,
        }
    }

    /// Previous lightbox position, wrapping from the first item to the last
    pub fn prev_index(&self, index: usize) -> usize {
        match self.len() {
            0 => 0,
            len => (self.clamp_index(index) + len - 1) % len,
        }
    }

    /// Items of one category (or all), keeping their original indices
    pub fn filtered(&self, category: Option<Category>) -> Vec<GalleryItem> {
        self.items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn image(name: &str, category: Category) -> GalleryImage {
        GalleryImage {
            id: name.to_string(),
            name: name.to_string(),
            thumbnail_url: format!("https://thumb/{}", name),
            full_size_url: format!("https://full/{}", name),
            category,
            created_at: None,
        }
    }

    #[test]
    fn test_render_builds_one_cell_per_image() {
        let mut first = image("AI_Hackathon_Event.png", Category::Events);
        first.created_at = Some(Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap());
        let images = vec![first, image("ml-bootcamp.jpg", Category::Workshops)];

        let view = GalleryView::from_images(&images, GallerySource::Fresh, 50);

        assert_eq!(view.source, GallerySource::Fresh);
        assert_eq!(view.len(), 2);
        assert_eq!(view.items[0].title, "Ai Hackathon Event");
        assert_eq!(view.items[0].subtitle, "Jan 15, 2025");
        assert_eq!(view.items[0].caption, "AI_Hackathon_Event");
        assert_eq!(view.items[1].subtitle, "Recently added");
        assert_eq!(view.items[1].index, 1);
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_render_caps_at_max_images() {
        let images: Vec<_> = (0..10)
            .map(|i| image(&format!("img{}.jpg", i), Category::Events))
            .collect();
        let view = GalleryView::from_images(&images, GallerySource::Cache, 4);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_empty_set_renders_demo() {
        let view = GalleryView::from_images(&[], GallerySource::Fresh, 50);
        assert_eq!(view.source, GallerySource::Demo);
        assert_eq!(view.len(), 12);
        assert!(view.notice.is_some());
    }

    #[test]
    fn test_filter_keeps_original_indices() {
        let images = vec![
            image("a_event.jpg", Category::Events),
            image("b_team.jpg", Category::Team),
            image("c_team.jpg", Category::Team),
        ];
        let view = GalleryView::from_images(&images, GallerySource::Fresh, 50);

        let team = view.filtered(Some(Category::Team));
        assert_eq!(team.len(), 2);
        assert_eq!(team[0].index, 1);
        assert_eq!(team[1].index, 2);
        assert_eq!(view.filtered(None).len(), 3);
    }

    #[test]
    fn test_lightbox_navigation_wraps() {
        let images: Vec<_> = (0..3)
            .map(|i| image(&format!("img{}.jpg", i), Category::Events))
            .collect();
        let view = GalleryView::from_images(&images, GallerySource::Fresh, 50);

        assert_eq!(view.next_index(0), 1);
        assert_eq!(view.next_index(2), 0);
        assert_eq!(view.prev_index(1), 0);
        assert_eq!(view.prev_index(0), 2);

        let single = GalleryView::from_images(&images[..1], GallerySource::Fresh, 50);
        assert_eq!(single.next_index(0), 0);
        assert_eq!(single.prev_index(0), 0);
    }

    #[test]
    fn test_index_clamped_after_set_shrinks() {
        let images: Vec<_> = (0..6)
            .map(|i| image(&format!("img{}.jpg", i), Category::Events))
            .collect();
        let before = GalleryView::from_images(&images, GallerySource::Cache, 50);
        assert_eq!(before.clamp_index(5), 5);

        let after = GalleryView::from_images(&images[..2], GallerySource::Fresh, 50);
        assert_eq!(after.clamp_index(5), 1);
        assert_eq!(after.clamp_index(0), 0);
        assert_eq!(after.next_index(5), 0);
        assert_eq!(after.prev_index(5), 0);
    }
}
