use crate::services::SiteGallery;
use dioxus::prelude::*;
use drive_gallery::{
    Category, CategoryFilter, GalleryGrid, GalleryLightbox, GalleryView, RefreshTicket,
};
use std::time::Duration;

/// Lower bound for the auto-refresh period
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Apply a background refresh; the view is only replaced while `ticket` is current
async fn apply_refresh(
    gallery: &SiteGallery,
    ticket: RefreshTicket,
    mut view: Signal<Option<GalleryView>>,
) {
    if let Some(fresh) = gallery.refresh(ticket).await {
        if gallery.is_current(ticket) {
            log::info!("Gallery refreshed ({} images)", fresh.len());
            view.set(Some(fresh));
        }
    }
}

#[component]
pub fn GalleryScreen() -> Element {
    let gallery = use_context::<SiteGallery>();
    let mut view = use_signal(|| None::<GalleryView>);
    let mut filter = use_signal(|| None::<Category>);
    let mut lightbox = use_signal(|| None::<usize>);
    let mut loading = use_signal(|| true);

    // First render, then one refresh per TTL while the screen is open
    let background = gallery.clone();
    use_future(move || {
        let gallery = background.clone();
        async move {
            let init = gallery.initialize().await;
            if gallery.is_current(init.ticket) {
                view.set(Some(init.view));
                loading.set(false);
            }

            if init.background_refresh {
                apply_refresh(&gallery, init.ticket, view).await;
            }

            let interval = gallery.config().cache_ttl.max(MIN_REFRESH_INTERVAL);
            loop {
                tokio::time::sleep(interval).await;
                log::debug!("Auto-refreshing gallery");
                apply_refresh(&gallery, gallery.ticket(), view).await;
            }
        }
    });

    let reload = move |_| {
        let gallery = gallery.clone();
        loading.set(true);
        lightbox.set(None);
        spawn(async move {
            let init = gallery.reload().await;
            if gallery.is_current(init.ticket) {
                view.set(Some(init.view));
            }
            loading.set(false);
        });
    };

    rsx! {
        div { style: "padding: 16px; max-width: 1100px; margin: 0 auto;",
            div { style: "display: flex; justify-content: space-between; align-items: center; margin: 24px 0 16px 0;",
                h1 { style: "margin: 0; font-size: 28px; color: #00f5ff;", "📸 Gallery" }
                button {
                    class: "btn-secondary",
                    disabled: loading(),
                    onclick: reload,
                    if loading() {
                        "⏳ Loading..."
                    } else {
                        "🔄 Reload"
                    }
                }
            }

            CategoryFilter { active: filter(), on_select: move |category| filter.set(category) }

            match view() {
                None => rsx! {
                    div { style: "text-align: center; padding: 48px; color: #94a3b8;", "⏳ Loading gallery..." }
                },
                Some(current) => rsx! {
                    GalleryGrid {
                        view: current.clone(),
                        filter: filter(),
                        on_open: move |index| lightbox.set(Some(index)),
                    }
                    if let Some(index) = lightbox() {
                        GalleryLightbox {
                            view: current,
                            index,
                            on_navigate: move |index| lightbox.set(Some(index)),
                            on_close: move |_| lightbox.set(None),
                        }
                    }
                },
            }
        }
    }
}
