//! Dioxus UI components for the gallery
//!
//! Components are stateless: the page owns the [`GalleryView`], the active
//! filter and the lightbox index, and passes callbacks down.

use crate::models::Category;
use crate::view::{GallerySource, GalleryView};
use dioxus::prelude::*;

const FILTER_BUTTON: &str = "padding: 8px 18px; margin: 0 6px 8px 0; border-radius: 20px; cursor: pointer; font-size: 14px; border: 1px solid #00f5ff;";

/// Filter buttons: all, events, workshops, team
#[component]
pub fn CategoryFilter(active: Option<Category>, on_select: EventHandler<Option<Category>>) -> Element {
    let button_style = |selected: bool| {
        if selected {
            format!("{} background: #00f5ff; color: #0a0e27;", FILTER_BUTTON)
        } else {
            format!("{} background: transparent; color: #e2e8f0;", FILTER_BUTTON)
        }
    };

    rsx! {
        div { style: "display: flex; flex-wrap: wrap; justify-content: center; margin-bottom: 24px;",
            button {
                style: "{button_style(active.is_none())}",
                onclick: move |_| on_select.call(None),
                "All"
            }
            {Category::ALL.into_iter().map(|category| {
                rsx! {
                    button {
                        key: "{category.as_str()}",
                        style: "{button_style(active == Some(category))}",
                        onclick: move |_| on_select.call(Some(category)),
                        "{category.label()}"
                    }
                }
            })}
        }
    }
}

/// Grid of gallery cells; clicking a cell reports its index in the full set
#[component]
pub fn GalleryGrid(
    view: GalleryView,
    #[props(default = None)] filter: Option<Category>,
    on_open: EventHandler<usize>,
) -> Element {
    let items = view.filtered(filter);

    rsx! {
        if let Some(notice) = view.notice.clone() {
            div { style: "text-align: center; padding: 12px; margin-bottom: 16px; color: #ff6b6b;",
                p { style: "margin: 0;", "{notice}" }
            }
        }
        if view.source == GallerySource::Demo {
            p { style: "text-align: center; color: #94a3b8; font-size: 13px; margin: 0 0 12px 0;",
                "Showing demo gallery"
            }
        }
        if items.is_empty() {
            div { style: "text-align: center; padding: 32px; color: #94a3b8;",
                "No images in this category yet."
            }
        }
        div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px;",
            {items.into_iter().map(|item| {
                let index = item.index;
                rsx! {
                    div {
                        key: "{item.id}",
                        "data-category": "{item.category.as_str()}",
                        style: "position: relative; border-radius: 12px; overflow: hidden; cursor: pointer; aspect-ratio: 4 / 3; background: #1e293b;",
                        onclick: move |_| on_open.call(index),
                        img {
                            src: "{item.thumbnail_url}",
                            alt: "{item.caption}",
                            loading: "lazy",
                            style: "width: 100%; height: 100%; object-fit: cover;",
                        }
                        div { style: "position: absolute; left: 0; right: 0; bottom: 0; padding: 12px; background: linear-gradient(transparent, rgba(0, 0, 0, 0.85)); color: white;",
                            h4 { style: "margin: 0 0 4px 0; font-size: 15px;", "{item.title}" }
                            p { style: "margin: 0; font-size: 12px; color: #cbd5e1;", "{item.subtitle}" }
                        }
                    }
                }
            })}
        }
    }
}

/// Fullscreen viewer over the full set.
///
/// Navigation wraps at both ends. Escape or a click on the backdrop closes,
/// the arrow keys step through the set.
#[component]
pub fn GalleryLightbox(
    view: GalleryView,
    index: usize,
    on_navigate: EventHandler<usize>,
    on_close: EventHandler<()>,
) -> Element {
    let count = view.len();
    if count == 0 {
        return rsx! {};
    }
    let index = view.clamp_index(index);
    let prev = view.prev_index(index);
    let next = view.next_index(index);
    let item = view.items[index].clone();

    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.95); z-index: 1000; display: flex; flex-direction: column; outline: none;",
            tabindex: "0",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onkeydown: move |e: KeyboardEvent| match e.key() {
                Key::Escape => on_close.call(()),
                Key::ArrowLeft if count > 1 => on_navigate.call(prev),
                Key::ArrowRight if count > 1 => on_navigate.call(next),
                _ => {}
            },
            onclick: move |_| on_close.call(()),
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 16px; background: rgba(0, 0, 0, 0.7);",
                onclick: move |e| e.stop_propagation(),
                div { style: "color: white; font-size: 16px;", "{index + 1} / {count}" }
                button {
                    style: "width: 40px; height: 40px; background: rgba(255, 255, 255, 0.2); color: white; border-radius: 50%; font-size: 24px; cursor: pointer; border: none;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div {
                style: "flex: 1; display: flex; align-items: center; justify-content: center; padding: 20px; position: relative;",
                if count > 1 {
                    button {
                        style: "position: absolute; left: 20px; width: 50px; height: 50px; background: rgba(255, 255, 255, 0.3); color: white; border-radius: 50%; font-size: 24px; cursor: pointer; border: none;",
                        onclick: move |e| {
                            e.stop_propagation();
                            on_navigate.call(prev);
                        },
                        "‹"
                    }
                }
                img {
                    src: "{item.full_size_url}",
                    alt: "{item.caption}",
                    style: "max-width: 100%; max-height: 100%; object-fit: contain;",
                    onclick: move |e| e.stop_propagation(),
                }
                if count > 1 {
                    button {
                        style: "position: absolute; right: 20px; width: 50px; height: 50px; background: rgba(255, 255, 255, 0.3); color: white; border-radius: 50%; font-size: 24px; cursor: pointer; border: none;",
                        onclick: move |e| {
                            e.stop_propagation();
                            on_navigate.call(next);
                        },
                        "›"
                    }
                }
            }
            div {
                style: "text-align: center; padding: 16px; color: white; font-size: 16px;",
                onclick: move |e| e.stop_propagation(),
                "{item.caption}"
            }
        }
    }
}
