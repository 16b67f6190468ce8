use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::browser;
use crate::components::logo::TpLogo;
use crate::Route;

/// Scroll offset past which the bar shrinks into its floating form.
const COMPACT_SCROLL_Y: f64 = 100.0;

struct NavItem {
    name: &'static str,
    route: Route,
}

fn nav_items() -> [NavItem; 3] {
    [
        NavItem { name: "Dashboard", route: Route::Dashboard {} },
        NavItem { name: "Champions", route: Route::Home {} },
        NavItem { name: "Resources", route: Route::Resources {} },
    ]
}

fn is_compact(scroll_y: f64) -> bool {
    scroll_y > COMPACT_SCROLL_Y
}

/// Window scroll listener that unregisters itself when the navbar unmounts.
struct ScrollListener {
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    fn attach(mut compact: Signal<bool>) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(move || {
            let next = is_compact(browser::scroll_y());
            if *compact.peek() != next {
                compact.set(next);
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(ScrollListener { callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

#[component]
pub fn Navbar(#[props(default)] show_auth_buttons: bool) -> Element {
    let current: Route = use_route();
    let compact = use_signal(|| is_compact(browser::scroll_y()));
    let mut hovered = use_signal(|| None::<usize>);
    let mut menu_open = use_signal(|| false);

    let _listener = use_hook(|| Rc::new(ScrollListener::attach(compact)));

    let mut go = move |route: Route| {
        menu_open.set(false);
        navigator().push(route);
    };

    let items = nav_items();

    rsx! {
        div { class: "navbar", class: if *compact.read() { "navbar--compact" },
            // Desktop
            div { class: "nav-body",
                button {
                    class: "nav-logo",
                    "aria-label": "Go to home page",
                    onclick: move |_| go(Route::Home {}),
                    TpLogo { size: 40.0 }
                }
                nav { class: "nav-items", onmouseleave: move |_| hovered.set(None),
                    for (idx, item) in items.iter().enumerate() {
                        a {
                            key: "{item.name}",
                            class: "nav-item",
                            class: if current == item.route { "nav-item--active" },
                            class: if *hovered.read() == Some(idx) { "nav-item--hovered" },
                            href: "{item.route}",
                            "aria-current": if current == item.route { "page" },
                            onmouseenter: move |_| hovered.set(Some(idx)),
                            onclick: {
                                let route = item.route.clone();
                                move |evt: Event<MouseData>| {
                                    evt.prevent_default();
                                    go(route.clone());
                                }
                            },
                            "{item.name}"
                        }
                    }
                }
                if show_auth_buttons {
                    div { class: "nav-auth",
                        button { class: "nav-button nav-button--secondary", "Login" }
                        button {
                            class: "nav-button nav-button--primary",
                            onclick: move |_| go(Route::GetStarted {}),
                            "Get Started"
                        }
                    }
                }
            }

            // Mobile
            div { class: "mobile-nav",
                div { class: "mobile-nav-header",
                    button {
                        class: "nav-logo",
                        "aria-label": "Go to home page",
                        onclick: move |_| go(Route::Home {}),
                        TpLogo { size: 36.0 }
                    }
                    button {
                        class: "mobile-nav-toggle",
                        "aria-label": if *menu_open.read() { "Close menu" } else { "Open menu" },
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| {
                            let open = *menu_open.read();
                            menu_open.set(!open);
                        },
                        if *menu_open.read() { "\u{2715}" } else { "\u{2630}" }
                    }
                }
                if *menu_open.read() {
                    div { class: "mobile-nav-menu",
                        for item in items.iter() {
                            a {
                                key: "mobile-{item.name}",
                                class: "mobile-nav-link",
                                class: if current == item.route { "mobile-nav-link--active" },
                                href: "{item.route}",
                                "aria-current": if current == item.route { "page" },
                                onclick: {
                                    let route = item.route.clone();
                                    move |evt: Event<MouseData>| {
                                        evt.prevent_default();
                                        go(route.clone());
                                    }
                                },
                                "{item.name}"
                            }
                        }
                        if show_auth_buttons {
                            div { class: "mobile-nav-auth",
                                button {
                                    class: "nav-button nav-button--secondary",
                                    onclick: move |_| menu_open.set(false),
                                    "Login"
                                }
                                button {
                                    class: "nav-button nav-button--primary",
                                    onclick: move |_| go(Route::GetStarted {}),
                                    "Get Started"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_threshold() {
        assert!(!is_compact(0.0));
        assert!(!is_compact(100.0));
        assert!(is_compact(100.5));
        // A page restored mid-scroll starts compact
        assert!(is_compact(640.0));
    }

    #[test]
    fn test_nav_items_point_at_portal_sections() {
        let paths: Vec<String> = nav_items().iter().map(|i| i.route.to_string()).collect();
        assert_eq!(paths, ["/dashboard", "/", "/resources"]);
    }
}
