#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, Level};
use prodcat_core::{
    data::Catalog,
    view::{render, test_id, TableAction, TableState, NO_MATCHING_MESSAGE},
};

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting app");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    dioxus::desktop::use_window().window.set_always_on_top(false);

    let catalog = use_hook(|| Rc::new(Catalog::builtin()));
    let mut state = use_signal(TableState::new);

    let catalog = match catalog.as_ref() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(%err, "builtin catalog is invalid");
            return rsx! { p { class: "has-text-danger", "{err}" } };
        }
    };
    let view = render(catalog, &state.read());

    rsx! {
        div { class: "section",
            div { class: "container",
                h1 { class: "title", "Product Categories" }
                div { class: "block",
                    nav { class: "panel",
                        p { class: "panel-heading", "Filters" }

                        p { class: "panel-tabs has-text-weight-bold",
                            a {
                                "data-cy": test_id::FILTER_ALL_USERS,
                                href: "#/",
                                class: "{view.all_users_class}",
                                onclick: move |_| state.write().dispatch(TableAction::SelectOwner(None)),
                                "All"
                            }
                            {view.owner_tabs.iter().map(|tab| {
                                let name = tab.name.clone();
                                rsx! {
                                    a {
                                        key: "{tab.name}",
                                        "data-cy": test_id::FILTER_USER,
                                        href: "#/",
                                        class: "{tab.class}",
                                        onclick: move |_| {
                                            state.write().dispatch(TableAction::SelectOwner(Some(name.clone())))
                                        },
                                        "{tab.name}"
                                    }
                                }
                            })}
                        }

                        div { class: "panel-block",
                            p { class: "control has-icons-left has-icons-right",
                                input {
                                    "data-cy": test_id::SEARCH_FIELD,
                                    r#type: "text",
                                    class: "input",
                                    placeholder: "Search",
                                    value: "{view.search.query}",
                                    oninput: move |ev| {
                                        state.write().dispatch(TableAction::SetSearchQuery(ev.value()))
                                    }
                                }
                                span {
                                    class: "icon is-left",
                                    onclick: move |_| state.write().dispatch(TableAction::ClearSearch),
                                    i { class: "fas fa-search" }
                                }
                                if view.search.show_clear {
                                    span { class: "icon is-right",
                                        button {
                                            "data-cy": test_id::CLEAR_BUTTON,
                                            r#type: "button",
                                            class: "delete",
                                            onclick: move |_| state.write().dispatch(TableAction::ClearSearch)
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "panel-block is-flex-wrap-wrap",
                            a {
                                "data-cy": test_id::ALL_CATEGORIES,
                                href: "#/",
                                class: "{view.all_categories_class}",
                                onclick: move |_| state.write().dispatch(TableAction::ClearCategories),
                                "All"
                            }
                            {view.category_buttons.iter().map(|button| {
                                let id = button.id;
                                rsx! {
                                    a {
                                        key: "{id.0}",
                                        "data-cy": test_id::FILTER_CATEGORY,
                                        href: "#/",
                                        class: "{button.class}",
                                        onclick: move |_| state.write().dispatch(TableAction::ToggleCategory(id)),
                                        span { "{button.title}" }
                                    }
                                }
                            })}
                        }

                        div { class: "panel-block",
                            a {
                                "data-cy": test_id::RESET_ALL_BUTTON,
                                href: "#/",
                                class: "button is-link is-outlined is-fullwidth",
                                onclick: move |_| state.write().dispatch(TableAction::ResetAll),
                                "Reset all filters"
                            }
                        }
                    }

                    div { class: "box table-container",
                        table {
                            "data-cy": test_id::PRODUCT_TABLE,
                            class: "table is-striped is-narrow is-fullwidth",
                            thead {
                                tr {
                                    {view.headers.iter().map(|header| {
                                        let column = header.column;
                                        rsx! {
                                            th { key: "{header.class}", class: "{header.class}",
                                                span { class: "is-flex is-flex-wrap-nowrap",
                                                    "{header.title}"
                                                    a {
                                                        href: "#/",
                                                        onclick: move |_| state.write().dispatch(TableAction::Sort(column)),
                                                        span { class: "icon",
                                                            i {
                                                                "data-cy": test_id::SORT_ICON,
                                                                class: header.icon.class()
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    })}
                                }
                            }
                            tbody {
                                if view.is_empty() {
                                    p { "data-cy": test_id::NO_MATCHING_MESSAGE, "{NO_MATCHING_MESSAGE}" }
                                }
                                {view.rows.iter().map(|row| rsx! {
                                    tr { key: "{row.id.0}",
                                        td { class: "has-text-weight-bold", "{row.id.0}" }
                                        td { "{row.name}" }
                                        td { "{row.category}" }
                                        td {
                                            span { class: row.owner_class, "{row.owner}" }
                                        }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}
