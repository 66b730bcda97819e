use leptos::*;
use leptonic::prelude::*;
use prodcat_core::{
    data::Catalog,
    view::{render, test_id, TableAction, TableState, TableView, NO_MATCHING_MESSAGE},
};

fn main() {
    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => panic!("builtin catalog is invalid: {err}"),
    };
    logging::log!("Loaded {} products", catalog.products().len());

    mount_to_body(move || view! { <App catalog/> });
}

#[component]
fn App(catalog: Catalog) -> impl IntoView {
    let catalog = store_value(catalog);
    let state = create_rw_signal(TableState::new());
    let table_view = create_memo(move |_| {
        logging::log!("Recomputing product table");
        catalog.with_value(|catalog| state.with(|state| render(catalog, state)))
    });

    view! {
        <Root default_theme=LeptonicTheme::default()>
            <div class="section">
                <div class="container">
                    <h1 class="title">"Product Categories"</h1>
                    <div class="block">
                        <FilterPanel state table_view/>
                        <ProductTable state table_view/>
                    </div>
                </div>
            </div>
        </Root>
    }
}

fn dispatch(state: RwSignal<TableState>, action: TableAction) {
    state.update(|state| state.dispatch(action));
}

#[component]
fn FilterPanel(state: RwSignal<TableState>, table_view: Memo<TableView>) -> impl IntoView {
    let owner_tabs = move || {
        table_view.with(|view| view.owner_tabs.clone()).into_iter().map(|tab| {
            let name = tab.name.clone();
            view! {
                <a
                    data-cy=test_id::FILTER_USER
                    href="#/"
                    class=tab.class
                    on:click=move |_| dispatch(state, TableAction::SelectOwner(Some(name.clone())))
                >{tab.name}</a>
            }
        }).collect_view()
    };

    let category_buttons = move || {
        table_view.with(|view| view.category_buttons.clone()).into_iter().map(|button| {
            let id = button.id;
            view! {
                <a
                    data-cy=test_id::FILTER_CATEGORY
                    href="#/"
                    class=button.class
                    on:click=move |_| dispatch(state, TableAction::ToggleCategory(id))
                >
                    <span>{button.title}</span>
                </a>
            }
        }).collect_view()
    };

    let clear_button = move || {
        table_view.with(|view| view.search.show_clear).then(|| view! {
            <span class="icon is-right">
                <button
                    data-cy=test_id::CLEAR_BUTTON
                    type="button"
                    class="delete"
                    on:click=move |_| dispatch(state, TableAction::ClearSearch)
                ></button>
            </span>
        })
    };

    view! {
        <nav class="panel">
            <p class="panel-heading">"Filters"</p>

            <p class="panel-tabs has-text-weight-bold">
                <a
                    data-cy=test_id::FILTER_ALL_USERS
                    href="#/"
                    class=move || table_view.with(|view| view.all_users_class.clone())
                    on:click=move |_| dispatch(state, TableAction::SelectOwner(None))
                >"All"</a>
                {owner_tabs}
            </p>

            <div class="panel-block">
                <p class="control has-icons-left has-icons-right">
                    <input
                        data-cy=test_id::SEARCH_FIELD
                        type="text"
                        class="input"
                        placeholder="Search"
                        prop:value=move || table_view.with(|view| view.search.query.clone())
                        on:input=move |ev| {
                            dispatch(state, TableAction::SetSearchQuery(event_target_value(&ev)))
                        }
                    />
                    <span
                        class="icon is-left"
                        on:click=move |_| dispatch(state, TableAction::ClearSearch)
                    >
                        <i class="fas fa-search" aria-hidden="true"></i>
                    </span>
                    {clear_button}
                </p>
            </div>

            <div class="panel-block is-flex-wrap-wrap">
                <a
                    data-cy=test_id::ALL_CATEGORIES
                    href="#/"
                    class=move || table_view.with(|view| view.all_categories_class.clone())
                    on:click=move |_| dispatch(state, TableAction::ClearCategories)
                >"All"</a>
                {category_buttons}
            </div>

            <div class="panel-block">
                <a
                    data-cy=test_id::RESET_ALL_BUTTON
                    href="#/"
                    class="button is-link is-outlined is-fullwidth"
                    on:click=move |_| dispatch(state, TableAction::ResetAll)
                >"Reset all filters"</a>
            </div>
        </nav>
    }
}

#[component]
fn ProductTable(state: RwSignal<TableState>, table_view: Memo<TableView>) -> impl IntoView {
    let headers = move || {
        table_view.with(|view| view.headers.clone()).into_iter().map(|header| {
            let column = header.column;
            view! {
                <th class=header.class>
                    <span class="is-flex is-flex-wrap-nowrap">
                        {header.title}
                        <a href="#/" on:click=move |_| dispatch(state, TableAction::Sort(column))>
                            <span class="icon">
                                <i data-cy=test_id::SORT_ICON class=header.icon.class()></i>
                            </span>
                        </a>
                    </span>
                </th>
            }
        }).collect_view()
    };

    let body = move || {
        let rows = table_view.with(|view| view.rows.clone());
        if rows.is_empty() {
            return view! {
                <p data-cy=test_id::NO_MATCHING_MESSAGE>{NO_MATCHING_MESSAGE}</p>
            }.into_view();
        }
        rows.into_iter().map(|row| view! {
            <tr>
                <td class="has-text-weight-bold">{row.id.0}</td>
                <td>{row.name}</td>
                <td>{row.category}</td>
                <td>
                    <span class=row.owner_class>{row.owner}</span>
                </td>
            </tr>
        }).collect_view()
    };

    view! {
        <div class="box table-container">
            <table
                data-cy=test_id::PRODUCT_TABLE
                class="table is-striped is-narrow is-fullwidth"
            >
                <thead>
                    <tr>{headers}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
