// Users listing
use leptos::*;

use crate::api::query::{SortKey, SortOrder, UserListQuery};
use crate::api::use_api;
use crate::components::buttons::SortButton;
use crate::components::cards::{UserCard, UserCardSkeleton};
use crate::components::forms::SearchInput;
use crate::components::layout::{EmptyState, ErrorPanel, PageHeader};
use crate::components::modals::SidePanel;
use crate::components::pagination::{Pagination, PaginationInfo};
use crate::components::tables::{Table, TableBody, TableCell, TableHead, TableHeader, TableRow};
use crate::constants::{DEBOUNCE_SEARCH_MS, DEFAULT_PAGE};
use crate::hooks::{use_debounced, use_pagination, use_request, PageState, SortState};
use crate::pages::profile::ProfileSections;
use crate::types::api::Paginated;
use crate::types::User;
use crate::utils::{display_or_dash, format_date, user_full_name_last_first};

/// Which presentation the mobile card list shows.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ListState {
    Loading,
    Error,
    Empty,
    EmptySearch(String),
    Populated,
}

fn list_state(is_loading: bool, has_error: bool, row_count: usize, search: &str) -> ListState {
    if has_error {
        ListState::Error
    } else if is_loading {
        ListState::Loading
    } else if row_count == 0 {
        let term = search.trim();
        if term.is_empty() {
            ListState::Empty
        } else {
            ListState::EmptySearch(term.to_string())
        }
    } else {
        ListState::Populated
    }
}

/// The page info strip only makes sense next to actual rows; loading,
/// error and empty presentations carry their own messaging.
fn shows_pagination_info(state: &ListState) -> bool {
    matches!(state, ListState::Populated)
}

/// A new search term or page size invalidates the current offset, so the
/// page must go back to 1 before anything is fetched.
fn needs_page_reset(prev: Option<&(String, u32)>, next: &(String, u32), page: u32) -> bool {
    match prev {
        Some(prev) => prev != next && page != DEFAULT_PAGE,
        None => false,
    }
}

fn build_query(page: PageState, sort: SortState, search: String) -> UserListQuery {
    UserListQuery {
        page: page.page,
        limit: page.limit,
        sort_by: sort.key.unwrap_or(SortKey::LastName),
        sort_order: sort.order,
        search,
        is_active: None,
    }
}

/// Skeleton rows and skeleton cards both mirror the page size, so the
/// placeholder block is as tall as what the fetch will fill in.
fn skeleton_count(page: PageState) -> usize {
    page.limit as usize
}

#[component]
fn SortableHead(sort_key: SortKey, sort: RwSignal<SortState>) -> impl IntoView {
    view! {
        <TableHead on_click=Callback::new(move |_| sort.update(|s| s.toggle(sort_key)))>
            <div class="flex items-center gap-1">
                <span>{sort_key.label()}</span>
                <span class="text-xs text-indigo-600">
                    {move || {
                        let state = sort.get();
                        if !state.is_active(sort_key) {
                            ""
                        } else if state.order == SortOrder::Desc {
                            "↓"
                        } else {
                            "↑"
                        }
                    }}
                </span>
            </div>
        </TableHead>
    }
}

#[component]
fn ActivityBadge(is_active: bool) -> impl IntoView {
    if is_active {
        view! {
            <span class="inline-flex items-center rounded-full bg-green-100 px-2 py-0.5 text-xs font-medium text-green-800">
                "Activo"
            </span>
        }
    } else {
        view! {
            <span class="inline-flex items-center rounded-full bg-gray-100 px-2 py-0.5 text-xs font-medium text-gray-800">
                "Inactivo"
            </span>
        }
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = use_api();
    let list_req = use_request::<Paginated<User>>();
    let pagination = use_pagination();
    let sort = create_rw_signal(SortState::new(SortKey::LastName));
    let search = create_rw_signal(String::new());
    let debounced_search = use_debounced(
        Signal::derive(move || search.get()),
        DEBOUNCE_SEARCH_MS,
    );

    // Remembered so the retry button re-issues the exact failed request.
    let last_query = store_value(UserListQuery::default());

    let selected_user = create_rw_signal(None::<User>);
    let show_detail = create_rw_signal(false);

    let fetch = {
        let api = api.clone();
        move |query: UserListQuery| {
            last_query.set_value(query.clone());
            let api = api.clone();
            list_req.run(async move { api.get_all_users_paginated(&query).await });
        }
    };

    // Single fetch driver: any change to page, limit, sort or the debounced
    // search term lands here. When search or limit changed while the user
    // was on a deeper page, the page is reset first and the rerun triggered
    // by that reset performs the one and only fetch.
    let run_fetch = fetch.clone();
    create_effect(move |prev: Option<(String, u32)>| {
        let page_state = pagination.get();
        let sort_state = sort.get();
        let term = debounced_search.get();
        let key = (term.clone(), page_state.limit);

        if needs_page_reset(prev.as_ref(), &key, page_state.page) {
            pagination.reset_page();
            return key;
        }

        run_fetch(build_query(page_state, sort_state, term));
        key
    });

    let retry = {
        let fetch = fetch.clone();
        Callback::new(move |_| fetch(last_query.get_value()))
    };

    let meta = Signal::derive(move || list_req.data.get().map(|page| page.meta));
    let rows = Signal::derive(move || {
        list_req.data.get().map(|page| page.data).unwrap_or_default()
    });
    let is_loading = list_req.is_loading;
    let items_per_page = Signal::derive(move || pagination.get().limit);

    let on_previous_page = Callback::new(move |_| {
        if let Some(meta) = meta.get_untracked() {
            pagination.prev_page(&meta);
        }
    });
    let on_next_page = Callback::new(move |_| {
        if let Some(meta) = meta.get_untracked() {
            pagination.next_page(&meta);
        }
    });
    let on_items_per_page_change = Callback::new(move |limit: u32| pagination.set_limit(limit));

    let open_detail = move |user: User| {
        selected_user.set(Some(user));
        show_detail.set(true);
    };

    let empty_state = ViewFn::from(move || {
        let term = debounced_search.get();
        let term = term.trim();
        if term.is_empty() {
            view! {
                <EmptyState
                    title="No hay usuarios registrados"
                    description="Cuando se registren usuarios aparecerán en esta lista."
                />
            }
        } else {
            view! {
                <EmptyState
                    title="Sin resultados"
                    description=format!("No se encontraron resultados para \"{term}\"")
                />
            }
        }
    });
    let error_state = ViewFn::from(move || {
        let message = list_req
            .error
            .get()
            .map(|err| err.message())
            .unwrap_or_default();
        view! { <ErrorPanel message=message on_retry=retry/> }
    });

    view! {
        <div>
            <PageHeader title="Usuarios" description="Administra los usuarios registrados"/>

            <div class="mb-4 flex items-center gap-2">
                <SearchInput value=search placeholder="Buscar por nombre, correo o DNI"/>
                <div class="md:hidden">
                    <SortButton
                        on_click=Callback::new(move |_| {
                            sort.update(|s| {
                                let key = s.key.unwrap_or(SortKey::LastName);
                                s.toggle(key);
                            });
                        })
                        active=Signal::derive(move || sort.get().key.is_some())
                        descending=Signal::derive(move || sort.get().order == SortOrder::Desc)
                    />
                </div>
            </div>

            // Mobile: page info on top (only next to actual rows), then
            // the card list.
            <div class="mb-3 md:hidden">
                {move || {
                    let state = list_state(
                        is_loading.get(),
                        list_req.error.get().is_some(),
                        rows.get().len(),
                        &debounced_search.get(),
                    );
                    shows_pagination_info(&state)
                        .then(|| view! { <PaginationInfo meta=meta/> })
                }}
            </div>
            <div class="space-y-3 md:hidden">
                {move || {
                    let state = list_state(
                        is_loading.get(),
                        list_req.error.get().is_some(),
                        rows.get().len(),
                        &debounced_search.get(),
                    );
                    match state {
                        ListState::Loading => (0..skeleton_count(pagination.get()))
                            .map(|_| view! { <UserCardSkeleton/> })
                            .collect_view(),
                        ListState::Error => {
                            let message = list_req
                                .error
                                .get()
                                .map(|err| err.message())
                                .unwrap_or_default();
                            view! {
                                <div class="rounded-lg bg-white shadow">
                                    <ErrorPanel message=message on_retry=retry/>
                                </div>
                            }
                            .into_view()
                        }
                        ListState::Empty => view! {
                            <div class="rounded-lg bg-white shadow">
                                <EmptyState
                                    title="No hay usuarios registrados"
                                    description="Cuando se registren usuarios aparecerán en esta lista."
                                />
                            </div>
                        }
                        .into_view(),
                        ListState::EmptySearch(term) => view! {
                            <div class="rounded-lg bg-white shadow">
                                <EmptyState
                                    title="Sin resultados"
                                    description=format!("No se encontraron resultados para \"{term}\"")
                                />
                            </div>
                        }
                        .into_view(),
                        ListState::Populated => rows
                            .get()
                            .into_iter()
                            .map(|user| {
                                let on_select = user.clone();
                                view! {
                                    <UserCard
                                        user=user
                                        on_click=Callback::new(move |_| {
                                            open_detail(on_select.clone())
                                        })
                                    />
                                }
                            })
                            .collect_view(),
                    }
                }}
            </div>

            // Desktop: full table with sortable headers.
            <div class="rounded-lg bg-white shadow">
                <Table hide_mobile=true>
                    <TableHeader>
                        <SortableHead sort_key=SortKey::LastName sort=sort/>
                        <SortableHead sort_key=SortKey::Email sort=sort/>
                        <TableHead>"DNI"</TableHead>
                        <SortableHead sort_key=SortKey::IsActive sort=sort/>
                        <SortableHead sort_key=SortKey::CreatedAt sort=sort/>
                    </TableHeader>
                    <TableBody
                        is_loading=is_loading
                        column_count=5
                        skeleton_rows=Signal::derive(move || skeleton_count(pagination.get()))
                        empty_state=empty_state
                        error_state=error_state
                        show_empty_state=Signal::derive(move || rows.get().is_empty())
                        show_error_state=Signal::derive(move || list_req.error.get().is_some())
                    >
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|user| {
                                    let full_name = user_full_name_last_first(&user);
                                    let email = user.email.clone();
                                    let dni = display_or_dash(user.dni.clone());
                                    let is_active = user.is_active();
                                    let registered = format_date(&user.created_at.date_naive());
                                    let on_select = user.clone();
                                    view! {
                                        <TableRow
                                            clickable=true
                                            on_click=Callback::new(move |_| {
                                                open_detail(on_select.clone())
                                            })
                                        >
                                            <TableCell>
                                                <span class="font-medium capitalize">{full_name}</span>
                                            </TableCell>
                                            <TableCell>{email}</TableCell>
                                            <TableCell>{dni}</TableCell>
                                            <TableCell>
                                                <ActivityBadge is_active=is_active/>
                                            </TableCell>
                                            <TableCell>{registered}</TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
                <Pagination
                    meta=meta
                    on_previous_page=on_previous_page
                    on_next_page=on_next_page
                    items_per_page=items_per_page
                    on_items_per_page_change=on_items_per_page_change
                    is_loading=is_loading
                />
                <Pagination
                    meta=meta
                    on_previous_page=on_previous_page
                    on_next_page=on_next_page
                    items_per_page=items_per_page
                    on_items_per_page_change=on_items_per_page_change
                    is_loading=is_loading
                    is_mobile=true
                />
            </div>

            // Detail reuses the row already in memory; no extra request.
            <SidePanel title="Detalle del usuario" show=show_detail>
                {move || {
                    selected_user
                        .get()
                        .map(|user| view! { <ProfileSections user=user/> })
                }}
            </SidePanel>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_wins_over_loading_and_empty() {
        assert_eq!(list_state(true, true, 0, ""), ListState::Error);
        assert_eq!(list_state(false, true, 5, "ana"), ListState::Error);
    }

    #[test]
    fn loading_masks_empty() {
        assert_eq!(list_state(true, false, 0, ""), ListState::Loading);
        assert_eq!(list_state(true, false, 0, "ana"), ListState::Loading);
    }

    #[test]
    fn empty_distinguishes_active_search() {
        assert_eq!(list_state(false, false, 0, ""), ListState::Empty);
        assert_eq!(list_state(false, false, 0, "   "), ListState::Empty);
        assert_eq!(
            list_state(false, false, 0, " ana "),
            ListState::EmptySearch("ana".to_string())
        );
    }

    #[test]
    fn rows_render_when_present() {
        assert_eq!(list_state(false, false, 3, "ana"), ListState::Populated);
    }

    #[test]
    fn pagination_info_only_shows_next_to_rows() {
        assert!(shows_pagination_info(&ListState::Populated));
        assert!(!shows_pagination_info(&ListState::Loading));
        assert!(!shows_pagination_info(&ListState::Error));
        assert!(!shows_pagination_info(&ListState::Empty));
        assert!(!shows_pagination_info(&ListState::EmptySearch("ana".to_string())));
    }

    #[test]
    fn skeleton_count_follows_the_page_size() {
        assert_eq!(skeleton_count(PageState::default()), 10);
        assert_eq!(skeleton_count(PageState { page: 3, limit: 50 }), 50);
    }

    #[test]
    fn retry_replays_the_stored_query_unchanged() {
        let sort = SortState::new(SortKey::Email);
        let sent = build_query(
            PageState { page: 3, limit: 20 },
            sort,
            "ana".to_string(),
        );
        // the fetch path remembers a copy; retry re-issues that copy
        let remembered = sent.clone();
        assert_eq!(remembered, sent);
        assert_eq!(remembered.to_query_pairs(), sent.to_query_pairs());
        assert_eq!(remembered.page, 3);
        assert_eq!(remembered.sort_by, SortKey::Email);
        assert_eq!(remembered.search, "ana");
    }

    #[test]
    fn page_resets_only_when_search_or_limit_changed_off_page_one() {
        let initial = ("".to_string(), 10);
        let searched = ("ana".to_string(), 10);
        let resized = ("".to_string(), 20);

        // first run has no previous key
        assert!(!needs_page_reset(None, &initial, 5));
        // same key, deep page: plain page navigation
        assert!(!needs_page_reset(Some(&initial), &initial, 5));
        // changed key on page 1 fetches directly
        assert!(!needs_page_reset(Some(&initial), &searched, 1));
        // changed key on a deeper page resets first
        assert!(needs_page_reset(Some(&initial), &searched, 5));
        assert!(needs_page_reset(Some(&initial), &resized, 2));
    }
}
