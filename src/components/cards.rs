// Card components
use leptos::*;

use crate::types::User;
use crate::utils::{user_full_name_last_first, user_initials};

/// Mobile replacement for a table row: avatar, name, activity badge and
/// contact data. The whole card is clickable.
#[component]
pub fn UserCard(user: User, #[prop(into)] on_click: Callback<()>) -> impl IntoView {
    let initials = user_initials(&user);
    let full_name = user_full_name_last_first(&user);
    let is_active = user.is_active();
    let email = user.email.clone();
    let alias = user.profile.as_ref().and_then(|p| p.alias.clone());

    view! {
        <div
            class="cursor-pointer rounded-lg bg-white p-4 shadow transition-shadow hover:shadow-md md:hidden"
            on:click=move |_| on_click.call(())
        >
            <div class="mb-3 flex items-start gap-3">
                <div class="flex h-12 w-12 flex-shrink-0 items-center justify-center rounded-full bg-indigo-100 text-indigo-600">
                    <span class="text-sm font-semibold">{initials}</span>
                </div>
                <div class="min-w-0 flex-1">
                    <h3 class="truncate font-semibold capitalize text-gray-900">{full_name}</h3>
                    <div class="mt-1">
                        {if is_active {
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
                        }}
                    </div>
                </div>
            </div>
            <div class="space-y-2 text-sm text-gray-600">
                <div class="truncate">{email}</div>
                {alias.map(|alias| view! {
                    <div>
                        <span class="text-xs font-medium text-gray-500">"Alias: "</span>
                        <span class="text-gray-700">{alias}</span>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn UserCardSkeleton() -> impl IntoView {
    view! {
        <div class="rounded-lg bg-white p-4 shadow md:hidden">
            <div class="mb-3 flex items-start gap-3">
                <div class="h-12 w-12 animate-pulse rounded-full bg-gray-200"></div>
                <div class="flex-1 space-y-2">
                    <div class="h-4 w-2/3 animate-pulse rounded bg-gray-200"></div>
                    <div class="h-3 w-1/4 animate-pulse rounded bg-gray-200"></div>
                </div>
            </div>
            <div class="h-3 w-1/2 animate-pulse rounded bg-gray-200"></div>
        </div>
    }
}
