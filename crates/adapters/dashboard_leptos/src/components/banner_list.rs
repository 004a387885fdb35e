//! Dismissible error banners, newest first.

use leptos::prelude::*;
use ripdash_domain::render::Banner;

/// Prepend `banner` above the existing ones.
pub fn push_banner(banners: RwSignal<Vec<(u32, Banner)>>, banner: Banner) {
    banners.update(|list| {
        let id = list.iter().map(|(id, _)| *id).max().map_or(0, |max| max + 1);
        list.insert(0, (id, banner));
    });
}

/// Renders every banner; the close button removes it.
#[component]
pub fn BannerList(banners: RwSignal<Vec<(u32, Banner)>>) -> impl IntoView {
    move || {
        banners
            .get()
            .into_iter()
            .map(|(id, banner)| {
                let dismiss =
                    move |_| banners.update(|list| list.retain(|(other, _)| *other != id));
                view! {
                    <div class="alert alert-danger alert-dismissible fade show" role="alert">
                        {banner.message}
                        {banner.dismissible.then(|| view! {
                            <button type="button" class="btn-close" on:click=dismiss></button>
                        })}
                    </div>
                }
            })
            .collect_view()
    }
}
