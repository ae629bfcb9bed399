use leptos::prelude::*;

use crate::mindmap::AbstractDetail;

/// Detail dialog for one abstract. Hidden while `detail` is `None`.
#[component]
pub fn AbstractModal(
	#[prop(into)] detail: Signal<Option<AbstractDetail>>,
	#[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
	view! {
		<Show when=move || detail.with(Option::is_some)>
			<div class="modal-backdrop" on:click=move |_| on_close.run(())>
				<div
					class="modal-dialog"
					role="dialog"
					aria-modal="true"
					on:click=|ev| ev.stop_propagation()
				>
					<header class="modal-header">
						<h2>"Abstract"</h2>
						<button class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>
							"×"
						</button>
					</header>
					<p class="modal-abstract">
						{move || detail.with(|d| d.as_ref().map(|d| d.text.clone()).unwrap_or_default())}
					</p>
					<h3>"Keywords"</h3>
					<ul class="keyword-list">
						{move || {
							detail
								.get()
								.map(|d| d.keywords)
								.unwrap_or_default()
								.into_iter()
								.map(|kw| view! { <li class="keyword-badge">{kw}</li> })
								.collect_view()
						}}
					</ul>
				</div>
			</div>
		</Show>
	}
}
